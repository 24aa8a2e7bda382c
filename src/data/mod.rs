//! Data module - launch record model and CSV loading

mod loader;
mod record;

pub use loader::{DatasetLoader, LoaderError};
pub use record::{Dataset, LaunchRecord, PayloadBounds, SiteFilter, ALL_SITES};
