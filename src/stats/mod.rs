//! Stats module - outcome aggregation and payload selection

mod aggregator;
mod selector;

pub use aggregator::{OutcomeAggregator, OutcomeSummary, SiteSuccess};
pub use selector::{PayloadRange, PayloadSelection, PayloadSelector, RangeError, AXIS_MARGIN_KG};
