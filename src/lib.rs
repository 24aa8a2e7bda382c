//! Launch Records Dashboard
//!
//! Explore launch records by site and payload mass. The `data` and `stats`
//! modules hold the selection logic and need no window; `gui` and `charts`
//! present their results.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod stats;
