//! Per-tab content renderers.

pub mod calendar;
pub mod dashboard;
pub mod jobs;
