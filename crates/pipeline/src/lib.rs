//! Trend aggregation over the observation store.
//!
//! [`resolver`] turns a lookback window into a single historical value;
//! [`aggregation`] records the current cutoffs and builds the per-tier trend
//! records for one run.

pub mod aggregation;
pub mod resolver;

pub use aggregation::{AggregationDriver, TierTrends};
pub use resolver::resolve;
