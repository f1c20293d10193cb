//! Domain types and pure logic for apex-tier LP cutoff tracking.
//!
//! Nothing in this crate performs I/O. Storage lives in `lpwatch-db`, the
//! store-backed window lookup and the aggregation driver live in
//! `lpwatch-pipeline`.

pub mod cutoff;
pub mod error;
pub mod observation;
pub mod tier;
pub mod trend;
pub mod types;
pub mod window;
