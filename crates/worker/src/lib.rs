//! One-shot cutoff tracking run and its supporting pieces.
//!
//! The `lpwatch-worker` binary is meant to be invoked by an external
//! scheduler about once an hour; at most one invocation may run at a time.

pub mod config;
pub mod run;
pub mod seed;
pub mod telemetry;

pub use config::{ConfigError, StoreConfig, WorkerConfig};
pub use run::{run_once, RunError, RunOutcome};
