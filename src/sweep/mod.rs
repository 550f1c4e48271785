//! Concurrency sweep: run levels 1..=max, time each batch, keep the fastest.
mod controller;
mod report;
mod types;


pub use controller::SweepController;
pub use report::{CANCELLED_NOTICE, LevelSink, Reporter, StdoutReporter, format_duration};
pub use types::{BestRecord, LevelResult, SweepConfig, SweepOutcome, SweepStatus};
