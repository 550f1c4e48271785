use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tokio::time::{Instant, sleep};
use tracing::{debug, error, info};

use crate::http::RequestPerformer;
use crate::shutdown::ShutdownSignal;

use super::report::LevelSink;
use super::types::{BestRecord, LevelResult, SweepConfig, SweepOutcome, SweepStatus};

/// How a single request task ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskOutcome {
    Sent,
    Skipped,
}

/// Drives the level loop. Owns the best record; tasks only see the performer
/// and the shutdown signal.
#[derive(Debug, Clone)]
pub struct SweepController {
    performer: RequestPerformer,
    shutdown: ShutdownSignal,
}

impl SweepController {
    #[must_use]
    pub const fn new(performer: RequestPerformer, shutdown: ShutdownSignal) -> Self {
        Self {
            performer,
            shutdown,
        }
    }

    /// Sweeps levels `1..=max_level` in order, emitting each result to `sink`.
    ///
    /// Cancellation is checked before each level and by each task before it
    /// sends; requests already in flight are always awaited.
    pub async fn run(&self, config: &SweepConfig, sink: &mut dyn LevelSink) -> SweepOutcome {
        let url: Arc<str> = Arc::from(config.url.as_str());
        let mut best = BestRecord::unset();
        let mut levels_completed = 0usize;

        for level in 1..=config.max_level.get() {
            if self.shutdown.is_triggered() {
                info!(
                    "Sweep cancelled before level {} of {}.",
                    level,
                    config.max_level.get()
                );
                return SweepOutcome {
                    best,
                    status: SweepStatus::Cancelled,
                    levels_completed,
                };
            }

            let result = self.run_level(level, &url, config.delay, sink).await;
            sink.record(&result);
            if best.observe(&result) {
                debug!("New best: level {} in {:?}", result.level, result.elapsed);
            }
            levels_completed = level;
        }

        SweepOutcome {
            best,
            status: SweepStatus::Completed,
            levels_completed,
        }
    }

    /// Fans out `level` request tasks and waits for every one of them.
    async fn run_level(
        &self,
        level: usize,
        url: &Arc<str>,
        delay: Duration,
        sink: &mut dyn LevelSink,
    ) -> LevelResult {
        let start = Instant::now();
        let mut tasks = JoinSet::new();

        for _ in 0..level {
            let performer = self.performer.clone();
            let shutdown = self.shutdown.clone();
            let url = Arc::clone(url);
            tasks.spawn(async move {
                if shutdown.is_triggered() {
                    return TaskOutcome::Skipped;
                }
                if !delay.is_zero() {
                    sleep(delay).await;
                }
                performer.perform(&url).await;
                TaskOutcome::Sent
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(TaskOutcome::Skipped) => sink.task_cancelled(level),
                Ok(TaskOutcome::Sent) => {}
                Err(err) => {
                    error!("Request task at level {} did not finish cleanly: {}", level, err);
                }
            }
        }

        LevelResult {
            level,
            elapsed: start.elapsed(),
        }
    }
}
