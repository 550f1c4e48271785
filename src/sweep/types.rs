use std::time::Duration;

use crate::args::{PositiveUsize, SweepArgs};

/// Immutable inputs for one sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    pub url: String,
    pub max_level: PositiveUsize,
    pub delay: Duration,
}

impl From<&SweepArgs> for SweepConfig {
    fn from(args: &SweepArgs) -> Self {
        Self {
            url: args.url.clone(),
            max_level: args.max_level,
            delay: args.delay,
        }
    }
}

/// Wall-clock time taken by one fully joined batch of `level` requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelResult {
    pub level: usize,
    pub elapsed: Duration,
}

/// Fastest level seen so far; unset until the first level completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestRecord(Option<LevelResult>);

impl BestRecord {
    #[must_use]
    pub const fn unset() -> Self {
        Self(None)
    }

    /// Replaces the record when `result` is strictly faster. Ties keep the
    /// earlier, lower level. Returns whether the record changed.
    pub fn observe(&mut self, result: &LevelResult) -> bool {
        let improves = self
            .0
            .is_none_or(|current| result.elapsed < current.elapsed);
        if improves {
            self.0 = Some(*result);
        }
        improves
    }

    #[must_use]
    pub const fn get(self) -> Option<LevelResult> {
        self.0
    }

    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0.is_some()
    }

    /// Best level, or 0 when no level completed.
    #[must_use]
    pub fn level(self) -> usize {
        self.0.map_or(0, |best| best.level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepStatus {
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepOutcome {
    pub best: BestRecord,
    pub status: SweepStatus,
    pub levels_completed: usize,
}
