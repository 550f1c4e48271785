use std::io::Write;
use std::time::Duration;

use super::types::{BestRecord, LevelResult};

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3_600;

/// Receives each level's result as soon as the level's batch has joined.
pub trait LevelSink {
    fn record(&mut self, result: &LevelResult);

    /// Called once per task that saw cancellation before sending its request.
    fn task_cancelled(&mut self, _level: usize) {}
}

impl LevelSink for Vec<LevelResult> {
    fn record(&mut self, result: &LevelResult) {
        self.push(*result);
    }
}

/// Printed for each task that skipped its request after cancellation.
pub const CANCELLED_NOTICE: &str = "Operation cancelled.";

/// Writes the plain-text sweep report: one `Parallel Requests` line per level,
/// a cancellation notice per skipped task, and the closing optimal line.
///
/// Output is best-effort; write failures are ignored.
#[derive(Debug)]
pub struct Reporter<W> {
    out: W,
}

pub type StdoutReporter = Reporter<std::io::Stdout>;

impl Reporter<std::io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_optimal(&mut self, best: BestRecord) {
        drop(writeln!(
            self.out,
            "\nOptimal Number of Parallel TCP Requests: {}",
            best.level()
        ));
        drop(self.out.flush());
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LevelSink for Reporter<W> {
    fn record(&mut self, result: &LevelResult) {
        drop(writeln!(
            self.out,
            "Parallel Requests: {}, Time Taken: {}",
            result.level,
            format_duration(result.elapsed)
        ));
    }

    fn task_cancelled(&mut self, _level: usize) {
        drop(writeln!(self.out, "{}", CANCELLED_NOTICE));
    }
}

/// Renders a duration in the largest fitting unit with trailing zeros trimmed,
/// e.g. `850ns`, `12.5µs`, `1.234567ms`, `2.5s`, `1m3.2s`.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_owned();
    }
    if nanos < NANOS_PER_MICRO {
        return format!("{}ns", nanos);
    }
    if nanos < NANOS_PER_MILLI {
        return format!("{}µs", decimal(nanos, NANOS_PER_MICRO, 3));
    }
    if nanos < NANOS_PER_SEC {
        return format!("{}ms", decimal(nanos, NANOS_PER_MILLI, 6));
    }

    let total_secs = duration.as_secs();
    let hours = total_secs / SECS_PER_HOUR;
    let minutes = (total_secs % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let secs_nanos = u128::from(total_secs % SECS_PER_MINUTE)
        .saturating_mul(NANOS_PER_SEC)
        .saturating_add(u128::from(duration.subsec_nanos()));
    let seconds = decimal(secs_nanos, NANOS_PER_SEC, 9);

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

fn decimal(value: u128, unit: u128, width: usize) -> String {
    let whole = value / unit;
    let frac = value % unit;
    if frac == 0 {
        return whole.to_string();
    }
    let digits = format!("{:0width$}", frac, width = width);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}
