use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global subscriber. Logs go to stderr; stdout carries the sweep report.
///
/// A second call leaves the first subscriber in place.
pub fn init_logging(verbose: bool, no_color: bool) {
    let configured = std::env::var("TCT_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(resolve_filter(verbose, configured.as_deref()))
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

/// Picks the filter: an explicit directive wins, falling back to `info` when it
/// does not parse. Without one, `--verbose` selects `debug`.
#[must_use]
pub fn resolve_filter(verbose: bool, configured: Option<&str>) -> EnvFilter {
    configured.map_or_else(
        || {
            if verbose {
                EnvFilter::new("debug")
            } else {
                EnvFilter::new("info")
            }
        },
        |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
    )
}
