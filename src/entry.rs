use std::sync::Arc;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::info;

use crate::args::SweepArgs;
use crate::error::AppResult;
use crate::http::{ReqwestTransport, RequestPerformer};
use crate::shutdown::ShutdownSignal;
use crate::shutdown_handlers::setup_signal_shutdown_handler;
use crate::sweep::{StdoutReporter, SweepConfig, SweepController, SweepStatus, format_duration};

/// Parses the command line, applies any config file, and runs the sweep.
///
/// Invalid arguments make clap print usage and exit with status 2 before the
/// sweep starts. A cancelled sweep is a normal exit.
///
/// # Errors
///
/// Returns an error when the config file is invalid or the runtime or HTTP
/// client cannot be built.
pub fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    crate::logger::init_logging(args.verbose, args.no_color);

    apply_config(&mut args, &matches)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let config = SweepConfig::from(&args);
    runtime.block_on(run_sweep(&config))
}

fn parse_args() -> AppResult<(SweepArgs, ArgMatches)> {
    let matches = SweepArgs::command().get_matches();
    let args = SweepArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn apply_config(args: &mut SweepArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(args, matches, &config)?;
    }
    Ok(())
}

async fn run_sweep(config: &SweepConfig) -> AppResult<()> {
    let transport = ReqwestTransport::new()?;
    let shutdown = ShutdownSignal::new();
    let signal_handler = setup_signal_shutdown_handler(&shutdown);
    let controller = SweepController::new(RequestPerformer::new(Arc::new(transport)), shutdown);

    info!(
        "Sweeping {} with 1..={} parallel requests (delay {}).",
        config.url,
        config.max_level.get(),
        format_duration(config.delay)
    );

    let mut reporter = StdoutReporter::stdout();
    let outcome = controller.run(config, &mut reporter).await;
    signal_handler.abort();

    if outcome.status == SweepStatus::Cancelled {
        info!(
            "Sweep cancelled after {} of {} levels.",
            outcome.levels_completed,
            config.max_level.get()
        );
    }
    reporter.write_optimal(outcome.best);
    Ok(())
}
