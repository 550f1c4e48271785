use tracing::{error, info, warn};

use crate::shutdown::ShutdownSignal;

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

/// Exit status used when a second interrupt forces the process down.
const FORCED_EXIT_CODE: i32 = 130;

/// Triggers `shutdown` on Ctrl+C or SIGTERM.
///
/// The first interrupt only stops new requests and levels; requests already in
/// flight are left to finish. A second interrupt exits the process at once.
pub fn setup_signal_shutdown_handler(shutdown: &ShutdownSignal) -> tokio::task::JoinHandle<()> {
    let shutdown = shutdown.clone();
    tokio::spawn(async move {
        #[cfg(unix)]
        let mut term_signal = match signal(SignalKind::terminate()) {
            Ok(signal) => Some(signal),
            Err(err) => {
                warn!("Failed to register SIGTERM handler: {}", err);
                None
            }
        };

        #[cfg(unix)]
        {
            tokio::select! {
                () = shutdown.triggered() => return,
                result = tokio::signal::ctrl_c() => {
                    if let Err(err) = result {
                        error!("Failed to listen for Ctrl+C: {}", err);
                        return;
                    }
                }
                () = async {
                    if let Some(signal) = term_signal.as_mut() {
                        signal.recv().await;
                    } else {
                        std::future::pending::<()>().await;
                    }
                } => {}
            }
        }

        #[cfg(not(unix))]
        {
            tokio::select! {
                () = shutdown.triggered() => return,
                result = tokio::signal::ctrl_c() => {
                    if let Err(err) = result {
                        error!("Failed to listen for Ctrl+C: {}", err);
                        return;
                    }
                }
            }
        }

        info!("Interrupt received; waiting for in-flight requests to finish.");
        shutdown.trigger();

        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Second interrupt received; exiting without waiting.");
            std::process::exit(FORCED_EXIT_CODE);
        }
    })
}
