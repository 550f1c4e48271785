use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::path::Path;
use std::process::{Child, Command, Output, Stdio};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub struct ServerHandle {
    hits: Arc<AtomicUsize>,
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl ServerHandle {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a lightweight HTTP server that counts the requests it answers.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_http_server() -> Result<(String, ServerHandle), String> {
    spawn_http_server_with_latency(Duration::ZERO)
}

/// Like [`spawn_http_server`], but every response is held back for `latency`.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_http_server_with_latency(
    latency: Duration,
) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let hits = Arc::new(AtomicUsize::new(0));
    let (shutdown_tx, shutdown_rx) = mpsc::channel();

    let server_hits = Arc::clone(&hits);
    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let hits = Arc::clone(&server_hits);
                    thread::spawn(move || handle_client(stream, &hits, latency));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}/", addr),
        ServerHandle {
            hits,
            shutdown: shutdown_tx,
            thread: Some(handle),
        },
    ))
}

fn handle_client(mut stream: TcpStream, hits: &AtomicUsize, latency: Duration) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let mut buffer = [0u8; 1024];
    if stream.read(&mut buffer).is_err() {
        return;
    }
    hits.fetch_add(1, Ordering::SeqCst);
    if !latency.is_zero() {
        thread::sleep(latency);
    }
    if stream
        .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK")
        .is_err()
    {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Returns a URL on a local port with nothing listening.
///
/// # Errors
///
/// Returns an error if a temporary listener cannot be bound.
pub fn closed_port_url() -> Result<String, String> {
    let listener =
        TcpListener::bind("127.0.0.1:0").map_err(|err| format!("bind failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}/", addr))
}

/// Run the `tct` binary inside `cwd` and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_tct<I, S>(cwd: &Path, args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = tct_bin()?;
    tct_command(&bin, cwd)
        .args(args)
        .output()
        .map_err(|err| format!("run tct failed: {}", err))
}

/// Start the `tct` binary inside `cwd` with piped stdout and stderr.
///
/// # Errors
///
/// Returns an error if the binary cannot be started.
pub fn spawn_tct<I, S>(cwd: &Path, args: I) -> Result<Child, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = tct_bin()?;
    tct_command(&bin, cwd)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| format!("spawn tct failed: {}", err))
}

fn tct_command(bin: &str, cwd: &Path) -> Command {
    let mut command = Command::new(bin);
    command
        .current_dir(cwd)
        .env("RUST_LOG", "error")
        .env_remove("TCT_LOG")
        .env_remove("NO_COLOR")
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy");
    command
}

fn tct_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_tct").map_or_else(
        || Err("CARGO_BIN_EXE_tct missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}

/// Level numbers reported on `Parallel Requests` lines, in output order.
#[must_use]
pub fn reported_levels(stdout: &str) -> Vec<usize> {
    stdout
        .lines()
        .filter_map(|line| line.strip_prefix("Parallel Requests: "))
        .filter_map(|rest| rest.split(',').next())
        .filter_map(|level| level.trim().parse().ok())
        .collect()
}

/// Level number from the final `Optimal Number` line.
#[must_use]
pub fn optimal_level(stdout: &str) -> Option<usize> {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Optimal Number of Parallel TCP Requests: "))
        .and_then(|value| value.trim().parse().ok())
}
