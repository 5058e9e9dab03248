use std::io::{BufRead, BufReader, Read};
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{bail, Context};

use crate::logger;

const READY_TIMEOUT: Duration = Duration::from_secs(30);

/// A local anvil process forking a remote RPC. Killed and reaped on drop.
pub struct AnvilFork {
    child: Child,
    rpc_url: String,
}

impl AnvilFork {
    /// The local RPC URL served by this fork.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

impl Drop for AnvilFork {
    fn drop(&mut self) {
        if let Err(err) = self.child.kill() {
            logger::warn(format!(
                "failed to kill anvil (pid {}): {err}",
                self.child.id()
            ));
        }
        let _ = self.child.wait();
    }
}

/// Fork the given RPC with auto-impersonate enabled and block until the
/// fork accepts requests.
pub fn fork(fork_url: &str) -> anyhow::Result<AnvilFork> {
    let port = ephemeral_port()?;
    logger::info(format!("Starting anvil fork of {fork_url} on port {port}..."));

    let mut child = Command::new("anvil")
        .args([
            "--fork-url",
            fork_url,
            "--port",
            &port.to_string(),
            "--auto-impersonate",
        ])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("failed to spawn anvil (is foundry installed?)")?;

    let stdout = child
        .stdout
        .take()
        .context("failed to capture anvil stdout")?;

    match await_listening(stdout) {
        Ok(()) => {
            let rpc_url = format!("http://127.0.0.1:{port}");
            logger::info(format!("Anvil ready at {rpc_url}"));
            Ok(AnvilFork { child, rpc_url })
        }
        Err(err) => {
            let _ = child.kill();
            let _ = child.wait();
            Err(err)
        }
    }
}

/// Read anvil's stdout until it reports the listening socket.
fn await_listening(stdout: impl Read) -> anyhow::Result<()> {
    let deadline = Instant::now() + READY_TIMEOUT;
    for line in BufReader::new(stdout).lines() {
        let line = line.context("reading anvil stdout")?;
        if line.contains("Listening on") {
            return Ok(());
        }
        if Instant::now() > deadline {
            bail!("timed out waiting for anvil to start");
        }
    }
    bail!("anvil exited before it was ready")
}

/// Reserve an ephemeral port by binding to :0 and reading back the
/// assignment. The listener is dropped before anvil starts, which leaves a
/// small race window, acceptable for dev tooling.
fn ephemeral_port() -> anyhow::Result<u16> {
    let listener =
        TcpListener::bind("127.0.0.1:0").context("failed to reserve a port for anvil")?;
    Ok(listener.local_addr()?.port())
}
