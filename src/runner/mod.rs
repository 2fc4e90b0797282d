//! Dev-server supervision
//!
//! A [`Runner`] launches every server of a [`ProjectInfo`] and fans the
//! stdout/stderr lines of all of them into one bounded channel of
//! [`LogLine`]s. It owns one cancellation scope, the child handles and the
//! channel sender, so dropping the last sender in [`Runner::stop`] is the
//! only way the channel closes.
//!
//! `start` and `stop` take `&mut self`: a runner cannot be driven from two
//! callers at once without the caller adding its own synchronization.

mod ansi;
mod error;
mod serve;
mod stream;

pub use ansi::strip_ansi;
pub use error::RunnerError;
pub use serve::{serve, ServeExit};
pub(crate) use stream::decode_line;

use crate::detection::{ProjectInfo, ServerConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::process::Stdio;
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, info, warn};

/// Default capacity of the shared log channel
pub const DEFAULT_LOG_BUFFER: usize = 100;

/// One line of process output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLine {
    /// Server or task name the line came from
    pub source: String,
    pub text: String,
    /// Line was written to stderr
    pub is_error: bool,
}

impl LogLine {
    pub fn new(source: impl Into<String>, text: impl Into<String>, is_error: bool) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
            is_error,
        }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.source, self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunnerState {
    #[default]
    Idle,
    Running,
    Stopped,
}

impl fmt::Display for RunnerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

struct TrackedProcess {
    name: String,
    child: Child,
}

pub struct Runner {
    cancel: CancellationToken,
    processes: Vec<TrackedProcess>,
    readers: TaskTracker,
    log_tx: Option<mpsc::Sender<LogLine>>,
    log_rx: Option<mpsc::Receiver<LogLine>>,
    state: RunnerState,
}

impl Runner {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOG_BUFFER)
    }

    /// Runner whose log channel buffers up to `capacity` lines (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        Self {
            cancel: CancellationToken::new(),
            processes: Vec::new(),
            readers: TaskTracker::new(),
            log_tx: Some(tx),
            log_rx: Some(rx),
            state: RunnerState::Idle,
        }
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    /// At least one process handle is tracked. Does not check whether the
    /// process is still alive.
    pub fn is_running(&self) -> bool {
        !self.processes.is_empty()
    }

    /// Names of the tracked servers in launch order
    pub fn server_names(&self) -> Vec<&str> {
        self.processes.iter().map(|p| p.name.as_str()).collect()
    }

    /// Receiving half of the log channel. Only the first call returns it.
    pub fn take_log_channel(&mut self) -> Option<mpsc::Receiver<LogLine>> {
        self.log_rx.take()
    }

    /// Launch every server of `info` in order.
    ///
    /// If any launch fails, everything started so far is stopped and the
    /// error names the failing server.
    pub async fn start(&mut self, info: &ProjectInfo) -> Result<(), RunnerError> {
        if !info.is_launchable() {
            return Err(RunnerError::NothingToStart);
        }
        if self.state != RunnerState::Idle {
            return Err(RunnerError::NotIdle { state: self.state });
        }

        self.state = RunnerState::Running;

        for server in &info.servers {
            if let Err(err) = self.spawn_server(server) {
                warn!(server = %server.name, error = %err, "Server launch failed, rolling back");
                self.stop().await;
                return Err(err);
            }
        }

        self.readers.close();
        info!(
            project_type = %info.project_type,
            servers = self.processes.len(),
            "All servers started"
        );

        Ok(())
    }

    fn spawn_server(&mut self, server: &ServerConfig) -> Result<(), RunnerError> {
        let tx = self
            .log_tx
            .clone()
            .ok_or(RunnerError::NotIdle { state: self.state })?;

        let mut command = Command::new(&server.command);
        command
            .args(&server.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if !server.work_dir.as_os_str().is_empty() {
            command.current_dir(&server.work_dir);
        }

        let mut child = command.spawn().map_err(|source| RunnerError::Spawn {
            server: server.name.clone(),
            source,
        })?;

        debug!(
            server = %server.name,
            pid = ?child.id(),
            command = %server.command_line(),
            work_dir = %server.work_dir.display(),
            "Spawned server"
        );

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        self.processes.push(TrackedProcess {
            name: server.name.clone(),
            child,
        });

        let stdout = stdout.ok_or_else(|| RunnerError::MissingPipe {
            server: server.name.clone(),
            stream: "stdout",
        })?;
        let stderr = stderr.ok_or_else(|| RunnerError::MissingPipe {
            server: server.name.clone(),
            stream: "stderr",
        })?;

        self.readers.spawn(stream::forward_lines(
            stdout,
            server.name.clone(),
            false,
            tx.clone(),
            self.cancel.clone(),
        ));
        self.readers.spawn(stream::forward_lines(
            stderr,
            server.name.clone(),
            true,
            tx,
            self.cancel.clone(),
        ));

        Ok(())
    }

    /// Resolves once every log reader has exited, which happens when all
    /// servers closed their output or the runner was stopped.
    pub async fn readers_finished(&self) {
        self.readers.wait().await;
    }

    /// Cancel, kill every server, wait for all readers and close the log
    /// channel. Calling it again is a no-op.
    pub async fn stop(&mut self) {
        self.cancel.cancel();

        for process in &mut self.processes {
            if let Err(e) = process.child.start_kill() {
                debug!(server = %process.name, error = %e, "Kill skipped, process already exited");
            }
        }

        self.readers.close();
        self.readers.wait().await;

        for mut process in self.processes.drain(..) {
            match process.child.wait().await {
                Ok(status) => debug!(server = %process.name, %status, "Server exited"),
                Err(e) => debug!(server = %process.name, error = %e, "Failed to reap server"),
            }
        }

        if self.log_tx.take().is_some() {
            debug!("Log channel closed");
        }

        if self.state != RunnerState::Stopped {
            info!("Runner stopped");
        }
        self.state = RunnerState::Stopped;
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Runner {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::ProjectType;
    use std::path::Path;

    #[test]
    fn test_log_line_display() {
        let line = LogLine::new("Backend", "listening on :8080", false);
        assert_eq!(line.to_string(), "[Backend] listening on :8080");
    }

    #[test]
    fn test_new_runner_is_idle() {
        let mut runner = Runner::new();
        assert_eq!(runner.state(), RunnerState::Idle);
        assert!(!runner.is_running());
        assert!(runner.take_log_channel().is_some());
        assert!(runner.take_log_channel().is_none());
    }

    #[tokio::test]
    async fn test_start_unknown_project_fails() {
        let mut runner = Runner::new();

        let err = runner.start(&ProjectInfo::unknown()).await.unwrap_err();
        assert!(matches!(err, RunnerError::NothingToStart));
        assert_eq!(runner.state(), RunnerState::Idle);
        assert!(!runner.is_running());
    }

    #[tokio::test]
    async fn test_start_with_empty_servers_fails() {
        let mut runner = Runner::new();
        let info = ProjectInfo {
            project_type: ProjectType::Go,
            servers: Vec::new(),
        };

        assert!(matches!(
            runner.start(&info).await,
            Err(RunnerError::NothingToStart)
        ));
        assert!(!runner.is_running());
    }

    #[tokio::test]
    async fn test_stop_before_start_closes_channel() {
        let mut runner = Runner::new();
        let mut rx = runner.take_log_channel().unwrap();

        runner.stop().await;
        runner.stop().await;

        assert_eq!(runner.state(), RunnerState::Stopped);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_start_after_stop_is_rejected() {
        let mut runner = Runner::new();
        runner.stop().await;

        let info = ProjectInfo {
            project_type: ProjectType::Go,
            servers: vec![ServerConfig::new(
                "Go Server",
                ProjectType::Go,
                "go",
                &["run", "."],
                Path::new("."),
            )],
        };
        let err = runner.start(&info).await.unwrap_err();
        assert!(matches!(
            err,
            RunnerError::NotIdle {
                state: RunnerState::Stopped
            }
        ));
        assert!(err.server().is_none());
    }

    #[tokio::test]
    async fn test_missing_executable_names_server() {
        let mut runner = Runner::new();
        let info = ProjectInfo {
            project_type: ProjectType::Node,
            servers: vec![ServerConfig::new(
                "Node.js Server",
                ProjectType::Node,
                "devrun-definitely-not-a-binary",
                &[],
                Path::new("."),
            )],
        };

        let err = runner.start(&info).await.unwrap_err();
        assert_eq!(err.server(), Some("Node.js Server"));
        assert!(!runner.is_running());
        assert_eq!(runner.state(), RunnerState::Stopped);
    }
}
