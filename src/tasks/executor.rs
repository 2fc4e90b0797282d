//! Single task execution with streamed output

use super::Task;
use crate::runner::{decode_line, LogLine};
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tokio_stream::wrappers::SplitStream;
use tokio_stream::StreamExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task command is empty")]
    EmptyCommand,

    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while reading task output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Task was cancelled")]
    Cancelled,

    #[error("Task failed with {status}")]
    Failed { status: ExitStatus },
}

impl TaskError {
    /// Exit code of a process that ran to completion unsuccessfully
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Failed { status } => status.code(),
            _ => None,
        }
    }
}

/// Run `task` in `work_dir` and forward its stdout and stderr lines to
/// `output`, tagged with the task name.
///
/// `output` is consumed: the channel closes when this function returns,
/// whatever the outcome, so the receiver always sees the end of output. The
/// returned error still has to be checked to tell success from failure.
/// Cancelling `cancel` kills the process.
pub async fn execute_task(
    cancel: &CancellationToken,
    task: &Task,
    work_dir: &Path,
    output: mpsc::Sender<LogLine>,
) -> Result<(), TaskError> {
    let mut parts = task.command.split_whitespace();
    let program = parts.next().ok_or(TaskError::EmptyCommand)?;

    let mut command = Command::new(program);
    command
        .args(parts)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if !work_dir.as_os_str().is_empty() {
        command.current_dir(work_dir);
    }

    let mut child = command.spawn().map_err(|source| TaskError::Spawn {
        program: program.to_string(),
        source,
    })?;
    info!(task = %task.name, command = %task.command, pid = ?child.id(), "Task started");

    let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "task output was not captured");
        return Err(abort(&mut child, TaskError::Io(err)).await);
    };

    let stdout = SplitStream::new(BufReader::new(stdout).split(b'\n')).map(|r| r.map(|b| (b, false)));
    let stderr = SplitStream::new(BufReader::new(stderr).split(b'\n')).map(|r| r.map(|b| (b, true)));
    let mut lines = stdout.merge(stderr);
    let mut receiver_open = true;

    loop {
        let next = tokio::select! {
            _ = cancel.cancelled() => return Err(abort(&mut child, TaskError::Cancelled).await),
            next = lines.next() => next,
        };

        let (bytes, is_error) = match next {
            Some(Ok(line)) => line,
            Some(Err(e)) => return Err(abort(&mut child, TaskError::Io(e)).await),
            None => break,
        };

        // Keep draining after the receiver is gone so the child never blocks on a full pipe.
        if !receiver_open {
            continue;
        }

        let line = LogLine::new(task.name.clone(), decode_line(&bytes), is_error);
        tokio::select! {
            _ = cancel.cancelled() => return Err(abort(&mut child, TaskError::Cancelled).await),
            sent = output.send(line) => {
                if sent.is_err() {
                    debug!(task = %task.name, "Output receiver dropped");
                    receiver_open = false;
                }
            }
        }
    }

    let waited = tokio::select! {
        _ = cancel.cancelled() => None,
        status = child.wait() => Some(status),
    };
    let Some(status) = waited else {
        return Err(abort(&mut child, TaskError::Cancelled).await);
    };
    let status = status?;

    debug!(task = %task.name, %status, "Task finished");
    if status.success() {
        Ok(())
    } else {
        Err(TaskError::Failed { status })
    }
}

/// Kill and reap `child`, then hand back `err`
async fn abort(child: &mut Child, err: TaskError) -> TaskError {
    if let Err(e) = child.start_kill() {
        debug!(error = %e, "Kill skipped, task already exited");
    }
    if let Err(e) = child.wait().await {
        debug!(error = %e, "Failed to reap task");
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::TaskKind;

    #[tokio::test]
    async fn test_empty_command_closes_channel() {
        let (tx, mut rx) = mpsc::channel(4);
        let task = Task::from_command(TaskKind::Run, "   ", "");

        let err = execute_task(&CancellationToken::new(), &task, Path::new(""), tx)
            .await
            .unwrap_err();
        assert!(matches!(err, TaskError::EmptyCommand));
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_spawn_failure_names_program() {
        let (tx, mut rx) = mpsc::channel(4);
        let task = Task::from_command(TaskKind::Run, "devrun-no-such-program --flag", "");

        let err = execute_task(&CancellationToken::new(), &task, Path::new(""), tx)
            .await
            .unwrap_err();
        match err {
            TaskError::Spawn { program, .. } => assert_eq!(program, "devrun-no-such-program"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(rx.recv().await.is_none());
    }
}
