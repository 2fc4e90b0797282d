use super::{LogLine, Runner, RunnerError};
use crate::detection::ProjectInfo;
use std::future::Future;
use tracing::info;

/// Why a [`serve`] session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeExit {
    /// The shutdown future resolved
    Shutdown,
    /// Every server closed its output
    StreamsEnded,
}

/// Start `info` on `runner`, hand every log line to `on_line` until
/// `shutdown` resolves or all output ends, then stop the runner.
///
/// The runner's log channel must not have been taken yet. It stays with the
/// runner when `info` has nothing to start.
pub async fn serve<S, F>(
    runner: &mut Runner,
    info: &ProjectInfo,
    shutdown: S,
    mut on_line: F,
) -> Result<ServeExit, RunnerError>
where
    S: Future<Output = ()>,
    F: FnMut(LogLine),
{
    if !info.is_launchable() {
        return Err(RunnerError::NothingToStart);
    }

    let mut logs = runner
        .take_log_channel()
        .ok_or(RunnerError::NotIdle {
            state: runner.state(),
        })?;

    runner.start(info).await?;

    tokio::pin!(shutdown);
    let exit = loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => break ServeExit::Shutdown,
            line = logs.recv() => match line {
                Some(line) => on_line(line),
                None => break ServeExit::StreamsEnded,
            },
            _ = runner.readers_finished() => {
                while let Ok(line) = logs.try_recv() {
                    on_line(line);
                }
                break ServeExit::StreamsEnded;
            }
        }
    };

    info!(?exit, "Stopping servers");
    runner.stop().await;

    Ok(exit)
}
