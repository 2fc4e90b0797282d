use super::RunnerState;
use thiserror::Error;

/// Errors returned by [`Runner::start`](super::Runner::start)
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("No servers to start: project type is unknown or has no servers")]
    NothingToStart,

    #[error("Runner is {state}, servers can only be started once")]
    NotIdle { state: RunnerState },

    #[error("Failed to start server '{server}': {source}")]
    Spawn {
        server: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to capture {stream} of server '{server}'")]
    MissingPipe {
        server: String,
        stream: &'static str,
    },
}

impl RunnerError {
    /// Name of the server whose launch failed, if any
    pub fn server(&self) -> Option<&str> {
        match self {
            Self::Spawn { server, .. } | Self::MissingPipe { server, .. } => Some(server),
            Self::NothingToStart | Self::NotIdle { .. } => None,
        }
    }
}
