//! devrun - dev-server launcher and task runner for local projects
//!
//! devrun looks at a project directory, works out which framework it uses and
//! how its development server is started, then launches those servers as child
//! processes and merges their output into a single stream of labelled lines.
//! It also discovers the build, test, lint and format tasks a project offers
//! and runs any one of them on demand.
//!
//! # Core Concepts
//!
//! - **Detection**: an ordered registry of probes turns marker files into a
//!   [`ProjectInfo`] listing zero or more [`ServerConfig`]s. A `backend`/
//!   `frontend` style sibling layout becomes a fullstack project.
//! - **Runner**: owns the spawned servers, forwards each stdout/stderr line as a
//!   [`LogLine`] with ANSI escapes removed, and stops everything on request.
//! - **Task catalog**: per-ecosystem task probes (npm scripts, Makefile targets,
//!   Go, Python, Java, C/C++, Rust) produce a list of [`Task`]s.
//! - **Executor**: runs one task to completion and streams its output.
//!
//! # Example Usage
//!
//! ```no_run
//! use devrun::{detect, serve, Runner};
//!
//! # async fn example() -> Result<(), devrun::RunnerError> {
//! let info = detect("./my-app");
//! let mut runner = Runner::new();
//!
//! let shutdown = async {
//!     let _ = tokio::signal::ctrl_c().await;
//! };
//! serve(&mut runner, &info, shutdown, |line| println!("{}", line)).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`detection`]: project type detection and server configuration
//! - [`runner`]: concurrent server supervision and log aggregation
//! - [`tasks`]: task discovery and single-task execution
//! - [`fs`]: filesystem abstraction used by detection and discovery
//! - [`config`], [`util`]: environment configuration and logging setup

#[macro_use]
mod id_enum_macro;

pub mod cli;
pub mod config;
pub mod detection;
pub mod fs;
pub mod runner;
pub mod tasks;
pub mod util;

// Re-export key types for convenient access
pub use config::{ConfigError, DevrunConfig};
pub use detection::{detect, Detector, ProjectInfo, ProjectType, ServerConfig};
pub use runner::{serve, strip_ansi, LogLine, Runner, RunnerError, RunnerState, ServeExit};
pub use tasks::{detect_tasks, execute_task, Task, TaskCatalog, TaskError, TaskKind};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
