pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, ConfigArgs, DetectArgs, ExecArgs, ServeArgs, TasksArgs};
pub use output::{OutputFormat, OutputFormatter};
