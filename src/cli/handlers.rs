//! Subcommand handlers
//!
//! Each handler returns the process exit code.

use super::commands::{ConfigArgs, DetectArgs, ExecArgs, ServeArgs, TasksArgs};
use super::output::OutputFormatter;
use crate::config::DevrunConfig;
use crate::detection::Detector;
use crate::runner::{serve, LogLine};
use crate::tasks::{execute_task, Task};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

fn project_dir(path: &Option<PathBuf>) -> PathBuf {
    path.clone().unwrap_or_default()
}

fn print_line(line: &LogLine) {
    if line.is_error {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

/// Resolves on Ctrl-C; never resolves if the handler cannot be installed
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

fn load_config() -> Option<DevrunConfig> {
    let config = DevrunConfig::default();
    match config.validate() {
        Ok(()) => Some(config),
        Err(e) => {
            eprintln!("Error: {}", e);
            None
        }
    }
}

pub async fn handle_detect(args: &DetectArgs) -> i32 {
    let info = Detector::default().detect(&project_dir(&args.path));

    match OutputFormatter::new(args.format.into()).format_project(&info) {
        Ok(output) => {
            print!("{}", output);
            0
        }
        Err(e) => {
            error!("Failed to format detection result: {:#}", e);
            1
        }
    }
}

pub async fn handle_tasks(args: &TasksArgs) -> i32 {
    let Some(config) = load_config() else {
        return 1;
    };

    let mut tasks = config.task_catalog().detect(&project_dir(&args.path));
    if let Some(kind) = args.kind {
        tasks.retain(|t| t.kind == kind);
    }

    match OutputFormatter::new(args.format.into()).format_tasks(&tasks) {
        Ok(output) => {
            print!("{}", output);
            0
        }
        Err(e) => {
            error!("Failed to format task list: {:#}", e);
            1
        }
    }
}

pub async fn handle_serve(args: &ServeArgs, quiet: bool) -> i32 {
    let Some(config) = load_config() else {
        return 1;
    };

    let info = Detector::default().detect(&project_dir(&args.path));
    if !info.is_launchable() {
        eprintln!("No runnable project detected");
        return 1;
    }

    if !quiet {
        for server in &info.servers {
            eprintln!("Starting {}: {}", server.name, server.command_line());
        }
    }

    let mut runner = config.runner();
    match serve(&mut runner, &info, ctrl_c(), |line| print_line(&line)).await {
        Ok(exit) => {
            info!(?exit, "Serve session ended");
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn find_task<'a>(tasks: &'a [Task], wanted: &str) -> Option<&'a Task> {
    tasks
        .iter()
        .find(|t| t.name == wanted)
        .or_else(|| tasks.iter().find(|t| t.command == wanted))
}

pub async fn handle_exec(args: &ExecArgs) -> i32 {
    let Some(config) = load_config() else {
        return 1;
    };

    let dir = project_dir(&args.path);
    let tasks = config.task_catalog().detect(&dir);
    let Some(task) = find_task(&tasks, &args.task) else {
        eprintln!("Unknown task '{}'. Run `devrun tasks` to list tasks.", args.task);
        return 1;
    };

    run_task(task, &dir, config.log_buffer).await
}

async fn run_task(task: &Task, dir: &Path, buffer: usize) -> i32 {
    let cancel = CancellationToken::new();
    let (tx, mut rx) = mpsc::channel(buffer.max(1));

    let printer = tokio::spawn(async move {
        while let Some(line) = rx.recv().await {
            print_line(&line);
        }
    });

    let execution = execute_task(&cancel, task, dir, tx);
    tokio::pin!(execution);

    let finished = tokio::select! {
        result = &mut execution => Some(result),
        _ = ctrl_c() => None,
    };
    let result = match finished {
        Some(result) => result,
        None => {
            info!(task = %task.name, "Cancelling task");
            cancel.cancel();
            execution.await
        }
    };

    if let Err(e) = printer.await {
        warn!(error = %e, "Output printer failed");
    }

    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code().filter(|code| *code != 0).unwrap_or(1)
        }
    }
}

pub async fn handle_config(args: &ConfigArgs) -> i32 {
    let config = DevrunConfig::default();
    let formatter = OutputFormatter::new(args.format.into());

    let code = match formatter.format_config(&config) {
        Ok(output) => {
            print!("{}", output);
            0
        }
        Err(e) => {
            error!("Failed to format configuration: {:#}", e);
            1
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Warning: {}", e);
    }

    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::TaskKind;

    #[test]
    fn test_find_task_prefers_name() {
        let tasks = vec![
            Task::new("Run Tests", TaskKind::Test, "go test ./...", ""),
            Task::from_command(TaskKind::Run, "make test", ""),
        ];

        assert_eq!(find_task(&tasks, "Run Tests").map(|t| t.command.as_str()), Some("go test ./..."));
        assert_eq!(find_task(&tasks, "make test").map(|t| t.name.as_str()), Some("make test"));
        assert!(find_task(&tasks, "deploy").is_none());
    }

    #[test]
    fn test_project_dir_defaults_to_empty() {
        assert_eq!(project_dir(&None), PathBuf::new());
    }
}
