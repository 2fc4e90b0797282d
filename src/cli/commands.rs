use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::tasks::TaskKind;

/// Dev-server launcher and task runner for local projects
#[derive(Parser, Debug)]
#[command(
    name = "devrun",
    about = "Dev-server launcher and task runner for local projects",
    version,
    author,
    long_about = "devrun detects what kind of project a directory holds, starts its \
                  development servers with merged, color-stripped logs, and lists or runs \
                  the build, test, lint and format tasks the project offers."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Detect the project type and its dev servers",
        long_about = "Probes a directory for known frameworks and reports the servers that \
                      would be started.\n\n\
                      Examples:\n  \
                      devrun detect\n  \
                      devrun detect ./my-app --format json"
    )]
    Detect(DetectArgs),

    #[command(
        about = "List the tasks a project offers",
        long_about = "Collects npm scripts, Makefile targets and the conventional commands \
                      of Python, Go, Java, C/C++ and Rust projects.\n\n\
                      Examples:\n  \
                      devrun tasks\n  \
                      devrun tasks --kind test"
    )]
    Tasks(TasksArgs),

    #[command(
        about = "Start all detected dev servers and stream their logs",
        long_about = "Starts every detected server and prints `[Server] line` for each \
                      output line until Ctrl-C or until every server exits.\n\n\
                      Examples:\n  \
                      devrun serve\n  \
                      devrun serve ./fullstack-app"
    )]
    Serve(ServeArgs),

    #[command(
        about = "Run a single detected task",
        long_about = "Runs the task whose name or command matches TASK and streams its \
                      output.\n\n\
                      Examples:\n  \
                      devrun exec \"npm run build\"\n  \
                      devrun exec \"Run Tests\" ./service"
    )]
    Exec(ExecArgs),

    #[command(about = "Show the effective configuration")]
    Config(ConfigArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(value_name = "PATH", help = "Project directory (defaults to current directory)")]
    pub path: Option<PathBuf>,

    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct TasksArgs {
    #[arg(value_name = "PATH", help = "Project directory (defaults to current directory)")]
    pub path: Option<PathBuf>,

    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,

    #[arg(
        short = 'k',
        long,
        value_parser = parse_task_kind,
        help = "Only list tasks of this kind (build, test, format, lint, run, clean)"
    )]
    pub kind: Option<TaskKind>,
}

#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    #[arg(value_name = "PATH", help = "Project directory (defaults to current directory)")]
    pub path: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ExecArgs {
    #[arg(value_name = "TASK", help = "Task name or command, as listed by `devrun tasks`")]
    pub task: String,

    #[arg(value_name = "PATH", help = "Project directory (defaults to current directory)")]
    pub path: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

fn parse_task_kind(s: &str) -> Result<TaskKind, String> {
    TaskKind::from_name(&s.to_lowercase()).ok_or_else(|| {
        format!(
            "Invalid task kind: {}. Valid options: build, test, format, lint, run, clean",
            s
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_default_detect_args() {
        let args = CliArgs::parse_from(["devrun", "detect"]);
        match args.command {
            Commands::Detect(detect_args) => {
                assert_eq!(detect_args.format, OutputFormatArg::Human);
                assert!(detect_args.path.is_none());
            }
            _ => panic!("Expected Detect command"),
        }
    }

    #[test]
    fn test_detect_with_path_and_format() {
        let args = CliArgs::parse_from(["devrun", "detect", "/tmp/app", "--format", "yaml"]);
        match args.command {
            Commands::Detect(detect_args) => {
                assert_eq!(detect_args.path, Some(PathBuf::from("/tmp/app")));
                assert_eq!(detect_args.format, OutputFormatArg::Yaml);
            }
            _ => panic!("Expected Detect command"),
        }
    }

    #[test]
    fn test_tasks_kind_filter() {
        let args = CliArgs::parse_from(["devrun", "tasks", "--kind", "Test"]);
        match args.command {
            Commands::Tasks(tasks_args) => assert_eq!(tasks_args.kind, Some(TaskKind::Test)),
            _ => panic!("Expected Tasks command"),
        }
    }

    #[test]
    fn test_exec_args() {
        let args = CliArgs::parse_from(["devrun", "exec", "npm run build", "./web"]);
        match args.command {
            Commands::Exec(exec_args) => {
                assert_eq!(exec_args.task, "npm run build");
                assert_eq!(exec_args.path, Some(PathBuf::from("./web")));
            }
            _ => panic!("Expected Exec command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let args = CliArgs::parse_from(["devrun", "-v", "serve"]);
        assert!(args.verbose);
        assert!(!args.quiet);

        let args = CliArgs::parse_from(["devrun", "--log-level", "debug", "serve"]);
        assert_eq!(args.log_level, Some("debug".to_string()));

        assert!(CliArgs::try_parse_from(["devrun", "-v", "-q", "serve"]).is_err());
    }

    #[test]
    fn test_task_kind_parsing() {
        assert_eq!(parse_task_kind("fmt"), Ok(TaskKind::Format));
        assert!(parse_task_kind("deploy").is_err());
    }
}
