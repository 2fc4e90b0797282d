use devrun::cli::commands::{CliArgs, Commands};
use devrun::cli::handlers::{handle_config, handle_detect, handle_exec, handle_serve, handle_tasks};
use devrun::util::logging::{init_logging, parse_level, LoggingConfig};
use devrun::{DevrunConfig, VERSION};

use clap::Parser;
use tracing::{debug, Level};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("devrun v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Detect(detect_args) => handle_detect(detect_args).await,
        Commands::Tasks(tasks_args) => handle_tasks(tasks_args).await,
        Commands::Serve(serve_args) => handle_serve(serve_args, args.quiet).await,
        Commands::Exec(exec_args) => handle_exec(exec_args).await,
        Commands::Config(config_args) => handle_config(config_args).await,
    };

    std::process::exit(exit_code);
}

/// `--log-level` wins over `-v`/`-q`, which win over `DEVRUN_LOG_LEVEL`
fn init_logging_from_args(args: &CliArgs) {
    let config = DevrunConfig::default();

    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        parse_level(&config.log_level)
    };

    init_logging(LoggingConfig {
        level,
        use_json: config.log_json,
        ..Default::default()
    });
}
