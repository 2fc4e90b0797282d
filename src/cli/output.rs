//! Output formatting for multiple formats
//!
//! Detection results, task lists and configuration can be rendered as JSON,
//! YAML or human-readable text.
//!
//! # Example
//!
//! ```no_run
//! use devrun::cli::output::{OutputFormat, OutputFormatter};
//!
//! let info = devrun::detect(".");
//! let formatter = OutputFormatter::new(OutputFormat::Json);
//! println!("{}", formatter.format_project(&info).unwrap());
//! ```

use anyhow::{Context, Result};
use std::collections::BTreeMap;

use crate::config::DevrunConfig;
use crate::detection::ProjectInfo;
use crate::tasks::Task;

const RULE_WIDTH: usize = 40;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_project(&self, info: &ProjectInfo) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(info).context("Failed to serialize project to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(info).context("Failed to serialize project to YAML")
            }
            OutputFormat::Human => Ok(self.format_project_human(info)),
        }
    }

    pub fn format_tasks(&self, tasks: &[Task]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(tasks).context("Failed to serialize tasks to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(tasks).context("Failed to serialize tasks to YAML")
            }
            OutputFormat::Human => Ok(self.format_tasks_human(tasks)),
        }
    }

    pub fn format_config(&self, config: &DevrunConfig) -> Result<String> {
        // Sorted for stable output
        let config_map: BTreeMap<String, String> = config.to_display_map().into_iter().collect();

        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&config_map)
                .context("Failed to serialize config to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(&config_map).context("Failed to serialize config to YAML")
            }
            OutputFormat::Human => Ok(config.to_string()),
        }
    }

    // Human-readable formatting methods

    fn format_project_human(&self, info: &ProjectInfo) -> String {
        let mut output = String::new();

        if !info.is_launchable() {
            output.push_str("\u{26A0} No runnable project detected\n");
            return output;
        }

        output.push_str("\u{2713} Project Detection Result\n");
        output.push_str(&"━".repeat(RULE_WIDTH));
        output.push_str("\n\n");
        output.push_str(&format!("Type:     {}\n\n", info.project_type));

        output.push_str("Servers:\n");
        for (i, server) in info.servers.iter().enumerate() {
            let is_last = i == info.servers.len() - 1;
            let connector = if is_last { "\u{2514}" } else { "\u{251C}" };
            let branch = if is_last { " " } else { "\u{2502}" };

            output.push_str(&format!(
                "{}\u{2500} {} ({})\n",
                connector, server.name, server.project_type
            ));
            output.push_str(&format!("{}    Command:  {}\n", branch, server.command_line()));
            output.push_str(&format!(
                "{}    Dir:      {}\n",
                branch,
                server.work_dir.display()
            ));
        }

        output
    }

    fn format_tasks_human(&self, tasks: &[Task]) -> String {
        let mut output = String::new();

        if tasks.is_empty() {
            output.push_str("\u{26A0} No tasks detected\n");
            return output;
        }

        output.push_str(&format!("\u{2713} {} Tasks Detected\n", tasks.len()));
        output.push_str(&"━".repeat(RULE_WIDTH));
        output.push_str("\n\n");

        let width = tasks.iter().map(|t| t.name.len()).max().unwrap_or(0);
        for task in tasks {
            output.push_str(&format!(
                "[{:<6}] {:<width$}  {}\n",
                task.kind.name(),
                task.name,
                task.command,
                width = width
            ));
        }

        output
    }
}
