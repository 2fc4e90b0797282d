//! Discrete project tasks
//!
//! [`TaskCatalog`] lists the build/test/lint/... commands a directory offers
//! across several ecosystems, and [`execute_task`] runs one of them while
//! streaming its output.

pub mod catalog;
pub mod ecosystems;
pub mod executor;
mod scan;

pub use catalog::{detect_tasks, ScanContext, TaskCatalog, TaskProbe, DEFAULT_SCAN_DEPTH};
pub use executor::{execute_task, TaskError};

use serde::{Deserialize, Serialize};

crate::define_id_enum! {
    /// What a task does
    TaskKind {
        Build => "build" : "Build",
        Test => "test" : "Test",
        Format => "format" : "Format" | "fmt",
        Lint => "lint" : "Lint",
        Run => "run" : "Run",
        Clean => "clean" : "Clean",
    }
}

/// Keywords classifying a script name, checked in order; first substring hit wins
const KIND_KEYWORDS: &[(&str, TaskKind)] = &[
    ("build", TaskKind::Build),
    ("test", TaskKind::Test),
    ("lint", TaskKind::Lint),
    ("format", TaskKind::Format),
    ("dev", TaskKind::Run),
    ("start", TaskKind::Run),
    ("clean", TaskKind::Clean),
];

impl TaskKind {
    /// Classify a script by name, defaulting to [`TaskKind::Run`]
    pub fn classify(script: &str) -> Self {
        KIND_KEYWORDS
            .iter()
            .find(|(keyword, _)| script.contains(keyword))
            .map(|(_, kind)| *kind)
            .unwrap_or(TaskKind::Run)
    }
}

/// One runnable project command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub kind: TaskKind,
    /// Whitespace-separated command line; quoting is not supported
    pub command: String,
    pub description: String,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        kind: TaskKind,
        command: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            command: command.into(),
            description: description.into(),
        }
    }

    /// Task named after its own command
    pub fn from_command(
        kind: TaskKind,
        command: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let command = command.into();
        Self::new(command.clone(), kind, command, description)
    }
}
