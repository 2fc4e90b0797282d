//! Detection result types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

crate::define_id_enum! {
    /// Project ecosystem a launch descriptor belongs to
    ProjectType {
        Node => "node" : "Node.js" | "nodejs",
        Express => "express" : "Express",
        NextJs => "nextjs" : "Next.js",
        NestJs => "nestjs" : "Nest.js",
        Angular => "angular" : "Angular",
        Vue => "vue" : "Vue.js",
        Python => "python" : "Python",
        Go => "go" : "Go",
        Django => "django" : "Django",
        FastApi => "fastapi" : "FastAPI",
        Flask => "flask" : "Flask",
        React => "react" : "React",
        Vite => "vite" : "Vite",
        Webpack => "webpack" : "Webpack",
        SpringBoot => "spring-boot" : "Spring Boot",
        Fullstack => "fullstack" : "Fullstack",
        Unknown => "unknown" : "Unknown",
    }
}

impl Default for ProjectType {
    fn default() -> Self {
        Self::Unknown
    }
}

/// One launchable long-running process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Label used as the log source, e.g. "Backend" or "Django Server"
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub command: String,
    pub args: Vec<String>,
    pub work_dir: PathBuf,
}

impl ServerConfig {
    pub fn new(
        name: impl Into<String>,
        project_type: ProjectType,
        command: impl Into<String>,
        args: &[&str],
        work_dir: &Path,
    ) -> Self {
        Self {
            name: name.into(),
            project_type,
            command: command.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            work_dir: work_dir.to_path_buf(),
        }
    }

    /// Command line as a single display string
    pub fn command_line(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn renamed(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}

/// Classified project: its type plus the ordered servers to launch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub servers: Vec<ServerConfig>,
}

impl ProjectInfo {
    pub fn unknown() -> Self {
        Self::default()
    }

    /// True when there is something a runner could start
    pub fn is_launchable(&self) -> bool {
        self.project_type != ProjectType::Unknown && !self.servers.is_empty()
    }
}
