//! Detection probes
//!
//! A probe is a single self-contained filesystem test that contributes at most
//! one [`ServerConfig`]. Probes never fail: a missing or unreadable file is a
//! negative signal.

mod go;
mod jvm;
mod node;
mod python;

pub use go::GoProbe;
pub use jvm::SpringBootProbe;
pub use node::{
    AngularProbe, ExpressProbe, NestJsProbe, NextJsProbe, NodeProbe, ReactProbe, ViteProbe,
    VueProbe, WebpackProbe,
};
pub use python::{DjangoProbe, FastApiProbe, FlaskProbe, PythonProbe};

use super::types::{ProjectType, ServerConfig};
use crate::fs::FileSystem;
use std::path::{Path, PathBuf};

/// When a probe is allowed to fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeGuard {
    /// Fires whenever its predicate holds and may coexist with other servers
    Always,
    /// Generic fallback: fires only if no server has been found yet
    OnlyIfEmpty,
}

/// The directory under inspection plus read access to it
pub struct ProbeContext<'a> {
    fs: &'a dyn FileSystem,
    dir: &'a Path,
}

impl<'a> ProbeContext<'a> {
    pub fn new(fs: &'a dyn FileSystem, dir: &'a Path) -> Self {
        Self { fs, dir }
    }

    pub fn dir(&self) -> &Path {
        self.dir
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Any entry (file or directory) with this name exists
    pub fn has(&self, name: &str) -> bool {
        self.fs.exists(&self.path(name))
    }

    pub fn has_any(&self, names: &[&str]) -> bool {
        names.iter().any(|n| self.has(n))
    }

    pub fn read(&self, name: &str) -> Option<String> {
        self.fs.read_optional(&self.path(name))
    }

    /// `package.json` mentions `"<package>"` as a quoted literal anywhere
    pub fn package_json_mentions(&self, package: &str) -> Option<bool> {
        let content = self.read("package.json")?;
        Some(content.contains(&format!("\"{}\"", package)))
    }

    /// An `import …` or `from …` line of `file` mentions `module`
    pub fn imports(&self, file: &str, module: &str) -> bool {
        self.read(file)
            .map(|content| contains_import(&content, module))
            .unwrap_or(false)
    }
}

pub(crate) fn contains_import(content: &str, module: &str) -> bool {
    content.lines().map(str::trim).any(|line| {
        (line.starts_with("import ") || line.starts_with("from ")) && line.contains(module)
    })
}

/// A single predicate-to-descriptor entry in the detection chain
pub trait Probe: Send + Sync {
    /// Type assigned to the server this probe produces
    fn project_type(&self) -> ProjectType;

    fn guard(&self) -> ProbeGuard {
        ProbeGuard::Always
    }

    /// Test the directory and describe the server to launch on a match
    fn probe(&self, ctx: &ProbeContext<'_>) -> Option<ServerConfig>;

    /// Server of this probe's type rooted at the probed directory
    fn server(
        &self,
        ctx: &ProbeContext<'_>,
        name: &str,
        command: &str,
        args: &[&str],
    ) -> ServerConfig {
        ServerConfig::new(name, self.project_type(), command, args, ctx.dir())
    }
}
