//! Project classification
//!
//! [`Detector`] maps a directory to a [`ProjectInfo`]: it runs the ordered
//! [`ProbeRegistry`] over the directory itself, then looks for a known pair of
//! backend/frontend sibling directories that are detectable on their own.
//! Detection never fails; unreadable files simply do not match.

pub mod fullstack;
pub mod probes;
pub mod registry;
pub mod types;

pub use probes::{Probe, ProbeContext, ProbeGuard};
pub use registry::{ProbeOutcome, ProbeRegistry};
pub use types::{ProjectInfo, ProjectType, ServerConfig};

use crate::fs::{FileSystem, RealFileSystem};
use fullstack::{BACKEND_NAME, FRONTEND_NAME, SIBLING_PAIRS};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

pub struct Detector {
    fs: Arc<dyn FileSystem>,
    registry: ProbeRegistry,
}

impl Detector {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self::with_registry(fs, ProbeRegistry::with_defaults())
    }

    pub fn with_registry(fs: Arc<dyn FileSystem>, registry: ProbeRegistry) -> Self {
        Self { fs, registry }
    }

    pub fn registry(&self) -> &ProbeRegistry {
        &self.registry
    }

    /// Classify `path`; an empty path means the current directory
    pub fn detect(&self, path: &Path) -> ProjectInfo {
        let dir = resolve_dir(path);
        let info = self.detect_dir(&dir);

        debug!(
            path = %dir.display(),
            project_type = %info.project_type,
            servers = info.servers.len(),
            "Project detected"
        );

        info
    }

    fn detect_dir(&self, dir: &Path) -> ProjectInfo {
        let ctx = ProbeContext::new(self.fs.as_ref(), dir);
        let ProbeOutcome {
            mut project_type,
            servers,
        } = self.registry.run(&ctx);

        if let Some(composite) = self.detect_sibling_pair(dir) {
            return composite;
        }

        if servers.len() > 1 {
            project_type = ProjectType::Fullstack;
        }

        ProjectInfo {
            project_type,
            servers,
        }
    }

    fn detect_sibling_pair(&self, dir: &Path) -> Option<ProjectInfo> {
        for (backend, frontend) in SIBLING_PAIRS {
            let backend_dir = dir.join(backend);
            let frontend_dir = dir.join(frontend);

            if !self.fs.exists(&backend_dir) || !self.fs.exists(&frontend_dir) {
                continue;
            }

            let backend_info = self.detect_dir(&backend_dir);
            let frontend_info = self.detect_dir(&frontend_dir);
            if backend_info.servers.is_empty() || frontend_info.servers.is_empty() {
                continue;
            }

            debug!(backend, frontend, "Matched sibling directory pair");

            let servers = backend_info
                .servers
                .into_iter()
                .map(|s| s.renamed(BACKEND_NAME))
                .chain(
                    frontend_info
                        .servers
                        .into_iter()
                        .map(|s| s.renamed(FRONTEND_NAME)),
                )
                .collect();

            return Some(ProjectInfo {
                project_type: ProjectType::Fullstack,
                servers,
            });
        }

        None
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new(Arc::new(RealFileSystem))
    }
}

fn resolve_dir(path: &Path) -> PathBuf {
    if path.as_os_str().is_empty() {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    } else {
        path.to_path_buf()
    }
}

/// Classify a directory on the real filesystem
pub fn detect(path: impl AsRef<Path>) -> ProjectInfo {
    Detector::default().detect(path.as_ref())
}
