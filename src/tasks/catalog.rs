//! Task discovery across ecosystems

use super::ecosystems::*;
use super::{scan, Task};
use crate::fs::{FileSystem, RealFileSystem};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// How many directory levels the extension scan descends below the root
pub const DEFAULT_SCAN_DEPTH: usize = 2;

/// Directory levels searched for `Main.java` entry points
const JAVA_MAIN_DEPTH: usize = 3;

/// Directory under inspection plus the scan limits
pub struct ScanContext<'a> {
    fs: &'a dyn FileSystem,
    dir: &'a Path,
    scan_depth: usize,
}

impl<'a> ScanContext<'a> {
    pub fn new(fs: &'a dyn FileSystem, dir: &'a Path, scan_depth: usize) -> Self {
        Self {
            fs,
            dir,
            scan_depth,
        }
    }

    pub fn dir(&self) -> &Path {
        self.dir
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.fs.exists(&self.path(name))
    }

    pub fn has_any(&self, names: &[&str]) -> bool {
        names.iter().any(|n| self.has(n))
    }

    pub fn read(&self, name: &str) -> Option<String> {
        self.fs.read_optional(&self.path(name))
    }

    /// A file with this extension exists within the bounded scan
    pub fn has_extension(&self, ext: &str) -> bool {
        scan::has_extension(self.fs, self.dir, ext, self.scan_depth)
    }

    /// `Main.java` files near the root, relative to it
    pub fn java_mains(&self) -> Vec<PathBuf> {
        scan::find_named(self.fs, self.dir, "Main.java", JAVA_MAIN_DEPTH)
            .into_iter()
            .filter_map(|p| p.strip_prefix(self.dir).ok().map(Path::to_path_buf))
            .collect()
    }

    /// Names of the regular files directly inside `sub` ("" for the root)
    pub fn files_in(&self, sub: &str) -> Vec<String> {
        let dir = if sub.is_empty() {
            self.dir.to_path_buf()
        } else {
            self.path(sub)
        };

        self.fs
            .read_dir(&dir)
            .map(|entries| {
                entries
                    .into_iter()
                    .filter(|e| !e.is_dir())
                    .map(|e| e.name)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// One ecosystem's contribution to the task list
pub trait TaskProbe: Send + Sync {
    /// Ecosystem label used in logs
    fn name(&self) -> &'static str;

    fn applies(&self, ctx: &ScanContext<'_>) -> bool;

    fn tasks(&self, ctx: &ScanContext<'_>) -> Vec<Task>;
}

pub struct TaskCatalog {
    fs: Arc<dyn FileSystem>,
    scan_depth: usize,
    probes: Vec<Box<dyn TaskProbe>>,
}

impl TaskCatalog {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        let mut catalog = Self {
            fs,
            scan_depth: DEFAULT_SCAN_DEPTH,
            probes: Vec::new(),
        };

        catalog.register(Box::new(NpmTasks));
        catalog.register(Box::new(PythonTasks));
        catalog.register(Box::new(GoTasks));
        catalog.register(Box::new(MakeTasks));
        catalog.register(Box::new(JavaTasks));
        catalog.register(Box::new(NativeTasks));
        catalog.register(Box::new(RustTasks));

        catalog
    }

    pub fn with_scan_depth(mut self, depth: usize) -> Self {
        self.scan_depth = depth;
        self
    }

    pub fn scan_depth(&self) -> usize {
        self.scan_depth
    }

    pub fn register(&mut self, probe: Box<dyn TaskProbe>) {
        self.probes.push(probe);
    }

    /// Tasks of every applicable ecosystem, in probe order
    pub fn detect(&self, path: &Path) -> Vec<Task> {
        let dir = if path.as_os_str().is_empty() {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        } else {
            path.to_path_buf()
        };
        let ctx = ScanContext::new(self.fs.as_ref(), &dir, self.scan_depth);

        let mut tasks = Vec::new();
        for probe in &self.probes {
            if !probe.applies(&ctx) {
                continue;
            }

            let found = probe.tasks(&ctx);
            debug!(ecosystem = probe.name(), count = found.len(), "Tasks detected");
            tasks.extend(found);
        }

        tasks
    }
}

impl Default for TaskCatalog {
    fn default() -> Self {
        Self::new(Arc::new(RealFileSystem))
    }
}

/// List the tasks of a directory on the real filesystem
pub fn detect_tasks(path: impl AsRef<Path>) -> Vec<Task> {
    TaskCatalog::default().detect(path.as_ref())
}
