//! Shared helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary project tree built file by file
pub struct ProjectDir {
    dir: TempDir,
}

impl ProjectDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(self, relative: &str, contents: &str) -> Self {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write file");
        self
    }

    pub fn dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.dir.path().join(relative)).expect("Failed to create directory");
        self
    }
}

pub const REACT_PACKAGE_JSON: &str = r#"{
  "name": "web",
  "dependencies": { "react": "^18.2.0", "react-dom": "^18.2.0" },
  "scripts": { "start": "react-scripts start", "build": "react-scripts build", "test": "react-scripts test" }
}"#;

pub const GO_MOD: &str = "module example.com/api\n\ngo 1.22\n";

/// Path of the built `devrun` binary
pub fn devrun_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_devrun"))
}
