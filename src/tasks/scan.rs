//! Bounded directory walks over a [`FileSystem`]

use crate::fs::FileSystem;
use std::path::{Path, PathBuf};

/// Dependency and version-control directories never descended into
pub(crate) const EXCLUDED_DIRS: &[&str] = &["node_modules", ".git", ".venv", "vendor"];

fn is_excluded(name: &str) -> bool {
    EXCLUDED_DIRS.contains(&name)
}

/// Any file under `root` (at most `max_depth` directory levels down) whose
/// name ends with `ext`, compared case-insensitively.
pub(crate) fn has_extension(fs: &dyn FileSystem, root: &Path, ext: &str, max_depth: usize) -> bool {
    let ext = ext.to_ascii_lowercase();
    any_file(fs, root, 0, max_depth, &|name: &str| {
        name.to_ascii_lowercase().ends_with(&ext)
    })
}

/// Every file literally named `file_name` within `max_depth` directory levels
/// below `root`, in walk order.
pub(crate) fn find_named(
    fs: &dyn FileSystem,
    root: &Path,
    file_name: &str,
    max_depth: usize,
) -> Vec<PathBuf> {
    let mut found = Vec::new();
    collect_named(fs, root, file_name, 0, max_depth, &mut found);
    found
}

fn any_file(
    fs: &dyn FileSystem,
    dir: &Path,
    depth: usize,
    max_depth: usize,
    matches: &dyn Fn(&str) -> bool,
) -> bool {
    let Ok(entries) = fs.read_dir(dir) else {
        return false;
    };

    let (dirs, files): (Vec<_>, Vec<_>) = entries.into_iter().partition(|e| e.is_dir());
    if files.iter().any(|f| matches(f.file_name())) {
        return true;
    }

    depth < max_depth
        && dirs
            .iter()
            .filter(|d| !is_excluded(d.file_name()))
            .any(|d| any_file(fs, d.path(), depth + 1, max_depth, matches))
}

fn collect_named(
    fs: &dyn FileSystem,
    dir: &Path,
    file_name: &str,
    depth: usize,
    max_depth: usize,
    found: &mut Vec<PathBuf>,
) {
    let Ok(entries) = fs.read_dir(dir) else {
        return;
    };

    for entry in entries {
        if entry.is_dir() {
            if depth < max_depth && !is_excluded(entry.file_name()) {
                collect_named(fs, entry.path(), file_name, depth + 1, max_depth, found);
            }
        } else if entry.file_name() == file_name {
            found.push(entry.path().to_path_buf());
        }
    }
}
