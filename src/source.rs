//! Source file aggregation: the ordered set of (name, content) pairs fed to
//! a generation attempt, plus filesystem ingestion for the CLI.

use crate::error::SourceError;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// One user-provided file. Immutable once created; duplicate names are
/// allowed, the set is keyed by position only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Ordered, append-only collection of source files. Order is arrival order
/// and is never re-sorted; the model downstream may be sensitive to it.
#[derive(Debug, Clone, Default)]
pub struct SourceSet {
    files: Vec<SourceFile>,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append entries in the order given. No dedup, no size or type limits.
    pub fn add_files(&mut self, entries: impl IntoIterator<Item = SourceFile>) {
        self.files.extend(entries);
    }

    /// Remove the entry at `index`. Out-of-range indices are a no-op: the UI
    /// computes indices from the same list snapshot, so this must not panic.
    pub fn remove_file(&mut self, index: usize) {
        if index < self.files.len() {
            self.files.remove(index);
        }
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Directories skipped during directory walks. Dependency and build output
/// trees would drown the prompt in generated code.
const SKIP_DIRS: &[&str] = &[
    "node_modules",
    "target",
    "dist",
    "build",
    "vendor",
    "__pycache__",
];

/// Read the given paths into source files. Files are read directly; for
/// directories every non-hidden file outside the skip list is included, named
/// by its path relative to the directory argument. Content is decoded as
/// best-effort UTF-8; binary files are not specially handled.
pub fn read_sources(paths: &[PathBuf]) -> Result<Vec<SourceFile>, SourceError> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(read_one(path, &file_display_name(path))?);
        } else if path.is_dir() {
            read_dir_tree(path, &mut files)?;
        } else {
            return Err(SourceError::PathNotFound(path.clone()));
        }
    }
    debug!(count = files.len(), "read source files");
    Ok(files)
}

fn read_dir_tree(root: &Path, files: &mut Vec<SourceFile>) -> Result<(), SourceError> {
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_skipped(entry));

    for entry in walker {
        let entry = entry.map_err(|e| SourceError::WalkFailed {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .display()
            .to_string();
        files.push(read_one(entry.path(), &name)?);
    }
    Ok(())
}

fn read_one(path: &Path, name: &str) -> Result<SourceFile, SourceError> {
    let bytes = std::fs::read(path).map_err(|source| SourceError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes).into_owned();
    Ok(SourceFile::new(name, content))
}

fn file_display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn is_skipped(entry: &walkdir::DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    // Never skip the walk root itself, even if the user points at a hidden dir.
    if entry.depth() == 0 {
        return false;
    }
    name.starts_with('.') || (entry.file_type().is_dir() && SKIP_DIRS.contains(&name.as_ref()))
}
