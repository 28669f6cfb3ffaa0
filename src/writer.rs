//! Output persistence.
//! Creates the output directory tree and writes rendered files into it.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A rendered file waiting to be written, relative to the plan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Everything one template produces for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    /// Output directory all other paths are relative to
    pub root: PathBuf,
    /// Directories to create even when no file lands in them
    pub dirs: Vec<PathBuf>,
    pub files: Vec<PlannedFile>,
}

impl OutputPlan {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            dirs: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn with_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.dirs.push(dir.into());
        self
    }

    pub fn with_file<P: Into<PathBuf>>(mut self, path: P, content: String) -> Self {
        self.files.push(PlannedFile {
            path: path.into(),
            content,
        });
        self
    }

    /// Creates the root and listed directories, then writes every file in
    /// plan order. Existing files are overwritten.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - Paths of the written files
    pub fn write(&self) -> Result<Vec<PathBuf>> {
        ensure_dir(&self.root)?;
        for dir in &self.dirs {
            ensure_dir(self.root.join(dir))?;
        }

        let mut written = Vec::with_capacity(self.files.len());
        for file in &self.files {
            let target = self.root.join(&file.path);
            write_file(&target, &file.content)?;
            written.push(target);
        }
        Ok(written)
    }
}

/// Creates `path` and all missing ancestors. Existing directories are fine.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    debug!("Ensuring directory: {}", path.display());
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Creates or truncates the file at `path` and writes `content` to it.
/// Missing parent directories are created first.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    debug!("Writing file: {}", path.display());
    fs::write(path, content).map_err(|e| Error::io(path, e))
}
