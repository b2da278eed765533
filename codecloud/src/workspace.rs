// src/workspace.rs
use anyhow::{Context, Result};
use std::env;
use std::path::{Component, Path, PathBuf};

use crate::config::CONFIG_FILE;

/// Exclusion list read from the tool directory.
pub const EXCLUDE_FILE: &str = "exclude.txt";

/// The directories one run works with: the tool directory holds inputs and
/// outputs, the base directory is the tree that gets analysed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub tool_dir: PathBuf,
    pub base_dir: PathBuf,
}

impl Workspace {
    /// Makes `tool_dir` absolute and defaults the base directory to its parent.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    #[inline]
    pub fn resolve(tool_dir: &Path, base_dir: Option<&Path>) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine current directory")?;
        let tool_dir = absolute(&cwd, tool_dir);
        let base_dir = match base_dir {
            Some(base) => absolute(&cwd, base),
            None => tool_dir
                .parent()
                .map_or_else(|| tool_dir.clone(), Path::to_path_buf),
        };
        Ok(Self { tool_dir, base_dir })
    }

    #[inline]
    #[must_use]
    pub fn exclude_file(&self) -> PathBuf {
        self.tool_dir.join(EXCLUDE_FILE)
    }

    #[inline]
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.tool_dir.join(CONFIG_FILE)
    }

    /// Resolves an output path against the tool directory.
    #[inline]
    #[must_use]
    pub fn output(&self, relative: &Path) -> PathBuf {
        self.tool_dir.join(relative)
    }
}

/// Joins onto `cwd` and drops `.` components so parents resolve as expected.
fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
