use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{ImaugError, ImaugResult};

/// Directory (under the workspace root) holding original uploads.
pub const UPLOADS_DIR: &str = "uploads";
/// Directory (under the workspace root) holding materialized variants.
pub const AUGMENTED_DIR: &str = "augmented";

/// The working-directory roots of one session: a flat directory of original uploads and a
/// flat directory of materialized variants.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    uploads: PathBuf,
    augmented: PathBuf,
    // Held for its Drop: removes the root of a temporary workspace.
    _temp: Option<tempfile::TempDir>,
}

impl Workspace {
    /// Use `root/uploads` and `root/augmented`, creating them if absent.
    pub fn at(root: impl Into<PathBuf>) -> ImaugResult<Self> {
        Self::with_root(root.into(), None)
    }

    /// A fresh, isolated workspace in the system temp directory. It is deleted when the
    /// value is dropped.
    pub fn temporary() -> ImaugResult<Self> {
        let dir = tempfile::Builder::new()
            .prefix("imaug-session-")
            .tempdir()
            .context("create temporary workspace")?;
        Self::with_root(dir.path().to_path_buf(), Some(dir))
    }

    fn with_root(root: PathBuf, temp: Option<tempfile::TempDir>) -> ImaugResult<Self> {
        let uploads = root.join(UPLOADS_DIR);
        let augmented = root.join(AUGMENTED_DIR);
        for dir in [&uploads, &augmented] {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create workspace directory '{}'", dir.display()))?;
        }
        Ok(Self {
            root,
            uploads,
            augmented,
            _temp: temp,
        })
    }

    /// Workspace root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of original uploads.
    pub fn uploads_dir(&self) -> &Path {
        &self.uploads
    }

    /// Directory of materialized variants.
    pub fn augmented_dir(&self) -> &Path {
        &self.augmented
    }

    /// Persist an upload's original bytes under its base name and return the written path.
    pub fn store_upload(&self, name: &str, bytes: &[u8]) -> ImaugResult<PathBuf> {
        let base = base_name(name)?;
        let path = self.uploads.join(base);
        std::fs::write(&path, bytes)
            .with_context(|| format!("write upload '{}'", path.display()))?;
        Ok(path)
    }

    /// Remove every file left in the variants directory by an earlier run. Returns how many
    /// files were removed.
    pub fn clear_outputs(&self) -> ImaugResult<usize> {
        let mut removed = 0usize;
        let entries = std::fs::read_dir(&self.augmented)
            .with_context(|| format!("list '{}'", self.augmented.display()))?;
        for entry in entries {
            let path = entry?.path();
            if path.is_file() {
                std::fs::remove_file(&path)
                    .with_context(|| format!("remove stale output '{}'", path.display()))?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}

/// Final path component of an upload name, accepting both `/` and `\` separators.
pub fn base_name(name: &str) -> ImaugResult<&str> {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name).trim();
    if base.is_empty() || base == "." || base == ".." {
        return Err(ImaugError::validation(format!(
            "upload name '{name}' has no file name"
        )));
    }
    Ok(base)
}

#[cfg(test)]
#[path = "../../tests/unit/output/workspace.rs"]
mod tests;
