//! Filesystem storage for user-uploaded item images.
//!
//! Database rows are the source of truth; files on disk shadow them. Removal
//! is best-effort so a missing or locked file never fails the surrounding
//! catalog mutation, but every failure is logged.

use std::path::{Path, PathBuf};

/// Handle to the on-disk image area rooted at a configured base path.
#[derive(Debug, Clone)]
pub struct ImageStore {
    base_path: PathBuf,
}

impl ImageStore {
    /// Creates a store rooted at `base_path`.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Returns the directory holding images uploaded by `user_id`.
    pub fn user_dir(&self, user_id: i32) -> PathBuf {
        self.base_path.join(user_id.to_string())
    }

    /// Creates the per-user image directory if it does not exist yet.
    pub fn ensure_user_dir(&self, user_id: i32) -> std::io::Result<PathBuf> {
        let dir = self.user_dir(user_id);
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Resolves a stored relative file path against the base path.
    pub fn resolve(&self, file_path: &str) -> PathBuf {
        self.base_path.join(file_path)
    }

    /// Deletes a stored image file, logging instead of failing when the file
    /// cannot be removed. Returns whether the file is gone afterwards; a file
    /// that was already missing counts as gone.
    pub fn remove(&self, file_path: &str) -> bool {
        let full = self.resolve(file_path);
        match std::fs::remove_file(&full) {
            Ok(()) => true,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => true,
            Err(error) => {
                tracing::warn!("Failed to remove image file {}: {}", full.display(), error);
                false
            }
        }
    }

    /// Deletes every file in `file_paths`, then prunes the user directory if
    /// it ended up empty. Returns the number of files that could not be
    /// removed.
    pub fn remove_all<'a>(&self, user_id: i32, file_paths: impl IntoIterator<Item = &'a str>) -> u64 {
        let mut failures = 0;
        for file_path in file_paths {
            if !self.remove(file_path) {
                failures += 1;
            }
        }
        self.prune_user_dir(user_id);
        failures
    }

    fn prune_user_dir(&self, user_id: i32) {
        let dir = self.user_dir(user_id);
        if dir_is_empty(&dir) {
            if let Err(error) = std::fs::remove_dir(&dir) {
                tracing::warn!(
                    "Failed to remove empty image directory {}: {}",
                    dir.display(),
                    error
                );
            }
        }
    }
}

fn dir_is_empty(dir: &Path) -> bool {
    match std::fs::read_dir(dir) {
        Ok(mut entries) => entries.next().is_none(),
        Err(_) => false,
    }
}
