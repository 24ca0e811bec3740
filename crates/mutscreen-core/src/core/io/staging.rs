//! Scoped scratch directory for intermediate artifacts.

use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A per-run staging directory. Files under it are addressed by explicit
/// paths; the process working directory is never changed. The directory
/// and everything in it are removed on drop, on every exit path.
#[derive(Debug)]
pub struct StagingDir {
    root: TempDir,
}

impl StagingDir {
    pub fn create() -> io::Result<Self> {
        let root = tempfile::Builder::new().prefix("mutscreen-").tempdir()?;
        tracing::debug!(path = %root.path().display(), "Created staging directory");
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Absolute path for a named artifact inside the staging directory.
    pub fn file(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn files_land_inside_the_staging_root() {
        let staging = StagingDir::create().unwrap();
        let path = staging.file("wild_type.fasta");
        assert!(path.starts_with(staging.path()));
        fs::write(&path, ">WT\nMAVLSK\n").unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn the_directory_is_removed_on_drop() {
        let staging = StagingDir::create().unwrap();
        let root = staging.path().to_path_buf();
        fs::write(staging.file("names.txt"), "M1L\n").unwrap();
        drop(staging);
        assert!(!root.exists());
    }
}
