//! Data directory management
//!
//! A workspace is the directory that holds the key-value store. It is
//! created on first use.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{Config, FileKvStore};

/// An opened data directory
pub struct Workspace {
    root: PathBuf,
    config: Config,
}

impl Workspace {
    /// Opens (creating if needed) the data directory at `root`
    pub fn open(root: impl Into<PathBuf>, config: Config) -> Result<Self> {
        let root = root.into();

        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create data directory: {}", root.display()))?;

        tracing::debug!(root = %root.display(), "opened workspace");
        Ok(Self { root, config })
    }

    /// Opens the data directory chosen by `config`, unless overridden
    pub fn resolve(config: Config, override_dir: Option<&Path>) -> Result<Self> {
        let root = config.resolve_data_dir(override_dir)?;
        Self::open(root, config)
    }

    /// Returns the data directory path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a handle to the key-value store
    pub fn kv_store(&self) -> FileKvStore {
        FileKvStore::in_dir(&self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::KvStore;
    use tempfile::TempDir;

    #[test]
    fn open_creates_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("data");

        let workspace = Workspace::open(&root, Config::default()).unwrap();

        assert!(root.is_dir());
        assert_eq!(workspace.root(), root.as_path());
    }

    #[test]
    fn open_is_idempotent() {
        let dir = TempDir::new().unwrap();

        Workspace::open(dir.path(), Config::default()).unwrap();
        Workspace::open(dir.path(), Config::default()).unwrap();

        assert!(dir.path().is_dir());
    }

    #[test]
    fn resolve_prefers_override() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            data_dir: Some(dir.path().join("configured")),
            ..Config::default()
        };
        let flag = dir.path().join("flag");

        let workspace = Workspace::resolve(config, Some(&flag)).unwrap();

        assert_eq!(workspace.root(), flag.as_path());
        assert!(!dir.path().join("configured").exists());
    }

    #[test]
    fn kv_store_lives_in_root() {
        let dir = TempDir::new().unwrap();
        let workspace = Workspace::open(dir.path(), Config::default()).unwrap();

        let mut kv = workspace.kv_store();
        kv.set("theme", "dark").unwrap();

        assert!(dir.path().join("store.json").is_file());
    }
}
