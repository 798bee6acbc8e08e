//! Directory-backed artifact store.
//!
//! Holds the inputs and outputs of the trends pipeline under a single root
//! directory, addressed by relative `/`-separated keys such as
//! `output/topic_entities.json`. Writes go to a uniquely named temp file first
//! and are renamed into place, so a failed write never leaves a partial artifact.

use crate::config;
use crate::error::{Result, TrendsError};
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{BufReader, Read, Write};
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Reads and writes pipeline artifacts under a root directory.
pub struct Store {
    /// Directory all keys resolve against.
    pub root: PathBuf,
}

impl Store {
    /// Open a store.
    ///
    /// If `root` is `None`, uses [`config::default_data_dir`]. Creates the
    /// directory if it does not exist.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let dir = root.unwrap_or_else(config::default_data_dir);
        fs::create_dir_all(&dir)?;
        debug!(root = %dir.display(), "opened trends store");
        Ok(Self { root: dir })
    }

    /// Resolve a key to a path under the root.
    ///
    /// Absolute keys and keys with `..` segments are rejected.
    pub fn path(&self, key: &str) -> Result<PathBuf> {
        let rel = Path::new(key);
        let escapes = rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if key.is_empty() || escapes {
            return Err(TrendsError::InvalidArgument(format!(
                "Invalid store key: {:?}",
                key
            )));
        }
        Ok(self.root.join(rel))
    }

    pub fn exists(&self, key: &str) -> bool {
        self.path(key).map(|p| p.is_file()).unwrap_or(false)
    }

    /// Read the raw bytes stored under `key`.
    pub fn read_blob(&self, key: &str) -> Result<Vec<u8>> {
        let path = self.path(key)?;
        if !path.is_file() {
            return Err(TrendsError::NotFound(format!("Store key {} not found", key)));
        }
        Ok(fs::read(path)?)
    }

    pub fn read_string(&self, key: &str) -> Result<String> {
        let bytes = self.read_blob(key)?;
        String::from_utf8(bytes)
            .map_err(|e| TrendsError::InvalidData(format!("{} is not UTF-8: {}", key, e)))
    }

    /// Load and parse a JSON artifact (handles `.gz` transparently).
    ///
    /// A file that fails to parse is reported as [`TrendsError::InvalidData`]
    /// and left on disk.
    pub fn load_json(&self, key: &str) -> Result<serde_json::Value> {
        let path = self.path(key)?;
        if !path.is_file() {
            return Err(TrendsError::NotFound(format!("Store key {} not found", key)));
        }

        let contents = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
            let file = fs::File::open(&path)?;
            let mut decoder = BufReader::new(GzDecoder::new(BufReader::new(file)));
            let mut contents = String::new();
            decoder.read_to_string(&mut contents)?;
            contents
        } else {
            fs::read_to_string(&path)?
        };

        serde_json::from_str(&contents).map_err(|e| {
            warn!(key, error = %e, "corrupt JSON artifact");
            TrendsError::InvalidData(format!("Store key {} holds invalid JSON: {}", key, e))
        })
    }

    /// Load a JSON artifact into a typed value.
    pub fn load_json_as<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self.load_json(key)?;
        serde_json::from_value(value).map_err(|e| {
            TrendsError::InvalidData(format!("Store key {} has unexpected shape: {}", key, e))
        })
    }

    /// Write bytes under `key`, replacing any previous artifact.
    ///
    /// Each write fills its own temp file in the destination directory and
    /// renames it into place. Concurrent writers of one key never see each
    /// other's partial data; the last rename wins.
    pub fn write_blob(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let dest = self.path(key)?;
        let parent = dest.parent().unwrap_or(self.root.as_path()).to_path_buf();
        fs::create_dir_all(&parent)?;

        // The temp file is removed on drop if it was never persisted.
        let result = (|| -> Result<()> {
            let mut tmp = NamedTempFile::new_in(&parent)?;
            tmp.write_all(bytes)?;
            tmp.persist(&dest).map_err(|e| TrendsError::Io(e.error))?;
            Ok(())
        })();

        match &result {
            Ok(()) => info!(key, bytes = bytes.len(), "wrote artifact"),
            Err(e) => warn!(key, error = %e, "artifact write failed"),
        }

        result
    }

    /// Write `value` as pretty-printed JSON under `key`.
    pub fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.write_blob(key, &bytes)
    }

    /// Remove the artifact under `key`. Missing keys are not an error.
    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.path(key)?;
        if path.is_file() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Remove all artifacts and recreate the root directory.
    pub fn clear(&self) -> Result<()> {
        if self.root.exists() {
            fs::remove_dir_all(&self.root)?;
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}
