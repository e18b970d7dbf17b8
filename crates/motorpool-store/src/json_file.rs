use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use motorpool_types::GarageDocument;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::traits::DocumentStore;

/// Configuration for the JSON file store.
#[derive(Clone, Debug)]
pub struct JsonFileStoreConfig {
    /// Pretty-print the persisted JSON. Slower, diff-friendly.
    pub pretty: bool,
}

impl Default for JsonFileStoreConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// File-backed document store: one `<key>.json` file per key.
///
/// Saves are crash-safe: the document is written to a temporary file in
/// the same directory and atomically renamed over the previous file, so a
/// crash mid-save leaves the old document intact. A missing file loads as
/// an empty document; a file that exists but cannot be parsed is reported
/// as [`StoreError::Corrupt`] and never overwritten silently.
pub struct JsonFileStore {
    root: PathBuf,
    config: JsonFileStoreConfig,
}

impl JsonFileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        Self::open_with(root, JsonFileStoreConfig::default())
    }

    /// Open a store with explicit configuration.
    pub fn open_with(root: impl Into<PathBuf>, config: JsonFileStoreConfig) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root, config })
    }

    /// The directory documents are stored under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self, key: &str) -> StoreResult<GarageDocument> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(key, "no document on disk; starting empty");
                return Ok(GarageDocument::new());
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&raw).map_err(|e| {
            warn!(key, error = %e, "persisted document failed to parse");
            StoreError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            }
        })
    }

    fn save(&self, key: &str, doc: &GarageDocument) -> StoreResult<()> {
        let encoded = if self.config.pretty {
            serde_json::to_vec_pretty(doc)
        } else {
            serde_json::to_vec(doc)
        }
        .map_err(|e| StoreError::Serialization(e.to_string()))?;

        // Write to a sibling temp file, then rename over the target so the
        // previous document survives a crash mid-write.
        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(&encoded)?;
        tmp.as_file().sync_all()?;
        tmp.persist(self.path_for(key)).map_err(|e| e.error)?;

        debug!(key, bytes = encoded.len(), "document saved");
        Ok(())
    }
}
