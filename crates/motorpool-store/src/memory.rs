use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use motorpool_types::GarageDocument;

use crate::error::{StoreError, StoreResult};
use crate::traits::DocumentStore;

/// In-memory, HashMap-based document store.
///
/// Intended for tests and embedding. Documents are held behind a `RwLock`
/// and cloned on load/save. A fault-injection switch lets tests make the
/// next save fail, which is how the persist-before-destroy ordering is
/// exercised without a real disk.
pub struct InMemoryStore {
    documents: RwLock<HashMap<String, GarageDocument>>,
    fail_next_save: AtomicBool,
}

impl InMemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
            fail_next_save: AtomicBool::new(false),
        }
    }

    /// Number of keys with a persisted document.
    pub fn len(&self) -> usize {
        self.documents.read().expect("lock poisoned").len()
    }

    /// Returns `true` if nothing has been saved yet.
    pub fn is_empty(&self) -> bool {
        self.documents.read().expect("lock poisoned").is_empty()
    }

    /// Remove all persisted documents.
    pub fn clear(&self) {
        self.documents.write().expect("lock poisoned").clear();
    }

    /// Make the next `save` call fail with an I/O error.
    ///
    /// One-shot: the switch resets after the failing save.
    pub fn fail_next_save(&self) {
        self.fail_next_save.store(true, Ordering::SeqCst);
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for InMemoryStore {
    fn load(&self, key: &str) -> StoreResult<GarageDocument> {
        let map = self.documents.read().expect("lock poisoned");
        Ok(map.get(key).cloned().unwrap_or_default())
    }

    fn save(&self, key: &str, doc: &GarageDocument) -> StoreResult<()> {
        if self.fail_next_save.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Io(std::io::Error::other(
                "injected save failure",
            )));
        }
        let mut map = self.documents.write().expect("lock poisoned");
        map.insert(key.to_string(), doc.clone());
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("document_count", &self.len())
            .finish()
    }
}
