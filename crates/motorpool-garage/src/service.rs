use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use motorpool_store::DocumentStore;
use motorpool_types::{GarageDocument, OwnerId, RecordId, VehicleRecord};

use crate::error::GarageError;
use crate::snapshot::{GarageEntry, VehicleSnapshot};

/// Document key the whole garage dataset lives under.
///
/// One key for all owners: the dataset is one server's worth of banked
/// vehicles, and whole-document persistence keeps the store trivial.
pub const DEFAULT_DOCUMENT_KEY: &str = "motorpool.garage";

/// The garage service: add, list, and retrieve banked vehicles.
///
/// Every operation follows the same shape — lock the document key, load
/// the document, mutate it in memory, save it back, unlock. Holding the
/// key's lock across the whole sequence makes each operation atomic with
/// respect to the document: two concurrent adds (or an add racing a
/// retrieve) cannot load the same baseline and silently drop each other's
/// changes.
pub struct GarageService<S> {
    store: S,
    document_key: String,
    key_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<S: DocumentStore> GarageService<S> {
    /// Create a service over `store` using [`DEFAULT_DOCUMENT_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_DOCUMENT_KEY)
    }

    /// Create a service persisting under a custom document key.
    pub fn with_key(store: S, document_key: impl Into<String>) -> Self {
        Self {
            store,
            document_key: document_key.into(),
            key_locks: Mutex::new(HashMap::new()),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The document key this service persists under.
    pub fn document_key(&self) -> &str {
        &self.document_key
    }

    /// Bank a captured vehicle into `owner`'s collection.
    ///
    /// Allocates the next record id from the document's persisted
    /// high-water mark, appends the record, and saves. The id is returned
    /// only after the save succeeds; callers must not remove the live
    /// vehicle from the world until then (persist-then-destroy).
    ///
    /// When the snapshot names the owner its vehicle is locked to, that
    /// owner must be `owner` — this re-check closes the window between the
    /// caller's eligibility check and this call.
    pub fn add(
        &self,
        owner: &OwnerId,
        candidate: VehicleSnapshot,
    ) -> Result<RecordId, GarageError> {
        if let Some(locked) = &candidate.locked_owner {
            if locked != owner {
                return Err(GarageError::NotEligible);
            }
        }

        let lock = self.document_lock();
        let _guard = lock.lock().expect("document lock poisoned");

        let mut doc = self.store.load(&self.document_key)?;
        let record_id = doc.allocate_record_id();
        let record = candidate.into_record(record_id);
        let display_name = record.display_name.clone();

        doc.owner_mut_or_default(owner).vehicles.push(record);
        self.store.save(&self.document_key, &doc)?;

        info!(%owner, %record_id, name = %display_name, "vehicle banked");
        Ok(record_id)
    }

    /// List `owner`'s banked vehicles as `(id, name)` entries, in the
    /// order they were added.
    ///
    /// An owner who has never banked anything gets
    /// [`GarageError::EmptyCollection`]; an owner whose collection exists
    /// but is currently empty gets an empty listing.
    pub fn list(&self, owner: &OwnerId) -> Result<Vec<GarageEntry>, GarageError> {
        let lock = self.document_lock();
        let _guard = lock.lock().expect("document lock poisoned");

        let doc = self.store.load(&self.document_key)?;
        let garage = doc.owner(owner).ok_or(GarageError::EmptyCollection)?;

        debug!(%owner, count = garage.len(), "garage listed");
        Ok(garage.vehicles.iter().map(GarageEntry::from).collect())
    }

    /// Detach the vehicle with `record_id` from `owner`'s collection and
    /// return it for reconstruction.
    ///
    /// The record is removed from the document exactly once and the
    /// document is saved before the record is handed back; a second
    /// retrieve of the same id reports [`GarageError::NotFound`].
    pub fn retrieve(
        &self,
        owner: &OwnerId,
        record_id: RecordId,
    ) -> Result<VehicleRecord, GarageError> {
        let lock = self.document_lock();
        let _guard = lock.lock().expect("document lock poisoned");

        let mut doc = self.store.load(&self.document_key)?;
        let garage = doc
            .owners
            .get_mut(owner)
            .ok_or(GarageError::EmptyCollection)?;
        let record = garage
            .take(record_id)
            .ok_or(GarageError::NotFound(record_id))?;

        self.store.save(&self.document_key, &doc)?;

        info!(%owner, %record_id, name = %record.display_name, "vehicle retrieved");
        Ok(record)
    }

    /// A read-only copy of the whole persisted document. Diagnostics only.
    pub fn document(&self) -> Result<GarageDocument, GarageError> {
        Ok(self.store.load(&self.document_key)?)
    }

    fn document_lock(&self) -> Arc<Mutex<()>> {
        let mut locks = self.key_locks.lock().expect("lock table poisoned");
        locks
            .entry(self.document_key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
