use motorpool_types::GarageDocument;

use crate::error::StoreResult;

/// Keyed whole-document store for the garage dataset.
///
/// All implementations must satisfy these invariants:
/// - `load` for a key that was never saved returns a fresh empty document,
///   never an error. Errors are reserved for I/O failure and corruption.
/// - `save` atomically replaces the entire document under the key; a
///   failed save leaves the previously persisted document intact.
/// - The store never interprets the document beyond (de)serializing it.
/// - Load-mutate-save sequences are NOT atomic at this layer; callers that
///   race with themselves must serialize per key.
pub trait DocumentStore: Send + Sync {
    /// Load the document persisted under `key`, or an empty document if
    /// none exists yet.
    fn load(&self, key: &str) -> StoreResult<GarageDocument>;

    /// Persist `doc` under `key`, replacing any prior content.
    fn save(&self, key: &str, doc: &GarageDocument) -> StoreResult<()>;
}
