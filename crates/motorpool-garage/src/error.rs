use motorpool_store::StoreError;
use motorpool_types::RecordId;
use thiserror::Error;

/// Errors from garage service operations.
///
/// All variants are recoverable, user-presentable conditions; none are
/// fatal to the hosting process.
#[derive(Debug, Error)]
pub enum GarageError {
    /// The persistence layer failed (I/O, corruption). The operation did
    /// not happen; no world state may be mutated in response.
    #[error("garage store unavailable: {0}")]
    Store(#[from] StoreError),

    /// The owner has never banked a vehicle.
    #[error("owner has no garage collection")]
    EmptyCollection,

    /// No vehicle with the requested id in the owner's collection.
    #[error("record {0} not found in owner's collection")]
    NotFound(RecordId),

    /// The candidate vehicle is locked to a different owner.
    #[error("vehicle is locked to a different owner")]
    NotEligible,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_converts_and_keeps_source() {
        use std::error::Error;

        let store_err = StoreError::Serialization("bad".into());
        let err: GarageError = store_err.into();
        assert!(matches!(err, GarageError::Store(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn not_found_names_the_record() {
        let err = GarageError::NotFound(RecordId::new(9));
        assert!(err.to_string().contains('9'));
    }
}
