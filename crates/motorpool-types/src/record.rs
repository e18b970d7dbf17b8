use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// One contained inventory entry inside a banked vehicle's trunk.
///
/// The store treats every field as opaque: `kind` and `durability` are
/// passed through unvalidated, and `metadata` is an untyped byte payload
/// only the world adapter knows how to interpret. An empty `metadata` is
/// omitted from the serialized form but round-trips as empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrunkItem {
    /// Numeric type identifier of the contained item.
    pub kind: u16,
    /// Integer wear value; bounds are the item's business, not the store's.
    pub durability: u8,
    /// Item-specific auxiliary state. May be empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<u8>,
}

impl TrunkItem {
    /// Create a trunk item with no metadata.
    pub fn new(kind: u16, durability: u8) -> Self {
        Self {
            kind,
            durability,
            metadata: Vec::new(),
        }
    }

    /// Create a trunk item carrying a metadata payload.
    pub fn with_metadata(kind: u16, durability: u8, metadata: Vec<u8>) -> Self {
        Self {
            kind,
            durability,
            metadata,
        }
    }
}

/// A banked vehicle: state snapshot captured at add time.
///
/// Immutable once stored. Created only by the add operation and destroyed
/// only by the retrieve operation; trunk order is preserved exactly so
/// contents can be replayed in the same order on reconstruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Unique id assigned at add time. Never reused.
    pub record_id: RecordId,
    /// Numeric type of the underlying vehicle, used to spawn the right kind.
    pub vehicle_type: u16,
    /// Human-readable label captured at add time. May go stale; acceptable.
    pub display_name: String,
    /// Health snapshot at add time.
    pub health: u16,
    /// Fuel snapshot at add time.
    pub fuel: u16,
    /// Trunk contents in their original order.
    #[serde(default)]
    pub trunk: Vec<TrunkItem>,
}
