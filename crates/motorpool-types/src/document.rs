use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::id::{OwnerId, RecordId};
use crate::record::VehicleRecord;

/// All vehicles banked by one owner.
///
/// Order is insertion order and is only used for listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerGarage {
    #[serde(default)]
    pub vehicles: Vec<VehicleRecord>,
}

impl OwnerGarage {
    /// Number of banked vehicles.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Returns `true` if the owner has nothing banked.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Find a record by id without removing it.
    pub fn find(&self, id: RecordId) -> Option<&VehicleRecord> {
        self.vehicles.iter().find(|v| v.record_id == id)
    }

    /// Detach the record with the given id, if present.
    ///
    /// The record is removed from the collection exactly once; a second
    /// call with the same id returns `None`.
    pub fn take(&mut self, id: RecordId) -> Option<VehicleRecord> {
        let index = self.vehicles.iter().position(|v| v.record_id == id)?;
        Some(self.vehicles.remove(index))
    }
}

/// Root persisted document: every owner's collection plus the record id
/// high-water mark.
///
/// The whole document is loaded, mutated in memory, and saved back as one
/// unit. `next_record_id` persists the allocation counter so ids stay
/// globally unique across process restarts; [`Self::allocate_record_id`]
/// additionally reconciles against the maximum id actually present, so
/// documents written before the field existed still never hand out a
/// duplicate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarageDocument {
    /// Next id to hand out. 0 means "never allocated".
    #[serde(default)]
    pub next_record_id: u64,
    /// Owner id -> that owner's collection.
    #[serde(default)]
    pub owners: BTreeMap<OwnerId, OwnerGarage>,
}

impl GarageDocument {
    /// A fresh empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// The collection for `owner`, if that owner has ever banked a vehicle.
    pub fn owner(&self, owner: &OwnerId) -> Option<&OwnerGarage> {
        self.owners.get(owner)
    }

    /// The collection for `owner`, created empty if absent.
    pub fn owner_mut_or_default(&mut self, owner: &OwnerId) -> &mut OwnerGarage {
        self.owners.entry(owner.clone()).or_default()
    }

    /// Largest record id present anywhere in the document.
    pub fn max_record_id(&self) -> Option<RecordId> {
        self.owners
            .values()
            .flat_map(|garage| garage.vehicles.iter())
            .map(|v| v.record_id)
            .max()
    }

    /// Allocate the next record id and advance the high-water mark.
    ///
    /// Ids start at 1 and increase monotonically for the lifetime of the
    /// document, including across restarts and after removals.
    pub fn allocate_record_id(&mut self) -> RecordId {
        let floor = self
            .max_record_id()
            .map(|id| id.value() + 1)
            .unwrap_or(1);
        let value = self.next_record_id.max(floor).max(1);
        self.next_record_id = value + 1;
        RecordId::new(value)
    }

    /// Total number of vehicles across all owners.
    pub fn total_vehicles(&self) -> usize {
        self.owners.values().map(OwnerGarage::len).sum()
    }
}
