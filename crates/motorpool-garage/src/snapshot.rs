use serde::{Deserialize, Serialize};

use motorpool_types::{OwnerId, RecordId, TrunkItem, VehicleRecord};

/// A live vehicle's state as captured by the world adapter, ready to bank.
///
/// This is the service's input for the add operation: everything a
/// [`VehicleRecord`] needs except the record id, which the service
/// allocates. `locked_owner` carries the vehicle's access lock when the
/// adapter knows it, letting the service re-verify ownership right before
/// persisting instead of trusting a check made moments earlier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    /// Numeric type of the vehicle.
    pub vehicle_type: u16,
    /// Display name at capture time.
    pub display_name: String,
    /// Health at capture time.
    pub health: u16,
    /// Fuel at capture time.
    pub fuel: u16,
    /// Trunk contents in world order.
    pub trunk: Vec<TrunkItem>,
    /// Owner the vehicle is access-locked to, when known.
    pub locked_owner: Option<OwnerId>,
}

impl VehicleSnapshot {
    /// Turn the snapshot into a stored record under the given id.
    pub fn into_record(self, record_id: RecordId) -> VehicleRecord {
        VehicleRecord {
            record_id,
            vehicle_type: self.vehicle_type,
            display_name: self.display_name,
            health: self.health,
            fuel: self.fuel,
            trunk: self.trunk,
        }
    }
}

/// One line of a garage listing: the id to retrieve by, and the label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarageEntry {
    pub record_id: RecordId,
    pub display_name: String,
}

impl From<&VehicleRecord> for GarageEntry {
    fn from(record: &VehicleRecord) -> Self {
        Self {
            record_id: record.record_id,
            display_name: record.display_name.clone(),
        }
    }
}
