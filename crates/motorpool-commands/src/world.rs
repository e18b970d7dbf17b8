use motorpool_garage::VehicleSnapshot;
use motorpool_types::{OwnerId, VehicleRecord};
use thiserror::Error;

/// Failure while mutating live world state (spawning, applying state).
#[derive(Debug, Error)]
#[error("{0}")]
pub struct WorldError(pub String);

/// The object adapter: everything the command surface needs from the
/// live game world.
///
/// All world mutation (`destroy_vehicle`, `spawn_vehicle`) must run on the
/// world's authoritative simulation context; implementations are expected
/// to marshal onto it. The command handlers only promise ordering: a
/// vehicle is destroyed strictly after its record is persisted, and
/// spawned strictly after its record is detached from the store.
pub trait WorldAdapter {
    /// Handle to a live in-world vehicle.
    type Vehicle;

    /// The vehicle the actor is currently targeting (line of sight),
    /// if any.
    fn find_targeted_vehicle(&self, actor: &OwnerId) -> Option<Self::Vehicle>;

    /// Whether the vehicle passes the storage precondition for this actor
    /// (access-locked, and locked to the actor).
    fn is_eligible(&self, vehicle: &Self::Vehicle, actor: &OwnerId) -> bool;

    /// Capture the vehicle's bankable state: type, name, health, fuel,
    /// trunk contents in world order, and the lock owner when known.
    fn snapshot(&self, vehicle: &Self::Vehicle) -> VehicleSnapshot;

    /// Remove the live vehicle (and its trunk) from the world.
    ///
    /// Only called after the vehicle's record has been saved.
    fn destroy_vehicle(&self, vehicle: Self::Vehicle);

    /// Reconstruct a stored vehicle near the actor: spawn the typed
    /// vehicle, apply health and fuel, replay trunk contents in stored
    /// order, and re-lock it to the actor.
    fn spawn_vehicle(&self, record: &VehicleRecord, actor: &OwnerId) -> Result<(), WorldError>;
}

/// User feedback collaborator: renders a line of text to the actor.
pub trait MessageSink {
    fn present(&self, actor: &OwnerId, text: &str);
}
