use std::cell::RefCell;

use colored::Colorize;

use motorpool_commands::{MessageSink, WorldAdapter, WorldError};
use motorpool_garage::VehicleSnapshot;
use motorpool_types::{OwnerId, TrunkItem, VehicleRecord};

/// A stand-in for the game engine: holds at most one "targeted" vehicle
/// and prints world mutations instead of performing them.
///
/// Eligibility mirrors the real rule: the vehicle must be access-locked,
/// and locked to the acting owner.
pub struct SimWorld {
    target: RefCell<Option<VehicleSnapshot>>,
}

impl SimWorld {
    /// A world with nothing in the actor's line of sight.
    pub fn empty() -> Self {
        Self {
            target: RefCell::new(None),
        }
    }

    /// A world where the actor is looking at the given vehicle.
    pub fn with_target(snapshot: VehicleSnapshot) -> Self {
        Self {
            target: RefCell::new(Some(snapshot)),
        }
    }
}

impl WorldAdapter for SimWorld {
    type Vehicle = VehicleSnapshot;

    fn find_targeted_vehicle(&self, _actor: &OwnerId) -> Option<Self::Vehicle> {
        self.target.borrow().clone()
    }

    fn is_eligible(&self, vehicle: &Self::Vehicle, actor: &OwnerId) -> bool {
        vehicle.locked_owner.as_ref() == Some(actor)
    }

    fn snapshot(&self, vehicle: &Self::Vehicle) -> VehicleSnapshot {
        vehicle.clone()
    }

    fn destroy_vehicle(&self, vehicle: Self::Vehicle) {
        *self.target.borrow_mut() = None;
        println!(
            "  {} {} despawned (trunk cleared: {} items)",
            "world:".dimmed(),
            vehicle.display_name,
            vehicle.trunk.len()
        );
    }

    fn spawn_vehicle(&self, record: &VehicleRecord, actor: &OwnerId) -> Result<(), WorldError> {
        println!(
            "  {} {} spawned near {} (type {}, health {}, fuel {}, trunk {} items)",
            "world:".dimmed(),
            record.display_name,
            actor,
            record.vehicle_type,
            record.health,
            record.fuel,
            record.trunk.len()
        );
        Ok(())
    }
}

/// Prints presented messages the way the in-game chat would show them.
pub struct TerminalSink;

impl MessageSink for TerminalSink {
    fn present(&self, _actor: &OwnerId, text: &str) {
        println!("{}", text.green());
    }
}

/// Parse a `KIND:DURABILITY[:HEXMETA]` trunk item spec.
pub fn parse_trunk_item(spec: &str) -> Result<TrunkItem, String> {
    let mut parts = spec.splitn(3, ':');
    let kind = parts
        .next()
        .and_then(|p| p.parse::<u16>().ok())
        .ok_or_else(|| format!("bad trunk item kind in {spec:?}"))?;
    let durability = parts
        .next()
        .and_then(|p| p.parse::<u8>().ok())
        .ok_or_else(|| format!("bad trunk item durability in {spec:?}"))?;
    let metadata = match parts.next() {
        Some(meta) => hex::decode(meta).map_err(|_| format!("bad hex metadata in {spec:?}"))?,
        None => Vec::new(),
    };
    Ok(TrunkItem::with_metadata(kind, durability, metadata))
}
