use tracing::{debug, warn};

use motorpool_garage::{GarageEntry, GarageService};
use motorpool_store::DocumentStore;
use motorpool_types::{OwnerId, RecordId, VehicleRecord};

use crate::error::CommandError;
use crate::world::{MessageSink, WorldAdapter};

/// The three user-facing garage commands, bound to their collaborators.
///
/// Borrowed wiring: the host owns the world adapter, the service, and the
/// message sink; `GarageCommands` just ties one invocation together.
pub struct GarageCommands<'a, W, S, M> {
    world: &'a W,
    service: &'a GarageService<S>,
    messages: &'a M,
}

impl<'a, W, S, M> GarageCommands<'a, W, S, M>
where
    W: WorldAdapter,
    S: DocumentStore,
    M: MessageSink,
{
    pub fn new(world: &'a W, service: &'a GarageService<S>, messages: &'a M) -> Self {
        Self {
            world,
            service,
            messages,
        }
    }

    /// `add` — bank the vehicle the actor is looking at.
    ///
    /// Order matters: the record is persisted first, and only a
    /// successful save destroys the live vehicle. A failed save leaves
    /// the world untouched so the vehicle is never lost.
    pub fn add(&self, actor: &OwnerId) -> Result<RecordId, CommandError> {
        let vehicle = self
            .world
            .find_targeted_vehicle(actor)
            .ok_or(CommandError::NoTarget)?;

        if !self.world.is_eligible(&vehicle, actor) {
            return Err(CommandError::NotEligible);
        }

        let snapshot = self.world.snapshot(&vehicle);
        let name = snapshot.display_name.clone();

        let record_id = self.service.add(actor, snapshot)?;

        // Persisted; now the live copy may go.
        self.world.destroy_vehicle(vehicle);

        self.messages.present(
            actor,
            &format!("Vehicle {name} has been added to your garage (id {record_id})."),
        );
        Ok(record_id)
    }

    /// `list` — one line per banked vehicle, in the order they were added.
    pub fn list(&self, actor: &OwnerId) -> Result<Vec<GarageEntry>, CommandError> {
        let entries = self.service.list(actor)?;
        debug!(%actor, count = entries.len(), "listing garage");

        for entry in &entries {
            self.messages.present(
                actor,
                &format!("ID: {} - Vehicle: {}", entry.record_id, entry.display_name),
            );
        }
        Ok(entries)
    }

    /// `retrieve <id>` — reinstate a banked vehicle into the world.
    ///
    /// The id argument is validated here: absent or non-numeric input
    /// becomes [`CommandError::InvalidArgument`] and never reaches the
    /// service.
    pub fn retrieve(
        &self,
        actor: &OwnerId,
        raw_id: Option<&str>,
    ) -> Result<VehicleRecord, CommandError> {
        let raw = raw_id
            .ok_or_else(|| CommandError::InvalidArgument("missing vehicle id".to_string()))?;
        let record_id: RecordId = raw
            .parse()
            .map_err(|_| CommandError::InvalidArgument(format!("not a vehicle id: {raw:?}")))?;

        let record = self.service.retrieve(actor, record_id)?;

        if let Err(e) = self.world.spawn_vehicle(&record, actor) {
            // The record is already detached from the store; surface the
            // failure loudly so an operator can restore it.
            warn!(%actor, %record_id, error = %e, "retrieved vehicle failed to spawn");
            return Err(CommandError::World(e.to_string()));
        }

        self.messages.present(
            actor,
            &format!(
                "Vehicle {} (id {}) has been retrieved from your garage.",
                record.display_name, record.record_id
            ),
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    use motorpool_garage::VehicleSnapshot;
    use motorpool_store::InMemoryStore;
    use motorpool_types::TrunkItem;

    use crate::world::WorldError;

    /// A scripted world: one optional targeted vehicle, plus counters for
    /// the mutations the handlers are allowed to perform.
    #[derive(Default)]
    struct MockWorld {
        target: RefCell<Option<VehicleSnapshot>>,
        eligible: Cell<bool>,
        destroyed: Cell<usize>,
        spawned: RefCell<Vec<VehicleRecord>>,
        fail_spawn: Cell<bool>,
    }

    impl MockWorld {
        fn with_target(snapshot: VehicleSnapshot) -> Self {
            let world = Self {
                eligible: Cell::new(true),
                ..Self::default()
            };
            *world.target.borrow_mut() = Some(snapshot);
            world
        }
    }

    impl WorldAdapter for MockWorld {
        type Vehicle = VehicleSnapshot;

        fn find_targeted_vehicle(&self, _actor: &OwnerId) -> Option<Self::Vehicle> {
            self.target.borrow().clone()
        }

        fn is_eligible(&self, _vehicle: &Self::Vehicle, _actor: &OwnerId) -> bool {
            self.eligible.get()
        }

        fn snapshot(&self, vehicle: &Self::Vehicle) -> VehicleSnapshot {
            vehicle.clone()
        }

        fn destroy_vehicle(&self, _vehicle: Self::Vehicle) {
            self.destroyed.set(self.destroyed.get() + 1);
            *self.target.borrow_mut() = None;
        }

        fn spawn_vehicle(
            &self,
            record: &VehicleRecord,
            _actor: &OwnerId,
        ) -> Result<(), WorldError> {
            if self.fail_spawn.get() {
                return Err(WorldError("simulation context rejected spawn".into()));
            }
            self.spawned.borrow_mut().push(record.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        lines: RefCell<Vec<String>>,
    }

    impl MessageSink for RecordingSink {
        fn present(&self, _actor: &OwnerId, text: &str) {
            self.lines.borrow_mut().push(text.to_string());
        }
    }

    fn actor() -> OwnerId {
        OwnerId::new("76561100000000001")
    }

    fn snapshot() -> VehicleSnapshot {
        VehicleSnapshot {
            vehicle_type: 1,
            display_name: "Offroader".into(),
            health: 100,
            fuel: 50,
            trunk: vec![TrunkItem::new(10, 0)],
            locked_owner: Some(actor()),
        }
    }

    fn service() -> GarageService<InMemoryStore> {
        GarageService::new(InMemoryStore::new())
    }

    // -----------------------------------------------------------------------
    // add
    // -----------------------------------------------------------------------

    #[test]
    fn add_persists_then_destroys() {
        let world = MockWorld::with_target(snapshot());
        let svc = service();
        let sink = RecordingSink::default();
        let commands = GarageCommands::new(&world, &svc, &sink);

        let id = commands.add(&actor()).unwrap();
        assert_eq!(id, RecordId::new(1));
        assert_eq!(world.destroyed.get(), 1);
        assert_eq!(svc.list(&actor()).unwrap().len(), 1);
        assert!(sink.lines.borrow()[0].contains("added to your garage"));
    }

    #[test]
    fn add_without_target_reports_no_target() {
        let world = MockWorld::default();
        let svc = service();
        let sink = RecordingSink::default();
        let commands = GarageCommands::new(&world, &svc, &sink);

        let err = commands.add(&actor()).unwrap_err();
        assert!(matches!(err, CommandError::NoTarget));
        assert!(sink.lines.borrow().is_empty());
    }

    #[test]
    fn add_rejects_ineligible_target_without_touching_the_store() {
        let world = MockWorld::with_target(snapshot());
        world.eligible.set(false);
        let svc = service();
        let sink = RecordingSink::default();
        let commands = GarageCommands::new(&world, &svc, &sink);

        let err = commands.add(&actor()).unwrap_err();
        assert!(matches!(err, CommandError::NotEligible));
        assert_eq!(world.destroyed.get(), 0);
        assert!(svc.list(&actor()).is_err());
    }

    #[test]
    fn failed_save_never_destroys_the_live_vehicle() {
        let world = MockWorld::with_target(snapshot());
        let svc = service();
        svc.store().fail_next_save();
        let sink = RecordingSink::default();
        let commands = GarageCommands::new(&world, &svc, &sink);

        let err = commands.add(&actor()).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Garage(motorpool_garage::GarageError::Store(_))
        ));

        // The vehicle is still in the world and no record was stored.
        assert_eq!(world.destroyed.get(), 0);
        assert!(world.target.borrow().is_some());
        assert!(svc.list(&actor()).is_err());
    }

    // -----------------------------------------------------------------------
    // list
    // -----------------------------------------------------------------------

    #[test]
    fn list_presents_one_line_per_vehicle() {
        let world = MockWorld::with_target(snapshot());
        let svc = service();
        let sink = RecordingSink::default();
        let commands = GarageCommands::new(&world, &svc, &sink);

        commands.add(&actor()).unwrap();
        sink.lines.borrow_mut().clear();

        let entries = commands.list(&actor()).unwrap();
        assert_eq!(entries.len(), 1);

        let lines = sink.lines.borrow();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("ID: 1"));
        assert!(lines[0].contains("Offroader"));
    }

    #[test]
    fn list_for_new_owner_is_empty_collection() {
        let world = MockWorld::default();
        let svc = service();
        let sink = RecordingSink::default();
        let commands = GarageCommands::new(&world, &svc, &sink);

        let err = commands.list(&actor()).unwrap_err();
        assert_eq!(err.user_message(), "You don't have any vehicles in your garage.");
    }

    // -----------------------------------------------------------------------
    // retrieve
    // -----------------------------------------------------------------------

    #[test]
    fn retrieve_round_trips_the_whole_vehicle() {
        let mut snap = snapshot();
        snap.trunk = vec![
            TrunkItem::new(10, 0),
            TrunkItem::with_metadata(363, 87, vec![4, 5, 6]),
        ];
        let world = MockWorld::with_target(snap.clone());
        let svc = service();
        let sink = RecordingSink::default();
        let commands = GarageCommands::new(&world, &svc, &sink);

        let id = commands.add(&actor()).unwrap();
        let record = commands.retrieve(&actor(), Some(&id.to_string())).unwrap();

        assert_eq!(record.health, snap.health);
        assert_eq!(record.fuel, snap.fuel);
        assert_eq!(record.trunk, snap.trunk);

        // The spawned copy matches the stored record exactly.
        let spawned = world.spawned.borrow();
        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned[0], record);

        // And the garage no longer lists it.
        assert!(commands.list(&actor()).unwrap().is_empty());
    }

    #[test]
    fn retrieve_without_argument_is_invalid() {
        let world = MockWorld::default();
        let svc = service();
        let sink = RecordingSink::default();
        let commands = GarageCommands::new(&world, &svc, &sink);

        let err = commands.retrieve(&actor(), None).unwrap_err();
        assert!(matches!(err, CommandError::InvalidArgument(_)));
    }

    #[test]
    fn retrieve_with_non_numeric_argument_is_invalid() {
        let world = MockWorld::default();
        let svc = service();
        let sink = RecordingSink::default();
        let commands = GarageCommands::new(&world, &svc, &sink);

        let err = commands.retrieve(&actor(), Some("banana")).unwrap_err();
        assert!(matches!(err, CommandError::InvalidArgument(_)));
    }

    #[test]
    fn second_retrieve_of_same_id_is_not_found() {
        let world = MockWorld::with_target(snapshot());
        let svc = service();
        let sink = RecordingSink::default();
        let commands = GarageCommands::new(&world, &svc, &sink);

        let id = commands.add(&actor()).unwrap();
        commands.retrieve(&actor(), Some(&id.to_string())).unwrap();

        let err = commands
            .retrieve(&actor(), Some(&id.to_string()))
            .unwrap_err();
        assert_eq!(
            err.user_message(),
            "No vehicle with that id was found in your garage."
        );
    }

    #[test]
    fn spawn_failure_is_surfaced_as_world_error() {
        let world = MockWorld::with_target(snapshot());
        world.fail_spawn.set(true);
        let svc = service();
        let sink = RecordingSink::default();
        let commands = GarageCommands::new(&world, &svc, &sink);

        let id = commands.add(&actor()).unwrap();
        let err = commands
            .retrieve(&actor(), Some(&id.to_string()))
            .unwrap_err();
        assert!(matches!(err, CommandError::World(_)));
    }
}
