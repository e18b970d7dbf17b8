use colored::Colorize;

use motorpool_commands::{CommandError, GarageCommands};
use motorpool_garage::{GarageService, VehicleSnapshot};
use motorpool_store::JsonFileStore;
use motorpool_types::OwnerId;

use crate::cli::{AddArgs, Cli, Command};
use crate::sim::{parse_trunk_item, SimWorld, TerminalSink};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let store = JsonFileStore::open(&cli.data_dir)?;
    let service = GarageService::new(store);
    let actor = OwnerId::new(cli.owner.clone());

    let world = match &cli.command {
        Command::Add(args) => SimWorld::with_target(build_target(args, &actor)?),
        _ => SimWorld::empty(),
    };
    let sink = TerminalSink;
    let commands = GarageCommands::new(&world, &service, &sink);

    let result = match &cli.command {
        Command::Add(_) => commands.add(&actor).map(|_| ()),
        Command::List(_) => commands.list(&actor).map(|_| ()),
        Command::Retrieve(args) => commands.retrieve(&actor, args.id.as_deref()).map(|_| ()),
    };

    if let Err(err) = result {
        // Recoverable, user-facing conditions; never a process failure.
        println!("{}", err.user_message().red());
        if let CommandError::Garage(inner) = &err {
            tracing::warn!(error = %inner, "command failed");
        }
    }
    Ok(())
}

fn build_target(args: &AddArgs, actor: &OwnerId) -> anyhow::Result<VehicleSnapshot> {
    let mut trunk = Vec::with_capacity(args.trunk.len());
    for spec in &args.trunk {
        trunk.push(parse_trunk_item(spec).map_err(|e| anyhow::anyhow!(e))?);
    }

    Ok(VehicleSnapshot {
        vehicle_type: args.vehicle_type,
        display_name: args.name.clone(),
        health: args.health,
        fuel: args.fuel,
        trunk,
        locked_owner: if args.unlocked {
            None
        } else {
            Some(actor.clone())
        },
    })
}
