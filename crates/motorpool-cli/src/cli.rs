use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "motorpool",
    about = "Motorpool — bank vehicles into a persistent garage and get them back",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Acting owner (stable account id).
    #[arg(long, global = true, default_value = "player-1")]
    pub owner: String,

    /// Directory the garage document is persisted under.
    #[arg(long, global = true, default_value = ".motorpool")]
    pub data_dir: PathBuf,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Bank the targeted vehicle into your garage
    Add(AddArgs),
    /// List the vehicles in your garage
    List(ListArgs),
    /// Retrieve a vehicle from your garage by id
    Retrieve(RetrieveArgs),
}

/// Describes the simulated vehicle the actor is "looking at".
#[derive(Args)]
pub struct AddArgs {
    /// Numeric vehicle type.
    #[arg(long, default_value = "1")]
    pub vehicle_type: u16,

    /// Display name of the vehicle.
    #[arg(long, default_value = "Offroader")]
    pub name: String,

    #[arg(long, default_value = "100")]
    pub health: u16,

    #[arg(long, default_value = "50")]
    pub fuel: u16,

    /// Trunk item as KIND:DURABILITY or KIND:DURABILITY:HEXMETA.
    /// Repeat for multiple items; order is preserved.
    #[arg(long = "trunk-item", value_name = "SPEC")]
    pub trunk: Vec<String>,

    /// Simulate a vehicle that is not locked to you.
    #[arg(long)]
    pub unlocked: bool,
}

#[derive(Args)]
pub struct ListArgs {}

#[derive(Args)]
pub struct RetrieveArgs {
    /// Record id as printed by `list`. Kept raw so bad input surfaces as
    /// a friendly message rather than a parse panic.
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_add_defaults() {
        let cli = Cli::try_parse_from(["motorpool", "add"]).unwrap();
        if let Command::Add(args) = cli.command {
            assert_eq!(args.name, "Offroader");
            assert_eq!(args.health, 100);
            assert!(args.trunk.is_empty());
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_add_with_trunk_items() {
        let cli = Cli::try_parse_from([
            "motorpool",
            "add",
            "--trunk-item",
            "10:0",
            "--trunk-item",
            "363:87:deadbeef",
        ])
        .unwrap();
        if let Command::Add(args) = cli.command {
            assert_eq!(args.trunk, vec!["10:0", "363:87:deadbeef"]);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_list() {
        let cli = Cli::try_parse_from(["motorpool", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List(_)));
    }

    #[test]
    fn parse_retrieve_with_id() {
        let cli = Cli::try_parse_from(["motorpool", "retrieve", "3"]).unwrap();
        if let Command::Retrieve(args) = cli.command {
            assert_eq!(args.id, Some("3".into()));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_retrieve_without_id_still_parses() {
        // Argument presence is validated by the command layer, not clap.
        let cli = Cli::try_parse_from(["motorpool", "retrieve"]).unwrap();
        if let Command::Retrieve(args) = cli.command {
            assert_eq!(args.id, None);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_global_owner_and_data_dir() {
        let cli = Cli::try_parse_from([
            "motorpool",
            "--owner",
            "76561100000000001",
            "--data-dir",
            "/tmp/garage",
            "list",
        ])
        .unwrap();
        assert_eq!(cli.owner, "76561100000000001");
        assert_eq!(cli.data_dir, PathBuf::from("/tmp/garage"));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["motorpool", "--verbose", "list"]).unwrap();
        assert!(cli.verbose);
    }
}
