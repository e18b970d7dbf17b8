use motorpool_garage::GarageError;
use thiserror::Error;

/// Errors surfaced by the command handlers.
///
/// The full user-facing taxonomy: world-query failures (`NoTarget`,
/// `NotEligible`), argument validation (`InvalidArgument`), world
/// reconstruction failures (`World`), and everything the garage service
/// reports (`Garage`). Each maps to a message fit for the player via
/// [`Self::user_message`].
#[derive(Debug, Error)]
pub enum CommandError {
    /// The world query found no vehicle to bank.
    #[error("no targeted vehicle")]
    NoTarget,

    /// The targeted vehicle fails the ownership/lock precondition.
    #[error("targeted vehicle is not eligible")]
    NotEligible,

    /// Missing or unparseable command argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The world adapter failed to reconstruct a retrieved vehicle.
    #[error("world error: {0}")]
    World(String),

    /// Garage service failure.
    #[error(transparent)]
    Garage(#[from] GarageError),
}

impl CommandError {
    /// The message presented to the user who issued the command.
    pub fn user_message(&self) -> String {
        match self {
            Self::NoTarget => "No vehicle found.".to_string(),
            Self::NotEligible | Self::Garage(GarageError::NotEligible) => {
                "You need to lock the vehicle to yourself before banking it.".to_string()
            }
            Self::InvalidArgument(_) => "You must provide a valid vehicle id.".to_string(),
            Self::World(_) => "The vehicle could not be placed back into the world.".to_string(),
            Self::Garage(GarageError::EmptyCollection) => {
                "You don't have any vehicles in your garage.".to_string()
            }
            Self::Garage(GarageError::NotFound(_)) => {
                "No vehicle with that id was found in your garage.".to_string()
            }
            Self::Garage(GarageError::Store(_)) => {
                "The garage is temporarily unavailable. Try again shortly.".to_string()
            }
        }
    }
}
