//! User command surface for Motorpool.
//!
//! Three entry points — add the targeted vehicle, list the caller's
//! garage, retrieve a vehicle by id — each mapping 1:1 onto a garage
//! service operation. This crate owns:
//!
//! - the collaborator traits the host world implements
//!   ([`WorldAdapter`], [`MessageSink`])
//! - command argument validation (a missing or non-numeric retrieve id is
//!   caught here as [`CommandError::InvalidArgument`], never deeper)
//! - the persist-then-destroy ordering: a live vehicle is removed from
//!   the world only after its record is safely saved
//!
//! Every failure is a recoverable, user-presentable condition; handlers
//! never panic and never crash the hosting process.

pub mod error;
pub mod handlers;
pub mod world;

pub use error::CommandError;
pub use handlers::GarageCommands;
pub use world::{MessageSink, WorldAdapter, WorldError};
