//! Garage service for Motorpool.
//!
//! This crate is the business-logic core. It exposes three operations over
//! the keyed document store:
//!
//! - [`GarageService::add`] — bank a captured vehicle, allocating its id
//! - [`GarageService::list`] — list an owner's banked vehicles in order
//! - [`GarageService::retrieve`] — detach a banked vehicle by id
//!
//! Every operation is a load-mutate-save sequence against the single
//! garage document, serialized per store key so concurrent calls cannot
//! silently overwrite each other's changes.

pub mod error;
pub mod service;
pub mod snapshot;

pub use error::GarageError;
pub use service::{GarageService, DEFAULT_DOCUMENT_KEY};
pub use snapshot::{GarageEntry, VehicleSnapshot};
