//! Foundation types for Motorpool.
//!
//! This crate provides the record model shared by every other Motorpool
//! crate: the identifiers used to key stored vehicles and their owners, and
//! the value types that make up the persisted garage document.
//!
//! # Key Types
//!
//! - [`RecordId`] — Monotonically allocated identifier of a banked vehicle
//! - [`OwnerId`] — Stable account identifier keying an owner's collection
//! - [`TrunkItem`] — One contained inventory entry inside a banked vehicle
//! - [`VehicleRecord`] — A banked vehicle with its captured state and trunk
//! - [`OwnerGarage`] — All vehicles banked by one owner, in insertion order
//! - [`GarageDocument`] — The root persisted document
//!
//! These are pure data: no behavior beyond structural equality, lossless
//! serde round-tripping, and id bookkeeping on the document itself.

pub mod document;
pub mod error;
pub mod id;
pub mod record;

pub use document::{GarageDocument, OwnerGarage};
pub use error::TypeError;
pub use id::{OwnerId, RecordId};
pub use record::{TrunkItem, VehicleRecord};
