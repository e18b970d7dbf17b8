//! Whole-document persistence for Motorpool.
//!
//! The garage dataset is small — one server's worth of owners and their
//! banked vehicles — so the store is deliberately coarse: the entire
//! [`GarageDocument`] lives under a single string key and is loaded,
//! mutated in memory, and saved back as one unit. Callers that need
//! atomicity across a load-mutate-save sequence serialize it themselves
//! (the garage service holds a per-key lock for exactly this reason).
//!
//! # Storage Backends
//!
//! All backends implement the [`DocumentStore`] trait:
//!
//! - [`InMemoryStore`] — `HashMap`-based store for tests and embedding
//! - [`JsonFileStore`] — one JSON file per key, atomically replaced on save
//!
//! # Design Rules
//!
//! 1. A missing key is not an error: `load` returns a fresh empty document.
//! 2. `save` replaces the whole document; there is no partial patching.
//! 3. Corrupt or unreadable data is propagated, never silently dropped.
//!
//! [`GarageDocument`]: motorpool_types::GarageDocument

pub mod error;
pub mod json_file;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use json_file::{JsonFileStore, JsonFileStoreConfig};
pub use memory::InMemoryStore;
pub use traits::DocumentStore;
