//! # Storage Layer
//!
//! Rudy's keeps everything in a durable key-value slot: a handful of well-known
//! string keys, each holding one opaque text blob.
//!
//! | Key | Content |
//! |-----|---------|
//! | `rudys-stores` | JSON array of stores, items nested inside each store |
//! | `storeOwner` | JSON store owner, absent when logged out |
//! | `lastStoreId` | Plain string, the most recently created store |
//!
//! ## Split of Concerns
//!
//! - [`backend::StorageBackend`]: the "how" (filesystem vs memory). Synchronous
//!   get/set/remove by key.
//! - [`repository::StoreRepository`]: the "what" for the store collection.
//! - [`crate::session::SessionState`]: the "what" for the owner session.
//!
//! Both holders take the backend by value; wrap it in `Rc` to share one
//! instance between them.
//!
//! ## Persistence Model
//!
//! The full collection is the unit of persistence. Every mutation serializes
//! the whole collection and replaces the `rudys-stores` value in one write, so a
//! store and its nested items are never written separately. Two holders writing
//! the same key are not coordinated: there is one process and one user.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production, one file per key, atomic writes.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod repository;

pub use backend::StorageBackend;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
pub use repository::{SeedPolicy, StoreRepository};
