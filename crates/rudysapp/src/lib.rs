//! # Rudy's Architecture
//!
//! Rudy's is a **UI-agnostic store locator library**. Shoppers look up items inside a
//! store and see where they sit on the store map; store owners register stores and
//! map their items. The terminal client in `crates/rudys` is one consumer of this
//! library, not the application itself.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View Layer (crates/rudys, or any other UI)                 │
//! │  - Parses input, renders output, owns terminal I/O          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Single data-access facade                                │
//! │  - Applies the owner guard, dispatches to commands          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns structured `CmdResult`           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  State Layer (store/, session.rs)                           │
//! │  - StoreRepository and SessionState over a key-value slot   │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust values and returns plain Rust
//! types. It never prints, never exits the process and never assumes a terminal.
//! Diagnostics go through `tracing`; the host decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Key-value backends and the persistent store repository
//! - [`session`]: The current store owner and the simulated sign-in flow
//! - [`search`]: Case-insensitive substring queries over items and stores
//! - [`geo`]: Haversine distance, location providers and "near me" ranking
//! - [`layout`]: Typed layout records and the layout suggestion collaborator
//! - [`map`]: Data fed to the external map widget
//! - [`model`]: Core data types (`Store`, `Item`, `StoreOwner`, `GeoPoint`)
//! - [`ids`]: Identifier generation
//! - [`seed`]: The built-in demo collection
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context wiring
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod init;
pub mod layout;
pub mod map;
pub mod model;
pub mod search;
pub mod seed;
pub mod session;
pub mod store;
