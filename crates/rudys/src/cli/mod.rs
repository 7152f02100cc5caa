//! # CLI Behavior
//!
//! This is **one possible UI client** for Rudy's, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! ## Shoppers and Owners
//!
//! Browsing is open: `stores`, `store`, `search`, `item`, `nearby` and `map`
//! never need a sign-in. Registering stores, adding items and the `layout`
//! commands need a store owner, established with `owner login`.
//!
//! ### Email and Phone Sign-in
//!
//! Sign-in by email or phone takes two invocations:
//!
//! ```text
//! rudys owner login email --name "Asha" --email asha@example.com
//! rudys owner verify 123456
//! ```
//!
//! The pending sign-in is kept in the data directory between the two.
//!
//! ### Near Me
//!
//! `rudys nearby --near 15.49,73.82` ranks stores by distance. Without
//! `--near` the `home_location` setting is used; without either the stores
//! are listed in saved order with a notice.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, log setup and dispatch
//! - `render`: Output formatting (lists, details, messages, JSON)
//! - `setup`: Argument parsing via clap, help text
//! - `styles`: Terminal styling

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
