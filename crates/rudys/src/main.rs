//! # Rudy's CLI Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/rudysapp/`: Core library with UI-agnostic store locator logic
//! - `crates/rudys/`: This CLI tool, depends on the `rudysapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/rudys/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering via console styles (render.rs)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/rudysapp/src/api.rs)                     │
//! │  - Owner guard, dispatch to command modules                 │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns
//! argument parsing, context initialization, log setup, rendering and exit
//! codes.
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests next to each module, filesystem tests under
//!   `crates/rudysapp/tests/`.
//! - **Rendering**: canned `CmdResult` values rendered with colors disabled.
//! - **End to end**: `tests/cli_e2e.rs` runs the binary against a temporary
//!   data directory through `RUDYS_DATA`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
