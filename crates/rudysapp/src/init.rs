//! # Data Directory and Context Wiring
//!
//! Everything Rudy's keeps lives in one data directory: the key-value files of
//! [`FsBackend`] and the optional `rudys.toml`.
//!
//! ## Resolution Order
//!
//! [`resolve_data_dir`] picks the first of:
//! 1. An explicit override (the CLI's `--data <dir>`).
//! 2. The `RUDYS_DATA` environment variable (primarily for testing).
//! 3. The OS-appropriate data directory via the `directories` crate.
//!
//! [`initialize`] then loads the configuration from that directory and opens
//! the API over a shared [`FsBackend`].

use crate::api::RudysApi;
use crate::config::RudysConfig;
use crate::error::{Result, RudysError};
use crate::store::FsBackend;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub const DATA_DIR_ENV: &str = "RUDYS_DATA";
pub const CONFIG_FILE: &str = "rudys.toml";

pub struct RudysContext {
    pub api: RudysApi<Rc<FsBackend>>,
    pub config: RudysConfig,
    pub data_dir: PathBuf,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "rudys", "rudys")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            RudysError::Storage(format!(
                "Could not determine a data directory; pass --data or set {DATA_DIR_ENV}"
            ))
        })
}

/// Configuration from `<data_dir>/rudys.toml` and `RUDYS__*` variables.
/// A missing or unreadable file yields the defaults.
pub fn load_config(data_dir: &Path) -> RudysConfig {
    Clapfig::builder()
        .app_name("rudys")
        .file_name(CONFIG_FILE)
        .search_paths(vec![SearchPath::Path(data_dir.to_path_buf())])
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_default()
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<RudysContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = load_config(&data_dir);
    tracing::debug!(data_dir = %data_dir.display(), seed_demo_data = config.seed_demo_data, "Initializing");

    let backend = Rc::new(FsBackend::new(data_dir.clone()));
    let api = RudysApi::open(backend, config.seed_policy());

    Ok(RudysContext {
        api,
        config,
        data_dir,
    })
}
