//! # Configuration
//!
//! Rudy's configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and programmatic overrides.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `RUDYS__SEED_DEMO_DATA`, `RUDYS__HOME_LOCATION`.
//! 2. **Data directory config**: `<data dir>/rudys.toml`.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `seed_demo_data` | `true` | Start from the demo stores when nothing is saved yet |
//! | `home_location` | unset | `"lat,lng"` used by `nearby` when no location is given |

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geo::{FixedLocation, LocationProvider, NoLocation};
use crate::model::GeoPoint;
use crate::store::SeedPolicy;

/// Configuration for Rudy's, stored in `rudys.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RudysConfig {
    /// Start from the built-in demo stores when no saved collection exists.
    #[config(default = true)]
    pub seed_demo_data: bool,

    /// Fallback location for "near me" ranking, as "lat,lng".
    pub home_location: Option<String>,
}

impl Default for RudysConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            home_location: None,
        }
    }
}

impl RudysConfig {
    pub fn seed_policy(&self) -> SeedPolicy {
        if self.seed_demo_data {
            SeedPolicy::Demo
        } else {
            SeedPolicy::Empty
        }
    }

    /// The configured home location, validated.
    pub fn home_location(&self) -> Result<Option<GeoPoint>> {
        self.home_location
            .as_deref()
            .map(GeoPoint::parse)
            .transpose()
    }

    /// Location source for "near me": `explicit` wins over the home location.
    pub fn location_provider(&self, explicit: Option<GeoPoint>) -> Result<Box<dyn LocationProvider>> {
        let point = match explicit {
            Some(point) => Some(point),
            None => self.home_location()?,
        };
        let provider: Box<dyn LocationProvider> = match point {
            Some(point) => Box::new(FixedLocation(point)),
            None => Box::new(NoLocation::because(
                "no location given; pass --near lat,lng or set home_location",
            )),
        };
        Ok(provider)
    }
}
