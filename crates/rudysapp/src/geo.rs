//! # Geolocation and "Near Me"
//!
//! Ranking stores by proximity needs two things: where the user is, and how far
//! that is from each store.
//!
//! - [`LocationProvider`] stands in for the platform location service. A fix is
//!   a single request; it can fail (permission denied, no capability, timeout),
//!   which is reported as [`RudysError::LocationUnavailable`].
//! - [`distance_km`] is the great-circle distance (haversine, Earth radius
//!   6371 km).
//! - [`nearby`] combines both and degrades gracefully: without a fix the
//!   collection is returned unranked together with the reason, so the caller can
//!   show a passing notice and carry on.

use serde::Serialize;

use crate::error::{Result, RudysError};
use crate::model::{GeoPoint, Store};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push h a hair past 1 for antipodal points.
    let c = 2.0 * h.sqrt().min(1.0).asin();
    EARTH_RADIUS_KM * c
}

pub trait LocationProvider {
    fn locate(&self) -> Result<GeoPoint>;
}

/// A location known up front, e.g. typed by the user or set in the config.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub GeoPoint);

impl LocationProvider for FixedLocation {
    fn locate(&self) -> Result<GeoPoint> {
        Ok(self.0)
    }
}

/// No location capability at all.
#[derive(Debug, Clone, Default)]
pub struct NoLocation {
    reason: Option<String>,
}

impl NoLocation {
    pub fn because(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }
}

impl LocationProvider for NoLocation {
    fn locate(&self) -> Result<GeoPoint> {
        Err(RudysError::LocationUnavailable(
            self.reason
                .clone()
                .unwrap_or_else(|| "no location source configured".to_string()),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedStore {
    pub store: Store,
    pub distance_km: f64,
}

/// Stores sorted by distance from `origin`, nearest first. Ties keep
/// collection order.
pub fn rank_by_distance(stores: &[Store], origin: GeoPoint) -> Vec<RankedStore> {
    let mut ranked: Vec<RankedStore> = stores
        .iter()
        .map(|store| RankedStore {
            distance_km: distance_km(origin, store.coordinates),
            store: store.clone(),
        })
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Nearby {
    Ranked {
        origin: GeoPoint,
        stores: Vec<RankedStore>,
    },
    /// Location failed; the collection as-is plus the reason.
    Unranked { stores: Vec<Store>, reason: String },
}

pub fn nearby(stores: &[Store], provider: &dyn LocationProvider) -> Nearby {
    match provider.locate() {
        Ok(origin) => Nearby::Ranked {
            origin,
            stores: rank_by_distance(stores, origin),
        },
        Err(e) => {
            tracing::debug!(error = %e, "Location unavailable, keeping collection order");
            let reason = match e {
                RudysError::LocationUnavailable(reason) => reason,
                other => other.to_string(),
            };
            Nearby::Unranked {
                stores: stores.to_vec(),
                reason,
            }
        }
    }
}
