//! # Domain Model
//!
//! The data Rudy's keeps: [`Store`]s, each owning an ordered list of [`Item`]s,
//! and the [`StoreOwner`] of the current session.
//!
//! ## Ownership
//!
//! Items live inside their store (`Store::items`) and carry the owning store's
//! id in `store_id`. No item exists on its own; the invariant
//! `items[*].store_id == store.id` holds by construction and is never
//! re-validated.
//!
//! ## Coordinates
//!
//! Both stores and items are positioned with one type, [`GeoPoint`], written to
//! JSON as `{"lat": .., "lng": ..}`. Older data stored item positions as a bare
//! `[lng, lat]` pair; [`Item`]'s deserializer still accepts that form and
//! converts it, so a collection written by an old client loads unchanged.
//! Serialization always produces the object form.
//!
//! ## Identifiers
//!
//! [`StoreId`], [`ItemId`] and [`OwnerId`] are opaque strings. Nothing parses
//! them; the only contract is uniqueness within their collection (see
//! [`crate::ids`]).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{Result, RudysError};

macro_rules! string_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(StoreId);
string_id!(ItemId);
string_id!(OwnerId);

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Parses `"lat,lng"` as typed by a user, e.g. `"15.49, 73.83"`.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || RudysError::InvalidCoordinates(format!("expected \"lat,lng\", got {input:?}"));

        let (lat_raw, lng_raw) = input.split_once(',').ok_or_else(invalid)?;
        let lat: f64 = lat_raw.trim().parse().map_err(|_| invalid())?;
        let lng: f64 = lng_raw.trim().parse().map_err(|_| invalid())?;

        let point = Self::new(lat, lng);
        point.validate()?;
        Ok(point)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(RudysError::InvalidCoordinates(format!(
                "latitude {} is outside [-90, 90]",
                self.lat
            )));
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(RudysError::InvalidCoordinates(format!(
                "longitude {} is outside [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub aisle: String,
    pub section: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub coordinates: GeoPoint,
    pub store_id: StoreId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Either coordinate form found in stored item data.
///
/// `LngLat` must stay first: serde also accepts a two-element sequence for a
/// struct, which would read the legacy pair as `{lat: lng, lng: lat}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredCoordinates {
    /// Legacy `[lng, lat]` order.
    LngLat([f64; 2]),
    Point(GeoPoint),
}

impl From<StoredCoordinates> for GeoPoint {
    fn from(stored: StoredCoordinates) -> Self {
        match stored {
            StoredCoordinates::Point(point) => point,
            StoredCoordinates::LngLat([lng, lat]) => GeoPoint { lat, lng },
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemHelper {
    id: ItemId,
    name: String,
    aisle: String,
    section: String,
    #[serde(default)]
    price: Option<String>,
    coordinates: StoredCoordinates,
    store_id: StoreId,
    #[serde(default)]
    image: Option<String>,
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let helper = ItemHelper::deserialize(deserializer)?;

        Ok(Item {
            id: helper.id,
            name: helper.name,
            aisle: helper.aisle,
            section: helper.section,
            price: helper.price,
            coordinates: helper.coordinates.into(),
            store_id: helper.store_id,
            image: helper.image,
        })
    }
}

/// An item as submitted by an owner, before it has an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    pub aisle: String,
    pub section: String,
    pub price: Option<String>,
    pub coordinates: GeoPoint,
    pub store_id: StoreId,
    pub image: Option<String>,
}

impl NewItem {
    pub fn new(
        store_id: StoreId,
        name: impl Into<String>,
        aisle: impl Into<String>,
        section: impl Into<String>,
        coordinates: GeoPoint,
    ) -> Self {
        Self {
            name: name.into(),
            aisle: aisle.into(),
            section: section.into(),
            price: None,
            coordinates,
            store_id,
            image: None,
        }
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_text("item name", &self.name)?;
        require_text("aisle", &self.aisle)?;
        require_text("section", &self.section)?;
        self.coordinates.validate()
    }

    pub(crate) fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            aisle: self.aisle,
            section: self.section,
            price: self.price,
            coordinates: self.coordinates,
            store_id: self.store_id,
            image: self.image,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub address: String,
    pub coordinates: GeoPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Store {
    pub fn item(&self, item_id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == item_id)
    }

    pub fn summary(&self) -> StoreSummary {
        let aisles: HashSet<&str> = self.items.iter().map(|i| i.aisle.as_str()).collect();
        let sections: HashSet<&str> = self.items.iter().map(|i| i.section.as_str()).collect();
        StoreSummary {
            store_id: self.id.clone(),
            item_count: self.items.len(),
            aisle_count: aisles.len(),
            section_count: sections.len(),
        }
    }
}

/// A store as registered by an owner, before it has an id or items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStore {
    pub name: String,
    pub address: String,
    pub coordinates: GeoPoint,
    pub image: Option<String>,
}

impl NewStore {
    pub fn new(name: impl Into<String>, address: impl Into<String>, coordinates: GeoPoint) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            coordinates,
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_text("store name", &self.name)?;
        require_text("address", &self.address)?;
        self.coordinates.validate()
    }

    pub(crate) fn into_store(self, id: StoreId) -> Store {
        Store {
            id,
            name: self.name,
            address: self.address,
            coordinates: self.coordinates,
            image: self.image,
            items: Vec::new(),
        }
    }
}

/// Counts shown on a store's management page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSummary {
    pub store_id: StoreId,
    pub item_count: usize,
    pub aisle_count: usize,
    pub section_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    Email,
    Phone,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provider::Google => "google",
            Provider::Email => "email",
            Provider::Phone => "phone",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreOwner {
    pub id: OwnerId,
    pub name: String,
    /// Empty for owners who signed in by phone.
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub provider: Provider,
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RudysError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
