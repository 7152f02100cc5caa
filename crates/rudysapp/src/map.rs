//! Data handed to the external map widget. The widget renders; nothing here
//! reads back from it.

use serde::Serialize;

use crate::model::{GeoPoint, Item, ItemId, Store};

pub const STORE_ZOOM: u8 = 17;
pub const ITEM_ZOOM: u8 = 19;
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 40.7128,
    lng: -74.0060,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub item_id: ItemId,
    pub label: String,
    pub position: GeoPoint,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: u8,
    pub markers: Vec<Marker>,
}

impl MapView {
    /// View used when there is no store to show.
    pub fn fallback() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: STORE_ZOOM,
            markers: Vec::new(),
        }
    }
}

/// The store overview, or a close-up on `selected` when given.
pub fn store_map(store: &Store, selected: Option<&Item>) -> MapView {
    match selected {
        Some(item) => MapView {
            center: item.coordinates,
            zoom: ITEM_ZOOM,
            markers: vec![marker(item, true)],
        },
        None => MapView {
            center: store.coordinates,
            zoom: STORE_ZOOM,
            markers: store.items.iter().map(|item| marker(item, false)).collect(),
        },
    }
}

fn marker(item: &Item, highlighted: bool) -> Marker {
    Marker {
        item_id: item.id.clone(),
        label: format!("{} ({} · {})", item.name, item.aisle, item.section),
        position: item.coordinates,
        highlighted,
    }
}
