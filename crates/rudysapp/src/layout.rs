//! # Store Layout Suggestions
//!
//! Owners can hand a photo or plan of their store to a layout suggestion
//! service, which proposes aisles, sections and item placements. The service is
//! an external collaborator behind [`LayoutSuggestionService`]; this crate only
//! defines the records it speaks and what to do with its answer.
//!
//! [`DemoLayoutService`] is the stand-in used until a real service is wired
//! up: it ignores the image content and always proposes the same small layout.
//!
//! Accepting a suggestion turns each [`Suggestion`] into a [`NewItem`] for the
//! store, naming the aisle and section the service placed it in
//! ([`suggestions_to_items`]).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Result, RudysError};
use crate::model::{GeoPoint, NewItem, StoreId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aisle {
    pub id: String,
    pub name: String,
    /// Polyline along the aisle.
    pub path: Vec<GeoPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub name: String,
    pub aisle_id: String,
    pub position: GeoPoint,
}

/// A named single point: an entrance or a checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub id: String,
    pub name: String,
    pub position: GeoPoint,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    pub aisles: Vec<Aisle>,
    pub sections: Vec<Section>,
    pub entrances: Vec<Landmark>,
    pub checkouts: Vec<Landmark>,
}

/// A proposed item placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub section_id: String,
    pub position: GeoPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSuggestion {
    pub layout: Layout,
    pub suggestions: Vec<Suggestion>,
}

/// The uploaded layout picture.
#[derive(Debug, Clone)]
pub struct LayoutImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl LayoutImage {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let file_name = file_name.into();
        if bytes.is_empty() {
            return Err(RudysError::Validation(format!(
                "Layout image {file_name} is empty"
            )));
        }
        Ok(Self { file_name, bytes })
    }
}

pub trait LayoutSuggestionService {
    fn suggest_layout(&self, image: &LayoutImage) -> Result<LayoutSuggestion>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DemoLayoutService;

impl LayoutSuggestionService for DemoLayoutService {
    fn suggest_layout(&self, image: &LayoutImage) -> Result<LayoutSuggestion> {
        tracing::debug!(file = %image.file_name, bytes = image.bytes.len(), "Suggesting demo layout");

        let aisle = |id: &str, name: &str, lng: f64| Aisle {
            id: id.to_string(),
            name: name.to_string(),
            path: vec![GeoPoint::new(40.7128, lng), GeoPoint::new(40.7129, lng)],
        };
        let section = |id: &str, name: &str, aisle_id: &str, lng: f64| Section {
            id: id.to_string(),
            name: name.to_string(),
            aisle_id: aisle_id.to_string(),
            position: GeoPoint::new(40.7128, lng),
        };
        let suggestion = |name: &str, section_id: &str, lng: f64| Suggestion {
            name: name.to_string(),
            section_id: section_id.to_string(),
            position: GeoPoint::new(40.7128, lng),
        };

        Ok(LayoutSuggestion {
            layout: Layout {
                aisles: vec![
                    aisle("a1", "Aisle 1", -74.006),
                    aisle("a2", "Aisle 2", -74.005),
                    aisle("a3", "Aisle 3", -74.004),
                ],
                sections: vec![
                    section("s1", "Produce", "a1", -74.006),
                    section("s2", "Dairy", "a2", -74.005),
                    section("s3", "Bakery", "a3", -74.004),
                ],
                entrances: vec![Landmark {
                    id: "e1".to_string(),
                    name: "Main Entrance".to_string(),
                    position: GeoPoint::new(40.7127, -74.006),
                }],
                checkouts: vec![Landmark {
                    id: "c1".to_string(),
                    name: "Checkout 1".to_string(),
                    position: GeoPoint::new(40.7129, -74.007),
                }],
            },
            suggestions: vec![
                suggestion("Apples", "s1", -74.0061),
                suggestion("Milk", "s2", -74.0051),
                suggestion("Bread", "s3", -74.0041),
            ],
        })
    }
}

/// Items for `store_id` from the accepted suggestions.
///
/// Suggestions pointing at a section the layout does not define are skipped.
/// A section whose aisle is unknown keeps the raw aisle id as its aisle name.
pub fn suggestions_to_items(store_id: &StoreId, suggestion: &LayoutSuggestion) -> Vec<NewItem> {
    let aisle_names: HashMap<&str, &str> = suggestion
        .layout
        .aisles
        .iter()
        .map(|a| (a.id.as_str(), a.name.as_str()))
        .collect();
    let sections: HashMap<&str, &Section> = suggestion
        .layout
        .sections
        .iter()
        .map(|s| (s.id.as_str(), s))
        .collect();

    suggestion
        .suggestions
        .iter()
        .filter_map(|s| {
            let Some(section) = sections.get(s.section_id.as_str()) else {
                tracing::debug!(item = %s.name, section = %s.section_id, "Suggestion skipped: unknown section");
                return None;
            };
            let aisle = aisle_names
                .get(section.aisle_id.as_str())
                .copied()
                .unwrap_or(section.aisle_id.as_str());
            Some(NewItem::new(
                store_id.clone(),
                s.name.clone(),
                aisle,
                section.name.clone(),
                s.position,
            ))
        })
        .collect()
}
