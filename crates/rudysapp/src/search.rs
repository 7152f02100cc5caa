//! # Query Engine
//!
//! Free-text lookups are plain case-insensitive substring matches:
//!
//! - Items match on `name`, `aisle` or `section`.
//! - Stores match on `name` or `address`.
//!
//! Results keep collection order. An empty query matches everything, because the
//! empty string is a substring of every field; listings rely on that to show
//! the full collection when the search box is empty.

use crate::model::{Item, Store};

pub fn search_items<'a>(store: &'a Store, query: &str) -> Vec<&'a Item> {
    let term_lower = query.to_lowercase();
    store
        .items
        .iter()
        .filter(|item| {
            [&item.name, &item.aisle, &item.section]
                .iter()
                .any(|field| field.to_lowercase().contains(&term_lower))
        })
        .collect()
}

pub fn filter_stores<'a>(stores: &'a [Store], query: &str) -> Vec<&'a Store> {
    let term_lower = query.to_lowercase();
    stores
        .iter()
        .filter(|store| {
            store.name.to_lowercase().contains(&term_lower)
                || store.address.to_lowercase().contains(&term_lower)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GeoPoint, ItemId, NewItem, StoreId};
    use crate::seed::demo_stores;

    fn grocery() -> Store {
        let id = StoreId::from("S1");
        let mut store = Store {
            id: id.clone(),
            name: "Corner Grocery".to_string(),
            address: "1 Main St".to_string(),
            coordinates: GeoPoint::new(15.49, 73.83),
            image: None,
            items: Vec::new(),
        };
        for (n, (name, aisle, section)) in [
            ("Whole Milk", "B2", "Dairy"),
            ("Sourdough", "A1", "Bakery"),
            ("Milk Chocolate", "C4", "Sweets"),
        ]
        .into_iter()
        .enumerate()
        {
            store.items.push(
                NewItem::new(id.clone(), name, aisle, section, GeoPoint::new(15.49, 73.83))
                    .into_item(ItemId::new(format!("item-{n}"))),
            );
        }
        store
    }

    fn names(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn test_empty_query_returns_every_item_in_order() {
        let store = grocery();
        let results = search_items(&store, "");
        assert_eq!(
            names(&results),
            vec!["Whole Milk", "Sourdough", "Milk Chocolate"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = grocery();
        let upper = search_items(&store, "MILK");
        let lower = search_items(&store, "milk");
        assert_eq!(upper, lower);
        assert_eq!(names(&upper), vec!["Whole Milk", "Milk Chocolate"]);
    }

    #[test]
    fn test_search_matches_aisle() {
        let store = grocery();
        assert_eq!(names(&search_items(&store, "b2")), vec!["Whole Milk"]);
    }

    #[test]
    fn test_search_matches_section() {
        let store = grocery();
        assert_eq!(names(&search_items(&store, "bAkErY")), vec!["Sourdough"]);
    }

    #[test]
    fn test_search_without_match_is_empty() {
        let store = grocery();
        assert!(search_items(&store, "caviar").is_empty());
    }

    #[test]
    fn test_filter_stores_by_name_or_address() {
        let stores = demo_stores();
        let panaji: Vec<_> = filter_stores(&stores, "panaji")
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(panaji, vec!["Caculo Mall", "Magsons Superstore"]);

        let by_name = filter_stores(&stores, "GALLERIA");
        assert_eq!(by_name.len(), 1);
        assert_eq!(filter_stores(&stores, "").len(), stores.len());
    }
}
