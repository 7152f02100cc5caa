//! Built-in demo collection: five stores around Goa, used when no saved data
//! exists and `seed_demo_data` is on.

use crate::model::{GeoPoint, Item, ItemId, Store, StoreId};

const STORE_IMAGE_BASE: &str = "https://images.unsplash.com";

struct SeedItem {
    id: &'static str,
    name: &'static str,
    aisle: &'static str,
    section: &'static str,
    price: &'static str,
}

struct SeedStore {
    id: &'static str,
    name: &'static str,
    address: &'static str,
    lat: f64,
    lng: f64,
    photo: &'static str,
    items: &'static [SeedItem],
}

const SEED: &[SeedStore] = &[
    SeedStore {
        id: "store-1",
        name: "Mall De Goa",
        address: "Alto Porvorim, Bardez, Goa 403521",
        lat: 15.5074,
        lng: 73.8247,
        photo: "photo-1488590528505-98d2b5aba04b",
        items: &[
            SeedItem {
                id: "item-1",
                name: "Fresh Coconuts",
                aisle: "A1",
                section: "Fresh Produce",
                price: "₹50",
            },
            SeedItem {
                id: "item-2",
                name: "Goan Sausages",
                aisle: "B2",
                section: "Meats",
                price: "₹400",
            },
        ],
    },
    SeedStore {
        id: "store-2",
        name: "Caculo Mall",
        address: "St. Inez, Panaji, Goa 403001",
        lat: 15.4909,
        lng: 73.8278,
        photo: "photo-1486312338219-ce68d2c6f44d",
        items: &[SeedItem {
            id: "item-3",
            name: "Kingfish (Vison)",
            aisle: "C1",
            section: "Seafood",
            price: "₹600",
        }],
    },
    SeedStore {
        id: "store-3",
        name: "Magsons Superstore",
        address: "Miramar, Panaji, Goa 403001",
        lat: 15.4789,
        lng: 73.8132,
        photo: "photo-1581091226825-a6a2a5aee158",
        items: &[
            SeedItem {
                id: "item-4",
                name: "Goan Fish Curry Masala",
                aisle: "D1",
                section: "Spices",
                price: "₹120",
            },
            SeedItem {
                id: "item-5",
                name: "Bebinca",
                aisle: "E2",
                section: "Local Sweets",
                price: "₹350",
            },
        ],
    },
    SeedStore {
        id: "store-4",
        name: "Riverside Galleria Mall",
        address: "Baga Road, Calangute, Goa 403516",
        lat: 15.5503,
        lng: 73.7668,
        photo: "photo-1460925895917-afdab827c52f",
        items: &[SeedItem {
            id: "item-6",
            name: "Cashew Feni",
            aisle: "F1",
            section: "Beverages",
            price: "₹500",
        }],
    },
    SeedStore {
        id: "store-5",
        name: "Sahakari Spice Farm Market",
        address: "Ponda, Goa 403401",
        lat: 15.4027,
        lng: 74.0078,
        photo: "photo-1498050108023-c5249f4df085",
        items: &[
            SeedItem {
                id: "item-7",
                name: "Organic Black Pepper",
                aisle: "G1",
                section: "Organic Spices",
                price: "₹180",
            },
            SeedItem {
                id: "item-8",
                name: "Vanilla Pods",
                aisle: "G2",
                section: "Organic Spices",
                price: "₹400",
            },
        ],
    },
];

/// The demo stores. Items are placed at their store's position.
pub fn demo_stores() -> Vec<Store> {
    SEED.iter()
        .map(|seed| {
            let position = GeoPoint::new(seed.lat, seed.lng);
            let store_id = StoreId::from(seed.id);
            Store {
                id: store_id.clone(),
                name: seed.name.to_string(),
                address: seed.address.to_string(),
                coordinates: position,
                image: Some(format!("{}/{}", STORE_IMAGE_BASE, seed.photo)),
                items: seed
                    .items
                    .iter()
                    .map(|item| Item {
                        id: ItemId::from(item.id),
                        name: item.name.to_string(),
                        aisle: item.aisle.to_string(),
                        section: item.section.to_string(),
                        price: Some(item.price.to_string()),
                        coordinates: position,
                        store_id: store_id.clone(),
                        image: None,
                    })
                    .collect(),
            }
        })
        .collect()
}
