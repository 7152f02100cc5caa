//! # Identifier Generation
//!
//! Store and item ids are opaque strings with a readable prefix
//! (`store-…`, `item-…`). The only real contract is uniqueness within their
//! collection.
//!
//! - [`UuidIds`]: production generator, `store-<uuid v4>`.
//! - [`SequentialIds`]: monotonic counter for deterministic tests.
//!
//! Generators are not trusted blindly: the repository re-draws whenever a
//! generated id already exists in the collection (a sequential counter
//! restarting over seeded data would otherwise collide).

use std::cell::Cell;
use uuid::Uuid;

use crate::model::{ItemId, StoreId};

pub trait IdGenerator {
    fn next_store_id(&self) -> StoreId;
    fn next_item_id(&self) -> ItemId;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_store_id(&self) -> StoreId {
        StoreId::new(format!("store-{}", Uuid::new_v4()))
    }

    fn next_item_id(&self) -> ItemId {
        ItemId::new(format!("item-{}", Uuid::new_v4()))
    }
}

/// Counter shared by stores and items: `store-1`, `item-2`, `store-3`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: Cell<u64>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting after `value`.
    pub fn starting_after(value: u64) -> Self {
        Self {
            counter: Cell::new(value),
        }
    }

    fn bump(&self) -> u64 {
        let next = self.counter.get() + 1;
        self.counter.set(next);
        next
    }
}

impl IdGenerator for SequentialIds {
    fn next_store_id(&self) -> StoreId {
        StoreId::new(format!("store-{}", self.bump()))
    }

    fn next_item_id(&self) -> ItemId {
        ItemId::new(format!("item-{}", self.bump()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_ids_are_prefixed_and_unique() {
        let ids = UuidIds;
        let drawn: HashSet<StoreId> = (0..100).map(|_| ids.next_store_id()).collect();
        assert_eq!(drawn.len(), 100);
        assert!(drawn.iter().all(|id| id.as_str().starts_with("store-")));
        assert!(ids.next_item_id().as_str().starts_with("item-"));
    }

    #[test]
    fn test_sequential_ids_share_one_counter() {
        let ids = SequentialIds::new();
        assert_eq!(ids.next_store_id().as_str(), "store-1");
        assert_eq!(ids.next_item_id().as_str(), "item-2");
        assert_eq!(ids.next_store_id().as_str(), "store-3");
    }

    #[test]
    fn test_sequential_ids_starting_after() {
        let ids = SequentialIds::starting_after(41);
        assert_eq!(ids.next_item_id().as_str(), "item-42");
    }
}
