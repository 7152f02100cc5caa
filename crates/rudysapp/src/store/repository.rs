use super::backend::{StorageBackend, LAST_STORE_KEY, STORES_KEY};
use crate::error::{Result, RudysError};
use crate::ids::{IdGenerator, UuidIds};
use crate::model::{Item, ItemId, NewItem, NewStore, Store, StoreId};
use crate::search;
use crate::seed::demo_stores;

/// Attempts at drawing an id that is not already taken.
const MAX_ID_DRAWS: usize = 16;

/// What the repository starts from when nothing usable is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// The built-in demo stores.
    #[default]
    Demo,
    /// No stores at all.
    Empty,
}

impl SeedPolicy {
    fn initial_stores(self) -> Vec<Store> {
        match self {
            SeedPolicy::Demo => demo_stores(),
            SeedPolicy::Empty => Vec::new(),
        }
    }
}

/// The canonical store collection, mirrored to a [`StorageBackend`].
///
/// The whole collection (stores with nested items) is the unit of
/// persistence: every mutation re-serializes all of it under
/// [`STORES_KEY`]. Reads never touch the backend.
pub struct StoreRepository<B: StorageBackend> {
    backend: B,
    ids: Box<dyn IdGenerator>,
    stores: Vec<Store>,
}

impl<B: StorageBackend> StoreRepository<B> {
    /// Restore the collection from `backend`.
    ///
    /// Missing data yields the `seed` collection. Unreadable or unparseable
    /// data is logged and also yields the `seed` collection; opening never
    /// fails.
    pub fn open(backend: B, seed: SeedPolicy) -> Self {
        let stores = load_stores(&backend, seed);
        Self {
            backend,
            ids: Box::new(UuidIds),
            stores,
        }
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// All stores in insertion order.
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub fn add_store(&mut self, new_store: NewStore) -> Result<StoreId> {
        let id = self.fresh_store_id()?;

        let mut next = self.stores.clone();
        next.push(new_store.into_store(id.clone()));
        self.commit(next)?;

        // Convenience pointer only; a failure here must not undo the store.
        if let Err(e) = self.backend.set(LAST_STORE_KEY, id.as_str()) {
            tracing::warn!(error = %e, store_id = %id, "Failed to record last store id");
        }

        tracing::debug!(store_id = %id, "Store added");
        Ok(id)
    }

    /// Append an item to the store named by `new_item.store_id`.
    ///
    /// Returns `Ok(None)` without writing anything when that store does not
    /// exist.
    pub fn add_item(&mut self, new_item: NewItem) -> Result<Option<ItemId>> {
        let Some(position) = self
            .stores
            .iter()
            .position(|store| store.id == new_item.store_id)
        else {
            tracing::debug!(store_id = %new_item.store_id, "Item dropped: no such store");
            return Ok(None);
        };

        let id = self.fresh_item_id()?;
        let mut next = self.stores.clone();
        next[position].items.push(new_item.into_item(id.clone()));
        self.commit(next)?;

        tracing::debug!(item_id = %id, "Item added");
        Ok(Some(id))
    }

    pub fn get_store(&self, id: &StoreId) -> Option<&Store> {
        self.stores.iter().find(|store| &store.id == id)
    }

    pub fn get_item(&self, store_id: &StoreId, item_id: &ItemId) -> Option<&Item> {
        self.get_store(store_id)?.item(item_id)
    }

    /// Items of one store matching `query`; empty when the store is unknown.
    pub fn search_items(&self, store_id: &StoreId, query: &str) -> Vec<&Item> {
        match self.get_store(store_id) {
            Some(store) => search::search_items(store, query),
            None => Vec::new(),
        }
    }

    pub fn filter_stores(&self, query: &str) -> Vec<&Store> {
        search::filter_stores(&self.stores, query)
    }

    /// The most recently created store, if it still exists.
    pub fn last_store_id(&self) -> Option<StoreId> {
        let raw = match self.backend.get(LAST_STORE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read last store id");
                return None;
            }
        };
        let id = StoreId::new(raw.trim());
        self.get_store(&id).map(|store| store.id.clone())
    }

    /// Write `next` first, adopt it only once the write succeeded.
    fn commit(&mut self, next: Vec<Store>) -> Result<()> {
        let content = serde_json::to_string(&next).map_err(RudysError::Serialization)?;
        self.backend.set(STORES_KEY, &content)?;
        self.stores = next;
        Ok(())
    }

    fn fresh_store_id(&self) -> Result<StoreId> {
        for _ in 0..MAX_ID_DRAWS {
            let id = self.ids.next_store_id();
            if self.get_store(&id).is_none() {
                return Ok(id);
            }
        }
        Err(RudysError::Storage(
            "Could not generate an unused store id".to_string(),
        ))
    }

    fn fresh_item_id(&self) -> Result<ItemId> {
        for _ in 0..MAX_ID_DRAWS {
            let id = self.ids.next_item_id();
            let taken = self
                .stores
                .iter()
                .any(|store| store.item(&id).is_some());
            if !taken {
                return Ok(id);
            }
        }
        Err(RudysError::Storage(
            "Could not generate an unused item id".to_string(),
        ))
    }
}

fn load_stores<B: StorageBackend>(backend: &B, seed: SeedPolicy) -> Vec<Store> {
    let raw = match backend.get(STORES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return seed.initial_stores(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read stored data");
            return seed.initial_stores();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(stores) => stores,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse stored data");
            seed.initial_stores()
        }
    }
}
