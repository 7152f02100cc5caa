use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NewStore, StoreId};
use crate::store::{StorageBackend, StoreRepository};

pub fn add<B: StorageBackend>(
    repo: &mut StoreRepository<B>,
    new_store: NewStore,
) -> Result<CmdResult> {
    new_store.validate()?;
    let id = repo.add_store(new_store)?;

    let mut result = CmdResult::default();
    if let Some(store) = repo.get_store(&id) {
        result.add_message(CmdMessage::success(format!(
            "Store registered: {} ({})",
            store.name, store.id
        )));
        result.stores.push(store.clone());
    }
    Ok(result)
}

/// Stores whose name or address contains `query`; all stores without one.
pub fn list<B: StorageBackend>(repo: &StoreRepository<B>, query: Option<&str>) -> CmdResult {
    let query = query.map(str::trim).filter(|q| !q.is_empty());
    let stores: Vec<_> = repo
        .filter_stores(query.unwrap_or(""))
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if stores.is_empty() {
        match query {
            Some(q) => result.add_message(CmdMessage::info(format!(
                "No stores match \"{q}\". Try a different search term or browse all stores."
            ))),
            None => result.add_message(CmdMessage::info(
                "No stores available yet. Be the first to register your store!",
            )),
        }
    }
    result.with_stores(stores)
}

pub fn show<B: StorageBackend>(repo: &StoreRepository<B>, id: &StoreId) -> CmdResult {
    let mut result = CmdResult::default();
    match repo.get_store(id) {
        Some(store) => {
            result.summary = Some(store.summary());
            result.stores.push(store.clone());
        }
        None => result.add_message(CmdMessage::warning(format!("Store not found: {id}"))),
    }
    result
}

pub fn summary<B: StorageBackend>(repo: &StoreRepository<B>, id: &StoreId) -> CmdResult {
    let mut result = CmdResult::default();
    match repo.get_store(id) {
        Some(store) => result.summary = Some(store.summary()),
        None => result.add_message(CmdMessage::warning(format!("Store not found: {id}"))),
    }
    result
}
