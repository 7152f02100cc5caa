use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ItemId, NewItem, StoreId};
use crate::store::{StorageBackend, StoreRepository};

pub fn add<B: StorageBackend>(
    repo: &mut StoreRepository<B>,
    new_item: NewItem,
) -> Result<CmdResult> {
    new_item.validate()?;
    let store_id = new_item.store_id.clone();

    let mut result = CmdResult::default();
    match repo.add_item(new_item)? {
        Some(item_id) => {
            if let Some(item) = repo.get_item(&store_id, &item_id) {
                result.add_message(CmdMessage::success(format!(
                    "Item added: {} (aisle {}, {})",
                    item.name, item.aisle, item.section
                )));
                result.items.push(item.clone());
            }
        }
        None => result.add_message(CmdMessage::warning(format!(
            "Store not found: {store_id}; item not added"
        ))),
    }
    Ok(result)
}

pub fn show<B: StorageBackend>(
    repo: &StoreRepository<B>,
    store_id: &StoreId,
    item_id: &ItemId,
) -> CmdResult {
    let mut result = CmdResult::default();
    match repo.get_item(store_id, item_id) {
        Some(item) => result.items.push(item.clone()),
        None => result.add_message(CmdMessage::warning(format!(
            "Item not found: {item_id} in store {store_id}"
        ))),
    }
    result
}

pub fn search<B: StorageBackend>(
    repo: &StoreRepository<B>,
    store_id: &StoreId,
    query: &str,
) -> CmdResult {
    let mut result = CmdResult::default();
    let Some(store) = repo.get_store(store_id) else {
        result.add_message(CmdMessage::warning(format!("Store not found: {store_id}")));
        return result;
    };

    let items: Vec<_> = repo
        .search_items(store_id, query)
        .into_iter()
        .cloned()
        .collect();

    if items.is_empty() {
        let message = if query.is_empty() {
            format!("{} has no items mapped yet", store.name)
        } else {
            format!("No items found matching \"{query}\"")
        };
        result.add_message(CmdMessage::info(message));
    }
    result.with_items(items)
}
