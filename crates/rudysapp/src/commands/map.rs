use crate::commands::{CmdMessage, CmdResult};
use crate::map::{self, MapView};
use crate::model::{ItemId, StoreId};
use crate::store::{StorageBackend, StoreRepository};

/// Map data for a store, zoomed onto `item_id` when it names one of the
/// store's items. An unknown item falls back to the overview.
pub fn run<B: StorageBackend>(
    repo: &StoreRepository<B>,
    store_id: &StoreId,
    item_id: Option<&ItemId>,
) -> CmdResult {
    let mut result = CmdResult::default();
    let Some(store) = repo.get_store(store_id) else {
        result.add_message(CmdMessage::warning(format!("Store not found: {store_id}")));
        result.map = Some(MapView::fallback());
        return result;
    };

    let selected = item_id.and_then(|id| {
        let item = store.item(id);
        if item.is_none() {
            result.add_message(CmdMessage::warning(format!(
                "Item not found: {id}; showing the whole store"
            )));
        }
        item
    });

    result.map = Some(map::store_map(store, selected));
    if let Some(item) = selected {
        result.items.push(item.clone());
    }
    result
}
