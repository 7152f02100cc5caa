use crate::commands::{items, CmdMessage, CmdResult};
use crate::error::Result;
use crate::layout::{suggestions_to_items, LayoutImage, LayoutSuggestionService};
use crate::model::StoreId;
use crate::store::{StorageBackend, StoreRepository};

pub fn suggest<B: StorageBackend>(
    repo: &StoreRepository<B>,
    service: &dyn LayoutSuggestionService,
    store_id: &StoreId,
    image: &LayoutImage,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if repo.get_store(store_id).is_none() {
        result.add_message(CmdMessage::warning(format!("Store not found: {store_id}")));
        return Ok(result);
    }

    let suggestion = service.suggest_layout(image)?;
    result.add_message(CmdMessage::info(format!(
        "Detected {} aisles and {} sections with {} suggested items",
        suggestion.layout.aisles.len(),
        suggestion.layout.sections.len(),
        suggestion.suggestions.len()
    )));
    result.suggestion = Some(suggestion);
    Ok(result)
}

/// Runs the suggestion and adds every placed item to the store.
pub fn accept<B: StorageBackend>(
    repo: &mut StoreRepository<B>,
    service: &dyn LayoutSuggestionService,
    store_id: &StoreId,
    image: &LayoutImage,
) -> Result<CmdResult> {
    let mut result = suggest(repo, service, store_id, image)?;
    let Some(suggestion) = result.suggestion.as_ref() else {
        return Ok(result);
    };

    for new_item in suggestions_to_items(store_id, suggestion) {
        let added = items::add(repo, new_item)?;
        result.items.extend(added.items);
    }
    result.add_message(CmdMessage::success(format!(
        "Added {} suggested items",
        result.items.len()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::RudysError;
    use crate::layout::DemoLayoutService;
    use crate::store::{MemBackend, SeedPolicy};

    fn demo_repo() -> StoreRepository<MemBackend> {
        StoreRepository::open(MemBackend::new(), SeedPolicy::Demo)
    }

    fn image() -> LayoutImage {
        LayoutImage::new("floor.png", vec![0x89, 0x50, 0x4e, 0x47]).unwrap()
    }

    #[test]
    fn suggest_describes_layout() {
        let result = suggest(&demo_repo(), &DemoLayoutService, &"store-4".into(), &image()).unwrap();
        let suggestion = result.suggestion.unwrap();
        assert_eq!(suggestion.layout.aisles.len(), 3);
        assert_eq!(suggestion.suggestions.len(), 3);
    }

    #[test]
    fn suggest_unknown_store_warns() {
        let result = suggest(&demo_repo(), &DemoLayoutService, &"nope".into(), &image()).unwrap();
        assert!(result.suggestion.is_none());
        assert!(result.has_level(MessageLevel::Warning));
    }

    #[test]
    fn accept_adds_items() {
        let mut repo = demo_repo();
        let result = accept(&mut repo, &DemoLayoutService, &"store-4".into(), &image()).unwrap();

        let names: Vec<_> = result.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Apples", "Milk", "Bread"]);
        assert_eq!(repo.get_store(&"store-4".into()).unwrap().items.len(), 4);
    }

    struct FailingService;

    impl LayoutSuggestionService for FailingService {
        fn suggest_layout(&self, _image: &LayoutImage) -> Result<crate::layout::LayoutSuggestion> {
            Err(RudysError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "analysis service unreachable",
            )))
        }
    }

    #[test]
    fn service_failure_propagates() {
        let mut repo = demo_repo();
        let err = accept(&mut repo, &FailingService, &"store-4".into(), &image()).unwrap_err();
        assert!(matches!(err, RudysError::Io(_)));
        assert_eq!(repo.get_store(&"store-4".into()).unwrap().items.len(), 1);
    }
}
