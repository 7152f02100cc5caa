//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all Rudy's operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Guards** owner-only operations through [`SessionState::require_owner`]
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Location lookup**: Callers hand in a [`LocationProvider`]
//!
//! ## Owner-only Operations
//!
//! Registering stores, adding items and working with layout suggestions need a
//! signed-in owner. Without one they fail with
//! [`RudysError::NotLoggedIn`](crate::error::RudysError::NotLoggedIn) before
//! touching the repository. Everything else is open to shoppers.
//!
//! ## Generic Over StorageBackend
//!
//! `RudysApi<B: StorageBackend>` is generic over the key-value slot:
//! - Production: `RudysApi<Rc<FsBackend>>`
//! - Testing: `RudysApi<Rc<MemBackend>>`
//!
//! The repository and the session share one backend, which is why
//! [`RudysApi::open`] wants a `Clone` handle.

use crate::commands;
use crate::error::Result;
use crate::geo::LocationProvider;
use crate::layout::{DemoLayoutService, LayoutImage, LayoutSuggestionService};
use crate::model::{ItemId, NewItem, NewStore, Provider, StoreId};
use crate::session::SessionState;
use crate::store::{SeedPolicy, StorageBackend, StoreRepository};

/// The main API facade for Rudy's operations.
pub struct RudysApi<B: StorageBackend> {
    repository: StoreRepository<B>,
    session: SessionState<B>,
    layout: Box<dyn LayoutSuggestionService>,
}

impl<B: StorageBackend> RudysApi<B> {
    pub fn new(
        repository: StoreRepository<B>,
        session: SessionState<B>,
        layout: Box<dyn LayoutSuggestionService>,
    ) -> Self {
        Self {
            repository,
            session,
            layout,
        }
    }

    /// Opens repository and session over the same backend, with the demo
    /// layout service.
    pub fn open(backend: B, seed: SeedPolicy) -> Self
    where
        B: Clone,
    {
        Self::new(
            StoreRepository::open(backend.clone(), seed),
            SessionState::open(backend),
            Box::new(DemoLayoutService),
        )
    }

    pub fn with_layout_service(mut self, layout: impl LayoutSuggestionService + 'static) -> Self {
        self.layout = Box::new(layout);
        self
    }

    pub fn repository(&self) -> &StoreRepository<B> {
        &self.repository
    }

    pub fn session(&self) -> &SessionState<B> {
        &self.session
    }

    /// The store registered most recently, if it still exists.
    pub fn last_store_id(&self) -> Option<StoreId> {
        self.repository.last_store_id()
    }

    pub fn add_store(&mut self, new_store: NewStore) -> Result<commands::CmdResult> {
        self.session.require_owner()?;
        commands::stores::add(&mut self.repository, new_store)
    }

    pub fn add_item(&mut self, new_item: NewItem) -> Result<commands::CmdResult> {
        self.session.require_owner()?;
        commands::items::add(&mut self.repository, new_item)
    }

    pub fn get_store(&self, id: &StoreId) -> Result<commands::CmdResult> {
        Ok(commands::stores::show(&self.repository, id))
    }

    pub fn get_item(&self, store_id: &StoreId, item_id: &ItemId) -> Result<commands::CmdResult> {
        Ok(commands::items::show(&self.repository, store_id, item_id))
    }

    pub fn list_stores(&self, filter: Option<&str>) -> Result<commands::CmdResult> {
        Ok(commands::stores::list(&self.repository, filter))
    }

    pub fn search_items(&self, store_id: &StoreId, query: &str) -> Result<commands::CmdResult> {
        Ok(commands::items::search(&self.repository, store_id, query))
    }

    pub fn nearby(&self, provider: &dyn LocationProvider) -> Result<commands::CmdResult> {
        Ok(commands::nearby::run(&self.repository, provider))
    }

    pub fn store_summary(&self, id: &StoreId) -> Result<commands::CmdResult> {
        Ok(commands::stores::summary(&self.repository, id))
    }

    pub fn store_map(
        &self,
        store_id: &StoreId,
        item_id: Option<&ItemId>,
    ) -> Result<commands::CmdResult> {
        Ok(commands::map::run(&self.repository, store_id, item_id))
    }

    pub fn login_google(&mut self) -> Result<commands::CmdResult> {
        commands::owner::login_google(&mut self.session)
    }

    pub fn begin_verification(
        &mut self,
        provider: Provider,
        name: &str,
        contact: &str,
    ) -> Result<commands::CmdResult> {
        commands::owner::begin_verification(&mut self.session, provider, name, contact)
    }

    pub fn complete_verification(&mut self, code: &str) -> Result<commands::CmdResult> {
        commands::owner::complete_verification(&mut self.session, code)
    }

    pub fn logout(&mut self) -> Result<commands::CmdResult> {
        commands::owner::logout(&mut self.session)
    }

    pub fn whoami(&self) -> Result<commands::CmdResult> {
        Ok(commands::owner::whoami(&self.session))
    }

    pub fn suggest_layout(
        &self,
        store_id: &StoreId,
        image: &LayoutImage,
    ) -> Result<commands::CmdResult> {
        self.session.require_owner()?;
        commands::layout::suggest(&self.repository, self.layout.as_ref(), store_id, image)
    }

    pub fn accept_suggestions(
        &mut self,
        store_id: &StoreId,
        image: &LayoutImage,
    ) -> Result<commands::CmdResult> {
        self.session.require_owner()?;
        commands::layout::accept(&mut self.repository, self.layout.as_ref(), store_id, image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RudysError;
    use crate::geo::FixedLocation;
    use crate::model::GeoPoint;
    use crate::session::DEMO_VERIFICATION_CODE;
    use crate::store::MemBackend;
    use std::rc::Rc;

    fn api() -> RudysApi<Rc<MemBackend>> {
        RudysApi::open(Rc::new(MemBackend::new()), SeedPolicy::Demo)
    }

    fn new_store() -> NewStore {
        NewStore::new("Test", "X", GeoPoint::new(0.0, 0.0))
    }

    #[test]
    fn test_add_store_requires_owner() {
        let mut api = api();
        let err = api.add_store(new_store()).unwrap_err();
        assert!(matches!(err, RudysError::NotLoggedIn));
        assert_eq!(api.repository().stores().len(), 5);
    }

    #[test]
    fn test_add_store_after_login() {
        let mut api = api();
        api.login_google().unwrap();
        let result = api.add_store(new_store()).unwrap();

        let id = result.stores[0].id.clone();
        assert_eq!(api.last_store_id(), Some(id));
        assert_eq!(api.list_stores(None).unwrap().stores.len(), 6);
    }

    #[test]
    fn test_add_item_requires_owner() {
        let mut api = api();
        let item = NewItem::new(
            "store-1".into(),
            "Milk",
            "A2",
            "Dairy",
            GeoPoint::new(15.5, 73.8),
        );
        assert!(matches!(
            api.add_item(item),
            Err(RudysError::NotLoggedIn)
        ));
    }

    #[test]
    fn test_layout_requires_owner() {
        let mut api = api();
        let image = LayoutImage::new("floor.png", vec![1, 2, 3]).unwrap();
        assert!(matches!(
            api.suggest_layout(&"store-1".into(), &image),
            Err(RudysError::NotLoggedIn)
        ));
        assert!(matches!(
            api.accept_suggestions(&"store-1".into(), &image),
            Err(RudysError::NotLoggedIn)
        ));
    }

    #[test]
    fn test_accept_suggestions_after_verification() {
        let mut api = api();
        api.begin_verification(Provider::Email, "Asha", "asha@example.com")
            .unwrap();
        api.complete_verification(DEMO_VERIFICATION_CODE).unwrap();

        let image = LayoutImage::new("floor.png", vec![1, 2, 3]).unwrap();
        let result = api.accept_suggestions(&"store-4".into(), &image).unwrap();
        assert_eq!(result.items.len(), 3);
        assert_eq!(api.store_summary(&"store-4".into()).unwrap().summary.unwrap().item_count, 4);
    }

    #[test]
    fn test_session_shares_backend_with_repository() {
        let backend = Rc::new(MemBackend::new());
        let mut api = RudysApi::open(Rc::clone(&backend), SeedPolicy::Demo);
        api.login_google().unwrap();
        api.add_store(new_store()).unwrap();

        let reopened = RudysApi::open(backend, SeedPolicy::Demo);
        assert!(reopened.session().is_logged_in());
        assert_eq!(reopened.repository().stores().len(), 6);
    }

    #[test]
    fn test_shopper_operations_do_not_need_owner() {
        let api = api();
        assert_eq!(api.search_items(&"store-2".into(), "KING").unwrap().items.len(), 1);
        assert_eq!(api.get_item(&"store-2".into(), &"item-3".into()).unwrap().items.len(), 1);
        assert!(api.store_map(&"store-1".into(), None).unwrap().map.is_some());

        let ranked = api
            .nearby(&FixedLocation(GeoPoint::new(15.40, 74.00)))
            .unwrap()
            .ranked;
        assert_eq!(ranked[0].store.id.as_str(), "store-5");
    }

    #[test]
    fn test_logout_locks_owner_operations() {
        let mut api = api();
        api.login_google().unwrap();
        api.logout().unwrap();
        assert!(api.whoami().unwrap().owner.is_none());
        assert!(matches!(
            api.add_store(new_store()),
            Err(RudysError::NotLoggedIn)
        ));
    }
}
