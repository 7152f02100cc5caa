use rudysapp::api::RudysApi;
use rudysapp::model::{GeoPoint, NewItem, NewStore, Provider};
use rudysapp::session::{SessionState, DEMO_VERIFICATION_CODE};
use rudysapp::store::backend::{StorageBackend, OWNER_KEY, STORES_KEY};
use rudysapp::store::{FsBackend, SeedPolicy, StoreRepository};
use std::fs;
use std::rc::Rc;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    assert_eq!(backend.get("greeting").unwrap(), None);
    backend.set("greeting", "hello").unwrap();
    assert_eq!(backend.get("greeting").unwrap(), Some("hello".to_string()));

    backend.remove("greeting").unwrap();
    assert_eq!(backend.get("greeting").unwrap(), None);

    // Removing again is fine
    backend.remove("greeting").unwrap();
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();

    backend.set(STORES_KEY, "[]").unwrap();
    backend.set(STORES_KEY, "[ ]").unwrap();

    let expected_path = dir.path().join("rudys-stores.json");
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "[ ]");

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("data");
    let backend = FsBackend::new(root.clone());

    backend.set(OWNER_KEY, "{}").unwrap();
    assert!(root.join("storeOwner.json").exists());
}

#[test]
fn test_collection_survives_reopen() {
    let (_dir, backend) = setup();

    let store_id = {
        let mut repo = StoreRepository::open(backend.clone(), SeedPolicy::Empty);
        let id = repo
            .add_store(NewStore::new(
                "Delfinos",
                "Candolim, Goa",
                GeoPoint::new(15.5180, 73.7626),
            ))
            .unwrap();
        repo.add_item(NewItem::new(
            id.clone(),
            "Feni",
            "B1",
            "Beverages",
            GeoPoint::new(15.5181, 73.7627),
        ))
        .unwrap();
        id
    };

    let repo = StoreRepository::open(backend, SeedPolicy::Demo);
    assert_eq!(repo.stores().len(), 1);
    assert_eq!(repo.last_store_id(), Some(store_id.clone()));
    let hits = repo.search_items(&store_id, "fen");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].section, "Beverages");
}

#[test]
fn test_corrupt_file_falls_back_to_seed() {
    let (dir, backend) = setup();
    fs::write(dir.path().join("rudys-stores.json"), "{not json").unwrap();

    let repo = StoreRepository::open(backend, SeedPolicy::Demo);
    assert_eq!(repo.stores().len(), 5);
}

#[test]
fn test_legacy_item_coordinates_on_disk() {
    let (dir, backend) = setup();
    let legacy = r#"[{
        "id": "store-9",
        "name": "Old Market",
        "address": "Mapusa, Goa",
        "coordinates": {"lat": 15.59, "lng": 73.81},
        "image": "",
        "items": [{
            "id": "item-9",
            "storeId": "store-9",
            "name": "Chouricos",
            "aisle": "A3",
            "section": "Meats",
            "coordinates": [73.81, 15.59]
        }]
    }]"#;
    fs::write(dir.path().join("rudys-stores.json"), legacy).unwrap();

    let repo = StoreRepository::open(backend, SeedPolicy::Demo);
    let item = repo
        .get_item(&"store-9".into(), &"item-9".into())
        .unwrap();
    assert_eq!(item.coordinates, GeoPoint::new(15.59, 73.81));
}

#[test]
fn test_pending_verification_survives_restart() {
    let (_dir, backend) = setup();

    {
        let mut session = SessionState::open(backend.clone());
        session
            .begin_verification(Provider::Phone, "Ravi Naik", "+91 98220 12345")
            .unwrap();
    }

    let mut session = SessionState::open(backend.clone());
    let owner = session.complete_verification(DEMO_VERIFICATION_CODE).unwrap();
    assert_eq!(owner.phone.as_deref(), Some("+91 98220 12345"));
    assert!(backend.get("pendingVerification").unwrap().is_none());

    let reopened = SessionState::open(backend);
    assert_eq!(reopened.current_owner(), Some(&owner));
}

#[test]
fn test_api_over_shared_fs_backend() {
    let (_dir, backend) = setup();
    let backend = Rc::new(backend);

    {
        let mut api = RudysApi::open(Rc::clone(&backend), SeedPolicy::Demo);
        api.login_google().unwrap();
        api.add_store(NewStore::new(
            "Newton's",
            "Margao, Goa",
            GeoPoint::new(15.2832, 73.9862),
        ))
        .unwrap();
    }

    let api = RudysApi::open(backend, SeedPolicy::Demo);
    assert!(api.session().is_logged_in());
    let listed = api.list_stores(Some("margao")).unwrap();
    assert_eq!(listed.stores.len(), 1);
    assert_eq!(listed.stores[0].name, "Newton's");
}
