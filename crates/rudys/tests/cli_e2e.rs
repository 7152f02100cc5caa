#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn rudys_cmd(data: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("rudys"));
    cmd.env("RUDYS_DATA", data.path().as_os_str())
        .env_remove("RUST_LOG")
        .env_remove("RUDYS__HOME_LOCATION")
        .env_remove("RUDYS__SEED_DEMO_DATA");
    cmd
}

#[test]
fn test_lists_demo_stores() {
    let data = TempDir::new().unwrap();

    rudys_cmd(&data)
        .args(["stores"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mall De Goa"))
        .stdout(predicate::str::contains("Sahakari Spice Farm Market"));
}

#[test]
fn test_store_filter_without_match() {
    let data = TempDir::new().unwrap();

    rudys_cmd(&data)
        .args(["stores", "--search", "Mumbai"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No stores match \"Mumbai\""));
}

#[test]
fn test_search_inside_store() {
    let data = TempDir::new().unwrap();

    rudys_cmd(&data)
        .args(["search", "store-2", "KING"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kingfish (Vison)"))
        .stdout(predicate::str::contains("C1 · Seafood"));
}

#[test]
fn test_unknown_store_is_a_warning_not_a_failure() {
    let data = TempDir::new().unwrap();

    rudys_cmd(&data)
        .args(["store", "store-404"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Store not found: store-404"));
}

#[test]
fn test_nearby_json_is_ranked() {
    let data = TempDir::new().unwrap();

    let output = rudys_cmd(&data)
        .args(["nearby", "--near", "15.40,74.00", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ranked = json["ranked"].as_array().unwrap();
    assert_eq!(ranked.len(), 5);
    assert_eq!(ranked[0]["store"]["id"], "store-5");
}

#[test]
fn test_nearby_without_location_keeps_order() {
    let data = TempDir::new().unwrap();

    rudys_cmd(&data)
        .args(["nearby"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unable to get your location"))
        .stdout(predicate::str::contains("store-1"));
}

#[test]
fn test_home_location_from_config_file() {
    let data = TempDir::new().unwrap();
    fs::write(
        data.path().join("rudys.toml"),
        "home_location = \"15.40,74.00\"\n",
    )
    .unwrap();

    rudys_cmd(&data)
        .args(["nearby"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorted by distance"));
}

#[test]
fn test_add_store_requires_owner() {
    let data = TempDir::new().unwrap();

    rudys_cmd(&data)
        .args([
            "add-store", "--name", "Test", "--address", "X", "--at", "0,0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: You must be logged in"));
}

#[test]
fn test_owner_email_flow_then_add_store_and_item() {
    let data = TempDir::new().unwrap();

    rudys_cmd(&data)
        .args([
            "owner", "login", "email", "--name", "Asha", "--email", "asha@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Verification code sent"));

    rudys_cmd(&data)
        .args(["owner", "verify", "000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("incorrect"));

    rudys_cmd(&data)
        .args(["owner", "verify", "123456"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as Asha"));

    rudys_cmd(&data)
        .args([
            "add-store",
            "--name",
            "Delfinos",
            "--address",
            "Candolim, Goa",
            "--at",
            "15.5180,73.7626",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Store registered: Delfinos"));

    // Lands in the store registered last
    rudys_cmd(&data)
        .args([
            "add-item", "--name", "Feni", "--aisle", "B1", "--section", "Beverages",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item added: Feni"));

    rudys_cmd(&data)
        .args(["stores", "--search", "candolim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Delfinos"));

    rudys_cmd(&data)
        .args(["owner", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out"));
}

#[test]
fn test_add_item_to_unknown_store_warns_with_or_without_position() {
    let data = TempDir::new().unwrap();

    rudys_cmd(&data)
        .args(["owner", "login", "google"])
        .assert()
        .success();

    rudys_cmd(&data)
        .args([
            "add-item", "--store", "store-404", "--name", "Milk", "--aisle", "A", "--section", "B",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Store not found: store-404; item not added",
        ));

    rudys_cmd(&data)
        .args([
            "add-item", "--store", "store-404", "--name", "Milk", "--aisle", "A", "--section", "B",
            "--at", "1,1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Store not found: store-404; item not added",
        ));
}

#[test]
fn test_add_item_requires_owner_before_store_lookup() {
    let data = TempDir::new().unwrap();

    rudys_cmd(&data)
        .args([
            "add-item", "--store", "store-404", "--name", "Milk", "--aisle", "A", "--section", "B",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: You must be logged in"));

    rudys_cmd(&data)
        .args([
            "add-item", "--store", "store-1", "--name", "Milk", "--aisle", "A", "--section", "B",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: You must be logged in"));
}

#[test]
fn test_verify_without_login_fails() {
    let data = TempDir::new().unwrap();

    rudys_cmd(&data)
        .args(["owner", "verify", "123456"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No verification in progress"));
}

#[test]
fn test_layout_accept_adds_items() {
    let data = TempDir::new().unwrap();
    let image = data.path().join("plan.png");
    fs::write(&image, [0x89, 0x50, 0x4e, 0x47]).unwrap();

    rudys_cmd(&data)
        .args(["owner", "login", "google"])
        .assert()
        .success();

    rudys_cmd(&data)
        .args(["layout", "accept", "store-4", image.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 3 suggested items"));

    rudys_cmd(&data)
        .args(["search", "store-4", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Milk"));
}

#[test]
fn test_map_for_item() {
    let data = TempDir::new().unwrap();

    rudys_cmd(&data)
        .args(["map", "store-1", "--item", "item-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zoom 19"))
        .stdout(predicate::str::contains("Goan Sausages (B2 · Meats)"));
}
