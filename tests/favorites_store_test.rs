// ABOUTME: Test suite for the durable favorites store
// ABOUTME: Covers dedup, toggle idempotence, disk round trips, and soft-fail loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ladle Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ladle::favorites::FavoritesStore;
use ladle::models::{Ingredient, Recipe};
use std::fs;
use tempfile::TempDir;

fn recipe(id: &str, name: &str) -> Recipe {
    Recipe {
        id: id.into(),
        name: name.into(),
        thumbnail_url: format!("https://example.test/{id}.jpg"),
        category: Some("Chicken".into()),
        area: Some("Jamaican".into()),
        instructions: None,
        video_url: None,
        ingredients: vec![Ingredient::new("Chicken", "1 whole")],
    }
}

fn store_in(dir: &TempDir) -> FavoritesStore {
    FavoritesStore::load(dir.path().join("favorites.json"))
}

// ============================================================================
// Mutation Semantics
// ============================================================================

#[test]
fn test_add_and_list_preserve_insertion_order() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    store.add(recipe("1", "Stew")).unwrap();
    store.add(recipe("2", "Curry")).unwrap();
    store.add(recipe("3", "Pie")).unwrap();

    let names: Vec<&str> = store.list().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Stew", "Curry", "Pie"]);
}

#[test]
fn test_add_duplicate_id_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    store.add(recipe("1", "Stew")).unwrap();
    store.add(recipe("1", "Different name, same id")).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.list().next().unwrap().name, "Stew");
}

#[test]
fn test_remove_absent_id_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    store.add(recipe("1", "Stew")).unwrap();
    store.remove("does-not-exist").unwrap();
    assert_eq!(store.len(), 1);
}

#[test]
fn test_toggle_twice_is_identity() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.add(recipe("1", "Stew")).unwrap();

    assert!(store.toggle(recipe("2", "Curry")).unwrap());
    assert!(!store.toggle(recipe("2", "Curry")).unwrap());

    assert_eq!(store.len(), 1);
    assert!(store.is_favorite("1"));
    assert!(!store.is_favorite("2"));
}

#[test]
fn test_no_duplicates_under_mixed_mutations() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    store.add(recipe("1", "Stew")).unwrap();
    store.toggle(recipe("2", "Curry")).unwrap();
    store.add(recipe("2", "Curry")).unwrap();
    store.remove("1").unwrap();
    store.toggle(recipe("1", "Stew")).unwrap();
    store.add(recipe("1", "Stew")).unwrap();

    let mut ids: Vec<&str> = store.list().map(|r| r.id.as_str()).collect();
    let before = ids.len();
    ids.dedup();
    assert_eq!(ids.len(), before, "duplicate ids in favorites list");
    assert_eq!(store.len(), 2);
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_round_trip_through_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");

    {
        let mut store = FavoritesStore::load(&path);
        store.add(recipe("1", "Stew")).unwrap();
        store.add(recipe("2", "Curry")).unwrap();
    }

    let reloaded = FavoritesStore::load(&path);
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded.is_favorite("1"));
    assert!(reloaded.is_favorite("2"));
    let names: Vec<&str> = reloaded.list().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Stew", "Curry"]);
}

#[test]
fn test_blob_is_versioned() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");

    let mut store = FavoritesStore::load(&path);
    store.add(recipe("1", "Stew")).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let blob: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(blob["version"], 1);
    assert_eq!(blob["entries"].as_array().unwrap().len(), 1);
}

#[test]
fn test_missing_file_is_an_empty_store() {
    let dir = TempDir::new().unwrap();
    let store = FavoritesStore::load(dir.path().join("nope.json"));
    assert!(store.is_empty());
}

#[test]
fn test_malformed_blob_fails_soft() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");
    fs::write(&path, "{this is not json").unwrap();

    let store = FavoritesStore::load(&path);
    assert!(store.is_empty());
}

#[test]
fn test_malformed_blob_recovers_on_next_mutation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");
    fs::write(&path, "[1, 2, \"garbage\"]").unwrap();

    let mut store = FavoritesStore::load(&path);
    assert!(store.is_empty());
    store.add(recipe("1", "Stew")).unwrap();

    let reloaded = FavoritesStore::load(&path);
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn test_legacy_unversioned_array_is_migrated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");

    // The original client persisted a bare array of recipe records
    let legacy = serde_json::to_string(&vec![recipe("1", "Stew"), recipe("2", "Curry")]).unwrap();
    fs::write(&path, legacy).unwrap();

    let mut store = FavoritesStore::load(&path);
    assert_eq!(store.len(), 2);
    assert!(store.is_favorite("1"));

    // Next mutation rewrites in the versioned format
    store.add(recipe("3", "Pie")).unwrap();
    let raw = fs::read_to_string(&path).unwrap();
    let blob: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(blob["version"], 1);
    assert_eq!(blob["entries"].as_array().unwrap().len(), 3);
}

#[test]
fn test_newer_schema_version_fails_soft() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");
    fs::write(&path, r#"{"version": 99, "entries": []}"#).unwrap();

    let store = FavoritesStore::load(&path);
    assert!(store.is_empty());
}

#[test]
fn test_persist_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("favorites.json");

    let mut store = FavoritesStore::load(&path);
    store.add(recipe("1", "Stew")).unwrap();
    assert!(path.exists());
}
