//! End-to-end tests: recipe store over the file-backed key-value store.

use std::sync::Arc;

use recipes_core::RecipeStore;
use recipes_core::recipe::{Difficulty, FormDefaults, FormMode, RecipeData, RecipeForm};
use recipes_core::storage::{KeyValueStore, RECIPES_STORAGE_KEY};
use recipes_infrastructure::{FileKeyValueStore, LocalRecipeRepository};
use tempfile::TempDir;

fn data(title: &str, category: &str, ingredients: &[&str]) -> RecipeData {
    RecipeData {
        title: title.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: "Follow your heart.".to_string(),
        image_url: String::new(),
        prep_time: 30,
        difficulty: Difficulty::Medium,
        category: category.to_string(),
    }
}

fn open(storage: Arc<FileKeyValueStore>) -> RecipeStore {
    RecipeStore::open(Arc::new(LocalRecipeRepository::new(storage)))
}

#[test]
fn collection_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Arc::new(FileKeyValueStore::new(temp_dir.path()));

    let mut store = open(storage.clone());
    assert!(store.is_empty());
    let cake = store
        .add(data("Chocolate Cake", "Desserts", &["cocoa", "flour"]))
        .clone();
    let salad = store.add(data("Salad", "Salads", &["lettuce"])).clone();
    let tea_id = store.add(data("Tea", "Drinks", &["water"])).id.clone();
    assert!(store.delete(&tea_id));
    store.shutdown();

    let reopened = open(storage);
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.list()[0].id, salad.id);
    assert_eq!(reopened.list()[1].id, cake.id);
    assert_eq!(reopened.list()[1].data(), cake.data());
    assert_eq!(
        reopened.list()[1].created_at.timestamp_millis(),
        cake.created_at.timestamp_millis()
    );

    let found = reopened.search("choc");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Chocolate Cake");
}

#[test]
fn form_edit_flow_preserves_identity() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Arc::new(FileKeyValueStore::new(temp_dir.path()));
    let defaults = FormDefaults::default();

    let mut store = open(storage.clone());
    let created = RecipeForm {
        title: "Pancakes".to_string(),
        ingredients: "flour\nmilk\n\neggs".to_string(),
        instructions: "Whisk and fry.".to_string(),
        category: "Breakfast".to_string(),
        ..RecipeForm::default()
    }
    .validate(FormMode::Create, &defaults)
    .unwrap();
    let original = store.add(created).clone();
    assert_eq!(original.ingredients, vec!["flour", "milk", "eggs"]);

    let mut form = RecipeForm::from_recipe(&original);
    form.title = "Fluffy Pancakes".to_string();
    form.difficulty = Some(Difficulty::Easy);
    let changed = form.validate(FormMode::Edit, &defaults).unwrap();
    assert!(store.update(&original.id, changed));

    let reopened = open(storage);
    let updated = reopened.get(&original.id).unwrap();
    assert_eq!(updated.title, "Fluffy Pancakes");
    assert_eq!(updated.difficulty, Difficulty::Easy);
    assert_eq!(
        updated.created_at.timestamp_millis(),
        original.created_at.timestamp_millis()
    );
}

#[test]
fn corrupt_storage_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Arc::new(FileKeyValueStore::new(temp_dir.path()));
    storage
        .set_item(RECIPES_STORAGE_KEY, r#"[{"id": "1", "title": "half a rec"#)
        .unwrap();

    let mut store = open(storage.clone());
    assert!(store.is_empty());

    // the next mutation replaces the corrupt value
    store.add(data("Soup", "Main Courses", &["water"]));
    assert_eq!(open(storage).len(), 1);
}

#[test]
fn quota_exceeded_keeps_previous_state() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Arc::new(FileKeyValueStore::new(temp_dir.path()).with_quota(1_024));

    let mut store = open(storage.clone());
    store.add(data("Salad", "Salads", &["lettuce"]));
    let before = storage.get_item(RECIPES_STORAGE_KEY).unwrap();
    assert!(before.is_some());

    let mut huge = data("Photo Cake", "Desserts", &["sugar"]);
    huge.image_url = format!("data:image/png;base64,{}", "A".repeat(4_096));
    store.add(huge);

    // the in-memory store keeps the record; the stored value is untouched
    assert_eq!(store.len(), 2);
    assert_eq!(storage.get_item(RECIPES_STORAGE_KEY).unwrap(), before);
    assert_eq!(open(storage).len(), 1);
}

#[test]
fn update_of_missing_id_leaves_storage_equal() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Arc::new(FileKeyValueStore::new(temp_dir.path()));

    let mut store = open(storage.clone());
    store.add(data("Salad", "Salads", &["lettuce"]));
    let snapshot = store.list().to_vec();

    assert!(!store.update("missing", data("Ghost", "Drinks", &["air"])));
    assert_eq!(store.list(), snapshot.as_slice());

    let reopened = open(storage);
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.list()[0].id, snapshot[0].id);
    assert_eq!(reopened.list()[0].data(), snapshot[0].data());
}
