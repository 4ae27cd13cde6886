//! Integration tests for the persisted JSON shape.
//!
//! Collections written by earlier versions must load unchanged, and what
//! this crate writes must keep the same five fields and category labels.

use recipebook_core::{Category, Recipe};
use recipebook_store::{MemorySlot, Slot, Store};

const LEGACY: &str = r#"[
  {"name":"肉じゃが","category":"主菜","ingredients":"牛肉\nじゃがいも","instructions":"煮る","notes":"甘め"},
  {"name":"冷奴","category":"副菜","ingredients":"豆腐","instructions":"切る"},
  {"name":"ざるそば","category":"麺類","ingredients":"そば","instructions":"茹でる","notes":""}
]"#;

#[test]
fn test_legacy_collection_loads() {
    let store = Store::new(MemorySlot::with_contents("recipes", LEGACY));
    let recipes = store.load();

    assert_eq!(recipes.len(), 3);
    assert_eq!(recipes[0].category, Category::MainDish);
    assert_eq!(recipes[0].notes, "甘め");
    assert!(recipes[1].notes.is_empty());
    assert_eq!(recipes[2].category, Category::Custom("麺類".to_string()));
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_written_shape_matches_legacy_fields() {
    let store = Store::new(MemorySlot::with_contents("recipes", LEGACY));
    let recipes = store.load();
    store.save_all(&recipes).expect("save should succeed");

    let raw = store.slot().contents().expect("slot should hold data");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("stored data is JSON");
    let objects = value.as_array().expect("stored data is an array");

    for object in objects {
        let mut keys: Vec<&str> = object
            .as_object()
            .expect("each entry is an object")
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["category", "ingredients", "instructions", "name", "notes"]
        );
    }
    assert_eq!(objects[2]["category"], "麺類");
    assert_eq!(objects[1]["category"], "副菜");

    let again: Vec<Recipe> = serde_json::from_str(&raw).expect("round trip");
    assert_eq!(again, recipes);
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_malformed_data_is_replaced_on_next_write() {
    let slot = MemorySlot::with_contents("recipes", "{broken");
    let store = Store::new(slot);
    assert!(store.load().is_empty());

    let recipe = Recipe {
        name: "卵焼き".to_string(),
        category: Category::SideDish,
        ingredients: "卵\n醤油".to_string(),
        instructions: "巻く".to_string(),
        notes: String::new(),
    };
    store.append(recipe.clone()).expect("append should succeed");

    assert_eq!(store.load(), [recipe]);
    assert_eq!(store.slot().key(), "recipes");
}
