//! Integration tests for the file-backed recipe book.
//!
//! These tests verify that:
//! - Created recipes land exactly once at the end of the collection
//! - Deleting shifts later recipes down and shrinks the collection by one
//! - The collection implied by a sequence of mutations survives a reload
//! - Invalid indices leave the stored file untouched

use recipebook_core::{Category, Recipe, SearchMode, SearchOutcome};
use recipebook_store::{FileSlot, RecipeBook, StoreError};
use tempfile::TempDir;

fn recipe(name: &str, category: Category, ingredients: &str) -> Recipe {
    Recipe {
        name: name.to_string(),
        category,
        ingredients: ingredients.to_string(),
        instructions: "材料を切る\n炒める".to_string(),
        notes: String::new(),
    }
}

#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn open() -> (TempDir, RecipeBook<FileSlot>) {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let book = RecipeBook::new(FileSlot::new(dir.path(), "recipes"));
    (dir, book)
}

fn reopen(dir: &TempDir) -> RecipeBook<FileSlot> {
    RecipeBook::new(FileSlot::new(dir.path(), "recipes"))
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_create_appends_exactly_once() {
    let (_dir, book) = open();
    book.create(recipe("a", Category::MainDish, "豚肉"))
        .expect("create should succeed");

    let new = recipe("b", Category::Soup, "味噌");
    let index = book.create(new.clone()).expect("create should succeed");

    let all = book.get_all();
    assert_eq!(index, all.len() - 1);
    assert_eq!(all.last(), Some(&new));
    assert_eq!(all.iter().filter(|r| **r == new).count(), 1);
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_delete_shifts_indices() {
    let (_dir, book) = open();
    for name in ["a", "b", "c", "d"] {
        book.create(recipe(name, Category::SideDish, "白菜"))
            .expect("create should succeed");
    }
    let before = book.get_all();

    let removed = book.delete(1).expect("index 1 exists");
    let after = book.get_all();

    assert_eq!(removed, before[1]);
    assert_eq!(after.len(), before.len() - 1);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1], before[2]);
    assert_eq!(after[2], before[3]);
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_mutations_survive_reload() {
    let (dir, book) = open();
    book.create(recipe("a", Category::MainDish, "牛肉"))
        .expect("create should succeed");
    book.create(recipe("b", Category::MainDish, "鶏肉"))
        .expect("create should succeed");
    book.create(recipe("c", Category::Soup, "大根"))
        .expect("create should succeed");
    book.update(0, recipe("a2", Category::SideDish, "人参"))
        .expect("update should succeed");
    book.delete(1).expect("delete should succeed");
    drop(book);

    let reloaded = reopen(&dir).get_all();
    assert_eq!(
        reloaded,
        [
            recipe("a2", Category::SideDish, "人参"),
            recipe("c", Category::Soup, "大根"),
        ]
    );
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_invalid_index_leaves_file_untouched() {
    let (dir, book) = open();
    book.create(recipe("a", Category::MainDish, "豚肉"))
        .expect("create should succeed");
    let path = dir.path().join("recipes.json");
    let before = std::fs::read(&path).expect("file should exist");

    let err = book
        .update(3, recipe("x", Category::MainDish, "豚肉"))
        .expect_err("index 3 is out of range");
    assert!(matches!(err, StoreError::InvalidIndex { index: 3, len: 1 }));
    assert!(err.to_string().contains("invalid index"));

    assert!(book.delete(1).is_err());
    assert_eq!(std::fs::read(&path).expect("file should exist"), before);
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_search_through_the_book() {
    let (_dir, book) = open();
    book.create(recipe("生姜焼き", Category::MainDish, "豚肉\n玉ねぎ"))
        .expect("create should succeed");
    book.create(recipe("ロールキャベツ", Category::Soup, "キャベツ\n合い挽き肉"))
        .expect("create should succeed");

    let cabbage = book.filter_by_ingredient("きゃべつ");
    assert_eq!(cabbage.len(), 1);
    assert_eq!(cabbage[0].name, "ロールキャベツ");

    assert_eq!(book.filter_by_category(&Category::MainDish).len(), 1);
    assert_eq!(
        book.search(&SearchMode::Category(Category::Dessert)),
        SearchOutcome::Filtered(Vec::new())
    );
    assert_eq!(book.resolve_index(&cabbage[0]), Some(1));
}

#[test]
fn test_invalid_recipe_is_rejected_by_create() {
    let (_dir, book) = open();
    let mut blank = recipe("a", Category::MainDish, "豚肉");
    blank.name = "  ".to_string();

    assert!(matches!(book.create(blank), Err(StoreError::Validation(_))));
    assert!(book.get_all().is_empty());
}
