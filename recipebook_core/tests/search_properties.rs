//! Integration tests for ingredient and category search.
//!
//! These tests verify that:
//! - Ingredient search is script-insensitive in both query and storage
//! - Keywords combine with AND and keep the store order
//! - A filtered search that matches nothing is distinct from no search

use recipebook_core::{
    Category, IngredientQuery, Recipe, SearchMode, SearchOutcome, normalize, resolve_indices,
    search, search_by_category, search_by_ingredient,
};

fn recipe(name: &str, category: Category, ingredients: &str) -> Recipe {
    Recipe {
        name: name.to_string(),
        category,
        ingredients: ingredients.to_string(),
        instructions: "手順".to_string(),
        notes: String::new(),
    }
}

fn catalog() -> Vec<Recipe> {
    vec![
        recipe("肉じゃが", Category::MainDish, "牛肉 200g\nじゃがいも\n玉ねぎ\n醤油"),
        recipe("ポークソテー", Category::MainDish, "ブタニク\nタマネギ"),
        recipe("豚汁", Category::Soup, "豚肉\n大根\n人参\n味噌"),
        recipe("しょうが焼き", Category::MainDish, "ぶたにく\nたまねぎ\nしょうが"),
        recipe("白菜の浅漬け", Category::SideDish, "白菜\n塩"),
    ]
}

#[test]
fn test_pork_and_onion_across_scripts() {
    let found = search_by_ingredient(&catalog(), "豚肉 玉ねぎ");
    let names: Vec<&str> = found.iter().map(|r| r.name.as_str()).collect();

    assert_eq!(names, ["ポークソテー", "しょうが焼き"]);
    for recipe in &found {
        let folded = normalize(&recipe.ingredients);
        assert!(folded.contains("ぶたにく"));
        assert!(folded.contains("たまねぎ"));
    }
}

#[test]
fn test_query_script_does_not_matter() {
    let catalog = catalog();
    let kanji = search_by_ingredient(&catalog, "豚肉\u{3000}玉ねぎ");
    let katakana = search_by_ingredient(&catalog, "ブタニク タマネギ");
    let hiragana = search_by_ingredient(&catalog, "ぶたにく　たまねぎ");

    assert_eq!(kanji, katakana);
    assert_eq!(katakana, hiragana);
}

#[test]
fn test_result_is_a_subsequence_of_the_input() {
    let catalog = catalog();
    let found = search_by_ingredient(&catalog, "じゃがいも");
    assert_eq!(found, [catalog[0].clone()]);

    let pork = search_by_ingredient(&catalog, "ぶたにく");
    let resolved: Vec<Option<usize>> = resolve_indices(&catalog, &pork)
        .into_iter()
        .map(|(index, _)| index)
        .collect();
    assert_eq!(resolved, [Some(1), Some(2), Some(3)]);
}

#[test]
fn test_category_filter() {
    let found = search_by_category(&catalog(), &Category::MainDish);
    assert_eq!(found.len(), 3);
    assert!(found.iter().all(|r| r.category == Category::MainDish));
}

#[test]
fn test_category_filter_does_not_normalize() {
    let catalog = vec![recipe("x", Category::Custom("ﾃﾞｻﾞｰﾄ".to_string()), "砂糖")];
    assert!(search_by_category(&catalog, &Category::Dessert).is_empty());
}

#[test]
fn test_unused_category_is_no_match_not_unfiltered() {
    let outcome = search(&catalog(), &SearchMode::Category(Category::Dessert));

    assert_eq!(outcome, SearchOutcome::Filtered(Vec::new()));
    assert!(outcome.is_no_match());
}

#[test]
fn test_all_mode_returns_everything() {
    let outcome = search(&catalog(), &SearchMode::All);
    assert_eq!(outcome.recipes().len(), 5);
    assert!(!outcome.is_no_match());
}

#[test]
fn test_query_keywords_are_normalized_once() {
    let query = IngredientQuery::parse("キャベツ 醤油");
    assert_eq!(query.keywords(), ["きゃべつ", "しょうゆ"]);
}
