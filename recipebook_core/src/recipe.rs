//! Recipe records and the form input they are built from.
//!
//! The serialized shape of [`Recipe`] is the compatibility surface of the
//! persisted collection: five string fields, with the category stored as its
//! Japanese label.

use serde::{Deserialize, Serialize};

use crate::error::{Field, ValidationError};

/// Classification tag of a recipe.
///
/// Known labels map to dedicated variants. Any other non-empty label found in
/// persisted data is kept verbatim in [`Category::Custom`] so it survives a
/// load/save cycle unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    MainDish,
    SideDish,
    Soup,
    Staple,
    Dessert,
    Other,
    Custom(String),
}

impl Category {
    /// Categories offered by the front end, in menu order.
    pub const KNOWN: [Self; 6] = [
        Self::MainDish,
        Self::SideDish,
        Self::Soup,
        Self::Staple,
        Self::Dessert,
        Self::Other,
    ];

    /// The persisted label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::MainDish => "主菜",
            Self::SideDish => "副菜",
            Self::Soup => "汁物",
            Self::Staple => "主食",
            Self::Dessert => "デザート",
            Self::Other => "その他",
            Self::Custom(label) => label,
        }
    }

    /// ASCII alias accepted on the command line.
    #[must_use]
    pub const fn alias(&self) -> Option<&'static str> {
        match self {
            Self::MainDish => Some("main"),
            Self::SideDish => Some("side"),
            Self::Soup => Some("soup"),
            Self::Staple => Some("staple"),
            Self::Dessert => Some("dessert"),
            Self::Other => Some("other"),
            Self::Custom(_) => None,
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|known| known.as_str() == label)
            .unwrap_or(Self::Custom(label))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Custom(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ValidationError;

    /// Accepts a label or an ASCII alias (case-insensitive). Surrounding
    /// whitespace is ignored; a blank input is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingField(Field::Category));
        }

        let by_alias = Self::KNOWN.into_iter().find(|known| {
            known
                .alias()
                .is_some_and(|alias| alias.eq_ignore_ascii_case(trimmed))
        });

        Ok(by_alias.unwrap_or_else(|| Self::from(trimmed.to_string())))
    }
}

/// A persisted recipe.
///
/// There is no stable identifier: a recipe is addressed by its position in
/// the stored collection, re-derived from the
/// (name, category, ingredients, instructions) tuple when needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub category: Category,
    /// Free text, one ingredient per line.
    pub ingredients: String,
    /// Free text, one step per line.
    pub instructions: String,
    #[serde(default)]
    pub notes: String,
}

impl Recipe {
    /// Check that every required field is non-empty after trimming.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            (Field::Name, self.name.as_str()),
            (Field::Category, self.category.as_str()),
            (Field::Ingredients, self.ingredients.as_str()),
            (Field::Instructions, self.instructions.as_str()),
        ];

        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ValidationError::MissingField(*field)),
            None => Ok(()),
        }
    }

    /// Whether `other` has the same identity tuple. Notes are not part of it.
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        self.name == other.name
            && self.category == other.category
            && self.ingredients == other.ingredients
            && self.instructions == other.instructions
    }
}

/// Raw, untrimmed input of the recipe form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    pub name: String,
    pub category: String,
    pub ingredients: String,
    pub instructions: String,
    pub notes: String,
}

impl From<&Recipe> for RecipeForm {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            category: recipe.category.as_str().to_string(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            notes: recipe.notes.clone(),
        }
    }
}

impl TryFrom<RecipeForm> for Recipe {
    type Error = ValidationError;

    /// Trims every field, notes included, then validates.
    fn try_from(form: RecipeForm) -> Result<Self, Self::Error> {
        let recipe = Self {
            name: form.name.trim().to_string(),
            category: form.category.parse()?,
            ingredients: form.ingredients.trim().to_string(),
            instructions: form.instructions.trim().to_string(),
            notes: form.notes.trim().to_string(),
        };
        recipe.validate()?;
        Ok(recipe)
    }
}
