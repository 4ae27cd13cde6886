use thiserror::Error;

/// Message shown to the user when a save is rejected for a blank field.
pub const MISSING_FIELD_MESSAGE: &str = "すべての項目を入力してください。";

/// Required recipe fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Category,
    Ingredients,
    Instructions,
}

impl Field {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Ingredients => "ingredients",
            Self::Instructions => "instructions",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field is empty: {0}")]
    MissingField(Field),
}

impl ValidationError {
    /// The message a front end should display for this rejection.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::MissingField(_) => MISSING_FIELD_MESSAGE,
        }
    }
}
