/// The recipe a front end is currently looking at or editing.
///
/// Owned by the caller and passed into save, edit and delete calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Viewing(usize),
    Editing(usize),
}

impl Selection {
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Viewing(index) | Self::Editing(index) => Some(index),
        }
    }

    /// Switch the viewed recipe into edit mode. Other states are unchanged.
    #[must_use]
    pub const fn begin_edit(self) -> Self {
        match self {
            Self::Viewing(index) => Self::Editing(index),
            other => other,
        }
    }

    /// Index a save should overwrite; `None` means append.
    #[must_use]
    pub const fn edit_target(self) -> Option<usize> {
        match self {
            Self::Editing(index) => Some(index),
            Self::None | Self::Viewing(_) => None,
        }
    }
}
