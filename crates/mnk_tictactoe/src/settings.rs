//! Board size and win length settings, as edited through text inputs.

use super::types::BoardSize;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Smallest value accepted for rows, columns, or win length.
pub const MIN_SETTING: usize = 2;

/// Largest value accepted for rows, columns, or win length.
pub const MAX_SETTING: usize = 100;

/// Contents of one numeric input.
///
/// `Empty` is the transient state while the user clears the field before
/// typing a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SizeInput {
    /// Field cleared.
    #[default]
    Empty,
    /// A validated value in `MIN_SETTING..=MAX_SETTING`.
    Value(usize),
}

impl SizeInput {
    /// Parses input text.
    ///
    /// Accepts the empty string or an integer from [`MIN_SETTING`] to
    /// [`MAX_SETTING`]. Anything else returns `None` and the caller keeps its
    /// prior value.
    #[instrument]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Some(SizeInput::Empty);
        }
        text.parse::<usize>().ok().and_then(Self::value_of)
    }

    /// Creates a value input, or `None` if outside
    /// [`MIN_SETTING`]`..=`[`MAX_SETTING`].
    pub fn value_of(value: usize) -> Option<Self> {
        (MIN_SETTING..=MAX_SETTING)
            .contains(&value)
            .then_some(SizeInput::Value(value))
    }

    /// The numeric value, if set.
    pub fn value(self) -> Option<usize> {
        match self {
            SizeInput::Empty => None,
            SizeInput::Value(value) => Some(value),
        }
    }
}

impl std::fmt::Display for SizeInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeInput::Empty => Ok(()),
            SizeInput::Value(value) => write!(f, "{value}"),
        }
    }
}

/// Which setting an edit applies to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
    strum::EnumIter,
)]
pub enum Field {
    /// Board rows.
    #[default]
    Rows,
    /// Board columns.
    Columns,
    /// Run length needed to win.
    #[strum(serialize = "Win length")]
    WinLength,
}

impl Field {
    /// Next field, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Field::Rows => Field::Columns,
            Field::Columns => Field::WinLength,
            Field::WinLength => Field::Rows,
        }
    }

    /// Previous field, wrapping around.
    pub fn previous(self) -> Self {
        match self {
            Field::Rows => Field::WinLength,
            Field::Columns => Field::Rows,
            Field::WinLength => Field::Columns,
        }
    }
}

/// The three user-editable game settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSettings {
    rows: SizeInput,
    columns: SizeInput,
    win_length: SizeInput,
}

impl GameSettings {
    /// Creates settings from numeric values, or `None` if any is outside
    /// [`MIN_SETTING`]`..=`[`MAX_SETTING`].
    #[instrument]
    pub fn new(rows: usize, columns: usize, win_length: usize) -> Option<Self> {
        Some(Self {
            rows: SizeInput::value_of(rows)?,
            columns: SizeInput::value_of(columns)?,
            win_length: SizeInput::value_of(win_length)?,
        })
    }

    /// Current contents of a field.
    pub fn get(&self, field: Field) -> SizeInput {
        match field {
            Field::Rows => self.rows,
            Field::Columns => self.columns,
            Field::WinLength => self.win_length,
        }
    }

    /// Replaces a field. Returns `true` if the stored value changed.
    pub fn set(&mut self, field: Field, input: SizeInput) -> bool {
        let slot = match field {
            Field::Rows => &mut self.rows,
            Field::Columns => &mut self.columns,
            Field::WinLength => &mut self.win_length,
        };
        let changed = *slot != input;
        *slot = input;
        debug!(%field, ?input, changed, "Setting updated");
        changed
    }

    /// Board size, if both rows and columns are set.
    pub fn board_size(&self) -> Option<BoardSize> {
        BoardSize::new(self.rows.value()?, self.columns.value()?)
    }

    /// Win length, if set.
    pub fn win_length(&self) -> Option<usize> {
        self.win_length.value()
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            rows: SizeInput::Value(3),
            columns: SizeInput::Value(3),
            win_length: SizeInput::Value(3),
        }
    }
}
