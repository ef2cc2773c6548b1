//! Sort state for table views.

use std::cmp::Ordering;

/// Sort direction for the active column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Check if this is ascending.
    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }

    /// Apply the direction to an ascending ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Header indicator for this direction.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// The active sort column and direction.
///
/// The default state has no active column, which means rows keep the order
/// they were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    active_key: Option<String>,
    direction: SortDirection,
}

impl SortState {
    /// Sort state with no active column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort state sorted by `key` in `direction`.
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            active_key: Some(key.into()),
            direction,
        }
    }

    /// The active column key, if any.
    pub fn active_key(&self) -> Option<&str> {
        self.active_key.as_deref()
    }

    /// The current direction.
    ///
    /// Meaningful only while a column is active; `Ascending` otherwise.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Check if `key` is the active column.
    pub fn is_active(&self, key: &str) -> bool {
        self.active_key.as_deref() == Some(key)
    }

    /// The `(key, direction)` pair, if a column is active.
    pub fn active(&self) -> Option<(&str, SortDirection)> {
        self.active_key.as_deref().map(|key| (key, self.direction))
    }

    /// Advance the state for an activation of `key`.
    ///
    /// Activating the active column flips its direction. Activating any other
    /// column makes it active and always starts ascending.
    pub(crate) fn activate(&mut self, key: &str) {
        if self.is_active(key) {
            self.direction = self.direction.flipped();
        } else {
            self.active_key = Some(key.to_string());
            self.direction = SortDirection::Ascending;
        }
    }

    /// Return to the unsorted state.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
