//! Column descriptors and the `TableRow` trait.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;

/// A table column definition.
///
/// # Example
///
/// ```
/// use datatable::Column;
///
/// let columns = vec![
///     Column::new("name", "Name").sortable(),
///     Column::new("email", "Email"),
///     Column::new("age", "Age").sortable(),
/// ];
/// assert!(columns[0].sortable);
/// assert!(!columns[1].sortable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Key passed to [`TableRow::cell`] to address this column.
    pub key: String,
    /// Header text.
    pub label: String,
    /// Whether activating the header sorts by this column.
    #[serde(default)]
    pub sortable: bool,
}

impl Column {
    /// Create a new, non-sortable column.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
        }
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Trait for records that can be displayed as rows of a table.
///
/// # Example
///
/// ```
/// use datatable::{CellValue, TableRow};
///
/// #[derive(Clone)]
/// struct User {
///     id: u32,
///     name: String,
///     age: u32,
/// }
///
/// impl TableRow for User {
///     type Key = u32;
///
///     fn key(&self) -> u32 {
///         self.id
///     }
///
///     fn cell(&self, column_key: &str) -> CellValue {
///         match column_key {
///             "name" => CellValue::from(&self.name),
///             "age" => CellValue::from(self.age),
///             _ => CellValue::Empty,
///         }
///     }
/// }
/// ```
pub trait TableRow {
    /// The key type used to identify this row.
    type Key: Clone + Eq + Hash + Debug;

    /// Return the unique key for this row.
    fn key(&self) -> Self::Key;

    /// Return the value of the cell addressed by `column_key`.
    ///
    /// Unknown keys should return [`CellValue::Empty`].
    fn cell(&self, column_key: &str) -> CellValue;
}
