//! Table configuration types.

use serde::{Deserialize, Serialize};

use crate::column::{Column, TableRow};
use crate::error::TableResult;
use crate::selection::SelectionMode;
use crate::view::{DEFAULT_EMPTY_MESSAGE, TableView};

/// Declarative description of a table.
///
/// Can be built in code or deserialized, then turned into a [`TableView`]:
///
/// ```
/// use datatable::{CellValue, SelectionMode, TableConfig, TableRow};
///
/// #[derive(Clone)]
/// struct Item(u32);
///
/// impl TableRow for Item {
///     type Key = u32;
///     fn key(&self) -> u32 {
///         self.0
///     }
///     fn cell(&self, _column_key: &str) -> CellValue {
///         CellValue::from(self.0)
///     }
/// }
///
/// let config = TableConfig::from_json(
///     r#"{
///         "columns": [{ "key": "id", "label": "ID", "sortable": true }],
///         "selection": "single",
///         "empty_message": "Nothing here"
///     }"#,
/// )?;
/// assert_eq!(config.selection, SelectionMode::Single);
///
/// let view = config.build::<Item>()?;
/// assert_eq!(view.empty_message(), "Nothing here");
/// # Ok::<(), datatable::TableError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Column definitions, in display order.
    pub columns: Vec<Column>,

    /// Row selection mode.
    pub selection: SelectionMode,

    /// Message shown when there are no rows.
    pub empty_message: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            selection: SelectionMode::None,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

impl TableConfig {
    /// Create a config with the given columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            ..Default::default()
        }
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> TableResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the selection mode.
    pub fn selection(mut self, mode: SelectionMode) -> Self {
        self.selection = mode;
        self
    }

    /// Set the empty message.
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Build a view from this config.
    pub fn build<T: TableRow>(self) -> TableResult<TableView<T>> {
        Ok(TableView::new(self.columns, self.selection)?.with_empty_message(self.empty_message))
    }
}
