//! Table view engine: sort state, selection state and row ordering.

use std::collections::HashSet;
use std::fmt;

use log::{debug, trace};

use crate::column::{Column, TableRow};
use crate::compare::{SortKey, compare_keys};
use crate::error::{TableError, TableResult};
use crate::observer::{Subscribers, SubscriptionId, ViewEvent};
use crate::selection::{Selection, SelectionMode};
use crate::sort::SortState;

/// Message shown when a table has no rows.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// Headless table view over rows of type `T`.
///
/// `TableView` owns the sort and selection state for one table. It never
/// stores rows: callers pass the current rows to [`derive_view`] whenever they
/// need the display order, so the data can be replaced freely between calls.
///
/// # Example
///
/// ```
/// use datatable::{CellValue, Column, SelectionMode, TableRow, TableView};
///
/// #[derive(Clone)]
/// struct User {
///     id: u32,
///     name: &'static str,
/// }
///
/// impl TableRow for User {
///     type Key = u32;
///     fn key(&self) -> u32 {
///         self.id
///     }
///     fn cell(&self, column_key: &str) -> CellValue {
///         match column_key {
///             "name" => CellValue::from(self.name),
///             _ => CellValue::Empty,
///         }
///     }
/// }
///
/// let users = vec![User { id: 1, name: "Bob" }, User { id: 2, name: "alice" }];
/// let mut view = TableView::new(vec![Column::new("name", "Name").sortable()], SelectionMode::Multi)?;
///
/// view.activate_sort("name");
/// let ordered: Vec<u32> = view.derive_view(&users).iter().map(|u| u.id).collect();
/// assert_eq!(ordered, vec![2, 1]);
///
/// view.toggle_selection(1);
/// assert!(view.has_selection(&1));
/// # Ok::<(), datatable::TableError>(())
/// ```
///
/// [`derive_view`]: TableView::derive_view
pub struct TableView<T: TableRow> {
    /// Column definitions, fixed at construction.
    columns: Vec<Column>,
    /// Current sort column and direction.
    sort: SortState,
    /// Selected row keys.
    selection: Selection<T::Key>,
    /// Whether the rows are still being loaded.
    loading: bool,
    /// Message shown when there are no rows.
    empty_message: String,
    /// Change callbacks.
    subscribers: Subscribers<T::Key>,
}

impl<T: TableRow> fmt::Debug for TableView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableView")
            .field("columns", &self.columns)
            .field("sort", &self.sort)
            .field("selection", &self.selection)
            .field("loading", &self.loading)
            .field("empty_message", &self.empty_message)
            .field("subscribers", &self.subscribers)
            .finish()
    }
}

impl<T: TableRow> TableView<T> {
    /// Create a view over `columns` with the given selection mode.
    ///
    /// Fails if two columns share a key.
    pub fn new(columns: Vec<Column>, selection_mode: SelectionMode) -> TableResult<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.key.as_str()) {
                return Err(TableError::DuplicateColumn {
                    key: column.key.clone(),
                });
            }
        }

        debug!(
            "TableView created: {} columns, selection {:?}",
            columns.len(),
            selection_mode
        );

        Ok(Self {
            columns,
            sort: SortState::new(),
            selection: Selection::for_mode(selection_mode),
            loading: false,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            subscribers: Subscribers::default(),
        })
    }

    /// Set the message shown when there are no rows.
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    // -------------------------------------------------------------------------
    // Column access
    // -------------------------------------------------------------------------

    /// Get column definitions.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column by key.
    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    // -------------------------------------------------------------------------
    // Row ordering
    // -------------------------------------------------------------------------

    /// Order `records` for display according to the current sort state.
    ///
    /// With no active sort column the input order is returned unchanged.
    /// Otherwise rows are stably sorted by the active column, so rows that
    /// compare equal keep their relative input order in either direction.
    pub fn derive_view<'a>(&self, records: &'a [T]) -> Vec<&'a T> {
        let Some((key, direction)) = self.sort.active() else {
            return records.iter().collect();
        };

        trace!("Deriving view of {} rows by '{}' {:?}", records.len(), key, direction);

        let mut keyed: Vec<(SortKey, &T)> = records
            .iter()
            .map(|record| (SortKey::new(record.cell(key)), record))
            .collect();
        // slice::sort_by is stable
        keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, direction));
        keyed.into_iter().map(|(_, record)| record).collect()
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get current sort state.
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Handle activation of the header for column `key`.
    ///
    /// Unknown and non-sortable columns are ignored. Activating the sorted
    /// column flips its direction; activating another column sorts by it
    /// ascending. Returns the resulting sort state.
    pub fn activate_sort(&mut self, key: &str) -> &SortState {
        if !self.column(key).is_some_and(|c| c.sortable) {
            trace!("Ignoring sort activation on '{}'", key);
            return &self.sort;
        }

        self.sort.activate(key);
        debug!("Sort changed: '{}' {:?}", key, self.sort.direction());
        self.subscribers
            .notify(&ViewEvent::SortChanged(self.sort.clone()));
        &self.sort
    }

    /// Clear sort state, restoring input order.
    pub fn clear_sort(&mut self) {
        if self.sort.active_key().is_none() {
            return;
        }
        self.sort.clear();
        debug!("Sort cleared");
        self.subscribers
            .notify(&ViewEvent::SortChanged(self.sort.clone()));
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get the selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    /// Get the selection state.
    pub fn selection(&self) -> &Selection<T::Key> {
        &self.selection
    }

    /// Check if a row key is selected.
    pub fn has_selection(&self, key: &T::Key) -> bool {
        self.selection.is_selected(key)
    }

    /// Get all selected keys in selection order.
    pub fn selected_keys(&self) -> Vec<&T::Key> {
        self.selection.keys()
    }

    /// Handle activation of the row with `key`.
    ///
    /// The key is not checked against any rows. Does nothing when selection
    /// is disabled. Returns the resulting selection.
    pub fn toggle_selection(&mut self, key: T::Key) -> &Selection<T::Key> {
        let (added, removed) = self.selection.toggle(key);
        self.notify_selection(added, removed);
        &self.selection
    }

    /// Clear all selection.
    /// Returns the keys that were deselected.
    pub fn clear_selection(&mut self) -> Vec<T::Key> {
        let removed = self.selection.clear();
        self.notify_selection(Vec::new(), removed.clone());
        removed
    }

    /// Deselect every key that has no row in `records`.
    ///
    /// Selection is never reconciled implicitly; call this after replacing
    /// the rows if stale keys should be dropped.
    /// Returns the keys that were deselected.
    pub fn prune_selection(&mut self, records: &[T]) -> Vec<T::Key> {
        if self.selection.is_empty() {
            return Vec::new();
        }
        let live: HashSet<T::Key> = records.iter().map(|record| record.key()).collect();
        let removed = self.selection.retain(|key| live.contains(key));
        self.notify_selection(Vec::new(), removed.clone());
        removed
    }

    fn notify_selection(&mut self, added: Vec<T::Key>, removed: Vec<T::Key>) {
        if added.is_empty() && removed.is_empty() {
            return;
        }
        debug!(
            "Selection changed: +{} -{} ({} selected)",
            added.len(),
            removed.len(),
            self.selection.len()
        );
        self.subscribers
            .notify(&ViewEvent::SelectionChanged { added, removed });
    }

    // -------------------------------------------------------------------------
    // Loading state
    // -------------------------------------------------------------------------

    /// Mark the rows as loading (or done loading).
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Check if the rows are loading.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Get the message shown when there are no rows.
    pub fn empty_message(&self) -> &str {
        &self.empty_message
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Register a callback for sort and selection changes.
    ///
    /// Callbacks run synchronously, in subscription order, after the state
    /// has been updated. Operations that change nothing do not notify.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ViewEvent<T::Key>) + 'static,
    {
        let id = self.subscribers.add(Box::new(callback));
        trace!("Subscribed {}", id);
        id
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    /// Number of registered callbacks.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
