//! Headless data table engine.
//!
//! `datatable` holds the state behind an interactive table, without rendering
//! anything:
//!
//! - Sorting: one active column at a time, toggled by header activation, with
//!   a stable, natural-language aware comparator.
//! - Selection: disabled, single or multi, tracked by row key.
//! - Presentation helpers: header labels with sort arrows, cell text, and the
//!   loading / empty / rows body state.
//!
//! Rows are any type implementing [`TableRow`]. The engine never stores rows;
//! pass the current rows to [`TableView::derive_view`] or [`TableView::body`]
//! when rendering.

pub mod cell;
pub mod collate;
pub mod column;
pub mod compare;
pub mod config;
pub mod error;
pub mod observer;
pub mod present;
pub mod selection;
pub mod sort;
pub mod view;

pub use cell::CellValue;
pub use column::{Column, TableRow};
pub use compare::compare;
pub use config::TableConfig;
pub use error::{TableError, TableResult};
pub use observer::{SubscriptionId, ViewEvent};
pub use present::{RowView, TableBody, cell_text};
pub use selection::{Selection, SelectionMode};
pub use sort::{SortDirection, SortState};
pub use view::{DEFAULT_EMPTY_MESSAGE, TableView};
