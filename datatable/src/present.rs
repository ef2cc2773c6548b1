//! What a renderer needs to draw a table, without drawing it.

use crate::column::{Column, TableRow};
use crate::view::TableView;

/// A row in display order, with its selection flag.
#[derive(Debug)]
pub struct RowView<'a, T> {
    pub record: &'a T,
    pub selected: bool,
}

/// The body of a table, ready to render.
#[derive(Debug)]
pub enum TableBody<'a, T> {
    /// Rows are still loading.
    Loading,
    /// There are no rows; show the message instead.
    Empty(&'a str),
    /// Rows in display order.
    Rows(Vec<RowView<'a, T>>),
}

impl<T> TableBody<'_, T> {
    /// Number of rows (zero unless `Rows`).
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Rows(rows) => rows.len(),
            _ => 0,
        }
    }
}

/// Display text for the cell of `record` in `column`.
pub fn cell_text<T: TableRow>(record: &T, column: &Column) -> String {
    record.cell(&column.key).to_text()
}

impl<T: TableRow> TableView<T> {
    /// Header text for `column`, with a direction arrow when it is sorted.
    pub fn header_label(&self, column: &Column) -> String {
        match self.sort_state().active() {
            Some((key, direction)) if key == column.key => {
                format!("{} {}", column.label, direction.indicator())
            }
            _ => column.label.clone(),
        }
    }

    /// Header text for every column, in column order.
    pub fn header_labels(&self) -> Vec<String> {
        self.columns()
            .iter()
            .map(|column| self.header_label(column))
            .collect()
    }

    /// Build the table body for `records`.
    ///
    /// Loading takes precedence over everything else; an empty record set
    /// yields the empty message.
    pub fn body<'a>(&'a self, records: &'a [T]) -> TableBody<'a, T> {
        if self.is_loading() {
            return TableBody::Loading;
        }
        if records.is_empty() {
            return TableBody::Empty(self.empty_message());
        }

        let rows = self
            .derive_view(records)
            .into_iter()
            .map(|record| RowView {
                selected: self.has_selection(&record.key()),
                record,
            })
            .collect();
        TableBody::Rows(rows)
    }
}
