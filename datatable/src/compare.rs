//! Cell comparison for sorting.
//!
//! Every cell falls into one of four ranks, compared before the values are:
//!
//! - `Empty` cells sort first, in both directions.
//! - Numbers (`Int`, non-NaN `Float`) compare by exact value.
//! - Text and booleans compare by the collated string form.
//! - `NaN` sorts last, in both directions.
//!
//! Numbers sort before text ascending and after it descending. The result is
//! a total order for either direction, which `slice::sort_by` relies on.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::cell::CellValue;
use crate::collate::CollationKey;
use crate::sort::SortDirection;

/// Compare two cells from the same column.
pub fn compare(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    compare_cells(a, None, b, None, direction)
}

/// A cell prepared for repeated comparison.
///
/// Owns the cell and, for text cells, its collation key, so a sort builds the
/// key once per row instead of once per comparison.
#[derive(Debug, Clone)]
pub struct SortKey {
    value: CellValue,
    text: Option<CollationKey>,
}

impl SortKey {
    /// Prepare `value` for sorting.
    pub fn new(value: CellValue) -> Self {
        let text = match Rank::of(&value) {
            Rank::Text => Some(CollationKey::new(&value.to_text())),
            _ => None,
        };
        Self { value, text }
    }

    /// The underlying cell.
    pub fn value(&self) -> &CellValue {
        &self.value
    }
}

/// Compare two prepared cells.
pub fn compare_keys(a: &SortKey, b: &SortKey, direction: SortDirection) -> Ordering {
    compare_cells(&a.value, a.text.as_ref(), &b.value, b.text.as_ref(), direction)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Rank {
    Empty,
    Number,
    Text,
    Nan,
}

impl Rank {
    fn of(value: &CellValue) -> Self {
        match value {
            CellValue::Empty => Rank::Empty,
            CellValue::Int(_) => Rank::Number,
            CellValue::Float(v) if v.is_nan() => Rank::Nan,
            CellValue::Float(_) => Rank::Number,
            CellValue::Bool(_) | CellValue::Text(_) => Rank::Text,
        }
    }
}

fn compare_cells(
    a: &CellValue,
    a_key: Option<&CollationKey>,
    b: &CellValue,
    b_key: Option<&CollationKey>,
    direction: SortDirection,
) -> Ordering {
    match (Rank::of(a), Rank::of(b)) {
        (Rank::Empty, Rank::Empty) | (Rank::Nan, Rank::Nan) => Ordering::Equal,
        (Rank::Empty, _) | (_, Rank::Nan) => Ordering::Less,
        (_, Rank::Empty) | (Rank::Nan, _) => Ordering::Greater,
        (Rank::Number, Rank::Number) => direction.apply(compare_numbers(a, b)),
        (Rank::Text, Rank::Text) => {
            direction.apply(collation_key(a, a_key).cmp(&collation_key(b, b_key)))
        }
        (ra, rb) => direction.apply(ra.cmp(&rb)),
    }
}

fn collation_key<'a>(value: &CellValue, key: Option<&'a CollationKey>) -> Cow<'a, CollationKey> {
    match key {
        Some(key) => Cow::Borrowed(key),
        None => Cow::Owned(CollationKey::new(&value.to_text())),
    }
}

/// Exact comparison of two non-NaN numbers. `-0.0` equals `0.0`.
fn compare_numbers(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Int(x), CellValue::Int(y)) => x.cmp(y),
        (CellValue::Float(x), CellValue::Float(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (CellValue::Int(x), CellValue::Float(y)) => compare_int_float(*x, *y),
        (CellValue::Float(x), CellValue::Int(y)) => compare_int_float(*y, *x).reverse(),
        _ => Ordering::Equal,
    }
}

/// Compare an integer with a non-NaN float without rounding the integer.
fn compare_int_float(int: i64, float: f64) -> Ordering {
    // 2^63; i64 covers [-2^63, 2^63)
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if float >= LIMIT {
        return Ordering::Less;
    }
    if float < -LIMIT {
        return Ordering::Greater;
    }

    let whole = float.trunc();
    // In range, so the cast is exact
    int.cmp(&(whole as i64)).then_with(|| {
        if float > whole {
            Ordering::Less
        } else if float < whole {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}
