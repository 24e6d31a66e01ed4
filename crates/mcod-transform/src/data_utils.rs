//! DataFrame value extraction for transforms.
//!
//! Extractors distinguish absent values (null or blank) from values that
//! cannot be read as the requested type; the latter fail with
//! `TypeCoercionFailure` before any transform runs.

use mcod_common::{any_to_f64, any_to_i64, any_to_string};
use mcod_model::{ClassifyError, Result};
use polars::prelude::{AnyValue, BooleanChunked, Column, DataFrame, NewChunkedArray};

pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| ClassifyError::missing_column(name))
}

fn is_absent(value: &AnyValue<'_>) -> bool {
    matches!(value, AnyValue::Null) || any_to_string(value.clone()).trim().is_empty()
}

/// Integer values of a column; `None` for absent cells.
pub fn integer_values(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>> {
    let column = require_column(df, name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        if is_absent(&value) {
            values.push(None);
            continue;
        }
        let parsed = any_to_i64(value.clone()).ok_or_else(|| ClassifyError::TypeCoercionFailure {
            column: name.to_string(),
            expected: "integer",
            found: any_to_string(value),
        })?;
        values.push(Some(parsed));
    }
    Ok(values)
}

/// Floating-point values of a column; `None` for absent cells.
pub fn float_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = require_column(df, name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        if is_absent(&value) {
            values.push(None);
            continue;
        }
        let parsed = any_to_f64(value.clone()).ok_or_else(|| ClassifyError::TypeCoercionFailure {
            column: name.to_string(),
            expected: "number",
            found: any_to_string(value),
        })?;
        values.push(Some(parsed));
    }
    Ok(values)
}

/// Trimmed text values of a column; `None` for absent cells.
pub fn text_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = require_column(df, name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = any_to_string(column.get(idx).unwrap_or(AnyValue::Null));
        let trimmed = value.trim();
        values.push((!trimmed.is_empty()).then(|| trimmed.to_string()));
    }
    Ok(values)
}

pub fn filter_rows(df: &DataFrame, keep: &[bool]) -> Result<DataFrame> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    Ok(df.filter(&mask)?)
}
