//! Frame access helpers shared by the classifiers.

use mcod_common::{canonical_code, is_code_dtype};
use mcod_model::{ClassifyError, Result};
use polars::prelude::{AnyValue, BooleanChunked, Column, DataFrame, NewChunkedArray};

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| ClassifyError::missing_column(name))
}

/// Column that must hold cause codes (text or numbers).
pub fn require_code_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    let column = require_column(df, name)?;
    if !is_code_dtype(column.dtype()) {
        return Err(ClassifyError::TypeCoercionFailure {
            column: name.to_string(),
            expected: "cause code (string or integer)",
            found: column.dtype().to_string(),
        });
    }
    Ok(column)
}

pub fn require_code_columns(df: &DataFrame, names: &[&str]) -> Result<()> {
    for name in names {
        require_code_column(df, name)?;
    }
    Ok(())
}

/// Canonical code of every row; `None` marks an absent value.
pub fn code_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = require_code_column(df, name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(canonical_code(column.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

pub fn filter_rows(df: &DataFrame, keep: &[bool]) -> Result<DataFrame> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    Ok(df.filter(&mask)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("ICD9".into(), &[Some(9550i64), None, Some(350)]).into_column(),
            Series::new("Flag".into(), &[true, false, true]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn integer_codes_are_canonical_strings() {
        let values = code_values(&frame(), "ICD9").unwrap();
        assert_eq!(
            values,
            vec![Some("9550".to_string()), None, Some("350".to_string())]
        );
    }

    #[test]
    fn boolean_columns_are_not_codes() {
        let err = require_code_column(&frame(), "Flag").unwrap_err();
        assert!(matches!(err, ClassifyError::TypeCoercionFailure { .. }));
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let err = require_column(&frame(), "RA1").unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::MissingRequiredColumn { ref column } if column == "RA1"
        ));
    }

    #[test]
    fn filter_preserves_order() {
        let kept = filter_rows(&frame(), &[true, false, true]).unwrap();
        assert_eq!(kept.height(), 2);
        let values = code_values(&kept, "ICD9").unwrap();
        assert_eq!(values[1].as_deref(), Some("350"));
    }
}
