//! Polars AnyValue utility functions.
//!
//! This module provides helper functions for working with Polars `AnyValue` types,
//! including string conversions, numeric parsing and the canonical rendering of
//! cause-of-death codes.

use polars::prelude::{AnyValue, DataType};

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`, properly formats numeric types without
/// unnecessary trailing zeros.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use mcod_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_string(AnyValue::String("M")), "M");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => if b { "Y" } else { "N" }.to_string(),
        other => other.to_string(),
    }
}

/// Renders a code cell in its canonical string form.
///
/// Strings are kept verbatim so that ICD-10 space padding survives
/// (`"X64 "` stays `"X64 "`). Integers render in decimal and integral floats
/// lose their fractional part, so a numeric ICD-9 code read as `9550.0`
/// becomes `"9550"`. Nulls, NaN and blank strings are absent.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use mcod_common::canonical_code;
///
/// assert_eq!(canonical_code(AnyValue::String("X64 ")), Some("X64 ".to_string()));
/// assert_eq!(canonical_code(AnyValue::Int64(955)), Some("955".to_string()));
/// assert_eq!(canonical_code(AnyValue::Float64(9550.0)), Some("9550".to_string()));
/// assert_eq!(canonical_code(AnyValue::String("   ")), None);
/// assert_eq!(canonical_code(AnyValue::Null), None);
/// ```
pub fn canonical_code(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::String(s) => non_blank(s),
        AnyValue::StringOwned(s) => non_blank(&s),
        AnyValue::Float32(v) if v.is_nan() => None,
        AnyValue::Float64(v) if v.is_nan() => None,
        AnyValue::Float32(v) => Some(format_numeric(f64::from(v))),
        AnyValue::Float64(v) => Some(format_numeric(v)),
        other => {
            let rendered = any_to_string(other);
            if rendered.is_empty() { None } else { Some(rendered) }
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Returns true if a column of this type can hold cause-of-death codes.
///
/// Codes arrive either as text or as numbers depending on how the batch was
/// parsed; an all-null column has the `Null` type.
pub fn is_code_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::String
            | DataType::Null
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use mcod_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(9550.0), "9550");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Converts an `AnyValue` to `f64`, returning `None` for non-numeric or null values.
///
/// Handles integer types, floating-point types, and string parsing.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }
}

/// Converts an `AnyValue` to `i64`, returning `None` for non-integer or null values.
///
/// Floats are accepted only when they carry an integral value, so a year read
/// as `2000.0` converts while `2000.5` does not.
pub fn any_to_i64(value: AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(i64::from(v)),
        AnyValue::Int16(v) => Some(i64::from(v)),
        AnyValue::Int32(v) => Some(i64::from(v)),
        AnyValue::Int64(v) => Some(v),
        AnyValue::UInt8(v) => Some(i64::from(v)),
        AnyValue::UInt16(v) => Some(i64::from(v)),
        AnyValue::UInt32(v) => Some(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).ok(),
        AnyValue::Float32(v) => integral_f64(f64::from(v)),
        AnyValue::Float64(v) => integral_f64(v),
        AnyValue::String(s) => parse_i64(s),
        AnyValue::StringOwned(s) => parse_i64(&s),
        _ => None,
    }
}

fn integral_f64(v: f64) -> Option<i64> {
    if v.is_finite() && v.fract() == 0.0 {
        Some(v as i64)
    } else {
        None
    }
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parses a string as `i64`, returning `None` for invalid or empty strings.
///
/// Spreadsheet exports often write integers as `"6.0"`; those parse too.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| parse_f64(trimmed).and_then(integral_f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_string_null() {
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn test_any_to_string_numbers() {
        assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
        assert_eq!(any_to_string(AnyValue::Float64(1.5)), "1.5");
        assert_eq!(any_to_string(AnyValue::Float64(10.0)), "10");
    }

    #[test]
    fn test_canonical_code_keeps_padding() {
        assert_eq!(
            canonical_code(AnyValue::String("X72 ")),
            Some("X72 ".to_string())
        );
        assert_eq!(canonical_code(AnyValue::String("Y870")), Some("Y870".to_string()));
    }

    #[test]
    fn test_canonical_code_numeric() {
        assert_eq!(canonical_code(AnyValue::Int32(350)), Some("350".to_string()));
        assert_eq!(canonical_code(AnyValue::Float64(810.0)), Some("810".to_string()));
        assert_eq!(canonical_code(AnyValue::Float64(f64::NAN)), None);
    }

    #[test]
    fn test_canonical_code_blank_is_absent() {
        assert_eq!(canonical_code(AnyValue::String("")), None);
        assert_eq!(canonical_code(AnyValue::String("    ")), None);
        assert_eq!(canonical_code(AnyValue::Null), None);
    }

    #[test]
    fn test_is_code_dtype() {
        assert!(is_code_dtype(&DataType::String));
        assert!(is_code_dtype(&DataType::Int64));
        assert!(is_code_dtype(&DataType::Null));
        assert!(!is_code_dtype(&DataType::Boolean));
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(1.0), "1");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(1.50), "1.5");
        assert_eq!(format_numeric(0.0), "0");
    }

    #[test]
    fn test_any_to_f64() {
        assert_eq!(any_to_f64(AnyValue::Null), None);
        assert_eq!(any_to_f64(AnyValue::Int32(42)), Some(42.0));
        assert_eq!(any_to_f64(AnyValue::String("2.5")), Some(2.5));
        assert_eq!(any_to_f64(AnyValue::String("invalid")), None);
    }

    #[test]
    fn test_any_to_i64() {
        assert_eq!(any_to_i64(AnyValue::Null), None);
        assert_eq!(any_to_i64(AnyValue::Int32(1999)), Some(1999));
        assert_eq!(any_to_i64(AnyValue::Float64(2000.0)), Some(2000));
        assert_eq!(any_to_i64(AnyValue::Float64(2000.5)), None);
        assert_eq!(any_to_i64(AnyValue::String(" 1978 ")), Some(1978));
        assert_eq!(any_to_i64(AnyValue::String("n/a")), None);
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_f64("  "), None);
        assert_eq!(parse_f64(" 3.5 "), Some(3.5));
        assert_eq!(parse_i64(""), None);
        assert_eq!(parse_i64("  -100  "), Some(-100));
        assert_eq!(parse_i64("6.0"), Some(6));
        assert_eq!(parse_i64("6.5"), None);
    }
}
