//! Field scanner.
//!
//! Equality mode compares one field against a catalog exactly. Containment
//! mode sweeps several fields and flags a row as soon as any field value
//! occurs inside any catalog code. Absent values never match, and a row
//! whose scanned fields are all absent is negative.

use std::collections::HashMap;

use mcod_common::canonical_code;
use mcod_model::Result;
use mcod_standards::Catalog;
use polars::prelude::{AnyValue, DataFrame};

use crate::frame::{code_values, require_code_column};

/// True when `field_value` occurs inside `catalog_code`.
///
/// The direction matters: a record value `"X72"` matches the padded catalog
/// code `"X72 "`, while a record value `"X72 "` does not match a catalog code
/// `"X72"`.
pub fn is_prefix_or_substring_of(field_value: &str, catalog_code: &str) -> bool {
    catalog_code.contains(field_value)
}

/// True when the value lies inside any code of the catalog.
pub fn contained_in_catalog(field_value: &str, catalog: &Catalog) -> bool {
    catalog
        .codes()
        .iter()
        .any(|code| is_prefix_or_substring_of(field_value, code))
}

/// Per-row exact match of one column against the catalog.
pub fn equality_mask(df: &DataFrame, column: &str, catalog: &Catalog) -> Result<Vec<bool>> {
    let values = code_values(df, column)?;
    Ok(values
        .iter()
        .map(|value| {
            value
                .as_deref()
                .is_some_and(|code| catalog.contains_exact(code))
        })
        .collect())
}

/// Per-row containment match, reduced over `columns` by logical OR.
pub fn containment_mask(df: &DataFrame, columns: &[&str], catalog: &Catalog) -> Result<Vec<bool>> {
    let mut keep = vec![false; df.height()];
    let mut memo: HashMap<String, bool> = HashMap::new();

    for name in columns {
        let column = require_code_column(df, name)?;
        for (idx, flag) in keep.iter_mut().enumerate() {
            if *flag {
                continue;
            }
            let Some(code) = canonical_code(column.get(idx).unwrap_or(AnyValue::Null)) else {
                continue;
            };
            *flag = match memo.get(&code) {
                Some(hit) => *hit,
                None => {
                    let hit = contained_in_catalog(&code, catalog);
                    memo.insert(code, hit);
                    hit
                }
            };
        }
    }
    Ok(keep)
}
