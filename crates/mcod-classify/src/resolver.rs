//! Revision resolver.

use mcod_common::{any_to_i64, any_to_string};
use mcod_model::{ClassifyError, FIRST_YEAR, LAST_YEAR, Result, Revision, columns};
use polars::prelude::{AnyValue, DataFrame};
use tracing::debug;

use crate::frame::require_column;

/// Active revision for a data year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRevision {
    pub year: i32,
    pub revision: Revision,
}

impl ResolvedRevision {
    /// Column holding the primary (underlying) cause code.
    pub fn primary_column(&self) -> &'static str {
        self.revision.primary_column()
    }
}

/// Resolves the revision in force for `year`.
///
/// # Errors
///
/// Returns `OutOfRangeYear` outside 1969–2021.
pub fn resolve_revision(year: i64) -> Result<ResolvedRevision> {
    let out_of_range = || ClassifyError::OutOfRangeYear {
        year,
        min: FIRST_YEAR,
        max: LAST_YEAR,
    };
    let year = i32::try_from(year).map_err(|_| out_of_range())?;
    let revision = Revision::from_year(year)?;
    debug!(year, %revision, primary_column = revision.primary_column(), "resolved revision");
    Ok(ResolvedRevision { year, revision })
}

/// Resolves the revision from the batch's `Year` column.
///
/// Every non-null year must fall under one revision. The earliest year is
/// reported.
pub fn resolve_batch(df: &DataFrame) -> Result<ResolvedRevision> {
    let column = require_column(df, columns::YEAR)?;
    let mut resolved: Option<ResolvedRevision> = None;

    for idx in 0..df.height() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        if any_to_string(value.clone()).trim().is_empty() {
            continue;
        }
        let year = any_to_i64(value.clone()).ok_or_else(|| ClassifyError::TypeCoercionFailure {
            column: columns::YEAR.to_string(),
            expected: "integer year",
            found: any_to_string(value),
        })?;
        let current = resolve_revision(year)?;
        resolved = match resolved {
            None => Some(current),
            Some(first) if first.revision != current.revision => {
                return Err(ClassifyError::MixedRevisions {
                    first: first.revision.min(current.revision),
                    other: first.revision.max(current.revision),
                });
            }
            Some(first) if current.year < first.year => Some(current),
            Some(first) => Some(first),
        };
    }

    resolved.ok_or_else(|| ClassifyError::invalid_value(columns::YEAR, "no year values in batch"))
}
