use polars::prelude::PolarsError;
use thiserror::Error;

use crate::cause::Cause;
use crate::revision::Revision;

/// Failures raised while validating or classifying a batch.
///
/// Every variant except `Polars` is a precondition failure detected before
/// the batch is transformed, so a returned error never leaves a partial
/// result behind.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("year {year} is outside the supported range [{min}, {max}]")]
    OutOfRangeYear { year: i64, min: i32, max: i32 },

    #[error("required column `{column}` is missing from the batch")]
    MissingRequiredColumn { column: String },

    #[error("unknown {kind}: {value}")]
    UnknownCauseOrMethod { kind: &'static str, value: String },

    #[error("no `{cause}` catalog is defined for {revision}")]
    UnsupportedRevisionForCause { cause: Cause, revision: Revision },

    #[error("column `{column}` cannot be read as {expected} (found {found})")]
    TypeCoercionFailure {
        column: String,
        expected: &'static str,
        found: String,
    },

    #[error("batch mixes {first} and {other} years; classify each revision separately")]
    MixedRevisions { first: Revision, other: Revision },

    #[error("invalid value in `{column}`: {message}")]
    InvalidValue { column: String, message: String },

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

impl ClassifyError {
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingRequiredColumn {
            column: column.into(),
        }
    }

    pub fn unknown(kind: &'static str, value: impl ToString) -> Self {
        Self::UnknownCauseOrMethod {
            kind,
            value: value.to_string(),
        }
    }

    pub fn invalid_value(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            column: column.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClassifyError>;
