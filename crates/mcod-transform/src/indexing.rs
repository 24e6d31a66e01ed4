//! Rates relative to the earliest year.

use mcod_model::{ClassifyError, Result};
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series, UInt32Chunked};
use tracing::debug;

use crate::data_utils::{float_values, integer_values};

/// Sorts the batch by `year_column` and appends `<rate_column>_indexed`,
/// the rate as a percentage of the earliest year's rate.
///
/// The rate and year columns are rewritten as numbers.
///
/// # Errors
///
/// `TypeCoercionFailure` for non-numeric rates or years; `InvalidValue` for
/// an empty batch, a missing year, or a missing or zero base rate.
pub fn index_rates(df: &DataFrame, rate_column: &str, year_column: &str) -> Result<DataFrame> {
    let rates = float_values(df, rate_column)?;
    let years = integer_values(df, year_column)?;
    if df.height() == 0 {
        return Err(ClassifyError::invalid_value(rate_column, "cannot index an empty batch"));
    }
    let years = years
        .into_iter()
        .enumerate()
        .map(|(row, year)| {
            year.ok_or_else(|| {
                ClassifyError::invalid_value(year_column, format!("row {row} has no year"))
            })
        })
        .collect::<Result<Vec<i64>>>()?;

    let mut order: Vec<u32> = (0..df.height()).map(|idx| idx as u32).collect();
    order.sort_by_key(|idx| years[*idx as usize]);

    let base = rates[order[0] as usize]
        .filter(|rate| *rate != 0.0)
        .ok_or_else(|| {
            ClassifyError::invalid_value(
                rate_column,
                format!("base rate for {} is missing or zero", years[order[0] as usize]),
            )
        })?;
    debug!(base_year = years[order[0] as usize], base, "indexing rates");

    let sorted_rates: Vec<Option<f64>> = order.iter().map(|idx| rates[*idx as usize]).collect();
    let sorted_years: Vec<i64> = order.iter().map(|idx| years[*idx as usize]).collect();
    let indexed: Vec<Option<f64>> = sorted_rates
        .iter()
        .map(|rate| rate.map(|rate| rate * 100.0 / base))
        .collect();

    let idx = UInt32Chunked::from_vec("idx".into(), order);
    let mut out = df.take(&idx)?;
    out.with_column(Series::new(rate_column.into(), sorted_rates).into_column())?;
    out.with_column(Series::new(year_column.into(), sorted_years).into_column())?;
    out.with_column(Series::new(format!("{rate_column}_indexed").into(), indexed).into_column())?;
    Ok(out)
}
