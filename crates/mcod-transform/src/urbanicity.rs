//! County rurality.
//!
//! Resident counties are mapped to a Rural-Urban Continuum Code through the
//! table of the period covering the data year, then bucketed into
//! [`Urbanicity`] classes.

use mcod_model::{ClassifyError, Result, Urbanicity, columns};
use mcod_standards::rucc::{fips_key, gcm_key, state_fips, supplementary_rucc};
use mcod_standards::{RuccPeriod, RuccRegistry, RuccTable};
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
use tracing::{debug, info};

use crate::data_utils::{filter_rows, integer_values, text_values};

fn period_for(year: i64) -> Result<(i32, RuccPeriod)> {
    let out_of_range = || ClassifyError::OutOfRangeYear {
        year,
        min: *RuccPeriod::YEARS.start(),
        max: *RuccPeriod::YEARS.end(),
    };
    let year = i32::try_from(year).map_err(|_| out_of_range())?;
    let period = RuccPeriod::for_year(year).ok_or_else(out_of_range)?;
    Ok((year, period))
}

fn lookup(table: &RuccTable, year: i32, state: &str, county: i64) -> Option<i64> {
    if table.period().uses_gcm() {
        return table.get(&gcm_key(state, county));
    }
    let key = fips_key(state_fips(state)?, county);
    supplementary_rucc(&key, year).or_else(|| table.get(&key))
}

/// RUCC per row; `None` where the county is absent or unmapped.
fn rucc_values(df: &DataFrame, year: i64, registry: &RuccRegistry) -> Result<Vec<Option<i64>>> {
    let (year, period) = period_for(year)?;
    let table = registry.table(period).ok_or_else(|| {
        ClassifyError::invalid_value(
            columns::RESIDENT_COUNTY,
            format!("no RUCC table loaded for {period} ({})", period.file_name()),
        )
    })?;
    let states = text_values(df, columns::RESIDENT_STATE)?;
    let counties = integer_values(df, columns::RESIDENT_COUNTY)?;

    let codes: Vec<Option<i64>> = states
        .iter()
        .zip(&counties)
        .map(|(state, county)| match (state, county) {
            (Some(state), Some(county)) => lookup(table, year, state, *county),
            _ => None,
        })
        .collect();
    debug!(
        %period,
        unmapped = codes.iter().filter(|code| code.is_none()).count(),
        "resolved county RUCC"
    );
    Ok(codes)
}

/// Appends nullable `RUCC` and `Urbanicity` columns.
///
/// `Urbanicity` holds the class index (0 urban, 1 metro, 2 rural).
pub fn classify_location(df: &DataFrame, year: i64, registry: &RuccRegistry) -> Result<DataFrame> {
    let codes = rucc_values(df, year, registry)?;
    let classes: Vec<Option<i64>> = codes
        .iter()
        .map(|code| {
            code.and_then(Urbanicity::from_rucc)
                .map(|class| i64::from(class.index()))
        })
        .collect();

    let mut out = df.clone();
    out.with_column(Series::new(columns::RUCC.into(), codes).into_column())?;
    out.with_column(Series::new(columns::URBANICITY.into(), classes).into_column())?;
    Ok(out)
}

/// Rows whose county falls in `class`.
pub fn filter_urbanicity(
    df: &DataFrame,
    year: i64,
    registry: &RuccRegistry,
    class: Urbanicity,
) -> Result<DataFrame> {
    let keep: Vec<bool> = rucc_values(df, year, registry)?
        .into_iter()
        .map(|code| code.and_then(Urbanicity::from_rucc) == Some(class))
        .collect();
    let out = filter_rows(df, &keep)?;
    info!(
        year,
        %class,
        input = df.height(),
        kept = out.height(),
        "urbanicity filter"
    );
    Ok(out)
}
