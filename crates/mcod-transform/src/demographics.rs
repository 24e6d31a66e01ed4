//! Demographic filters.
//!
//! Each filter keeps the rows of one class and returns every input column
//! unchanged. Rows whose class cannot be determined are dropped.

use std::ops::RangeInclusive;

use mcod_model::{
    ClassifyError, DemographicFilter, FIRST_YEAR, Gender, Generation, LAST_YEAR, Race3, Race5,
    Result, columns,
};
use polars::prelude::DataFrame;
use tracing::{debug, info};

use crate::data_utils::{filter_rows, integer_values, text_values};

/// First year whose race data is only carried by the 40-class recode.
const RACE40_BRIDGE_YEAR: i64 = 2021;

fn check_year(year: i64, span: RangeInclusive<i32>) -> Result<()> {
    if (i64::from(*span.start())..=i64::from(*span.end())).contains(&year) {
        Ok(())
    } else {
        Err(ClassifyError::OutOfRangeYear {
            year,
            min: *span.start(),
            max: *span.end(),
        })
    }
}

fn finish(df: &DataFrame, keep: &[bool], filter: &str) -> Result<DataFrame> {
    let out = filter_rows(df, keep)?;
    info!(filter, input = df.height(), kept = out.height(), "demographic filter");
    Ok(out)
}

/// Rows whose `Gender` is `gender`.
pub fn filter_gender(df: &DataFrame, gender: Gender) -> Result<DataFrame> {
    let values = text_values(df, columns::GENDER)?;
    let keep: Vec<bool> = values
        .iter()
        .map(|value| value.as_deref() == Some(gender.code()))
        .collect();
    finish(df, &keep, gender.code())
}

/// Rows in the three-class race group `race`.
///
/// 2021 files carry no 3-class recode; the 40-class recode is bridged.
pub fn filter_race3(df: &DataFrame, year: i64, race: Race3) -> Result<DataFrame> {
    check_year(year, FIRST_YEAR..=LAST_YEAR)?;
    let keep: Vec<bool> = if year >= RACE40_BRIDGE_YEAR {
        debug!(year, "bridging race from Race_Recode_40");
        integer_values(df, columns::RACE_RECODE_40)?
            .into_iter()
            .map(|code| code.map(Race3::from_race40) == Some(race))
            .collect()
    } else {
        integer_values(df, columns::RACE_RECODE_3)?
            .into_iter()
            .map(|code| code == Some(race.code()))
            .collect()
    };
    finish(df, &keep, "race3")
}

/// Rows in the five-class recode group `race`.
pub fn filter_race5(df: &DataFrame, year: i64, race: Race5) -> Result<DataFrame> {
    check_year(year, Race5::YEARS)?;
    let keep: Vec<bool> = if year >= RACE40_BRIDGE_YEAR {
        debug!(year, "bridging race from Race_Recode_40");
        integer_values(df, columns::RACE_RECODE_40)?
            .into_iter()
            .map(|code| code.and_then(Race5::from_race40) == Some(race))
            .collect()
    } else {
        integer_values(df, columns::RACE_RECODE_5)?
            .into_iter()
            .map(|code| code == Some(race.code()))
            .collect()
    };
    finish(df, &keep, "race5")
}

/// Rows whose birth year (`year - Age_Number`) falls in `generation`.
pub fn filter_generation(df: &DataFrame, year: i64, generation: Generation) -> Result<DataFrame> {
    check_year(year, FIRST_YEAR..=LAST_YEAR)?;
    let keep: Vec<bool> = integer_values(df, columns::AGE_NUMBER)?
        .into_iter()
        .map(|age| {
            age.and_then(|age| year.checked_sub(age))
                .and_then(Generation::from_birth_year)
                == Some(generation)
        })
        .collect();
    finish(df, &keep, "generation")
}

pub fn filter_demographic(df: &DataFrame, year: i64, filter: DemographicFilter) -> Result<DataFrame> {
    match filter {
        DemographicFilter::Gender(gender) => filter_gender(df, gender),
        DemographicFilter::Race3(race) => filter_race3(df, year, race),
        DemographicFilter::Race5(race) => filter_race5(df, year, race),
        DemographicFilter::Generation(generation) => filter_generation(df, year, generation),
    }
}
