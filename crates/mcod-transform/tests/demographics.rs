//! Tests for the demographic filters.

use mcod_model::{ClassifyError, DemographicFilter, Gender, Generation, Race3, Race5, columns};
use mcod_transform::{filter_demographic, filter_gender, filter_generation, filter_race3, filter_race5};
use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn, NamedFrom, Series};

fn frame(cols: &[(&str, Vec<Option<&str>>)]) -> DataFrame {
    let height = cols.first().map_or(0, |(_, values)| values.len());
    let ids: Vec<String> = (0..height).map(|idx| format!("R{idx}")).collect();
    let mut out: Vec<Column> = vec![Series::new("Id".into(), ids).into_column()];
    for (name, values) in cols {
        out.push(Series::new((*name).into(), values.clone()).into_column());
    }
    DataFrame::new(out).expect("build frame")
}

fn ids(df: &DataFrame) -> Vec<String> {
    let column = df.column("Id").expect("Id column");
    (0..df.height())
        .map(|idx| match column.get(idx).unwrap_or(AnyValue::Null) {
            AnyValue::String(s) => s.to_string(),
            AnyValue::StringOwned(s) => s.to_string(),
            other => other.to_string(),
        })
        .collect()
}

#[test]
fn gender_filter_keeps_matching_rows_and_columns() {
    let df = frame(&[
        (columns::GENDER, vec![Some("M"), Some("F"), None, Some("M ")]),
        (columns::AGE_NUMBER, vec![Some("40"), Some("50"), Some("60"), Some("70")]),
    ]);
    let out = filter_gender(&df, Gender::Male).unwrap();
    assert_eq!(ids(&out), ["R0", "R3"]);
    assert_eq!(out.get_column_names(), df.get_column_names());

    let out = filter_gender(&df, Gender::Female).unwrap();
    assert_eq!(ids(&out), ["R1"]);
}

#[test]
fn gender_filter_matches_only_the_coded_letter() {
    let df = frame(&[(
        columns::GENDER,
        vec![Some("MALE"), Some("m"), Some("FEMALE"), Some("M")],
    )]);
    assert_eq!(ids(&filter_gender(&df, Gender::Male).unwrap()), ["R3"]);
    assert!(filter_gender(&df, Gender::Female).unwrap().is_empty());
}

#[test]
fn race3_uses_three_class_recode_before_2021() {
    let df = frame(&[(columns::RACE_RECODE_3, vec![Some("1"), Some("2"), Some("3"), None])]);
    assert_eq!(ids(&filter_race3(&df, 2020, Race3::White).unwrap()), ["R0"]);
    assert_eq!(ids(&filter_race3(&df, 1969, Race3::Other).unwrap()), ["R1"]);
    assert_eq!(ids(&filter_race3(&df, 1990, Race3::Black).unwrap()), ["R2"]);
}

#[test]
fn race3_bridges_race40_in_2021() {
    let df = frame(&[(
        columns::RACE_RECODE_40,
        vec![Some("1"), Some("2"), Some("3"), Some("17"), None],
    )]);
    assert_eq!(ids(&filter_race3(&df, 2021, Race3::White).unwrap()), ["R0"]);
    assert_eq!(ids(&filter_race3(&df, 2021, Race3::Black).unwrap()), ["R1"]);
    assert_eq!(ids(&filter_race3(&df, 2021, Race3::Other).unwrap()), ["R2", "R3"]);
}

#[test]
fn race3_in_2021_requires_race40() {
    let df = frame(&[(columns::RACE_RECODE_3, vec![Some("1")])]);
    let err = filter_race3(&df, 2021, Race3::White).unwrap_err();
    assert!(matches!(err, ClassifyError::MissingRequiredColumn { column } if column == "Race_Recode_40"));
}

#[test]
fn race5_bridges_race40_in_2021() {
    let df = frame(&[(
        columns::RACE_RECODE_40,
        vec![Some("1"), Some("2"), Some("3"), Some("4"), Some("10"), Some("11"), None],
    )]);
    assert_eq!(ids(&filter_race5(&df, 2021, Race5::AmericanIndian).unwrap()), ["R2"]);
    assert_eq!(
        ids(&filter_race5(&df, 2021, Race5::AsianPacificIslander).unwrap()),
        ["R3", "R4"]
    );
}

#[test]
fn race5_reads_recode_and_rejects_early_years() {
    let df = frame(&[(columns::RACE_RECODE_5, vec![Some("4"), Some("2")])]);
    assert_eq!(ids(&filter_race5(&df, 2010, Race5::Black).unwrap()), ["R1"]);

    let err = filter_race5(&df, 2002, Race5::Black).unwrap_err();
    assert!(matches!(
        err,
        ClassifyError::OutOfRangeYear {
            year: 2002,
            min: 2003,
            max: 2021
        }
    ));
}

#[test]
fn generation_boundaries_follow_birth_year() {
    // Birth years 2000 - age: 1945, 1946, 1980, 1981, 1927.
    let df = frame(&[(
        columns::AGE_NUMBER,
        vec![Some("55"), Some("54"), Some("20"), Some("19"), Some("73"), None],
    )]);
    assert_eq!(ids(&filter_generation(&df, 2000, Generation::Silent).unwrap()), ["R0"]);
    assert_eq!(
        ids(&filter_generation(&df, 2000, Generation::BabyBoomers).unwrap()),
        ["R1"]
    );
    assert_eq!(
        ids(&filter_generation(&df, 2000, Generation::GenerationX).unwrap()),
        ["R2"]
    );
    assert_eq!(
        ids(&filter_generation(&df, 2000, Generation::Millennials).unwrap()),
        ["R3"]
    );
}

#[test]
fn non_numeric_age_is_a_coercion_failure() {
    let df = frame(&[(columns::AGE_NUMBER, vec![Some("unknown")])]);
    let err = filter_generation(&df, 2000, Generation::Silent).unwrap_err();
    assert!(matches!(err, ClassifyError::TypeCoercionFailure { .. }));
}

#[test]
fn dispatch_matches_direct_filters() {
    let df = frame(&[
        (columns::GENDER, vec![Some("F"), Some("M")]),
        (columns::RACE_RECODE_3, vec![Some("3"), Some("1")]),
    ]);
    let out = filter_demographic(&df, 1995, DemographicFilter::Gender(Gender::Female)).unwrap();
    assert_eq!(ids(&out), ["R0"]);
    let out = filter_demographic(&df, 1995, DemographicFilter::Race3(Race3::White)).unwrap();
    assert_eq!(ids(&out), ["R1"]);

    let err = filter_demographic(&df, 1995, DemographicFilter::Generation(Generation::Silent))
        .unwrap_err();
    assert!(matches!(err, ClassifyError::MissingRequiredColumn { .. }));
}
