//! Tests for the suicide and other-cause classifiers.

use mcod_classify::{OtherCauseClassifier, SuicideClassifier, is_prefix_or_substring_of};
use mcod_model::{ClassifyError, ClassifyOptions, OtherCause, SuicideMethod, columns};
use mcod_standards::CauseCodeTable;
use polars::prelude::{AnyValue, Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};
use proptest::prelude::*;

fn table() -> &'static CauseCodeTable {
    CauseCodeTable::builtin().expect("embedded asset parses")
}

fn suicide() -> SuicideClassifier<'static> {
    SuicideClassifier::new(table(), ClassifyOptions::default())
}

fn other() -> OtherCauseClassifier<'static> {
    OtherCauseClassifier::new(table())
}

/// Batch with an `Id` column, the given code columns, and every record axis
/// not listed filled with nulls.
fn batch(codes: &[(&str, Vec<Option<&str>>)]) -> DataFrame {
    let height = codes.first().map_or(0, |(_, values)| values.len());
    let ids: Vec<String> = (0..height).map(|idx| format!("R{idx}")).collect();
    let mut cols: Vec<Column> = vec![Series::new("Id".into(), ids).into_column()];
    for (name, values) in codes {
        cols.push(Series::new((*name).into(), values.clone()).into_column());
    }
    for name in columns::CONTRIBUTING {
        if codes.iter().all(|(listed, _)| *listed != name) {
            cols.push(Series::full_null(name.into(), height, &DataType::String).into_column());
        }
    }
    DataFrame::new(cols).expect("build batch")
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
fn poisoning_suicide_is_detected_and_classified() {
    let df = batch(&[(columns::ICD10, vec![Some("X64 ")])]);

    assert_eq!(suicide().detect(&df, 2000).unwrap().height(), 1);
    assert_eq!(
        suicide()
            .by_method(&df, 2000, SuicideMethod::Poisoning)
            .unwrap()
            .height(),
        1
    );
    assert_eq!(
        suicide()
            .by_method(&df, 2000, SuicideMethod::FirearmsExplosives)
            .unwrap()
            .height(),
        0
    );
}

#[test]
fn method_scan_can_exclude_the_primary_field() {
    let df = batch(&[
        (columns::ICD10, vec![Some("X64 "), Some("X64 ")]),
        ("RA1", vec![None, Some("X64")]),
    ]);
    let axes_only = SuicideClassifier::new(
        table(),
        ClassifyOptions::default().with_primary_in_method_scan(false),
    );
    let out = axes_only
        .by_method(&df, 2000, SuicideMethod::Poisoning)
        .unwrap();
    assert_eq!(ids(&out), vec!["R1"]);
}

#[test]
fn sequela_code_is_other_method() {
    let df = batch(&[
        (columns::ICD10, vec![Some("Y870")]),
        ("RA1", vec![Some("Y870")]),
    ]);

    assert_eq!(suicide().detect(&df, 2000).unwrap().height(), 1);
    assert_eq!(
        suicide()
            .by_method(&df, 2000, SuicideMethod::Other)
            .unwrap()
            .height(),
        1
    );
    assert_eq!(
        suicide()
            .by_method(&df, 2000, SuicideMethod::Poisoning)
            .unwrap()
            .height(),
        0
    );
}

#[test]
fn assault_is_not_suicide() {
    let df = batch(&[
        (columns::ICD10, vec![Some("X88 ")]),
        ("RA1", vec![Some("X88 ")]),
    ]);
    assert_eq!(suicide().detect(&df, 2000).unwrap().height(), 0);
    assert_eq!(
        other()
            .classify(&df, 2000, OtherCause::Homicide)
            .unwrap()
            .height(),
        1
    );
}

#[test]
fn overdose_needs_a_substance_on_a_record_axis() {
    let df = batch(&[
        (
            columns::ICD10,
            vec![Some("X42 "), Some("X42 "), Some("X42 "), Some("I21 ")],
        ),
        ("RA1", vec![Some("X42 "), Some("X42 "), None, Some("T402")]),
        ("RA3", vec![Some("T402 "), None, Some("T509"), None]),
    ]);

    let out = other().classify(&df, 2000, OtherCause::Overdose).unwrap();
    assert_eq!(ids(&out), vec!["R0", "R2"]);
}

#[test]
fn overdose_substance_scan_runs_on_older_revisions() {
    let df = batch(&[
        (columns::ICD9, vec![Some("8500"), Some("8500")]),
        ("RA2", vec![Some("T402"), Some("8500")]),
    ]);
    let out = other().classify(&df, 1990, OtherCause::Overdose).unwrap();
    assert_eq!(ids(&out), vec!["R0"]);
}

#[test]
fn heart_attack_and_mva_match_the_primary_field_only() {
    let df = batch(&[
        (columns::ICD10, vec![Some("I21 "), Some("I210"), Some("V892")]),
        ("RA1", vec![None, Some("I21 "), None]),
    ]);
    let heart = other().classify(&df, 2010, OtherCause::HeartAttack).unwrap();
    assert_eq!(ids(&heart), vec!["R0"]);
    let mva = other()
        .classify(&df, 2010, OtherCause::MotorVehicleAccident)
        .unwrap();
    assert_eq!(ids(&mva), vec!["R2"]);
}

#[test]
fn record_axes_are_optional_without_substance_scan() {
    let df = DataFrame::new(vec![
        Series::new(columns::ICD9.into(), &[Some(812i64), Some(410), None]).into_column(),
    ])
    .unwrap();
    let out = other()
        .classify(&df, 1985, OtherCause::MotorVehicleAccident)
        .unwrap();
    assert_eq!(out.height(), 1);

    let err = other()
        .classify(&df, 1985, OtherCause::Overdose)
        .unwrap_err();
    assert!(matches!(
        err,
        ClassifyError::MissingRequiredColumn { ref column } if column == "RA1"
    ));
}

#[test]
fn pre_icd10_detection_reads_the_cause_list_recode() {
    let df = DataFrame::new(vec![
        Series::new("Id".into(), &["R0", "R1", "R2"]).into_column(),
        Series::new(columns::ICD9.into(), &[Some(9550i64), Some(9550), Some(350)]).into_column(),
        Series::new(columns::ICD34.into(), &[Some(350i64), None, Some(200)]).into_column(),
    ])
    .unwrap();

    let out = suicide().detect(&df, 1990).unwrap();
    assert_eq!(ids(&out), vec!["R0"]);
}

#[test]
fn pre_icd10_detection_requires_the_cause_list_recode() {
    // 350 is a nerve disorder as an ICD-8/ICD-9 diagnosis, not a suicide.
    let icd9 = DataFrame::new(vec![
        Series::new(columns::ICD9.into(), &["350", "9550"]).into_column(),
    ])
    .unwrap();
    let icd8 = DataFrame::new(vec![
        Series::new(columns::ICD8.into(), &["350", "955"]).into_column(),
    ])
    .unwrap();

    for (df, year) in [(&icd9, 1990), (&icd8, 1970)] {
        assert!(matches!(
            suicide().detect(df, year),
            Err(ClassifyError::MissingRequiredColumn { ref column }) if column == "ICD34"
        ));
    }
}

#[test]
fn boundary_years_select_the_revision_catalogs() {
    let recode = DataFrame::new(vec![
        Series::new(columns::ICD34.into(), &["350"]).into_column(),
    ])
    .unwrap();
    assert_eq!(suicide().detect(&recode, 1978).unwrap().height(), 1);
    assert_eq!(suicide().detect(&recode, 1998).unwrap().height(), 1);
    assert!(matches!(
        suicide().detect(&recode, 1999),
        Err(ClassifyError::MissingRequiredColumn { ref column }) if column == "ICD10"
    ));

    // 9551 lies inside the ICD-9 firearm codes only; X72 only in ICD-10.
    let df = batch(&[
        (columns::ICD8, vec![None, None]),
        (columns::ICD9, vec![None, None]),
        (columns::ICD10, vec![None, None]),
        ("RA1", vec![Some("9551"), Some("X72 ")]),
    ]);
    let firearms = |year| {
        ids(&suicide()
            .by_method(&df, year, SuicideMethod::FirearmsExplosives)
            .unwrap())
    };
    assert!(firearms(1978).is_empty());
    assert_eq!(firearms(1979), vec!["R0"]);
    assert_eq!(firearms(1998), vec!["R0"]);
    assert_eq!(firearms(1999), vec!["R1"]);
}

#[test]
fn numeric_codes_are_normalized_before_matching() {
    let df = DataFrame::new(vec![
        Series::new(columns::ICD9.into(), &[Some(9550.0f64), Some(9530.0), None]).into_column(),
    ])
    .unwrap();
    let mut cols = df.get_columns().to_vec();
    for name in columns::CONTRIBUTING {
        cols.push(Series::full_null(name.into(), 3, &DataType::Float64).into_column());
    }
    let df = DataFrame::new(cols).unwrap();

    let firearms = suicide()
        .by_method(&df, 1990, SuicideMethod::FirearmsExplosives)
        .unwrap();
    assert_eq!(firearms.height(), 1);
    let hanging = suicide()
        .by_method(&df, 1990, SuicideMethod::Hanging)
        .unwrap();
    assert_eq!(hanging.height(), 1);
}

#[test]
fn padded_axis_value_does_not_match_shorter_code() {
    // An axis value wider than the catalog code never fits inside it.
    let df = batch(&[
        (columns::ICD10, vec![Some("I21 "), Some("I21 ")]),
        ("RA1", vec![Some("X72 "), Some("X72")]),
    ]);
    let out = suicide()
        .by_method(&df, 2015, SuicideMethod::FirearmsExplosives)
        .unwrap();
    assert_eq!(out.height(), 2);

    let wider = batch(&[
        (columns::ICD10, vec![Some("I21 ")]),
        ("RA1", vec![Some("X72  ")]),
    ]);
    assert_eq!(
        suicide()
            .by_method(&wider, 2015, SuicideMethod::FirearmsExplosives)
            .unwrap()
            .height(),
        0
    );
}

#[test]
fn all_null_rows_are_negative_not_errors() {
    let df = batch(&[(columns::ICD10, vec![None, Some("   ")])]);
    assert_eq!(suicide().detect(&df, 2005).unwrap().height(), 0);
    for method in SuicideMethod::ALL {
        assert_eq!(suicide().by_method(&df, 2005, method).unwrap().height(), 0);
    }
    assert_eq!(
        other()
            .classify(&df, 2005, OtherCause::Overdose)
            .unwrap()
            .height(),
        0
    );
}

#[test]
fn classification_is_idempotent_and_keeps_columns() {
    let df = batch(&[
        (columns::ICD10, vec![Some("X64 "), Some("X88 "), Some("X70 "), None]),
        ("RA1", vec![Some("X64 "), None, Some("X70 "), None]),
    ]);
    let once = suicide().detect(&df, 2000).unwrap();
    let twice = suicide().detect(&once, 2000).unwrap();
    assert!(once.equals_missing(&twice));
    assert_eq!(once.get_column_names(), df.get_column_names());
    assert_eq!(ids(&once), vec!["R0", "R2"]);

    let hanging = suicide()
        .by_method(&once, 2000, SuicideMethod::Hanging)
        .unwrap();
    let again = suicide()
        .by_method(&hanging, 2000, SuicideMethod::Hanging)
        .unwrap();
    assert!(hanging.equals_missing(&again));
}

#[test]
fn method_counts_report_overlapping_fragments() {
    let df = batch(&[
        (columns::ICD10, vec![Some("X72 "), Some("X61 "), Some("X70 ")]),
        ("RA1", vec![None, None, Some("X7")]),
    ]);
    let counts = suicide().method_counts(&df, 2000).unwrap();
    assert_eq!(counts.total, 3);
    assert_eq!(counts.get(SuicideMethod::FirearmsExplosives), 2);
    assert_eq!(counts.get(SuicideMethod::Poisoning), 1);
    assert_eq!(counts.get(SuicideMethod::Hanging), 1);
    assert_eq!(counts.get(SuicideMethod::Other), 1);
    assert_eq!(counts.iter().count(), 4);
}

#[test]
fn invalid_inputs_fail_before_classifying() {
    let df = batch(&[(columns::ICD10, vec![Some("X64 ")])]);

    assert!(matches!(
        suicide().by_method_id(&df, 2000, 7),
        Err(ClassifyError::UnknownCauseOrMethod { .. })
    ));
    assert!(matches!(
        other().classify_id(&df, 2000, 4),
        Err(ClassifyError::UnknownCauseOrMethod { .. })
    ));
    assert!(matches!(
        suicide().detect(&df, 2022),
        Err(ClassifyError::OutOfRangeYear { year: 2022, .. })
    ));
    assert!(matches!(
        suicide().detect(&df, 1968),
        Err(ClassifyError::OutOfRangeYear { .. })
    ));

    let no_axes = DataFrame::new(vec![
        Series::new(columns::ICD10.into(), &["X64 "]).into_column(),
    ])
    .unwrap();
    assert!(matches!(
        suicide().by_method(&no_axes, 2000, SuicideMethod::Poisoning),
        Err(ClassifyError::MissingRequiredColumn { .. })
    ));
}

#[test]
fn non_code_columns_are_type_failures() {
    let df = DataFrame::new(vec![
        Series::new(columns::ICD10.into(), &[true, false]).into_column(),
    ])
    .unwrap();
    assert!(matches!(
        suicide().detect(&df, 2000),
        Err(ClassifyError::TypeCoercionFailure { .. })
    ));
}

proptest! {
    #[test]
    fn padded_codes_contain_their_stem(stem in "[A-Z][0-9]{2,3}") {
        let padded = format!("{stem} ");
        prop_assert!(is_prefix_or_substring_of(&stem, &padded));
        prop_assert!(!is_prefix_or_substring_of(&padded, &stem));
    }

    #[test]
    fn classified_rows_are_a_subset(codes in prop::collection::vec(
        prop::sample::select(vec!["X60 ", "X64 ", "X70 ", "X72 ", "X85 ", "Y870", "I21 ", ""]),
        0..24,
    )) {
        let values: Vec<Option<&str>> = codes.iter().map(|code| Some(*code)).collect();
        let df = batch(&[(columns::ICD10, values.clone()), ("RA1", values)]);
        let detected = suicide().detect(&df, 2003).unwrap();
        prop_assert!(detected.height() <= df.height());
        for method in SuicideMethod::ALL {
            let by_method = suicide().by_method(&detected, 2003, method).unwrap();
            prop_assert!(by_method.height() <= detected.height());
        }
    }
}
