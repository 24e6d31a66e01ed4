//! Age-adjusted rates against the US 2000 standard population.

use std::collections::BTreeMap;

use mcod_model::{ClassifyError, Result};
use mcod_standards::population::age_group_by_code;
use mcod_standards::{AgeGroup, age_group_for};
use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::{debug, warn};

use crate::data_utils::{float_values, integer_values};

/// Column names read by [`standardize`].
#[derive(Debug, Clone)]
pub struct StandardizationColumns {
    /// Age in years, one row per death.
    pub age: String,
    /// Age group code (0–10) in the population table.
    pub age_group: String,
    pub population: String,
}

impl StandardizationColumns {
    pub fn new(age: impl Into<String>) -> Self {
        Self {
            age: age.into(),
            age_group: "Age_Group".to_string(),
            population: "Population".to_string(),
        }
    }

    pub fn with_age_group(mut self, column: impl Into<String>) -> Self {
        self.age_group = column.into();
        self
    }

    pub fn with_population(mut self, column: impl Into<String>) -> Self {
        self.population = column.into();
        self
    }
}

/// Rates of one age group, per 100,000 persons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRate {
    pub code: i64,
    pub label: &'static str,
    pub deaths: usize,
    pub population: f64,
    pub raw_rate: f64,
    pub weight: f64,
    pub standardized_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardizedRates {
    pub raw_rate: f64,
    pub standardized_rate: f64,
    pub groups: Vec<GroupRate>,
}

fn population_by_group(
    population: &DataFrame,
    columns: &StandardizationColumns,
) -> Result<BTreeMap<i64, f64>> {
    let codes = integer_values(population, &columns.age_group)?;
    let counts = float_values(population, &columns.population)?;

    let mut by_group = BTreeMap::new();
    for (code, count) in codes.into_iter().zip(counts) {
        let Some(code) = code else { continue };
        if age_group_by_code(code).is_none() {
            return Err(ClassifyError::invalid_value(
                columns.age_group.as_str(),
                format!("unknown age group {code}"),
            ));
        }
        let count = count.filter(|count| *count > 0.0).ok_or_else(|| {
            ClassifyError::invalid_value(
                columns.population.as_str(),
                format!("age group {code} needs a positive population"),
            )
        })?;
        if by_group.insert(code, count).is_some() {
            return Err(ClassifyError::invalid_value(
                columns.age_group.as_str(),
                format!("age group {code} appears more than once"),
            ));
        }
    }
    Ok(by_group)
}

/// Crude and age-standardized death rates per 100,000 persons.
///
/// `deaths` has one row per death; ages outside 0–199 or missing are not
/// counted. Groups with deaths but no population row are skipped.
pub fn standardize(
    deaths: &DataFrame,
    population: &DataFrame,
    columns: &StandardizationColumns,
) -> Result<StandardizedRates> {
    let ages = integer_values(deaths, &columns.age)?;
    let population = population_by_group(population, columns)?;

    let mut deaths_by_group: BTreeMap<i64, (&'static AgeGroup, usize)> = BTreeMap::new();
    let mut ungrouped = 0usize;
    for age in ages {
        match age.and_then(age_group_for) {
            Some(group) => deaths_by_group.entry(group.code).or_insert((group, 0)).1 += 1,
            None => ungrouped += 1,
        }
    }
    if ungrouped > 0 {
        debug!(ungrouped, "ages without an age group ignored");
    }

    let mut groups = Vec::with_capacity(deaths_by_group.len());
    for (code, (group, count)) in deaths_by_group {
        let Some(persons) = population.get(&code).copied() else {
            warn!(group = group.label, deaths = count, "no population for age group, skipped");
            continue;
        };
        let raw_rate = count as f64 / (persons / 100_000.0);
        groups.push(GroupRate {
            code,
            label: group.label,
            deaths: count,
            population: persons,
            raw_rate,
            weight: group.weight,
            standardized_rate: raw_rate * group.weight,
        });
    }

    let raw_rate: f64 = groups.iter().map(|group| group.raw_rate).sum();
    let standardized_rate: f64 = groups.iter().map(|group| group.standardized_rate).sum();
    debug!(raw_rate, standardized_rate, groups = groups.len(), "standardized rates");
    Ok(StandardizedRates {
        raw_rate,
        standardized_rate,
        groups,
    })
}
