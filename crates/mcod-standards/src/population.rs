//! US 2000 standard population used for age adjustment.

/// One age band of the standard population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeGroup {
    /// Group code `0..=10`, as used in population tables.
    pub code: i64,
    pub label: &'static str,
    pub min_age: i64,
    pub max_age: i64,
    /// Proportion of the standard population in this band.
    pub weight: f64,
}

/// The eleven NCHS age bands and their US 2000 standard proportions.
#[rustfmt::skip]
pub const US_2000_STANDARD: [AgeGroup; 11] = [
    AgeGroup { code: 0, label: "Under 1", min_age: 0, max_age: 0, weight: 0.013818 },
    AgeGroup { code: 1, label: "1-4", min_age: 1, max_age: 4, weight: 0.055317 },
    AgeGroup { code: 2, label: "5-14", min_age: 5, max_age: 14, weight: 0.145565 },
    AgeGroup { code: 3, label: "15-24", min_age: 15, max_age: 24, weight: 0.138646 },
    AgeGroup { code: 4, label: "25-34", min_age: 25, max_age: 34, weight: 0.135573 },
    AgeGroup { code: 5, label: "35-44", min_age: 35, max_age: 44, weight: 0.162613 },
    AgeGroup { code: 6, label: "45-54", min_age: 45, max_age: 54, weight: 0.134834 },
    AgeGroup { code: 7, label: "55-64", min_age: 55, max_age: 64, weight: 0.087247 },
    AgeGroup { code: 8, label: "65-74", min_age: 65, max_age: 74, weight: 0.066037 },
    AgeGroup { code: 9, label: "75-84", min_age: 75, max_age: 84, weight: 0.044842 },
    AgeGroup { code: 10, label: "85+", min_age: 85, max_age: 199, weight: 0.015508 },
];

/// Age band containing `age`; ages outside 0–199 have none.
pub fn age_group_for(age: i64) -> Option<&'static AgeGroup> {
    US_2000_STANDARD
        .iter()
        .find(|group| (group.min_age..=group.max_age).contains(&age))
}

pub fn age_group_by_code(code: i64) -> Option<&'static AgeGroup> {
    US_2000_STANDARD.iter().find(|group| group.code == code)
}
