//! Demographic and geographic classes used to stratify MCOD batches.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Value stored in the `Gender` column.
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl FromStr for Gender {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            _ => Err(ClassifyError::unknown("gender", s)),
        }
    }
}

/// Three-class race recode (`Race_Recode_3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race3 {
    White,
    Other,
    Black,
}

impl Race3 {
    pub const ALL: [Race3; 3] = [Race3::White, Race3::Other, Race3::Black];

    pub fn code(self) -> i64 {
        match self {
            Race3::White => 1,
            Race3::Other => 2,
            Race3::Black => 3,
        }
    }

    /// Bridges a 2021 `Race_Recode_40` value; multiracial and every other
    /// group fall into `Other`.
    pub fn from_race40(code: i64) -> Self {
        match code {
            1 => Race3::White,
            2 => Race3::Black,
            _ => Race3::Other,
        }
    }
}

impl TryFrom<u8> for Race3 {
    type Error = ClassifyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|race| race.code() == i64::from(value))
            .ok_or_else(|| ClassifyError::unknown("race (3 classes)", value))
    }
}

/// Race groups of the `Race_Recode_5` recode (2003 onwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race5 {
    White,
    Black,
    AmericanIndian,
    AsianPacificIslander,
}

impl Race5 {
    pub const ALL: [Race5; 4] = [
        Race5::White,
        Race5::Black,
        Race5::AmericanIndian,
        Race5::AsianPacificIslander,
    ];

    /// Years in which the recode (or its 2021 bridge) is available.
    pub const YEARS: RangeInclusive<i32> = 2003..=2021;

    pub fn code(self) -> i64 {
        match self {
            Race5::White => 1,
            Race5::Black => 2,
            Race5::AmericanIndian => 3,
            Race5::AsianPacificIslander => 4,
        }
    }

    /// Bridges a 2021 `Race_Recode_40` value. Multiracial groups have no
    /// counterpart and yield `None`.
    pub fn from_race40(code: i64) -> Option<Self> {
        match code {
            1 => Some(Race5::White),
            2 => Some(Race5::Black),
            3 => Some(Race5::AmericanIndian),
            4..=10 => Some(Race5::AsianPacificIslander),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Race5 {
    type Error = ClassifyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|race| race.code() == i64::from(value))
            .ok_or_else(|| ClassifyError::unknown("race (5-class recode)", value))
    }
}

/// Birth cohort, per the Pew Research generation boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Generation {
    Silent,
    BabyBoomers,
    GenerationX,
    Millennials,
    GenerationZ,
}

impl Generation {
    pub const ALL: [Generation; 5] = [
        Generation::Silent,
        Generation::BabyBoomers,
        Generation::GenerationX,
        Generation::Millennials,
        Generation::GenerationZ,
    ];

    pub fn index(self) -> u8 {
        match self {
            Generation::Silent => 0,
            Generation::BabyBoomers => 1,
            Generation::GenerationX => 2,
            Generation::Millennials => 3,
            Generation::GenerationZ => 4,
        }
    }

    pub fn birth_years(self) -> RangeInclusive<i64> {
        match self {
            Generation::Silent => 1928..=1945,
            Generation::BabyBoomers => 1946..=1964,
            Generation::GenerationX => 1965..=1980,
            Generation::Millennials => 1981..=1996,
            Generation::GenerationZ => 1997..=2012,
        }
    }

    /// Cohort of a birth year; years outside 1928–2012 are uncategorized.
    pub fn from_birth_year(year: i64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|generation| generation.birth_years().contains(&year))
    }
}

impl TryFrom<u8> for Generation {
    type Error = ClassifyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|generation| generation.index() == value)
            .ok_or_else(|| ClassifyError::unknown("generation", value))
    }
}

/// Rurality class derived from a county's Rural-Urban Continuum Code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urbanicity {
    /// RUCC 0–3.
    Urban,
    /// RUCC 4–7.
    Metro,
    /// RUCC 8–9.
    Rural,
}

impl Urbanicity {
    pub const ALL: [Urbanicity; 3] = [Urbanicity::Urban, Urbanicity::Metro, Urbanicity::Rural];

    pub fn index(self) -> u8 {
        match self {
            Urbanicity::Urban => 0,
            Urbanicity::Metro => 1,
            Urbanicity::Rural => 2,
        }
    }

    pub fn from_rucc(rucc: i64) -> Option<Self> {
        match rucc {
            0..=3 => Some(Urbanicity::Urban),
            4..=7 => Some(Urbanicity::Metro),
            8 | 9 => Some(Urbanicity::Rural),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Urbanicity {
    type Error = ClassifyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|class| class.index() == value)
            .ok_or_else(|| ClassifyError::unknown("urbanicity", value))
    }
}

impl fmt::Display for Urbanicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Urbanicity::Urban => "urban",
            Urbanicity::Metro => "metro",
            Urbanicity::Rural => "rural",
        };
        write!(f, "{label}")
    }
}

/// A single demographic restriction applied to a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemographicFilter {
    Gender(Gender),
    Race3(Race3),
    Race5(Race5),
    Generation(Generation),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_boundaries() {
        assert_eq!(Generation::from_birth_year(1927), None);
        assert_eq!(Generation::from_birth_year(1928), Some(Generation::Silent));
        assert_eq!(Generation::from_birth_year(1945), Some(Generation::Silent));
        assert_eq!(Generation::from_birth_year(1946), Some(Generation::BabyBoomers));
        assert_eq!(Generation::from_birth_year(1980), Some(Generation::GenerationX));
        assert_eq!(Generation::from_birth_year(1981), Some(Generation::Millennials));
        assert_eq!(Generation::from_birth_year(2012), Some(Generation::GenerationZ));
        assert_eq!(Generation::from_birth_year(2013), None);
    }

    #[test]
    fn race40_bridges() {
        assert_eq!(Race3::from_race40(1), Race3::White);
        assert_eq!(Race3::from_race40(2), Race3::Black);
        assert_eq!(Race3::from_race40(17), Race3::Other);
        assert_eq!(Race5::from_race40(3), Some(Race5::AmericanIndian));
        assert_eq!(Race5::from_race40(7), Some(Race5::AsianPacificIslander));
        assert_eq!(Race5::from_race40(11), None);
    }

    #[test]
    fn rucc_classes() {
        assert_eq!(Urbanicity::from_rucc(0), Some(Urbanicity::Urban));
        assert_eq!(Urbanicity::from_rucc(3), Some(Urbanicity::Urban));
        assert_eq!(Urbanicity::from_rucc(4), Some(Urbanicity::Metro));
        assert_eq!(Urbanicity::from_rucc(7), Some(Urbanicity::Metro));
        assert_eq!(Urbanicity::from_rucc(9), Some(Urbanicity::Rural));
        assert_eq!(Urbanicity::from_rucc(10), None);
    }

    #[test]
    fn integer_identifiers_are_checked() {
        assert_eq!(Race3::try_from(3).unwrap(), Race3::Black);
        assert!(Race3::try_from(0).is_err());
        assert!(Race5::try_from(5).is_err());
        assert_eq!(Generation::try_from(4).unwrap(), Generation::GenerationZ);
        assert!(Urbanicity::try_from(3).is_err());
        assert_eq!("F".parse::<Gender>().unwrap(), Gender::Female);
        assert!("f".parse::<Gender>().is_err());
        assert!("MALE".parse::<Gender>().is_err());
    }
}
