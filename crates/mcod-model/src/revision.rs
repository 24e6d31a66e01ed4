//! ICD revision eras.
//!
//! MCOD files were coded under three successive revisions of the
//! International Classification of Diseases. The active revision is a pure
//! function of the data year; boundary years belong to the later revision.
//!
//! | Revision | Years | Primary column |
//! |---|---|---|
//! | ICD-8 | 1969–1978 | `ICD8` |
//! | ICD-9 | 1979–1998 | `ICD9` |
//! | ICD-10 | 1999–2021 | `ICD10` |

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::columns;
use crate::error::{ClassifyError, Result};

/// First data year covered by the classification engine.
pub const FIRST_YEAR: i32 = 1969;
/// Last data year covered by the classification engine.
pub const LAST_YEAR: i32 = 2021;

/// An ICD revision era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Revision {
    #[serde(rename = "ICD8")]
    Icd8,
    #[serde(rename = "ICD9")]
    Icd9,
    #[serde(rename = "ICD10")]
    Icd10,
}

impl Revision {
    /// All revisions in chronological order.
    pub const ALL: [Revision; 3] = [Revision::Icd8, Revision::Icd9, Revision::Icd10];

    /// Resolves the revision in force for a data year.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRangeYear` for years before 1969 or after 2021.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcod_model::Revision;
    ///
    /// assert_eq!(Revision::from_year(1978).unwrap(), Revision::Icd8);
    /// assert_eq!(Revision::from_year(1979).unwrap(), Revision::Icd9);
    /// assert_eq!(Revision::from_year(1999).unwrap(), Revision::Icd10);
    /// assert!(Revision::from_year(1968).is_err());
    /// ```
    pub fn from_year(year: i32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|revision| revision.years().contains(&year))
            .ok_or(ClassifyError::OutOfRangeYear {
                year: i64::from(year),
                min: FIRST_YEAR,
                max: LAST_YEAR,
            })
    }

    /// Data years coded under this revision.
    pub fn years(self) -> RangeInclusive<i32> {
        match self {
            Revision::Icd8 => FIRST_YEAR..=1978,
            Revision::Icd9 => 1979..=1998,
            Revision::Icd10 => 1999..=LAST_YEAR,
        }
    }

    /// Name of the column holding the primary (underlying) cause code.
    pub fn primary_column(self) -> &'static str {
        match self {
            Revision::Icd8 => columns::ICD8,
            Revision::Icd9 => columns::ICD9,
            Revision::Icd10 => columns::ICD10,
        }
    }

    /// Name of the 34-cause recode column, carried only by pre-1999 files.
    pub fn cause_list_column(self) -> Option<&'static str> {
        match self {
            Revision::Icd8 | Revision::Icd9 => Some(columns::ICD34),
            Revision::Icd10 => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Revision::Icd8 => "ICD8",
            Revision::Icd9 => "ICD9",
            Revision::Icd10 => "ICD10",
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Revision {
    type Err = String;

    /// Accepts `ICD8`, `ICD-8`, `icd 8` and similar spellings.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|ch| ch.to_ascii_uppercase())
            .collect();

        match normalized.as_str() {
            "ICD8" => Ok(Revision::Icd8),
            "ICD9" => Ok(Revision::Icd9),
            "ICD10" => Ok(Revision::Icd10),
            _ => Err(format!("Unknown ICD revision: {s}")),
        }
    }
}
