//! Rural-Urban Continuum Code lookup tables.
//!
//! MCOD files coded residence counties with the Geographic Code Manual (GCM)
//! until 1981 and with FIPS codes from 1982 onwards. Each period maps to one
//! USDA table:
//!
//! | Data years | File | Key |
//! |---|---|---|
//! | 1974–1981 | `RUCC_1974_1982_GCM.csv` | state abbreviation + GCM county |
//! | 1982–1992 | `RUCC_1983_1992.csv` | 5-digit FIPS |
//! | 1993–2002 | `RUCC_1993_2002.csv` | 5-digit FIPS |
//! | 2003–2012 | `RUCC_2003_2012.csv` | 5-digit FIPS |
//! | 2013–2021 | `RUCC_2013_2022.csv` | 5-digit FIPS |

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::ops::RangeInclusive;
use std::path::Path;

use mcod_common::parse_i64;
use tracing::{debug, warn};

use crate::error::StandardsError;

/// Two-letter state abbreviations and their FIPS state codes.
#[rustfmt::skip]
pub const STATE_FIPS: [(&str, &str); 51] = [
    ("AK", "02"), ("AL", "01"), ("AR", "05"), ("AZ", "04"), ("CA", "06"), ("CO", "08"),
    ("CT", "09"), ("DC", "11"), ("DE", "10"), ("FL", "12"), ("GA", "13"), ("HI", "15"),
    ("IA", "19"), ("ID", "16"), ("IL", "17"), ("IN", "18"), ("KS", "20"), ("KY", "21"),
    ("LA", "22"), ("MA", "25"), ("MD", "24"), ("ME", "23"), ("MI", "26"), ("MN", "27"),
    ("MO", "29"), ("MS", "28"), ("MT", "30"), ("NC", "37"), ("ND", "38"), ("NE", "31"),
    ("NH", "33"), ("NJ", "34"), ("NM", "35"), ("NV", "32"), ("NY", "36"), ("OH", "39"),
    ("OK", "40"), ("OR", "41"), ("PA", "42"), ("RI", "44"), ("SC", "45"), ("SD", "46"),
    ("TN", "47"), ("TX", "48"), ("UT", "49"), ("VA", "51"), ("VT", "50"), ("WA", "53"),
    ("WI", "55"), ("WV", "54"), ("WY", "56"),
];

/// FIPS state code for a two-letter abbreviation.
pub fn state_fips(abbreviation: &str) -> Option<&'static str> {
    let wanted = abbreviation.trim();
    STATE_FIPS
        .iter()
        .find(|(state, _)| state.eq_ignore_ascii_case(wanted))
        .map(|(_, fips)| *fips)
}

/// County codes used on MCOD records but absent from the USDA tables.
const SUPPLEMENTARY_FIPS: [(&str, RangeInclusive<i32>, i64); 6] = [
    ("02010", 1983..=1993, 7),
    ("02140", 1982..=1993, 9),
    ("02231", 1982..=1982, 7),
    ("02232", 1994..=2002, 9),
    ("02280", 2013..=2013, 7),
    ("51780", 1982..=1982, 6),
];

/// RUCC of a supplementary FIPS code in force for `year`.
pub fn supplementary_rucc(fips: &str, year: i32) -> Option<i64> {
    SUPPLEMENTARY_FIPS
        .iter()
        .find(|(code, years, _)| *code == fips && years.contains(&year))
        .map(|(_, _, rucc)| *rucc)
}

/// Period covered by one RUCC table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuccPeriod {
    Gcm1974,
    Fips1983,
    Fips1993,
    Fips2003,
    Fips2013,
}

impl RuccPeriod {
    pub const ALL: [RuccPeriod; 5] = [
        RuccPeriod::Gcm1974,
        RuccPeriod::Fips1983,
        RuccPeriod::Fips1993,
        RuccPeriod::Fips2003,
        RuccPeriod::Fips2013,
    ];

    /// Data years with any RUCC coverage.
    pub const YEARS: RangeInclusive<i32> = 1974..=2021;

    /// Data years resolved through this table.
    pub fn years(self) -> RangeInclusive<i32> {
        match self {
            RuccPeriod::Gcm1974 => 1974..=1981,
            RuccPeriod::Fips1983 => 1982..=1992,
            RuccPeriod::Fips1993 => 1993..=2002,
            RuccPeriod::Fips2003 => 2003..=2012,
            RuccPeriod::Fips2013 => 2013..=2021,
        }
    }

    pub fn for_year(year: i32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|period| period.years().contains(&year))
    }

    pub fn file_name(self) -> &'static str {
        match self {
            RuccPeriod::Gcm1974 => "RUCC_1974_1982_GCM.csv",
            RuccPeriod::Fips1983 => "RUCC_1983_1992.csv",
            RuccPeriod::Fips1993 => "RUCC_1993_2002.csv",
            RuccPeriod::Fips2003 => "RUCC_2003_2012.csv",
            RuccPeriod::Fips2013 => "RUCC_2013_2022.csv",
        }
    }

    /// True when counties are GCM-coded rather than FIPS-coded.
    pub fn uses_gcm(self) -> bool {
        matches!(self, RuccPeriod::Gcm1974)
    }
}

impl fmt::Display for RuccPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let years = self.years();
        write!(f, "{}-{}", years.start(), years.end())
    }
}

/// County key to RUCC mapping for one period.
#[derive(Debug, Clone)]
pub struct RuccTable {
    period: RuccPeriod,
    codes: HashMap<String, i64>,
}

impl RuccTable {
    pub fn new(period: RuccPeriod, codes: HashMap<String, i64>) -> Self {
        Self { period, codes }
    }

    pub fn period(&self) -> RuccPeriod {
        self.period
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.codes.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Lookup key for a GCM-coded county: state abbreviation followed by the
/// county number without padding (`AK` + `6` → `AK6`).
pub fn gcm_key(state: &str, county: i64) -> String {
    format!("{}{county}", state.trim())
}

/// Lookup key for a FIPS-coded county (`01` + `1` → `01001`).
pub fn fips_key(state_fips: &str, county: i64) -> String {
    format!("{state_fips}{county:03}")
}

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim_matches('\u{feff}').trim() == name)
}

fn get_string(row: &csv::StringRecord, idx: usize) -> Option<&str> {
    row.get(idx).map(str::trim).filter(|s| !s.is_empty())
}

fn required_column(
    path: &Path,
    headers: &csv::StringRecord,
    column: &str,
) -> Result<usize, StandardsError> {
    header_index(headers, column).ok_or_else(|| StandardsError::MissingColumn {
        path: path.to_path_buf(),
        column: column.to_string(),
    })
}

/// Loads the GCM table (`State_Code,GCM,RUCC`). Rows without a GCM code or
/// RUCC are skipped.
pub fn load_gcm_table(path: &Path) -> Result<RuccTable, StandardsError> {
    let bytes = std::fs::read(path).map_err(|e| StandardsError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());
    let headers = reader
        .headers()
        .map_err(|e| StandardsError::csv(path, &e))?
        .clone();
    let idx_state = required_column(path, &headers, "State_Code")?;
    let idx_gcm = required_column(path, &headers, "GCM")?;
    let idx_rucc = required_column(path, &headers, "RUCC")?;

    let mut codes = HashMap::new();
    for row in reader.records() {
        let row = row.map_err(|e| StandardsError::csv(path, &e))?;
        let (Some(state), Some(gcm), Some(rucc)) = (
            get_string(&row, idx_state),
            get_string(&row, idx_gcm).and_then(parse_i64),
            get_string(&row, idx_rucc).and_then(parse_i64),
        ) else {
            continue;
        };
        codes.insert(gcm_key(state, gcm), rucc);
    }

    debug!(path = %path.display(), counties = codes.len(), "loaded GCM RUCC table");
    Ok(RuccTable::new(RuccPeriod::Gcm1974, codes))
}

/// Loads a FIPS table (`FIPS,RUCC`); FIPS codes are left-padded to five digits.
pub fn load_fips_table(path: &Path, period: RuccPeriod) -> Result<RuccTable, StandardsError> {
    let bytes = std::fs::read(path).map_err(|e| StandardsError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());
    let headers = reader
        .headers()
        .map_err(|e| StandardsError::csv(path, &e))?
        .clone();
    let idx_fips = required_column(path, &headers, "FIPS")?;
    let idx_rucc = required_column(path, &headers, "RUCC")?;

    let mut codes = HashMap::new();
    for row in reader.records() {
        let row = row.map_err(|e| StandardsError::csv(path, &e))?;
        let (Some(fips), Some(rucc)) = (
            get_string(&row, idx_fips).and_then(parse_i64),
            get_string(&row, idx_rucc).and_then(parse_i64),
        ) else {
            continue;
        };
        codes.insert(format!("{fips:05}"), rucc);
    }

    debug!(path = %path.display(), counties = codes.len(), %period, "loaded FIPS RUCC table");
    Ok(RuccTable::new(period, codes))
}

/// The RUCC tables available to the urbanicity resolver.
#[derive(Debug, Clone, Default)]
pub struct RuccRegistry {
    tables: BTreeMap<RuccPeriod, RuccTable>,
}

impl RuccRegistry {
    /// Loads every period table present in `dir`.
    ///
    /// # Errors
    ///
    /// Fails when a present file cannot be parsed or when no table exists.
    pub fn load_dir(dir: &Path) -> Result<Self, StandardsError> {
        let mut tables = BTreeMap::new();
        for period in RuccPeriod::ALL {
            let path = dir.join(period.file_name());
            if !path.is_file() {
                warn!(path = %path.display(), %period, "RUCC table not found");
                continue;
            }
            let table = if period.uses_gcm() {
                load_gcm_table(&path)?
            } else {
                load_fips_table(&path, period)?
            };
            tables.insert(period, table);
        }
        if tables.is_empty() {
            return Err(StandardsError::NoTables {
                path: dir.to_path_buf(),
            });
        }
        Ok(Self { tables })
    }

    pub fn table(&self, period: RuccPeriod) -> Option<&RuccTable> {
        self.tables.get(&period)
    }

    pub fn periods(&self) -> impl Iterator<Item = RuccPeriod> + '_ {
        self.tables.keys().copied()
    }
}
