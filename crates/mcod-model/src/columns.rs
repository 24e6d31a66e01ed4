//! Column names of a parsed MCOD batch.

pub const YEAR: &str = "Year";

pub const ICD8: &str = "ICD8";
pub const ICD9: &str = "ICD9";
pub const ICD10: &str = "ICD10";
/// 34-cause recode list (1969–1998 files).
pub const ICD34: &str = "ICD34";

/// Number of record-axis (contributing cause) fields on an MCOD record.
pub const CONTRIBUTING_FIELD_COUNT: usize = 20;

/// Record-axis columns `RA1`..`RA20`.
pub const CONTRIBUTING: [&str; CONTRIBUTING_FIELD_COUNT] = [
    "RA1", "RA2", "RA3", "RA4", "RA5", "RA6", "RA7", "RA8", "RA9", "RA10", "RA11", "RA12", "RA13",
    "RA14", "RA15", "RA16", "RA17", "RA18", "RA19", "RA20",
];

pub const GENDER: &str = "Gender";
pub const RACE_RECODE_3: &str = "Race_Recode_3";
pub const RACE_RECODE_5: &str = "Race_Recode_5";
pub const RACE_RECODE_40: &str = "Race_Recode_40";
pub const AGE_NUMBER: &str = "Age_Number";

pub const RESIDENT_STATE: &str = "Resident_State";
pub const RESIDENT_COUNTY: &str = "Resident_County";
pub const RUCC: &str = "RUCC";
pub const URBANICITY: &str = "Urbanicity";
