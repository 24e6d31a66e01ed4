//! Classifiable causes of death.
//!
//! Each cause maps to a catalog key in the standards asset. Integer
//! identifiers (the method/cause numbers used by the analysis scripts) are
//! only accepted at the boundary through `TryFrom<u8>`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;

/// Method of a completed suicide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuicideMethod {
    /// 0: firearms and explosives.
    FirearmsExplosives,
    /// 1: poisoning.
    Poisoning,
    /// 2: hanging, strangulation and suffocation.
    Hanging,
    /// 3: every other method.
    Other,
}

impl SuicideMethod {
    pub const ALL: [SuicideMethod; 4] = [
        SuicideMethod::FirearmsExplosives,
        SuicideMethod::Poisoning,
        SuicideMethod::Hanging,
        SuicideMethod::Other,
    ];

    pub fn index(self) -> u8 {
        match self {
            SuicideMethod::FirearmsExplosives => 0,
            SuicideMethod::Poisoning => 1,
            SuicideMethod::Hanging => 2,
            SuicideMethod::Other => 3,
        }
    }

    /// Short identifier used in catalog keys and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            SuicideMethod::FirearmsExplosives => "firearms",
            SuicideMethod::Poisoning => "poisoning",
            SuicideMethod::Hanging => "hanging",
            SuicideMethod::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SuicideMethod::FirearmsExplosives => "Firearms and explosives",
            SuicideMethod::Poisoning => "Poisoning",
            SuicideMethod::Hanging => "Hanging, strangulation, and suffocation",
            SuicideMethod::Other => "Others",
        }
    }
}

impl TryFrom<u8> for SuicideMethod {
    type Error = ClassifyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|method| method.index() == value)
            .ok_or_else(|| ClassifyError::unknown("suicide method", value))
    }
}

impl fmt::Display for SuicideMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SuicideMethod {
    type Err = ClassifyError;

    /// Accepts the short identifier or the numeric index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "0" | "firearms" | "firearms_explosives" => Ok(SuicideMethod::FirearmsExplosives),
            "1" | "poisoning" => Ok(SuicideMethod::Poisoning),
            "2" | "hanging" => Ok(SuicideMethod::Hanging),
            "3" | "other" | "others" => Ok(SuicideMethod::Other),
            _ => Err(ClassifyError::unknown("suicide method", s)),
        }
    }
}

/// Causes classified alongside suicide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtherCause {
    /// 0: acute myocardial infarction.
    HeartAttack,
    /// 1: assault.
    Homicide,
    /// 2: motor vehicle traffic accident.
    MotorVehicleAccident,
    /// 3: drug overdose, confirmed by a substance code on a record axis.
    Overdose,
}

impl OtherCause {
    pub const ALL: [OtherCause; 4] = [
        OtherCause::HeartAttack,
        OtherCause::Homicide,
        OtherCause::MotorVehicleAccident,
        OtherCause::Overdose,
    ];

    pub fn index(self) -> u8 {
        match self {
            OtherCause::HeartAttack => 0,
            OtherCause::Homicide => 1,
            OtherCause::MotorVehicleAccident => 2,
            OtherCause::Overdose => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OtherCause::HeartAttack => "heart_attack",
            OtherCause::Homicide => "homicide",
            OtherCause::MotorVehicleAccident => "motor_vehicle_accident",
            OtherCause::Overdose => "overdose",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OtherCause::HeartAttack => "Heart attack",
            OtherCause::Homicide => "Homicide",
            OtherCause::MotorVehicleAccident => "Motor vehicle accident",
            OtherCause::Overdose => "Overdose",
        }
    }

    /// True when a match also needs the substance sub-scan.
    pub fn requires_substance_scan(self) -> bool {
        matches!(self, OtherCause::Overdose)
    }
}

impl TryFrom<u8> for OtherCause {
    type Error = ClassifyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|cause| cause.index() == value)
            .ok_or_else(|| ClassifyError::unknown("cause", value))
    }
}

impl fmt::Display for OtherCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OtherCause {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "0" | "heart_attack" => Ok(OtherCause::HeartAttack),
            "1" | "homicide" => Ok(OtherCause::Homicide),
            "2" | "motor_vehicle" | "motor_vehicle_accident" | "mva" => {
                Ok(OtherCause::MotorVehicleAccident)
            }
            "3" | "overdose" => Ok(OtherCause::Overdose),
            _ => Err(ClassifyError::unknown("cause", s)),
        }
    }
}

/// A catalog in the cause code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cause {
    /// Any completed suicide (primary-field detection).
    Suicide,
    /// Suicide by a specific method (record-axis sub-classification).
    SuicideMethod(SuicideMethod),
    Other(OtherCause),
    /// Substance codes confirming an overdose on a record axis.
    OverdoseSubstance,
}

impl Cause {
    /// Every catalog key, in asset order.
    pub const ALL: [Cause; 10] = [
        Cause::Suicide,
        Cause::SuicideMethod(SuicideMethod::FirearmsExplosives),
        Cause::SuicideMethod(SuicideMethod::Poisoning),
        Cause::SuicideMethod(SuicideMethod::Hanging),
        Cause::SuicideMethod(SuicideMethod::Other),
        Cause::Other(OtherCause::HeartAttack),
        Cause::Other(OtherCause::Homicide),
        Cause::Other(OtherCause::MotorVehicleAccident),
        Cause::Other(OtherCause::Overdose),
        Cause::OverdoseSubstance,
    ];

    /// Key of this cause in the catalog asset.
    pub fn key(self) -> &'static str {
        match self {
            Cause::Suicide => "suicide",
            Cause::SuicideMethod(SuicideMethod::FirearmsExplosives) => "suicide.firearms",
            Cause::SuicideMethod(SuicideMethod::Poisoning) => "suicide.poisoning",
            Cause::SuicideMethod(SuicideMethod::Hanging) => "suicide.hanging",
            Cause::SuicideMethod(SuicideMethod::Other) => "suicide.other",
            Cause::Other(OtherCause::HeartAttack) => "heart_attack",
            Cause::Other(OtherCause::Homicide) => "homicide",
            Cause::Other(OtherCause::MotorVehicleAccident) => "motor_vehicle_accident",
            Cause::Other(OtherCause::Overdose) => "overdose",
            Cause::OverdoseSubstance => "overdose.substance",
        }
    }

    /// Looks a cause up by its catalog key.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCauseOrMethod` for keys outside the defined causes.
    pub fn from_key(key: &str) -> Result<Self, ClassifyError> {
        Self::ALL
            .into_iter()
            .find(|cause| cause.key() == key.trim())
            .ok_or_else(|| ClassifyError::unknown("catalog key", key))
    }

    pub fn label(self) -> String {
        match self {
            Cause::Suicide => "Suicide".to_string(),
            Cause::SuicideMethod(method) => format!("Suicide: {}", method.label()),
            Cause::Other(cause) => cause.label().to_string(),
            Cause::OverdoseSubstance => "Overdose substances".to_string(),
        }
    }
}

impl From<SuicideMethod> for Cause {
    fn from(method: SuicideMethod) -> Self {
        Cause::SuicideMethod(method)
    }
}

impl From<OtherCause> for Cause {
    fn from(cause: OtherCause) -> Self {
        Cause::Other(cause)
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
