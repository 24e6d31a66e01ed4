//! A single revision-specific code catalog.

use std::collections::HashSet;
use std::fmt;

use mcod_model::{Cause, Revision};
use serde::{Deserialize, Serialize};

/// How a catalog is compared against record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The primary field must equal a catalog code.
    Equality,
    /// A field matches when its value occurs inside a catalog code.
    Containment,
}

impl MatchMode {
    /// The mode each cause is defined with.
    pub fn for_cause(cause: Cause) -> Self {
        match cause {
            Cause::Suicide | Cause::Other(_) => MatchMode::Equality,
            Cause::SuicideMethod(_) | Cause::OverdoseSubstance => MatchMode::Containment,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Equality => "equality",
            MatchMode::Containment => "containment",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered set of candidate codes for one cause under one revision.
///
/// Codes are stored exactly as written in the asset, padding included.
#[derive(Debug, Clone)]
pub struct Catalog {
    cause: Cause,
    revision: Revision,
    mode: MatchMode,
    codes: Vec<String>,
    members: HashSet<String>,
}

impl Catalog {
    pub fn new(cause: Cause, revision: Revision, mode: MatchMode, codes: Vec<String>) -> Self {
        let members = codes.iter().cloned().collect();
        Self {
            cause,
            revision,
            mode,
            codes,
            members,
        }
    }

    pub fn cause(&self) -> Cause {
        self.cause
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Codes in asset order.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Exact membership; `"X72"` is not a member of a catalog holding `"X72 "`.
    pub fn contains_exact(&self, code: &str) -> bool {
        self.members.contains(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcod_model::SuicideMethod;

    #[test]
    fn exact_membership_respects_padding() {
        let catalog = Catalog::new(
            Cause::SuicideMethod(SuicideMethod::FirearmsExplosives),
            Revision::Icd10,
            MatchMode::Containment,
            vec!["X72 ".to_string(), "X73 ".to_string()],
        );
        assert!(catalog.contains_exact("X72 "));
        assert!(!catalog.contains_exact("X72"));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.codes()[1], "X73 ");
    }

    #[test]
    fn modes_follow_cause() {
        assert_eq!(MatchMode::for_cause(Cause::Suicide), MatchMode::Equality);
        assert_eq!(
            MatchMode::for_cause(Cause::OverdoseSubstance),
            MatchMode::Containment
        );
        assert_eq!(
            MatchMode::for_cause(Cause::SuicideMethod(SuicideMethod::Other)),
            MatchMode::Containment
        );
    }
}
