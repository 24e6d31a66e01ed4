#![deny(unsafe_code)]

//! Reference data for MCOD classification.
//!
//! - **table**: the cause code catalogs, embedded from `standards/catalogs.toml`
//! - **rucc**: Rural-Urban Continuum Code tables loaded from CSV
//! - **population**: US 2000 standard population weights

pub mod catalog;
pub mod error;
pub mod hash;
pub mod paths;
pub mod population;
pub mod rucc;
pub mod table;

pub use crate::catalog::{Catalog, MatchMode};
pub use crate::error::StandardsError;
pub use crate::population::{AgeGroup, US_2000_STANDARD, age_group_for};
pub use crate::rucc::{RuccPeriod, RuccRegistry, RuccTable};
pub use crate::table::CauseCodeTable;
