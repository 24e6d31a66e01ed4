//! MCOD data model definitions.
//!
//! Type-safe representations of the concepts the classification engine and
//! its collaborators share:
//!
//! - **revision**: ICD revision eras and the year boundaries between them
//! - **cause**: classifiable causes, suicide methods and catalog keys
//! - **demographics**: gender, race, generation and urbanicity classes
//! - **columns**: column names of an MCOD batch
//! - **options**: classifier configuration
//! - **error**: the shared error taxonomy

pub mod cause;
pub mod columns;
pub mod demographics;
pub mod error;
pub mod options;
pub mod revision;

pub use cause::{Cause, OtherCause, SuicideMethod};
pub use demographics::{DemographicFilter, Gender, Generation, Race3, Race5, Urbanicity};
pub use error::{ClassifyError, Result};
pub use options::ClassifyOptions;
pub use revision::{FIRST_YEAR, LAST_YEAR, Revision};
