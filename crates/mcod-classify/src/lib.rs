//! Cause-of-death classification engine.
//!
//! Classifiers borrow a batch, validate every precondition up front and
//! return a new frame holding the matching rows in input order:
//!
//! - [`resolver`]: data year to ICD revision and primary column
//! - [`scan`]: equality and containment matching over record fields
//! - [`suicide`]: suicide detection and method sub-classification
//! - [`other`]: heart attack, homicide, motor vehicle accident and overdose

pub mod frame;
pub mod other;
pub mod resolver;
pub mod scan;
pub mod suicide;

pub use other::OtherCauseClassifier;
pub use resolver::{ResolvedRevision, resolve_batch, resolve_revision};
pub use scan::is_prefix_or_substring_of;
pub use suicide::{MethodCounts, SuicideClassifier};
