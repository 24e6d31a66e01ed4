//! Configuration options for classification.

use serde::{Deserialize, Serialize};

/// Options controlling how classifiers read a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyOptions {
    /// Include the primary cause field in the suicide-method record-axis sweep.
    ///
    /// Record axes usually repeat the underlying cause, so this only matters
    /// for batches whose axes were truncated.
    pub method_scan_includes_primary: bool,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            method_scan_includes_primary: true,
        }
    }
}

impl ClassifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_primary_in_method_scan(mut self, enable: bool) -> Self {
        self.method_scan_includes_primary = enable;
        self
    }
}
