//! Other-cause classifier.
//!
//! Heart attack, homicide and motor vehicle accidents match the primary
//! field by equality. Overdose additionally needs a substance code on one of
//! the record axes.

use mcod_model::{Cause, OtherCause, Result, Revision, columns};
use mcod_standards::CauseCodeTable;
use polars::prelude::DataFrame;
use tracing::{debug, info, warn};

use crate::frame::{filter_rows, require_code_column, require_code_columns};
use crate::resolver::resolve_revision;
use crate::scan::{containment_mask, equality_mask};

#[derive(Debug, Clone, Copy)]
pub struct OtherCauseClassifier<'a> {
    table: &'a CauseCodeTable,
}

impl<'a> OtherCauseClassifier<'a> {
    pub fn new(table: &'a CauseCodeTable) -> Self {
        Self { table }
    }

    /// Per-row flag for `cause`.
    pub fn mask(&self, df: &DataFrame, year: i64, cause: OtherCause) -> Result<Vec<bool>> {
        let resolved = resolve_revision(year)?;
        let primary = resolved.primary_column();
        require_code_column(df, primary)?;

        let catalog = self.table.catalog(cause.into(), resolved.revision)?;
        let substances = if cause.requires_substance_scan() {
            require_code_columns(df, &columns::CONTRIBUTING)?;
            // Substance codes only exist as ICD-10 T-codes.
            Some(self.table.catalog(Cause::OverdoseSubstance, Revision::Icd10)?)
        } else {
            None
        };

        debug!(
            revision = %resolved.revision,
            %cause,
            codes = catalog.len(),
            "classifying primary cause"
        );
        let mut keep = equality_mask(df, primary, catalog)?;

        if let Some(substances) = substances {
            if resolved.revision != Revision::Icd10 {
                warn!(
                    year,
                    revision = %resolved.revision,
                    "overdose substance scan uses ICD-10 codes on a non-ICD-10 batch"
                );
            }
            let confirmed = containment_mask(df, &columns::CONTRIBUTING, substances)?;
            let before = keep.iter().filter(|flag| **flag).count();
            for (flag, substance) in keep.iter_mut().zip(confirmed) {
                *flag = *flag && substance;
            }
            debug!(
                primary_matches = before,
                confirmed = keep.iter().filter(|flag| **flag).count(),
                "overdose substance scan"
            );
        }
        Ok(keep)
    }

    /// Records classified under `cause`.
    pub fn classify(&self, df: &DataFrame, year: i64, cause: OtherCause) -> Result<DataFrame> {
        let keep = self.mask(df, year, cause)?;
        let out = filter_rows(df, &keep)?;
        info!(
            year,
            %cause,
            input = df.height(),
            kept = out.height(),
            "other-cause classification"
        );
        Ok(out)
    }

    /// [`Self::classify`] for an integer cause identifier (0–3).
    pub fn classify_id(&self, df: &DataFrame, year: i64, cause: u8) -> Result<DataFrame> {
        let cause = OtherCause::try_from(cause)?;
        self.classify(df, year, cause)
    }
}
