//! Suicide classifier.
//!
//! Detection compares one field against the revision's undifferentiated
//! suicide catalog by equality: the 34-cause recode `ICD34` before 1999, the
//! `ICD10` underlying cause afterwards. Method sub-classification sweeps the record
//! axes `RA1`..`RA20` (and, by default, the primary field) by containment.

use mcod_model::{Cause, ClassifyOptions, Result, SuicideMethod, columns};
use mcod_standards::CauseCodeTable;
use polars::prelude::DataFrame;
use tracing::{debug, info};

use crate::frame::{filter_rows, require_code_column, require_code_columns};
use crate::resolver::{ResolvedRevision, resolve_revision};
use crate::scan::{containment_mask, equality_mask};

/// Number of records flagged by each suicide method.
///
/// A record can count under more than one method when its fields fall
/// inside several catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MethodCounts {
    pub total: usize,
    counts: [usize; 4],
}

impl MethodCounts {
    pub fn get(&self, method: SuicideMethod) -> usize {
        self.counts[usize::from(method.index())]
    }

    pub fn iter(&self) -> impl Iterator<Item = (SuicideMethod, usize)> + '_ {
        SuicideMethod::ALL
            .into_iter()
            .map(|method| (method, self.get(method)))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SuicideClassifier<'a> {
    table: &'a CauseCodeTable,
    options: ClassifyOptions,
}

impl<'a> SuicideClassifier<'a> {
    pub fn new(table: &'a CauseCodeTable, options: ClassifyOptions) -> Self {
        Self { table, options }
    }

    /// Column matched by detection. ICD-8 and ICD-9 suicide catalogs hold
    /// cause-list recodes, so those eras never read the primary column.
    pub fn detection_column(resolved: ResolvedRevision) -> &'static str {
        resolved
            .revision
            .cause_list_column()
            .unwrap_or_else(|| resolved.primary_column())
    }

    /// Per-row suicide flag.
    pub fn detect_mask(&self, df: &DataFrame, year: i64) -> Result<Vec<bool>> {
        let resolved = resolve_revision(year)?;
        let column = Self::detection_column(resolved);
        require_code_column(df, column)?;
        let catalog = self.table.catalog(Cause::Suicide, resolved.revision)?;
        debug!(
            revision = %resolved.revision,
            column,
            codes = catalog.len(),
            "detecting suicides"
        );
        equality_mask(df, column, catalog)
    }

    /// Records whose detection field holds a suicide code.
    pub fn detect(&self, df: &DataFrame, year: i64) -> Result<DataFrame> {
        let keep = self.detect_mask(df, year)?;
        let out = filter_rows(df, &keep)?;
        info!(
            year,
            input = df.height(),
            kept = out.height(),
            "suicide detection"
        );
        Ok(out)
    }

    fn method_columns(&self, resolved: ResolvedRevision) -> Vec<&'static str> {
        let mut scanned = Vec::with_capacity(columns::CONTRIBUTING_FIELD_COUNT + 1);
        if self.options.method_scan_includes_primary {
            scanned.push(resolved.primary_column());
        }
        scanned.extend(columns::CONTRIBUTING);
        scanned
    }

    fn validate_method_scan(&self, df: &DataFrame, resolved: ResolvedRevision) -> Result<()> {
        require_code_column(df, resolved.primary_column())?;
        require_code_columns(df, &columns::CONTRIBUTING)
    }

    /// Per-row flag for one method.
    pub fn method_mask(&self, df: &DataFrame, year: i64, method: SuicideMethod) -> Result<Vec<bool>> {
        let resolved = resolve_revision(year)?;
        self.validate_method_scan(df, resolved)?;
        let catalog = self.table.catalog(method.into(), resolved.revision)?;
        debug!(
            revision = %resolved.revision,
            %method,
            codes = catalog.len(),
            "scanning suicide method"
        );
        containment_mask(df, &self.method_columns(resolved), catalog)
    }

    /// Records indicating `method` on any scanned field.
    pub fn by_method(&self, df: &DataFrame, year: i64, method: SuicideMethod) -> Result<DataFrame> {
        let keep = self.method_mask(df, year, method)?;
        let out = filter_rows(df, &keep)?;
        info!(
            year,
            %method,
            input = df.height(),
            kept = out.height(),
            "suicide method classification"
        );
        Ok(out)
    }

    /// [`Self::by_method`] for an integer method identifier (0–3).
    pub fn by_method_id(&self, df: &DataFrame, year: i64, method: u8) -> Result<DataFrame> {
        let method = SuicideMethod::try_from(method)?;
        self.by_method(df, year, method)
    }

    /// How many records each method flags.
    pub fn method_counts(&self, df: &DataFrame, year: i64) -> Result<MethodCounts> {
        let resolved = resolve_revision(year)?;
        self.validate_method_scan(df, resolved)?;
        let scanned = self.method_columns(resolved);

        let mut counts = MethodCounts {
            total: df.height(),
            ..MethodCounts::default()
        };
        for method in SuicideMethod::ALL {
            let catalog = self.table.catalog(method.into(), resolved.revision)?;
            let keep = containment_mask(df, &scanned, catalog)?;
            counts.counts[usize::from(method.index())] = keep.iter().filter(|flag| **flag).count();
        }
        Ok(counts)
    }
}
