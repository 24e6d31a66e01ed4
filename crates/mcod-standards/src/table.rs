//! The cause code table: every catalog, keyed by cause and revision.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use mcod_model::{Cause, ClassifyError, Revision};
use serde::Deserialize;
use tracing::debug;

use crate::catalog::{Catalog, MatchMode};
use crate::error::StandardsError;
use crate::hash::sha256_hex;

/// Location of the embedded asset, used in error messages.
pub const BUILTIN_ASSET_PATH: &str = "standards/catalogs.toml";

const BUILTIN_ASSET: &str = include_str!("../standards/catalogs.toml");

static BUILTIN: LazyLock<Result<CauseCodeTable, StandardsError>> =
    LazyLock::new(|| CauseCodeTable::parse(BUILTIN_ASSET, Path::new(BUILTIN_ASSET_PATH)));

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogAsset {
    asset: AssetHeader,
    #[serde(rename = "catalog", default)]
    catalogs: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AssetHeader {
    name: String,
    version: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogEntry {
    cause: String,
    revision: Revision,
    #[serde(rename = "match")]
    mode: MatchMode,
    codes: Vec<String>,
}

/// Immutable, revision-keyed set of cause catalogs.
#[derive(Debug, Clone)]
pub struct CauseCodeTable {
    name: String,
    version: String,
    fingerprint: String,
    catalogs: BTreeMap<(Cause, Revision), Catalog>,
}

impl CauseCodeTable {
    /// The table built from the embedded asset, parsed on first use.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAsset` if the embedded asset fails validation.
    pub fn builtin() -> Result<&'static CauseCodeTable, StandardsError> {
        BUILTIN.as_ref().map_err(|err| StandardsError::InvalidAsset {
            message: format!("embedded {BUILTIN_ASSET_PATH}: {err}"),
        })
    }

    /// Loads an alternative asset from disk.
    pub fn from_path(path: &Path) -> Result<Self, StandardsError> {
        let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
        Self::parse(&contents, path)
    }

    /// Parses an asset held in memory.
    pub fn from_toml_str(contents: &str) -> Result<Self, StandardsError> {
        Self::parse(contents, Path::new("<memory>"))
    }

    fn parse(contents: &str, origin: &Path) -> Result<Self, StandardsError> {
        let asset: CatalogAsset = toml::from_str(contents).map_err(|e| StandardsError::Toml {
            path: PathBuf::from(origin),
            source: e,
        })?;

        let mut catalogs = BTreeMap::new();
        for entry in asset.catalogs {
            let catalog = build_catalog(entry)?;
            let key = (catalog.cause(), catalog.revision());
            if catalogs.contains_key(&key) {
                return Err(StandardsError::invalid(format!(
                    "duplicate catalog for `{}` under {}",
                    key.0, key.1
                )));
            }
            catalogs.insert(key, catalog);
        }

        if catalogs.is_empty() {
            return Err(StandardsError::invalid("asset defines no catalogs"));
        }

        let table = Self {
            name: asset.asset.name,
            version: asset.asset.version,
            fingerprint: sha256_hex(contents.as_bytes()),
            catalogs,
        };
        debug!(
            origin = %origin.display(),
            catalogs = table.catalogs.len(),
            fingerprint = %table.fingerprint,
            "loaded cause code table"
        );
        Ok(table)
    }

    /// Catalog for a cause under a revision.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedRevisionForCause` when the asset has no such
    /// catalog, e.g. the substance catalog under ICD-9.
    pub fn catalog(&self, cause: Cause, revision: Revision) -> Result<&Catalog, ClassifyError> {
        self.catalogs
            .get(&(cause, revision))
            .ok_or(ClassifyError::UnsupportedRevisionForCause { cause, revision })
    }

    /// Every catalog, ordered by cause then revision.
    pub fn entries(&self) -> impl Iterator<Item = &Catalog> {
        self.catalogs.values()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// SHA-256 of the asset text, hex encoded.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn build_catalog(entry: CatalogEntry) -> Result<Catalog, StandardsError> {
    let cause = Cause::from_key(&entry.cause)
        .map_err(|_| StandardsError::invalid(format!("unknown cause key `{}`", entry.cause)))?;

    let expected = MatchMode::for_cause(cause);
    if entry.mode != expected {
        return Err(StandardsError::invalid(format!(
            "`{cause}` under {} must use {expected} matching, found {}",
            entry.revision, entry.mode
        )));
    }
    if entry.codes.is_empty() {
        return Err(StandardsError::invalid(format!(
            "empty catalog for `{cause}` under {}",
            entry.revision
        )));
    }

    let mut seen = HashSet::new();
    for code in &entry.codes {
        if code.trim().is_empty() {
            return Err(StandardsError::invalid(format!(
                "blank code in `{cause}` under {}",
                entry.revision
            )));
        }
        if !seen.insert(code.as_str()) {
            return Err(StandardsError::invalid(format!(
                "code {code:?} listed twice in `{cause}` under {}",
                entry.revision
            )));
        }
    }

    Ok(Catalog::new(cause, entry.revision, entry.mode, entry.codes))
}
