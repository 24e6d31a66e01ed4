//! Standards path resolution.

use std::path::PathBuf;

/// Environment variable naming an alternative cause catalog asset.
pub const CATALOG_ENV_VAR: &str = "MCOD_CATALOG";

/// Environment variable for overriding the RUCC tables directory.
pub const RUCC_DIR_ENV_VAR: &str = "MCOD_RUCC_DIR";

/// Catalog asset override from `MCOD_CATALOG`, if set and non-empty.
pub fn catalog_override() -> Option<PathBuf> {
    std::env::var_os(CATALOG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Get the RUCC tables directory.
///
/// Resolution order:
/// 1. `MCOD_RUCC_DIR` environment variable
/// 2. `standards/rucc/` inside this crate
pub fn rucc_dir() -> PathBuf {
    if let Ok(root) = std::env::var(RUCC_DIR_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("standards/rucc")
}
