//! Shared utilities for MCOD crates.
//!
//! This crate provides common utilities used across the MCOD workspace,
//! including Polars value helpers and canonical code normalization.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use polars::{
    any_to_f64, any_to_i64, any_to_string, canonical_code, format_numeric, is_code_dtype,
    parse_f64, parse_i64,
};
