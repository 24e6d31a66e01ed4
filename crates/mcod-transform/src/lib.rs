//! Collaborator transforms for MCOD batches.
//!
//! This crate provides the steps that surround cause classification:
//!
//! - **demographics**: gender, race and generation filters
//! - **urbanicity**: county RUCC lookup and rurality filtering
//! - **indexing**: rates relative to the earliest year
//! - **standardize**: age adjustment against the US 2000 standard population
//! - **data_utils**: typed column extraction

pub mod data_utils;
pub mod demographics;
pub mod indexing;
pub mod standardize;
pub mod urbanicity;

pub use demographics::{
    filter_demographic, filter_gender, filter_generation, filter_race3, filter_race5,
};
pub use indexing::index_rates;
pub use standardize::{GroupRate, StandardizationColumns, StandardizedRates, standardize};
pub use urbanicity::{classify_location, filter_urbanicity};
