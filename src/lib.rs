//! Library surface for trial-scout.
//!
//! Pipeline: natural-language query -> completion provider -> structured
//! ClinicalTrials.gov parameters -> registry search -> trial summaries.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod registry;
pub mod translate;
