//! Avrisk: Aviation Accident Risk Library
//!
//! Cleaning and descriptive statistics for aviation accident datasets:
//! data quality assessment, missing-value filling, text and weather-code
//! standardization, operation classification, grouped risk tables and
//! chart export.

pub mod error;
pub mod pipeline;
pub mod plot;
pub mod report;
pub mod utils;

pub use error::AnalysisError;
