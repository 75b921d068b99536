//! Flight purpose classification into operation categories

use std::fmt;

use anyhow::Result;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use super::columns::{require_columns, OPERATION_CATEGORY};

/// Broad category of flight operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationCategory {
    Private,
    Commercial,
    Other,
}

impl OperationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationCategory::Private => "Private",
            OperationCategory::Commercial => "Commercial",
            OperationCategory::Other => "Other",
        }
    }
}

impl fmt::Display for OperationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flight purposes counted as private or commercial operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationCategories {
    pub private: Vec<String>,
    pub commercial: Vec<String>,
}

impl Default for OperationCategories {
    fn default() -> Self {
        Self {
            private: ["Personal", "Executive/Corporate", "Business", "Ferry"]
                .map(String::from)
                .to_vec(),
            commercial: ["Aerial Application", "Aerial Observation", "Public Aircraft"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl OperationCategories {
    pub fn new(private: Vec<String>, commercial: Vec<String>) -> Self {
        Self {
            private,
            commercial,
        }
    }
}

/// Classify a flight purpose.
///
/// Private purposes are checked before commercial ones. Matching is exact
/// and case-sensitive; standardize the text beforehand. A missing purpose
/// or one in neither list is [`OperationCategory::Other`].
pub fn categorize_operation(
    purpose: Option<&str>,
    categories: &OperationCategories,
) -> OperationCategory {
    let Some(purpose) = purpose else {
        return OperationCategory::Other;
    };

    if categories.private.iter().any(|p| p == purpose) {
        OperationCategory::Private
    } else if categories.commercial.iter().any(|p| p == purpose) {
        OperationCategory::Commercial
    } else {
        OperationCategory::Other
    }
}

/// Return a copy of `df` with an `Operation_Category` column derived from
/// `purpose_column`.
pub fn add_operation_category(
    df: &DataFrame,
    purpose_column: &str,
    categories: &OperationCategories,
) -> Result<DataFrame> {
    require_columns(df, &[purpose_column], "add_operation_category")?;

    let purposes = df.column(purpose_column)?.cast(&DataType::String)?;
    let labels: StringChunked = purposes
        .as_materialized_series()
        .str()?
        .iter()
        .map(|p| Some(categorize_operation(p, categories).as_str()))
        .collect();

    let mut out = df.clone();
    out.with_column(labels.into_series().with_name(OPERATION_CATEGORY.into()))?;
    Ok(out)
}
