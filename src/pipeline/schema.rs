//! Explicit column-kind declarations for a record table

use std::collections::HashMap;
use std::fmt;

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// How a column is treated by the cleaner and the quality assessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

impl ColumnKind {
    /// Kind implied by a storage dtype: integers and floats are numeric,
    /// everything else (strings, booleans, dates, ...) is categorical.
    pub fn from_dtype(dtype: &DataType) -> Self {
        match dtype {
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64 => ColumnKind::Numeric,
            _ => ColumnKind::Categorical,
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "Numeric"),
            ColumnKind::Categorical => write!(f, "Categorical"),
        }
    }
}

/// Mapping from column name to [`ColumnKind`].
///
/// Classification is a lookup in this table, never an inspection of the
/// cell values. Build one from the declared storage types with
/// [`TableSchema::from_dataframe`] and override individual columns with
/// [`TableSchema::declare`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    kinds: HashMap<String, ColumnKind>,
}

impl TableSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dataframe(df: &DataFrame) -> Self {
        let kinds = df
            .get_columns()
            .iter()
            .map(|c| (c.name().to_string(), ColumnKind::from_dtype(c.dtype())))
            .collect();
        Self { kinds }
    }

    /// Declare (or re-declare) the kind of a column
    pub fn declare(mut self, column: impl Into<String>, kind: ColumnKind) -> Self {
        self.kinds.insert(column.into(), kind);
        self
    }

    pub fn kind(&self, column: &str) -> Result<ColumnKind, AnalysisError> {
        self.kinds
            .get(column)
            .copied()
            .ok_or_else(|| AnalysisError::UndeclaredColumn(column.to_string()))
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Split the columns of `df` into (numeric, categorical) names, in table order
    pub fn partition(&self, df: &DataFrame) -> Result<(Vec<String>, Vec<String>), AnalysisError> {
        let mut numeric = Vec::new();
        let mut categorical = Vec::new();

        for name in df.get_column_names() {
            match self.kind(name.as_str())? {
                ColumnKind::Numeric => numeric.push(name.to_string()),
                ColumnKind::Categorical => categorical.push(name.to_string()),
            }
        }

        Ok((numeric, categorical))
    }
}
