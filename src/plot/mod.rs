//! Plot module - chart data and the figure presenter

pub mod figure;
pub mod presenter;

use std::path::PathBuf;

use thiserror::Error;

pub use figure::*;
pub use presenter::*;

/// Errors that can occur while building or exporting a chart
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Output directory does not exist: {}", .0.display())]
    OutputDirectory(PathBuf),

    #[error("Unsupported chart format: '{0}'. Supported formats: png, svg")]
    UnsupportedFormat(String),

    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Failed to read chart data: {0}")]
    Data(#[from] polars::prelude::PolarsError),
}
