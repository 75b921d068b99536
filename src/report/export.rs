//! JSON export of quality reports

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{ColumnQuality, QualityReport};

/// Metadata about the assessment run
#[derive(Serialize)]
pub struct ExportMetadata {
    /// Timestamp of the export (RFC 3339)
    pub timestamp: String,
    pub avrisk_version: String,
    /// Free-form label of the assessed data, usually the input file
    pub source: String,
}

#[derive(Serialize)]
pub struct QualityReportExport<'a> {
    pub metadata: ExportMetadata,
    pub rows: usize,
    pub columns: usize,
    pub total_missing: usize,
    pub entries: &'a [ColumnQuality],
}

/// Write a quality report to `output_path` as pretty-printed JSON
pub fn export_quality_report(report: &QualityReport, source: &str, output_path: &Path) -> Result<()> {
    let export = QualityReportExport {
        metadata: ExportMetadata {
            timestamp: Utc::now().to_rfc3339(),
            avrisk_version: env!("CARGO_PKG_VERSION").to_string(),
            source: source.to_string(),
        },
        rows: report.rows,
        columns: report.columns,
        total_missing: report.total_missing(),
        entries: &report.entries,
    };

    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize quality report")?;
    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write quality report: {}", output_path.display()))?;

    Ok(())
}
