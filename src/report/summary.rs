//! Console rendering of quality reports and aggregate tables

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;
use polars::prelude::*;

use crate::pipeline::{ColumnKind, QualityReport, RiskFactors};
use crate::utils::{print_count, print_step_header};

impl QualityReport {
    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("DATA QUALITY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!(
            "      Rows: {}   Columns: {}",
            style(self.rows).yellow(),
            style(self.columns).yellow()
        );
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Column").add_attribute(Attribute::Bold),
            Cell::new("Kind").add_attribute(Attribute::Bold),
            Cell::new("Dtype").add_attribute(Attribute::Bold),
            Cell::new("Missing").add_attribute(Attribute::Bold),
            Cell::new("Missing %").add_attribute(Attribute::Bold),
            Cell::new("Unique").add_attribute(Attribute::Bold),
        ]);

        for entry in &self.entries {
            let kind_color = match entry.kind {
                ColumnKind::Numeric => Color::Cyan,
                ColumnKind::Categorical => Color::Magenta,
            };
            let missing_color = if entry.missing_pct > 30.0 {
                Color::Red
            } else if entry.missing_pct > 0.0 {
                Color::Yellow
            } else {
                Color::Green
            };

            table.add_row(vec![
                Cell::new(&entry.name),
                Cell::new(entry.kind).fg(kind_color),
                Cell::new(&entry.dtype),
                Cell::new(entry.missing_count).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.1}%", entry.missing_pct))
                    .fg(missing_color)
                    .set_alignment(CellAlignment::Right),
                Cell::new(entry.unique_count).set_alignment(CellAlignment::Right),
            ]);
        }

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}

impl RiskFactors {
    pub fn display(&self) -> Result<()> {
        display_table("Risk by Weather Condition", &self.weather)?;
        display_table("Risk by Phase of Flight", &self.phase)?;
        display_table("Accidents per Year", &self.yearly)?;
        Ok(())
    }
}

/// Print an aggregate table under a section header
pub fn display_table(title: &str, df: &DataFrame) -> Result<()> {
    print_step_header(title);
    print_count("group(s)", df.height(), None);
    println!();

    for line in build_table(df)?.to_string().lines() {
        println!("    {}", line);
    }
    Ok(())
}

/// Build a comfy table with one row per frame row
pub fn build_table(df: &DataFrame) -> Result<Table> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(
        df.get_column_names()
            .iter()
            .map(|name| Cell::new(name.as_str()).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );

    for row in 0..df.height() {
        let mut cells = Vec::with_capacity(df.width());
        for column in df.get_columns() {
            let cell = Cell::new(format_cell(&column.get(row)?));
            cells.push(if ColumnKind::from_dtype(column.dtype()) == ColumnKind::Numeric {
                cell.set_alignment(CellAlignment::Right)
            } else {
                cell
            });
        }
        table.add_row(cells);
    }

    Ok(table)
}

/// Render a single cell; floats are shown with three decimals
pub fn format_cell(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float64(v) => format!("{:.3}", v),
        AnyValue::Float32(v) => format!("{:.3}", v),
        other => other.to_string(),
    }
}
