//! Chart data handed to the presenter

use polars::prelude::*;

use super::PlotError;

/// Data of a single chart
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    /// One bar per category label
    Bar { labels: Vec<String>, values: Vec<f64> },
    /// Connected (x, y) points, drawn in the given order
    Line { points: Vec<(f64, f64)> },
}

impl Figure {
    pub fn bar(labels: Vec<String>, values: Vec<f64>) -> Result<Self, PlotError> {
        if labels.is_empty() {
            return Err(PlotError::InvalidData("Bar chart needs at least one bar".to_string()));
        }
        if labels.len() != values.len() {
            return Err(PlotError::InvalidData(format!(
                "Bar chart has {} labels but {} values",
                labels.len(),
                values.len()
            )));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(PlotError::InvalidData("Bar values must be finite".to_string()));
        }
        Ok(Figure::Bar { labels, values })
    }

    pub fn line(points: Vec<(f64, f64)>) -> Result<Self, PlotError> {
        if points.is_empty() {
            return Err(PlotError::InvalidData("Line chart needs at least one point".to_string()));
        }
        if points.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(PlotError::InvalidData("Line points must be finite".to_string()));
        }
        Ok(Figure::Line { points })
    }

    /// Bar chart of `value_column` labelled by `label_column`, e.g. an
    /// aggregate table keyed by weather condition.
    pub fn bar_from_frame(
        df: &DataFrame,
        label_column: &str,
        value_column: &str,
    ) -> Result<Self, PlotError> {
        let labels = df.column(label_column)?.cast(&DataType::String)?;
        let labels: Vec<String> = labels
            .as_materialized_series()
            .str()?
            .iter()
            .map(|v| v.unwrap_or_default().to_string())
            .collect();
        let values = float_values(df, value_column)?;
        Figure::bar(labels, values)
    }

    /// Line chart of `y_column` against `x_column`, e.g. accidents per year
    pub fn line_from_frame(df: &DataFrame, x_column: &str, y_column: &str) -> Result<Self, PlotError> {
        let xs = float_values(df, x_column)?;
        let ys = float_values(df, y_column)?;
        Figure::line(xs.into_iter().zip(ys).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Figure::Bar { values, .. } => values.len(),
            Figure::Line { points } => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn float_values(df: &DataFrame, column: &str) -> Result<Vec<f64>, PlotError> {
    let values = df.column(column)?.cast(&DataType::Float64)?;
    let values: Vec<f64> = values
        .f64()?
        .iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect();
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_from_frame() {
        let df = df! {
            "Weather.Condition" => ["Instrument Meteorological Conditions", "Visual Meteorological Conditions"],
            "Event.Id" => [4u32, 9],
        }
        .unwrap();

        let figure = Figure::bar_from_frame(&df, "Weather.Condition", "Event.Id").unwrap();
        assert_eq!(
            figure,
            Figure::Bar {
                labels: vec![
                    "Instrument Meteorological Conditions".to_string(),
                    "Visual Meteorological Conditions".to_string(),
                ],
                values: vec![4.0, 9.0],
            }
        );
    }

    #[test]
    fn test_line_from_frame() {
        let df = df! {
            "Year" => [2019i32, 2020, 2021],
            "Event.Id" => [12u32, 8, 10],
        }
        .unwrap();

        let figure = Figure::line_from_frame(&df, "Year", "Event.Id").unwrap();
        assert_eq!(figure.len(), 3);
        assert_eq!(
            figure,
            Figure::Line {
                points: vec![(2019.0, 12.0), (2020.0, 8.0), (2021.0, 10.0)]
            }
        );
    }

    #[test]
    fn test_null_values_are_rejected() {
        let df = df! {
            "Year" => [Some(2019i32), None],
            "Event.Id" => [1u32, 2],
        }
        .unwrap();
        assert!(matches!(
            Figure::line_from_frame(&df, "Year", "Event.Id"),
            Err(PlotError::InvalidData(_))
        ));
    }

    #[test]
    fn test_mismatched_bar_lengths() {
        let result = Figure::bar(vec!["a".to_string()], vec![1.0, 2.0]);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    fn test_missing_column_is_a_data_error() {
        let df = df! { "Year" => [2020i32] }.unwrap();
        assert!(matches!(
            Figure::line_from_frame(&df, "Year", "Event.Id"),
            Err(PlotError::Data(_))
        ));
    }
}
