//! Chart styling and export
//!
//! Charts are drawn with [`plotters`]: `.png` files through the bitmap
//! backend and `.svg` files through the SVG backend. All styling state lives
//! in an explicit [`RenderContext`], so independent call sites never share
//! a "current chart".

use std::path::PathBuf;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;
use serde::{Deserialize, Serialize};

use super::{Figure, PlotError};
use crate::utils::print_saved;

type Result<T> = core::result::Result<T, PlotError>;

/// Default directory charts are written to, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "Images";
pub const DEFAULT_DPI: u32 = 300;

const TITLE_PT: f64 = 14.0;
const AXIS_LABEL_PT: f64 = 12.0;
const TICK_PT: f64 = 10.0;
const MARGIN_PT: f64 = 6.0;

/// Output settings shared by every exported chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderContext {
    pub output_dir: PathBuf,
    pub dpi: u32,
    /// Figure size in inches (width, height)
    pub size_inches: (f64, f64),
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            dpi: DEFAULT_DPI,
            size_inches: (10.0, 6.0),
        }
    }
}

/// Resolved text and spacing for one chart
struct ChartStyle<'a> {
    title: &'a str,
    x_label: &'a str,
    y_label: &'a str,
    rotate_xticks: bool,
    title_px: f64,
    label_px: f64,
    tick_px: f64,
    margin_px: u32,
}

impl ChartStyle<'_> {
    fn font(&self, px: f64) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, px, FontStyle::Normal)
    }

    fn x_tick_font(&self) -> FontDesc<'static> {
        let font = self.font(self.tick_px);
        if self.rotate_xticks {
            font.transform(FontTransform::Rotate90)
        } else {
            font
        }
    }

    /// Room below the plot for tick labels plus the axis description
    fn x_label_area(&self, longest_tick_chars: usize) -> u32 {
        let tick_extent = if self.rotate_xticks {
            self.tick_px * 0.6 * longest_tick_chars.max(1) as f64
        } else {
            self.tick_px * 1.5
        };
        (tick_extent + self.label_px * 1.8) as u32
    }

    fn y_label_area(&self) -> u32 {
        (self.tick_px * 4.0 + self.label_px * 1.8) as u32
    }
}

impl RenderContext {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Pixel dimensions of an exported chart (`size_inches * dpi`)
    pub fn pixel_size(&self) -> (u32, u32) {
        let (w, h) = self.size_inches;
        (
            (w * self.dpi as f64).round() as u32,
            (h * self.dpi as f64).round() as u32,
        )
    }

    /// Where `filename` is written. The name is joined as given.
    pub fn output_path(&self, filename: &str) -> PathBuf {
        self.output_dir.join(filename)
    }

    fn points_to_px(&self, points: f64) -> f64 {
        points * self.dpi as f64 / 72.0
    }

    /// Title, label and export a chart.
    ///
    /// Sets the title and axis labels, keeps margins tight and writes the
    /// chart to `output_dir/filename` at the context's DPI. The format follows
    /// the file extension (`png` or `svg`).
    ///
    /// `rotate_xticks` turns the x tick labels by 90°, not 45°: plotters only
    /// offers quarter-turn font transforms (`FontTransform::Rotate90/180/270`).
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - The written file
    /// * `Err(PlotError)` - Missing output directory, unsupported extension or a rendering failure
    pub fn plot_save_figure(
        &self,
        figure: &Figure,
        title: &str,
        xlabel: &str,
        ylabel: &str,
        filename: &str,
        rotate_xticks: bool,
    ) -> Result<PathBuf> {
        if !self.output_dir.is_dir() {
            return Err(PlotError::OutputDirectory(self.output_dir.clone()));
        }

        let path = self.output_path(filename);
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let style = ChartStyle {
            title,
            x_label: xlabel,
            y_label: ylabel,
            rotate_xticks,
            title_px: self.points_to_px(TITLE_PT),
            label_px: self.points_to_px(AXIS_LABEL_PT),
            tick_px: self.points_to_px(TICK_PT),
            margin_px: self.points_to_px(MARGIN_PT) as u32,
        };

        match extension.as_str() {
            "png" => {
                let area = BitMapBackend::new(&path, self.pixel_size()).into_drawing_area();
                draw_figure(&area, figure, &style)?;
            }
            "svg" => {
                let area = SVGBackend::new(&path, self.pixel_size()).into_drawing_area();
                draw_figure(&area, figure, &style)?;
            }
            _ => return Err(PlotError::UnsupportedFormat(extension)),
        }

        print_saved(&path);
        Ok(path)
    }
}

fn draw_figure<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    figure: &Figure,
    style: &ChartStyle,
) -> Result<()> {
    area.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    match figure {
        Figure::Bar { labels, values } => draw_bars(area, labels, values, style)?,
        Figure::Line { points } => draw_line(area, points, style)?,
    }

    area.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

fn draw_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    labels: &[String],
    values: &[f64],
    style: &ChartStyle,
) -> Result<()> {
    let (y_min, y_max) = padded_range(values.iter().copied().chain([0.0]));
    let longest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(1);

    let mut chart = ChartBuilder::on(area)
        .caption(style.title, style.font(style.title_px))
        .margin(style.margin_px)
        .x_label_area_size(style.x_label_area(longest))
        .y_label_area_size(style.y_label_area())
        .build_cartesian_2d((0..labels.len() as i32).into_segmented(), y_min..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let tick_label = |v: &SegmentValue<i32>| match v {
        SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&tick_label)
        .x_label_style(style.x_tick_font())
        .y_label_style(style.font(style.tick_px))
        .x_desc(style.x_label)
        .y_desc(style.y_label)
        .axis_desc_style(style.font(style.label_px))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(values.iter().enumerate().map(|(i, &v)| {
            let i = i as i32;
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), v)],
                BLUE.mix(0.8).filled(),
            );
            bar.set_margin(0, 0, 4, 4);
            bar
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

fn draw_line<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    points: &[(f64, f64)],
    style: &ChartStyle,
) -> Result<()> {
    let (x_min, x_max) = exact_range(points.iter().map(|(x, _)| *x));
    let (y_min, y_max) = padded_range(points.iter().map(|(_, y)| *y).chain([0.0]));

    let mut chart = ChartBuilder::on(area)
        .caption(style.title, style.font(style.title_px))
        .margin(style.margin_px)
        .x_label_area_size(style.x_label_area(6))
        .y_label_area_size(style.y_label_area())
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let whole_x = points.iter().all(|(x, _)| x.fract() == 0.0);
    let tick_label = |x: &f64| {
        if whole_x {
            format!("{:.0}", x)
        } else {
            format!("{:.2}", x)
        }
    };

    chart
        .configure_mesh()
        .x_label_formatter(&tick_label)
        .x_label_style(style.x_tick_font())
        .y_label_style(style.font(style.tick_px))
        .x_desc(style.x_label)
        .y_desc(style.y_label)
        .axis_desc_style(style.font(style.label_px))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), BLUE.stroke_width(3)))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    chart
        .draw_series(points.iter().map(|&p| Circle::new(p, 6, BLUE.filled())))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Min/max of the values with 5% headroom; never an empty range
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = exact_range(values);
    let pad = (max - min) * 0.05;
    (if min < 0.0 { min - pad } else { min }, max + pad)
}

/// Min/max of the values, widened to a unit range when they coincide
fn exact_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        (0.0, 1.0)
    } else if min >= max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}
