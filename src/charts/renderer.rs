//! Static Chart Renderer
//! Draws the median zinc bar chart with plotters and saves it as PNG.
//!
//! Layout:
//! 1. Title centered above the plot
//! 2. One bar per food group, labels rotated under the x axis
//! 3. Horizontal grid lines only

use crate::config::{CHART_TITLE, CHART_X_LABEL, CHART_Y_LABEL};
use crate::stats::GroupMedian;
use image::RgbImage;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::path::{Path, PathBuf};
use thiserror::Error;

// Colors
const BAR: RGBColor = RGBColor(31, 119, 180);
const MAROON: RGBColor = RGBColor(128, 0, 0);

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to draw chart: {0}")]
    Draw(String),
    #[error("Failed to encode chart image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Chart buffer does not match {0}x{1}")]
    Buffer(u32, u32),
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn draw_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Draw(e.to_string())
}

pub struct ZincChartRenderer;

impl ZincChartRenderer {
    /// Render the chart into a `width` x `height` RGB image.
    pub fn render_image(medians: &[GroupMedian], width: u32, height: u32) -> Result<RgbImage, ChartError> {
        let mut buffer = vec![0u8; Self::buffer_len(width, height)];

        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            Self::draw(&root, medians)?;
            root.present().map_err(draw_err)?;
        }

        RgbImage::from_raw(width, height, buffer).ok_or(ChartError::Buffer(width, height))
    }

    /// Render the chart and save it as PNG at `path`.
    pub fn render(medians: &[GroupMedian], path: &Path, size: (u32, u32)) -> Result<(), ChartError> {
        let img = Self::render_image(medians, size.0, size.1)?;
        img.save(path)?;
        log::info!("Saved zinc chart ({} groups) to {}", medians.len(), path.display());
        Ok(())
    }

    /// Open a rendered chart in the system image viewer.
    pub fn show(path: &Path) -> Result<(), ChartError> {
        open::that(path).map_err(|source| ChartError::Open {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Bytes needed for an RGB buffer of `width` x `height` pixels.
    pub fn buffer_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * 3
    }

    /// Upper end of the value axis, with headroom above the tallest bar.
    pub fn y_max(medians: &[GroupMedian]) -> f64 {
        let max = medians
            .iter()
            .map(|m| m.median)
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        if max > 0.0 {
            max * 1.1
        } else {
            1.0
        }
    }

    fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        medians: &[GroupMedian],
    ) -> Result<(), ChartError> {
        root.fill(&WHITE).map_err(draw_err)?;

        let groups: Vec<&str> = medians.iter().map(|m| m.group.as_str()).collect();
        let n = groups.len().max(1) as i32;

        let mut chart = ChartBuilder::on(root)
            .caption(CHART_TITLE, ("sans-serif", 30))
            .margin(20)
            .x_label_area_size(260)
            .y_label_area_size(80)
            .build_cartesian_2d((0..n).into_segmented(), 0.0..Self::y_max(medians))
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .light_line_style(TRANSPARENT)
            .bold_line_style(MAROON.mix(0.6))
            .x_labels(groups.len().max(1))
            .x_label_style(
                TextStyle::from(("sans-serif", 16).into_font()).transform(FontTransform::Rotate90),
            )
            .x_label_formatter(&|x| match x {
                SegmentValue::CenterOf(i) if *i >= 0 => {
                    groups.get(*i as usize).map(|g| g.to_string()).unwrap_or_default()
                }
                _ => String::new(),
            })
            .y_label_style(("sans-serif", 16))
            .x_desc(CHART_X_LABEL)
            .y_desc(CHART_Y_LABEL)
            .axis_desc_style(("sans-serif", 20))
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(BAR.filled())
                    .margin(8)
                    .data(
                        medians
                            .iter()
                            .enumerate()
                            .filter(|(_, m)| m.median.is_finite())
                            .map(|(i, m)| (i as i32, m.median)),
                    ),
            )
            .map_err(draw_err)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn median(group: &str, value: f64) -> GroupMedian {
        GroupMedian {
            group: group.to_string(),
            count: 1,
            median: value,
            mean: value,
        }
    }

    #[test]
    fn test_y_max_headroom() {
        let medians = vec![median("Nuts", 3.0), median("Beverages", 0.1)];
        assert!((ZincChartRenderer::y_max(&medians) - 3.3).abs() < 1e-9);
    }

    #[test]
    fn test_buffer_len_beyond_u32() {
        assert_eq!(ZincChartRenderer::buffer_len(1600, 1000), 4_800_000);
        assert_eq!(ZincChartRenderer::buffer_len(70_000, 70_000), 14_700_000_000);
    }

    #[test]
    fn test_y_max_fallback_when_empty_or_zero() {
        assert_eq!(ZincChartRenderer::y_max(&[]), 1.0);
        assert_eq!(ZincChartRenderer::y_max(&[median("Water", 0.0)]), 1.0);
        assert_eq!(ZincChartRenderer::y_max(&[median("Odd", f64::NAN)]), 1.0);
    }

    #[test]
    #[ignore = "text rendering needs a system sans-serif font"]
    fn test_render_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("zinc_content.png");
        let medians = vec![median("Nuts", 3.1), median("Dairy and Egg Products", 2.66)];

        ZincChartRenderer::render(&medians, &path, (800, 500)).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!(img.width(), 800);
        assert_eq!(img.height(), 500);
    }

    #[test]
    #[ignore = "text rendering needs a system sans-serif font"]
    fn test_render_empty_chart() {
        let img = ZincChartRenderer::render_image(&[], 400, 300).unwrap();
        assert_eq!(img.dimensions(), (400, 300));
    }
}
