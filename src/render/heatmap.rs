// Two-panel call/put heatmap drawn with plotters.
//
// Cells are unit squares centred on integer coordinates, so column `j` spans
// x in [j - 0.5, j + 0.5] and the integer tick under it is labelled with
// `spot_axis[j]`. Rows are laid out top-down like the matrix, so row `i`
// sits at y = rows - 1 - i and `volatility_axis[0]` is the top row.

use std::path::Path;

use anyhow::{anyhow, Result};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::info;

use super::colormap::{magma, normalize};
use crate::models::grid::HeatmapGrid;

/// Layout and labelling options for the heatmap image.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default)
)]
pub struct HeatmapStyle {
    /// Image width in pixels, shared by both panels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Write each cell's price inside the cell
    pub annotate: bool,
    /// Decimal places for annotations and tick labels
    pub decimals: usize,
}

impl Default for HeatmapStyle {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 600,
            annotate: true,
            decimals: 2,
        }
    }
}

fn draw_err<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> anyhow::Error {
    anyhow!("failed to draw heatmap: {e}")
}

/// Draws the call panel on the left half of `root` and the put panel on the
/// right, both coloured on one scale spanning every value in the grid.
pub fn draw_heatmaps<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    grid: &HeatmapGrid,
    style: &HeatmapStyle,
) -> Result<()> {
    let (lo, hi) = grid
        .value_bounds()
        .ok_or_else(|| anyhow!("cannot render an empty heatmap grid"))?;

    root.fill(&WHITE).map_err(draw_err)?;
    let panels = root.split_evenly((1, 2));

    draw_panel(&panels[0], "Call Price Heatmap", &grid.call_matrix, grid, (lo, hi), style)?;
    draw_panel(&panels[1], "Put Price Heatmap", &grid.put_matrix, grid, (lo, hi), style)?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    matrix: &[Vec<f64>],
    grid: &HeatmapGrid,
    (lo, hi): (f64, f64),
    style: &HeatmapStyle,
) -> Result<()> {
    let (rows, cols) = grid.shape();
    let decimals = style.decimals;

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .caption(title, ("sans-serif", 24))
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5..cols as f64 - 0.5, -0.5..rows as f64 - 0.5)
        .map_err(draw_err)?;

    let spot_label = |x: &f64| axis_label(&grid.spot_axis, *x, decimals);
    let vol_label = |y: &f64| {
        let flipped = (rows as f64 - 1.0) - *y;
        axis_label(&grid.volatility_axis, flipped, decimals)
    };

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(cols + 1)
        .y_labels(rows + 1)
        .x_label_formatter(&spot_label)
        .y_label_formatter(&vol_label)
        .x_desc("Spot Price")
        .y_desc("Volatility (σ)")
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(matrix.iter().enumerate().flat_map(|(i, row)| {
            row.iter().enumerate().map(move |(j, &value)| {
                let (x, y) = (j as f64, row_coord(rows, i));
                Rectangle::new(
                    [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
                    magma(normalize(value, lo, hi)).filled(),
                )
            })
        }))
        .map_err(draw_err)?;

    if style.annotate {
        let font_size = annotation_font_size(area.dim_in_pixel(), rows.max(cols));
        chart
            .draw_series(matrix.iter().enumerate().flat_map(|(i, row)| {
                row.iter().enumerate().map(move |(j, &value)| {
                    // Dark text on the bright end of the map, light text elsewhere
                    let color = if normalize(value, lo, hi) > 0.6 {
                        BLACK
                    } else {
                        WHITE
                    };
                    let text_style = ("sans-serif", font_size)
                        .into_font()
                        .color(&color)
                        .pos(Pos::new(HPos::Center, VPos::Center));
                    Text::new(
                        format!("{value:.decimals$}"),
                        (j as f64, row_coord(rows, i)),
                        text_style,
                    )
                })
            }))
            .map_err(draw_err)?;
    }

    Ok(())
}

fn row_coord(rows: usize, i: usize) -> f64 {
    (rows - 1 - i) as f64
}

/// Tick label for an integer cell coordinate; ticks between cells stay blank.
fn axis_label(axis: &[f64], coord: f64, decimals: usize) -> String {
    let index = coord.round();
    if (coord - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    axis.get(index as usize)
        .map(|v| format!("{v:.decimals$}"))
        .unwrap_or_default()
}

fn annotation_font_size((width, height): (u32, u32), cells: usize) -> f64 {
    let cell = width.min(height) as f64 / (cells.max(1) + 2) as f64;
    (cell / 3.0).clamp(8.0, 16.0)
}

/// Renders the heatmap to an in-memory SVG document.
pub fn heatmap_svg_string(grid: &HeatmapGrid, style: &HeatmapStyle) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (style.width, style.height))
            .into_drawing_area();
        draw_heatmaps(&root, grid, style)?;
        root.present().map_err(draw_err)?;
    }
    Ok(svg)
}

/// Renders the heatmap to an SVG file at `path`.
pub fn write_heatmap_svg(
    path: impl AsRef<Path>,
    grid: &HeatmapGrid,
    style: &HeatmapStyle,
) -> Result<()> {
    let path = path.as_ref();
    {
        let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
        draw_heatmaps(&root, grid, style)?;
        root.present().map_err(draw_err)?;
    }
    info!(path = %path.display(), "heatmap written");
    Ok(())
}
