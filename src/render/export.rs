use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::grid::HeatmapGrid;

pub const CSV_HEADER: [&str; 4] = ["volatility", "spot_price", "call", "put"];

/// Writes the grid in long form: one record per cell, volatility-outer order.
pub fn write_grid_csv<W: io::Write>(writer: W, grid: &HeatmapGrid) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for (vol, spot, call, put) in grid.cells() {
        wtr.write_record([
            vol.to_string(),
            spot.to_string(),
            call.to_string(),
            put.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_grid_csv_file(path: impl AsRef<Path>, grid: &HeatmapGrid) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_grid_csv(file, grid)?;
    info!(path = %path.display(), rows = grid.call_matrix.len(), "grid exported");
    Ok(())
}
