//! Presentation of prices and heatmap grids
//!
//! - [`heatmap`]: two-panel call/put heatmap as SVG
//! - [`summary`]: text table of the inputs and the headline prices
//! - [`export`]: CSV dump of a grid

pub mod colormap;
pub mod export;
pub mod heatmap;
pub mod summary;

pub use export::{write_grid_csv, write_grid_csv_file};
pub use heatmap::{draw_heatmaps, heatmap_svg_string, write_heatmap_svg, HeatmapStyle};
pub use summary::{price_panels, summary_table};
