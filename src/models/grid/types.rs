/// Inclusive range along one heatmap axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range of `±fraction` around `center`, e.g. spot prices around a strike.
    pub fn around(center: f64, fraction: f64) -> Self {
        Self {
            min: center * (1.0 - fraction),
            max: center * (1.0 + fraction),
        }
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Default number of points along each heatmap axis.
pub const DEFAULT_RESOLUTION: usize = 10;

/// Arguments of a grid evaluation: the fixed contract terms plus the two
/// swept axes.
///
/// # Example
///
/// ```rust
/// # use bs_heatmap::{AxisRange, GridSpec};
/// let spec = GridSpec::new(100.0, 1.0, 0.05, AxisRange::new(60.0, 90.0), AxisRange::new(0.18, 0.30));
/// assert_eq!(spec.resolution, 10);
/// let fine = spec.with_resolution(25);
/// assert_eq!(fine.resolution, 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    pub strike_price: f64,
    pub time_to_maturity: f64,
    pub risk_free_rate: f64,
    pub spot_range: AxisRange,
    pub volatility_range: AxisRange,
    /// Points per axis; the grid holds `resolution²` cells
    pub resolution: usize,
}

impl GridSpec {
    pub fn new(
        strike_price: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        spot_range: AxisRange,
        volatility_range: AxisRange,
    ) -> Self {
        Self {
            strike_price,
            time_to_maturity,
            risk_free_rate,
            spot_range,
            volatility_range,
            resolution: DEFAULT_RESOLUTION,
        }
    }

    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }
}

/// Call and put prices over the cartesian product of a spot axis and a
/// volatility axis.
///
/// Matrices are indexed `[volatility_index][spot_index]`: row `i` belongs to
/// `volatility_axis[i]`, column `j` to `spot_axis[j]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatmapGrid {
    pub spot_axis: Vec<f64>,
    pub volatility_axis: Vec<f64>,
    pub call_matrix: Vec<Vec<f64>>,
    pub put_matrix: Vec<Vec<f64>>,
}

impl HeatmapGrid {
    /// `(rows, cols)` = `(len(volatility_axis), len(spot_axis))`.
    pub fn shape(&self) -> (usize, usize) {
        (self.volatility_axis.len(), self.spot_axis.len())
    }

    pub fn call_at(&self, vol_index: usize, spot_index: usize) -> Option<f64> {
        self.call_matrix.get(vol_index)?.get(spot_index).copied()
    }

    pub fn put_at(&self, vol_index: usize, spot_index: usize) -> Option<f64> {
        self.put_matrix.get(vol_index)?.get(spot_index).copied()
    }

    /// Smallest and largest value across both matrices, for a shared colour
    /// scale. `None` for an empty grid.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.call_matrix
            .iter()
            .chain(self.put_matrix.iter())
            .flatten()
            .copied()
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Iterates `(volatility, spot, call, put)` in volatility-outer order.
    pub fn cells(&self) -> impl Iterator<Item = (f64, f64, f64, f64)> + '_ {
        self.volatility_axis
            .iter()
            .enumerate()
            .flat_map(move |(i, &vol)| {
                self.spot_axis.iter().enumerate().map(move |(j, &spot)| {
                    (vol, spot, self.call_matrix[i][j], self.put_matrix[i][j])
                })
            })
    }
}
