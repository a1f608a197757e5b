use plotters::style::RGBColor;

// Samples of the matplotlib "magma" map at t = 0, 1/8, ..., 1.
const MAGMA: [(u8, u8, u8); 9] = [
    (0, 0, 4),
    (28, 16, 68),
    (79, 18, 123),
    (129, 37, 129),
    (181, 54, 122),
    (229, 80, 100),
    (251, 135, 97),
    (254, 194, 135),
    (252, 253, 191),
];

/// Magma colour for `t` in `[0, 1]`; values outside are clamped and NaN maps
/// to the low end.
pub fn magma(t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (MAGMA.len() - 1) as f64;
    let lo = (scaled.floor() as usize).min(MAGMA.len() - 2);
    let frac = scaled - lo as f64;

    let (r0, g0, b0) = MAGMA[lo];
    let (r1, g1, b1) = MAGMA[lo + 1];
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    RGBColor(mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

/// Position of `value` within `[lo, hi]`; a flat range maps to the midpoint.
pub fn normalize(value: f64, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        (value - lo) / (hi - lo)
    } else {
        0.5
    }
}
