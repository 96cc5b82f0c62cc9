//! Roughness measures used to check smoothing monotonicity

use ndarray::ArrayView2;

/// Anisotropic total variation: sum of absolute forward differences
pub fn total_variation(field: ArrayView2<'_, f64>) -> f64 {
    let (rows, cols) = field.dim();
    let mut tv = 0.0;
    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                tv += (field[[r, c + 1]] - field[[r, c]]).abs();
            }
            if r + 1 < rows {
                tv += (field[[r + 1, c]] - field[[r, c]]).abs();
            }
        }
    }
    tv
}

/// Sum of squared 5-point Laplacians over interior samples
pub fn laplacian_energy(field: ArrayView2<'_, f64>) -> f64 {
    let (rows, cols) = field.dim();
    let mut energy = 0.0;
    for r in 1..rows.saturating_sub(1) {
        for c in 1..cols.saturating_sub(1) {
            let lap = field[[r - 1, c]] + field[[r + 1, c]] + field[[r, c - 1]] + field[[r, c + 1]]
                - 4.0 * field[[r, c]];
            energy += lap * lap;
        }
    }
    energy
}
