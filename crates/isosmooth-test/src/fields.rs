//! Deterministic synthetic fields for tests

use ndarray::Array2;

/// Field with every sample set to `value`
pub fn flat(rows: usize, cols: usize, value: f64) -> Array2<f64> {
    Array2::from_elem((rows, cols), value)
}

/// Field of `base` with a single `peak` sample at `at = (row, col)`
pub fn spike(rows: usize, cols: usize, at: (usize, usize), base: f64, peak: f64) -> Array2<f64> {
    let mut field = flat(rows, cols, base);
    field[at] = peak;
    field
}

/// Linear ramp `a * row + b * col`
pub fn ramp(rows: usize, cols: usize, a: f64, b: f64) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |(r, c)| a * r as f64 + b * c as f64)
}

/// Square field holding `inside` within `radius` of the centre, `outside` elsewhere
pub fn disc(size: usize, radius: f64, inside: f64, outside: f64) -> Array2<f64> {
    let centre = (size as f64 - 1.0) / 2.0;
    Array2::from_shape_fn((size, size), |(r, c)| {
        let dr = r as f64 - centre;
        let dc = c as f64 - centre;
        if (dr * dr + dc * dc).sqrt() <= radius {
            inside
        } else {
            outside
        }
    })
}

/// Uniform pseudo-noise in `[-amplitude, amplitude]`, reproducible per `seed`
pub fn noisy(rows: usize, cols: usize, amplitude: f64, seed: u64) -> Array2<f64> {
    let mut state = seed ^ 0x9e37_79b9_7f4a_7c15;
    Array2::from_shape_fn((rows, cols), |_| {
        // splitmix64
        state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^= z >> 31;
        let unit = (z >> 11) as f64 / (1u64 << 53) as f64;
        amplitude * (2.0 * unit - 1.0)
    })
}
