//! Removal of columns dominated by missing values.
//!
//! Survey-style data encodes "refused" / "don't know" answers with numeric
//! codes such as 77 or 9999 next to genuine NaNs. A column where those make up
//! at least the threshold fraction of rows carries too little signal to be
//! worth imputing and is dropped instead.

use ndarray::{Array2, ArrayView1, Axis};

/// Numeric codes treated as missing, grouped by digit count (77/99, 777/999, ...).
pub const SENTINEL_CODES: [f64; 8] = [
    77.0, 99.0, 777.0, 999.0, 7777.0, 9999.0, 777777.0, 999999.0,
];

/// Fraction of missing rows at which `reduced_data` drops a column by default.
pub const DEFAULT_SENTINEL_THRESHOLD: f64 = 0.6;

/// True for NaN and for any of the `SENTINEL_CODES`.
pub fn is_missing(value: f64) -> bool {
    value.is_nan() || SENTINEL_CODES.contains(&value)
}

fn missing_count(column: ArrayView1<f64>) -> usize {
    let num_nan = column.iter().filter(|v| v.is_nan()).count();
    let num_sentinel: usize = SENTINEL_CODES
        .iter()
        .map(|&code| column.iter().filter(|&&v| v == code).count())
        .sum();
    num_nan + num_sentinel
}

/// Indices (ascending) of the columns whose missing fraction is `>= t`.
pub fn columns_to_remove(x: &Array2<f64>, t: f64) -> Vec<usize> {
    let n_rows = x.nrows() as f64;

    x.axis_iter(Axis(1))
        .enumerate()
        .filter_map(|(j, column)| {
            let fraction = missing_count(column) as f64 / n_rows;
            if fraction >= t {
                log::trace!("Dropping column {} ({:.1}% missing)", j, fraction * 100.0);
                Some(j)
            } else {
                None
            }
        })
        .collect()
}

/// Copy of `x` without the columns reported by `columns_to_remove(x, t)`.
pub fn reduced_data(x: &Array2<f64>, t: f64) -> Array2<f64> {
    let remove = columns_to_remove(x, t);
    let keep: Vec<usize> = (0..x.ncols()).filter(|j| !remove.contains(j)).collect();
    log::debug!(
        "Sentinel filter kept {} of {} columns",
        keep.len(),
        x.ncols()
    );
    x.select(Axis(1), &keep)
}
