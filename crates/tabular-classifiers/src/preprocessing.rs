//! Cleaning helpers: imputation, standardization and the `clean_*` pipelines.
//!
//! Every function takes the input by reference and returns a new array; the
//! caller's buffer is never modified.

use ndarray::{s, Array1, Array2, Axis};

use crate::stats::{column_nan_means, column_nan_medians};

/// Added to the column std so zero-variance columns map to 0 instead of NaN.
pub const NORMALIZE_EPS: f64 = 10e-300;

/// Per-column mean/std computed on one matrix, reusable on another.
#[derive(Clone, Debug)]
pub struct Scaler {
    pub mean: Array1<f64>,
    pub std: Array1<f64>,
}

impl Scaler {
    /// Population mean and std of every column.
    pub fn fit(x: &Array2<f64>) -> Self {
        let n_features = x.ncols();
        let mean = x
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::from_elem(n_features, f64::NAN));
        let std = x.std_axis(Axis(0), 0.0);
        Scaler { mean, std }
    }

    pub fn transform(&self, x: &Array2<f64>) -> Array2<f64> {
        let denom = self.std.mapv(|s| s + NORMALIZE_EPS);
        (x - &self.mean) / &denom
    }
}

/// Standardize every column to zero mean and unit variance.
pub fn normalize(x: &Array2<f64>) -> Array2<f64> {
    Scaler::fit(x).transform(x)
}

/// Replace NaN entries with 0.
pub fn impute_zero(x: &Array2<f64>) -> Array2<f64> {
    x.mapv(|v| if v.is_nan() { 0.0 } else { v })
}

/// Replace NaN entries with their column's mean. All-NaN columns become 0.
pub fn impute_mean(x: &Array2<f64>) -> Array2<f64> {
    fill_by_column(x, &column_nan_means(x))
}

/// Replace NaN entries with their column's median. All-NaN columns become 0.
pub fn impute_median(x: &Array2<f64>) -> Array2<f64> {
    fill_by_column(x, &column_nan_medians(x))
}

fn fill_by_column(x: &Array2<f64>, fill: &Array1<f64>) -> Array2<f64> {
    let mut out = x.to_owned();
    for (mut column, &value) in out.axis_iter_mut(Axis(1)).zip(fill.iter()) {
        let value = if value.is_nan() { 0.0 } else { value };
        column.mapv_inplace(|v| if v.is_nan() { value } else { v });
    }
    out
}

fn drop_id_column(x: &Array2<f64>) -> Array2<f64> {
    if x.ncols() == 0 {
        return x.to_owned();
    }
    x.slice(s![.., 1..]).to_owned()
}

fn prepend_bias(x: &Array2<f64>) -> Array2<f64> {
    let mut out = Array2::<f64>::ones((x.nrows(), x.ncols() + 1));
    out.slice_mut(s![.., 1..]).assign(x);
    out
}

/// Drop the id column, zero-fill NaNs, normalize, prepend a column of ones.
pub fn clean_x_zero(data: &Array2<f64>) -> Array2<f64> {
    let x = impute_zero(&drop_id_column(data));
    prepend_bias(&normalize(&x))
}

/// Drop the id column, mean-fill NaNs, normalize, prepend a column of ones.
pub fn clean_x_mean(data: &Array2<f64>) -> Array2<f64> {
    let x = impute_mean(&drop_id_column(data));
    prepend_bias(&normalize(&x))
}

/// Drop the id column, median-fill NaNs and normalize. No bias column is added.
pub fn clean_x_median(data: &Array2<f64>) -> Array2<f64> {
    let x = impute_median(&drop_id_column(data));
    normalize(&x)
}

/// Take the label column (index 1) of an `[id, label]` matrix and map -1 to 0.
pub fn clean_y(y_data: &Array2<f64>) -> Array1<f64> {
    assert!(
        y_data.ncols() >= 2,
        "clean_y expects an [id, label] matrix with at least two columns"
    );
    y_data
        .column(1)
        .mapv(|v| if v == -1.0 { 0.0 } else { v })
}
