//! Column statistics used by cleaning and feature selection.

use ndarray::{Array1, Array2, ArrayView1, Axis};
use statrs::statistics::{Data, Median, Statistics};

/// Mean of the non-NaN entries, NaN when every entry is missing.
pub fn nan_mean(values: ArrayView1<f64>) -> f64 {
    let present: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if present.is_empty() {
        return f64::NAN;
    }
    present.mean()
}

/// Median of the non-NaN entries, NaN when every entry is missing.
pub fn nan_median(values: ArrayView1<f64>) -> f64 {
    let present: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if present.is_empty() {
        return f64::NAN;
    }
    Data::new(present).median()
}

/// Per-column `nan_mean`.
pub fn column_nan_means(x: &Array2<f64>) -> Array1<f64> {
    x.axis_iter(Axis(1)).map(nan_mean).collect()
}

/// Per-column `nan_median`.
pub fn column_nan_medians(x: &Array2<f64>) -> Array1<f64> {
    x.axis_iter(Axis(1)).map(nan_median).collect()
}

/// Pearson's r between two equally long vectors.
///
/// NaN when either side is constant or contains NaN.
pub fn pearson(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    assert_eq!(a.len(), b.len(), "pearson requires vectors of equal lengths");
    let covariance = a.iter().covariance(b.iter());
    let std_a = a.iter().std_dev();
    let std_b = b.iter().std_dev();
    covariance / (std_a * std_b)
}

/// Pairwise Pearson correlation between the columns of `x` (D×D, symmetric).
pub fn correlation_matrix(x: &Array2<f64>) -> Array2<f64> {
    let n_features = x.ncols();
    let mut corr = Array2::<f64>::zeros((n_features, n_features));

    for i in 0..n_features {
        for j in i..n_features {
            let r = pearson(x.column(i), x.column(j));
            corr[[i, j]] = r;
            corr[[j, i]] = r;
        }
    }

    corr
}
