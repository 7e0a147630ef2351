//! Pairwise-correlation pruning with a reusable drop mask.
//!
//! The mask is computed on training data only. Applying it to test data with
//! `drop_test_correlated_features` keeps both matrices in the same feature
//! space without letting the test set influence which columns survive.

use ndarray::{Array2, Axis};

use crate::error::{ensure_same_len, Result};
use crate::stats::correlation_matrix;

/// Absolute correlation above which the later column of a pair is dropped.
pub const DEFAULT_CORRELATION_THRESHOLD: f64 = 0.95;

/// Per-column drop markers, sized to the column count of the matrix it was fitted on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropMask {
    drop: Vec<bool>,
}

impl DropMask {
    pub fn new(drop: Vec<bool>) -> Self {
        Self { drop }
    }

    /// Number of columns of the matrix the mask was built for.
    pub fn len(&self) -> usize {
        self.drop.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drop.is_empty()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.drop
    }

    pub fn dropped_columns(&self) -> Vec<usize> {
        self.drop
            .iter()
            .enumerate()
            .filter_map(|(j, &d)| d.then_some(j))
            .collect()
    }

    pub fn kept_columns(&self) -> Vec<usize> {
        self.drop
            .iter()
            .enumerate()
            .filter_map(|(j, &d)| (!d).then_some(j))
            .collect()
    }

    /// Keep the unmasked columns of `x`; `x` must have exactly `len()` columns.
    pub fn apply(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        ensure_same_len("drop mask columns", self.drop.len(), x.ncols())?;
        Ok(x.select(Axis(1), &self.kept_columns()))
    }
}

/// Drop columns that are highly correlated with an earlier column.
///
/// For every pair `i < j` with `|corr(i, j)| > threshold`, column `j` is
/// marked; the lower-indexed column of a pair is always the one kept.
/// A NaN correlation (constant column, or NaN entries) never marks a column.
///
/// # Returns
///
/// The reduced matrix and the mask that produced it.
pub fn drop_highly_correlated_features(x: &Array2<f64>, threshold: f64) -> (Array2<f64>, DropMask) {
    let corr = correlation_matrix(x);
    let n_features = corr.nrows();
    let mut drop = vec![false; n_features];

    for i in 0..n_features {
        for j in (i + 1)..n_features {
            if corr[[i, j]].abs() > threshold {
                log::trace!(
                    "Column {} correlates with column {} (r = {:.4}), dropping {}",
                    j,
                    i,
                    corr[[i, j]],
                    j
                );
                drop[j] = true;
            }
        }
    }

    let mask = DropMask::new(drop);
    let reduced = x.select(Axis(1), &mask.kept_columns());
    log::debug!(
        "Correlation filter kept {} of {} columns",
        reduced.ncols(),
        n_features
    );

    (reduced, mask)
}

/// Apply a mask fitted on training data to a test matrix.
pub fn drop_test_correlated_features(x_test: &Array2<f64>, mask: &DropMask) -> Result<Array2<f64>> {
    mask.apply(x_test)
}
