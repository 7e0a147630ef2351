//! Binary classification metrics.
//!
//! Labels and predictions are `0.0`/`1.0` arrays. Every metric returns a
//! number for degenerate inputs (no positives, no predictions); only a length
//! mismatch between the two arrays is an error.

use ndarray::Array1;

use crate::error::{ensure_same_len, Result};

/// Confusion-matrix counts for a binary problem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionCounts {
    pub tp: usize,
    pub fp: usize,
    pub tn: usize,
    pub fn_: usize,
}

impl ConfusionCounts {
    /// TP / (TP + FP), or 0 when nothing was predicted positive.
    pub fn precision(&self) -> f64 {
        let denom = self.tp + self.fp;
        if denom == 0 {
            0.0
        } else {
            self.tp as f64 / denom as f64
        }
    }

    /// TP / (TP + FN), or 0 when there are no positive labels.
    pub fn recall(&self) -> f64 {
        let denom = self.tp + self.fn_;
        if denom == 0 {
            0.0
        } else {
            self.tp as f64 / denom as f64
        }
    }

    pub fn f1(&self) -> f64 {
        let precision = self.precision();
        let recall = self.recall();
        if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        }
    }
}

/// Count TP, FP, TN and FN by walking both arrays pairwise.
///
/// Pairs where either value is not 0 or 1 are not counted.
pub fn calculate_metrics(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> Result<ConfusionCounts> {
    ensure_same_len("calculate_metrics", y_true.len(), y_pred.len())?;

    let mut counts = ConfusionCounts::default();
    for (&yt, &yp) in y_true.iter().zip(y_pred.iter()) {
        if yt == 1.0 && yp == 1.0 {
            counts.tp += 1;
        } else if yt == 0.0 && yp == 1.0 {
            counts.fp += 1;
        } else if yt == 1.0 && yp == 0.0 {
            counts.fn_ += 1;
        } else if yt == 0.0 && yp == 0.0 {
            counts.tn += 1;
        }
    }

    Ok(counts)
}

/// F1 score of `y_pred` against `y_true`.
pub fn compute_f1(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> Result<f64> {
    ensure_same_len("compute_f1", y_true.len(), y_pred.len())?;
    Ok(calculate_metrics(y_true, y_pred)?.f1())
}

/// Fraction of positions where prediction and label agree. Empty input scores 0.
pub fn accuracy(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> Result<f64> {
    ensure_same_len("accuracy", y_true.len(), y_pred.len())?;
    if y_true.is_empty() {
        return Ok(0.0);
    }

    let matches = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(yt, yp)| yt == yp)
        .count();

    Ok(matches as f64 / y_true.len() as f64)
}
