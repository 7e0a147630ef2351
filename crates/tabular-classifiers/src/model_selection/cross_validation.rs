use ndarray::{Array1, Array2, Axis};
use rand::Rng;

use crate::config::ModelParams;
use crate::error::{ensure_same_len, Result};
use crate::metrics::{accuracy, compute_f1};
use crate::model_selection::kfold::k_fold_indices;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::logistic::predict_logistic;

/// Probability cut-off used to turn model scores into labels.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Mean accuracy and F1 over all folds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CvScore {
    pub accuracy: f64,
    pub f1: f64,
}

/// Scores of a single fold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldScore {
    pub accuracy: f64,
    pub f1: f64,
    /// Training loss reported by the model.
    pub loss: f64,
}

/// Train and score `model` on each of `k` folds.
///
/// Fold assignment comes from [`k_fold_indices`] and consumes `rng`.
/// Predictions use [`predict_logistic`] with `threshold`.
pub fn cross_validate_folds<M, R>(
    x: &Array2<f64>,
    y: &Array1<f64>,
    model: &M,
    k: usize,
    params: &ModelParams,
    threshold: f64,
    rng: &mut R,
) -> Result<Vec<FoldScore>>
where
    M: ClassifierModel + ?Sized,
    R: Rng + ?Sized,
{
    ensure_same_len("k_fold_cross_validation labels", x.nrows(), y.len())?;
    let folds = k_fold_indices(x.nrows(), k, rng)?;

    let mut scores = Vec::with_capacity(folds.len());
    for (i, fold) in folds.iter().enumerate() {
        let x_train = x.select(Axis(0), &fold.train);
        let y_train = y.select(Axis(0), &fold.train);
        let x_test = x.select(Axis(0), &fold.test);
        let y_test = y.select(Axis(0), &fold.test);

        let (w, loss) = model.fit(&y_train, &x_train, params)?;
        let y_pred = predict_logistic(&x_test, &w, threshold)?;

        let score = FoldScore {
            accuracy: accuracy(&y_test, &y_pred)?,
            f1: compute_f1(&y_test, &y_pred)?,
            loss,
        };
        log::debug!(
            "{} fold {}/{}: accuracy = {:.4}, f1 = {:.4}, loss = {:.6}",
            model.name(),
            i + 1,
            k,
            score.accuracy,
            score.f1,
            score.loss
        );
        scores.push(score);
    }

    Ok(scores)
}

/// Mean accuracy and F1 of `model` under k-fold cross-validation.
///
/// # Arguments
///
/// * `x` - Samples, one row each.
/// * `y` - 0/1 labels aligned with the rows of `x`.
/// * `model` - Trained once per fold on that fold's training rows.
/// * `k` - Number of folds, `1 <= k <= x.nrows()`.
/// * `params` - Passed unchanged to every `fit`.
/// * `threshold` - Probability cut-off for positive predictions.
/// * `rng` - Source of the fold shuffle.
pub fn k_fold_cross_validation<M, R>(
    x: &Array2<f64>,
    y: &Array1<f64>,
    model: &M,
    k: usize,
    params: &ModelParams,
    threshold: f64,
    rng: &mut R,
) -> Result<CvScore>
where
    M: ClassifierModel + ?Sized,
    R: Rng + ?Sized,
{
    let scores = cross_validate_folds(x, y, model, k, params, threshold, rng)?;
    let n = scores.len() as f64;

    Ok(CvScore {
        accuracy: scores.iter().map(|s| s.accuracy).sum::<f64>() / n,
        f1: scores.iter().map(|s| s.f1).sum::<f64>() / n,
    })
}
