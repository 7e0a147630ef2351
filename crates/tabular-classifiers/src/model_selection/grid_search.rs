use ndarray::{Array1, Array2};
use rand::Rng;

use crate::config::ModelParams;
use crate::error::{ClassifierError, Result};
use crate::model_selection::cross_validation::{
    k_fold_cross_validation, CvScore, DEFAULT_THRESHOLD,
};
use crate::models::classifier_trait::ClassifierModel;

/// One evaluated (lambda, gamma) combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub lambda: f64,
    pub gamma: f64,
    pub score: CvScore,
}

#[derive(Debug, Clone)]
pub struct GridSearchResult {
    pub best: GridPoint,
    /// Every grid point in evaluation order (gamma outer, lambda inner).
    pub evaluations: Vec<GridPoint>,
}

impl GridSearchResult {
    /// `(best_lambda, best_gamma)`
    pub fn best_params(&self) -> (f64, f64) {
        (self.best.lambda, self.best.gamma)
    }
}

/// Exhaustive search over `gammas x lambdas` scored by k-fold cross-validation.
///
/// Gammas form the outer loop and lambdas the inner loop. A grid point
/// becomes the best one when both its F1 and its accuracy are greater than or
/// equal to the current best (which starts at 0 / 0), so among exact ties the
/// point evaluated last wins. Each point is cross-validated with a fresh copy
/// of `params` carrying that point's lambda and gamma, and logged at info
/// level.
///
/// # Errors
///
/// `EmptyGrid` when either candidate list is empty; any error from
/// [`k_fold_cross_validation`] is returned as is.
#[allow(clippy::too_many_arguments)]
pub fn hyperparameter_tuning<M, R>(
    x: &Array2<f64>,
    y: &Array1<f64>,
    model: &M,
    lambdas: &[f64],
    gammas: &[f64],
    params: &ModelParams,
    k: usize,
    rng: &mut R,
) -> Result<GridSearchResult>
where
    M: ClassifierModel + ?Sized,
    R: Rng + ?Sized,
{
    if lambdas.is_empty() || gammas.is_empty() {
        return Err(ClassifierError::EmptyGrid);
    }

    let mut best_accuracy = 0.0;
    let mut best_f1 = 0.0;
    let mut best: Option<GridPoint> = None;
    let mut evaluations = Vec::with_capacity(lambdas.len() * gammas.len());

    for &gamma in gammas {
        for &lambda in lambdas {
            let point_params = params.with_grid_point(lambda, gamma);
            let score =
                k_fold_cross_validation(x, y, model, k, &point_params, DEFAULT_THRESHOLD, rng)?;
            let point = GridPoint {
                lambda,
                gamma,
                score,
            };

            if score.f1 >= best_f1 && score.accuracy >= best_accuracy {
                best_accuracy = score.accuracy;
                best_f1 = score.f1;
                best = Some(point);
            }

            log::info!(
                " lambda= {}, gamma= {}, CV accuracy = {:.4}, f1_score = {:.4}",
                lambda,
                gamma,
                score.accuracy,
                score.f1
            );
            evaluations.push(point);
        }
    }

    // Scores are never negative, so the first grid point always sets `best`.
    let best = best.ok_or(ClassifierError::EmptyGrid)?;
    log::info!(
        "Best grid point: lambda= {}, gamma= {} (accuracy = {:.4}, f1_score = {:.4})",
        best.lambda,
        best.gamma,
        best.score.accuracy,
        best.score.f1
    );

    Ok(GridSearchResult { best, evaluations })
}
