use ndarray::{Array1, Array2};

use crate::config::ModelParams;
use crate::error::Result;

/// Contract between the model-selection engine and a trainable linear model.
///
/// `fit` receives labels first and features second, and returns the learned
/// weight vector (one entry per column of `x`) together with the final
/// training loss. Predictions are made from the weights by
/// [`predict_logistic`](crate::models::logistic::predict_logistic), so any
/// model returning logistic-style weights can be cross-validated.
pub trait ClassifierModel {
    fn fit(
        &self,
        y: &Array1<f64>,
        x: &Array2<f64>,
        params: &ModelParams,
    ) -> Result<(Array1<f64>, f64)>;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}

impl<F> ClassifierModel for F
where
    F: Fn(&Array1<f64>, &Array2<f64>, &ModelParams) -> Result<(Array1<f64>, f64)>,
{
    fn fit(
        &self,
        y: &Array1<f64>,
        x: &Array2<f64>,
        params: &ModelParams,
    ) -> Result<(Array1<f64>, f64)> {
        self(y, x, params)
    }
}
