use ndarray::{Array1, Array2};

use crate::config::ModelParams;
use crate::error::{ensure_same_len, Result};
use crate::models::classifier_trait::ClassifierModel;

/// Logistic function `1 / (1 + e^-z)`, evaluated without overflow for large |z|.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// `ln(1 + e^z)` without overflow.
fn softplus(z: f64) -> f64 {
    z.max(0.0) + (-z.abs()).exp().ln_1p()
}

/// Binary predictions: 1.0 where `sigmoid(x . w) >= threshold`, else 0.0.
pub fn predict_logistic(x: &Array2<f64>, w: &Array1<f64>, threshold: f64) -> Result<Array1<f64>> {
    ensure_same_len("predict_logistic weights", x.ncols(), w.len())?;
    Ok(x.dot(w)
        .mapv(|z| if sigmoid(z) >= threshold { 1.0 } else { 0.0 }))
}

/// Mean negative log-likelihood of the logistic model (no penalty term).
pub fn logistic_loss(y: &Array1<f64>, x: &Array2<f64>, w: &Array1<f64>) -> Result<f64> {
    ensure_same_len("logistic_loss labels", x.nrows(), y.len())?;
    ensure_same_len("logistic_loss weights", x.ncols(), w.len())?;
    if y.is_empty() {
        return Ok(0.0);
    }

    let z = x.dot(w);
    let total: f64 = z
        .iter()
        .zip(y.iter())
        .map(|(&zi, &yi)| softplus(zi) - yi * zi)
        .sum();

    Ok(total / y.len() as f64)
}

/// L2-regularized logistic regression trained by full-batch gradient descent.
///
/// Minimizes `logistic_loss + lambda * ||w||^2` for `max_iters` steps of size
/// `gamma`. The reported loss excludes the penalty.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegLogisticRegression;

impl RegLogisticRegression {
    pub fn new() -> Self {
        RegLogisticRegression
    }

    fn gradient(y: &Array1<f64>, x: &Array2<f64>, w: &Array1<f64>, lambda: f64) -> Array1<f64> {
        let n = y.len().max(1) as f64;
        let residual = x.dot(w).mapv(sigmoid) - y;
        x.t().dot(&residual) / n + w * (2.0 * lambda)
    }
}

impl ClassifierModel for RegLogisticRegression {
    fn fit(
        &self,
        y: &Array1<f64>,
        x: &Array2<f64>,
        params: &ModelParams,
    ) -> Result<(Array1<f64>, f64)> {
        ensure_same_len("reg_logistic_regression labels", x.nrows(), y.len())?;

        let mut w = match &params.initial_w {
            Some(initial) => {
                ensure_same_len("reg_logistic_regression initial_w", x.ncols(), initial.len())?;
                Array1::from_vec(initial.clone())
            }
            None => Array1::zeros(x.ncols()),
        };

        for iter in 0..params.max_iters {
            let grad = Self::gradient(y, x, &w, params.lambda);
            w = w - grad * params.gamma;
            if log::log_enabled!(log::Level::Trace) && iter % 100 == 0 {
                log::trace!("iter {}: loss = {:.6}", iter, logistic_loss(y, x, &w)?);
            }
        }

        let loss = logistic_loss(y, x, &w)?;
        Ok((w, loss))
    }

    fn name(&self) -> &str {
        "reg_logistic_regression"
    }
}
