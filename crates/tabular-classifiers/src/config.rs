use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

/// Hyper-parameters handed to a model's `fit`.
///
/// A fresh record is built for every grid point; nothing mutates a shared
/// instance while a search is running.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ModelParams {
    /// L2 regularization strength.
    pub lambda: f64,
    /// Gradient-descent step size.
    pub gamma: f64,
    pub max_iters: usize,
    /// Starting weights. `None` starts from zeros.
    #[serde(default)]
    pub initial_w: Option<Vec<f64>>,
}

impl ModelParams {
    pub fn new(lambda: f64, gamma: f64, max_iters: usize) -> Self {
        Self {
            lambda,
            gamma,
            max_iters,
            initial_w: None,
        }
    }

    /// Copy of these parameters with `lambda` and `gamma` replaced.
    pub fn with_grid_point(&self, lambda: f64, gamma: f64) -> Self {
        Self {
            lambda,
            gamma,
            ..self.clone()
        }
    }
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            lambda: 0.0,
            gamma: 0.1,
            max_iters: 100,
            initial_w: None,
        }
    }
}

/// Settings for a cross-validated grid search.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SearchConfig {
    pub lambdas: Vec<f64>,
    pub gammas: Vec<f64>,
    #[serde(default = "default_k_folds")]
    pub k_folds: usize,
    /// Decision threshold for predictions made with the selected parameters.
    /// Cross-validation inside the search always scores at 0.5.
    #[serde(default = "default_prediction_threshold")]
    pub prediction_threshold: f64,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub base_params: ModelParams,
}

fn default_k_folds() -> usize {
    5
}

fn default_prediction_threshold() -> f64 {
    0.5
}

fn default_seed() -> u64 {
    1
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            lambdas: vec![1e-4, 1e-3, 1e-2],
            gammas: vec![0.01, 0.1, 0.5],
            k_folds: default_k_folds(),
            prediction_threshold: default_prediction_threshold(),
            seed: default_seed(),
            base_params: ModelParams::default(),
        }
    }
}

impl SearchConfig {
    /// Reject grids and fold counts that cannot produce a result.
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.lambdas.is_empty() || self.gammas.is_empty() {
            return Err(ClassifierError::EmptyGrid);
        }
        if self.k_folds == 0 {
            return Err(ClassifierError::InvalidSearchConfig("k_folds must be at least 1"));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SearchConfig =
            serde_json::from_str(json).context("Failed to parse search configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read search configuration: {}", path.display()))?;
        Self::from_json_str(&contents)
    }
}
