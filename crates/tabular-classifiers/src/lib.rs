//! tabular-classifiers: model selection for binary classifiers on tabular data.
//!
//! This crate provides cleaning and imputation helpers, feature selection for
//! columns dominated by missing/sentinel values or redundant through high
//! correlation, an L2-regularized logistic regression, k-fold
//! cross-validation and a (lambda, gamma) grid search, plus the accuracy and
//! F1 metrics they report.
//!
//! Randomness is always injected: operations that shuffle take a
//! `&mut impl rand::Rng` instead of reading a global generator.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod feature_selection;
pub mod io;
pub mod metrics;
pub mod model_selection;
pub mod models;
pub mod preprocessing;
pub mod stats;

pub use error::{ClassifierError, Result};
