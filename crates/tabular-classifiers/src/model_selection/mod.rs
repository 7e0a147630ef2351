//! Fold partitioning, k-fold cross-validation and grid search.
//!
//! Nothing here owns a random generator: every call that shuffles takes a
//! `&mut R: Rng`, so a seeded `StdRng` makes fold assignment reproducible.
pub mod cross_validation;
pub mod grid_search;
pub mod kfold;

pub use cross_validation::{
    cross_validate_folds, k_fold_cross_validation, CvScore, FoldScore, DEFAULT_THRESHOLD,
};
pub use grid_search::{hyperparameter_tuning, GridPoint, GridSearchResult};
pub use kfold::{k_fold_indices, Fold};
