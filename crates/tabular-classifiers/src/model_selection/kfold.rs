use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{ClassifierError, Result};

/// One train/test partition of the sample indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fold {
    /// Ascending; the exact complement of `test` within `0..n_samples`.
    pub train: Vec<usize>,
    /// In shuffle order.
    pub test: Vec<usize>,
}

/// Shuffle `0..n_samples` and cut it into `k` test blocks of `n_samples / k`.
///
/// Fold `i` tests `shuffled[i * fold_size..(i + 1) * fold_size]` and trains on
/// every other index. When `k` does not divide `n_samples`, the last
/// `n_samples % k` shuffled indices are never tested and appear in every
/// fold's training set.
///
/// # Errors
///
/// `InvalidFoldCount` when `k == 0` or `k > n_samples`.
pub fn k_fold_indices<R: Rng + ?Sized>(
    n_samples: usize,
    k: usize,
    rng: &mut R,
) -> Result<Vec<Fold>> {
    if k == 0 || k > n_samples {
        return Err(ClassifierError::InvalidFoldCount { k, n_samples });
    }

    let mut indices: Vec<usize> = (0..n_samples).collect();
    indices.shuffle(rng);
    let fold_size = n_samples / k;

    let folds = (0..k)
        .map(|i| {
            let test = indices[i * fold_size..(i + 1) * fold_size].to_vec();

            let mut in_test = vec![false; n_samples];
            for &idx in &test {
                in_test[idx] = true;
            }
            let train = (0..n_samples).filter(|&idx| !in_test[idx]).collect();

            Fold { train, test }
        })
        .collect();

    Ok(folds)
}
