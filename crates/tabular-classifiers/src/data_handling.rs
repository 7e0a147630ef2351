//! Sample/label containers and train/test splitting.
use ndarray::{Array1, Array2, Axis};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{ensure_same_len, ClassifierError, Result};

/// Feature matrix with its aligned label vector.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub x: Array2<f64>,
    pub y: Array1<f64>,
}

impl Dataset {
    pub fn new(x: Array2<f64>, y: Array1<f64>) -> Result<Self> {
        ensure_same_len("dataset labels", x.nrows(), y.len())?;
        Ok(Dataset { x, y })
    }

    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    /// Rows at `indices`, in that order.
    pub fn select(&self, indices: &[usize]) -> Dataset {
        Dataset {
            x: self.x.select(Axis(0), indices),
            y: self.y.select(Axis(0), indices),
        }
    }

    /// Number of samples labelled 1.0.
    pub fn n_positives(&self) -> usize {
        self.y.iter().filter(|&&v| v == 1.0).count()
    }

    /// Copy with rows and labels reordered by one random permutation.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Dataset {
        let mut permutation: Vec<usize> = (0..self.n_samples()).collect();
        permutation.shuffle(rng);
        self.select(&permutation)
    }

    pub fn log_summary(&self) {
        let positives = self.n_positives();
        log::info!(
            "{} samples ({} positive, {} other), {} features",
            self.n_samples(),
            positives,
            self.n_samples() - positives,
            self.n_features()
        );
    }
}

/// Result of `split_data`.
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    pub x_train: Array2<f64>,
    pub x_test: Array2<f64>,
    pub y_train: Array1<f64>,
    pub y_test: Array1<f64>,
}

/// Shuffle `x` rows and `y` with one shared permutation.
pub fn unison_shuffled_copies<R: Rng + ?Sized>(
    x: &Array2<f64>,
    y: &Array1<f64>,
    rng: &mut R,
) -> Result<(Array2<f64>, Array1<f64>)> {
    let shuffled = Dataset::new(x.to_owned(), y.to_owned())?.shuffled(rng);
    Ok((shuffled.x, shuffled.y))
}

/// Shuffle and split into train/test parts.
///
/// The first `round(n * ratio)` shuffled samples form the training part.
///
/// # Errors
///
/// `InvalidRatio` when `ratio` is outside `[0, 1]`, `LengthMismatch` when
/// `x` and `y` disagree on the number of samples.
pub fn split_data<R: Rng + ?Sized>(
    x: &Array2<f64>,
    y: &Array1<f64>,
    ratio: f64,
    rng: &mut R,
) -> Result<TrainTestSplit> {
    if !(0.0..=1.0).contains(&ratio) {
        return Err(ClassifierError::InvalidRatio(ratio));
    }

    let shuffled = Dataset::new(x.to_owned(), y.to_owned())?.shuffled(rng);
    let split_pos = (shuffled.n_samples() as f64 * ratio).round() as usize;

    let train: Vec<usize> = (0..split_pos).collect();
    let test: Vec<usize> = (split_pos..shuffled.n_samples()).collect();
    let train = shuffled.select(&train);
    let test = shuffled.select(&test);

    Ok(TrainTestSplit {
        x_train: train.x,
        x_test: test.x,
        y_train: train.y,
        y_test: test.y,
    })
}
