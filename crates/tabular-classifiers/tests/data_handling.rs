//! Integration tests for Dataset construction, shuffling and splitting.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tabular_classifiers::data_handling::{split_data, unison_shuffled_copies, Dataset};
use tabular_classifiers::ClassifierError;

/// Row i holds (i, 10 * i) with label i.
fn indexed(n: usize) -> (Array2<f64>, Array1<f64>) {
    let x = Array2::from_shape_fn((n, 2), |(r, c)| if c == 0 { r as f64 } else { 10.0 * r as f64 });
    let y = Array1::from_shape_fn(n, |i| i as f64);
    (x, y)
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

#[test]
fn dataset_new_valid() {
    let (x, y) = indexed(4);
    let ds = Dataset::new(x, y).unwrap();
    assert_eq!(ds.n_samples(), 4);
    assert_eq!(ds.n_features(), 2);
}

#[test]
fn dataset_new_dimension_mismatch() {
    let (x, _) = indexed(4);
    let result = Dataset::new(x, Array1::zeros(3));
    assert!(matches!(result, Err(ClassifierError::LengthMismatch { .. })));
}

#[test]
fn dataset_select_keeps_rows_aligned() {
    let (x, y) = indexed(5);
    let ds = Dataset::new(x, y).unwrap().select(&[4, 1]);
    assert_eq!(ds.y.to_vec(), vec![4.0, 1.0]);
    assert_eq!(ds.x.row(0).to_vec(), vec![4.0, 40.0]);
}

#[test]
fn dataset_counts_positive_labels() {
    let x = Array2::zeros((5, 1));
    let y = Array1::from(vec![1.0, 0.0, 1.0, 0.0, 1.0]);
    let ds = Dataset::new(x, y).unwrap();
    assert_eq!(ds.n_positives(), 3);
    ds.log_summary();
}

#[test]
fn dataset_shuffle_matches_unison_shuffle() {
    let (x, y) = indexed(12);
    let ds = Dataset::new(x.clone(), y.clone()).unwrap();

    let shuffled = ds.shuffled(&mut StdRng::seed_from_u64(8));
    let (xs, ys) = unison_shuffled_copies(&x, &y, &mut StdRng::seed_from_u64(8)).unwrap();
    assert_eq!(shuffled.x, xs);
    assert_eq!(shuffled.y, ys);
    assert_eq!(shuffled.n_positives(), ds.n_positives());
}

#[test]
fn unison_shuffle_rejects_mismatched_lengths() {
    let (x, _) = indexed(4);
    let y = Array1::zeros(3);
    let mut rng = StdRng::seed_from_u64(1);
    let result = unison_shuffled_copies(&x, &y, &mut rng);
    assert!(matches!(result, Err(ClassifierError::LengthMismatch { .. })));
}

// ---------------------------------------------------------------------------
// Shuffling and splitting
// ---------------------------------------------------------------------------

#[test]
fn unison_shuffle_preserves_correspondence() {
    let (x, y) = indexed(20);
    let mut rng = StdRng::seed_from_u64(1);
    let (xs, ys) = unison_shuffled_copies(&x, &y, &mut rng).unwrap();

    for (row, &label) in xs.rows().into_iter().zip(ys.iter()) {
        assert_eq!(row[0], label);
        assert_eq!(row[1], 10.0 * label);
    }
    let mut sorted = ys.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(sorted, y.to_vec());
}

#[test]
fn split_sizes_follow_ratio() {
    let (x, y) = indexed(13);
    let mut rng = StdRng::seed_from_u64(1);
    let split = split_data(&x, &y, 0.8, &mut rng).unwrap();

    assert_eq!(split.x_train.nrows(), 10);
    assert_eq!(split.y_train.len(), 10);
    assert_eq!(split.x_test.nrows(), 3);
    assert_eq!(split.y_test.len(), 3);

    let mut all: Vec<f64> = split.y_train.iter().chain(split.y_test.iter()).copied().collect();
    all.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(all, y.to_vec());
}

#[test]
fn split_is_reproducible_with_same_seed() {
    let (x, y) = indexed(30);
    let a = split_data(&x, &y, 0.5, &mut StdRng::seed_from_u64(8)).unwrap();
    let b = split_data(&x, &y, 0.5, &mut StdRng::seed_from_u64(8)).unwrap();
    assert_eq!(a.y_train, b.y_train);
    assert_eq!(a.x_test, b.x_test);
}

#[test]
fn split_extreme_ratios() {
    let (x, y) = indexed(6);
    let mut rng = StdRng::seed_from_u64(0);
    let all_train = split_data(&x, &y, 1.0, &mut rng).unwrap();
    assert_eq!(all_train.x_train.nrows(), 6);
    assert_eq!(all_train.x_test.nrows(), 0);

    let all_test = split_data(&x, &y, 0.0, &mut rng).unwrap();
    assert_eq!(all_test.x_train.nrows(), 0);
    assert_eq!(all_test.x_test.nrows(), 6);
}

#[test]
fn split_rejects_bad_ratio() {
    let (x, y) = indexed(6);
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        split_data(&x, &y, 1.5, &mut rng),
        Err(ClassifierError::InvalidRatio(_))
    ));
}
