use anyhow::Result;
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tabular_classifiers::config::SearchConfig;
use tabular_classifiers::data_handling::{split_data, Dataset};
use tabular_classifiers::feature_selection::{
    drop_highly_correlated_features, drop_test_correlated_features, reduced_data,
    DEFAULT_CORRELATION_THRESHOLD, DEFAULT_SENTINEL_THRESHOLD,
};
use tabular_classifiers::metrics::{accuracy, calculate_metrics};
use tabular_classifiers::model_selection::hyperparameter_tuning;
use tabular_classifiers::models::{predict_logistic, ClassifierModel, RegLogisticRegression};
use tabular_classifiers::preprocessing::clean_x_mean;

fn main() -> Result<()> {
    env_logger::init();

    let config = SearchConfig::default();
    let mut rng = StdRng::seed_from_u64(config.seed);

    // id, two informative features, a near-copy of the first, a column that
    // is mostly the "refused" code 999, and noise with some NaNs.
    let n_samples = 400;
    let mut raw = Vec::with_capacity(n_samples * 6);
    let mut labels = Vec::with_capacity(n_samples);
    for i in 0..n_samples {
        let a: f64 = rng.gen_range(-2.0..2.0);
        let b: f64 = rng.gen_range(-2.0..2.0);
        let label = if a + 0.5 * b + rng.gen_range(-0.5..0.5) > 0.0 { 1.0 } else { 0.0 };
        let sentinel = if rng.gen_bool(0.8) { 999.0 } else { rng.gen_range(0.0..5.0) };
        let noise = if rng.gen_bool(0.1) { f64::NAN } else { rng.gen_range(-1.0..1.0) };
        raw.extend_from_slice(&[i as f64, a, b, a * 1.01 + 0.001, sentinel, noise]);
        labels.push(label);
    }
    let raw = Array2::from_shape_vec((n_samples, 6), raw)?;
    let y = Array1::from_vec(labels);

    let x = clean_x_mean(&reduced_data(&raw, DEFAULT_SENTINEL_THRESHOLD));
    let dataset = Dataset::new(x, y)?;
    dataset.log_summary();
    println!("Cleaned X shape: {:?}", dataset.x.shape());

    let split = split_data(&dataset.x, &dataset.y, 0.8, &mut rng)?;
    let (x_train, mask) =
        drop_highly_correlated_features(&split.x_train, DEFAULT_CORRELATION_THRESHOLD);
    let x_test = drop_test_correlated_features(&split.x_test, &mask)?;
    println!("Dropped correlated columns: {:?}", mask.dropped_columns());

    let model = RegLogisticRegression::new();
    let result = hyperparameter_tuning(
        &x_train,
        &split.y_train,
        &model,
        &config.lambdas,
        &config.gammas,
        &config.base_params,
        config.k_folds,
        &mut rng,
    )?;
    let (best_lambda, best_gamma) = result.best_params();
    println!("Best lambda = {}, best gamma = {}", best_lambda, best_gamma);

    let params = config.base_params.with_grid_point(best_lambda, best_gamma);
    let (w, loss) = model.fit(&split.y_train, &x_train, &params)?;
    let y_pred = predict_logistic(&x_test, &w, config.prediction_threshold)?;
    let counts = calculate_metrics(&split.y_test, &y_pred)?;

    println!("Training loss = {:.4}", loss);
    println!(
        "Test accuracy = {:.4}, f1 = {:.4} ({:?})",
        accuracy(&split.y_test, &y_pred)?,
        counts.f1(),
        counts
    );

    Ok(())
}
