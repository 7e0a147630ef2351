//! Integration tests for configuration records and CSV loading.

use std::io::Write;

use tabular_classifiers::config::{ModelParams, SearchConfig};
use tabular_classifiers::io::{read_csv_matrix, read_csv_matrix_with_config, CsvReaderConfig};
use tabular_classifiers::ClassifierError;

// ---------------------------------------------------------------------------
// ModelParams / SearchConfig
// ---------------------------------------------------------------------------

#[test]
fn with_grid_point_replaces_only_lambda_and_gamma() {
    let mut base = ModelParams::new(0.0, 0.1, 250);
    base.initial_w = Some(vec![1.0, 2.0]);

    let point = base.with_grid_point(0.5, 0.01);
    assert_eq!(point.lambda, 0.5);
    assert_eq!(point.gamma, 0.01);
    assert_eq!(point.max_iters, 250);
    assert_eq!(point.initial_w, Some(vec![1.0, 2.0]));
    assert_eq!(base.lambda, 0.0);
}

#[test]
fn search_config_default_is_valid() {
    let cfg = SearchConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.k_folds, 5);
    assert!((cfg.prediction_threshold - 0.5).abs() < 1e-12);
}

#[test]
fn search_config_parses_with_defaults() {
    let cfg = SearchConfig::from_json_str(r#"{"lambdas": [0.1, 1.0], "gammas": [0.05]}"#).unwrap();
    assert_eq!(cfg.lambdas, vec![0.1, 1.0]);
    assert_eq!(cfg.gammas, vec![0.05]);
    assert_eq!(cfg.k_folds, 5);
    assert_eq!(cfg.base_params, ModelParams::default());
}

#[test]
fn search_config_rejects_empty_grid() {
    assert!(SearchConfig::from_json_str(r#"{"lambdas": [], "gammas": [0.05]}"#).is_err());
}

#[test]
fn search_config_rejects_zero_folds() {
    let json = r#"{"lambdas": [1.0], "gammas": [0.05], "k_folds": 0}"#;
    assert!(SearchConfig::from_json_str(json).is_err());

    let cfg = SearchConfig {
        k_folds: 0,
        ..SearchConfig::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, ClassifierError::InvalidSearchConfig(_)));
    assert!(err.to_string().contains("k_folds"));
}

#[test]
fn search_config_reads_prediction_threshold() {
    let json = r#"{"lambdas": [1.0], "gammas": [0.05], "prediction_threshold": 0.7}"#;
    let cfg = SearchConfig::from_json_str(json).unwrap();
    assert!((cfg.prediction_threshold - 0.7).abs() < 1e-12);
}

#[test]
fn search_config_round_trips_json() {
    let cfg = SearchConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("lambdas"));
    let cfg2 = SearchConfig::from_json_str(&json).unwrap();
    assert_eq!(cfg.lambdas, cfg2.lambdas);
    assert_eq!(cfg.base_params, cfg2.base_params);
}

#[test]
fn search_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("search.json");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, r#"{{"lambdas": [0.001], "gammas": [0.1, 0.2], "seed": 7}}"#).unwrap();

    let cfg = SearchConfig::from_json_file(&path).unwrap();
    assert_eq!(cfg.seed, 7);
    assert_eq!(cfg.gammas.len(), 2);
}

#[test]
fn search_config_missing_file_errors() {
    assert!(SearchConfig::from_json_file("/nonexistent/search.json").is_err());
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

#[test]
fn read_csv_with_missing_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("x_train.csv");
    std::fs::write(&path, "Id,age,income\n0,34,\n1,nan,999\n2,51,1200.5\n").unwrap();

    let table = read_csv_matrix(&path).unwrap();
    assert_eq!(table.headers, vec!["Id", "age", "income"]);
    assert_eq!(table.data.shape(), &[3, 3]);
    assert!(table.data[[0, 2]].is_nan());
    assert!(table.data[[1, 1]].is_nan());
    assert_eq!(table.data[[1, 2]], 999.0);
    assert_eq!(table.data[[2, 2]], 1200.5);
    assert_eq!(table.column_index("INCOME"), Some(2));
}

#[test]
fn read_csv_with_custom_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("y.tsv");
    std::fs::write(&path, "Id\tlabel\n0\t-1\n1\t1\n").unwrap();

    let config = CsvReaderConfig {
        delimiter: b'\t',
        ..CsvReaderConfig::default()
    };
    let table = read_csv_matrix_with_config(&path, &config).unwrap();
    assert_eq!(table.data.column(1).to_vec(), vec![-1.0, 1.0]);
}

#[test]
fn read_csv_rejects_text_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(&path, "a,b\n1,hello\n").unwrap();
    assert!(read_csv_matrix(&path).is_err());
}

#[test]
fn read_csv_missing_file_errors() {
    assert!(read_csv_matrix("/nonexistent/data.csv").is_err());
}
