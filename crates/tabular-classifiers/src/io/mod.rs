//! IO utilities for loading tabular feature files.

pub mod csv_reader;

pub use csv_reader::{read_csv_matrix, read_csv_matrix_with_config, CsvMatrix, CsvReaderConfig};
