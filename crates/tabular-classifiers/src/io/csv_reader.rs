//! Numeric CSV reader.
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use ndarray::Array2;

/// A numeric table with its column names.
#[derive(Debug, Clone)]
pub struct CsvMatrix {
    pub headers: Vec<String>,
    pub data: Array2<f64>,
}

impl CsvMatrix {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }
}

/// Configuration for reading numeric CSV files.
#[derive(Debug, Clone)]
pub struct CsvReaderConfig {
    pub delimiter: u8,
    /// Cell values (compared case-insensitively after trimming) read as NaN.
    /// Empty cells are always NaN.
    pub missing_values: Vec<String>,
}

impl Default for CsvReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            missing_values: vec!["nan".to_string(), "na".to_string()],
        }
    }
}

/// Read a comma-separated file with a header row into a matrix.
pub fn read_csv_matrix<P: AsRef<Path>>(path: P) -> Result<CsvMatrix> {
    read_csv_matrix_with_config(path, &CsvReaderConfig::default())
}

/// Read a delimited file with a header row using a custom configuration.
pub fn read_csv_matrix_with_config<P: AsRef<Path>>(
    path: P,
    config: &CsvReaderConfig,
) -> Result<CsvMatrix> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .from_path(&path)
        .with_context(|| format!("Failed to open CSV file: {}", path.as_ref().display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("Failed to read CSV header row")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let n_cols = headers.len();

    let mut values = Vec::new();
    let mut n_rows = 0;
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        if record.len() != n_cols {
            return Err(anyhow!(
                "Row {} has {} fields, expected {}",
                row_idx + 1,
                record.len(),
                n_cols
            ));
        }

        for (col_idx, field) in record.iter().enumerate() {
            values.push(parse_cell(field, config).with_context(|| {
                format!(
                    "Invalid value '{}' in column '{}' at row {}",
                    field,
                    headers[col_idx],
                    row_idx + 1
                )
            })?);
        }
        n_rows += 1;
    }

    let data = Array2::from_shape_vec((n_rows, n_cols), values)
        .context("Failed to build feature matrix")?;
    log::debug!(
        "Read {} rows x {} columns from {}",
        n_rows,
        n_cols,
        path.as_ref().display()
    );

    Ok(CsvMatrix { headers, data })
}

fn parse_cell(field: &str, config: &CsvReaderConfig) -> Result<f64> {
    let trimmed = field.trim();
    if trimmed.is_empty()
        || config
            .missing_values
            .iter()
            .any(|m| m.eq_ignore_ascii_case(trimmed))
    {
        return Ok(f64::NAN);
    }
    Ok(trimmed.parse::<f64>()?)
}
