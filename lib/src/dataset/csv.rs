//! CSV source for salary datasets.
//!
//! The expected layout is one header row followed by one row per observation,
//! with the experience and salary columns located by header name:
//!
//! ```text
//! YearsExperience,Salary
//! 1.1,39343
//! 1.3,46205
//! ```
//!
//! Extra columns are ignored. Headerless files are read positionally (x = column 0,
//! y = column 1) when [`CsvOptions::has_headers`] is `false`.

use super::{check_value, Dataset, Observation};
use crate::error::DataLoadError;
use ::csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Default header of the experience column.
pub const DEFAULT_X_COLUMN: &str = "YearsExperience";
/// Default header of the salary column.
pub const DEFAULT_Y_COLUMN: &str = "Salary";

/// How a CSV source is parsed into observations.
///
/// Deserializable so callers can keep it next to the rest of their configuration;
/// missing fields fall back to [`CsvOptions::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Header of the experience (x) column.
    pub x_column: String,
    /// Header of the salary (y) column.
    pub y_column: String,
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Whether the first row is a header row.
    pub has_headers: bool,
    /// Trim surrounding whitespace from headers and fields.
    pub trim: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            x_column: DEFAULT_X_COLUMN.to_string(),
            y_column: DEFAULT_Y_COLUMN.to_string(),
            delimiter: b',',
            has_headers: true,
            trim: true,
        }
    }
}

impl CsvOptions {
    pub fn x_column(mut self, name: impl Into<String>) -> Self {
        self.x_column = name.into();
        self
    }

    pub fn y_column(mut self, name: impl Into<String>) -> Self {
        self.y_column = name.into();
        self
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn has_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

/// Loads a dataset from a CSV file using [`CsvOptions::default`].
pub fn load<P: AsRef<Path>>(path: P) -> Result<Dataset, DataLoadError> {
    load_with(path, &CsvOptions::default())
}

/// Loads a dataset from a CSV file.
///
/// # Errors
///
/// Fails with [`DataLoadError`] if the file is missing or unreadable, empty,
/// malformed, or holds fewer than two observations.
pub fn load_with<P: AsRef<Path>>(path: P, options: &CsvOptions) -> Result<Dataset, DataLoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let dataset = from_reader(BufReader::new(file), options)?;
    debug!(
        "loaded {} observations from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

/// Parses a dataset from any CSV byte stream.
pub fn from_reader<R: Read>(reader: R, options: &CsvOptions) -> Result<Dataset, DataLoadError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_headers)
        .trim(if options.trim { Trim::All } else { Trim::None })
        .flexible(true)
        .from_reader(reader);

    let (x_idx, y_idx, x_name, y_name) = if options.has_headers {
        let headers = rdr.headers()?.clone();
        if headers.is_empty() {
            return Err(DataLoadError::Empty);
        }
        (
            column_index(&headers, &options.x_column)?,
            column_index(&headers, &options.y_column)?,
            options.x_column.clone(),
            options.y_column.clone(),
        )
    } else {
        (0, 1, "column 0".to_string(), "column 1".to_string())
    };

    let mut observations = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let row = i + 1;
        let x = parse_field(&record, row, x_idx, &x_name)?;
        let y = parse_field(&record, row, y_idx, &y_name)?;
        observations.push(Observation::new(x, y));
    }

    Dataset::new(observations)
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize, DataLoadError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| DataLoadError::MissingColumn(name.to_string()))
}

fn parse_field(
    record: &StringRecord,
    row: usize,
    idx: usize,
    column: &str,
) -> Result<f64, DataLoadError> {
    let raw = record.get(idx).ok_or_else(|| DataLoadError::MissingField {
        row,
        column: column.to_string(),
    })?;
    let value: f64 = raw.parse().map_err(|_| DataLoadError::InvalidNumber {
        row,
        column: column.to_string(),
        value: raw.to_string(),
    })?;
    check_value(row, column, value)?;
    Ok(value)
}
