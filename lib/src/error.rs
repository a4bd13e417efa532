//! Error types for loading, fitting and persisting regression models.
//!
//! Loading and fitting fail independently ([`DataLoadError`], [`DegenerateInputError`]);
//! [`RegressionError`] wraps both so a caller running the whole pipeline can use `?`
//! across every stage.

use std::io;

/// Errors that can occur while turning a tabular source into a [`Dataset`](crate::dataset::Dataset).
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("source contains no observations")]
    Empty,

    #[error("at least 2 observations are required, got {rows}")]
    InsufficientRows { rows: usize },

    #[error("missing required column: {0}")]
    MissingColumn(String),

    #[error("row {row}: missing field for column {column}")]
    MissingField { row: usize, column: String },

    #[error("row {row}: column {column} is not a number: {value:?}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row}: column {column} must be finite and non-negative, got {value}")]
    InvalidValue {
        row: usize,
        column: String,
        value: f64,
    },

    #[error("column length mismatch: {xs} x-values, {ys} y-values")]
    LengthMismatch { xs: usize, ys: usize },
}

/// The data does not determine a usable line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DegenerateInputError {
    /// Every observation shares the same x-value.
    #[error("cannot fit a line: all {rows} observations have experience_years = {x}")]
    ConstantX { x: f64, rows: usize },

    /// The least-squares coefficients exceed the range of `f64`.
    #[error("cannot fit a line: coefficients are not finite (slope = {slope}, intercept = {intercept})")]
    NonFinite { slope: f64, intercept: f64 },
}

/// Errors raised by the model file helpers.
#[derive(Debug, thiserror::Error)]
pub enum ModelIoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid model parameters: {0}")]
    InvalidParams(String),
}

impl From<bincode::Error> for ModelIoError {
    fn from(err: bincode::Error) -> Self {
        ModelIoError::Serialization(err.to_string())
    }
}

/// Any failure of the Load → Fit pipeline.
#[derive(Debug, thiserror::Error)]
pub enum RegressionError {
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),

    #[error(transparent)]
    Degenerate(#[from] DegenerateInputError),

    #[error(transparent)]
    ModelIo(#[from] ModelIoError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_insufficient_rows() {
        let err = DataLoadError::InsufficientRows { rows: 1 };
        assert_eq!(err.to_string(), "at least 2 observations are required, got 1");
    }

    #[test]
    fn test_error_display_missing_column() {
        let err = DataLoadError::MissingColumn("Salary".to_string());
        assert!(err.to_string().contains("Salary"));
    }

    #[test]
    fn test_error_display_invalid_number() {
        let err = DataLoadError::InvalidNumber {
            row: 3,
            column: "YearsExperience".to_string(),
            value: "ten".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("row 3"));
        assert!(msg.contains("\"ten\""));
    }

    #[test]
    fn test_error_display_degenerate() {
        let err = DegenerateInputError::ConstantX { x: 2.0, rows: 4 };
        assert!(err.to_string().contains("all 4 observations"));

        let err = DegenerateInputError::NonFinite {
            slope: f64::INFINITY,
            intercept: f64::NAN,
        };
        assert!(err.to_string().contains("slope = inf"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: DataLoadError = io_err.into();
        assert!(matches!(err, DataLoadError::Io(_)));
    }

    #[test]
    fn test_error_from_bincode_error() {
        let bad_bytes: &[u8] = &[0xff, 0xff, 0xff, 0xff];
        let result: Result<String, bincode::Error> = bincode::deserialize(bad_bytes);
        if let Err(e) = result {
            let err: ModelIoError = e.into();
            assert!(matches!(err, ModelIoError::Serialization(_)));
        }
    }

    #[test]
    fn test_regression_error_is_transparent() {
        let inner = DegenerateInputError::ConstantX { x: 1.0, rows: 2 };
        let err: RegressionError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn test_error_is_std_error() {
        let err = DataLoadError::Empty;
        let _: &dyn std::error::Error = &err;
    }
}
