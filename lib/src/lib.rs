//! # salary-regression
//!
//! Years-of-experience → salary regression: load a two-column dataset, fit an
//! ordinary least-squares line, and predict salaries for arbitrary experience values.
//!
//! ## Core Design Principles
//!
//! - **Stateful Type Safety**: Models carry their fit state in the type system
//!   (`Unfitted` vs `Fitted`); predicting with an unfitted model does not compile.
//! - **Fit/Predict Separation**: Fitting is a one-off computation that yields an
//!   immutable model; prediction is a cheap pure function called as often as needed.
//! - **Errors as Values**: loading and fitting return typed errors
//!   ([`DataLoadError`], [`DegenerateInputError`]) and never panic on bad input.
//!
//! ## Quick Start
//!
//! ```rust
//! use salary_regression::dataset::Dataset;
//!
//! let dataset = Dataset::from_columns(
//!     &[1.0, 2.0, 3.0, 4.0, 5.0],
//!     &[39000.0, 46000.0, 37000.0, 43000.0, 59000.0],
//! )?;
//! let model = salary_regression::fit(&dataset)?;
//!
//! assert_eq!(salary_regression::predict(&model, 0.0), model.intercept());
//! println!("{:.0}", model); // salary = 3700 * experience + 33700
//! # Ok::<(), salary_regression::RegressionError>(())
//! ```
//!
//! ## Module Structure
//!
//! - `dataset` — observations, validated datasets and the CSV loader
//! - `model` — linear model with type-level fit state, inference and persistence
//! - `trainer` — closed-form least-squares fitting
//! - `prediction` — extrapolation-aware predictions and slider sweeps
//! - `metrics` — MSE, RMSE, MAE and R²
//! - `pipeline` — a dataset and its fitted model kept together
//! - `serialization` — byte encoding of model parameters
//!
//! The library logs through the [`log`] facade and never installs a logger.

/// Error taxonomy for loading, fitting and persisting models.
pub mod error;

/// Observations, datasets and data loading.
pub mod dataset;

/// Regression metrics.
pub mod metrics;

/// Linear models with compile-time state safety.
pub mod model;

/// Fitted dataset + model holder.
pub mod pipeline;

/// Domain-aware predictions and prediction sweeps.
pub mod prediction;

/// Model parameter persistence.
pub mod serialization;

/// Closed-form model fitting.
pub mod trainer;

pub use dataset::csv::CsvOptions;
pub use dataset::{Dataset, Domain, Observation};
pub use error::{DataLoadError, DegenerateInputError, ModelIoError, RegressionError};
pub use model::linear::{LinearModel, LinearRegression};
pub use model::{Fitted, InferenceModel, Unfitted};
pub use pipeline::RegressionPipeline;
pub use prediction::{Prediction, SweepOptions};
pub use trainer::Trainer;

use std::path::Path;

/// Load: reads a `YearsExperience,Salary` CSV file into a dataset.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Dataset, DataLoadError> {
    dataset::csv::load(path)
}

/// Fit: ordinary least squares with an intercept.
pub fn fit(dataset: &Dataset) -> Result<LinearModel<Fitted>, DegenerateInputError> {
    LinearRegression::new().fit(dataset)
}

/// Predict: `slope * x + intercept`. Any finite `x` is accepted, including values
/// far outside the training range.
pub fn predict(model: &LinearModel<Fitted>, x: f64) -> f64 {
    model.predict(&x)
}
