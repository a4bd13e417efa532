// src/pipeline.rs
//! Load → Fit once, then predict as often as needed.

use crate::dataset::csv::{self, CsvOptions};
use crate::dataset::Dataset;
use crate::error::{DegenerateInputError, RegressionError};
use crate::metrics::{Metrics, RegressionMetrics};
use crate::model::linear::{LinearModel, LinearRegression};
use crate::model::{Fitted, InferenceModel};
use crate::prediction::{self, Prediction, SweepOptions};
use crate::trainer::Trainer;
use std::path::Path;

/// A dataset together with the model fitted on it.
///
/// Both halves are immutable. Holding a pipeline is how a caller keeps the fitted
/// model around between predictions instead of refitting on every request; when to
/// drop or rebuild it is up to the caller (see [`Dataset::fingerprint`]).
#[derive(Debug, Clone)]
pub struct RegressionPipeline {
    dataset: Dataset,
    model: LinearModel<Fitted>,
}

impl RegressionPipeline {
    /// Loads a CSV file and fits the default trainer on it.
    pub fn from_path<P: AsRef<Path>>(path: P, options: &CsvOptions) -> Result<Self, RegressionError> {
        let dataset = csv::load_with(path, options)?;
        Ok(Self::from_dataset(dataset)?)
    }

    pub fn from_dataset(dataset: Dataset) -> Result<Self, DegenerateInputError> {
        Self::with_trainer(dataset, &Trainer::default())
    }

    pub fn with_trainer(dataset: Dataset, trainer: &Trainer) -> Result<Self, DegenerateInputError> {
        let model = trainer.fit(LinearRegression::new(), &dataset)?;
        Ok(Self { dataset, model })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn model(&self) -> &LinearModel<Fitted> {
        &self.model
    }

    pub fn predict(&self, experience_years: f64) -> f64 {
        self.model.predict(&experience_years)
    }

    pub fn predict_checked(&self, experience_years: f64) -> Prediction {
        self.model.predict_checked(experience_years)
    }

    /// Regression line over the training observations.
    pub fn fitted_line(&self) -> Vec<(f64, f64)> {
        self.model.fitted_line(&self.dataset)
    }

    pub fn sweep(&self, options: &SweepOptions) -> Vec<Prediction> {
        prediction::sweep(&self.model, options)
    }

    /// In-sample metrics of the fitted line.
    pub fn metrics(&self) -> RegressionMetrics {
        let predictions = self.model.predict_batch(self.dataset.xs().as_slice());
        Metrics::calculate_all(&self.dataset.ys(), &predictions)
    }

    pub fn into_parts(self) -> (Dataset, LinearModel<Fitted>) {
        (self.dataset, self.model)
    }
}
