//! Simple linear regression of salary on years of experience.
//!
//! This module implements a type-safe linear model with compile-time state tracking:
//! - [`LinearRegression`] = `LinearModel<Unfitted>`, the input to fitting.
//! - [`LinearModel<Fitted>`], an immutable `(slope, intercept)` predictor.
//!
//! A fitted model is free from training configuration: it carries the learned
//! coefficients and, when fitted from data, the observed range of x-values.
//!
use crate::dataset::{Dataset, Domain};
use crate::error::{DegenerateInputError, ModelIoError};
use crate::metrics::Metrics;
use crate::prediction::Prediction;
use crate::trainer::Trainer;
pub use crate::model::{Fitted, InferenceModel, Unfitted};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Coefficients of the line `salary = slope * experience + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearParams {
    pub slope: f64,
    pub intercept: f64,
}

/// Serializable representation of a fitted linear model.
///
/// Used by [`InferenceModel::save_to_file`] and [`InferenceModel::load_from_file`].
/// Values are stored as `f64`, so a saved model predicts bit-identically after loading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SerializableLinearParams {
    pub slope: f64,
    pub intercept: f64,
    pub domain: Option<Domain>,
}

/// A linear model with its fit state encoded at the type level.
///
/// - When `S = Unfitted`: consumed by [`Trainer::fit`] / [`LinearRegression::fit`].
/// - When `S = Fitted`: implements [`InferenceModel`], used for prediction and persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel<S> {
    params: LinearParams,
    domain: Option<Domain>,
    _state: PhantomData<S>,
}

/// Alias for an **unfitted** linear regression model.
pub type LinearRegression = LinearModel<Unfitted>;

impl LinearRegression {
    /// Creates an unfitted model.
    ///
    /// Its coefficients are zero placeholders; fitting reads only the type state.
    pub fn new() -> Self {
        Self {
            params: LinearParams::default(),
            domain: None,
            _state: PhantomData,
        }
    }

    /// Fits the model with the default [`Trainer`] (ordinary least squares with intercept).
    pub fn fit(self, dataset: &Dataset) -> Result<LinearModel<Fitted>, DegenerateInputError> {
        Trainer::default().fit(self, dataset)
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearModel<Fitted> {
    /// Creates a fitted model from learned coefficients.
    ///
    /// Typically called by [`Trainer::fit`]. `domain` is the range of x-values the
    /// coefficients were learned on, if known.
    pub fn new(params: LinearParams, domain: Option<Domain>) -> Self {
        Self {
            params,
            domain,
            _state: PhantomData,
        }
    }

    /// Creates a fitted model from explicit coefficients with no known training domain.
    pub fn from_coefficients(slope: f64, intercept: f64) -> Self {
        Self::new(LinearParams { slope, intercept }, None)
    }

    pub fn slope(&self) -> f64 {
        self.params.slope
    }

    pub fn intercept(&self) -> f64 {
        self.params.intercept
    }

    pub fn params(&self) -> LinearParams {
        self.params
    }

    /// Range of x-values seen during fitting.
    pub fn domain(&self) -> Option<Domain> {
        self.domain
    }

    /// `slope * x + intercept`, evaluated as a multiply followed by an add.
    pub fn predict_value(&self, x: f64) -> f64 {
        self.params.slope * x + self.params.intercept
    }

    /// Returns `true` if the model knows its training domain and `x` lies outside it.
    pub fn is_extrapolation(&self, x: f64) -> bool {
        self.domain.is_some_and(|d| !d.contains(x))
    }

    /// Predicts and reports whether `x` extrapolates beyond the training domain.
    ///
    /// The predicted value is identical to [`predict_value`](Self::predict_value);
    /// extrapolation is reported, never refused.
    pub fn predict_checked(&self, x: f64) -> Prediction {
        let prediction = self.prediction(x);
        if prediction.extrapolated {
            if let Some(domain) = self.domain {
                warn!(
                    "experience {} is outside the training range [{}, {}]; extrapolating",
                    x, domain.min, domain.max
                );
            }
        }
        prediction
    }

    pub(crate) fn prediction(&self, x: f64) -> Prediction {
        Prediction {
            input: x,
            value: self.predict_value(x),
            extrapolated: self.is_extrapolation(x),
        }
    }

    /// The regression line evaluated at every observation, in dataset order.
    pub fn fitted_line(&self, dataset: &Dataset) -> Vec<(f64, f64)> {
        dataset
            .iter()
            .map(|o| (o.experience_years, self.predict_value(o.experience_years)))
            .collect()
    }

    /// Coefficient of determination (R²) of the model on `dataset`.
    pub fn score(&self, dataset: &Dataset) -> f64 {
        let predictions = self.predict_batch(dataset.xs().as_slice());
        Metrics::r_squared(&dataset.ys(), &predictions)
    }
}

/// Inference for a fitted linear model: `y = slope * x + intercept`.
///
/// - Single input: `f64` → `f64`
/// - Batch input: `[f64]` → `Vec<f64>`
impl InferenceModel for LinearModel<Fitted> {
    type InputSingle = f64;
    type OutputSingle = f64;
    type InputBatch = [f64];
    type OutputBatch = Vec<f64>;
    type ParamsRepr = SerializableLinearParams;

    fn predict(&self, input: &f64) -> f64 {
        self.predict_value(*input)
    }

    fn predict_batch(&self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|&x| self.predict_value(x)).collect()
    }

    fn extract_params(&self) -> SerializableLinearParams {
        SerializableLinearParams {
            slope: self.params.slope,
            intercept: self.params.intercept,
            domain: self.domain,
        }
    }

    fn from_params(params: SerializableLinearParams) -> Result<Self, ModelIoError> {
        if !params.slope.is_finite() || !params.intercept.is_finite() {
            return Err(ModelIoError::InvalidParams(format!(
                "coefficients must be finite, got slope={} intercept={}",
                params.slope, params.intercept
            )));
        }
        if let Some(domain) = params.domain {
            if domain.min.is_nan() || domain.max.is_nan() || domain.min > domain.max {
                return Err(ModelIoError::InvalidParams(format!(
                    "empty training domain [{}, {}]",
                    domain.min, domain.max
                )));
            }
        }
        Ok(Self::new(
            LinearParams {
                slope: params.slope,
                intercept: params.intercept,
            },
            params.domain,
        ))
    }
}

/// Renders the learned formula, e.g. `salary = 9450 * experience + 25792`.
impl fmt::Display for LinearModel<Fitted> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let LinearParams { slope, intercept } = self.params;
        write!(f, "salary = ")?;
        match f.precision() {
            Some(p) => write!(f, "{:.*} * experience", p, slope)?,
            None => write!(f, "{} * experience", slope)?,
        }
        let sign = if intercept < 0.0 { '-' } else { '+' };
        match f.precision() {
            Some(p) => write!(f, " {} {:.*}", sign, p, intercept.abs()),
            None => write!(f, " {} {}", sign, intercept.abs()),
        }
    }
}
