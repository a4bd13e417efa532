//! Observations and the immutable dataset a model is fitted on.
//!
//! A [`Dataset`] is an ordered sequence of [`Observation`]s, each pairing years of
//! experience (`x`) with a salary (`y`). Datasets are validated on construction and
//! never mutated afterwards: every accessor hands out shared views only.
//!
//! # Example
//!
//! ```rust
//! use salary_regression::dataset::{Dataset, Observation};
//!
//! let ds = Dataset::new(vec![
//!     Observation::new(1.0, 39000.0),
//!     Observation::new(2.0, 46000.0),
//! ])
//! .unwrap();
//!
//! assert_eq!(ds.len(), 2);
//! assert_eq!(ds.x_domain().min, 1.0);
//! ```

use crate::error::DataLoadError;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub mod csv;

/// Minimum number of rows needed for a least-squares line.
pub const MIN_OBSERVATIONS: usize = 2;

pub(crate) const X_NAME: &str = "experience_years";
pub(crate) const Y_NAME: &str = "salary";

/// One training pair: years of experience and the observed salary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub experience_years: f64,
    pub salary: f64,
}

impl Observation {
    pub fn new(experience_years: f64, salary: f64) -> Self {
        Self {
            experience_years,
            salary,
        }
    }
}

/// Closed interval `[min, max]` of x-values seen during training.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Returns `true` when `x` lies inside the interval (bounds included).
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Validated, ordered, immutable collection of observations.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    observations: Vec<Observation>,
}

impl Dataset {
    /// Builds a dataset, rejecting anything a least-squares fit could not consume.
    ///
    /// # Errors
    ///
    /// - [`DataLoadError::Empty`] when no observations are given
    /// - [`DataLoadError::InvalidValue`] for a non-finite or negative value
    ///   (row numbers are 1-based)
    /// - [`DataLoadError::InsufficientRows`] for a single observation
    pub fn new(observations: Vec<Observation>) -> Result<Self, DataLoadError> {
        if observations.is_empty() {
            return Err(DataLoadError::Empty);
        }
        for (i, obs) in observations.iter().enumerate() {
            check_value(i + 1, X_NAME, obs.experience_years)?;
            check_value(i + 1, Y_NAME, obs.salary)?;
        }
        if observations.len() < MIN_OBSERVATIONS {
            return Err(DataLoadError::InsufficientRows {
                rows: observations.len(),
            });
        }
        Ok(Self { observations })
    }

    /// Builds a dataset from parallel x and y columns.
    pub fn from_columns(xs: &[f64], ys: &[f64]) -> Result<Self, DataLoadError> {
        if xs.len() != ys.len() {
            return Err(DataLoadError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        let observations = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| Observation::new(x, y))
            .collect();
        Self::new(observations)
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Always `false` for a constructed dataset; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// Years of experience, in dataset order.
    pub fn xs(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.experience_years).collect()
    }

    /// Salaries, in dataset order.
    pub fn ys(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.salary).collect()
    }

    /// Observed range of years of experience.
    pub fn x_domain(&self) -> Domain {
        let (min, max) = self
            .observations
            .iter()
            .map(|o| o.experience_years)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
                (lo.min(x), hi.max(x))
            });
        Domain { min, max }
    }

    /// Content hash of the observations, sensitive to order and exact bit patterns.
    ///
    /// Callers caching fitted models across reruns can key the cache on this value.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.observations.len().hash(&mut hasher);
        for obs in &self.observations {
            obs.experience_years.to_bits().hash(&mut hasher);
            obs.salary.to_bits().hash(&mut hasher);
        }
        hasher.finish()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

impl TryFrom<Vec<Observation>> for Dataset {
    type Error = DataLoadError;

    fn try_from(observations: Vec<Observation>) -> Result<Self, Self::Error> {
        Self::new(observations)
    }
}

pub(crate) fn check_value(row: usize, column: &str, value: f64) -> Result<(), DataLoadError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DataLoadError::InvalidValue {
            row,
            column: column.to_string(),
            value,
        })
    }
}
