// trainer/mod.rs
use crate::dataset::Dataset;
use crate::error::DegenerateInputError;
use crate::model::linear::{LinearModel, LinearRegression};
use crate::model::Fitted;
use log::{debug, info};

mod ols;

use ols::solve;

/// Fits a [`LinearRegression`] on a dataset with closed-form ordinary least squares.
///
/// Built via [`TrainerBuilder`], a trainer is immutable and can be reused for any
/// number of datasets. The `fit` method returns a `LinearModel<Fitted>`, which
/// contains only inference parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trainer {
    pub(crate) fit_intercept: bool,
    pub(crate) verbose: bool,
}

/// Fluent builder for constructing a [`Trainer`].
///
/// Defaults:
/// - `fit_intercept`: true
/// - `verbose`: true
#[derive(Debug, Clone)]
pub struct TrainerBuilder {
    fit_intercept: bool,
    verbose: bool,
}

impl TrainerBuilder {
    pub fn new() -> Self {
        Self {
            fit_intercept: true,
            verbose: true,
        }
    }

    /// When `false`, the line is forced through the origin (`intercept = 0`).
    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.fit_intercept = fit_intercept;
        self
    }

    /// Sets verbosity of the fit summary.
    ///
    /// When `false`, the summary is logged at `debug` instead of `info`.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn build(self) -> Trainer {
        Trainer {
            fit_intercept: self.fit_intercept,
            verbose: self.verbose,
        }
    }
}

impl Default for TrainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Trainer {
    /// Convenience constructor that starts the builder pattern.
    pub fn builder() -> TrainerBuilder {
        TrainerBuilder::new()
    }

    pub fn fits_intercept(&self) -> bool {
        self.fit_intercept
    }

    /// Fits `model` on `dataset`.
    ///
    /// The unfitted model only carries the `Unfitted` type state into the call;
    /// its placeholder coefficients are never read, and the result depends on
    /// `dataset` and the trainer configuration alone.
    ///
    /// # Errors
    /// Returns [`DegenerateInputError::ConstantX`] when the line is not identifiable:
    /// every x-value is identical (or, without an intercept, every x-value is zero).
    /// Returns [`DegenerateInputError::NonFinite`] when a coefficient overflows `f64`.
    pub fn fit(
        &self,
        _model: LinearRegression,
        dataset: &Dataset,
    ) -> Result<LinearModel<Fitted>, DegenerateInputError> {
        debug!(
            "fitting OLS on {} observations (fit_intercept={})",
            dataset.len(),
            self.fit_intercept
        );

        let params = solve(&dataset.xs(), &dataset.ys(), self.fit_intercept)?;

        if self.verbose {
            info!(
                "fitted slope = {}, intercept = {} on n = {}",
                params.slope,
                params.intercept,
                dataset.len()
            );
        } else {
            debug!(
                "fitted slope = {}, intercept = {} on n = {}",
                params.slope,
                params.intercept,
                dataset.len()
            );
        }

        Ok(LinearModel::<Fitted>::new(params, Some(dataset.x_domain())))
    }
}

impl Default for Trainer {
    fn default() -> Self {
        TrainerBuilder::new().build()
    }
}
