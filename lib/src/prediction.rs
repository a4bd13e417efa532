//! Point predictions annotated with the training domain, and prediction sweeps.
//!
//! A sweep evaluates a fitted model over an evenly spaced grid of inputs, the
//! value set of an experience slider (0 to 20 years in half-year steps by default).

use crate::model::linear::LinearModel;
use crate::model::Fitted;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// A predicted salary for one input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Years of experience the prediction was made for.
    pub input: f64,
    /// `slope * input + intercept`; may be negative far outside the training range.
    pub value: f64,
    /// `true` when `input` lies outside the model's known training domain.
    pub extrapolated: bool,
}

/// Upper bound on the number of points a sweep evaluates.
pub const MAX_SWEEP_POINTS: usize = 1_000_000;

/// Grid of inputs for [`sweep`], `start..=end` by `step`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepOptions {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 20.0,
            step: 0.5,
        }
    }
}

impl SweepOptions {
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        Self { start, end, step }
    }

    /// Number of grid points, or `None` when the grid is invalid or holds more
    /// than [`MAX_SWEEP_POINTS`] points.
    pub fn point_count(&self) -> Option<usize> {
        if !(self.start.is_finite() && self.end.is_finite() && self.step.is_finite())
            || self.step <= 0.0
            || self.end < self.start
        {
            return None;
        }
        // Tolerate the last point landing a few ulps past `end`.
        let intervals = ((self.end - self.start) / self.step + 1e-9).floor();
        if !intervals.is_finite() || intervals >= MAX_SWEEP_POINTS as f64 {
            return None;
        }
        (intervals as usize).checked_add(1)
    }

    /// The grid points. Empty when `step` is not positive, `end < start`, a bound
    /// is not finite, or the grid would exceed [`MAX_SWEEP_POINTS`].
    ///
    /// Points are computed as `start + i * step`, so long grids do not accumulate drift.
    pub fn points(&self) -> Vec<f64> {
        match self.point_count() {
            Some(n) => (0..n).map(|i| self.start + i as f64 * self.step).collect(),
            None => {
                warn!(
                    "sweep {}..={} by {} is empty or exceeds {} points; nothing to evaluate",
                    self.start, self.end, self.step, MAX_SWEEP_POINTS
                );
                Vec::new()
            }
        }
    }
}

/// Predicts every point of the grid described by `options`.
pub fn sweep(model: &LinearModel<Fitted>, options: &SweepOptions) -> Vec<Prediction> {
    let predictions: Vec<Prediction> = options
        .points()
        .into_iter()
        .map(|x| model.prediction(x))
        .collect();
    debug!(
        "swept {} inputs, {} outside the training domain",
        predictions.len(),
        predictions.iter().filter(|p| p.extrapolated).count()
    );
    predictions
}
