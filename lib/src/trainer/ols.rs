//! Closed-form least squares for a single feature.

use crate::error::DegenerateInputError;
use crate::model::linear::LinearParams;

/// Solves simple linear regression in closed form.
///
/// With an intercept:
///
/// ```text
/// slope     = Σ (x_i - mean_x)(y_i - mean_y) / Σ (x_i - mean_x)^2
/// intercept = mean_y - slope * mean_x
/// ```
///
/// Without one, `slope = Σ x_i y_i / Σ x_i^2` and `intercept = 0`.
///
/// Both columns are divided by a power of two near their largest magnitude
/// before summing, so squares of large or tiny values neither overflow nor
/// underflow. Power-of-two scaling is exact: for inputs where the unscaled sums
/// stay in range, the result is bit-identical to the textbook formula.
///
/// `xs` and `ys` must have equal, non-zero length; a [`Dataset`](crate::dataset::Dataset)
/// guarantees both.
///
/// # Errors
/// [`DegenerateInputError::ConstantX`] if the denominator vanishes,
/// [`DegenerateInputError::NonFinite`] if a coefficient does not fit in an `f64`.
pub(crate) fn solve(
    xs: &[f64],
    ys: &[f64],
    fit_intercept: bool,
) -> Result<LinearParams, DegenerateInputError> {
    assert_eq!(xs.len(), ys.len(), "x and y must have the same length");

    let degenerate = || DegenerateInputError::ConstantX {
        x: xs.first().copied().unwrap_or(f64::NAN),
        rows: xs.len(),
    };

    // mean(x) of identical x is not always bit-equal to x; compare the inputs directly.
    if fit_intercept && xs.windows(2).all(|w| w[0] == w[1]) {
        return Err(degenerate());
    }

    let sx = pow2_scale(xs);
    let sy = pow2_scale(ys);
    let xs: Vec<f64> = xs.iter().map(|x| x / sx).collect();
    let ys: Vec<f64> = ys.iter().map(|y| y / sy).collect();

    let (slope, intercept) = if fit_intercept {
        let mean_x = mean(&xs);
        let mean_y = mean(&ys);

        let (sxy, sxx) = xs
            .iter()
            .zip(&ys)
            .fold((0.0, 0.0), |(sxy, sxx), (&x, &y)| {
                let dx = x - mean_x;
                (sxy + dx * (y - mean_y), sxx + dx * dx)
            });
        if sxx == 0.0 {
            return Err(degenerate());
        }
        let slope = sxy / sxx;
        (slope, mean_y - slope * mean_x)
    } else {
        let sxx: f64 = xs.iter().map(|x| x * x).sum();
        if sxx == 0.0 {
            return Err(degenerate());
        }
        let sxy: f64 = xs.iter().zip(&ys).map(|(x, y)| x * y).sum();
        (sxy / sxx, 0.0)
    };

    // Undo the scaling; a zero slope stays zero even when sy / sx overflows.
    let slope = if slope == 0.0 { 0.0 } else { slope * (sy / sx) };
    let intercept = intercept * sy;
    if !slope.is_finite() || !intercept.is_finite() {
        return Err(DegenerateInputError::NonFinite { slope, intercept });
    }
    Ok(LinearParams { slope, intercept })
}

/// Power of two at or just below `max |v|`, or 1 when every value is zero.
fn pow2_scale(values: &[f64]) -> f64 {
    let max = values.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    if max == 0.0 || !max.is_finite() {
        return 1.0;
    }
    let exp = (max.log2().floor() as i32).clamp(-1022, 1023);
    2.0_f64.powi(exp)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
