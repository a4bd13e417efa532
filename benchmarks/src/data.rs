use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use salary_regression::{DataLoadError, Dataset};

/// Generator for salary tables drawn around a known line.
///
/// Experience is uniform in `0..max_years`; salary is
/// `slope * years + intercept` plus uniform noise of `±noise`, clamped at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticSalaries {
    pub slope: f64,
    pub intercept: f64,
    pub noise: f64,
    pub max_years: f64,
    pub seed: u64,
}

impl Default for SyntheticSalaries {
    fn default() -> Self {
        Self {
            slope: 9_450.0,
            intercept: 25_800.0,
            noise: 6_000.0,
            max_years: 20.0,
            seed: 42,
        }
    }
}

impl SyntheticSalaries {
    pub fn columns(&self, n_rows: usize) -> (Vec<f64>, Vec<f64>) {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut xs = Vec::with_capacity(n_rows);
        let mut ys = Vec::with_capacity(n_rows);
        for _ in 0..n_rows {
            let x: f64 = rng.gen_range(0.0..self.max_years);
            let eps: f64 = if self.noise > 0.0 {
                rng.gen_range(-self.noise..self.noise)
            } else {
                0.0
            };
            xs.push(x);
            ys.push((self.slope * x + self.intercept + eps).max(0.0));
        }
        (xs, ys)
    }

    pub fn dataset(&self, n_rows: usize) -> Result<Dataset, DataLoadError> {
        let (xs, ys) = self.columns(n_rows);
        Dataset::from_columns(&xs, &ys)
    }
}
