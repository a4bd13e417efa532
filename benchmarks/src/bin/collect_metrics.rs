//! Collect fit metrics for salary-regression on synthetic data.
//!
//! For each dataset size this fits once and records fit time, the recovered
//! coefficients and the in-sample MSE, MAE and R².

use benchmarks::{benchmark_fn, SyntheticSalaries};
use salary_regression::metrics::Metrics;
use salary_regression::model::InferenceModel;
use salary_regression::{Dataset, LinearRegression};
use serde_json::json;
use std::error::Error;
use std::fs;
use std::path::Path;

const OUTPUT: &str = "benchmarks/results/rust_metrics.json";

fn collect_metrics(
    generator: &SyntheticSalaries,
    n_rows: usize,
) -> Result<serde_json::Value, Box<dyn Error>> {
    let dataset: Dataset = generator.dataset(n_rows)?;

    let (fitted, fit_ms, fit_std_ms) =
        benchmark_fn(3, 20, || LinearRegression::new().fit(&dataset));
    let model = fitted.ok_or("no fit iterations ran")??;

    let predictions = model.predict_batch(dataset.xs().as_slice());
    let metrics = Metrics::calculate_all(&dataset.ys(), &predictions);

    Ok(json!({
        "n_rows": n_rows,
        "model": "LinearRegression",
        "fit_time_ms": fit_ms,
        "fit_time_std_ms": fit_std_ms,
        "slope": model.slope(),
        "intercept": model.intercept(),
        "mse": metrics.mse,
        "mae": metrics.mae,
        "r2": metrics.r_squared,
    }))
}

fn main() -> Result<(), Box<dyn Error>> {
    let generator = SyntheticSalaries::default();
    let mut results = Vec::new();

    for n_rows in [30, 1_000, 100_000, 1_000_000] {
        println!("Collecting metrics for {} rows...", n_rows);
        results.push(collect_metrics(&generator, n_rows)?);
    }

    let output = json!({
        "generator": {
            "slope": generator.slope,
            "intercept": generator.intercept,
            "noise": generator.noise,
            "seed": generator.seed,
        },
        "results": results,
    });

    if let Some(dir) = Path::new(OUTPUT).parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(OUTPUT, serde_json::to_string_pretty(&output)?)?;

    println!("\nMetrics collected and saved to {}", OUTPUT);
    Ok(())
}
