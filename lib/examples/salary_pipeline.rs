//! Salary Prediction Pipeline Example
//!
//! Load → Fit → Predict on the bundled `data/salary.csv`:
//! - Load the two-column CSV into a validated dataset
//! - Fit an ordinary least-squares line once
//! - Print the fitted formula and in-sample metrics
//! - Predict over the 0-20 year slider, flagging extrapolated inputs
//! - Save the model and load it back
//!
//! Run with: RUST_LOG=debug cargo run --example salary_pipeline

use salary_regression::{
    CsvOptions, Fitted, InferenceModel, LinearModel, RegressionPipeline, SweepOptions,
};
use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== Salary Prediction Pipeline ===\n");

    // 1. Load + fit
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/salary.csv");
    let pipeline = RegressionPipeline::from_path(&path, &CsvOptions::default())?;
    let dataset = pipeline.dataset();
    let domain = dataset.x_domain();

    println!("Loaded {} rows from {}", dataset.len(), path.display());
    println!(
        "Experience range: {:.1} - {:.1} years\n",
        domain.min, domain.max
    );

    // 2. Model summary
    let model = pipeline.model();
    println!("Fitted: {:.2}", model);
    let metrics = pipeline.metrics();
    println!(
        "MSE: {:.2}  RMSE: {:.2}  MAE: {:.2}  R²: {:.4}\n",
        metrics.mse, metrics.rmse, metrics.mae, metrics.r_squared
    );

    // 3. Slider sweep
    println!("{:>8} {:>14}", "years", "salary");
    for p in pipeline.sweep(&SweepOptions::new(0.0, 20.0, 2.5)) {
        let marker = if p.extrapolated { " (extrapolated)" } else { "" };
        println!("{:>8.1} {:>14.2}{}", p.input, p.value, marker);
    }

    // 4. Persistence
    let model_path = std::env::temp_dir().join("salary_model.bin");
    model.save_to_file(&model_path)?;
    let loaded = LinearModel::<Fitted>::load_from_file(&model_path)?;
    println!(
        "\nReloaded model from {}: predict(5.0) = {:.2}",
        model_path.display(),
        loaded.predict(&5.0)
    );
    std::fs::remove_file(&model_path)?;

    Ok(())
}
