use benchmarks::SyntheticSalaries;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use salary_regression::model::InferenceModel;
use salary_regression::prediction::{self, SweepOptions};
use salary_regression::{Fitted, LinearModel};

/// Fit a model once for prediction benchmarks
fn train_model_for_prediction() -> LinearModel<Fitted> {
    let dataset = SyntheticSalaries::default()
        .dataset(1_000)
        .expect("Failed to generate dataset");
    salary_regression::fit(&dataset).expect("Failed to fit model")
}

fn bench_predict_single(c: &mut Criterion) {
    let model = train_model_for_prediction();

    c.bench_function("predict_single", |b| {
        b.iter(|| black_box(salary_regression::predict(&model, black_box(5.0))));
    });
}

fn bench_predict_checked(c: &mut Criterion) {
    let model = train_model_for_prediction();

    // Inside the training domain, so nothing is logged.
    c.bench_function("predict_checked", |b| {
        b.iter(|| black_box(model.predict_checked(black_box(5.0))));
    });
}

fn bench_predict_batch(c: &mut Criterion) {
    let model = train_model_for_prediction();

    for batch_size in [10, 100, 1_000, 10_000].iter() {
        c.bench_with_input(
            BenchmarkId::new("predict_batch", batch_size),
            batch_size,
            |b, &bs| {
                let xs: Vec<f64> = (0..bs).map(|i| (i % 40) as f64 * 0.5).collect();
                b.iter(|| black_box(model.predict_batch(black_box(xs.as_slice()))));
            },
        );
    }
}

fn bench_sweep(c: &mut Criterion) {
    let model = train_model_for_prediction();
    let slider = SweepOptions::default();
    let fine = SweepOptions::new(0.0, 40.0, 0.01);

    let mut group = c.benchmark_group("sweep");
    group.bench_function("slider", |b| {
        b.iter(|| black_box(prediction::sweep(&model, black_box(&slider))));
    });
    group.bench_function("fine_grid", |b| {
        b.iter(|| black_box(prediction::sweep(&model, black_box(&fine))));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_predict_single,
    bench_predict_checked,
    bench_predict_batch,
    bench_sweep
);
criterion_main!(benches);
