use benchmarks::SyntheticSalaries;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use salary_regression::dataset::csv::{self, CsvOptions};
use salary_regression::trainer::Trainer;
use salary_regression::LinearRegression;

fn bench_fit(c: &mut Criterion) {
    let generator = SyntheticSalaries::default();
    let mut group = c.benchmark_group("fit");

    for n_rows in [30, 1_000, 100_000].iter() {
        let dataset = generator
            .dataset(*n_rows)
            .expect("Failed to generate dataset");
        group.throughput(Throughput::Elements(*n_rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n_rows), &dataset, |b, ds| {
            b.iter(|| black_box(LinearRegression::new().fit(black_box(ds))));
        });
    }
    group.finish();
}

fn bench_fit_without_intercept(c: &mut Criterion) {
    let dataset = SyntheticSalaries::default()
        .dataset(100_000)
        .expect("Failed to generate dataset");
    let trainer = Trainer::builder().fit_intercept(false).verbose(false).build();

    c.bench_function("fit_no_intercept", |b| {
        b.iter(|| black_box(trainer.fit(LinearRegression::new(), black_box(&dataset))));
    });
}

fn bench_load_csv(c: &mut Criterion) {
    let (xs, ys) = SyntheticSalaries::default().columns(10_000);
    let mut text = String::from("YearsExperience,Salary\n");
    for (x, y) in xs.iter().zip(&ys) {
        text.push_str(&format!("{},{}\n", x, y));
    }
    let options = CsvOptions::default();

    c.bench_function("load_csv_10k", |b| {
        b.iter(|| black_box(csv::from_reader(black_box(text.as_bytes()), &options)));
    });
}

criterion_group!(
    benches,
    bench_fit,
    bench_fit_without_intercept,
    bench_load_csv
);
criterion_main!(benches);
