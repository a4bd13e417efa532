use std::time::{Duration, Instant};

/// Runs `f` once and returns its result with the elapsed time.
pub fn time_fn<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Runs `f` `iterations` times after `warmup` unmeasured runs.
///
/// Returns the last result with the mean and standard deviation of the
/// measured runs, in milliseconds.
pub fn benchmark_fn<F, R>(warmup: usize, iterations: usize, mut f: F) -> (Option<R>, f64, f64)
where
    F: FnMut() -> R,
{
    for _ in 0..warmup {
        std::hint::black_box(f());
    }

    let mut last = None;
    let mut times = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let (result, elapsed) = time_fn(&mut f);
        last = Some(result);
        times.push(elapsed.as_secs_f64() * 1000.0);
    }

    if times.is_empty() {
        return (last, 0.0, 0.0);
    }
    let mean = times.iter().sum::<f64>() / times.len() as f64;
    let variance = times.iter().map(|&t| (t - mean).powi(2)).sum::<f64>() / times.len() as f64;

    (last, mean, variance.sqrt())
}
