use proptest::prelude::*;
use salary_regression::{Dataset, DataLoadError, Observation};

fn spread(xs: impl Iterator<Item = f64> + Clone) -> f64 {
    let max = xs.clone().fold(f64::MIN, f64::max);
    let min = xs.fold(f64::MAX, f64::min);
    max - min
}

/// Datasets whose x-values span at least a year, in the ranges a salary table uses.
fn observations() -> impl Strategy<Value = Vec<Observation>> {
    prop::collection::vec((0.0f64..40.0, 1_000.0f64..500_000.0), 2..60)
        .prop_filter("x-values need some spread", |rows| {
            spread(rows.iter().map(|&(x, _)| x)) >= 1.0
        })
        .prop_map(|rows| {
            rows.into_iter()
                .map(|(x, y)| Observation::new(x, y))
                .collect()
        })
}

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #[test]
    fn fit_is_deterministic(rows in observations()) {
        let ds = Dataset::new(rows).unwrap();
        let a = salary_regression::fit(&ds).unwrap();
        let b = salary_regression::fit(&ds).unwrap();

        prop_assert_eq!(a.slope().to_bits(), b.slope().to_bits());
        prop_assert_eq!(a.intercept().to_bits(), b.intercept().to_bits());
    }

    #[test]
    fn fit_is_order_invariant(rows in observations(), seed in any::<u64>()) {
        let forward = Dataset::new(rows.clone()).unwrap();
        let mut shuffled = rows;
        // Deterministic rotation + reversal stands in for a shuffle.
        let k = (seed % shuffled.len() as u64) as usize;
        shuffled.rotate_left(k);
        shuffled.reverse();
        let shuffled = Dataset::new(shuffled).unwrap();

        let a = salary_regression::fit(&forward).unwrap();
        let b = salary_regression::fit(&shuffled).unwrap();

        let domain = forward.x_domain();
        for x in [domain.min, domain.max] {
            prop_assert!(close(a.predict_value(x), b.predict_value(x), 1e-6));
        }
    }

    #[test]
    fn fit_recovers_exact_line(
        xs in prop::collection::vec(0.0f64..40.0, 2..60),
        a in 0.0f64..20_000.0,
        b in 0.0f64..100_000.0,
    ) {
        prop_assume!(spread(xs.iter().copied()) >= 1.0);
        let ys: Vec<f64> = xs.iter().map(|&x| a * x + b).collect();
        let ds = Dataset::from_columns(&xs, &ys).unwrap();
        let model = salary_regression::fit(&ds).unwrap();

        prop_assert!(close(model.slope(), a, 1e-6), "slope {} vs {}", model.slope(), a);
        let scale = 1.0 + b + a * 40.0;
        prop_assert!((model.intercept() - b).abs() <= 1e-6 * scale, "intercept {} vs {}", model.intercept(), b);
    }

    #[test]
    fn fit_scales_exactly_with_powers_of_two(rows in observations(), kx in -300i32..300, ky in -300i32..300) {
        let (fx, fy) = (2.0f64.powi(kx), 2.0f64.powi(ky));
        let base = Dataset::new(rows.clone()).unwrap();
        let scaled: Vec<Observation> = rows
            .iter()
            .map(|o| Observation::new(o.experience_years * fx, o.salary * fy))
            .collect();
        let scaled = Dataset::new(scaled).unwrap();

        let a = salary_regression::fit(&base).unwrap();
        let b = salary_regression::fit(&scaled).unwrap();

        prop_assert!(b.slope().is_finite() && b.intercept().is_finite());
        prop_assert_eq!(b.slope().to_bits(), (a.slope() * (fy / fx)).to_bits());
        prop_assert_eq!(b.intercept().to_bits(), (a.intercept() * fy).to_bits());
    }

    #[test]
    fn predict_is_linear(rows in observations(), x1 in -50.0f64..50.0, x2 in -50.0f64..50.0) {
        let model = salary_regression::fit(&Dataset::new(rows).unwrap()).unwrap();
        let lhs = salary_regression::predict(&model, x1) - salary_regression::predict(&model, x2);
        let rhs = model.slope() * (x1 - x2);
        let scale = model.slope().abs() * 100.0 + model.intercept().abs();

        prop_assert!((lhs - rhs).abs() <= 1e-9 * (1.0 + scale));
    }

    #[test]
    fn predict_matches_formula_exactly(rows in observations(), x in 0.0f64..100.0) {
        let model = salary_regression::fit(&Dataset::new(rows).unwrap()).unwrap();

        prop_assert_eq!(
            salary_regression::predict(&model, x).to_bits(),
            (model.slope() * x + model.intercept()).to_bits()
        );
        prop_assert_eq!(salary_regression::predict(&model, 0.0), model.intercept());
    }

    #[test]
    fn constant_x_is_degenerate(x in 0.0f64..40.0, ys in prop::collection::vec(0.0f64..1e6, 2..30)) {
        let xs = vec![x; ys.len()];
        let ds = Dataset::from_columns(&xs, &ys).unwrap();

        prop_assert!(salary_regression::fit(&ds).is_err());
    }

    #[test]
    fn fewer_than_two_rows_is_load_error(rows in prop::collection::vec((0.0f64..40.0, 0.0f64..1e6), 0..2)) {
        let n = rows.len();
        let rows = rows.into_iter().map(|(x, y)| Observation::new(x, y)).collect();
        let err = Dataset::new(rows).unwrap_err();

        if n == 0 {
            prop_assert!(matches!(err, DataLoadError::Empty), "expected Empty, got {:?}", err);
        } else {
            prop_assert!(
                matches!(err, DataLoadError::InsufficientRows { rows: 1 }),
                "expected InsufficientRows, got {:?}",
                err
            );
        }
    }
}
