mod test_utils;

use bs_sensitivity_lib::{
    compute_dashboard, default_configs, greeks, greeks_curve, normalize, price, price_curve,
    price_surface, sweep, sweep_1d, sweep_2d, ColorScale, GreekSeries, OptionType, Param, Rgb,
    SamplerConfig, SpotSweepConfig, SurfaceConfig, SweepAxis, SweepOutput, SweepSpec,
};
use test_utils::{assert_close, random_params, reference_params};

/// N intervals give N + 1 strictly increasing points, starting at or above the floor.
#[test]
fn test_price_curve_shape() {
    for p in random_params(23, 50) {
        for steps in [1, 7, 40, 50] {
            let config = SpotSweepConfig {
                steps,
                ..SpotSweepConfig::price_curve()
            };
            let curve = price_curve(&p, &config).unwrap();

            assert_eq!(curve.points.len(), steps + 1);
            assert!(curve.points[0].spot >= 1.0);
            assert!(curve
                .points
                .windows(2)
                .all(|w| w[1].spot > w[0].spot));
        }
    }
}

#[test]
fn test_price_curve_floor_applies_to_small_spots() {
    let p = reference_params().with(Param::Spot, 1.2);
    let curve = price_curve(&p, &SpotSweepConfig::price_curve()).unwrap();

    assert_eq!(curve.points[0].spot, 1.0);
    assert_close(curve.points[50].spot, 1.8, 1e-12, "upper bound");
}

#[test]
fn test_price_curve_values_match_kernel() {
    let p = reference_params();
    let curve = price_curve(&p, &SpotSweepConfig::price_curve()).unwrap();

    for point in &curve.points {
        let at = p.with(Param::Spot, point.spot);
        assert_eq!(point.call, price(&at, OptionType::Call));
        assert_eq!(point.put, price(&at, OptionType::Put));
    }
}

#[test]
fn test_price_curve_flags_one_point_at_most() {
    for p in random_params(29, 100) {
        let curve = price_curve(&p, &SpotSweepConfig::price_curve()).unwrap();
        let flagged = curve.points.iter().filter(|pt| pt.is_current).count();
        assert_eq!(flagged, 1, "base spot {} should be inside its sweep", p.spot);

        let current = curve.current().unwrap();
        assert!(current.spot >= p.spot);
        assert!(current.spot - p.spot < 0.02 * p.spot + 1e-9);
    }
}

#[test]
fn test_price_curve_rejects_empty_range() {
    let p = reference_params().with(Param::Spot, 0.5);
    assert!(price_curve(&p, &SpotSweepConfig::price_curve()).is_err());
}

#[test]
fn test_surface_grid_contents() {
    let p = reference_params();
    let surface = price_surface(&p, &SurfaceConfig::default()).unwrap();

    assert_eq!(surface.points.len(), 20 * 20);
    for point in &surface.points {
        assert!(point.time >= 0.01);
        assert!(point.spot >= 80.0 - 1e-9);
        let expected = price(
            &p.with(Param::Spot, point.spot)
                .with(Param::TimeToMaturity, point.time),
            OptionType::Call,
        );
        assert_eq!(point.price, expected);
    }

    // spot-major, strictly increasing lexicographic order
    assert!(surface
        .points
        .windows(2)
        .all(|w| (w[0].spot, w[0].time) < (w[1].spot, w[1].time)));
}

#[test]
fn test_surface_at_expiry_keeps_time_floor() {
    // T = 0 must not drag the time axis onto the intrinsic-value boundary
    let p = reference_params().with(Param::TimeToMaturity, 0.0);
    let surface = price_surface(&p, &SurfaceConfig::default()).unwrap();
    assert!(surface.points.iter().all(|pt| pt.time >= 0.01));
}

#[test]
fn test_surface_colors() {
    let surface = price_surface(&reference_params(), &SurfaceConfig::default()).unwrap();
    let scale = ColorScale::default();
    let colors = surface.colors(&scale);
    let (min, max) = surface.range().unwrap();

    assert_eq!(colors.len(), surface.points.len());
    for (point, color) in surface.points.iter().zip(&colors) {
        if point.price == min {
            assert_eq!(*color, scale.low);
        }
        if point.price == max {
            assert_eq!(*color, scale.high);
        }
    }
}

#[test]
fn test_constant_surface_colors_to_low_end() {
    // deep OTM call, short dated: every node prices to (almost) zero
    let p = reference_params()
        .with(Param::Strike, 1.0e6)
        .with(Param::Volatility, 0.01);
    let config = SurfaceConfig {
        min_time_horizon: 0.05,
        ..SurfaceConfig::default()
    };
    let surface = price_surface(&p, &config).unwrap();
    let colors = surface.colors(&ColorScale::default());

    assert!(colors.iter().all(|c| *c == Rgb::new(30, 58, 138)));
    assert_eq!(normalize(0.0, 0.0, 0.0), 0.0);
}

#[test]
fn test_greeks_curve_series() {
    let p = reference_params();
    let curve = greeks_curve(&p, &SpotSweepConfig::greeks_curve()).unwrap();
    let spots = curve.spots();

    assert_eq!(spots.len(), 41);
    let delta_call = curve.series(GreekSeries::DeltaCall);
    let delta_put = curve.series(GreekSeries::DeltaPut);
    for i in 0..spots.len() {
        assert_close(delta_call[i] - delta_put[i], 1.0, 1e-12, "delta spread");
        let g = greeks(&p.with(Param::Spot, spots[i]));
        assert_eq!(curve.series(GreekSeries::Vega)[i], g.vega);
    }

    // call delta rises with spot
    assert!(delta_call.windows(2).all(|w| w[1] > w[0]));

    let names: Vec<&str> = curve.all_series().keys().copied().collect();
    assert_eq!(
        names,
        vec!["deltaCall", "deltaPut", "gamma", "rhoCall", "rhoPut", "thetaCall", "thetaPut", "vega"]
    );
}

#[test]
fn test_generic_sweeps_over_other_inputs() {
    let p = reference_params();
    let vols = SweepAxis::inclusive(0.05, 0.65, 12).unwrap();
    let series = sweep_1d(&p, Param::Volatility, &vols, |q| price(q, OptionType::Call));

    assert_eq!(series.len(), 13);
    // call price increases with volatility
    assert!(series.windows(2).all(|w| w[1].value > w[0].value));

    let strikes = SweepAxis::exclusive(80.0, 120.0, 4).unwrap();
    let rates = SweepAxis::exclusive(0.0, 0.1, 5).unwrap();
    let grid = sweep_2d(
        &p,
        (Param::Strike, &strikes),
        (Param::RiskFreeRate, &rates),
        |q| price(q, OptionType::Put),
    );
    assert_eq!(grid.len(), 20);
    assert_eq!((grid[0].a, grid[0].b), (80.0, 0.0));
    assert_eq!(grid[5].a, 90.0);

    let spec = SweepSpec::Grid {
        outer: (Param::Strike, strikes),
        inner: (Param::RiskFreeRate, rates),
    };
    match sweep(&p, &spec, |q| price(q, OptionType::Put)) {
        SweepOutput::Grid(points) => assert_eq!(points, grid),
        SweepOutput::Series(_) => panic!("expected a grid"),
    }
}

#[test]
fn test_sweeps_are_bit_reproducible() {
    let p = reference_params();
    let config = SamplerConfig::dashboard();

    let a = compute_dashboard(&p, &config).unwrap();
    let b = compute_dashboard(&p, &config).unwrap();

    assert_eq!(a.price_curve, b.price_curve);
    assert_eq!(a.surface, b.surface);
    assert_eq!(a.greeks_curve, b.greeks_curve);
    assert_eq!(a.surface_colors, b.surface_colors);
}

#[test]
fn test_dashboard_headline_values() {
    let series = compute_dashboard(&reference_params(), &default_configs::coarse()).unwrap();

    assert_close(series.call_price, 10.4506, 1e-4, "call");
    assert_close(series.put_price, 5.5735, 1e-4, "put");
    assert_eq!(series.price_curve.points.len(), 11);
    assert_eq!(series.surface.points.len(), 25);
    assert_eq!(series.greeks_curve.points.len(), 11);
}

#[test]
fn test_sweeps_from_threads() {
    let handles: Vec<_> = random_params(31, 8)
        .into_iter()
        .map(|p| std::thread::spawn(move || compute_dashboard(&p, &default_configs::coarse())))
        .collect();

    for handle in handles {
        let series = handle.join().unwrap().unwrap();
        assert_eq!(series.surface.points.len(), 25);
    }
}
