use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

const MONOTONE: [Ease; 13] = [
    Ease::Linear,
    Ease::Smooth,
    Ease::RushInto,
    Ease::RushFrom,
    Ease::SlowInto,
    Ease::DoubleSmooth,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InOutSine,
];

#[test]
fn monotone_eases_hit_both_endpoints() {
    for ease in MONOTONE {
        assert!(approx(ease.apply(0.0), 0.0), "{ease:?} at 0");
        assert!(approx(ease.apply(1.0), 1.0), "{ease:?} at 1");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::Linear.apply(-1.0), 0.0);
    assert_eq!(Ease::Linear.apply(2.0), 1.0);
}

#[test]
fn smooth_is_symmetric_about_midpoint() {
    assert!(approx(Ease::Smooth.apply(0.5), 0.5));
    assert!(approx(
        Ease::Smooth.apply(0.2) + Ease::Smooth.apply(0.8),
        1.0
    ));
}

#[test]
fn there_and_back_returns_to_start() {
    assert!(approx(Ease::ThereAndBack.apply(0.0), 0.0));
    assert!(approx(Ease::ThereAndBack.apply(0.5), 1.0));
    assert!(approx(Ease::ThereAndBack.apply(1.0), 0.0));
}

#[test]
fn overshooting_eases_leave_unit_interval() {
    assert!(Ease::RunningStart.apply(0.3) < 0.0);
    assert!(approx(Ease::RunningStart.apply(1.0), 1.0));
    assert!(Ease::InBack.apply(0.2) < 0.0);
    assert!(Ease::OutBack.apply(0.8) > 1.0);
    assert!(approx(Ease::OutBack.apply(1.0), 1.0));
}

#[test]
fn cubic_bezier_linear_control_points_is_identity() {
    let ease = Ease::CubicBezier(0.25, 0.25, 0.75, 0.75);
    for t in [0.1, 0.33, 0.5, 0.9] {
        assert!((ease.apply(t) - t).abs() < 1e-6);
    }
    let css_ease = Ease::CubicBezier(0.25, 0.1, 0.25, 1.0);
    assert_eq!(css_ease.apply(0.0), 0.0);
    assert_eq!(css_ease.apply(1.0), 1.0);
    assert!(css_ease.apply(0.5) > 0.5);
}

#[test]
fn rate_function_custom_is_unclamped() {
    let rate = RateFunction::custom(|t| t * 3.0);
    assert_eq!(rate.apply(0.5), 1.5);
    assert_eq!(rate.end_value(), 3.0);
    assert_eq!(format!("{rate:?}"), "Custom(..)");
}

#[test]
fn rate_function_custom_may_capture_shared_state() {
    let gain = std::rc::Rc::new(std::cell::Cell::new(2.0));
    let handle = gain.clone();
    let rate = RateFunction::custom(move |t| t * handle.get());
    assert_eq!(rate.apply(0.5), 1.0);
    gain.set(4.0);
    assert_eq!(rate.clone().apply(0.5), 2.0);
}

#[test]
fn rate_function_defaults_to_linear() {
    let rate = RateFunction::default();
    assert_eq!(rate.apply(0.25), 0.25);
    assert!(matches!(rate, RateFunction::Ease(Ease::Linear)));
}

#[test]
fn ease_roundtrips_through_json() {
    let json = serde_json::to_string(&Ease::CubicBezier(0.1, 0.2, 0.3, 0.4)).unwrap();
    let back: Ease = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Ease::CubicBezier(0.1, 0.2, 0.3, 0.4));
}
