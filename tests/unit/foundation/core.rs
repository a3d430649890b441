use super::*;

#[test]
fn local_alpha_before_during_after() {
    let span = TimeSpan::new(1.0, 2.0);
    assert_eq!(span.local_alpha(0.5), 0.0);
    assert_eq!(span.local_alpha(1.0), 0.0);
    assert_eq!(span.local_alpha(2.0), 0.5);
    assert_eq!(span.local_alpha(3.0), 1.0);
    assert_eq!(span.local_alpha(10.0), 1.0);
}

#[test]
fn instantaneous_span_jumps_to_one() {
    let span = TimeSpan::new(2.0, 0.0);
    assert!(span.is_empty());
    assert_eq!(span.local_alpha(1.999), 0.0);
    assert_eq!(span.local_alpha(2.0), 1.0);
}

#[test]
fn shift_moves_both_ends() {
    let span = TimeSpan::new(0.5, 1.0).shift(2.0);
    assert_eq!(span, TimeSpan { start: 2.5, end: 3.5 });
}

#[test]
fn clamp_time_handles_nan_and_bounds() {
    assert_eq!(clamp_time(-5.0, 3.0), 0.0);
    assert_eq!(clamp_time(1e9, 3.0), 3.0);
    assert_eq!(clamp_time(f64::NAN, 3.0), 0.0);
    assert_eq!(clamp_time(1.0, 0.0), 0.0);
}

#[test]
fn validate_duration_rejects_negative_and_non_finite() {
    assert!(validate_duration(0.0).is_ok());
    assert!(validate_duration(2.5).is_ok());
    assert!(validate_duration(-0.1).is_err());
    assert!(validate_duration(f64::NAN).is_err());
    assert!(validate_duration(f64::INFINITY).is_err());
}
