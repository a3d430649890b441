use super::*;
use crate::animation::{ease::Ease, tween::shared};

#[test]
fn leaf_rejects_invalid_durations() {
    assert!(Leaf::wait(-1.0).is_err());
    assert!(Leaf::wait(f64::NAN).is_err());
    assert!(Leaf::wait(0.0).is_ok());
}

#[test]
fn lifecycle_transitions() {
    let value = shared(0.0_f64);
    let mut anim = Animation::from(Leaf::tween(1.0, value.clone(), 1.0).unwrap());
    assert_eq!(anim.state(), Lifecycle::NotStarted);

    anim.begin();
    assert_eq!(anim.state(), Lifecycle::Running);
    anim.interpolate(0.5);
    assert_eq!(anim.state(), Lifecycle::Running);
    assert!(!anim.is_finished());

    anim.finish();
    assert_eq!(anim.state(), Lifecycle::Finished);
    assert!(anim.is_finished());

    anim.reset();
    assert_eq!(anim.state(), Lifecycle::NotStarted);
    assert!(!anim.is_finished());
}

#[test]
fn reset_before_begin_is_harmless() {
    let mut anim = Animation::from(Leaf::wait(1.0).unwrap());
    anim.reset();
    anim.reset();
    assert_eq!(anim.state(), Lifecycle::NotStarted);
}

#[test]
fn begin_only_snapshots_once() {
    let value = shared(0.0_f64);
    let mut leaf = Leaf::tween(1.0, value.clone(), 10.0).unwrap();
    leaf.begin();
    leaf.interpolate(0.5);
    leaf.begin();
    leaf.interpolate(1.0);
    assert_eq!(*value.borrow(), 10.0);
}

#[test]
fn drive_applies_own_rate_once() {
    let value = shared(0.0_f64);
    let mut anim = Animation::from(
        Leaf::tween(1.0, value.clone(), 1.0)
            .unwrap()
            .with_rate(Ease::InQuad),
    );
    anim.begin();
    anim.drive(0.5);
    assert_eq!(*value.borrow(), 0.25);

    anim.interpolate(0.5);
    assert_eq!(*value.borrow(), 0.5);
}

#[test]
fn finish_uses_rate_end_value() {
    let value = shared(2.0_f64);
    let mut leaf = Leaf::tween(1.0, value.clone(), 5.0)
        .unwrap()
        .with_rate(Ease::ThereAndBack);
    leaf.begin();
    leaf.interpolate(1.0);
    assert_eq!(*value.borrow(), 5.0);
    leaf.finish();
    assert!((*value.borrow() - 2.0).abs() < 1e-9);
}

#[test]
fn zero_duration_leaf_snaps_on_finish_without_begin() {
    let value = shared(1.0_f64);
    let mut leaf = Leaf::tween(0.0, value.clone(), 4.0).unwrap();
    leaf.finish();
    assert_eq!(*value.borrow(), 4.0);
    assert!(leaf.is_finished());
    leaf.finish();
    assert_eq!(*value.borrow(), 4.0);
}

#[test]
fn from_fn_receives_alpha() {
    let seen = shared(Vec::new());
    let sink = seen.clone();
    let mut leaf = Leaf::from_fn(2.0, move |a| sink.borrow_mut().push(a)).unwrap();
    leaf.begin();
    leaf.interpolate(0.25);
    leaf.finish();
    assert_eq!(*seen.borrow(), vec![0.25, 1.0]);
}

#[test]
fn debug_output_names_variant() {
    let anim = Animation::from(Leaf::wait(1.5).unwrap());
    let dbg = format!("{anim:?}");
    assert!(dbg.starts_with("Leaf(Leaf {"));
    assert!(dbg.contains("duration: 1.5"));
}
