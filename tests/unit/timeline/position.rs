use super::*;

fn prev(start: f64, duration: f64) -> Option<TimeSpan> {
    Some(TimeSpan::new(start, duration))
}

#[test]
fn parses_string_forms() {
    assert_eq!(Position::parse(">").unwrap(), Position::AfterPrevious);
    assert_eq!(Position::parse(" < ").unwrap(), Position::WithPrevious);
    assert_eq!(Position::parse("+=0.5").unwrap(), Position::Offset(0.5));
    assert_eq!(Position::parse("-=2").unwrap(), Position::Offset(-2.0));
    assert_eq!(Position::parse("+= 1.25").unwrap(), Position::Offset(1.25));
}

#[test]
fn rejects_malformed_strings() {
    for bad in ["", "abc", "+=", "-=x", "*=2", "+=inf", "+=NaN", "2.5", ">>"] {
        assert!(Position::parse(bad).is_err(), "{bad:?} should not parse");
    }
    assert_eq!(
        Position::from("later"),
        Position::Unparsed("later".to_owned())
    );
    assert_eq!(Position::from(String::from("+=1")), Position::Offset(1.0));
    assert_eq!("<".parse::<Position>().unwrap(), Position::WithPrevious);
}

#[test]
fn resolves_against_first_entry_as_zero() {
    assert_eq!(Position::AfterPrevious.resolve(None), Ok(0.0));
    assert_eq!(Position::WithPrevious.resolve(None), Ok(0.0));
    assert_eq!(Position::Offset(0.5).resolve(None), Ok(0.5));
    assert_eq!(Position::Offset(-0.5).resolve(None), Ok(0.0));
}

#[test]
fn resolves_relative_to_previous_entry() {
    let p = prev(1.0, 2.0);
    assert_eq!(Position::AfterPrevious.resolve(p), Ok(3.0));
    assert_eq!(Position::WithPrevious.resolve(p), Ok(1.0));
    assert_eq!(Position::Offset(0.5).resolve(p), Ok(3.5));
    assert_eq!(Position::Offset(-1.0).resolve(p), Ok(2.0));
    assert_eq!(Position::Offset(-10.0).resolve(p), Ok(0.0));
}

#[test]
fn absolute_positions_clamp_negative() {
    assert_eq!(Position::At(-5.0).resolve(prev(0.0, 1.0)), Ok(0.0));
    assert_eq!(Position::from(4).resolve(None), Ok(4.0));
}

#[test]
fn malformed_positions_resolve_to_diagnostics() {
    let err = Position::from("soon").resolve(None).unwrap_err();
    assert_eq!(err.input, "soon");

    let err = Position::At(f64::NAN).resolve(None).unwrap_err();
    assert_eq!(err.input, "NaN");

    let err = Position::Offset(f64::INFINITY).resolve(None).unwrap_err();
    assert_eq!(err.input, "+=inf");
}

#[test]
fn display_round_trips_parseable_forms() {
    for pos in [
        Position::AfterPrevious,
        Position::WithPrevious,
        Position::Offset(0.5),
        Position::Offset(-2.0),
    ] {
        assert_eq!(Position::parse(&pos.to_string()).unwrap(), pos);
    }
}
