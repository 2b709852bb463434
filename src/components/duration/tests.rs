use std::cmp::Ordering;

use super::*;
use crate::components::Date;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::try_new(y, m, d).unwrap()
}

#[test]
fn construction_folds_components() {
    let d = Duration::new(0, 0, 1, 2, 25, 61, 61, 1_500_000);
    assert_eq!(d.years(), 0);
    assert_eq!(d.days(), 10);
    assert_eq!(d.seconds(), 2 * 3600 + 2 * 60 + 2);
    assert_eq!(d.microseconds(), 500_000);
}

#[test]
fn equality_is_field_by_field() {
    // A year is not twelve months and a day is not 24 hours here; the
    // nominal and exact halves never convert into each other.
    assert_ne!(Duration::new(1, 0, 0, 0, 0, 0, 0, 0), Duration::new(0, 12, 0, 0, 0, 0, 0, 0));
    assert_eq!(
        Duration::new(0, 0, 0, 1, 0, 0, 0, 0),
        Duration::new(0, 0, 0, 0, 24, 0, 0, 0)
    );
}

#[test]
fn nominal_date_shift_clamps_to_month_end() {
    let d: Duration = "P1M".parse().unwrap();
    assert_eq!(date(2000, 1, 31).add(&d).unwrap(), date(2000, 2, 29));
    assert_eq!(date(1999, 1, 31).add(&d).unwrap(), date(1999, 2, 28));
    assert_eq!(date(2000, 8, 31).add(&d).unwrap(), date(2000, 9, 30));
}

#[test]
fn nominal_shift_applies_before_exact_days() {
    // Years, then months, then the clamp, then the exact days.
    let d: Duration = "P1Y2M10DT2H30M".parse().unwrap();
    assert_eq!(date(2000, 1, 31).add(&d).unwrap(), date(2001, 4, 10));
}

#[test]
fn negative_durations_shift_backwards() {
    let d: Duration = "-P1D".parse().unwrap();
    assert_eq!(date(2000, 1, 1).add(&d).unwrap(), date(1999, 12, 31));
    assert_eq!(date(2000, 1, 1).subtract(&"P1D".parse().unwrap()).unwrap(), date(1999, 12, 31));
}

#[test]
fn sub_day_remainders_truncate_toward_zero() {
    let forward: Duration = "PT36H".parse().unwrap();
    assert_eq!(date(2000, 1, 1).add(&forward).unwrap(), date(2000, 1, 2));
    // Adding then subtracting an exact duration returns to the start.
    let d = date(2000, 1, 1);
    assert_eq!(d.add(&forward).unwrap().subtract(&forward).unwrap(), d);
    assert_eq!(d.subtract(&forward).unwrap().add(&forward).unwrap(), d);
}

#[test]
fn addition_is_componentwise() {
    let a = Duration::new(1, 2, 0, 3, 4, 0, 0, 0);
    let b = Duration::new(0, 11, 0, 30, 21, 0, 0, 0);
    let sum = a + b;
    assert_eq!((sum.years(), sum.months()), (1, 13));
    assert_eq!(sum.days(), 34);
    assert_eq!(sum.seconds(), 3600);
    assert_eq!(a + b, b + a);
}

#[test]
fn subtraction_and_negation() {
    let a = Duration::new(1, 0, 0, 10, 0, 0, 0, 0);
    let b = Duration::new(0, 3, 0, 2, 0, 0, 0, 0);
    let diff = a - b;
    assert_eq!((diff.years(), diff.months(), diff.days()), (1, -3, 8));
    assert_eq!(-(-a), a);
    assert_eq!(a + (-a), Duration::zero());
}

#[test]
fn scalar_multiplication() {
    let d = Duration::new(1, 2, 0, 3, 0, 0, 0, 0);
    let tripled = d * 3;
    assert_eq!((tripled.years(), tripled.months(), tripled.days()), (3, 6, 9));
    assert_eq!(d * -1, -d);
    assert_eq!(d * 0, Duration::zero());
}

#[test]
fn ordering_requires_matching_nominal_parts() {
    let a = Duration::new(1, 0, 0, 1, 0, 0, 0, 0);
    let b = Duration::new(1, 0, 0, 2, 0, 0, 0, 0);
    assert_eq!(a.compare(&b).unwrap(), Ordering::Less);
    assert!(a < b);

    let c = Duration::new(0, 12, 0, 5, 0, 0, 0, 0);
    assert!(matches!(
        a.compare(&c),
        Err(IsoError::IncomparableDurations)
    ));
    assert_eq!(a.partial_cmp(&c), None);
}

#[test]
fn exact_durations_are_totally_ordered() {
    let a = Duration::from_days(1);
    let b = Duration::new(0, 0, 0, 0, 25, 0, 0, 0);
    assert_eq!(a.compare(&b).unwrap(), Ordering::Less);
    assert_eq!(a.compare(&a).unwrap(), Ordering::Equal);
}

#[test]
fn total_seconds_needs_a_zero_nominal_part() {
    let d = Duration::new(0, 0, 0, 1, 0, 0, 30, 500_000);
    assert_eq!(d.total_seconds().unwrap(), 86_430.5);
    assert!(Duration::new(0, 1, 0, 0, 0, 0, 0, 0).total_seconds().is_err());
}

#[test]
fn signs_and_zero() {
    assert!(Duration::zero().is_zero());
    assert!(!Duration::zero().is_negative());
    assert!(Duration::from_days(-1).is_negative());
    assert!(Duration::new(-1, 0, 0, 0, 0, 0, 0, 0).is_negative());
}

#[test]
fn uniform_sign_detection() {
    assert!(Duration::zero().has_uniform_sign());
    assert!(Duration::from_days(-3).has_uniform_sign());
    assert!(Duration::new(-1, -2, 0, -3, 0, 0, 0, 0).has_uniform_sign());
    assert!(!Duration::new(1, -3, 0, 0, 0, 0, 0, 0).has_uniform_sign());
    assert!(!Duration::new(0, 1, 0, -1, 0, 0, 0, 0).has_uniform_sign());
}

#[test]
fn whole_week_detection() {
    assert!(Duration::from_days(14).is_whole_weeks());
    assert!(Duration::from_days(-7).is_whole_weeks());
    assert!(!Duration::from_days(10).is_whole_weeks());
    assert!(!Duration::new(0, 1, 1, 0, 0, 0, 0, 0).is_whole_weeks());
    assert!(!Duration::zero().is_whole_weeks());
}

#[test]
fn display_round_trips_through_parsing() {
    for text in ["P1Y2M10DT2H30M", "P2W", "-P1D", "PT0.5S", "P0D"] {
        let d: Duration = text.parse().unwrap();
        assert_eq!(d.to_string(), text);
    }
}
