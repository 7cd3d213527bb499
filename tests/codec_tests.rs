//! Library-level tests for the calendar codec: round trips, era boundary,
//! monotonicity and date-string parsing.

use rtimeline::core::{codec, parse};
use rtimeline::errors::AppError;
use rtimeline::models::calendar::CalendarConfig;
use rtimeline::models::date::WorldDate;

fn default_cal() -> CalendarConfig {
    CalendarConfig::new(3600, 24, 30, 12, None).expect("valid calendar")
}

#[test]
fn test_round_trip_exact_on_hour_multiples() {
    let cal = default_cal();

    for instant in [
        0i64,
        3600,
        -3600,
        86_400,
        -86_400,
        2_592_000,
        31_104_000,
        -31_104_000,
        123_456 * 3600,
        -987_654 * 3600,
    ] {
        let date = codec::to_world_date(instant, &cal);
        let back = codec::to_instant(&date, &cal).expect("round trip");
        assert_eq!(back, instant, "instant {} did not round-trip", instant);
    }
}

#[test]
fn test_round_trip_truncates_toward_epoch() {
    let cal = default_cal();

    // 5000 s = 1 h + 1400 s → reconstructs to the whole hour below
    let date = codec::to_world_date(5000, &cal);
    assert_eq!(codec::to_instant(&date, &cal).unwrap(), 3600);

    // same magnitude on the BC side truncates toward the epoch too
    let date = codec::to_world_date(-5000, &cal);
    assert_eq!(codec::to_instant(&date, &cal).unwrap(), -3600);

    for instant in [-100_001i64, -59, 59, 7201, 1_000_000] {
        let date = codec::to_world_date(instant, &cal);
        let back = codec::to_instant(&date, &cal).unwrap();
        let diff = (instant - back).abs();
        assert!(
            diff < cal.seconds_per_hour as i64,
            "reconstruction of {} drifted by {}",
            instant,
            diff
        );
    }
}

#[test]
fn test_sign_era_boundary() {
    let cal = default_cal();

    let epoch = codec::to_world_date(0, &cal);
    assert!(!epoch.is_bc);
    assert_eq!((epoch.year, epoch.month, epoch.day, epoch.hour), (0, 1, 1, 0));

    let before = codec::to_world_date(-1, &cal);
    assert!(before.is_bc);
    assert_eq!(
        (before.year, before.month, before.day, before.hour),
        (0, 1, 1, 0)
    );
}

#[test]
fn test_monotonicity_preserved_through_round_trip() {
    let cal = default_cal();

    let samples = [
        i64::MIN / 2,
        -31_104_000,
        -86_400,
        -3600,
        -1,
        0,
        1,
        3599,
        3600,
        86_400,
        2_592_000,
        i64::MAX / 2,
    ];

    for pair in samples.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let ra = codec::to_instant(&codec::to_world_date(a, &cal), &cal).unwrap();
        let rb = codec::to_instant(&codec::to_world_date(b, &cal), &cal).unwrap();
        assert!(ra <= rb, "order broken: {} → {}, {} → {}", a, ra, b, rb);
    }
}

#[test]
fn test_calendar_config_rejection() {
    assert!(matches!(
        CalendarConfig::new(0, 24, 30, 12, None),
        Err(AppError::NonPositiveRadix(_))
    ));
    assert!(matches!(
        CalendarConfig::new(3600, -24, 30, 12, None),
        Err(AppError::NonPositiveRadix(_))
    ));
    assert!(CalendarConfig::new(3600, 24, 30, 12, None).is_ok());
}

#[test]
fn test_to_instant_rejects_out_of_range_fields() {
    let cal = default_cal();

    let bad_month = WorldDate::new(false, 1, 13, 1, 0);
    assert!(matches!(
        codec::to_instant(&bad_month, &cal),
        Err(AppError::InvalidWorldDate(_))
    ));

    let bad_day = WorldDate::new(false, 1, 1, 31, 0);
    assert!(matches!(
        codec::to_instant(&bad_day, &cal),
        Err(AppError::InvalidWorldDate(_))
    ));

    let bad_hour = WorldDate::new(false, 1, 1, 1, 24);
    assert!(matches!(
        codec::to_instant(&bad_hour, &cal),
        Err(AppError::InvalidWorldDate(_))
    ));

    let zero_month = WorldDate::new(false, 1, 0, 1, 0);
    assert!(codec::to_instant(&zero_month, &cal).is_err());
}

#[test]
fn test_custom_radix_calendar() {
    // 60 s hours, 10 h days, 20 d months, 5 m years
    let cal = CalendarConfig::new(60, 10, 20, 5, None).unwrap();
    assert_eq!(cal.seconds_per_day(), 600);
    assert_eq!(cal.seconds_per_month(), 12_000);
    assert_eq!(cal.seconds_per_year(), 60_000);

    let date = codec::to_world_date(61, &cal);
    assert_eq!((date.year, date.month, date.day, date.hour), (0, 1, 1, 1));

    for instant in [0i64, 60, -120, 12_000, 60_000, 61_260, -61_260] {
        let d = codec::to_world_date(instant, &cal);
        assert_eq!(
            codec::to_instant(&d, &cal).unwrap(),
            instant - instant % 60
        );
    }
}

#[test]
fn test_format_is_stable_and_eras_are_distinct() {
    let cal = default_cal();

    assert_eq!(codec::format_instant(0, &cal), "AD 0-1-1");
    assert_eq!(codec::format_instant(-1, &cal), "BC 0-1-1");
    assert_ne!(
        codec::format_instant(86_400, &cal),
        codec::format_instant(-86_400, &cal)
    );

    // same instant, same rendering
    assert_eq!(
        codec::format_instant(12_345_678, &cal),
        codec::format_instant(12_345_678, &cal)
    );

    assert_eq!(codec::format_raw_instant(42), "timepoint: 42");
    assert_eq!(codec::format_raw_instant(-42), "timepoint: -42");
}

#[test]
fn test_parse_standard_and_simplified_forms() {
    let cal = default_cal();

    let d = parse::parse_world_date("BC 100-1-1", &cal).unwrap();
    assert!(d.is_bc);
    assert_eq!((d.year, d.month, d.day), (100, 1, 1));
    assert_eq!(
        codec::to_instant(&d, &cal).unwrap(),
        -(100 * cal.seconds_per_year() as i64)
    );

    let d = parse::parse_world_date("AD 3-2-5", &cal).unwrap();
    assert!(!d.is_bc);
    assert_eq!((d.year, d.month, d.day), (3, 2, 5));

    // simplified signed form
    let neg = parse::parse_world_date("-100-1-1", &cal).unwrap();
    assert!(neg.is_bc);
    assert_eq!(neg.year, 100);

    let pos = parse::parse_world_date("100-1-1", &cal).unwrap();
    assert!(!pos.is_bc);

    // era marker is case-insensitive, surrounding blanks are ignored
    let d = parse::parse_world_date("  ad 1-1-1 ", &cal).unwrap();
    assert!(!d.is_bc);
}

#[test]
fn test_parse_rejects_garbage_and_out_of_range() {
    let cal = default_cal();

    assert!(matches!(
        parse::parse_world_date("once upon a time", &cal),
        Err(AppError::InvalidDateString(_))
    ));
    assert!(parse::parse_world_date("AD 1-13-1", &cal).is_err());
    assert!(parse::parse_world_date("AD 1-1-31", &cal).is_err());
    assert!(parse::parse_world_date("AD 1-0-1", &cal).is_err());
}
