use scene_timeline_core::{format_time, parse_time};

#[test]
fn round_trip_within_a_millisecond() {
    let samples = [
        0.0, 0.001, 1.5, 9.999, 59.999, 61.25, 123.456, 3599.999, 5999.999, 6000.0, 7384.321,
        9999.999,
    ];
    for seconds in samples {
        let back = parse_time(&format_time(seconds));
        assert!(
            (back - seconds).abs() < 0.001 + 1e-9,
            "{seconds} -> {} -> {back}",
            format_time(seconds)
        );
    }
}

#[test]
fn parses_display_format() {
    assert_eq!(parse_time("01:05.250"), 65.25);
    assert_eq!(parse_time("00:00.000"), 0.0);
    assert_eq!(parse_time("2:3"), 123.0);
    assert!((parse_time("166:39.999") - 9999.999).abs() < 1e-9);
}

#[test]
fn minutes_widen_past_two_digits() {
    assert_eq!(format_time(6000.0), "100:00.000");
    assert_eq!(format_time(9999.999), "166:39.999");
    assert_eq!(parse_time(&format_time(6000.0)), 6000.0);
}

#[test]
fn fraction_is_read_as_millisecond_count() {
    assert!((parse_time("00:01.5") - 1.005).abs() < 1e-12);
}

#[test]
fn malformed_input_yields_zero() {
    assert_eq!(parse_time(""), 0.0);
    assert_eq!(parse_time("12"), 0.0);
    assert_eq!(parse_time("1:2:3"), 0.0);
    assert_eq!(parse_time("ab:cd"), 0.0);
    assert_eq!(parse_time("-5:00"), 0.0);
}

#[test]
fn fields_take_leading_digits() {
    assert_eq!(parse_time("1x:30s"), 90.0);
    assert_eq!(parse_time("xx:30"), 30.0);
}
