/* -------------------------------------------------------------------------- *\
 *                |   █████╗ ██╗   ██╗██████╗  █████╗ ███████╗ |              *
 *                |  ██╔══██╗██║   ██║██╔══██╗██╔══██╗██╔════╝ |              *
 *                |  ███████║██║   ██║██████╔╝███████║█████╗   |              *
 *                |  ██╔══██║██║   ██║██╔══██╗██╔══██║██╔══╝   |              *
 *                |  ██║  ██║╚██████╔╝██║  ██║██║  ██║███████╗ |              *
 *                |  ╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═╝╚══════╝ |              *
 *                +--------------------------------------------+              *
 *                                                                            *
 *                         Distributed Systems Runtime                        *
 * -------------------------------------------------------------------------- *
 * Copyright 2022 - 2024, the aurae contributors                              *
 * SPDX-License-Identifier: Apache-2.0                                        *
\* -------------------------------------------------------------------------- */

use calendrical::{
    days, hours, periodic_seq, periodic_seq_until, DateTimeValue, Disambiguation, LocalDate,
    LocalDateTime, TimeError, Unit, Zone, ZonedDateTime,
};
use common::{in_warsaw, utc, warsaw};
use simple_test_case::test_case;

mod common;

#[test]
fn skipped_local_time_must_move_forward() {
    // 02:30 does not exist on 2014-03-30 in Warsaw.
    let value = in_warsaw(2014, 3, 30, 2, 30);
    assert_eq!((value.hour(), value.minute()), (3, 30));
    assert_eq!(value.offset().local_minus_utc(), 7200);
}

#[test]
fn repeated_local_time_must_pick_the_earlier_offset() {
    let value = in_warsaw(2014, 10, 26, 2, 30);
    assert_eq!(value.offset().local_minus_utc(), 7200);

    let later = LocalDateTime::new(2014, 10, 26, 2, 30, 0, 0)
        .unwrap()
        .at_zone_with(warsaw(), Disambiguation::Later)
        .unwrap();
    assert_eq!(later.offset().local_minus_utc(), 3600);
    assert_eq!(value.until(&later, Unit::Minute).unwrap(), 60);
}

#[test]
fn rejecting_disambiguation_must_surface_errors() {
    let local = LocalDateTime::new(2014, 3, 30, 2, 30, 0, 0).unwrap();
    assert!(matches!(
        local.at_zone_with(warsaw(), Disambiguation::Reject),
        Err(TimeError::NonexistentLocalTime { .. })
    ));
}

#[test]
fn calendar_days_must_keep_wall_clock_across_transitions() {
    let before = in_warsaw(2014, 3, 29, 12, 0);
    let by_day = before.plus(&[days(1)]).unwrap();
    let by_hours = before.plus(&[hours(24)]).unwrap();
    assert_eq!(by_day.hour(), 12);
    assert_eq!(by_hours.hour(), 13);
    assert_eq!(before.until(&by_day, Unit::Hour).unwrap(), 23);
    assert_eq!(before.until(&by_day, Unit::Day).unwrap(), 1);
}

// Both days land on 02:30 the next morning, which the zone skips.
#[test_case("Australia/Sydney", 10, 4, 36_000, 39_600; "sydney")]
#[test_case("America/New_York", 3, 8, -18_000, -14_400; "new york")]
#[test]
fn next_day_in_a_gap_must_move_forward(
    id: &str,
    month: u32,
    day: u32,
    offset_before: i32,
    offset_after: i32,
) {
    let zone = Zone::for_id(id).unwrap();
    let start = ZonedDateTime::new(2014, month, day, 2, 30, 0, 0, zone).unwrap();
    assert_eq!(start.offset().local_minus_utc(), offset_before);

    let next = start.plus(&[days(1)]).unwrap();
    assert_eq!((next.day(), next.hour(), next.minute()), (day + 1, 3, 30));
    assert_eq!(next.offset().local_minus_utc(), offset_after);
    assert!(next.is_after(&start));
    assert_eq!(start.until(&next, Unit::Hour).unwrap(), 24);
}

#[test_case("Australia/Sydney", 4, 6, 2; "sydney")]
#[test_case("America/New_York", 11, 2, 1; "new york")]
#[test]
fn repeated_local_time_must_resolve_an_hour_apart(id: &str, month: u32, day: u32, hour: u32) {
    let zone = Zone::for_id(id).unwrap();
    let local = LocalDateTime::new(2014, month, day, hour, 30, 0, 0).unwrap();
    let compatible = local.at_zone(zone).unwrap();
    let earlier = local.at_zone_with(zone, Disambiguation::Earlier).unwrap();
    let later = local.at_zone_with(zone, Disambiguation::Later).unwrap();
    assert_eq!(compatible, earlier);
    assert_eq!(earlier.until(&later, Unit::Minute).unwrap(), 60);
    assert_eq!(later.to_local_date_time(), local);
}

#[test]
fn periodic_seq_must_not_drift_across_month_ends() {
    let start = LocalDate::new(2014, 1, 31).unwrap();
    let last = periodic_seq(start, calendrical::months(1)).nth(2).unwrap();
    assert_eq!(last, LocalDate::new(2014, 3, 31).unwrap());
}

#[test]
fn periodic_seq_must_stop_before_its_end() {
    let hourly: Vec<_> =
        periodic_seq_until(utc(2014, 1, 1), utc(2014, 1, 2), hours(1)).collect();
    assert_eq!(hourly.len(), 24);
    assert_eq!(hourly[23].hour(), 23);
}
