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

use calendrical::{days, hours, months, Interval, Unit};
use common::{utc, year, years};

mod common;

#[test]
fn interval_must_contain_its_start_but_not_its_end() {
    let interval = years(1986, 1990);
    assert!(interval.contains(&year(1987)));
    assert!(interval.contains(&year(1986)));
    assert!(!interval.contains(&year(1990)));
}

#[test]
fn interval_must_count_elapsed_minutes() {
    let interval = Interval::new(utc(1986, 10, 2), utc(1986, 10, 14));
    assert_eq!(interval.in_minutes().unwrap(), 17280);
    assert_eq!(interval.in_unit(Unit::Hour).unwrap(), 288);
    assert_eq!(interval.in_seconds().unwrap(), 17280 * 60);
}

#[test]
fn interval_must_intersect_overlapping_intervals() {
    let overlap = years(1986, 1990).overlap(Some(&years(1987, 1991)));
    assert_eq!(overlap, Some(years(1987, 1990)));
    assert_eq!(overlap.unwrap().in_years().unwrap(), 3);
}

#[test]
fn interval_must_not_overlap_when_it_abuts() {
    for (a, b) in [(years(1986, 1990), years(1990, 1994)), (years(2000, 2001), years(1999, 2000))]
    {
        assert!(a.abuts(&b));
        assert!(!a.overlaps(&b));
        assert_eq!(a.overlap(Some(&b)), None);
    }
}

#[test]
fn interval_must_count_months_by_calendar() {
    let interval = Interval::new(utc(2014, 1, 31), utc(2014, 2, 28));
    assert_eq!(interval.in_months().unwrap(), 0);
    assert_eq!(interval.in_days().unwrap(), 28);

    let extended = interval.extend(&[days(1)]).unwrap();
    assert_eq!(extended.end(), utc(2014, 3, 1));
    assert_eq!(extended.in_months().unwrap(), 1);
}

#[test]
fn interval_must_extend_by_mixed_amounts() {
    let interval = years(1986, 1990).extend(&[months(2), hours(5)]).unwrap();
    assert_eq!(interval.in_months().unwrap(), 50);
    assert_eq!(interval.length().total_nanos() % 3_600_000_000_000, 0);
}
