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

#![allow(dead_code)]

use calendrical::{DateTimeBuilder, Interval, Zone, ZonedDateTime};

pub fn warsaw() -> Zone {
    Zone::for_id("Europe/Warsaw").expect("Europe/Warsaw is in the zone database")
}

pub fn utc(year: i32, month: u32, day: u32) -> ZonedDateTime {
    DateTimeBuilder::new(year)
        .with_month(month)
        .with_day(day)
        .build_zoned()
        .expect("valid date")
}

pub fn year(year: i32) -> ZonedDateTime {
    utc(year, 1, 1)
}

pub fn years(start: i32, end: i32) -> Interval {
    Interval::new(year(start), year(end))
}

pub fn in_warsaw(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> ZonedDateTime {
    ZonedDateTime::new(year, month, day, hour, minute, 0, 0, warsaw()).expect("valid date")
}
