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

use std::fmt::{Display, Formatter};

pub(crate) const NANOS_PER_MILLI: i128 = 1_000_000;
pub(crate) const NANOS_PER_SECOND: i128 = 1_000_000_000;
pub(crate) const SECONDS_PER_MINUTE: i128 = 60;
pub(crate) const SECONDS_PER_HOUR: i128 = 60 * SECONDS_PER_MINUTE;
pub(crate) const SECONDS_PER_DAY: i128 = 24 * SECONDS_PER_HOUR;
pub(crate) const DAYS_PER_WEEK: i64 = 7;
pub(crate) const MONTHS_PER_YEAR: i64 = 12;

/// Units in which amounts and elapsed spans can be measured, ordered from
/// finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Nanosecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    /// The fixed length of the unit in nanoseconds.
    ///
    /// Days and weeks are treated as exactly 24 and 168 hours. Months and
    /// years have no fixed length and return `None`.
    pub fn fixed_nanos(self) -> Option<i128> {
        let seconds = match self {
            Unit::Nanosecond => return Some(1),
            Unit::Millisecond => return Some(NANOS_PER_MILLI),
            Unit::Second => 1,
            Unit::Minute => SECONDS_PER_MINUTE,
            Unit::Hour => SECONDS_PER_HOUR,
            Unit::Day => SECONDS_PER_DAY,
            Unit::Week => SECONDS_PER_DAY * DAYS_PER_WEEK as i128,
            Unit::Month | Unit::Year => return None,
        };
        Some(seconds * NANOS_PER_SECOND)
    }

    /// Day and coarser units are measured on the calendar rather than on
    /// the time line.
    pub fn is_date_based(self) -> bool {
        self >= Unit::Day
    }

    pub fn is_time_based(self) -> bool {
        !self.is_date_based()
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Nanosecond => "nanoseconds",
            Unit::Millisecond => "milliseconds",
            Unit::Second => "seconds",
            Unit::Minute => "minutes",
            Unit::Hour => "hours",
            Unit::Day => "days",
            Unit::Week => "weeks",
            Unit::Month => "months",
            Unit::Year => "years",
        }
        .fmt(f)
    }
}
