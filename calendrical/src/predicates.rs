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

//! Boolean questions about a single date-time value.

use crate::{is_leap_year, DateTimeValue};
use chrono::{Datelike, Weekday};

fn weekday<T: DateTimeValue>(value: &T) -> Weekday {
    value.date().weekday()
}

pub fn is_monday<T: DateTimeValue>(value: &T) -> bool {
    weekday(value) == Weekday::Mon
}

pub fn is_tuesday<T: DateTimeValue>(value: &T) -> bool {
    weekday(value) == Weekday::Tue
}

pub fn is_wednesday<T: DateTimeValue>(value: &T) -> bool {
    weekday(value) == Weekday::Wed
}

pub fn is_thursday<T: DateTimeValue>(value: &T) -> bool {
    weekday(value) == Weekday::Thu
}

pub fn is_friday<T: DateTimeValue>(value: &T) -> bool {
    weekday(value) == Weekday::Fri
}

pub fn is_saturday<T: DateTimeValue>(value: &T) -> bool {
    weekday(value) == Weekday::Sat
}

pub fn is_sunday<T: DateTimeValue>(value: &T) -> bool {
    weekday(value) == Weekday::Sun
}

/// Saturday or Sunday.
pub fn is_weekend<T: DateTimeValue>(value: &T) -> bool {
    matches!(weekday(value), Weekday::Sat | Weekday::Sun)
}

pub fn is_weekday<T: DateTimeValue>(value: &T) -> bool {
    !is_weekend(value)
}

pub fn is_first_day_of_month<T: DateTimeValue>(value: &T) -> bool {
    value.day() == 1
}

pub fn is_last_day_of_month<T: DateTimeValue>(value: &T) -> bool {
    value.date().succ_opt().map_or(true, |next| next.month() != value.month())
}

/// Whether the value falls in a leap year.
pub fn is_leap<T: DateTimeValue>(value: &T) -> bool {
    is_leap_year(value.year())
}
