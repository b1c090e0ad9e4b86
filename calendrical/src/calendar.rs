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

//! Calendar helpers that work on any [`DateTimeValue`].

use crate::validate::{self, days_in_month};
use crate::value::shift_date;
use crate::{days, DateTimeValue, Period, Result, TimeError, Unit};
use chrono::{Datelike, Days, NaiveDate, NaiveTime};

const NANOS_PER_MILLI: u32 = 1_000_000;

/// Fields kept by [`floor`], coarsest first.
const FLOOR_FIELDS: [Unit; 8] = [
    Unit::Year,
    Unit::Month,
    Unit::Day,
    Unit::Hour,
    Unit::Minute,
    Unit::Second,
    Unit::Millisecond,
    Unit::Nanosecond,
];

/// The earlier of two values; `a` on a tie.
pub fn earliest<T: Ord>(a: T, b: T) -> T {
    if a > b {
        b
    } else {
        a
    }
}

/// The later of two values; `a` on a tie.
pub fn latest<T: Ord>(a: T, b: T) -> T {
    if a < b {
        b
    } else {
        a
    }
}

pub fn earliest_of<T: Ord>(values: impl IntoIterator<Item = T>) -> Option<T> {
    values.into_iter().reduce(earliest)
}

pub fn latest_of<T: Ord>(values: impl IntoIterator<Item = T>) -> Option<T> {
    values.into_iter().reduce(latest)
}

pub fn min_date<T: DateTimeValue>(values: impl IntoIterator<Item = T>) -> Option<T> {
    values
        .into_iter()
        .reduce(|min, value| if value.is_before(&min) { value } else { min })
}

pub fn max_date<T: DateTimeValue>(values: impl IntoIterator<Item = T>) -> Option<T> {
    values
        .into_iter()
        .reduce(|max, value| if value.is_after(&max) { value } else { max })
}

pub fn first_day_of_month<T: DateTimeValue>(value: &T) -> Result<T> {
    value.with_date_time(first_of(value.date())?, value.time())
}

pub fn last_day_of_month<T: DateTimeValue>(value: &T) -> Result<T> {
    let last = shift_date(first_of(value.date())?, &Period::new(0, 1, -1))?;
    value.with_date_time(last, value.time())
}

/// The first day of the month plus `n - 1` days. `n` is not checked against
/// the length of the month, so large values roll into the following month.
pub fn nth_day_of_month<T: DateTimeValue>(value: &T, n: i64) -> Result<T> {
    let offset = n.checked_sub(1).ok_or(TimeError::OutOfRange)?;
    first_day_of_month(value)?.plus(&[days(offset)])
}

pub fn number_of_days_in_month<T: DateTimeValue>(value: &T) -> u32 {
    let date = value.date();
    days_in_month(date.year(), date.month()).unwrap_or(31)
}

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// ISO 8601 week of the week-based year: weeks start on Monday and week 1
/// holds the year's first Thursday.
pub fn week_number_of_year<T: DateTimeValue>(value: &T) -> u32 {
    value.date().iso_week().week()
}

/// Zeroes every field finer than `unit`. Month and day reset to 1.
///
/// [`Unit::Week`] floors to midnight on the Monday of the ISO week.
pub fn floor<T: DateTimeValue>(value: &T, unit: Unit) -> Result<T> {
    if unit == Unit::Week {
        let date = value.date();
        let back = Days::new(date.weekday().num_days_from_monday().into());
        let monday = date.checked_sub_days(back).ok_or(TimeError::OutOfRange)?;
        return value.with_date_time(monday, NaiveTime::MIN);
    }

    let depth = FLOOR_FIELDS.iter().position(|f| *f == unit).unwrap_or(0);
    let keep = |field: Unit| {
        FLOOR_FIELDS.iter().position(|f| *f == field).is_some_and(|i| i <= depth)
    };
    let pick = |field: Unit, actual: u32, default: u32| {
        if keep(field) {
            actual
        } else {
            default
        }
    };

    let nanosecond = if keep(Unit::Nanosecond) {
        value.nanosecond()
    } else if keep(Unit::Millisecond) {
        value.nanosecond() - value.nanosecond() % NANOS_PER_MILLI
    } else {
        0
    };
    let date = validate::calendar_date(
        value.year(),
        pick(Unit::Month, value.month(), 1),
        pick(Unit::Day, value.day(), 1),
    )?;
    let time = validate::time_of_day(
        pick(Unit::Hour, value.hour(), 0),
        pick(Unit::Minute, value.minute(), 0),
        pick(Unit::Second, value.second(), 0),
        nanosecond,
    )?;
    value.with_date_time(date, time)
}

fn first_of(date: NaiveDate) -> Result<NaiveDate> {
    date.with_day(1).ok_or(TimeError::OutOfRange)
}
