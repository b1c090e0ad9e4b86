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

use crate::{Result, TimeError};
use chrono::{Datelike, Months, NaiveDate, NaiveTime};

pub(crate) const MAX_NANOSECOND: u32 = 999_999_999;

pub(crate) fn minimum_value<T: PartialOrd + Copy + Into<i64>>(
    value: T,
    minimum: T,
    field: &'static str,
) -> Result<T> {
    match value >= minimum {
        true => Ok(value),
        false => {
            Err(TimeError::InvalidCalendarField { field, value: value.into() })
        }
    }
}

pub(crate) fn maximum_value<T: PartialOrd + Copy + Into<i64>>(
    value: T,
    maximum: T,
    field: &'static str,
) -> Result<T> {
    match value <= maximum {
        true => Ok(value),
        false => {
            Err(TimeError::InvalidCalendarField { field, value: value.into() })
        }
    }
}

pub(crate) fn in_range<T: PartialOrd + Copy + Into<i64>>(
    value: T,
    minimum: T,
    maximum: T,
    field: &'static str,
) -> Result<T> {
    let value = minimum_value(value, minimum, field)?;
    maximum_value(value, maximum, field)
}

/// Number of days in the given month, or `None` when the year or month is
/// out of range.
pub(crate) fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = match first.checked_add_months(Months::new(1)) {
        Some(next) => next.pred_opt()?,
        // December of the last representable year
        None => NaiveDate::from_ymd_opt(year, 12, 31)?,
    };
    Some(last.day())
}

pub(crate) fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    let year = in_range(year, NaiveDate::MIN.year(), NaiveDate::MAX.year(), "year")?;
    let month = in_range(month, 1, 12, "month")?;
    let last_day = days_in_month(year, month)
        .ok_or(TimeError::InvalidCalendarField { field: "year", value: year.into() })?;
    let day = in_range(day, 1, last_day, "day")?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(TimeError::InvalidCalendarField { field: "day", value: day.into() })
}

pub(crate) fn time_of_day(
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: u32,
) -> Result<NaiveTime> {
    let hour = maximum_value(hour, 23, "hour")?;
    let minute = maximum_value(minute, 59, "minute")?;
    let second = maximum_value(second, 59, "second")?;
    let nanosecond = maximum_value(nanosecond, MAX_NANOSECOND, "nanosecond")?;

    NaiveTime::from_hms_nano_opt(hour, minute, second, nanosecond).ok_or(
        TimeError::InvalidCalendarField { field: "nanosecond", value: nanosecond.into() },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_test_case::test_case;

    #[test]
    fn test_minimum_value() {
        assert!(matches!(
            minimum_value(1, 2, "month"),
            Err(TimeError::InvalidCalendarField { field: "month", value: 1 })
        ));

        assert!(matches!(minimum_value(2, 1, "month"), Ok(2)));
    }

    #[test_case(2014, 1, 31; "january")]
    #[test_case(2014, 2, 28; "common february")]
    #[test_case(2016, 2, 29; "leap february")]
    #[test_case(1900, 2, 28; "century is not leap")]
    #[test_case(2000, 2, 29; "quad century is leap")]
    #[test_case(2014, 4, 30; "april")]
    #[test_case(2014, 12, 31; "december")]
    #[test]
    fn test_days_in_month(year: i32, month: u32, expected: u32) {
        assert_eq!(days_in_month(year, month), Some(expected));
    }

    #[test_case(2014, 13, 1, "month"; "month too large")]
    #[test_case(2014, 0, 1, "month"; "month zero")]
    #[test_case(2014, 2, 30, "day"; "february thirtieth")]
    #[test_case(2015, 2, 29, "day"; "not a leap year")]
    #[test_case(2014, 1, 0, "day"; "day zero")]
    #[test]
    fn test_invalid_calendar_date(year: i32, month: u32, day: u32, field: &str) {
        let Err(TimeError::InvalidCalendarField { field: actual, .. }) =
            calendar_date(year, month, day)
        else {
            panic!("expected InvalidCalendarField");
        };
        assert_eq!(actual, field);
    }

    #[test_case(24, 0, 0, 0, "hour"; "hour")]
    #[test_case(0, 60, 0, 0, "minute"; "minute")]
    #[test_case(0, 0, 60, 0, "second"; "leap second is rejected")]
    #[test_case(0, 0, 0, 1_000_000_000, "nanosecond"; "nanosecond")]
    #[test]
    fn test_invalid_time_of_day(h: u32, mi: u32, s: u32, ns: u32, field: &str) {
        let Err(TimeError::InvalidCalendarField { field: actual, .. }) =
            time_of_day(h, mi, s, ns)
        else {
            panic!("expected InvalidCalendarField");
        };
        assert_eq!(actual, field);
    }
}
