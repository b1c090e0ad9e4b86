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

//! The date-time values and the capability they share.

pub use self::local::{LocalDate, LocalDateTime};
pub use self::partial::{LocalTime, YearMonth};
pub use self::zoned::ZonedDateTime;

use crate::amount::ExactDuration;
use crate::unit::{DAYS_PER_WEEK, MONTHS_PER_YEAR};
use crate::{Period, Result, TemporalAmount, TimeError, Unit};
use chrono::{
    Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
    Timelike,
};
use std::cmp::Ordering;
use std::fmt::Debug;

mod local;
mod partial;
mod zoned;

/// Field access, comparison and arithmetic shared by [`ZonedDateTime`],
/// [`LocalDateTime`] and [`LocalDate`].
///
/// Ordering is defined per variant: zoned values order by instant, local
/// values by their calendar fields.
pub trait DateTimeValue: Clone + Ord + Debug + Sized {
    /// Name of the variant, used in error messages.
    const KIND: &'static str;

    /// The calendar date as displayed.
    fn date(&self) -> NaiveDate;

    /// The wall-clock time as displayed. Midnight for date-only values.
    fn time(&self) -> NaiveTime;

    /// Rebuilds the value from new displayed fields, keeping everything else
    /// (the zone, for zoned values) fixed.
    fn with_date_time(&self, date: NaiveDate, time: NaiveTime) -> Result<Self>;

    fn plus_amount(&self, amount: &TemporalAmount) -> Result<Self>;

    /// Whole `unit`s elapsed from `self` to `end`, truncated toward zero.
    fn until(&self, end: &Self, unit: Unit) -> Result<i64>;

    fn year(&self) -> i32 {
        self.date().year()
    }

    fn month(&self) -> u32 {
        self.date().month()
    }

    fn day(&self) -> u32 {
        self.date().day()
    }

    /// 1 for Monday through 7 for Sunday.
    fn day_of_week(&self) -> u32 {
        self.date().weekday().number_from_monday()
    }

    fn hour(&self) -> u32 {
        self.time().hour()
    }

    fn minute(&self) -> u32 {
        self.time().minute()
    }

    fn second(&self) -> u32 {
        self.time().second()
    }

    fn nanosecond(&self) -> u32 {
        self.time().nanosecond()
    }

    fn is_equal(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }

    fn is_after(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    fn is_before(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }

    /// Applies each amount in turn, left to right. Calendar and exact
    /// amounts do not commute, so the order is significant.
    fn plus(&self, amounts: &[TemporalAmount]) -> Result<Self> {
        amounts
            .iter()
            .try_fold(self.clone(), |acc, amount| acc.plus_amount(amount))
    }

    fn minus(&self, amounts: &[TemporalAmount]) -> Result<Self> {
        amounts.iter().try_fold(self.clone(), |acc, amount| {
            acc.plus_amount(&amount.negated()?)
        })
    }
}

/// Moves `date` by a period: years and months together (clamping to the end
/// of a shorter month), then days.
pub(crate) fn shift_date(date: NaiveDate, period: &Period) -> Result<NaiveDate> {
    let months = period.total_months()?;
    let count =
        u32::try_from(months.unsigned_abs()).map_err(|_| TimeError::OutOfRange)?;
    let date = if months >= 0 {
        date.checked_add_months(Months::new(count))
    } else {
        date.checked_sub_months(Months::new(count))
    }
    .ok_or(TimeError::OutOfRange)?;

    let days = Days::new(period.days().unsigned_abs());
    if period.days() >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    }
    .ok_or(TimeError::OutOfRange)
}

pub(crate) fn shift_date_time(
    local: NaiveDateTime,
    duration: &ExactDuration,
) -> Result<NaiveDateTime> {
    local
        .checked_add_signed(duration.to_time_delta()?)
        .ok_or(TimeError::OutOfRange)
}

/// Counts time-based units in an exact span.
pub(crate) fn time_units_in(delta: TimeDelta, unit: Unit) -> Result<i64> {
    TemporalAmount::from(ExactDuration::from_time_delta(delta)).in_unit(unit)
}

/// Counts date-based units between two dates.
///
/// Months are counted on `month * 32 + day`, so a month only elapses once
/// the day of month has been reached again.
pub(crate) fn date_units_between(
    start: NaiveDate,
    end: NaiveDate,
    unit: Unit,
) -> Result<i64> {
    let months = |d: NaiveDate| {
        (d.year() as i64 * MONTHS_PER_YEAR + d.month0() as i64) * 32 + d.day() as i64
    };
    let count = match unit {
        Unit::Day => (end - start).num_days(),
        Unit::Week => (end - start).num_days() / DAYS_PER_WEEK,
        Unit::Month => (months(end) - months(start)) / 32,
        Unit::Year => (months(end) - months(start)) / 32 / MONTHS_PER_YEAR,
        _ => return time_units_in(end - start, unit),
    };
    Ok(count)
}

/// Counts units between two local date-times. Date-based units are only
/// counted once the time of day has been reached on the final day.
pub(crate) fn local_units_between(
    start: NaiveDateTime,
    end: NaiveDateTime,
    unit: Unit,
) -> Result<i64> {
    if unit.is_time_based() {
        return time_units_in(end - start, unit);
    }
    let mut end_date = end.date();
    if end_date > start.date() && end.time() < start.time() {
        end_date = end_date.pred_opt().ok_or(TimeError::OutOfRange)?;
    } else if end_date < start.date() && end.time() > start.time() {
        end_date = end_date.succ_opt().ok_or(TimeError::OutOfRange)?;
    }
    date_units_between(start.date(), end_date, unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(date(2014, 1, 31), Period::new(0, 1, 0), date(2014, 2, 28); "clamps to february")]
    #[test_case(date(2016, 1, 31), Period::new(0, 1, 0), date(2016, 2, 29); "clamps to leap day")]
    #[test_case(date(2016, 2, 29), Period::new(1, 0, 0), date(2017, 2, 28); "leap day plus a year")]
    #[test_case(date(2014, 3, 31), Period::new(0, -1, 0), date(2014, 2, 28); "backwards clamps")]
    #[test_case(date(2014, 1, 31), Period::new(0, 1, 1), date(2014, 3, 1); "months before days")]
    #[test_case(date(2014, 1, 1), Period::new(0, 0, -1), date(2013, 12, 31); "negative days")]
    #[test]
    fn test_shift_date(start: NaiveDate, period: Period, expected: NaiveDate) {
        assert_eq!(shift_date(start, &period), Ok(expected));
    }

    #[test_case(date(2014, 1, 31), date(2014, 2, 28), Unit::Month, 0; "short month is not a month")]
    #[test_case(date(2014, 1, 31), date(2014, 3, 31), Unit::Month, 2; "two months")]
    #[test_case(date(2014, 3, 31), date(2014, 1, 31), Unit::Month, -2; "negative months")]
    #[test_case(date(2014, 1, 15), date(2016, 1, 14), Unit::Year, 1; "one day short of two years")]
    #[test_case(date(2014, 1, 1), date(2014, 1, 15), Unit::Week, 2; "weeks")]
    #[test_case(date(1986, 10, 2), date(1986, 10, 14), Unit::Day, 12; "days")]
    #[test]
    fn test_date_units_between(start: NaiveDate, end: NaiveDate, unit: Unit, expected: i64) {
        assert_eq!(date_units_between(start, end, unit), Ok(expected));
    }

    #[test]
    fn test_local_units_between_waits_for_time_of_day() {
        let start = date(2014, 1, 1).and_hms_opt(12, 0, 0).unwrap();
        let end = date(2014, 1, 3).and_hms_opt(11, 59, 59).unwrap();
        assert_eq!(local_units_between(start, end, Unit::Day), Ok(1));
        assert_eq!(local_units_between(start, end, Unit::Hour), Ok(47));
        assert_eq!(local_units_between(end, start, Unit::Day), Ok(-1));
    }
}
