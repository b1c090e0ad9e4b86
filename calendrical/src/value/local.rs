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

use super::{
    date_units_between, local_units_between, shift_date, shift_date_time,
    DateTimeValue,
};
use crate::validate;
use crate::{
    Disambiguation, LocalTime, Result, TemporalAmount, TimeError, Unit, Zone,
    ZonedDateTime,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::{Display, Formatter};

/// A calendar date and wall-clock time with no zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDateTime(NaiveDateTime);

impl LocalDateTime {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
    ) -> Result<Self> {
        let date = validate::calendar_date(year, month, day)?;
        let time = validate::time_of_day(hour, minute, second, nanosecond)?;
        Ok(Self(date.and_time(time)))
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    pub fn at_zone(&self, zone: Zone) -> Result<ZonedDateTime> {
        self.at_zone_with(zone, Disambiguation::Compatible)
    }

    pub fn at_zone_with(
        &self,
        zone: Zone,
        disambiguation: Disambiguation,
    ) -> Result<ZonedDateTime> {
        ZonedDateTime::from_local(&self.0, zone, disambiguation)
    }

    pub fn to_local_date(&self) -> LocalDate {
        LocalDate(self.0.date())
    }

    pub fn to_local_time(&self) -> LocalTime {
        LocalTime::from(self.0.time())
    }
}

impl DateTimeValue for LocalDateTime {
    const KIND: &'static str = "LocalDateTime";

    fn date(&self) -> NaiveDate {
        self.0.date()
    }

    fn time(&self) -> NaiveTime {
        self.0.time()
    }

    fn with_date_time(&self, date: NaiveDate, time: NaiveTime) -> Result<Self> {
        Ok(Self(date.and_time(time)))
    }

    fn plus_amount(&self, amount: &TemporalAmount) -> Result<Self> {
        match amount {
            TemporalAmount::Period(period) => {
                Ok(Self(shift_date(self.0.date(), period)?.and_time(self.0.time())))
            }
            TemporalAmount::Duration(duration) => {
                Ok(Self(shift_date_time(self.0, duration)?))
            }
        }
    }

    fn until(&self, end: &Self, unit: Unit) -> Result<i64> {
        local_units_between(self.0, end.0, unit)
    }
}

impl From<NaiveDateTime> for LocalDateTime {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl Display for LocalDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.format("%Y-%m-%dT%H:%M:%S%.f").fmt(f)
    }
}

/// A calendar date with no time of day and no zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDate(NaiveDate);

impl LocalDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        Ok(Self(validate::calendar_date(year, month, day)?))
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn at_time(&self, time: LocalTime) -> LocalDateTime {
        LocalDateTime(self.0.and_time(time.as_naive()))
    }

    pub fn at_start_of_day(&self) -> LocalDateTime {
        LocalDateTime(self.0.and_time(NaiveTime::MIN))
    }

    /// The first instant of this date in `zone`. Where midnight is skipped,
    /// that is the first wall-clock time after the gap.
    pub fn at_start_of_day_in(&self, zone: Zone) -> Result<ZonedDateTime> {
        self.at_start_of_day().at_zone(zone)
    }
}

impl DateTimeValue for LocalDate {
    const KIND: &'static str = "LocalDate";

    fn date(&self) -> NaiveDate {
        self.0
    }

    fn time(&self) -> NaiveTime {
        NaiveTime::MIN
    }

    fn with_date_time(&self, date: NaiveDate, _time: NaiveTime) -> Result<Self> {
        Ok(Self(date))
    }

    /// Only calendar periods apply to a date.
    fn plus_amount(&self, amount: &TemporalAmount) -> Result<Self> {
        match amount {
            TemporalAmount::Period(period) => Ok(Self(shift_date(self.0, period)?)),
            TemporalAmount::Duration(_) => Err(TimeError::UnsupportedUnit {
                unit: Unit::Second,
                value_kind: Self::KIND,
            }),
        }
    }

    fn until(&self, end: &Self, unit: Unit) -> Result<i64> {
        if unit.is_time_based() {
            return Err(TimeError::UnsupportedUnit { unit, value_kind: Self::KIND });
        }
        date_units_between(self.0, end.0, unit)
    }
}

impl From<NaiveDate> for LocalDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl Display for LocalDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{days, hours, minutes, months, years};

    #[test]
    fn test_local_fields_compare_lexicographically() {
        let a = LocalDateTime::new(2014, 1, 26, 23, 59, 59, 0).unwrap();
        let b = LocalDateTime::new(2014, 1, 27, 0, 0, 0, 0).unwrap();
        assert!(a.is_before(&b));
        assert!(b.is_after(&a));
        assert!(!a.is_equal(&b));
    }

    #[test]
    fn test_local_date_time_arithmetic() {
        let dt = LocalDateTime::new(2014, 1, 31, 23, 30, 0, 0).unwrap();
        assert_eq!(
            dt.plus(&[months(1)]).unwrap(),
            LocalDateTime::new(2014, 2, 28, 23, 30, 0, 0).unwrap()
        );
        assert_eq!(
            dt.plus(&[minutes(45)]).unwrap(),
            LocalDateTime::new(2014, 2, 1, 0, 15, 0, 0).unwrap()
        );
        assert_eq!(
            dt.minus(&[years(1), days(31)]).unwrap(),
            LocalDateTime::new(2012, 12, 31, 23, 30, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_local_date_rejects_durations() {
        let date = LocalDate::new(2014, 1, 26).unwrap();
        assert!(matches!(
            date.plus(&[hours(1)]),
            Err(TimeError::UnsupportedUnit { value_kind: "LocalDate", .. })
        ));
        assert!(matches!(
            date.until(&date, Unit::Hour),
            Err(TimeError::UnsupportedUnit { unit: Unit::Hour, .. })
        ));
    }

    #[test]
    fn test_local_date_time_accessors() {
        let date = LocalDate::new(2014, 1, 26).unwrap();
        assert_eq!(date.hour(), 0);
        assert_eq!(date.day_of_week(), 7);
        assert_eq!(date.at_start_of_day().to_local_date(), date);
    }

    #[test]
    fn test_display() {
        let dt = LocalDateTime::new(1986, 10, 14, 4, 3, 27, 456_000_000).unwrap();
        assert_eq!(dt.to_string(), "1986-10-14T04:03:27.456");
        assert_eq!(LocalDate::new(1986, 10, 14).unwrap().to_string(), "1986-10-14");
    }
}
