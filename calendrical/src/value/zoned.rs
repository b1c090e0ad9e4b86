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

use super::{local_units_between, shift_date, time_units_in, DateTimeValue};
use crate::validate;
use crate::{
    Disambiguation, LocalDate, LocalDateTime, Result, TemporalAmount,
    TimeError, Unit, Zone,
};
use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat,
    Utc,
};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// An instant on the time line, displayed in a [`Zone`].
///
/// Two zoned values are equal when they denote the same instant, whatever
/// zone they are rendered in.
#[derive(Debug, Clone, Copy)]
pub struct ZonedDateTime {
    inner: DateTime<FixedOffset>,
    zone: Zone,
}

impl ZonedDateTime {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
        zone: Zone,
    ) -> Result<Self> {
        let date = validate::calendar_date(year, month, day)?;
        let time = validate::time_of_day(hour, minute, second, nanosecond)?;
        Self::from_local(&date.and_time(time), zone, Disambiguation::Compatible)
    }

    /// Interprets a wall-clock reading in `zone`.
    pub fn from_local(
        local: &NaiveDateTime,
        zone: Zone,
        disambiguation: Disambiguation,
    ) -> Result<Self> {
        let inner = zone.resolve_local(local, disambiguation)?;
        Ok(Self { inner, zone })
    }

    pub fn from_instant(instant: &DateTime<Utc>, zone: Zone) -> Self {
        Self { inner: zone.at(instant), zone }
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.inner.with_timezone(&Utc)
    }

    pub fn offset(&self) -> FixedOffset {
        *self.inner.offset()
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// The displayed wall-clock date and time.
    pub fn local(&self) -> NaiveDateTime {
        self.inner.naive_local()
    }

    pub fn as_chrono(&self) -> DateTime<FixedOffset> {
        self.inner
    }

    /// Same instant, displayed in `zone`.
    pub fn with_zone(&self, zone: Zone) -> Self {
        Self::from_instant(&self.instant(), zone)
    }

    /// Same displayed fields, reinterpreted in `zone`. The instant moves by
    /// the difference between the two offsets.
    pub fn with_zone_keeping_local(&self, zone: Zone) -> Result<Self> {
        Self::from_local(&self.local(), zone, Disambiguation::Compatible)
    }

    pub fn to_local_date_time(&self) -> LocalDateTime {
        LocalDateTime::from(self.local())
    }

    pub fn to_local_date(&self) -> LocalDate {
        LocalDate::from(self.inner.date_naive())
    }
}

impl DateTimeValue for ZonedDateTime {
    const KIND: &'static str = "ZonedDateTime";

    fn date(&self) -> NaiveDate {
        self.inner.date_naive()
    }

    fn time(&self) -> NaiveTime {
        self.inner.time()
    }

    fn with_date_time(&self, date: NaiveDate, time: NaiveTime) -> Result<Self> {
        Self::from_local(&date.and_time(time), self.zone, Disambiguation::Compatible)
    }

    /// Periods move the wall clock and are resolved again in the zone, so
    /// "one day later" keeps the time of day across a DST change. Durations
    /// move the instant.
    fn plus_amount(&self, amount: &TemporalAmount) -> Result<Self> {
        match amount {
            TemporalAmount::Period(period) => {
                let date = shift_date(self.date(), period)?;
                self.with_date_time(date, self.time())
            }
            TemporalAmount::Duration(duration) => {
                let instant = self
                    .instant()
                    .checked_add_signed(duration.to_time_delta()?)
                    .ok_or(TimeError::OutOfRange)?;
                Ok(Self::from_instant(&instant, self.zone))
            }
        }
    }

    /// Time-based units measure the time line. Date-based units compare
    /// wall-clock fields after moving `end` into this value's zone.
    fn until(&self, end: &Self, unit: Unit) -> Result<i64> {
        if unit.is_time_based() {
            return time_units_in(end.inner - self.inner, unit);
        }
        let end = end.with_zone(self.zone);
        local_units_between(self.local(), end.local(), unit)
    }
}

impl PartialEq for ZonedDateTime {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for ZonedDateTime {}

impl PartialOrd for ZonedDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ZonedDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}

impl Hash for ZonedDateTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.naive_utc().hash(state)
    }
}

impl Display for ZonedDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner.to_rfc3339_opts(SecondsFormat::AutoSi, true))?;
        if let Zone::Named(tz) = self.zone {
            write!(f, "[{}]", tz.name())?;
        }
        Ok(())
    }
}

impl From<DateTime<Utc>> for ZonedDateTime {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::from_instant(&instant, Zone::utc())
    }
}

impl From<DateTime<FixedOffset>> for ZonedDateTime {
    fn from(inner: DateTime<FixedOffset>) -> Self {
        Self { inner, zone: Zone::Fixed(*inner.offset()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{days, hours, months, weeks};

    fn warsaw() -> Zone {
        Zone::for_id("Europe/Warsaw").unwrap()
    }

    fn utc(y: i32, mo: u32, d: u32, h: u32) -> ZonedDateTime {
        ZonedDateTime::new(y, mo, d, h, 0, 0, 0, Zone::utc()).unwrap()
    }

    #[test]
    fn test_fields_round_trip() {
        let dt =
            ZonedDateTime::new(1986, 10, 14, 4, 3, 27, 456, warsaw()).unwrap();
        assert_eq!(dt.year(), 1986);
        assert_eq!(dt.month(), 10);
        assert_eq!(dt.day(), 14);
        assert_eq!(dt.hour(), 4);
        assert_eq!(dt.minute(), 3);
        assert_eq!(dt.second(), 27);
        assert_eq!(dt.nanosecond(), 456);
        assert_eq!(dt.day_of_week(), 2);
    }

    #[test]
    fn test_invalid_day_is_rejected() {
        assert_eq!(
            ZonedDateTime::new(2014, 2, 30, 0, 0, 0, 0, Zone::utc()),
            Err(TimeError::InvalidCalendarField { field: "day", value: 30 })
        );
    }

    #[test]
    fn test_equality_ignores_zone() {
        let in_utc = utc(2014, 1, 26, 10);
        let in_warsaw = in_utc.with_zone(warsaw());
        assert_eq!(in_warsaw.hour(), 11);
        assert_eq!(in_utc, in_warsaw);
        assert!(in_utc.is_equal(&in_warsaw));
    }

    #[test]
    fn test_with_zone_keeping_local_moves_instant() {
        let in_utc = utc(2014, 1, 26, 10);
        let in_warsaw = in_utc.with_zone_keeping_local(warsaw()).unwrap();
        assert_eq!(in_warsaw.hour(), 10);
        assert!(in_warsaw.is_before(&in_utc));
        assert_eq!(in_utc.until(&in_warsaw, Unit::Hour), Ok(-1));
    }

    #[test]
    fn test_period_keeps_wall_clock_across_dst() {
        let before = ZonedDateTime::new(2014, 3, 29, 12, 0, 0, 0, warsaw()).unwrap();
        let next_day = before.plus(&[days(1)]).unwrap();
        assert_eq!(next_day.hour(), 12);
        assert_eq!(before.until(&next_day, Unit::Hour), Ok(23));
    }

    #[test]
    fn test_duration_moves_instant_across_dst() {
        let before = ZonedDateTime::new(2014, 3, 29, 12, 0, 0, 0, warsaw()).unwrap();
        let later = before.plus(&[hours(24)]).unwrap();
        assert_eq!(later.hour(), 13);
        assert_eq!(later.day(), 30);
    }

    #[test]
    fn test_amounts_apply_in_order() {
        let start = utc(2014, 1, 10, 0);
        assert_eq!(start.plus(&[weeks(3), months(1)]).unwrap(), utc(2014, 2, 28, 0));
        assert_eq!(start.plus(&[months(1), weeks(3)]).unwrap(), utc(2014, 3, 3, 0));
    }

    #[test]
    fn test_plus_then_minus() {
        let start = utc(2014, 1, 10, 5);
        for amount in [days(40), hours(-30), months(3)] {
            let there = start.plus(&[amount]).unwrap();
            assert!(there.minus(&[amount]).unwrap().is_equal(&start));
        }
    }

    #[test]
    fn test_display() {
        let dt = ZonedDateTime::new(2014, 7, 1, 12, 30, 0, 0, warsaw()).unwrap();
        assert_eq!(dt.to_string(), "2014-07-01T12:30:00+02:00[Europe/Warsaw]");
        assert_eq!(utc(2014, 7, 1, 12).to_string(), "2014-07-01T12:00:00Z");
    }
}
