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

//! Calendar periods and exact durations.
//!
//! A [`Period`] counts calendar units and only acquires a physical length
//! once it is applied to a particular date. An [`ExactDuration`] is a fixed
//! span of time. The two never convert into one another across the
//! variable-length boundary: a period with years or months has no length in
//! days, and a duration has no length in months.

use crate::unit::{
    DAYS_PER_WEEK, MONTHS_PER_YEAR, NANOS_PER_SECOND, SECONDS_PER_DAY,
    SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::{Result, TimeError, Unit};
use chrono::TimeDelta;
use std::fmt::{Display, Formatter};

/// A count of years, months and days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Period {
    years: i64,
    months: i64,
    days: i64,
}

impl Period {
    pub const ZERO: Period = Period { years: 0, months: 0, days: 0 };

    pub const fn new(years: i64, months: i64, days: i64) -> Self {
        Self { years, months, days }
    }

    pub const fn years(&self) -> i64 {
        self.years
    }

    pub const fn months(&self) -> i64 {
        self.months
    }

    pub const fn days(&self) -> i64 {
        self.days
    }

    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Years and months folded into a single month count.
    pub fn total_months(&self) -> Result<i64> {
        self.years
            .checked_mul(MONTHS_PER_YEAR)
            .and_then(|m| m.checked_add(self.months))
            .ok_or(TimeError::OutOfRange)
    }

    pub fn multiplied_by(&self, factor: i64) -> Result<Self> {
        let scale =
            |v: i64| v.checked_mul(factor).ok_or(TimeError::OutOfRange);
        Ok(Self {
            years: scale(self.years)?,
            months: scale(self.months)?,
            days: scale(self.days)?,
        })
    }
}

/// A fixed span of physical time.
///
/// Stored as whole seconds plus a nanosecond adjustment in
/// `0..1_000_000_000`; the sign lives in `seconds`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExactDuration {
    seconds: i64,
    nanos: u32,
}

impl ExactDuration {
    pub const ZERO: ExactDuration = ExactDuration { seconds: 0, nanos: 0 };

    pub fn from_nanos(total: i128) -> Result<Self> {
        let seconds = total.div_euclid(NANOS_PER_SECOND);
        let nanos = total.rem_euclid(NANOS_PER_SECOND) as u32;
        let seconds =
            i64::try_from(seconds).map_err(|_| TimeError::OutOfRange)?;
        Ok(Self { seconds, nanos })
    }

    fn saturating_from_nanos(total: i128) -> Self {
        Self::from_nanos(total).unwrap_or(if total < 0 {
            Self { seconds: i64::MIN, nanos: 0 }
        } else {
            Self { seconds: i64::MAX, nanos: (NANOS_PER_SECOND - 1) as u32 }
        })
    }

    pub fn from_seconds(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }

    /// Whole seconds, rounded toward negative infinity.
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Nanoseconds past [`Self::seconds`], always non-negative.
    pub const fn nanos(&self) -> u32 {
        self.nanos
    }

    pub fn total_nanos(&self) -> i128 {
        self.seconds as i128 * NANOS_PER_SECOND + self.nanos as i128
    }

    pub fn is_zero(&self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }

    pub fn is_negative(&self) -> bool {
        self.seconds < 0
    }

    pub fn multiplied_by(&self, factor: i64) -> Result<Self> {
        let total = self
            .total_nanos()
            .checked_mul(factor as i128)
            .ok_or(TimeError::OutOfRange)?;
        Self::from_nanos(total)
    }

    pub(crate) fn to_time_delta(self) -> Result<TimeDelta> {
        TimeDelta::new(self.seconds, self.nanos).ok_or(TimeError::OutOfRange)
    }

    pub(crate) fn from_time_delta(delta: TimeDelta) -> Self {
        // num_seconds truncates toward zero and subsec_nanos carries the
        // same sign, so the sum is exact.
        let total = delta.num_seconds() as i128 * NANOS_PER_SECOND
            + delta.subsec_nanos() as i128;
        Self::saturating_from_nanos(total)
    }
}

/// Either a calendar [`Period`] or an [`ExactDuration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalAmount {
    Period(Period),
    Duration(ExactDuration),
}

impl TemporalAmount {
    pub fn is_zero(&self) -> bool {
        match self {
            TemporalAmount::Period(p) => p.is_zero(),
            TemporalAmount::Duration(d) => d.is_zero(),
        }
    }

    /// Scales every component by `factor`.
    pub fn multiplied_by(&self, factor: i64) -> Result<Self> {
        Ok(match self {
            TemporalAmount::Period(p) => p.multiplied_by(factor)?.into(),
            TemporalAmount::Duration(d) => d.multiplied_by(factor)?.into(),
        })
    }

    pub fn negated(&self) -> Result<Self> {
        self.multiplied_by(-1)
    }

    /// Expresses the amount as a whole number of `unit`s, truncating toward
    /// zero.
    ///
    /// A period converts to day-or-smaller units only when it has no years
    /// or months, and to months or years only when it has no days. A
    /// duration never converts to months or years.
    pub fn in_unit(&self, unit: Unit) -> Result<i64> {
        let unsupported =
            || TimeError::UnsupportedConversion { amount: *self, unit };
        let count = match self {
            TemporalAmount::Period(p) => match unit {
                Unit::Month | Unit::Year => {
                    if p.days != 0 {
                        return Err(unsupported());
                    }
                    let months = p.total_months()?;
                    return Ok(if unit == Unit::Year {
                        months / MONTHS_PER_YEAR
                    } else {
                        months
                    });
                }
                _ => {
                    if p.years != 0 || p.months != 0 {
                        return Err(unsupported());
                    }
                    let unit_nanos = unit.fixed_nanos().ok_or_else(unsupported)?;
                    p.days as i128 * SECONDS_PER_DAY * NANOS_PER_SECOND
                        / unit_nanos
                }
            },
            TemporalAmount::Duration(d) => {
                let unit_nanos = unit.fixed_nanos().ok_or_else(unsupported)?;
                d.total_nanos() / unit_nanos
            }
        };
        i64::try_from(count).map_err(|_| TimeError::OutOfRange)
    }

    pub fn in_nanos(&self) -> Result<i64> {
        self.in_unit(Unit::Nanosecond)
    }

    pub fn in_millis(&self) -> Result<i64> {
        self.in_unit(Unit::Millisecond)
    }

    pub fn in_seconds(&self) -> Result<i64> {
        self.in_unit(Unit::Second)
    }

    pub fn in_minutes(&self) -> Result<i64> {
        self.in_unit(Unit::Minute)
    }

    pub fn in_hours(&self) -> Result<i64> {
        self.in_unit(Unit::Hour)
    }

    pub fn in_days(&self) -> Result<i64> {
        self.in_unit(Unit::Day)
    }

    pub fn in_weeks(&self) -> Result<i64> {
        self.in_unit(Unit::Week)
    }

    pub fn in_months(&self) -> Result<i64> {
        self.in_unit(Unit::Month)
    }

    pub fn in_years(&self) -> Result<i64> {
        self.in_unit(Unit::Year)
    }
}

impl From<Period> for TemporalAmount {
    fn from(p: Period) -> Self {
        TemporalAmount::Period(p)
    }
}

impl From<ExactDuration> for TemporalAmount {
    fn from(d: ExactDuration) -> Self {
        TemporalAmount::Duration(d)
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return f.write_str("P0D");
        }
        f.write_str("P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}

impl Display for ExactDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let total = self.total_nanos();
        let sign = if total < 0 { "-" } else { "" };
        let total = total.unsigned_abs();
        let nanos_per_second = NANOS_PER_SECOND as u128;
        let seconds = total / nanos_per_second;
        let nanos = total % nanos_per_second;
        let hours = seconds / SECONDS_PER_HOUR as u128;
        let minutes = seconds % SECONDS_PER_HOUR as u128 / 60;
        let seconds = seconds % SECONDS_PER_MINUTE as u128;

        f.write_str("PT")?;
        if hours != 0 {
            write!(f, "{sign}{hours}H")?;
        }
        if minutes != 0 {
            write!(f, "{sign}{minutes}M")?;
        }
        if seconds != 0 || nanos != 0 || (hours == 0 && minutes == 0) {
            write!(f, "{sign}{seconds}")?;
            if nanos != 0 {
                let fraction = format!("{nanos:09}");
                write!(f, ".{}", fraction.trim_end_matches('0'))?;
            }
            f.write_str("S")?;
        }
        Ok(())
    }
}

impl Display for TemporalAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TemporalAmount::Period(p) => p.fmt(f),
            TemporalAmount::Duration(d) => d.fmt(f),
        }
    }
}

pub fn years(n: i64) -> TemporalAmount {
    Period::new(n, 0, 0).into()
}

pub fn months(n: i64) -> TemporalAmount {
    Period::new(0, n, 0).into()
}

pub fn weeks(n: i64) -> TemporalAmount {
    days(n.saturating_mul(DAYS_PER_WEEK))
}

pub fn days(n: i64) -> TemporalAmount {
    Period::new(0, 0, n).into()
}

pub fn hours(n: i64) -> TemporalAmount {
    ExactDuration::saturating_from_nanos(
        n as i128 * SECONDS_PER_HOUR * NANOS_PER_SECOND,
    )
    .into()
}

pub fn minutes(n: i64) -> TemporalAmount {
    ExactDuration::saturating_from_nanos(
        n as i128 * SECONDS_PER_MINUTE * NANOS_PER_SECOND,
    )
    .into()
}

pub fn seconds(n: i64) -> TemporalAmount {
    ExactDuration::from_seconds(n).into()
}

pub fn millis(n: i64) -> TemporalAmount {
    ExactDuration::saturating_from_nanos(n as i128 * 1_000_000).into()
}

pub fn nanos(n: i64) -> TemporalAmount {
    ExactDuration::saturating_from_nanos(n as i128).into()
}
