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

use crate::validate::{self, days_in_month};
use crate::{ExactDuration, LocalDate, Result, TimeError};
use chrono::{Datelike, NaiveTime, Timelike};
use std::fmt::{Display, Formatter};

/// A wall-clock time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalTime(NaiveTime);

impl LocalTime {
    pub const MIDNIGHT: LocalTime = LocalTime(NaiveTime::MIN);

    pub fn new(hour: u32, minute: u32, second: u32, nanosecond: u32) -> Result<Self> {
        Ok(Self(validate::time_of_day(hour, minute, second, nanosecond)?))
    }

    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub fn nanosecond(&self) -> u32 {
        self.0.nanosecond()
    }

    /// Moves the clock hands, wrapping around midnight.
    pub fn plus_duration(&self, duration: &ExactDuration) -> Result<Self> {
        let (time, _wrapped_seconds) =
            self.0.overflowing_add_signed(duration.to_time_delta()?);
        Ok(Self(time))
    }
}

impl From<NaiveTime> for LocalTime {
    fn from(value: NaiveTime) -> Self {
        Self(value)
    }
}

impl Display for LocalTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A month of a particular year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let first = validate::calendar_date(year, month, 1)?;
        Ok(Self { year: first.year(), month: first.month() })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn length_of_month(&self) -> u32 {
        // construction guarantees the month is representable
        days_in_month(self.year, self.month).unwrap_or(31)
    }

    pub fn at_day(&self, day: u32) -> Result<LocalDate> {
        LocalDate::new(self.year, self.month, day)
    }

    pub fn first_day(&self) -> Result<LocalDate> {
        self.at_day(1)
    }

    pub fn last_day(&self) -> Result<LocalDate> {
        self.at_day(self.length_of_month())
    }

    pub fn plus_months(&self, months: i64) -> Result<Self> {
        let total = (self.year as i64 * 12 + self.month as i64 - 1)
            .checked_add(months)
            .ok_or(TimeError::OutOfRange)?;
        let year = i32::try_from(total.div_euclid(12)).map_err(|_| TimeError::OutOfRange)?;
        Self::new(year, total.rem_euclid(12) as u32 + 1)
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
