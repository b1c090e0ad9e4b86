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

use crate::{
    LocalDate, LocalDateTime, LocalTime, Result, YearMonth, Zone, ZonedDateTime,
};

/// Builds date-time values from a year and any number of finer fields.
///
/// Fields left unset default to 1 for month and day and to 0 for the time
/// of day. Zoned values default to UTC.
///
/// ```
/// use calendrical::{DateTimeBuilder, DateTimeValue};
///
/// let dt = DateTimeBuilder::new(1986).with_month(10).with_day(14).build_zoned().unwrap();
/// assert_eq!(dt.hour(), 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DateTimeBuilder {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: u32,
    zone: Option<Zone>,
}

impl DateTimeBuilder {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            nanosecond: 0,
            zone: None,
        }
    }

    pub fn with_month(mut self, month: u32) -> Self {
        self.month = month;
        self
    }

    pub fn with_day(mut self, day: u32) -> Self {
        self.day = day;
        self
    }

    pub fn with_hour(mut self, hour: u32) -> Self {
        self.hour = hour;
        self
    }

    pub fn with_minute(mut self, minute: u32) -> Self {
        self.minute = minute;
        self
    }

    pub fn with_second(mut self, second: u32) -> Self {
        self.second = second;
        self
    }

    pub fn with_millisecond(mut self, millisecond: u32) -> Self {
        self.nanosecond = millisecond.saturating_mul(1_000_000);
        self
    }

    pub fn with_nanosecond(mut self, nanosecond: u32) -> Self {
        self.nanosecond = nanosecond;
        self
    }

    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zone = Some(zone);
        self
    }

    pub fn build_zoned(self) -> Result<ZonedDateTime> {
        ZonedDateTime::new(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.nanosecond,
            self.zone.unwrap_or_default(),
        )
    }

    pub fn build_local(self) -> Result<LocalDateTime> {
        LocalDateTime::new(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.nanosecond,
        )
    }

    pub fn build_date(self) -> Result<LocalDate> {
        LocalDate::new(self.year, self.month, self.day)
    }

    pub fn build_year_month(self) -> Result<YearMonth> {
        YearMonth::new(self.year, self.month)
    }

    /// Only the time fields are used; the year is ignored.
    pub fn build_time(self) -> Result<LocalTime> {
        LocalTime::new(self.hour, self.minute, self.second, self.nanosecond)
    }
}
