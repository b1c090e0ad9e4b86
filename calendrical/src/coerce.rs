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

//! Conversion between host time representations and [`ZonedDateTime`].

use crate::{LocalDate, LocalDateTime, Result, TimeError, Zone, ZonedDateTime};
use chrono::{DateTime, Duration, FixedOffset, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

/// Everything [`to_date_time`] accepts. Nothing outside this list coerces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeSource {
    /// Milliseconds since the Unix epoch.
    EpochMillis(i64),
    SystemTime(SystemTime),
    Utc(DateTime<Utc>),
    /// Rendered in a fixed offset zone.
    Fixed(DateTime<FixedOffset>),
    Zoned(ZonedDateTime),
    /// Interpreted as a UTC wall-clock reading.
    LocalDateTime(LocalDateTime),
    /// Midnight UTC on that date.
    LocalDate(LocalDate),
}

/// Coerces any [`TimeSource`] into a zoned value.
pub fn to_date_time(source: impl Into<TimeSource>) -> Result<ZonedDateTime> {
    match source.into() {
        TimeSource::EpochMillis(millis) => ZonedDateTime::from_epoch_millis(millis),
        TimeSource::SystemTime(time) => Ok(ZonedDateTime::from(from_system_time(time)?)),
        TimeSource::Utc(instant) => Ok(ZonedDateTime::from(instant)),
        TimeSource::Fixed(value) => Ok(ZonedDateTime::from(value)),
        TimeSource::Zoned(value) => Ok(value),
        TimeSource::LocalDateTime(value) => value.at_zone(Zone::utc()),
        TimeSource::LocalDate(value) => value.at_start_of_day_in(Zone::utc()),
    }
}

pub fn to_epoch_millis(value: &ZonedDateTime) -> i64 {
    value.instant().timestamp_millis()
}

impl ZonedDateTime {
    /// The instant `millis` after the Unix epoch, in UTC.
    pub fn from_epoch_millis(millis: i64) -> Result<Self> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(Self::from)
            .ok_or(TimeError::OutOfRange)
    }

    pub fn to_system_time(&self) -> Result<SystemTime> {
        let since_epoch = self.instant() - DateTime::<Utc>::UNIX_EPOCH;
        match since_epoch.to_std() {
            Ok(after) => UNIX_EPOCH.checked_add(after),
            Err(_) => since_epoch
                .abs()
                .to_std()
                .ok()
                .and_then(|before| UNIX_EPOCH.checked_sub(before)),
        }
        .ok_or(TimeError::OutOfRange)
    }
}

fn from_system_time(time: SystemTime) -> Result<DateTime<Utc>> {
    let since_epoch = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => Duration::from_std(after),
        Err(before) => Duration::from_std(before.duration()).map(|d| -d),
    }
    .map_err(|_| TimeError::OutOfRange)?;
    DateTime::<Utc>::UNIX_EPOCH
        .checked_add_signed(since_epoch)
        .ok_or(TimeError::OutOfRange)
}

impl From<i64> for TimeSource {
    fn from(millis: i64) -> Self {
        Self::EpochMillis(millis)
    }
}

impl From<SystemTime> for TimeSource {
    fn from(time: SystemTime) -> Self {
        Self::SystemTime(time)
    }
}

impl From<DateTime<Utc>> for TimeSource {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::Utc(instant)
    }
}

impl From<DateTime<FixedOffset>> for TimeSource {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Fixed(value)
    }
}

impl From<ZonedDateTime> for TimeSource {
    fn from(value: ZonedDateTime) -> Self {
        Self::Zoned(value)
    }
}

impl From<LocalDateTime> for TimeSource {
    fn from(value: LocalDateTime) -> Self {
        Self::LocalDateTime(value)
    }
}

impl From<LocalDate> for TimeSource {
    fn from(value: LocalDate) -> Self {
        Self::LocalDate(value)
    }
}
