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

//! Pattern formatting and parsing, forwarded to chrono's strftime syntax.
//!
//! ```
//! use calendrical::{format, Zone};
//!
//! let zone = Zone::for_id("Europe/Warsaw").unwrap();
//! let value = format::parse_zoned("2014-01-26 10:00", "%Y-%m-%d %H:%M", zone).unwrap();
//! assert_eq!(format::format(&value, "%d.%m.%Y %H:%M %z").unwrap(), "26.01.2014 10:00 +0100");
//! ```

use crate::{Disambiguation, LocalDate, LocalDateTime, LocalTime, Result, TimeError};
use crate::{Zone, ZonedDateTime};
use chrono::format::{DelayedFormat, ParseErrorKind, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::fmt::Write;

/// Values that can be rendered with a strftime pattern.
pub trait Formattable {
    fn delayed_format<'a>(&self, pattern: &'a str) -> DelayedFormat<StrftimeItems<'a>>;
}

impl Formattable for ZonedDateTime {
    fn delayed_format<'a>(&self, pattern: &'a str) -> DelayedFormat<StrftimeItems<'a>> {
        self.as_chrono().format(pattern)
    }
}

impl Formattable for LocalDateTime {
    fn delayed_format<'a>(&self, pattern: &'a str) -> DelayedFormat<StrftimeItems<'a>> {
        self.as_naive().format(pattern)
    }
}

impl Formattable for LocalDate {
    fn delayed_format<'a>(&self, pattern: &'a str) -> DelayedFormat<StrftimeItems<'a>> {
        self.as_naive().format(pattern)
    }
}

impl Formattable for LocalTime {
    fn delayed_format<'a>(&self, pattern: &'a str) -> DelayedFormat<StrftimeItems<'a>> {
        self.as_naive().format(pattern)
    }
}

/// Renders `value` with `pattern`. Fails on malformed patterns and on
/// specifiers the value has no field for, such as `%z` on a local value.
pub fn format<T: Formattable>(value: &T, pattern: &str) -> Result<String> {
    let mut rendered = String::new();
    write!(rendered, "{}", value.delayed_format(pattern))
        .map_err(|_| TimeError::parse(pattern, "pattern cannot render this value"))?;
    Ok(rendered)
}

/// Parses a zoned value. An offset in the input fixes the instant, which is
/// then shown in `zone`; otherwise the fields are read as wall-clock time in
/// `zone`.
pub fn parse_zoned(input: &str, pattern: &str, zone: Zone) -> Result<ZonedDateTime> {
    match DateTime::parse_from_str(input, pattern) {
        Ok(parsed) => Ok(ZonedDateTime::from_instant(&parsed.with_timezone(&Utc), zone)),
        Err(e) if e.kind() == ParseErrorKind::NotEnough => {
            let local = NaiveDateTime::parse_from_str(input, pattern)
                .map_err(|e| TimeError::parse(input, e))?;
            ZonedDateTime::from_local(&local, zone, Disambiguation::Compatible)
        }
        Err(e) => Err(TimeError::parse(input, e)),
    }
}

pub fn parse_local_date_time(input: &str, pattern: &str) -> Result<LocalDateTime> {
    NaiveDateTime::parse_from_str(input, pattern)
        .map(LocalDateTime::from)
        .map_err(|e| TimeError::parse(input, e))
}

pub fn parse_local_date(input: &str, pattern: &str) -> Result<LocalDate> {
    NaiveDate::parse_from_str(input, pattern)
        .map(LocalDate::from)
        .map_err(|e| TimeError::parse(input, e))
}

pub fn parse_local_time(input: &str, pattern: &str) -> Result<LocalTime> {
    NaiveTime::parse_from_str(input, pattern)
        .map(LocalTime::from)
        .map_err(|e| TimeError::parse(input, e))
}

/// Parses an RFC 3339 timestamp, keeping its offset as a fixed zone.
pub fn parse_rfc3339(input: &str) -> Result<ZonedDateTime> {
    DateTime::parse_from_rfc3339(input)
        .map(ZonedDateTime::from)
        .map_err(|e| TimeError::parse(input, e))
}
