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

use crate::{TemporalAmount, Unit};
use chrono::NaiveDateTime;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TimeError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("field = {field}; value {value} is not a valid calendar value")]
    InvalidCalendarField { field: &'static str, value: i64 },
    #[error("{amount} cannot be expressed in {unit}")]
    UnsupportedConversion { amount: TemporalAmount, unit: Unit },
    #[error("{value_kind} does not support {unit}")]
    UnsupportedUnit { unit: Unit, value_kind: &'static str },
    #[error("local time {local} is ambiguous in zone {zone}")]
    AmbiguousLocalTime { local: NaiveDateTime, zone: String },
    #[error("local time {local} does not exist in zone {zone}")]
    NonexistentLocalTime { local: NaiveDateTime, zone: String },
    #[error("unknown time zone '{0}'")]
    UnknownZone(String),
    #[error("invalid zone offset {hours}h {minutes}m")]
    InvalidOffset { hours: i32, minutes: i32 },
    #[error("result is outside the supported date range")]
    OutOfRange,
    #[error("could not parse '{input}': {reason}")]
    Parse { input: String, reason: String },
}

impl TimeError {
    pub(crate) fn parse(input: &str, reason: impl ToString) -> Self {
        Self::Parse { input: input.to_string(), reason: reason.to_string() }
    }
}
