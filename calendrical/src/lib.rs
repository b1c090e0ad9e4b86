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

//! Calendar arithmetic and interval engine.
//!
//! Values come in three flavours sharing the [`DateTimeValue`] capability:
//! [`ZonedDateTime`] (an instant rendered in a [`Zone`]), [`LocalDateTime`]
//! and [`LocalDate`]. They are combined with [`TemporalAmount`]s, either a
//! calendar [`Period`] or an [`ExactDuration`], and zoned values can be paired
//! into half-open [`Interval`]s.
//!
//! "Now" is read through [`clock`], which supports scoped, thread-local
//! overrides for deterministic tests and time travel.

// Lint groups: https://doc.rust-lang.org/rustc/lints/groups.html
#![warn(future_incompatible, nonstandard_style, unused)]
#![warn(
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    unconditional_recursion,
    unused_comparisons,
    while_true
)]
#![warn(missing_debug_implementations,
    // TODO: missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_results
)]
#![warn(clippy::unwrap_used)]

pub use self::amount::{
    days, hours, millis, minutes, months, nanos, seconds, weeks, years,
    ExactDuration, Period, TemporalAmount,
};
pub use self::builder::DateTimeBuilder;
pub use self::calendar::{
    earliest, earliest_of, first_day_of_month, floor, is_leap_year, last_day_of_month,
    latest, latest_of, max_date, min_date, nth_day_of_month, number_of_days_in_month,
    week_number_of_year,
};
pub use self::clock::{
    do_at, local_now, now, now_instant, today, with_clock, Clock, ClockGuard,
};
pub use self::coerce::{to_date_time, to_epoch_millis, TimeSource};
pub use self::config::{CalendarConfig, ClockConfig, ZoneConfig};
pub use self::error::{Result, TimeError};
pub use self::interval::{overlaps_bounds, within, Interval};
pub use self::periodic::{periodic_seq, periodic_seq_until, PeriodicSeq};
pub use self::unit::Unit;
pub use self::value::{
    DateTimeValue, LocalDate, LocalDateTime, LocalTime, YearMonth, ZonedDateTime,
};
pub use self::zone::{available_zone_ids, Disambiguation, Zone};

mod amount;
mod builder;
mod calendar;
pub mod clock;
mod coerce;
mod config;
mod error;
pub mod format;
mod interval;
mod periodic;
pub mod predicates;
mod unit;
mod validate;
mod value;
mod zone;
