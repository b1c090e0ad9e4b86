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

use crate::{clock, earliest, latest, periodic_seq_until, DateTimeValue};
use crate::{ExactDuration, PeriodicSeq, Result, TemporalAmount, Unit, ZonedDateTime};
use std::fmt::{Display, Formatter};

/// The half-open span `[start, end)` between two zoned date-times.
///
/// Nothing forces `start <= end`. Inverted intervals are kept as given and
/// every query applies its comparison literally, so an inverted interval
/// contains nothing and overlaps nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    start: ZonedDateTime,
    end: ZonedDateTime,
}

impl Interval {
    pub fn new(start: ZonedDateTime, end: ZonedDateTime) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> ZonedDateTime {
        self.start
    }

    pub fn end(&self) -> ZonedDateTime {
        self.end
    }

    /// `start <= point < end`.
    pub fn contains(&self, point: &ZonedDateTime) -> bool {
        !point.is_before(&self.start) && point.is_before(&self.end)
    }

    /// Whether the two intervals share at least one instant. Intervals that
    /// only touch at a boundary do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        other.start.is_before(&self.end) && other.end.is_after(&self.start)
    }

    /// The intersection of two intervals, or `None` if they do not overlap.
    ///
    /// Without `other`, intersects with the empty interval at the current
    /// [`clock::now`], which is only `Some` when now falls strictly inside.
    pub fn overlap(&self, other: Option<&Interval>) -> Option<Interval> {
        let other = match other {
            Some(other) => *other,
            None => {
                let now = clock::now();
                Interval::new(now, now)
            }
        };
        self.overlaps(&other).then(|| {
            Interval::new(latest(self.start, other.start), earliest(self.end, other.end))
        })
    }

    /// Whether one interval ends exactly where the other starts.
    pub fn abuts(&self, other: &Interval) -> bool {
        self.start == other.end || other.start == self.end
    }

    /// The span between two intervals that neither overlap nor abut.
    pub fn gap(&self, other: &Interval) -> Option<Interval> {
        if self.overlaps(other) || self.abuts(other) {
            None
        } else if self.end.is_before(&other.start) {
            Some(Interval::new(self.end, other.start))
        } else if other.end.is_before(&self.start) {
            Some(Interval::new(other.end, self.start))
        } else {
            None
        }
    }

    /// Moves the end by each amount in turn.
    pub fn extend(&self, amounts: &[TemporalAmount]) -> Result<Interval> {
        Ok(Interval::new(self.start, self.end.plus(amounts)?))
    }

    /// No instant satisfies [`Interval::contains`].
    pub fn is_empty(&self) -> bool {
        !self.start.is_before(&self.end)
    }

    /// Physical time between start and end, negative for inverted intervals.
    pub fn length(&self) -> ExactDuration {
        ExactDuration::from_time_delta(self.end.instant() - self.start.instant())
    }

    /// Whole `unit`s from start to end, truncated toward zero.
    pub fn in_unit(&self, unit: Unit) -> Result<i64> {
        self.start.until(&self.end, unit)
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

    /// Steps through the interval from its start by `amount`.
    pub fn periodic(&self, amount: TemporalAmount) -> PeriodicSeq<ZonedDateTime> {
        periodic_seq_until(self.start, self.end, amount)
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}

/// `start <= test <= end`, inclusive at both ends.
pub fn within<T: DateTimeValue>(start: &T, end: &T, test: &T) -> bool {
    !test.is_before(start) && !test.is_after(end)
}

/// Whether `[start_a, end_a]` and `[start_b, end_b]` share a point. Touching
/// endpoints count.
pub fn overlaps_bounds<T: DateTimeValue>(
    start_a: &T,
    end_a: &T,
    start_b: &T,
    end_b: &T,
) -> bool {
    !start_b.is_after(end_a) && !end_b.is_before(start_a)
}
