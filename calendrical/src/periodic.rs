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

use crate::{DateTimeValue, TemporalAmount};
use std::iter::FusedIterator;

/// Iterator over `start + amount * k` for `k = 0, 1, 2, ...`.
///
/// Each element is computed from `start` directly, so month-end clamping in
/// one step never carries into the next. The sequence ends once arithmetic
/// leaves the representable range, or at the bound given to
/// [`periodic_seq_until`].
#[derive(Debug, Clone)]
pub struct PeriodicSeq<T> {
    start: T,
    amount: TemporalAmount,
    until: Option<T>,
    step: Option<i64>,
}

pub fn periodic_seq<T: DateTimeValue>(start: T, amount: TemporalAmount) -> PeriodicSeq<T> {
    PeriodicSeq { start, amount, until: None, step: Some(0) }
}

/// Like [`periodic_seq`], stopping before the first element not strictly
/// before `end`.
pub fn periodic_seq_until<T: DateTimeValue>(
    start: T,
    end: T,
    amount: TemporalAmount,
) -> PeriodicSeq<T> {
    PeriodicSeq { start, amount, until: Some(end), step: Some(0) }
}

impl<T: DateTimeValue> Iterator for PeriodicSeq<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let step = self.step.take()?;
        let value = self
            .amount
            .multiplied_by(step)
            .and_then(|amount| self.start.plus_amount(&amount))
            .ok()?;
        if let Some(until) = &self.until {
            if !value.is_before(until) {
                return None;
            }
        }
        self.step = step.checked_add(1);
        Some(value)
    }
}

impl<T: DateTimeValue> FusedIterator for PeriodicSeq<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{days, hours, months, LocalDate, LocalDateTime};

    fn date(y: i32, m: u32, d: u32) -> LocalDate {
        LocalDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_months_do_not_drift() {
        let dates: Vec<_> = periodic_seq(date(2014, 1, 31), months(1)).take(4).collect();
        assert_eq!(
            dates,
            vec![date(2014, 1, 31), date(2014, 2, 28), date(2014, 3, 31), date(2014, 4, 30)]
        );
    }

    #[test]
    fn test_until_is_exclusive() {
        let dates: Vec<_> =
            periodic_seq_until(date(2014, 1, 1), date(2014, 1, 15), days(7)).collect();
        assert_eq!(dates, vec![date(2014, 1, 1), date(2014, 1, 8)]);
    }

    #[test]
    fn test_empty_when_start_not_before_end() {
        let mut seq = periodic_seq_until(date(2014, 1, 1), date(2014, 1, 1), days(1));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_stops_on_unsupported_amount() {
        assert_eq!(periodic_seq(date(2014, 1, 1), hours(1)).count(), 0);
    }

    #[test]
    fn test_durations() {
        let start = LocalDateTime::new(2014, 1, 1, 22, 0, 0, 0).unwrap();
        let last = periodic_seq(start, hours(1)).nth(3).unwrap();
        assert_eq!(last, LocalDateTime::new(2014, 1, 2, 1, 0, 0, 0).unwrap());
    }
}
