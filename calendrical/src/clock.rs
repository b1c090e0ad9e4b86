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

//! Reading "now", with scoped overrides.
//!
//! Every thread starts on the system clock in the system zone. A [`Clock`]
//! installed with [`Clock::install`] (or [`with_clock`], [`do_at`]) shadows
//! it for the current thread until its [`ClockGuard`] drops. Overrides nest
//! and are never visible to other threads.

use crate::{
    ExactDuration, LocalDate, LocalDateTime, Result, TimeError, Zone,
    ZonedDateTime,
};
use chrono::{DateTime, Utc};
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use tracing::trace;

thread_local! {
    static OVERRIDES: RefCell<Vec<(u64, Clock)>> = const { RefCell::new(Vec::new()) };
    static NEXT_ID: Cell<u64> = const { Cell::new(0) };
}

/// A source for the current instant and the zone it is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// The operating system clock.
    System { zone: Zone },
    /// A pinned instant.
    Fixed { instant: DateTime<Utc>, zone: Zone },
}

impl Clock {
    /// The system clock in the system zone.
    pub fn system() -> Self {
        Self::System { zone: Zone::system_default() }
    }

    /// A clock stopped at `at`, rendering in its zone.
    pub fn fixed(at: &ZonedDateTime) -> Self {
        Self::Fixed { instant: at.instant(), zone: at.zone() }
    }

    pub fn zone(&self) -> Zone {
        match self {
            Self::System { zone } | Self::Fixed { zone, .. } => *zone,
        }
    }

    pub fn instant(&self) -> DateTime<Utc> {
        match self {
            Self::System { .. } => Utc::now(),
            Self::Fixed { instant, .. } => *instant,
        }
    }

    pub fn now(&self) -> ZonedDateTime {
        ZonedDateTime::from_instant(&self.instant(), self.zone())
    }

    /// Same clock rendering in another zone.
    pub fn with_zone(self, zone: Zone) -> Self {
        match self {
            Self::System { .. } => Self::System { zone },
            Self::Fixed { instant, .. } => Self::Fixed { instant, zone },
        }
    }

    /// Moves a fixed clock forward. The system clock cannot be moved.
    pub fn advanced_by(self, duration: ExactDuration) -> Result<Self> {
        match self {
            Self::System { .. } => Ok(self),
            Self::Fixed { instant, zone } => {
                let instant = instant
                    .checked_add_signed(duration.to_time_delta()?)
                    .ok_or(TimeError::OutOfRange)?;
                Ok(Self::Fixed { instant, zone })
            }
        }
    }

    /// Makes this clock the current one for this thread until the guard drops.
    #[must_use = "the override is removed as soon as the guard is dropped"]
    pub fn install(self) -> ClockGuard {
        let id = NEXT_ID.with(|next| {
            let id = next.get();
            next.set(id.wrapping_add(1));
            id
        });
        let depth = OVERRIDES.with(|stack| {
            let mut stack = stack.borrow_mut();
            stack.push((id, self));
            stack.len()
        });
        trace!(clock = ?self, id, depth, "installed clock override");
        ClockGuard { id, _thread_bound: PhantomData }
    }

    /// The innermost override on this thread, else the system clock.
    pub fn current() -> Self {
        OVERRIDES
            .with(|stack| stack.borrow().last().map(|(_, clock)| *clock))
            .unwrap_or_else(Self::system)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::system()
    }
}

/// Removes its override when dropped, including during unwinding.
///
/// Guards may drop in any order. Only the guard's own override is removed,
/// and the most recently installed override still alive stays current.
#[derive(Debug)]
pub struct ClockGuard {
    id: u64,
    // Overrides live in a thread-local, so the guard must stay on its thread.
    _thread_bound: PhantomData<*const ()>,
}

impl Drop for ClockGuard {
    fn drop(&mut self) {
        OVERRIDES.with(|stack| {
            let mut stack = stack.borrow_mut();
            if let Some(index) = stack.iter().rposition(|(id, _)| *id == self.id) {
                let _ = stack.remove(index);
            }
        });
        trace!(id = self.id, "removed clock override");
    }
}

/// Runs `f` with `clock` as the current clock.
pub fn with_clock<R>(clock: Clock, f: impl FnOnce() -> R) -> R {
    let _guard = clock.install();
    f()
}

/// Runs `f` with time stopped at `at`.
pub fn do_at<R>(at: &ZonedDateTime, f: impl FnOnce() -> R) -> R {
    with_clock(Clock::fixed(at), f)
}

pub fn now() -> ZonedDateTime {
    Clock::current().now()
}

pub fn now_instant() -> DateTime<Utc> {
    Clock::current().instant()
}

pub fn local_now() -> LocalDateTime {
    now().to_local_date_time()
}

pub fn today() -> LocalDate {
    now().to_local_date()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{hours, DateTimeBuilder, DateTimeValue};

    fn at(year: i32) -> ZonedDateTime {
        DateTimeBuilder::new(year).build_zoned().unwrap()
    }

    #[test]
    fn test_fixed_clock() {
        let instant = at(1986);
        do_at(&instant, || {
            assert_eq!(now(), instant);
            assert_eq!(now_instant(), instant.instant());
            assert_eq!(today(), LocalDate::new(1986, 1, 1).unwrap());
        });
    }

    #[test]
    fn test_overrides_nest_and_restore() {
        do_at(&at(2000), || {
            do_at(&at(2010), || assert_eq!(now(), at(2010)));
            assert_eq!(now(), at(2000));
        });
        assert!(matches!(Clock::current(), Clock::System { .. }));
    }

    #[test]
    fn test_guards_drop_out_of_order() {
        let outer = Clock::fixed(&at(2000)).install();
        let inner = Clock::fixed(&at(2010)).install();
        drop(outer);
        assert_eq!(now(), at(2010));
        drop(inner);
        assert!(matches!(Clock::current(), Clock::System { .. }));
    }

    #[test]
    fn test_restored_on_panic() {
        let result = std::panic::catch_unwind(|| {
            do_at(&at(2000), || panic!("boom"));
        });
        assert!(result.is_err());
        assert!(matches!(Clock::current(), Clock::System { .. }));
    }

    #[test]
    fn test_fixed_clock_renders_in_zone() {
        let zone = Zone::for_id("Europe/Warsaw").unwrap();
        let clock = Clock::fixed(&at(2014)).with_zone(zone);
        with_clock(clock, || {
            assert_eq!(local_now(), LocalDateTime::new(2014, 1, 1, 1, 0, 0, 0).unwrap());
            assert_eq!(now().zone(), zone);
        });
    }

    #[test]
    fn test_advanced_by() {
        let clock = Clock::fixed(&at(2014)).advanced_by(ExactDuration::from_seconds(3600)).unwrap();
        assert_eq!(clock.now(), at(2014).plus(&[hours(1)]).unwrap());
    }

    #[test]
    fn test_system_clock_moves() {
        let before = now_instant();
        assert!(now_instant() >= before);
    }
}
