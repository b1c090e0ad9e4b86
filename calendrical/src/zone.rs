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

//! Time zones and the resolution of local wall-clock times.
//!
//! Zone data itself comes from the IANA database compiled into `chrono-tz`;
//! this module only decides which instant a local date-time denotes.

use crate::{Result, TimeError};
use chrono::{
    DateTime, FixedOffset, LocalResult, NaiveDateTime, Offset, TimeDelta,
    TimeZone, Utc,
};
use chrono_tz::{Tz, TZ_VARIANTS};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing::{trace, warn};

const MAX_OFFSET_HOURS: i32 = 18;
const SECONDS_PER_HOUR: i32 = 3_600;

/// How a local date-time that a zone transition skips or repeats is mapped
/// onto the time line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Disambiguation {
    /// The earlier instant for a repeated time; a skipped time is moved
    /// forward by the length of the gap.
    #[default]
    Compatible,
    /// The earlier of the candidate instants.
    Earlier,
    /// The later of the candidate instants.
    Later,
    /// Fail with [`TimeError::AmbiguousLocalTime`] or
    /// [`TimeError::NonexistentLocalTime`].
    Reject,
}

/// A fixed UTC offset or a named region from the IANA database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Fixed(FixedOffset),
    Named(Tz),
}

impl Default for Zone {
    fn default() -> Self {
        Zone::utc()
    }
}

impl Zone {
    pub fn utc() -> Self {
        Zone::Fixed(Utc.fix())
    }

    /// Looks up an IANA identifier (`Europe/Warsaw`), `UTC`/`Z`, or an ISO
    /// offset (`+02:00`).
    pub fn for_id(id: &str) -> Result<Self> {
        let id = id.trim();
        if id == "Z" || id.eq_ignore_ascii_case("utc") {
            return Ok(Zone::utc());
        }
        if let Ok(tz) = Tz::from_str(id) {
            return Ok(Zone::Named(tz));
        }
        FixedOffset::from_str(id)
            .map(Zone::Fixed)
            .map_err(|_| TimeError::UnknownZone(id.to_string()))
    }

    /// A fixed zone `hours` and `minutes` east of UTC. Both parts must carry
    /// the same sign and the total may not exceed 18 hours.
    pub fn for_offset(hours: i32, minutes: i32) -> Result<Self> {
        let invalid = || TimeError::InvalidOffset { hours, minutes };
        if hours.abs() > MAX_OFFSET_HOURS
            || minutes.abs() > 59
            || (hours > 0 && minutes < 0)
            || (hours < 0 && minutes > 0)
        {
            return Err(invalid());
        }
        let seconds = hours * SECONDS_PER_HOUR + minutes * 60;
        if seconds.abs() > MAX_OFFSET_HOURS * SECONDS_PER_HOUR {
            return Err(invalid());
        }
        FixedOffset::east_opt(seconds).map(Zone::Fixed).ok_or_else(invalid)
    }

    /// The zone the operating system is configured with, or UTC when it
    /// cannot be determined.
    pub fn system_default() -> Self {
        match iana_time_zone::get_timezone() {
            Ok(id) => Zone::for_id(&id).unwrap_or_else(|e| {
                warn!("system time zone '{id}' is not usable: {e}");
                Zone::utc()
            }),
            Err(e) => {
                warn!("failed to read system time zone: {e}");
                Zone::utc()
            }
        }
    }

    pub fn id(&self) -> String {
        match self {
            Zone::Fixed(offset) if offset.local_minus_utc() == 0 => {
                "Z".to_string()
            }
            Zone::Fixed(offset) => offset.to_string(),
            Zone::Named(tz) => tz.name().to_string(),
        }
    }

    /// The offset in effect at `instant`.
    pub fn resolve_offset(&self, instant: &DateTime<Utc>) -> FixedOffset {
        let utc = instant.naive_utc();
        match self {
            Zone::Fixed(offset) => *offset,
            Zone::Named(tz) => tz.offset_from_utc_datetime(&utc).fix(),
        }
    }

    /// Renders `instant` in this zone.
    pub(crate) fn at(&self, instant: &DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.resolve_offset(instant))
    }

    fn possible_offsets(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
        match self {
            Zone::Fixed(offset) => LocalResult::Single(*offset),
            Zone::Named(tz) => {
                tz.offset_from_local_datetime(local).map(|o| o.fix())
            }
        }
    }

    /// Maps a local date-time onto the time line, rendered in this zone.
    pub fn resolve_local(
        &self,
        local: &NaiveDateTime,
        disambiguation: Disambiguation,
    ) -> Result<DateTime<FixedOffset>> {
        let instant = match self.possible_offsets(local) {
            LocalResult::Single(offset) => to_instant(local, offset)?,
            LocalResult::Ambiguous(a, b) => {
                let (a, b) = (to_instant(local, a)?, to_instant(local, b)?);
                let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
                trace!(%local, zone = %self, ?disambiguation, "repeated local time");
                match disambiguation {
                    Disambiguation::Compatible | Disambiguation::Earlier => earlier,
                    Disambiguation::Later => later,
                    Disambiguation::Reject => {
                        return Err(TimeError::AmbiguousLocalTime {
                            local: *local,
                            zone: self.id(),
                        })
                    }
                }
            }
            LocalResult::None => {
                trace!(%local, zone = %self, ?disambiguation, "skipped local time");
                let (before, after) = self.offsets_around(local)?;
                match disambiguation {
                    // Read with the offset from before the gap, which lands
                    // the same distance past the transition.
                    Disambiguation::Compatible | Disambiguation::Later => {
                        to_instant(local, before)?
                    }
                    Disambiguation::Earlier => to_instant(local, after)?,
                    Disambiguation::Reject => {
                        return Err(TimeError::NonexistentLocalTime {
                            local: *local,
                            zone: self.id(),
                        })
                    }
                }
            }
        };
        Ok(self.at(&instant))
    }

    /// Offsets in effect three hours of wall-clock time either side of
    /// `local`. Transitions are never closer together than that.
    fn offsets_around(
        &self,
        local: &NaiveDateTime,
    ) -> Result<(FixedOffset, FixedOffset)> {
        let probe = TimeDelta::hours(3);
        let before = local.checked_sub_signed(probe).ok_or(TimeError::OutOfRange)?;
        let after = local.checked_add_signed(probe).ok_or(TimeError::OutOfRange)?;
        let before = self.possible_offsets(&before).latest();
        let after = self.possible_offsets(&after).earliest();
        before.zip(after).ok_or(TimeError::OutOfRange)
    }
}

fn to_instant(local: &NaiveDateTime, offset: FixedOffset) -> Result<DateTime<Utc>> {
    local
        .checked_sub_signed(TimeDelta::seconds(offset.local_minus_utc().into()))
        .map(|utc| utc.and_utc())
        .ok_or(TimeError::OutOfRange)
}

impl Display for Zone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id())
    }
}

impl FromStr for Zone {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self> {
        Zone::for_id(s)
    }
}

impl From<Tz> for Zone {
    fn from(tz: Tz) -> Self {
        Zone::Named(tz)
    }
}

impl From<FixedOffset> for Zone {
    fn from(offset: FixedOffset) -> Self {
        Zone::Fixed(offset)
    }
}

/// Every IANA identifier the zone database knows about.
pub fn available_zone_ids() -> BTreeSet<String> {
    TZ_VARIANTS.iter().map(|tz| tz.name().to_string()).collect()
}
