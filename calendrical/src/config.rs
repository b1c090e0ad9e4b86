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

//! Process-wide defaults loaded from TOML.
//!
//! [`CalendarConfig::try_default()`] searches, in order:
//!
//! 1. $CALENDRICAL_CONFIG
//! 2. ${HOME}/.calendrical/config
//! 3. /etc/calendrical/config
//!
//! ```toml
//! [zone]
//! default = "Europe/Warsaw"
//!
//! [clock]
//! fixed = "2014-01-26T10:00:00Z"
//! ```

use crate::{format, Clock, Zone, ZonedDateTime};
use anyhow::{anyhow, Context, Result};
use serde::de::{Error, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt::Formatter;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use tracing::{debug, warn};

const CONFIG_ENV: &str = "CALENDRICAL_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    pub zone: ZoneConfig,
    #[serde(default)]
    pub clock: ClockConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZoneConfig {
    /// Zone used by the system clock. The operating system zone when unset.
    pub default: Option<Zone>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClockConfig {
    /// Pins "now" to an RFC 3339 instant.
    pub fixed: Option<ZonedDateTime>,
}

impl CalendarConfig {
    /// Attempt to load configuration from well-known locations.
    pub fn try_default() -> Result<Self> {
        let mut search_paths = Vec::new();
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            search_paths.push(path);
        }
        if let Ok(home) = std::env::var("HOME") {
            search_paths.push(format!("{home}/.calendrical/config"));
        }
        search_paths.push("/etc/calendrical/config".to_string());

        for path in &search_paths {
            match Self::parse_from_toml_file(path) {
                Ok(config) => {
                    debug!(path = %path, "loaded calendar config");
                    return Ok(config);
                }
                Err(e) => {
                    warn!("failed to parse config at {path}: {e:#}");
                    continue;
                }
            }
        }

        Err(anyhow!("unable to find valid config file"))
    }

    /// Attempt to parse a config file into memory.
    pub fn parse_from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config_toml = String::new();
        let mut file = File::open(path)
            .with_context(|| format!("could not open {}", path.display()))?;

        if file
            .read_to_string(&mut config_toml)
            .with_context(|| "could not read CalendarConfig toml")?
            == 0
        {
            return Err(anyhow!("empty config"));
        }

        Self::parse_from_toml(&config_toml)
    }

    pub fn parse_from_toml(config_toml: &str) -> Result<Self> {
        let config: Self = toml::from_str(config_toml)?;
        debug!(?config, "parsed calendar config");
        Ok(config)
    }

    pub fn default_zone(&self) -> Zone {
        self.zone.default.unwrap_or_else(Zone::system_default)
    }

    /// The clock this configuration describes, rendering in
    /// [`CalendarConfig::default_zone`].
    pub fn clock(&self) -> Clock {
        let zone = self.default_zone();
        match self.clock.fixed {
            Some(at) => Clock::Fixed { instant: at.instant(), zone },
            None => Clock::System { zone },
        }
    }
}

impl<'de> Deserialize<'de> for Zone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(ZoneVisitor)
    }
}

struct ZoneVisitor;

impl<'de> Visitor<'de> for ZoneVisitor {
    type Value = Zone;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str("an IANA zone id or a UTC offset")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Zone::for_id(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for ZonedDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(Rfc3339Visitor)
    }
}

struct Rfc3339Visitor;

impl<'de> Visitor<'de> for Rfc3339Visitor {
    type Value = ZonedDateTime;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str("an RFC 3339 timestamp")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        format::parse_rfc3339(v).map_err(E::custom)
    }
}
