//! Addressing of RFT/PLT well-test series.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Timelike, Utc};

use crate::error::DrawdownError;

/// A scalar channel extractable from one well-test record.
///
/// Depth and pressure are present on every record; the saturation channels
/// only on RFT-class records and the phase-rate channels only on PLT-class
/// records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WellLogChannel {
    /// True vertical depth of each sample.
    Depth,
    /// Formation pressure.
    Pressure,
    /// Water saturation.
    Swat,
    /// Oil saturation.
    Soil,
    /// Gas saturation.
    Sgas,
    /// Water rate.
    Wrat,
    /// Oil rate.
    Orat,
    /// Gas rate.
    Grat,
}

impl WellLogChannel {
    /// The channel mnemonic, as used in result files and plot labels.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::Depth => "DEPTH",
            Self::Pressure => "PRESSURE",
            Self::Swat => "SWAT",
            Self::Soil => "SOIL",
            Self::Sgas => "SGAS",
            Self::Wrat => "WRAT",
            Self::Orat => "ORAT",
            Self::Grat => "GRAT",
        }
    }
}

impl fmt::Display for WellLogChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for WellLogChannel {
    type Err = DrawdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEPTH" => Ok(Self::Depth),
            "PRESSURE" => Ok(Self::Pressure),
            "SWAT" => Ok(Self::Swat),
            "SOIL" => Ok(Self::Soil),
            "SGAS" => Ok(Self::Sgas),
            "WRAT" => Ok(Self::Wrat),
            "ORAT" => Ok(Self::Orat),
            "GRAT" => Ok(Self::Grat),
            other => Err(DrawdownError::unknown_channel(other)),
        }
    }
}

/// Address of one scalar series in a well-test results container.
///
/// The (well, time step, channel) triple is an exact-match key into the
/// reader's catalog. Time steps are UTC with second precision; the
/// constructors truncate anything finer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RftAddress {
    well_name: String,
    time_step: DateTime<Utc>,
    channel: WellLogChannel,
}

impl RftAddress {
    /// Create an address for one (well, time step, channel) series.
    pub fn new(
        well_name: impl Into<String>,
        time_step: DateTime<Utc>,
        channel: WellLogChannel,
    ) -> Self {
        Self {
            well_name: well_name.into(),
            time_step: time_step.with_nanosecond(0).unwrap_or(time_step),
            channel,
        }
    }

    /// Create an address with the time step given as epoch seconds (UTC).
    pub fn from_epoch_seconds(
        well_name: impl Into<String>,
        epoch_seconds: i64,
        channel: WellLogChannel,
    ) -> Self {
        Self {
            well_name: well_name.into(),
            time_step: DateTime::from_timestamp(epoch_seconds, 0).unwrap_or_default(),
            channel,
        }
    }

    /// The well the series belongs to.
    pub fn well_name(&self) -> &str {
        &self.well_name
    }

    /// The survey time step, UTC, second precision.
    pub fn time_step(&self) -> DateTime<Utc> {
        self.time_step
    }

    /// The addressed channel.
    pub fn channel(&self) -> WellLogChannel {
        self.channel
    }
}
