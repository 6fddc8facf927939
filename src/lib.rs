//! Drawdown - a reservoir well-test (RFT/PLT) results reader.
//!
//! Drawdown surfaces well-test and production-logging time series (pressure,
//! depth, saturations, phase rates) from a reservoir-simulation results
//! container to a visualization application, addressed by compact textual
//! keys in the Eclipse summary vector style.
//!
//! # Features
//!
//! - Total, never-failing classification of summary address tokens
//! - Indexed RFT/PLT reader with a one-shot lazy open
//! - Per-well time step and channel enumeration for plot population
//! - In-memory record source for host-decoded containers
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use drawdown::address::{RftAddress, WellLogChannel};
//! use drawdown::data::{RecordedRftSource, RftReader, RftRecord};
//!
//! let record = RftRecord::rft_survey(
//!     "B-2H",
//!     Utc.with_ymd_and_hms(2016, 5, 1, 0, 0, 0).unwrap().timestamp(),
//!     vec![2612.0, 2618.5],
//!     vec![301.2, 302.9],
//!     vec![0.25, 0.30],
//!     vec![0.45, 0.40],
//!     vec![0.30, 0.30],
//! );
//! let mut reader = RftReader::from_source(RecordedRftSource::new(vec![record]));
//!
//! let time_steps = reader.available_time_steps("B-2H", WellLogChannel::Pressure);
//! let address = RftAddress::new("B-2H", time_steps[0], WellLogChannel::Pressure);
//! assert_eq!(reader.values(&address), vec![301.2, 302.9]);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod address;
pub mod data;
pub mod error;

pub use address::{RftAddress, SummaryAddress, SummaryCategory, WellLogChannel};
pub use data::{Catalog, RecordedRftSource, RftNode, RftReader, RftRecord, RftSource};
pub use error::{DrawdownError, Result};
