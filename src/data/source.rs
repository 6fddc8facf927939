//! Results-container access.
//!
//! The byte-level container format is outside this crate; results are
//! reached through the raw-node abstraction below. [`RecordedRftSource`] is
//! the built-in source for hosts that decode the container themselves.

use std::path::Path;

use crate::error::{DrawdownError, Result};

/// One time-stamped well-test record in a results container.
///
/// A record always carries depth and pressure samples. RFT-class records
/// additionally carry saturation profiles, PLT-class records phase-rate
/// profiles; the two classes are mutually exclusive.
pub trait RftNode {
    /// Name of the surveyed well.
    fn well_name(&self) -> &str;

    /// Survey date as epoch seconds (UTC).
    fn date(&self) -> i64;

    /// True when the record carries saturation profiles.
    fn is_rft(&self) -> bool;

    /// True when the record carries phase-rate profiles.
    fn is_plt(&self) -> bool;

    /// Number of samples along the depth profile.
    fn sample_count(&self) -> usize;

    /// Depth of sample `index`.
    fn depth(&self, index: usize) -> f64;

    /// Pressure of sample `index`.
    fn pressure(&self, index: usize) -> f64;

    /// Water saturation of sample `index` (RFT-class records).
    fn swat(&self, index: usize) -> f64;

    /// Oil saturation of sample `index` (RFT-class records).
    fn soil(&self, index: usize) -> f64;

    /// Gas saturation of sample `index` (RFT-class records).
    fn sgas(&self, index: usize) -> f64;

    /// Water rate of sample `index` (PLT-class records).
    fn wrat(&self, index: usize) -> f64;

    /// Oil rate of sample `index` (PLT-class records).
    fn orat(&self, index: usize) -> f64;

    /// Gas rate of sample `index` (PLT-class records).
    fn grat(&self, index: usize) -> f64;
}

/// A results container holding a sequence of well-test records.
pub trait RftSource {
    /// Open the container at `path`.
    fn open(path: &Path) -> Result<Self>
    where
        Self: Sized;

    /// Number of records in the container.
    fn node_count(&self) -> usize;

    /// The record at `index`, in file order.
    fn node(&self, index: usize) -> &dyn RftNode;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SurveyKind {
    PressureOnly,
    Rft,
    Plt,
}

/// An already-decoded well-test record.
#[derive(Debug, Clone)]
pub struct RftRecord {
    well_name: String,
    date: i64,
    kind: SurveyKind,
    depth: Vec<f64>,
    pressure: Vec<f64>,
    swat: Vec<f64>,
    soil: Vec<f64>,
    sgas: Vec<f64>,
    wrat: Vec<f64>,
    orat: Vec<f64>,
    grat: Vec<f64>,
}

impl RftRecord {
    /// A pressure survey: depth and pressure only.
    pub fn pressure_survey(
        well_name: impl Into<String>,
        date: i64,
        depth: Vec<f64>,
        pressure: Vec<f64>,
    ) -> Self {
        Self {
            well_name: well_name.into(),
            date,
            kind: SurveyKind::PressureOnly,
            depth,
            pressure,
            swat: Vec::new(),
            soil: Vec::new(),
            sgas: Vec::new(),
            wrat: Vec::new(),
            orat: Vec::new(),
            grat: Vec::new(),
        }
    }

    /// An RFT survey: saturation profiles on top of depth and pressure.
    pub fn rft_survey(
        well_name: impl Into<String>,
        date: i64,
        depth: Vec<f64>,
        pressure: Vec<f64>,
        swat: Vec<f64>,
        soil: Vec<f64>,
        sgas: Vec<f64>,
    ) -> Self {
        Self {
            kind: SurveyKind::Rft,
            swat,
            soil,
            sgas,
            ..Self::pressure_survey(well_name, date, depth, pressure)
        }
    }

    /// A PLT survey: phase-rate profiles on top of depth and pressure.
    pub fn plt_survey(
        well_name: impl Into<String>,
        date: i64,
        depth: Vec<f64>,
        pressure: Vec<f64>,
        wrat: Vec<f64>,
        orat: Vec<f64>,
        grat: Vec<f64>,
    ) -> Self {
        Self {
            kind: SurveyKind::Plt,
            wrat,
            orat,
            grat,
            ..Self::pressure_survey(well_name, date, depth, pressure)
        }
    }
}

// Channels a record does not carry read as NaN.
fn sample(samples: &[f64], index: usize) -> f64 {
    samples.get(index).copied().unwrap_or(f64::NAN)
}

impl RftNode for RftRecord {
    fn well_name(&self) -> &str {
        &self.well_name
    }

    fn date(&self) -> i64 {
        self.date
    }

    fn is_rft(&self) -> bool {
        self.kind == SurveyKind::Rft
    }

    fn is_plt(&self) -> bool {
        self.kind == SurveyKind::Plt
    }

    fn sample_count(&self) -> usize {
        self.depth.len()
    }

    fn depth(&self, index: usize) -> f64 {
        sample(&self.depth, index)
    }

    fn pressure(&self, index: usize) -> f64 {
        sample(&self.pressure, index)
    }

    fn swat(&self, index: usize) -> f64 {
        sample(&self.swat, index)
    }

    fn soil(&self, index: usize) -> f64 {
        sample(&self.soil, index)
    }

    fn sgas(&self, index: usize) -> f64 {
        sample(&self.sgas, index)
    }

    fn wrat(&self, index: usize) -> f64 {
        sample(&self.wrat, index)
    }

    fn orat(&self, index: usize) -> f64 {
        sample(&self.orat, index)
    }

    fn grat(&self, index: usize) -> f64 {
        sample(&self.grat, index)
    }
}

/// An in-memory results container of already-decoded records.
///
/// Hosts that decode the proprietary container themselves hand their records
/// over here; the reader then treats them exactly like file-backed nodes.
#[derive(Debug, Clone, Default)]
pub struct RecordedRftSource {
    records: Vec<RftRecord>,
}

impl RecordedRftSource {
    /// Create a source over the given records; iteration order is kept.
    pub fn new(records: Vec<RftRecord>) -> Self {
        Self { records }
    }

    /// Append one record.
    pub fn push(&mut self, record: RftRecord) {
        self.records.push(record);
    }
}

impl RftSource for RecordedRftSource {
    fn open(path: &Path) -> Result<Self> {
        Err(DrawdownError::container_open(
            path.to_path_buf(),
            std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "recorded sources hold no backing file",
            ),
        ))
    }

    fn node_count(&self) -> usize {
        self.records.len()
    }

    fn node(&self, index: usize) -> &dyn RftNode {
        &self.records[index]
    }
}
