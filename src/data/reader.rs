//! The RFT/PLT results reader.

use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use super::catalog::Catalog;
use super::source::{RftNode, RftSource};
use crate::address::{RftAddress, WellLogChannel};

/// Lifecycle of the backing container handle.
///
/// `Unopened` transitions exactly once, on the first query, to `Open` or
/// `Unavailable`. `Unavailable` is terminal; the open is never retried.
#[derive(Debug)]
enum SourceState<S> {
    Unopened,
    Open(S),
    Unavailable,
}

/// Indexed reader over an RFT/PLT results container.
///
/// The container is opened and indexed on the first query; every query is
/// answered from the in-memory [`Catalog`] thereafter. Failure never
/// crosses the query boundary: a missing or unreadable container simply
/// yields empty results.
///
/// Queries take `&mut self` because the first one fires the open
/// transition, so concurrent sharing needs external serialization. The
/// catalog itself is never mutated once built.
#[derive(Debug)]
pub struct RftReader<S> {
    file_name: PathBuf,
    state: SourceState<S>,
    catalog: Catalog,
}

impl<S: RftSource> RftReader<S> {
    /// Create a reader for the container at `path`. The container is not
    /// touched until the first query.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file_name: path.into(),
            state: SourceState::Unopened,
            catalog: Catalog::default(),
        }
    }

    /// Wrap an already-live container; the catalog is built immediately.
    pub fn from_source(source: S) -> Self {
        Self {
            file_name: PathBuf::new(),
            catalog: Catalog::build(&source),
            state: SourceState::Open(source),
        }
    }

    fn ensure_open(&mut self) {
        if !matches!(self.state, SourceState::Unopened) {
            return;
        }

        match S::open(&self.file_name) {
            Ok(source) => {
                tracing::info!("Results container opened: {}", self.file_name.display());
                self.catalog = Catalog::build(&source);
                self.state = SourceState::Open(source);
            }
            Err(error) => {
                tracing::warn!(
                    "Results container unavailable: {}: {}",
                    self.file_name.display(),
                    error
                );
                self.state = SourceState::Unavailable;
            }
        }
    }

    /// Every series address the container can answer, in catalog order.
    pub fn addresses(&mut self) -> &[RftAddress] {
        self.ensure_open();
        self.catalog.addresses()
    }

    /// Names of all surveyed wells, deduplicated and sorted.
    ///
    /// The returned set is an independent copy and stays valid after the
    /// reader is dropped.
    pub fn well_names(&mut self) -> BTreeSet<String> {
        self.ensure_open();
        self.catalog.well_names().clone()
    }

    /// Survey time steps for `well_name` on `channel`, in catalog order.
    ///
    /// An empty well name yields an empty result without touching the
    /// container.
    pub fn available_time_steps(
        &mut self,
        well_name: &str,
        channel: WellLogChannel,
    ) -> Vec<DateTime<Utc>> {
        if well_name.is_empty() {
            return Vec::new();
        }
        self.ensure_open();

        self.catalog
            .addresses()
            .iter()
            .filter(|address| address.well_name() == well_name && address.channel() == channel)
            .map(|address| address.time_step())
            .collect()
    }

    /// Selectable channels for `well_name`, one entry per surveyed
    /// (time step, channel) pair, in catalog order.
    ///
    /// Depth is the companion axis of every other channel and is never
    /// returned. An empty well name yields an empty result without touching
    /// the container.
    pub fn available_well_log_channels(&mut self, well_name: &str) -> Vec<WellLogChannel> {
        if well_name.is_empty() {
            return Vec::new();
        }
        self.ensure_open();

        self.catalog
            .addresses()
            .iter()
            .filter(|address| address.well_name() == well_name)
            .map(|address| address.channel())
            .filter(|channel| *channel != WellLogChannel::Depth)
            .collect()
    }

    /// The sample series for `address`, or empty when the catalog holds no
    /// such series.
    pub fn values(&mut self, address: &RftAddress) -> Vec<f64> {
        self.ensure_open();

        let source = match &self.state {
            SourceState::Open(source) => source,
            _ => return Vec::new(),
        };
        let node_index = match self.catalog.node_index(address) {
            Some(index) => index,
            None => return Vec::new(),
        };

        channel_values(source.node(node_index), address.channel())
    }
}

/// Extract one channel's sample series from a record.
fn channel_values(node: &dyn RftNode, channel: WellLogChannel) -> Vec<f64> {
    let mut values = Vec::with_capacity(node.sample_count());
    for index in 0..node.sample_count() {
        values.push(match channel {
            WellLogChannel::Depth => node.depth(index),
            WellLogChannel::Pressure => node.pressure(index),
            WellLogChannel::Swat => node.swat(index),
            WellLogChannel::Soil => node.soil(index),
            WellLogChannel::Sgas => node.sgas(index),
            WellLogChannel::Wrat => node.wrat(index),
            WellLogChannel::Orat => node.orat(index),
            WellLogChannel::Grat => node.grat(index),
        });
    }
    values
}
