//! Reader lifecycle tests: the one-shot open transition and its failure
//! mode, exercised through file-backed test sources.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use drawdown::address::{RftAddress, WellLogChannel};
use drawdown::data::{RftNode, RftReader, RftRecord, RftSource};
use drawdown::error::DrawdownError;

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Stands in for a container decoder: any readable file yields one canned
/// pressure survey. Counts open attempts.
#[derive(Debug)]
struct CannedSource {
    records: Vec<RftRecord>,
}

static CANNED_OPENS: AtomicUsize = AtomicUsize::new(0);

impl RftSource for CannedSource {
    fn open(path: &Path) -> drawdown::Result<Self> {
        CANNED_OPENS.fetch_add(1, Ordering::SeqCst);
        std::fs::metadata(path)
            .map_err(|source| DrawdownError::container_open(path.to_path_buf(), source))?;
        Ok(Self {
            records: vec![RftRecord::pressure_survey(
                "A-1H",
                1_462_060_800,
                vec![2600.0, 2604.2],
                vec![298.5, 299.1],
            )],
        })
    }

    fn node_count(&self) -> usize {
        self.records.len()
    }

    fn node(&self, index: usize) -> &dyn RftNode {
        &self.records[index]
    }
}

/// Fails every open. Counts attempts so retry behavior is observable.
#[derive(Debug)]
struct FailingSource;

static FAILING_OPENS: AtomicUsize = AtomicUsize::new(0);

impl RftSource for FailingSource {
    fn open(path: &Path) -> drawdown::Result<Self> {
        FAILING_OPENS.fetch_add(1, Ordering::SeqCst);
        std::fs::metadata(path)
            .map_err(|source| DrawdownError::container_open(path.to_path_buf(), source))?;
        Ok(Self)
    }

    fn node_count(&self) -> usize {
        0
    }

    fn node(&self, _index: usize) -> &dyn RftNode {
        unreachable!("failing source holds no records")
    }
}

/// Panics if the reader ever attempts an open.
#[derive(Debug)]
struct UntouchableSource;

impl RftSource for UntouchableSource {
    fn open(_path: &Path) -> drawdown::Result<Self> {
        panic!("the container must not be touched");
    }

    fn node_count(&self) -> usize {
        0
    }

    fn node(&self, _index: usize) -> &dyn RftNode {
        unreachable!()
    }
}

#[test]
fn open_happens_exactly_once_across_queries() {
    init_tracing();
    let file = tempfile::NamedTempFile::new().expect("temp file");

    let mut reader: RftReader<CannedSource> = RftReader::new(file.path());
    let addresses = reader.addresses().to_vec();
    assert_eq!(addresses.len(), 2);

    let wells = reader.well_names();
    assert!(wells.contains("A-1H"));
    let time_steps = reader.available_time_steps("A-1H", WellLogChannel::Pressure);
    assert_eq!(time_steps.len(), 1);
    let values = reader.values(&addresses[0]);
    assert_eq!(values, vec![298.5, 299.1]);

    // Interleaved and repeated queries reuse the one catalog.
    assert_eq!(reader.addresses(), addresses.as_slice());
    assert_eq!(CANNED_OPENS.load(Ordering::SeqCst), 1);
}

#[test]
fn missing_container_degrades_to_empty_results() {
    init_tracing();
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("NORNE.RFT");

    let mut reader: RftReader<FailingSource> = RftReader::new(&missing);
    assert!(reader.addresses().is_empty());
    assert!(reader.well_names().is_empty());
    assert!(reader
        .available_time_steps("A-1H", WellLogChannel::Pressure)
        .is_empty());
    assert!(reader.available_well_log_channels("A-1H").is_empty());

    let address = RftAddress::from_epoch_seconds("A-1H", 1_462_060_800, WellLogChannel::Pressure);
    assert!(reader.values(&address).is_empty());

    // A failed open is terminal, not retried per query.
    assert_eq!(FAILING_OPENS.load(Ordering::SeqCst), 1);
}

#[test]
fn empty_well_name_does_not_touch_the_container() {
    init_tracing();
    let mut reader: RftReader<UntouchableSource> = RftReader::new("SNORRE.RFT");

    assert!(reader
        .available_time_steps("", WellLogChannel::Pressure)
        .is_empty());
    assert!(reader.available_well_log_channels("").is_empty());
}
