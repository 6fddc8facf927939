//! The address catalog built over a results container.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};

use super::source::{RftNode, RftSource};
use crate::address::{RftAddress, WellLogChannel};

/// Derived index over a results container: every address each record can
/// answer, mapped to the record that answers it.
///
/// Built by a single forward scan in file order, read-only afterwards. The
/// address sequence keeps generation order. When two records produce the
/// identical (well, time step, channel) triple, the later record wins the
/// mapping and both sequence entries are kept.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    addresses: Vec<RftAddress>,
    address_to_node: HashMap<RftAddress, usize>,
    well_names: BTreeSet<String>,
}

impl Catalog {
    /// Build the catalog for `source` by scanning its records in file order.
    pub fn build<S: RftSource>(source: &S) -> Self {
        let mut catalog = Self::default();

        for index in 0..source.node_count() {
            let node = source.node(index);
            let well_name = node.well_name().to_string();
            let time_step = DateTime::from_timestamp(node.date(), 0).unwrap_or_default();

            catalog.well_names.insert(well_name.clone());

            catalog.register(&well_name, time_step, WellLogChannel::Pressure, index);
            catalog.register(&well_name, time_step, WellLogChannel::Depth, index);

            if node.is_rft() {
                catalog.register(&well_name, time_step, WellLogChannel::Swat, index);
                catalog.register(&well_name, time_step, WellLogChannel::Soil, index);
                catalog.register(&well_name, time_step, WellLogChannel::Sgas, index);
            } else if node.is_plt() {
                catalog.register(&well_name, time_step, WellLogChannel::Wrat, index);
                catalog.register(&well_name, time_step, WellLogChannel::Orat, index);
                catalog.register(&well_name, time_step, WellLogChannel::Grat, index);
            }
        }

        tracing::debug!(
            "Catalog built: {} addresses, {} wells",
            catalog.addresses.len(),
            catalog.well_names.len()
        );

        catalog
    }

    fn register(
        &mut self,
        well_name: &str,
        time_step: DateTime<Utc>,
        channel: WellLogChannel,
        node_index: usize,
    ) {
        let address = RftAddress::new(well_name, time_step, channel);
        if let Some(previous) = self.address_to_node.insert(address.clone(), node_index) {
            tracing::warn!(
                "Duplicate series {}/{}/{}: record {} replaces record {}",
                well_name,
                time_step,
                channel,
                node_index,
                previous
            );
        }
        self.addresses.push(address);
    }

    /// All addresses, in generation order.
    pub fn addresses(&self) -> &[RftAddress] {
        &self.addresses
    }

    /// The index of the record that answers `address`.
    pub fn node_index(&self, address: &RftAddress) -> Option<usize> {
        self.address_to_node.get(address).copied()
    }

    /// Names of all surveyed wells, deduplicated and sorted.
    pub fn well_names(&self) -> &BTreeSet<String> {
        &self.well_names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{RecordedRftSource, RftRecord};
    use chrono::TimeZone;

    fn survey_date(day: u32) -> i64 {
        Utc.with_ymd_and_hms(2016, 5, day, 0, 0, 0).unwrap().timestamp()
    }

    fn mixed_source() -> RecordedRftSource {
        RecordedRftSource::new(vec![
            RftRecord::pressure_survey("A-1H", survey_date(1), vec![2600.0], vec![298.5]),
            RftRecord::rft_survey(
                "B-2H",
                survey_date(2),
                vec![2612.0, 2618.5],
                vec![301.2, 302.9],
                vec![0.25, 0.30],
                vec![0.45, 0.40],
                vec![0.30, 0.30],
            ),
            RftRecord::plt_survey(
                "B-2H",
                survey_date(9),
                vec![2612.0, 2618.5],
                vec![299.8, 301.1],
                vec![120.0, 95.5],
                vec![840.0, 790.0],
                vec![15_000.0, 14_200.0],
            ),
        ])
    }

    #[test]
    fn fans_each_record_out_into_its_channels() {
        let catalog = Catalog::build(&mixed_source());

        // 3 records, one RFT-class and one PLT-class: 2*3 + 3 + 3 addresses.
        assert_eq!(catalog.addresses().len(), 12);

        let channels_at = |day: u32| {
            catalog
                .addresses()
                .iter()
                .filter(|a| a.time_step().timestamp() == survey_date(day))
                .map(|a| a.channel())
                .collect::<Vec<_>>()
        };
        assert_eq!(
            channels_at(1),
            vec![WellLogChannel::Pressure, WellLogChannel::Depth]
        );
        assert_eq!(
            channels_at(2),
            vec![
                WellLogChannel::Pressure,
                WellLogChannel::Depth,
                WellLogChannel::Swat,
                WellLogChannel::Soil,
                WellLogChannel::Sgas,
            ]
        );
        assert_eq!(
            channels_at(9),
            vec![
                WellLogChannel::Pressure,
                WellLogChannel::Depth,
                WellLogChannel::Wrat,
                WellLogChannel::Orat,
                WellLogChannel::Grat,
            ]
        );
    }

    #[test]
    fn maps_every_address_to_its_record() {
        let catalog = Catalog::build(&mixed_source());

        let pressure_a = RftAddress::from_epoch_seconds("A-1H", survey_date(1), WellLogChannel::Pressure);
        let swat_b = RftAddress::from_epoch_seconds("B-2H", survey_date(2), WellLogChannel::Swat);
        let grat_b = RftAddress::from_epoch_seconds("B-2H", survey_date(9), WellLogChannel::Grat);
        assert_eq!(catalog.node_index(&pressure_a), Some(0));
        assert_eq!(catalog.node_index(&swat_b), Some(1));
        assert_eq!(catalog.node_index(&grat_b), Some(2));

        // Saturations were never registered for the PLT-class record.
        let swat_at_plt = RftAddress::from_epoch_seconds("B-2H", survey_date(9), WellLogChannel::Swat);
        assert_eq!(catalog.node_index(&swat_at_plt), None);
    }

    #[test]
    fn well_names_deduplicate_and_sort() {
        let catalog = Catalog::build(&mixed_source());
        let names: Vec<_> = catalog.well_names().iter().cloned().collect();
        assert_eq!(names, vec!["A-1H".to_string(), "B-2H".to_string()]);
    }

    #[test]
    fn later_record_wins_on_identical_triple() {
        let source = RecordedRftSource::new(vec![
            RftRecord::pressure_survey("A-1H", survey_date(1), vec![2600.0], vec![298.5]),
            RftRecord::pressure_survey("A-1H", survey_date(1), vec![2600.0], vec![305.0]),
        ]);
        let catalog = Catalog::build(&source);

        // Both generations stay in the sequence; the map resolves to the
        // later record.
        assert_eq!(catalog.addresses().len(), 4);
        let pressure = RftAddress::from_epoch_seconds("A-1H", survey_date(1), WellLogChannel::Pressure);
        assert_eq!(catalog.node_index(&pressure), Some(1));
    }
}
