//! Eclipse summary vector addresses.
//!
//! A summary address is a compact text token: the quantity name, optionally
//! followed by `:`-separated qualifiers (`"FOPT"`, `"WOPR:B-2H"`,
//! `"LCGAS:LGR1:B-1H:11,12,13"`). The token carries no explicit type tag;
//! the category is recovered from the qualifier count and shape together
//! with the quantity name's leading letters.

use std::fmt;

/// The literal suffix marking a quantity imported from an external curve.
const IMPORTED_SUFFIX: &str = " (Imp)";

/// Prefixes marking an error (uncertainty) result.
const ERROR_PREFIXES: [&str; 3] = ["ERROR:", "ERR:", "ER:"];

/// Category of a summary address.
///
/// One variant per category, each carrying only the fields that category
/// requires, so an invalid field/category combination cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SummaryCategory {
    /// Field-level quantity (`"FOPT"`).
    Field,
    /// Aquifer quantity (`"AAQU:456"`).
    Aquifer {
        /// Aquifer number.
        aquifer_number: i32,
    },
    /// Network quantity (the literal quantity name `"NETW"`).
    Network,
    /// Quantity with no owner; fallback for bare names.
    Misc,
    /// Region quantity (`"REGI:7081"`).
    Region {
        /// Region number.
        region_number: i32,
    },
    /// Inter-region flow quantity (`"REFR:7081-8001"`).
    RegionToRegion {
        /// Source region number.
        region_number: i32,
        /// Destination region number.
        region_number2: i32,
    },
    /// Well group quantity (`"GGRP:WELLS1"`).
    WellGroup {
        /// Group name.
        well_group_name: String,
    },
    /// Well quantity (`"WOPR:B-2H"`).
    Well {
        /// Well name.
        well_name: String,
    },
    /// Well completion quantity (`"CDATA:B-1H:15,13,14"`).
    WellCompletion {
        /// Well name.
        well_name: String,
        /// Completion cell I index.
        cell_i: i32,
        /// Completion cell J index.
        cell_j: i32,
        /// Completion cell K index.
        cell_k: i32,
    },
    /// Well quantity in a local grid refinement (`"LWABC:LGRNA:B-10H"`).
    WellLgr {
        /// LGR name.
        lgr_name: String,
        /// Well name.
        well_name: String,
    },
    /// Well completion quantity in a local grid refinement
    /// (`"LCGAS:LGR1:B-1H:11,12,13"`).
    WellCompletionLgr {
        /// LGR name.
        lgr_name: String,
        /// Well name.
        well_name: String,
        /// Completion cell I index.
        cell_i: i32,
        /// Completion cell J index.
        cell_j: i32,
        /// Completion cell K index.
        cell_k: i32,
    },
    /// Well segment quantity (`"SGMT:B-5H:32"`).
    WellSegment {
        /// Well name.
        well_name: String,
        /// Segment number along the well path.
        segment_number: i32,
    },
    /// Grid block quantity (`"BLOC:123,122,121"`).
    Block {
        /// Cell I index.
        cell_i: i32,
        /// Cell J index.
        cell_j: i32,
        /// Cell K index.
        cell_k: i32,
    },
    /// Grid block quantity in a local grid refinement
    /// (`"LBABC:LGRN:45,47,49"`).
    BlockLgr {
        /// LGR name.
        lgr_name: String,
        /// Cell I index.
        cell_i: i32,
        /// Cell J index.
        cell_j: i32,
        /// Cell K index.
        cell_k: i32,
    },
    /// Quantity imported from an external curve; the quantity name keeps
    /// its ` (Imp)` suffix.
    Imported,
    /// Unrecognized token shape.
    Invalid,
}

/// Address of one summary time series, classified from its text token.
///
/// Immutable once constructed. Equality, ordering and hashing cover the
/// full field tuple, so the address works as an exact-match key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SummaryAddress {
    quantity_name: String,
    category: SummaryCategory,
    is_error_result: bool,
}

impl SummaryAddress {
    /// Create an address from a quantity name and a category.
    pub fn new(quantity_name: impl Into<String>, category: SummaryCategory) -> Self {
        Self {
            quantity_name: quantity_name.into(),
            category,
            is_error_result: false,
        }
    }

    /// Mark whether the address refers to an error (uncertainty) result.
    #[must_use]
    pub fn with_error_result(mut self, is_error_result: bool) -> Self {
        self.is_error_result = is_error_result;
        self
    }

    /// Classify a text token into an address.
    ///
    /// Total: unrecognized shapes classify as [`SummaryCategory::Invalid`]
    /// rather than failing, and identical tokens always classify
    /// identically. An `ER:`/`ERR:`/`ERROR:` prefix is stripped first and
    /// the remainder parsed as if it had not been there.
    pub fn from_text_address(token: &str) -> Self {
        let (token, is_error_result) = strip_error_prefix(token);

        let (quantity_name, qualifiers) = match token.split_once(':') {
            Some((quantity, rest)) => (quantity, rest.split(':').collect::<Vec<_>>()),
            None => (token, Vec::new()),
        };

        Self {
            quantity_name: quantity_name.to_string(),
            category: classify(quantity_name, &qualifiers),
            is_error_result,
        }
    }

    /// The quantity (vector) name, e.g. `"WOPR"`.
    pub fn quantity_name(&self) -> &str {
        &self.quantity_name
    }

    /// The classified category with its fields.
    pub fn category(&self) -> &SummaryCategory {
        &self.category
    }

    /// False when the token shape was not recognized.
    pub fn is_valid(&self) -> bool {
        self.category != SummaryCategory::Invalid
    }

    /// True when the token carried one of the error prefixes.
    pub fn is_error_result(&self) -> bool {
        self.is_error_result
    }

    /// Well name, for the categories that have one.
    pub fn well_name(&self) -> Option<&str> {
        match &self.category {
            SummaryCategory::Well { well_name }
            | SummaryCategory::WellCompletion { well_name, .. }
            | SummaryCategory::WellLgr { well_name, .. }
            | SummaryCategory::WellCompletionLgr { well_name, .. }
            | SummaryCategory::WellSegment { well_name, .. } => Some(well_name),
            _ => None,
        }
    }

    /// Well group name, for group addresses.
    pub fn well_group_name(&self) -> Option<&str> {
        match &self.category {
            SummaryCategory::WellGroup { well_group_name } => Some(well_group_name),
            _ => None,
        }
    }

    /// Local grid refinement name, for the LGR-qualified categories.
    pub fn lgr_name(&self) -> Option<&str> {
        match &self.category {
            SummaryCategory::WellLgr { lgr_name, .. }
            | SummaryCategory::WellCompletionLgr { lgr_name, .. }
            | SummaryCategory::BlockLgr { lgr_name, .. } => Some(lgr_name),
            _ => None,
        }
    }

    /// Region number, for region and inter-region addresses.
    pub fn region_number(&self) -> Option<i32> {
        match self.category {
            SummaryCategory::Region { region_number }
            | SummaryCategory::RegionToRegion { region_number, .. } => Some(region_number),
            _ => None,
        }
    }

    /// Destination region number, for inter-region addresses.
    pub fn region_number2(&self) -> Option<i32> {
        match self.category {
            SummaryCategory::RegionToRegion { region_number2, .. } => Some(region_number2),
            _ => None,
        }
    }

    /// Aquifer number, for aquifer addresses.
    pub fn aquifer_number(&self) -> Option<i32> {
        match self.category {
            SummaryCategory::Aquifer { aquifer_number } => Some(aquifer_number),
            _ => None,
        }
    }

    /// Segment number, for well segment addresses.
    pub fn well_segment_number(&self) -> Option<i32> {
        match self.category {
            SummaryCategory::WellSegment { segment_number, .. } => Some(segment_number),
            _ => None,
        }
    }

    /// Grid cell (I, J, K), for block and completion addresses.
    pub fn cell_ijk(&self) -> Option<(i32, i32, i32)> {
        match self.category {
            SummaryCategory::WellCompletion {
                cell_i,
                cell_j,
                cell_k,
                ..
            }
            | SummaryCategory::WellCompletionLgr {
                cell_i,
                cell_j,
                cell_k,
                ..
            }
            | SummaryCategory::Block {
                cell_i,
                cell_j,
                cell_k,
            }
            | SummaryCategory::BlockLgr {
                cell_i,
                cell_j,
                cell_k,
                ..
            } => Some((cell_i, cell_j, cell_k)),
            _ => None,
        }
    }
}

impl fmt::Display for SummaryAddress {
    /// Formats the address in its Eclipse text form. For a parsed address,
    /// re-parsing the output reproduces an equal address; the error overlay
    /// always formats as the `ERR:` prefix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_error_result {
            write!(f, "ERR:")?;
        }
        write!(f, "{}", self.quantity_name)?;
        match &self.category {
            SummaryCategory::Field
            | SummaryCategory::Network
            | SummaryCategory::Misc
            | SummaryCategory::Imported
            | SummaryCategory::Invalid => Ok(()),
            SummaryCategory::Aquifer { aquifer_number } => write!(f, ":{}", aquifer_number),
            SummaryCategory::Region { region_number } => write!(f, ":{}", region_number),
            SummaryCategory::RegionToRegion {
                region_number,
                region_number2,
            } => write!(f, ":{}-{}", region_number, region_number2),
            SummaryCategory::WellGroup { well_group_name } => write!(f, ":{}", well_group_name),
            SummaryCategory::Well { well_name } => write!(f, ":{}", well_name),
            SummaryCategory::WellCompletion {
                well_name,
                cell_i,
                cell_j,
                cell_k,
            } => write!(f, ":{}:{},{},{}", well_name, cell_i, cell_j, cell_k),
            SummaryCategory::WellLgr {
                lgr_name,
                well_name,
            } => write!(f, ":{}:{}", lgr_name, well_name),
            SummaryCategory::WellCompletionLgr {
                lgr_name,
                well_name,
                cell_i,
                cell_j,
                cell_k,
            } => write!(
                f,
                ":{}:{}:{},{},{}",
                lgr_name, well_name, cell_i, cell_j, cell_k
            ),
            SummaryCategory::WellSegment {
                well_name,
                segment_number,
            } => write!(f, ":{}:{}", well_name, segment_number),
            SummaryCategory::Block {
                cell_i,
                cell_j,
                cell_k,
            } => write!(f, ":{},{},{}", cell_i, cell_j, cell_k),
            SummaryCategory::BlockLgr {
                lgr_name,
                cell_i,
                cell_j,
                cell_k,
            } => write!(f, ":{}:{},{},{}", lgr_name, cell_i, cell_j, cell_k),
        }
    }
}

fn strip_error_prefix(token: &str) -> (&str, bool) {
    for prefix in ERROR_PREFIXES {
        if let Some(rest) = token.strip_prefix(prefix) {
            return (rest, true);
        }
    }
    (token, false)
}

fn classify(quantity: &str, qualifiers: &[&str]) -> SummaryCategory {
    let tag = quantity.chars().next();

    match qualifiers {
        [] => {
            if quantity.ends_with(IMPORTED_SUFFIX) {
                SummaryCategory::Imported
            } else if quantity == "NETW" {
                SummaryCategory::Network
            } else if tag == Some('F') {
                SummaryCategory::Field
            } else {
                SummaryCategory::Misc
            }
        }
        [qualifier] => classify_single(tag, qualifier),
        [first, second] => classify_pair(quantity, tag, first, second),
        [lgr_name, well_name, cell] if quantity.starts_with("LC") => {
            match parse_cell_triplet(cell) {
                Some((cell_i, cell_j, cell_k)) => SummaryCategory::WellCompletionLgr {
                    lgr_name: (*lgr_name).to_string(),
                    well_name: (*well_name).to_string(),
                    cell_i,
                    cell_j,
                    cell_k,
                },
                None => SummaryCategory::Invalid,
            }
        }
        _ => SummaryCategory::Invalid,
    }
}

fn classify_single(tag: Option<char>, qualifier: &str) -> SummaryCategory {
    match tag {
        Some('A') => match parse_int(qualifier) {
            Some(aquifer_number) => SummaryCategory::Aquifer { aquifer_number },
            None => SummaryCategory::Invalid,
        },
        Some('R') => classify_region(qualifier),
        Some('B') => match parse_cell_triplet(qualifier) {
            Some((cell_i, cell_j, cell_k)) => SummaryCategory::Block {
                cell_i,
                cell_j,
                cell_k,
            },
            None => SummaryCategory::Invalid,
        },
        Some('G') => SummaryCategory::WellGroup {
            well_group_name: qualifier.to_string(),
        },
        Some('W') => SummaryCategory::Well {
            well_name: qualifier.to_string(),
        },
        _ => SummaryCategory::Invalid,
    }
}

// A region qualifier with a `-` separator addresses an inter-region flow.
fn classify_region(qualifier: &str) -> SummaryCategory {
    if let Some((first, second)) = qualifier.split_once('-') {
        return match (parse_int(first), parse_int(second)) {
            (Some(region_number), Some(region_number2)) => SummaryCategory::RegionToRegion {
                region_number,
                region_number2,
            },
            _ => SummaryCategory::Invalid,
        };
    }
    match parse_int(qualifier) {
        Some(region_number) => SummaryCategory::Region { region_number },
        None => SummaryCategory::Invalid,
    }
}

fn classify_pair(quantity: &str, tag: Option<char>, first: &str, second: &str) -> SummaryCategory {
    if quantity.starts_with("LW") {
        return SummaryCategory::WellLgr {
            lgr_name: first.to_string(),
            well_name: second.to_string(),
        };
    }
    if quantity.starts_with("LB") {
        return match parse_cell_triplet(second) {
            Some((cell_i, cell_j, cell_k)) => SummaryCategory::BlockLgr {
                lgr_name: first.to_string(),
                cell_i,
                cell_j,
                cell_k,
            },
            None => SummaryCategory::Invalid,
        };
    }
    match tag {
        Some('C') => match parse_cell_triplet(second) {
            Some((cell_i, cell_j, cell_k)) => SummaryCategory::WellCompletion {
                well_name: first.to_string(),
                cell_i,
                cell_j,
                cell_k,
            },
            None => SummaryCategory::Invalid,
        },
        Some('S') => match parse_int(second) {
            Some(segment_number) => SummaryCategory::WellSegment {
                well_name: first.to_string(),
                segment_number,
            },
            None => SummaryCategory::Invalid,
        },
        _ => SummaryCategory::Invalid,
    }
}

fn parse_int(text: &str) -> Option<i32> {
    text.parse().ok()
}

fn parse_cell_triplet(text: &str) -> Option<(i32, i32, i32)> {
    let mut cells = text.split(',').map(parse_int);
    match (cells.next(), cells.next(), cells.next(), cells.next()) {
        (Some(Some(i)), Some(Some(j)), Some(Some(k)), None) => Some((i, j, k)),
        _ => None,
    }
}
