//! Textual addressing of simulation results.
//!
//! Summary vectors are addressed by compact text tokens such as
//! `"WOPR:B-2H"`; well-test series are addressed by (well, time step,
//! channel) triples.

mod rft;
mod summary;

pub use rft::{RftAddress, WellLogChannel};
pub use summary::{SummaryAddress, SummaryCategory};
