//! Reading and indexing of well-test results.
//!
//! This module reads RFT/PLT survey records from a results container and
//! indexes every series each record can answer under its address.

mod catalog;
mod reader;
mod source;

pub use catalog::Catalog;
pub use reader::RftReader;
pub use source::{RecordedRftSource, RftNode, RftRecord, RftSource};
