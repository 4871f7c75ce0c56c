//! Export of computed rates for external plotting tools.

mod csv_export;

pub use csv_export::{CsvExporter, RateRecord};
