//! Export formats for employee records.

mod csv;

pub use csv::{CSV_HEADER, EXPORT_FILENAME, export_csv};
