//! Export of comparison results to disk.

mod json_export;

pub use json_export::JsonReportExporter;
