//! High-level API: one call from decoded content-stream pages to a
//! fully-extracted report.

pub mod high_level;

pub use high_level::{Report, ReportOptions, parse_report, split_pages, write_report_files};
