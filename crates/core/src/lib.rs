//! udise-core - structured data extraction from UDISE school report
//! content streams.
//!
//! The input is the decoded text of a report's PDF content streams, one
//! line per operator. The pipeline scans it for positioned text fragments
//! and bordered rectangles, joins them into cells, reconstructs the
//! enrollment table from the cells' coordinates, and reads the label-keyed
//! fields, producing YAML, CSV and HTML outputs.

pub mod api;
pub mod content;
pub mod converter;
pub mod error;
pub mod fields;
pub mod layout;
pub mod settings;
pub mod table;
pub mod template;

pub use api::high_level;
pub use api::{Report, ReportOptions, parse_report, split_pages, write_report_files};
pub use error::{ReportError, Result};
pub use settings::ExtractSettings;
