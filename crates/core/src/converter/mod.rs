//! Output writers: CSV dumps, the HTML review table, and YAML assembly.

pub mod csv;
pub mod html;
pub mod yaml;

pub use csv::{write_cells, write_fragments, write_rectangles};
pub use html::{render_enrollment, write_enrollment_html};
pub use yaml::enrollment_to_mapping;
