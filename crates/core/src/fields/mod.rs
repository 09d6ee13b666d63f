//! Label-keyed scalar field reading.
//!
//! The reports print most scalar facts as a label block followed by a value
//! block ("State" / "UTTAR PRADESH"). One generic interpreter walks the
//! compressed text lines and applies a declarative mapping table per field
//! group, instead of a hand-written matcher per field.

mod groups;
mod mapping;

pub use groups::{LOCATION_FIELDS, OFFICIAL_FIELDS};
pub use mapping::{Coerce, FieldMapping, read_fields};
