//! Enrollment-table reconstruction.
//!
//! Rebuilds the "Enrolment (By Social Category)" grade table from the joined
//! cell sequence: grade and B/G header rows are located by their known text
//! at the fixed header band, each demographic category's row y is discovered
//! from the category's own label cell at the left margin, and numeric cells
//! are matched to the nearest B/G column position.

mod categories;
mod extractor;
mod types;

pub use categories::{ALL_CATEGORIES, Category, GRADE_LABELS};
pub use extractor::extract_enrollment;
pub use types::{BgColumn, EnrollmentTable, ValuePair};
