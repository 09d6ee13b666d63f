//! Result types for enrollment-table reconstruction.

use indexmap::IndexMap;

/// One grade column: a paired B/G sub-header.
///
/// `key` is the midpoint x of the pair and identifies the column; the
/// individual header positions are kept for value matching.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BgColumn {
    pub key: f64,
    pub b_x: f64,
    pub g_x: f64,
}

/// The boys/girls values matched to one column for one category. Unmatched
/// slots stay `None`; values are the raw cell text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValuePair {
    pub boys: Option<String>,
    pub girls: Option<String>,
}

/// The reconstructed enrollment table of one report.
///
/// `grades` and `columns` run left to right in header order;
/// `categories[cat.key][i]` holds the values matched to `columns[i]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnrollmentTable {
    pub grades: Vec<String>,
    pub columns: Vec<BgColumn>,
    pub categories: IndexMap<&'static str, Vec<ValuePair>>,
}
