//! Extraction settings.
//!
//! Every anchor coordinate and tolerance used by the table extractor lives
//! here so it can be recalibrated against new report layouts without code
//! changes. The defaults were tuned against the 2022-23 sample reports.

// Default constants
pub const DEFAULT_PAGE: u32 = 2;
pub const DEFAULT_MATCH_THRESHOLD: f64 = 10.0;
pub const DEFAULT_ROW_TOLERANCE: f64 = 5.0;
pub const DEFAULT_LABEL_ANCHOR_X: f64 = 27.0;
pub const DEFAULT_LABEL_ANCHOR_TOLERANCE: f64 = 5.0;
pub const DEFAULT_GRADE_HEADER_Y: f64 = 780.0;
pub const DEFAULT_BG_HEADER_Y: f64 = 768.0;
pub const DEFAULT_TOTAL_HEADER_Y: f64 = 778.0;
pub const DEFAULT_HEADER_TOLERANCE: f64 = 0.5;

/// Settings for enrollment-table reconstruction.
#[derive(Clone, Debug)]
pub struct ExtractSettings {
    /// Page the enrollment table is printed on (1-indexed).
    pub page: u32,
    /// Maximum distance between a value cell's x and a B/G header's x
    /// for the value to be assigned to that column.
    pub match_threshold: f64,
    /// Half-height of the y band around a category's discovered row.
    pub row_tolerance: f64,
    /// Left-margin x of the category label column.
    pub label_anchor_x: f64,
    /// Tolerance around `label_anchor_x` when discovering label cells.
    pub label_anchor_tolerance: f64,
    /// Text y of the grade-label header row.
    pub grade_header_y: f64,
    /// Text y of the B/G sub-header row.
    pub bg_header_y: f64,
    /// Rect y of the "Total" column header, used to discover `x_cutoff`.
    pub total_header_y: f64,
    /// Tolerance for matching the fixed header-row y coordinates.
    pub header_tolerance: f64,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            row_tolerance: DEFAULT_ROW_TOLERANCE,
            label_anchor_x: DEFAULT_LABEL_ANCHOR_X,
            label_anchor_tolerance: DEFAULT_LABEL_ANCHOR_TOLERANCE,
            grade_header_y: DEFAULT_GRADE_HEADER_Y,
            bg_header_y: DEFAULT_BG_HEADER_Y,
            total_header_y: DEFAULT_TOTAL_HEADER_Y,
            header_tolerance: DEFAULT_HEADER_TOLERANCE,
        }
    }
}
