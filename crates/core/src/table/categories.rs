//! The fixed category and grade vocabulary of the enrollment table.

/// One demographic row of the enrollment table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    /// Internal key, also used to index extraction results.
    pub key: &'static str,
    /// Text of the row's label cell in the report.
    pub label: &'static str,
    /// Key used in the YAML output.
    pub yaml_key: &'static str,
    /// Human-readable name for the HTML review table.
    pub display: &'static str,
}

const fn cat(
    key: &'static str,
    label: &'static str,
    yaml_key: &'static str,
    display: &'static str,
) -> Category {
    Category {
        key,
        label,
        yaml_key,
        display,
    }
}

/// Every category row, in report order: social categories, religions,
/// other flags, then single-year ages 3-22 (the report prints ">3" for
/// the first age band).
pub const ALL_CATEGORIES: &[Category] = &[
    // Social categories
    cat("gen", "Gen", "gen", "Gen"),
    cat("sc", "SC", "sc", "SC"),
    cat("st", "ST", "st", "ST"),
    cat("obc", "OBC", "obc", "OBC"),
    // Religions
    cat("musl", "Musl", "muslim", "Muslim"),
    cat("chris", "Chris", "christian", "Christian"),
    cat("sikh", "Sikh", "sikh", "Sikh"),
    cat("budd", "Budd", "buddhist", "Buddhist"),
    cat("parsi", "Parsi", "parsi", "Parsi"),
    cat("jain", "Jain", "jain", "Jain"),
    cat("others", "Others", "others", "Others"),
    // Other flags
    cat("aadh", "Aadh", "aadhaar", "Aadhaar"),
    cat("bpl", "BPL", "bpl", "BPL"),
    cat("rept", "Rept", "repeater", "Repeater"),
    cat("cwsn", "CWSN", "cwsn", "CWSN"),
    // Single-year ages
    cat("age_3", ">3", "age_3", "Age 3"),
    cat("age_4", "4", "age_4", "Age 4"),
    cat("age_5", "5", "age_5", "Age 5"),
    cat("age_6", "6", "age_6", "Age 6"),
    cat("age_7", "7", "age_7", "Age 7"),
    cat("age_8", "8", "age_8", "Age 8"),
    cat("age_9", "9", "age_9", "Age 9"),
    cat("age_10", "10", "age_10", "Age 10"),
    cat("age_11", "11", "age_11", "Age 11"),
    cat("age_12", "12", "age_12", "Age 12"),
    cat("age_13", "13", "age_13", "Age 13"),
    cat("age_14", "14", "age_14", "Age 14"),
    cat("age_15", "15", "age_15", "Age 15"),
    cat("age_16", "16", "age_16", "Age 16"),
    cat("age_17", "17", "age_17", "Age 17"),
    cat("age_18", "18", "age_18", "Age 18"),
    cat("age_19", "19", "age_19", "Age 19"),
    cat("age_20", "20", "age_20", "Age 20"),
    cat("age_21", "21", "age_21", "Age 21"),
    cat("age_22", "22", "age_22", "Age 22"),
];

/// Grade header labels, left to right in the report.
pub const GRADE_LABELS: &[&str] = &[
    "Pre-Pr", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
];
