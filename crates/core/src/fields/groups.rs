//! Shipped mapping tables.
//!
//! The end patterns name the label that follows each field in the report,
//! so a missing value block is never mistaken for one.

use super::mapping::{Coerce, FieldMapping};

const fn text(
    trigger: &'static str,
    path: &'static [&'static str],
    end_pattern: Option<&'static str>,
) -> FieldMapping {
    FieldMapping {
        trigger,
        path,
        coerce: Coerce::Text,
        end_pattern,
    }
}

const fn integer(trigger: &'static str, path: &'static [&'static str]) -> FieldMapping {
    FieldMapping {
        trigger,
        path,
        coerce: Coerce::Integer,
        end_pattern: None,
    }
}

/// Location block of the report's first page.
pub const LOCATION_FIELDS: &[FieldMapping] = &[
    text("State", &["location", "state"], Some("District")),
    text("District", &["location", "district"], Some("Block")),
    text("Block", &["location", "block"], Some("Rural")),
    text("Rural / Urban", &["location", "area_type"], Some("Cluster")),
    text("Pincode", &["location", "pincode"], None),
    text("Ward", &["location", "ward"], Some("Mohalla")),
    text("Cluster", &["location", "cluster"], Some("Ward")),
    text("Municipality", &["location", "municipality"], Some("Assembly")),
    text(
        "Assembly Const.",
        &["location", "assembly_constituency"],
        Some("Parl"),
    ),
    text(
        "Parl. Constituency",
        &["location", "parliamentary_constituency"],
        Some("School"),
    ),
];

/// Recognition/affiliation block.
pub const OFFICIAL_FIELDS: &[FieldMapping] = &[
    integer("Year of Establishment", &["official", "established"]),
    integer(
        "Year of Recognition-Pri.",
        &["official", "recognition", "primary"],
    ),
    integer(
        "Year of Recognition-Upr.Pri.",
        &["official", "recognition", "upper_primary"],
    ),
    integer(
        "Year of Recognition-Sec.",
        &["official", "recognition", "secondary"],
    ),
    integer(
        "Year of Recognition-Higher Sec.",
        &["official", "recognition", "higher_secondary"],
    ),
    text(
        "Affiliation Board-Sec",
        &["official", "affiliation", "secondary"],
        Some("Affiliation Board-HSec"),
    ),
    text(
        "Affiliation Board-HSec",
        &["official", "affiliation", "higher_secondary"],
        Some("Is this"),
    ),
    text(
        "School Management",
        &["official", "management"],
        Some("School Type"),
    ),
];
