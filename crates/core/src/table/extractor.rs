//! Anchor discovery and column matching.

use std::sync::LazyLock;

use indexmap::IndexMap;
use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;
use regex::Regex;
use rustc_hash::FxHashMap;

use super::categories::{ALL_CATEGORIES, GRADE_LABELS};
use super::types::{BgColumn, EnrollmentTable, ValuePair};
use crate::layout::Cell;
use crate::settings::ExtractSettings;

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

/// Reconstructs the enrollment table from the joined cell sequence.
///
/// Returns `None` when the grade header row cannot be found on the target
/// page; downstream writers treat that as "nothing to render". A category
/// whose label cell was not discovered yields all-`None` pairs, never an
/// error.
pub fn extract_enrollment(cells: &[Cell], settings: &ExtractSettings) -> Option<EnrollmentTable> {
    let page_cells: Vec<&Cell> = cells.iter().filter(|c| c.page == settings.page).collect();

    // First pass: each category's row y comes off its own label cell,
    // anchored at the left margin of the label column.
    let mut category_ys: FxHashMap<&'static str, f64> = FxHashMap::default();
    for cell in &page_cells {
        let Some(rect_x) = cell.rect_x else { continue };
        if (rect_x - settings.label_anchor_x).abs() >= settings.label_anchor_tolerance {
            continue;
        }
        for category in ALL_CATEGORIES {
            if cell.text.eq_ignore_ascii_case(category.label) {
                category_ys.insert(category.key, cell.rect_y.unwrap_or(0.0));
            }
        }
    }
    debug!(
        "discovered {} of {} category rows",
        category_ys.len(),
        ALL_CATEGORIES.len()
    );

    // Columns at or beyond the "Total" header hold row totals, not
    // per-grade data. An undiscovered cutoff disables the exclusion.
    let mut x_cutoff = f64::INFINITY;
    let mut grade_rows: Vec<&Cell> = Vec::new();
    let mut bg_rows: Vec<&Cell> = Vec::new();
    let mut category_rows: IndexMap<&'static str, Vec<&Cell>> = ALL_CATEGORIES
        .iter()
        .map(|c| (c.key, Vec::new()))
        .collect();

    let near = |a: Option<f64>, b: f64, tol: f64| (a.unwrap_or(0.0) - b).abs() < tol;

    for cell in page_cells.iter().copied() {
        if cell.text == "Total" && near(cell.rect_y, settings.total_header_y, settings.header_tolerance)
        {
            x_cutoff = cell.rect_x.unwrap_or(f64::INFINITY);
        }

        if GRADE_LABELS.contains(&cell.text.as_str()) {
            if near(cell.text_y, settings.grade_header_y, settings.header_tolerance) {
                grade_rows.push(cell);
            }
        } else if cell.text == "B" || cell.text == "G" {
            if near(cell.text_y, settings.bg_header_y, settings.header_tolerance) {
                bg_rows.push(cell);
            }
        } else if NUMBER_RE.is_match(&cell.text) {
            for category in ALL_CATEGORIES {
                if let Some(&y) = category_ys.get(category.key)
                    && near(cell.rect_y, y, settings.row_tolerance)
                {
                    category_rows[category.key].push(cell);
                }
            }
        }
    }

    if grade_rows.is_empty() {
        return None;
    }

    let sort_and_trim = |rows: &mut Vec<&Cell>| {
        rows.sort_by_key(|c| OrderedFloat(c.text_x.unwrap_or(0.0)));
        rows.retain(|c| c.text_x.unwrap_or(0.0) < x_cutoff);
    };
    sort_and_trim(&mut grade_rows);
    sort_and_trim(&mut bg_rows);
    for rows in category_rows.values_mut() {
        sort_and_trim(rows);
    }

    // Pair consecutive B/G headers by ascending x; the midpoint is the
    // column key. Grade order is the insertion order of these pairs.
    let columns: Vec<BgColumn> = bg_rows
        .iter()
        .tuples()
        .map(|(b, g)| {
            let b_x = b.text_x.unwrap_or(0.0);
            let g_x = g.text_x.unwrap_or(0.0);
            BgColumn {
                key: (b_x + g_x) / 2.0,
                b_x,
                g_x,
            }
        })
        .collect();

    let mut categories = IndexMap::new();
    for category in ALL_CATEGORIES {
        let rows = &category_rows[category.key];
        categories.insert(
            category.key,
            match_numbers_to_pairs(rows, &columns, settings.match_threshold),
        );
    }

    Some(EnrollmentTable {
        grades: grade_rows.iter().map(|c| c.text.clone()).collect(),
        columns,
        categories,
    })
}

/// Assigns each numeric cell of one category row to the nearest B or G
/// header position, in column order. Every cell is consumed at most once;
/// columns with no value within `threshold` stay unmatched.
fn match_numbers_to_pairs(rows: &[&Cell], columns: &[BgColumn], threshold: f64) -> Vec<ValuePair> {
    let mut remaining: Vec<&Cell> = rows.to_vec();

    columns
        .iter()
        .map(|column| ValuePair {
            boys: take_near(&mut remaining, column.b_x, threshold),
            girls: take_near(&mut remaining, column.g_x, threshold),
        })
        .collect()
}

fn take_near(remaining: &mut Vec<&Cell>, x: f64, threshold: f64) -> Option<String> {
    let pos = remaining
        .iter()
        .position(|c| (c.text_x.unwrap_or(0.0) - x).abs() < threshold)?;
    Some(remaining.remove(pos).text.clone())
}
