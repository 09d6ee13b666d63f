//! HTML review table.
//!
//! A fixed-template rendering of the reconstructed enrollment table for
//! human review: grade headers spanning two columns each, a B/G sub-header,
//! one row per category with blank cells where no value matched.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use html_escape::encode_text;

use crate::error::Result;
use crate::table::{ALL_CATEGORIES, EnrollmentTable};

const STYLE: &str = "\
      table { border-collapse: collapse; margin-top: 20px; width: 100%; }
      th, td { border: 1px solid black; padding: 8px; text-align: center; }
      .grade { font-weight: bold; background-color: #e0e0e0; }
      .bg-pair { background-color: #f8f8f8; }
      .category { font-weight: bold; text-align: left; }";

/// Renders the enrollment table as a standalone HTML page.
pub fn render_enrollment(table: &EnrollmentTable) -> String {
    let mut grade_headers = String::new();
    let mut bg_headers = String::new();
    for grade in &table.grades {
        let _ = write!(grade_headers, "<th colspan='2'>{}</th>", encode_text(grade));
        bg_headers.push_str("<td>B</td><td>G</td>");
    }

    let mut rows = String::new();
    for category in ALL_CATEGORIES {
        let Some(pairs) = table.categories.get(category.key) else {
            continue;
        };
        let mut cells = String::new();
        for pair in pairs {
            let _ = write!(
                cells,
                "<td>{}</td><td>{}</td>",
                encode_text(pair.boys.as_deref().unwrap_or("")),
                encode_text(pair.girls.as_deref().unwrap_or(""))
            );
        }
        let _ = write!(
            rows,
            "    <tr>\n      <td class=\"category\">{}</td>\n      {}\n    </tr>\n",
            encode_text(category.display),
            cells
        );
    }

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n  <title>Enrollment Table</title>\n  <style>\n");
    html.push_str(STYLE);
    html.push_str("\n  </style>\n</head>\n<body>\n  <h2>Enrolment (By Social Category)</h2>\n  <table>\n");
    let _ = write!(
        html,
        "    <tr class=\"grade\">\n      <th rowspan=\"2\">Category</th>\n      {grade_headers}\n    </tr>\n"
    );
    let _ = write!(html, "    <tr class=\"bg-pair\">\n      {bg_headers}\n    </tr>\n");
    html.push_str(&rows);
    html.push_str("  </table>\n</body>\n</html>\n");
    html
}

/// Writes the review page, or does nothing at all when there is no table —
/// an absent table must not leave an empty shell behind.
pub fn write_enrollment_html(table: Option<&EnrollmentTable>, path: &Path) -> Result<()> {
    let Some(table) = table else {
        return Ok(());
    };
    fs::write(path, render_enrollment(table))?;
    Ok(())
}
