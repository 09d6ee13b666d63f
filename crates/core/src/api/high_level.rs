//! High-level report extraction API.
//!
//! One call runs the whole pipeline over a decoded content-stream document:
//! scanners, spatial join, enrollment table reconstruction, and the
//! label-keyed field readers. All extraction state is scoped to the call, so
//! parsing one document can never bleed into the next.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::content::{PageLines, compress_pages, extract_fragments, extract_rectangles};
use crate::converter::{
    enrollment_to_mapping, write_cells, write_enrollment_html, write_fragments, write_rectangles,
};
use crate::error::{ReportError, Result};
use crate::fields::{LOCATION_FIELDS, OFFICIAL_FIELDS, read_fields};
use crate::layout::{Cell, Rectangle, TextFragment, combine};
use crate::settings::ExtractSettings;
use crate::table::{EnrollmentTable, extract_enrollment};
use crate::template::{Template, deep_merge};

/// Options for report extraction.
#[derive(Clone, Debug, Default)]
pub struct ReportOptions {
    /// Anchor coordinates and tolerances for the enrollment table.
    pub settings: ExtractSettings,

    /// Output template the extracted data is merged over.
    pub template: Template,

    /// Also write the fragment/rectangle/cell CSV dumps.
    pub dump_csv: bool,
}

/// Everything extracted from one document.
#[derive(Clone, Debug)]
pub struct Report {
    pub fragments: Vec<TextFragment>,
    pub rectangles: Vec<Rectangle>,
    pub cells: Vec<Cell>,
    pub enrollment: Option<EnrollmentTable>,
    pub fields: Mapping,
}

impl Report {
    /// The full YAML data for this report: label-keyed fields plus the
    /// enrollment section when the table was found.
    pub fn yaml_data(&self) -> Mapping {
        let mut data = Value::Mapping(self.fields.clone());
        if let Some(table) = &self.enrollment {
            deep_merge(&mut data, Value::Mapping(enrollment_to_mapping(table)));
        }
        match data {
            Value::Mapping(map) => map,
            _ => Mapping::new(),
        }
    }
}

/// Splits a decoded content-stream document into pages on form feeds.
///
/// A trailing form feed does not produce a phantom empty page.
pub fn split_pages(text: &str) -> Vec<PageLines> {
    let mut pages: Vec<PageLines> = text
        .split('\u{0C}')
        .map(|page| page.lines().map(str::to_string).collect())
        .collect();
    while pages.last().is_some_and(Vec::is_empty) {
        pages.pop();
    }
    pages
}

/// Runs the extraction pipeline over one document.
///
/// Returns [`ReportError::EmptyPages`] when there is nothing to scan.
pub fn parse_report(pages: &[PageLines], options: &ReportOptions) -> Result<Report> {
    if pages.is_empty() {
        return Err(ReportError::EmptyPages);
    }

    let fragments = extract_fragments(pages);
    let rectangles = extract_rectangles(pages);
    let cells = combine(&fragments, &rectangles);
    let enrollment = extract_enrollment(&cells, &options.settings);
    if enrollment.is_none() {
        log::warn!("enrollment table not found");
    }

    let compressed = compress_pages(pages);
    let mut fields = Value::Mapping(read_fields(&compressed, LOCATION_FIELDS));
    deep_merge(
        &mut fields,
        Value::Mapping(read_fields(&compressed, OFFICIAL_FIELDS)),
    );
    let fields = match fields {
        Value::Mapping(map) => map,
        _ => Mapping::new(),
    };

    Ok(Report {
        fragments,
        rectangles,
        cells,
        enrollment,
        fields,
    })
}

/// Writes the output files for a parsed report next to each other in
/// `out_dir`: `<stem>.yml`, `<stem>_enrollment.html`, and the CSV dumps
/// when requested.
pub fn write_report_files(
    report: &Report,
    options: &ReportOptions,
    out_dir: &Path,
    stem: &str,
) -> Result<()> {
    let yaml = options.template.render(report.yaml_data())?;
    fs::write(out_dir.join(format!("{stem}.yml")), yaml)?;

    write_enrollment_html(
        report.enrollment.as_ref(),
        &out_dir.join(format!("{stem}_enrollment.html")),
    )?;

    if options.dump_csv {
        write_fragments(&report.fragments, &out_dir.join(format!("{stem}_fragments.csv")))?;
        write_rectangles(
            &report.rectangles,
            &out_dir.join(format!("{stem}_rectangles.csv")),
        )?;
        write_cells(&report.cells, &out_dir.join(format!("{stem}_cells.csv")))?;
    }

    Ok(())
}
