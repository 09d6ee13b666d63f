//! End-to-end pipeline tests over a synthetic two-page document.

use serde_yaml::Value;

use udise_core::api::{ReportOptions, parse_report, split_pages};
use udise_core::error::ReportError;

/// A miniature report: page 1 carries the label-keyed fields, page 2 the
/// enrollment table with two grade columns and one filled category row.
fn document() -> String {
    let page1 = [
        "BT",
        "1 0 0 1 40 700 Tm",
        "/F1 7 Tf",
        "(State) Tj",
        "ET",
        "BT",
        "1 0 0 1 150 700 Tm",
        "(UTTAR PRADESH) Tj",
        "ET",
        "BT",
        "1 0 0 1 40 680 Tm",
        "(Pincode) Tj",
        "ET",
        "BT",
        "1 0 0 1 150 680 Tm",
        "(283203) Tj",
        "ET",
        "BT",
        "1 0 0 1 40 660 Tm",
        "(Year of Establishment) Tj",
        "ET",
        "BT",
        "1 0 0 1 150 660 Tm",
        "(1962) Tj",
        "ET",
    ];
    let page2 = [
        // grade header row
        "BT",
        "1 0 0 1 100 780 Tm",
        "/F1 7 Tf",
        "(I) Tj",
        "ET",
        "BT",
        "1 0 0 1 120 780 Tm",
        "(II) Tj",
        "ET",
        // "Total" column header inside its own box
        "500 778 30 12 re",
        "BT",
        "1 0 0 1 505 780 Tm",
        "(Total) Tj",
        "ET",
        // B/G sub-header row
        "BT",
        "1 0 0 1 95 768 Tm",
        "(B) Tj",
        "ET",
        "BT",
        "1 0 0 1 105 768 Tm",
        "(G) Tj",
        "ET",
        "BT",
        "1 0 0 1 115 768 Tm",
        "(B) Tj",
        "ET",
        "BT",
        "1 0 0 1 125 768 Tm",
        "(G) Tj",
        "ET",
        // category label box at the left margin, then two value boxes
        "27 755 50 11.5 re",
        "BT",
        "1 0 0 1 30 757 Tm",
        "(Gen) Tj",
        "ET",
        "90 755 14 11.5 re",
        "BT",
        "1 0 0 1 96 757 Tm",
        "(12) Tj",
        "ET",
        "105 755 14 11.5 re",
        "BT",
        "1 0 0 1 106 757 Tm",
        "(8) Tj",
        "ET",
    ];
    format!("{}\n\x0c{}\n", page1.join("\n"), page2.join("\n"))
}

#[test]
fn full_pipeline_reconstructs_table_and_fields() {
    let pages = split_pages(&document());
    assert_eq!(pages.len(), 2);

    let report = parse_report(&pages, &ReportOptions::default()).unwrap();

    let table = report.enrollment.as_ref().unwrap();
    assert_eq!(table.grades, vec!["I", "II"]);
    let r#gen = &table.categories["gen"];
    assert_eq!(r#gen[0].boys.as_deref(), Some("12"));
    assert_eq!(r#gen[0].girls.as_deref(), Some("8"));
    assert!(r#gen[1].boys.is_none());

    let data = Value::Mapping(report.yaml_data());
    assert_eq!(data["location"]["state"], Value::from("UTTAR PRADESH"));
    assert_eq!(data["location"]["pincode"], Value::from("283203"));
    assert_eq!(data["official"]["established"], Value::from(1962));
    assert_eq!(data["enrollment"]["gen"]["i"]["boys"], Value::from(12));
    assert_eq!(data["enrollment"]["gen"]["i"]["girls"], Value::from(8));
    assert_eq!(data["enrollment"]["gen"]["ii"]["boys"], Value::Null);
}

#[test]
fn parsing_is_deterministic_across_runs() {
    let pages = split_pages(&document());
    let options = ReportOptions::default();

    let first = parse_report(&pages, &options).unwrap();
    let second = parse_report(&pages, &options).unwrap();

    assert_eq!(first.cells.len(), second.cells.len());
    assert_eq!(first.yaml_data(), second.yaml_data());
}

#[test]
fn rectangle_state_does_not_leak_between_documents() {
    // first document changes the graphics state
    let styled: Vec<String> = ["0 0 0 RG", "2 w", "10 10 5 5 re"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let report = parse_report(&[styled], &ReportOptions::default()).unwrap();
    assert_eq!(report.rectangles[0].line_width, 2.0);

    // a fresh parse starts from the defaults again
    let plain: Vec<String> = vec!["10 10 5 5 re".to_string()];
    let report = parse_report(&[plain], &ReportOptions::default()).unwrap();
    assert_eq!(report.rectangles[0].line_width, 1.0);
    assert_eq!(report.rectangles[0].stroke_color, "0 G");
}

#[test]
fn empty_page_list_is_rejected() {
    let err = parse_report(&[], &ReportOptions::default()).unwrap_err();
    assert!(matches!(err, ReportError::EmptyPages));
}

#[test]
fn document_without_table_still_yields_fields() {
    let pages = split_pages("BT\n1 0 0 1 40 700 Tm\n(State) Tj\nET\nBT\n1 0 0 1 150 700 Tm\n(BIHAR) Tj\nET\n");
    let report = parse_report(&pages, &ReportOptions::default()).unwrap();

    assert!(report.enrollment.is_none());
    let data = Value::Mapping(report.yaml_data());
    assert_eq!(data["location"]["state"], Value::from("BIHAR"));
    assert!(data.get("enrollment").is_none());
}
