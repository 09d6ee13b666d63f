//! Spatial join of text fragments and rectangles into table cells.
//!
//! Each fragment is claimed by the smallest rectangle (by area) on the same
//! page whose box contains the fragment's position, bounds inclusive.
//! Rectangles that contain no fragment become empty cells, so that blank
//! table cells survive into the combined sequence.

use std::cmp::Reverse;

use log::warn;
use ordered_float::OrderedFloat;

use super::cell::{Cell, Rectangle, TextFragment};

/// Joins fragments and rectangles into a single cell sequence sorted into
/// reading order: page ascending, y descending, x ascending.
///
/// Fragments without coordinates and rectangles without positive extent are
/// logged and dropped; neither aborts the run.
pub fn combine(fragments: &[TextFragment], rectangles: &[Rectangle]) -> Vec<Cell> {
    let invalid_frags: Vec<&TextFragment> = fragments
        .iter()
        .filter(|f| !f.has_position() && !f.text.is_empty())
        .collect();
    if !invalid_frags.is_empty() {
        warn!(
            "found {} non-empty fragments with missing coordinates",
            invalid_frags.len()
        );
        for frag in &invalid_frags {
            warn!("  - page {}: '{}'", frag.page, frag.text);
        }
    }
    let valid_frags: Vec<&TextFragment> =
        fragments.iter().filter(|f| f.has_position()).collect();

    let invalid_rects: Vec<&Rectangle> =
        rectangles.iter().filter(|r| !r.is_valid()).collect();
    if !invalid_rects.is_empty() {
        warn!(
            "found {} rectangles with invalid extent",
            invalid_rects.len()
        );
        for rect in &invalid_rects {
            warn!(
                "  - page {}: x={}, y={}, w={}, h={}",
                rect.page, rect.x, rect.y, rect.width, rect.height
            );
        }
    }
    let valid_rects: Vec<&Rectangle> = rectangles.iter().filter(|r| r.is_valid()).collect();

    let mut cells: Vec<Cell> = Vec::with_capacity(valid_frags.len());

    for frag in valid_frags.iter().copied() {
        let (x, y) = (frag.x.unwrap_or(0.0), frag.y.unwrap_or(0.0));
        // Smallest containing rectangle wins; ties keep the first seen.
        let owner = valid_rects
            .iter()
            .copied()
            .filter(|r| r.page == frag.page && r.contains(x, y))
            .fold(None::<&Rectangle>, |best, r| match best {
                Some(b) if b.area() <= r.area() => Some(b),
                _ => Some(r),
            });
        cells.push(Cell::from_fragment(frag, owner));
    }

    for rect in valid_rects.iter().copied() {
        let has_text = valid_frags.iter().any(|f| {
            f.page == rect.page && rect.contains(f.x.unwrap_or(0.0), f.y.unwrap_or(0.0))
        });
        if !has_text {
            cells.push(Cell::from_empty_rect(rect));
        }
    }

    cells.sort_by_key(|c| {
        (
            c.page,
            Reverse(OrderedFloat(c.effective_y())),
            OrderedFloat(c.effective_x()),
        )
    });

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(page: u32, x: f64, y: f64, text: &str) -> TextFragment {
        TextFragment {
            page,
            x: Some(x),
            y: Some(y),
            font: Some("F1".to_string()),
            font_size: Some(7.0),
            text: text.to_string(),
        }
    }

    fn rect(page: u32, x: f64, y: f64, w: f64, h: f64) -> Rectangle {
        Rectangle {
            page,
            x,
            y,
            width: w,
            height: h,
            stroke_color: "0 G".to_string(),
            fill_color: "1 1 1 rg".to_string(),
            line_width: 1.0,
        }
    }

    #[test]
    fn fragments_share_a_rectangle() {
        let frags = vec![frag(1, 10.0, 10.0, "Gen"), frag(1, 12.0, 10.0, "3")];
        let rects = vec![rect(1, 0.0, 0.0, 20.0, 20.0)];

        let cells = combine(&frags, &rects);

        assert_eq!(cells.len(), 2);
        for cell in &cells {
            assert_eq!(cell.rect_x, Some(0.0));
            assert_eq!(cell.rect_width, Some(20.0));
            assert!(!cell.text.is_empty());
        }
    }

    #[test]
    fn smallest_containing_rectangle_wins() {
        let frags = vec![frag(1, 5.0, 5.0, "42")];
        let rects = vec![
            rect(1, 0.0, 0.0, 100.0, 100.0),
            rect(1, 0.0, 0.0, 10.0, 10.0),
        ];

        let cells = combine(&frags, &rects);

        assert_eq!(cells[0].rect_width, Some(10.0));
        // The outer rectangle contains text, so it does not become an
        // empty cell even though it owns nothing.
        assert_eq!(cells.len(), 1);
    }

    #[test]
    fn area_ties_keep_first_encountered() {
        let frags = vec![frag(1, 5.0, 5.0, "x")];
        let rects = vec![
            rect(1, 0.0, 0.0, 10.0, 10.0),
            rect(1, 1.0, 1.0, 10.0, 10.0),
        ];

        let cells = combine(&frags, &rects);
        assert_eq!(cells[0].rect_x, Some(0.0));
    }

    #[test]
    fn containment_bounds_are_inclusive() {
        let frags = vec![frag(1, 20.0, 20.0, "edge")];
        let rects = vec![rect(1, 10.0, 10.0, 10.0, 10.0)];

        let cells = combine(&frags, &rects);
        assert_eq!(cells[0].rect_x, Some(10.0));
    }

    #[test]
    fn empty_rectangle_becomes_one_empty_cell() {
        let frags = vec![frag(1, 50.0, 50.0, "far")];
        let rects = vec![rect(1, 0.0, 0.0, 10.0, 10.0)];

        let cells = combine(&frags, &rects);

        let empty: Vec<&Cell> = cells.iter().filter(|c| c.text.is_empty()).collect();
        assert_eq!(empty.len(), 1);
        assert_eq!(empty[0].rect_x, Some(0.0));
        assert_eq!(empty[0].text_x, None);
    }

    #[test]
    fn zero_width_rectangle_is_dropped() {
        let frags = vec![frag(1, 5.0, 5.0, "x")];
        let mut bad = rect(1, 0.0, 0.0, 0.0, 10.0);
        bad.width = 0.0;
        let rects = vec![bad];

        let cells = combine(&frags, &rects);

        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].rect_x, None);
    }

    #[test]
    fn unpositioned_fragment_is_dropped() {
        let mut f = frag(1, 0.0, 0.0, "ghost");
        f.x = None;
        let cells = combine(&[f], &[]);
        assert!(cells.is_empty());
    }

    #[test]
    fn cells_sorted_page_then_top_to_bottom_left_to_right() {
        let frags = vec![
            frag(2, 10.0, 10.0, "p2"),
            frag(1, 30.0, 50.0, "b"),
            frag(1, 10.0, 50.0, "a"),
            frag(1, 10.0, 90.0, "top"),
        ];

        let cells = combine(&frags, &[]);
        let texts: Vec<&str> = cells.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["top", "a", "b", "p2"]);
    }

    #[test]
    fn sort_prefers_rect_coordinates() {
        // Fragment y puts it below, but its rectangle's y puts it on top.
        let frags = vec![frag(1, 10.0, 10.0, "boxed"), frag(1, 10.0, 50.0, "loose")];
        let rects = vec![rect(1, 5.0, 5.0, 10.0, 95.0)];

        let cells = combine(&frags, &rects);
        // rect_y = 5 for both: "boxed" joins the rect, "loose" is inside it
        // too (inclusive bounds), so both get the rect and the tie is broken
        // by x; with equal x the original order is kept.
        assert_eq!(cells[0].text, "boxed");
        assert_eq!(cells[1].text, "loose");
    }
}
