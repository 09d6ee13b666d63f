//! Rectangle scanning.
//!
//! Walks every content-stream line in document order and tracks the current
//! stroke color, fill color and line width as mutable state, matched by
//! operator suffix. Each `re` operator emits a [`Rectangle`] snapshotting
//! that state. State carries across page boundaries within one call (the
//! reports set colors once and draw grids over several pages) but is local
//! to the call, so nothing leaks between documents.

use std::sync::LazyLock;

use regex::Regex;

use super::PageLines;
use crate::layout::Rectangle;

const DEFAULT_STROKE: &str = "0 G";
const DEFAULT_FILL: &str = "1 1 1 rg";
const DEFAULT_LINE_WIDTH: f64 = 1.0;

static STROKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d.]+ [\d.]+ [\d.]+ RG|[\d.]+ G").unwrap());
static FILL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d.]+ [\d.]+ [\d.]+ rg|[\d.]+ g").unwrap());
static WIDTH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+\.?\d*)\s+w").unwrap());
static RECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+\.?\d*)\s+(\d+\.?\d*)\s+(\d+\.?\d*)\s+(\d+\.?\d*)\s+re").unwrap()
});

/// Extracts every rectangle drawn by an `re` operator, with the color and
/// width state active at that point. Operands are read in x, y, width,
/// height order, as emitted by the report generator.
pub fn extract_rectangles(pages: &[PageLines]) -> Vec<Rectangle> {
    let mut rectangles = Vec::new();
    let mut stroke_color = DEFAULT_STROKE.to_string();
    let mut fill_color = DEFAULT_FILL.to_string();
    let mut line_width = DEFAULT_LINE_WIDTH;

    for (index, lines) in pages.iter().enumerate() {
        let page = index as u32 + 1;

        for line in lines {
            if STROKE_RE.is_match(line) {
                stroke_color = line.trim().to_string();
            }
            if FILL_RE.is_match(line) {
                fill_color = line.trim().to_string();
            }
            if let Some(caps) = WIDTH_RE.captures(line) {
                if let Ok(width) = caps[1].parse() {
                    line_width = width;
                }
            }
            if let Some(caps) = RECT_RE.captures(line) {
                let parse = |i: usize| caps[i].parse::<f64>().unwrap_or(0.0);
                rectangles.push(Rectangle {
                    page,
                    x: parse(1),
                    y: parse(2),
                    width: parse(3),
                    height: parse(4),
                    stroke_color: stroke_color.clone(),
                    fill_color: fill_color.clone(),
                    line_width,
                });
            }
        }
    }

    rectangles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(lines: &[&str]) -> PageLines {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn rectangle_snapshots_default_state() {
        let pages = vec![page(&["27.0 750.0 50.0 11.5 re", "f"])];
        let rects = extract_rectangles(&pages);

        assert_eq!(rects.len(), 1);
        let r = &rects[0];
        assert_eq!((r.x, r.y, r.width, r.height), (27.0, 750.0, 50.0, 11.5));
        assert_eq!(r.stroke_color, "0 G");
        assert_eq!(r.fill_color, "1 1 1 rg");
        assert_eq!(r.line_width, 1.0);
    }

    #[test]
    fn color_and_width_state_is_tracked() {
        let pages = vec![page(&[
            "0.5 0.5 0.5 RG",
            "0.9 0.9 0.9 rg",
            "0.75 w",
            "10 10 5 5 re",
        ])];
        let rects = extract_rectangles(&pages);

        assert_eq!(rects[0].stroke_color, "0.5 0.5 0.5 RG");
        assert_eq!(rects[0].fill_color, "0.9 0.9 0.9 rg");
        assert_eq!(rects[0].line_width, 0.75);
    }

    #[test]
    fn state_carries_across_pages_within_one_call() {
        let pages = vec![
            page(&["0 0 1 rg", "1 1 2 2 re"]),
            page(&["5 5 2 2 re"]),
        ];
        let rects = extract_rectangles(&pages);

        assert_eq!(rects[0].page, 1);
        assert_eq!(rects[1].page, 2);
        assert_eq!(rects[1].fill_color, "0 0 1 rg");
    }

    #[test]
    fn repeated_calls_start_from_defaults() {
        let first = vec![page(&["0 0 1 rg", "1 1 2 2 re"])];
        extract_rectangles(&first);

        let second = vec![page(&["1 1 2 2 re"])];
        let rects = extract_rectangles(&second);
        assert_eq!(rects[0].fill_color, "1 1 1 rg");
    }

    #[test]
    fn grayscale_color_operators_are_recognized() {
        let pages = vec![page(&["0.5 G", "0.8 g", "1 1 2 2 re"])];
        let rects = extract_rectangles(&pages);
        assert_eq!(rects[0].stroke_color, "0.5 G");
        assert_eq!(rects[0].fill_color, "0.8 g");
    }

    #[test]
    fn stroke_operator_does_not_disturb_fill_state() {
        let pages = vec![page(&["0.2 0.2 0.2 RG", "1 1 2 2 re"])];
        let rects = extract_rectangles(&pages);
        assert_eq!(rects[0].fill_color, "1 1 1 rg");
    }

    #[test]
    fn each_re_operator_emits_one_rectangle() {
        let pages = vec![page(&["1 1 2 2 re", "3 3 4 4 re"])];
        let rects = extract_rectangles(&pages);
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[1].x, 3.0);
    }
}
