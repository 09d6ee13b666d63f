//! Text-span scanning.
//!
//! Walks decoded content-stream lines and emits one [`TextFragment`] per
//! `BT`..`ET` span. The first `Tm` fixes the span's position and the first
//! `Tf` its font; later ones inside the same span are ignored (the reports
//! re-issue `Tm` for continuation text, and the first one is the anchor the
//! fixed layout is calibrated against).

use std::sync::LazyLock;

use regex::Regex;

use super::PageLines;
use crate::layout::TextFragment;

static TM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"1\s+0\s+0\s+1\s+(\d+\.?\d*)\s+(\d+\.?\d*)\s+Tm").unwrap()
});
static TF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/F(\d+)\s+(\d+(?:\.\d+)?)\s+Tf").unwrap());
static TJ_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((.*?)\)\s*Tj").unwrap());

#[derive(Default)]
struct Span {
    x: Option<f64>,
    y: Option<f64>,
    font: Option<String>,
    font_size: Option<f64>,
    parts: Vec<String>,
}

/// Extracts one positioned text fragment per `BT`..`ET` span.
///
/// Spans with no resolved position or no text are silently dropped. A `BT`
/// while a span is still open discards the unterminated span.
pub fn extract_fragments(pages: &[PageLines]) -> Vec<TextFragment> {
    let mut fragments = Vec::new();

    for (index, lines) in pages.iter().enumerate() {
        let page = index as u32 + 1;
        let mut span: Option<Span> = None;

        for line in lines {
            if line.contains("BT") {
                span = Some(Span::default());
            } else if let Some(caps) = TM_RE.captures(line) {
                if let Some(span) = span.as_mut()
                    && (span.x.is_none() || span.y.is_none())
                {
                    span.x = caps[1].parse().ok();
                    span.y = caps[2].parse().ok();
                }
            } else if let Some(caps) = TF_RE.captures(line) {
                if let Some(span) = span.as_mut()
                    && (span.font.is_none() || span.font_size.is_none())
                {
                    span.font = Some(format!("F{}", &caps[1]));
                    span.font_size = caps[2].parse().ok();
                }
            } else if let Some(caps) = TJ_RE.captures(line) {
                if let Some(span) = span.as_mut() {
                    span.parts.push(caps[1].replace('\\', ""));
                }
            } else if line.contains("ET") {
                if let Some(span) = span.take() {
                    let text = span.parts.join(" ");
                    if !text.is_empty() && span.x.is_some() && span.y.is_some() {
                        fragments.push(TextFragment {
                            page,
                            x: span.x,
                            y: span.y,
                            font: span.font,
                            font_size: span.font_size,
                            text,
                        });
                    }
                }
            }
        }
    }

    fragments
}

/// Reduces pages to one line of plain text per `BT` block, in document
/// order. This is the stream the label-keyed field readers consume.
pub fn compress_pages(pages: &[PageLines]) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut in_span = false;

    for line in pages.iter().flatten() {
        if line.contains("BT") {
            in_span = true;
            current.clear();
        } else if line.contains("ET") {
            in_span = false;
            let text = current
                .iter()
                .filter(|t| !t.is_empty())
                .cloned()
                .collect::<Vec<_>>()
                .join(" ");
            if !text.is_empty() {
                blocks.push(text);
            }
        } else if in_span && let Some(caps) = TJ_RE.captures(line) {
            let text = caps[1].trim().to_string();
            if !text.is_empty() {
                current.push(text);
            }
        }
    }

    blocks
}
