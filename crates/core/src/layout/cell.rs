//! Core data model: positioned text fragments, drawn rectangles, and the
//! joined cells the table extractor consumes.

use serde::{Deserialize, Serialize};

/// One `BT`..`ET` text span from a page's content stream.
///
/// Position and font are fixed from the first `Tm`/`Tf` operator seen inside
/// the span; later ones in the same span are ignored. Multiple `Tj` texts are
/// concatenated with a single space. Immutable after creation.
///
/// The scanner only emits fragments with a resolved position, but the fields
/// stay optional so that fragments re-read from a CSV dump (where columns may
/// be blank) share the same type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    pub page: u32,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub font: Option<String>,
    pub font_size: Option<f64>,
    pub text: String,
}

impl TextFragment {
    /// Whether the fragment carries a usable position.
    pub fn has_position(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }
}

/// One `re` operator from a page's content stream, with the stroke/fill/width
/// state that was active when it was drawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub page: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub stroke_color: String,
    pub fill_color: String,
    pub line_width: f64,
}

impl Rectangle {
    /// A rectangle only counts as a table cell if it has positive extent.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Inclusive containment test against a point.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// A text fragment joined to its smallest enclosing rectangle, or a
/// rectangle that encloses no text (an empty table cell).
///
/// Exactly one of the two halves may be absent: a fragment outside every
/// rectangle has no `rect_*` fields, and an empty cell has empty `text` and
/// no `text_*` fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub page: u32,
    pub text: String,
    pub text_x: Option<f64>,
    pub text_y: Option<f64>,
    pub font: Option<String>,
    pub font_size: Option<f64>,
    pub rect_x: Option<f64>,
    pub rect_y: Option<f64>,
    pub rect_width: Option<f64>,
    pub rect_height: Option<f64>,
    pub stroke_color: Option<String>,
    pub fill_color: Option<String>,
    pub line_width: Option<f64>,
}

impl Cell {
    pub(crate) fn from_fragment(frag: &TextFragment, rect: Option<&Rectangle>) -> Self {
        Self {
            page: frag.page,
            text: frag.text.clone(),
            text_x: frag.x,
            text_y: frag.y,
            font: frag.font.clone(),
            font_size: frag.font_size,
            rect_x: rect.map(|r| r.x),
            rect_y: rect.map(|r| r.y),
            rect_width: rect.map(|r| r.width),
            rect_height: rect.map(|r| r.height),
            stroke_color: rect.map(|r| r.stroke_color.clone()),
            fill_color: rect.map(|r| r.fill_color.clone()),
            line_width: rect.map(|r| r.line_width),
        }
    }

    pub(crate) fn from_empty_rect(rect: &Rectangle) -> Self {
        Self {
            page: rect.page,
            text: String::new(),
            rect_x: Some(rect.x),
            rect_y: Some(rect.y),
            rect_width: Some(rect.width),
            rect_height: Some(rect.height),
            stroke_color: Some(rect.stroke_color.clone()),
            fill_color: Some(rect.fill_color.clone()),
            line_width: Some(rect.line_width),
            ..Self::default()
        }
    }

    /// Sort y: the rectangle's y wins over the fragment's.
    pub fn effective_y(&self) -> f64 {
        self.rect_y.or(self.text_y).unwrap_or(0.0)
    }

    /// Sort x: the rectangle's x wins over the fragment's.
    pub fn effective_x(&self) -> f64 {
        self.rect_x.or(self.text_x).unwrap_or(0.0)
    }
}
