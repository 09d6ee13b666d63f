//! CSV dumps of the intermediate extraction stages.
//!
//! These exist for calibration and review: when a report's layout drifts,
//! the combined-cell dump is what the anchor coordinates in
//! [`ExtractSettings`](crate::settings::ExtractSettings) get re-tuned
//! against.

use std::path::Path;

use crate::error::Result;
use crate::layout::{Cell, Rectangle, TextFragment};

fn opt_f64(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn opt_str(value: Option<&str>) -> &str {
    value.unwrap_or_default()
}

/// Writes the fragment dump: `page,x,y,text,font,font_size`.
pub fn write_fragments(fragments: &[TextFragment], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["page", "x", "y", "text", "font", "font_size"])?;
    for f in fragments {
        writer.write_record([
            f.page.to_string(),
            opt_f64(f.x),
            opt_f64(f.y),
            f.text.clone(),
            opt_str(f.font.as_deref()).to_string(),
            opt_f64(f.font_size),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the rectangle dump:
/// `page,x,y,width,height,stroke_color,fill_color,line_width`.
pub fn write_rectangles(rectangles: &[Rectangle], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "page",
        "x",
        "y",
        "width",
        "height",
        "stroke_color",
        "fill_color",
        "line_width",
    ])?;
    for r in rectangles {
        writer.write_record([
            r.page.to_string(),
            r.x.to_string(),
            r.y.to_string(),
            r.width.to_string(),
            r.height.to_string(),
            r.stroke_color.clone(),
            r.fill_color.clone(),
            r.line_width.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the combined-cell dump with both halves of every cell.
pub fn write_cells(cells: &[Cell], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "page",
        "text",
        "text_x",
        "text_y",
        "font",
        "font_size",
        "rect_x",
        "rect_y",
        "rect_width",
        "rect_height",
        "stroke_color",
        "fill_color",
        "line_width",
    ])?;
    for c in cells {
        writer.write_record([
            c.page.to_string(),
            c.text.clone(),
            opt_f64(c.text_x),
            opt_f64(c.text_y),
            opt_str(c.font.as_deref()).to_string(),
            opt_f64(c.font_size),
            opt_f64(c.rect_x),
            opt_f64(c.rect_y),
            opt_f64(c.rect_width),
            opt_f64(c.rect_height),
            opt_str(c.stroke_color.as_deref()).to_string(),
            opt_str(c.fill_color.as_deref()).to_string(),
            opt_f64(c.line_width),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
