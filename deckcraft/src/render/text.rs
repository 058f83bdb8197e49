//! Lettering: layered title passes and bitmap glyph geometry
//!
//! Text is drawn with the 8x8 bitmap font from `font8x8`, each font pixel
//! scaled up to a square cell. The title gets an extruded look by drawing
//! the same text several times at decreasing diagonal offsets.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};

use super::canvas::{CanvasSize, Point};
use super::palette::{Palette, Rgb, WATERMARK_GREY};
use super::Outline;

/// Font cells per glyph side
pub const GLYPH_CELLS: u32 = 8;
/// Rows above the baseline; the last row is for descenders
const BASELINE_ROW: u32 = 7;

pub const TITLE_SIZE: f32 = 32.0;
pub const TITLE_BASELINE: f32 = 80.0;
pub const TITLE_OUTLINE: f32 = 2.0;
/// Number of extrusion passes below the crisp top pass
pub const EXTRUSION_DEPTH: usize = 5;

pub const WATERMARK_TEXT: &str = "PROCEDURAL DECK PLACEHOLDER";
pub const WATERMARK_SIZE: f32 = 10.0;
pub const WATERMARK_BASELINE: f32 = 15.0;

/// One pass of horizontally centered text
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayer {
    pub text: String,
    /// Center of the text run, on the baseline
    pub anchor: Point,
    /// Glyph height in pixels
    pub size: f32,
    pub fill: Rgb,
    pub outline: Option<Outline>,
}

impl TextLayer {
    /// Side of one font cell in pixels
    pub fn cell(&self) -> f32 {
        self.size / GLYPH_CELLS as f32
    }

    /// Top-left corner of the text run
    pub fn origin(&self) -> Point {
        let columns = self.text.chars().count() as f32 * GLYPH_CELLS as f32;
        Point::new(
            self.anchor.x - columns * self.cell() / 2.0,
            self.anchor.y - BASELINE_ROW as f32 * self.cell(),
        )
    }
}

/// Title passes for a subject, back to front
///
/// Passes are offset diagonally by `EXTRUSION_DEPTH` down to one unit, in
/// palette colors, followed by the crisp foreground pass at offset zero
/// carrying the ink outline.
pub fn title_layers(subject: &str, canvas: &CanvasSize, palette: &Palette) -> Vec<TextLayer> {
    let text = subject.to_uppercase();
    let anchor = Point::new(canvas.center().x, canvas.from_bottom(TITLE_BASELINE));
    let size = canvas.px(TITLE_SIZE);

    (0..=EXTRUSION_DEPTH)
        .rev()
        .map(|depth| {
            let offset = canvas.px(depth as f32);
            let top_pass = depth == 0;
            TextLayer {
                text: text.clone(),
                anchor: anchor.offset(offset, offset),
                size,
                fill: if top_pass {
                    palette.foreground
                } else {
                    palette.accent(depth)
                },
                outline: top_pass.then(|| Outline {
                    color: palette.ink,
                    width: canvas.px(TITLE_OUTLINE),
                }),
            }
        })
        .collect()
}

/// Small caption marking the image as a placeholder
pub fn watermark_layer(canvas: &CanvasSize) -> TextLayer {
    TextLayer {
        text: WATERMARK_TEXT.to_string(),
        anchor: Point::new(canvas.center().x, canvas.from_bottom(WATERMARK_BASELINE)),
        size: canvas.px(WATERMARK_SIZE),
        fill: WATERMARK_GREY,
        outline: None,
    }
}

/// Bitmap rows for a character; unknown characters are blank
pub fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .unwrap_or([0; 8])
}

/// Lit font cells of a text run as `(column, row)`
pub fn glyph_cells(text: &str) -> Vec<(u32, u32)> {
    let mut cells = Vec::new();
    for (index, c) in text.chars().enumerate() {
        let column0 = index as u32 * GLYPH_CELLS;
        for (row, bits) in glyph(c).iter().enumerate() {
            for bit in 0..GLYPH_CELLS {
                if bits & (1 << bit) != 0 {
                    cells.push((column0 + bit, row as u32));
                }
            }
        }
    }
    cells
}

/// Boundary edges of a cell set, in cell coordinates
///
/// Only edges between a lit and an unlit cell are returned, so stroking them
/// outlines each letter without drawing the cell grid.
pub fn outline_edges(cells: &[(u32, u32)]) -> Vec<(Point, Point)> {
    let mut cells = cells.to_vec();
    cells.sort_unstable();
    cells.dedup();

    let lit = |col: i64, row: i64| {
        col >= 0 && row >= 0 && cells.binary_search(&(col as u32, row as u32)).is_ok()
    };

    let mut edges = Vec::new();
    for &(col, row) in &cells {
        let (c, r) = (col as i64, row as i64);
        let (x0, y0) = (col as f32, row as f32);
        let (x1, y1) = (x0 + 1.0, y0 + 1.0);
        if !lit(c, r - 1) {
            edges.push((Point::new(x0, y0), Point::new(x1, y0)));
        }
        if !lit(c, r + 1) {
            edges.push((Point::new(x0, y1), Point::new(x1, y1)));
        }
        if !lit(c - 1, r) {
            edges.push((Point::new(x0, y0), Point::new(x0, y1)));
        }
        if !lit(c + 1, r) {
            edges.push((Point::new(x1, y0), Point::new(x1, y1)));
        }
    }
    edges
}
