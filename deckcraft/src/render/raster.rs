//! Rasterization of render plans with tiny-skia

use tiny_skia::{
    Color, FillRule, GradientStop, Paint, PathBuilder, Pixmap, RadialGradient, Rect, SpreadMode,
    Stroke, Transform,
};

use super::canvas::Point;
use super::palette::Rgb;
use super::plan::{DrawOp, RenderPlan};
use super::text::{glyph_cells, outline_edges, TextLayer};
use super::{Outline, RenderError};

/// Paint every op of a plan, in order, onto a fresh pixmap
pub fn rasterize(plan: &RenderPlan) -> Result<Pixmap, RenderError> {
    let (width, height) = (plan.canvas.width(), plan.canvas.height());
    let mut pixmap =
        Pixmap::new(width, height).ok_or(RenderError::InvalidCanvas { width, height })?;

    for planned in &plan.ops {
        draw(&mut pixmap, &planned.op);
    }
    Ok(pixmap)
}

fn color(rgb: Rgb) -> Color {
    Color::from_rgba8(rgb.r, rgb.g, rgb.b, 255)
}

fn solid(rgb: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color(rgb));
    paint.anti_alias = true;
    paint
}

/// Canvas rectangle shrunk by `inset` on every side
fn inset_rect(pixmap: &Pixmap, inset: f32) -> Option<Rect> {
    Rect::from_ltrb(
        inset,
        inset,
        pixmap.width() as f32 - inset,
        pixmap.height() as f32 - inset,
    )
}

fn draw(pixmap: &mut Pixmap, op: &DrawOp) {
    match op {
        DrawOp::Fill(rgb) => pixmap.fill(color(*rgb)),
        DrawOp::RadialGradient {
            inset,
            center,
            radius,
            stops,
        } => {
            let stops = stops
                .iter()
                .map(|s| GradientStop::new(s.offset, color(s.color)))
                .collect();
            let center = tiny_skia::Point::from_xy(center.x, center.y);
            let shader = RadialGradient::new(
                center,
                center,
                *radius,
                stops,
                SpreadMode::Pad,
                Transform::identity(),
            );
            if let (Some(shader), Some(rect)) = (shader, inset_rect(pixmap, *inset)) {
                let paint = Paint {
                    shader,
                    anti_alias: true,
                    ..Default::default()
                };
                pixmap.fill_rect(rect, &paint, Transform::identity(), None);
            }
        }
        DrawOp::Circle {
            center,
            radius,
            fill,
            outline,
        } => {
            if let Some(path) = PathBuilder::from_circle(center.x, center.y, *radius) {
                fill_and_stroke(pixmap, &path, *fill, *outline);
            }
        }
        DrawOp::Polygon {
            points,
            fill,
            outline,
        } => {
            if let Some(path) = polygon(points) {
                fill_and_stroke(pixmap, &path, *fill, *outline);
            }
        }
        DrawOp::Text(layer) => draw_text(pixmap, layer),
        DrawOp::Border { inset, outline } => {
            if let Some(rect) = inset_rect(pixmap, *inset) {
                let path = PathBuilder::from_rect(rect);
                stroke(pixmap, &path, *outline);
            }
        }
    }
}

fn polygon(points: &[Point]) -> Option<tiny_skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.close();
    pb.finish()
}

fn fill_and_stroke(pixmap: &mut Pixmap, path: &tiny_skia::Path, fill: Rgb, outline: Option<Outline>) {
    pixmap.fill_path(path, &solid(fill), FillRule::Winding, Transform::identity(), None);
    if let Some(outline) = outline {
        stroke(pixmap, path, outline);
    }
}

fn stroke(pixmap: &mut Pixmap, path: &tiny_skia::Path, outline: Outline) {
    let stroke = Stroke {
        width: outline.width,
        ..Default::default()
    };
    pixmap.stroke_path(path, &solid(outline.color), &stroke, Transform::identity(), None);
}

/// Fill the lit font cells of a layer, then stroke their boundary
fn draw_text(pixmap: &mut Pixmap, layer: &TextLayer) {
    let cells = glyph_cells(&layer.text);
    if cells.is_empty() {
        return;
    }

    let origin = layer.origin();
    let cell = layer.cell();

    let mut pb = PathBuilder::new();
    for &(col, row) in &cells {
        if let Some(rect) = Rect::from_xywh(
            origin.x + col as f32 * cell,
            origin.y + row as f32 * cell,
            cell,
            cell,
        ) {
            pb.push_rect(rect);
        }
    }
    if let Some(path) = pb.finish() {
        // cell edges must meet without seams
        let mut paint = solid(layer.fill);
        paint.anti_alias = false;
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    let Some(outline) = layer.outline else {
        return;
    };
    let mut pb = PathBuilder::new();
    for (a, b) in outline_edges(&cells) {
        pb.move_to(origin.x + a.x * cell, origin.y + a.y * cell);
        pb.line_to(origin.x + b.x * cell, origin.y + b.y * cell);
    }
    if let Some(path) = pb.finish() {
        stroke(pixmap, &path, outline);
    }
}
