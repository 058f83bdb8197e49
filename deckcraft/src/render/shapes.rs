//! Deck shape geometry
//!
//! Pure functions from a canvas (and, for random shapes, a palette and a
//! random source) to points. Nothing here touches pixels.

use std::f32::consts::TAU;

use crate::random::RandomSource;

use super::canvas::{CanvasSize, Point};
use super::palette::{Palette, Rgb};

/// Horizontal distance of each eye from the center line
pub const EYE_SPREAD: f32 = 50.0;
pub const EYE_Y: f32 = 200.0;
pub const EYE_RADIUS: f32 = 30.0;
pub const PUPIL_RADIUS: f32 = 15.0;

pub const MOUTH_HALF_SPAN: f32 = 80.0;
pub const MOUTH_TOP: f32 = 280.0;
pub const MOUTH_BOTTOM: f32 = 320.0;
pub const MOUTH_AMPLITUDE: f32 = 20.0;
/// Sine period divisor and sampling step along the mouth
pub const MOUTH_STEP: f32 = 20.0;

pub const TEETH_COUNT: usize = 8;
pub const TOOTH_DEPTH: f32 = 20.0;

pub const FLAME_COUNT: usize = 5;
const FLAME_LEFT: f32 = 50.0;
const FLAME_SPACING: f32 = 60.0;
/// Flame outline relative to its left edge, y measured up from the bottom
const FLAME_SILHOUETTE: [(f32, f32); 5] = [
    (0.0, 400.0),
    (20.0, 500.0),
    (40.0, 400.0),
    (30.0, 350.0),
    (10.0, 350.0),
];

pub const BLOB_COUNT: usize = 12;
pub const BLOB_VERTICES: usize = 8;
/// Base radius range, in layout units
pub const BLOB_RADIUS: (f32, f32) = (20.0, 60.0);
/// Per-vertex radius multiplier range
pub const BLOB_JITTER: (f64, f64) = (0.8, 1.2);
/// Distance kept from the left and right edges
pub const BLOB_MARGIN_X: f32 = 40.0;
/// Distance kept from the top and bottom edges
pub const BLOB_MARGIN_Y: f32 = 200.0;

/// A circle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

/// One eye and its pupil
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eye {
    pub iris: Circle,
    pub pupil: Circle,
}

/// Left and right eyes, mirrored about the vertical center line
pub fn eyes(canvas: &CanvasSize) -> [Eye; 2] {
    let cx = canvas.center().x;
    let y = canvas.from_top(EYE_Y);
    [-1.0_f32, 1.0].map(|side| {
        let center = Point::new(cx + side * canvas.px(EYE_SPREAD), y);
        Eye {
            iris: Circle {
                center,
                radius: canvas.px(EYE_RADIUS),
            },
            pupil: Circle {
                center,
                radius: canvas.px(PUPIL_RADIUS),
            },
        }
    })
}

/// Mouth polygon: a sine-wave upper edge closed along a flat lower edge
pub fn mouth(canvas: &CanvasSize) -> Vec<Point> {
    let cx = canvas.center().x;
    let top = canvas.from_top(MOUTH_TOP);
    let samples = (2.0 * MOUTH_HALF_SPAN / MOUTH_STEP) as usize;

    let mut points: Vec<Point> = (0..=samples)
        .map(|i| {
            let dx = -MOUTH_HALF_SPAN + i as f32 * MOUTH_STEP;
            let wave = (dx / MOUTH_STEP).sin() * MOUTH_AMPLITUDE;
            Point::new(cx + canvas.px(dx), top + canvas.px(wave))
        })
        .collect();

    let bottom = canvas.from_top(MOUTH_BOTTOM);
    points.push(Point::new(cx + canvas.px(MOUTH_HALF_SPAN), bottom));
    points.push(Point::new(cx - canvas.px(MOUTH_HALF_SPAN), bottom));
    points
}

/// Triangular teeth hanging from the top of the mouth, evenly spaced
pub fn teeth(canvas: &CanvasSize) -> Vec<[Point; 3]> {
    let cx = canvas.center().x;
    let top = canvas.from_top(MOUTH_TOP);
    let width = 2.0 * MOUTH_HALF_SPAN / TEETH_COUNT as f32;

    (0..TEETH_COUNT)
        .map(|i| {
            let left = cx + canvas.px(-MOUTH_HALF_SPAN + i as f32 * width);
            [
                Point::new(left, top),
                Point::new(left + canvas.px(width / 2.0), top + canvas.px(TOOTH_DEPTH)),
                Point::new(left + canvas.px(width), top),
            ]
        })
        .collect()
}

/// Five-point zigzag flame `index` of [`FLAME_COUNT`]
pub fn flame(canvas: &CanvasSize, index: usize) -> [Point; 5] {
    let left = FLAME_LEFT + index as f32 * FLAME_SPACING;
    FLAME_SILHOUETTE.map(|(dx, up)| Point::new(canvas.px(left + dx), canvas.from_bottom(up)))
}

/// An irregular filled polygon
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    pub center: Point,
    /// Radius before jitter, in pixels
    pub base_radius: f32,
    pub fill: Rgb,
    /// Vertex distances from the center, one per vertex
    pub radii: Vec<f32>,
    pub vertices: Vec<Point>,
}

/// Vertices of a jittered regular polygon
///
/// Samples [`BLOB_VERTICES`] evenly spaced angles around a full turn and
/// scales each radius by an independent draw from [`BLOB_JITTER`].
pub fn blob_outline(
    center: Point,
    base_radius: f32,
    rng: &mut dyn RandomSource,
) -> (Vec<f32>, Vec<Point>) {
    (0..BLOB_VERTICES)
        .map(|j| {
            let angle = j as f32 / BLOB_VERTICES as f32 * TAU;
            let radius = base_radius * rng.next_range(BLOB_JITTER.0, BLOB_JITTER.1) as f32;
            let vertex = center.offset(angle.cos() * radius, angle.sin() * radius);
            (radius, vertex)
        })
        .unzip()
}

/// One blob somewhere in the canvas interior
///
/// Draw order: x, y, base radius, color, then one jitter per vertex.
pub fn generate_blob(canvas: &CanvasSize, palette: &Palette, rng: &mut dyn RandomSource) -> Blob {
    let x = rng.next_range(
        canvas.px(BLOB_MARGIN_X) as f64,
        (canvas.width() as f32 - canvas.px(BLOB_MARGIN_X)) as f64,
    ) as f32;
    let y = rng.next_range(
        canvas.from_top(BLOB_MARGIN_Y) as f64,
        canvas.from_bottom(BLOB_MARGIN_Y) as f64,
    ) as f32;
    let base_radius = rng.next_range(
        canvas.px(BLOB_RADIUS.0) as f64,
        canvas.px(BLOB_RADIUS.1) as f64,
    ) as f32;
    let fill = palette.pick(rng);

    let center = Point::new(x, y);
    let (radii, vertices) = blob_outline(center, base_radius, rng);
    Blob {
        center,
        base_radius,
        fill,
        radii,
        vertices,
    }
}

/// The full set of [`BLOB_COUNT`] blobs
pub fn generate_blobs(
    canvas: &CanvasSize,
    palette: &Palette,
    rng: &mut dyn RandomSource,
) -> Vec<Blob> {
    (0..BLOB_COUNT)
        .map(|_| generate_blob(canvas, palette, rng))
        .collect()
}
