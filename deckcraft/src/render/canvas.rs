//! Canvas dimensions and layout units
//!
//! Decks are 8.25" x 32", i.e. exactly 33:128. Layout is expressed in units of
//! `width / 400` so every shape scales with the canvas.

use super::RenderError;

/// Aspect ratio numerator (8.25 * 4)
pub const ASPECT_WIDTH: u32 = 33;
/// Aspect ratio denominator (32 * 4)
pub const ASPECT_HEIGHT: u32 = 128;

pub const DEFAULT_SCALE: u32 = 12;
pub const MAX_SCALE: u32 = 64;

/// Canvas width that corresponds to one layout unit per pixel
const LAYOUT_WIDTH: f32 = 400.0;

/// A point in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Pixel dimensions of a deck canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    width: u32,
    height: u32,
}

impl CanvasSize {
    /// 396 x 1536
    pub const DEFAULT: CanvasSize = CanvasSize {
        width: ASPECT_WIDTH * DEFAULT_SCALE,
        height: ASPECT_HEIGHT * DEFAULT_SCALE,
    };

    /// Canvas of `33 * scale` by `128 * scale` pixels
    pub fn from_scale(scale: u32) -> Result<Self, RenderError> {
        if scale == 0 || scale > MAX_SCALE {
            return Err(RenderError::InvalidScale(scale));
        }
        Ok(Self {
            width: ASPECT_WIDTH * scale,
            height: ASPECT_HEIGHT * scale,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels per layout unit
    pub fn unit(&self) -> f32 {
        self.width as f32 / LAYOUT_WIDTH
    }

    /// Scale a length in layout units to pixels
    pub fn px(&self, units: f32) -> f32 {
        units * self.unit()
    }

    pub fn center(&self) -> Point {
        Point::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Y coordinate `units` below the top edge
    pub fn from_top(&self, units: f32) -> f32 {
        self.px(units)
    }

    /// Y coordinate `units` above the bottom edge
    pub fn from_bottom(&self, units: f32) -> f32 {
        self.height as f32 - self.px(units)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}
