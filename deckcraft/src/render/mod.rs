//! Procedural fallback artwork
//!
//! Produces a stylized deck image without any external service. Rendering
//! happens in two steps:
//! 1. Compose a [`RenderPlan`], consuming the supplied random source
//! 2. Rasterize the plan, which is deterministic
//!
//! Layers are painted in a fixed order: background gradient, eyes, mouth,
//! flames, blobs, title, then watermark and border.

pub mod canvas;
pub mod palette;
pub mod plan;
mod raster;
pub mod shapes;
pub mod text;

use thiserror::Error;
use tiny_skia::Pixmap;
use tracing::debug;

use crate::random::RandomSource;

pub use canvas::{CanvasSize, Point};
pub use palette::{Palette, Rgb};
pub use plan::{DrawOp, Layer, RenderPlan};

/// Stroke color and width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: Rgb,
    pub width: f32,
}

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("canvas scale {0} is out of range (1..={max})", max = canvas::MAX_SCALE)]
    InvalidScale(u32),

    #[error("cannot allocate a {width}x{height} canvas")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("PNG decoding failed: {0}")]
    Decode(String),
}

/// A rendered or decoded deck image
#[derive(Clone)]
pub struct DeckImage {
    pixmap: Pixmap,
}

impl std::fmt::Debug for DeckImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeckImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl DeckImage {
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha RGBA at a pixel, `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        // Pixmap::pixel only checks the linear index, so (width, y) wraps
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Decode a PNG, e.g. from a remote generator
    pub fn from_png(data: &[u8]) -> Result<Self, RenderError> {
        let pixmap = Pixmap::decode_png(data).map_err(|e| RenderError::Decode(e.to_string()))?;
        Ok(Self { pixmap })
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        self.pixmap
            .encode_png()
            .map_err(|e| RenderError::Encode(e.to_string()))
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }
}

/// Fallback renderer for a fixed canvas and palette
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    canvas: CanvasSize,
    palette: Palette,
}

impl Renderer {
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            palette: Palette::neon(),
        }
    }

    /// Compose the plan without painting it
    pub fn plan(&self, subject_label: &str, rng: &mut dyn RandomSource) -> RenderPlan {
        RenderPlan::compose(self.canvas, self.palette, subject_label, rng)
    }

    /// Render a deck for a subject
    ///
    /// The prompt is only logged; the artwork depends on the subject label
    /// and the random source.
    pub fn render(
        &self,
        prompt: &str,
        subject_label: &str,
        rng: &mut dyn RandomSource,
    ) -> Result<DeckImage, RenderError> {
        debug!(
            "Rendering fallback art for '{}' ({} char prompt)",
            subject_label,
            prompt.chars().count()
        );
        let plan = self.plan(subject_label, rng);
        let pixmap = raster::rasterize(&plan)?;
        Ok(DeckImage { pixmap })
    }
}

/// Render fallback art on the default canvas
pub fn render_fallback_art(
    prompt: &str,
    subject_label: &str,
    rng: &mut dyn RandomSource,
) -> Result<DeckImage, RenderError> {
    Renderer::default().render(prompt, subject_label, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededSource;

    fn render(seed: u64, subject: &str) -> DeckImage {
        render_fallback_art("prompt", subject, &mut SeededSource::new(seed)).unwrap()
    }

    #[test]
    fn test_dimensions_match_deck_ratio() {
        for subject in ["", "Golden", "A very long subject name that overflows the deck"] {
            let image = render(1, subject);
            assert_eq!(image.width(), CanvasSize::DEFAULT.width());
            assert_eq!(image.height(), CanvasSize::DEFAULT.height());
            assert_eq!(image.width() * 128, image.height() * 33);
        }
    }

    #[test]
    fn test_custom_canvas() {
        let renderer = Renderer::new(CanvasSize::from_scale(3).unwrap());
        let image = renderer
            .render("", "Vail", &mut SeededSource::new(0))
            .unwrap();
        assert_eq!((image.width(), image.height()), (99, 384));
    }

    #[test]
    fn test_same_seed_same_pixels() {
        let a = render(9, "Boulder").encode_png().unwrap();
        let b = render(9, "Boulder").encode_png().unwrap();
        assert_eq!(a, b);

        let c = render(10, "Boulder").encode_png().unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_border_and_background() {
        let image = render(4, "Denver");
        // border stroke is white
        assert_eq!(image.pixel(3, image.height() / 2), Some([255, 255, 255, 255]));
        // everything is opaque
        assert_eq!(image.pixel(12, 12).map(|p| p[3]), Some(255));
    }

    #[test]
    fn test_pixel_outside_image_is_none() {
        let image = Renderer::new(CanvasSize::from_scale(1).unwrap())
            .render("", "Vail", &mut SeededSource::new(0))
            .unwrap();
        let (w, h) = (image.width(), image.height());
        assert!(image.pixel(w - 1, h - 1).is_some());
        assert!(image.pixel(0, 0).is_some());
        assert_eq!(image.pixel(w, 0), None);
        assert_eq!(image.pixel(w, h - 2), None);
        assert_eq!(image.pixel(0, h), None);
        assert_eq!(image.pixel(u32::MAX, u32::MAX), None);
    }

    #[test]
    fn test_png_round_trip_keeps_size() {
        let image = render(2, "Aspen");
        let decoded = DeckImage::from_png(&image.encode_png().unwrap()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (image.width(), image.height()));
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(matches!(
            DeckImage::from_png(b"not a png"),
            Err(RenderError::Decode(_))
        ));
    }
}
