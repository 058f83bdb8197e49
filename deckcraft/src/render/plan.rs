//! Render plans
//!
//! A [`RenderPlan`] is the complete, ordered list of drawing operations for
//! one deck. Composing a plan is where all random draws happen; rasterizing
//! it is deterministic.

use tracing::debug;

use crate::random::RandomSource;

use super::canvas::{CanvasSize, Point};
use super::palette::{Palette, Rgb, BLACK, EYE_YELLOW, MOUTH_RED, WHITE};
use super::shapes::{self, FLAME_COUNT};
use super::text::{self, TextLayer};
use super::Outline;

/// Inset of the gradient panel from the canvas edge, in layout units
pub const GRADIENT_INSET: f32 = 20.0;
/// Inset of the border stroke, in layout units
pub const BORDER_INSET: f32 = 3.0;

const FACE_OUTLINE: f32 = 4.0;
const FLAME_OUTLINE: f32 = 3.0;
const BLOB_OUTLINE: f32 = 2.0;
const BORDER_WIDTH: f32 = 6.0;

/// Drawing layers in paint order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Background,
    Eyes,
    Mouth,
    Flames,
    Blobs,
    Title,
    Finish,
}

/// A gradient color stop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgb,
}

/// A single drawing instruction
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Opaque fill of the whole canvas
    Fill(Rgb),
    /// Radial gradient painted into the canvas rectangle shrunk by `inset`
    RadialGradient {
        inset: f32,
        center: Point,
        radius: f32,
        stops: [ColorStop; 3],
    },
    Circle {
        center: Point,
        radius: f32,
        fill: Rgb,
        outline: Option<Outline>,
    },
    Polygon {
        points: Vec<Point>,
        fill: Rgb,
        outline: Option<Outline>,
    },
    Text(TextLayer),
    /// Stroke around the canvas rectangle shrunk by `inset`
    Border { inset: f32, outline: Outline },
}

/// A drawing instruction tagged with its layer
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedOp {
    pub layer: Layer,
    pub op: DrawOp,
}

/// Everything needed to paint one deck
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub canvas: CanvasSize,
    pub palette: Palette,
    pub ops: Vec<PlannedOp>,
}

impl RenderPlan {
    /// Compose the plan for a subject
    ///
    /// Random draws, in order: two gradient colors, one color per flame,
    /// then the blobs.
    pub fn compose(
        canvas: CanvasSize,
        palette: Palette,
        subject: &str,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let mut plan = Self {
            canvas,
            palette,
            ops: Vec::new(),
        };

        plan.background(rng);
        plan.eyes();
        plan.mouth();
        plan.flames(rng);
        plan.blobs(rng);
        plan.title(subject);
        plan.finish();

        debug!(
            "Composed render plan: {} ops on {}x{}",
            plan.ops.len(),
            canvas.width(),
            canvas.height()
        );
        plan
    }

    /// Ops belonging to one layer
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(move |planned| planned.layer == layer)
            .map(|planned| &planned.op)
    }

    fn push(&mut self, layer: Layer, op: DrawOp) {
        self.ops.push(PlannedOp { layer, op });
    }

    fn outline(&self, color: Rgb, units: f32) -> Option<Outline> {
        Some(Outline {
            color,
            width: self.canvas.px(units),
        })
    }

    fn background(&mut self, rng: &mut dyn RandomSource) {
        let inner = self.palette.pick(rng);
        let middle = self.palette.pick(rng);
        let canvas = self.canvas;

        self.push(Layer::Background, DrawOp::Fill(BLACK));
        self.push(
            Layer::Background,
            DrawOp::RadialGradient {
                inset: canvas.px(GRADIENT_INSET),
                center: canvas.center(),
                radius: canvas.height() as f32 / 2.0,
                stops: [
                    ColorStop { offset: 0.0, color: inner },
                    ColorStop { offset: 0.5, color: middle },
                    ColorStop { offset: 1.0, color: BLACK },
                ],
            },
        );
    }

    fn eyes(&mut self) {
        for eye in shapes::eyes(&self.canvas) {
            let outline = self.outline(WHITE, FACE_OUTLINE);
            self.push(
                Layer::Eyes,
                DrawOp::Circle {
                    center: eye.iris.center,
                    radius: eye.iris.radius,
                    fill: EYE_YELLOW,
                    outline,
                },
            );
            self.push(
                Layer::Eyes,
                DrawOp::Circle {
                    center: eye.pupil.center,
                    radius: eye.pupil.radius,
                    fill: BLACK,
                    outline: None,
                },
            );
        }
    }

    fn mouth(&mut self) {
        let outline = self.outline(WHITE, FACE_OUTLINE);
        self.push(
            Layer::Mouth,
            DrawOp::Polygon {
                points: shapes::mouth(&self.canvas),
                fill: MOUTH_RED,
                outline,
            },
        );
        for tooth in shapes::teeth(&self.canvas) {
            self.push(
                Layer::Mouth,
                DrawOp::Polygon {
                    points: tooth.to_vec(),
                    fill: WHITE,
                    outline,
                },
            );
        }
    }

    fn flames(&mut self, rng: &mut dyn RandomSource) {
        let outline = self.outline(BLACK, FLAME_OUTLINE);
        for index in 0..FLAME_COUNT {
            let fill = self.palette.pick(rng);
            self.push(
                Layer::Flames,
                DrawOp::Polygon {
                    points: shapes::flame(&self.canvas, index).to_vec(),
                    fill,
                    outline,
                },
            );
        }
    }

    fn blobs(&mut self, rng: &mut dyn RandomSource) {
        let outline = self.outline(WHITE, BLOB_OUTLINE);
        for blob in shapes::generate_blobs(&self.canvas, &self.palette, rng) {
            self.push(
                Layer::Blobs,
                DrawOp::Polygon {
                    points: blob.vertices,
                    fill: blob.fill,
                    outline,
                },
            );
        }
    }

    fn title(&mut self, subject: &str) {
        for layer in text::title_layers(subject, &self.canvas, &self.palette) {
            self.push(Layer::Title, DrawOp::Text(layer));
        }
    }

    fn finish(&mut self) {
        self.push(Layer::Finish, DrawOp::Text(text::watermark_layer(&self.canvas)));
        let inset = self.canvas.px(BORDER_INSET);
        let outline = Outline {
            color: WHITE,
            width: self.canvas.px(BORDER_WIDTH),
        };
        self.push(Layer::Finish, DrawOp::Border { inset, outline });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedSource, SeededSource};
    use crate::render::shapes::{BLOB_COUNT, BLOB_VERTICES, TEETH_COUNT};

    fn plan(seed: u64, subject: &str) -> RenderPlan {
        RenderPlan::compose(
            CanvasSize::DEFAULT,
            Palette::neon(),
            subject,
            &mut SeededSource::new(seed),
        )
    }

    #[test]
    fn test_layers_in_paint_order() {
        let plan = plan(1, "Vail");
        let layers: Vec<Layer> = plan.ops.iter().map(|p| p.layer).collect();
        assert!(layers.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(layers.first(), Some(&Layer::Background));
        assert_eq!(plan.ops.last().map(|p| &p.op), Some(&DrawOp::Border {
            inset: CanvasSize::DEFAULT.px(BORDER_INSET),
            outline: Outline {
                color: WHITE,
                width: CanvasSize::DEFAULT.px(BORDER_WIDTH),
            },
        }));
    }

    #[test]
    fn test_layer_counts() {
        let plan = plan(2, "Vail");
        assert_eq!(plan.layer(Layer::Background).count(), 2);
        assert_eq!(plan.layer(Layer::Eyes).count(), 4);
        assert_eq!(plan.layer(Layer::Mouth).count(), 1 + TEETH_COUNT);
        assert_eq!(plan.layer(Layer::Flames).count(), FLAME_COUNT);
        assert_eq!(plan.layer(Layer::Blobs).count(), BLOB_COUNT);
        assert_eq!(plan.layer(Layer::Title).count(), text::EXTRUSION_DEPTH + 1);
        assert_eq!(plan.layer(Layer::Finish).count(), 2);

        for op in plan.layer(Layer::Blobs) {
            match op {
                DrawOp::Polygon { points, .. } => assert_eq!(points.len(), BLOB_VERTICES),
                other => panic!("unexpected blob op {other:?}"),
            }
        }
    }

    #[test]
    fn test_draw_count_and_order() {
        // 2 gradient colors + 5 flame colors + 12 * (4 + 8) blob draws
        let mut rng = ScriptedSource::new(vec![0.0, 0.99, 0.5]);
        let plan = RenderPlan::compose(CanvasSize::DEFAULT, Palette::neon(), "x", &mut rng);
        assert_eq!(rng.draws(), 2 + FLAME_COUNT + BLOB_COUNT * (4 + BLOB_VERTICES));

        let gradient = plan.layer(Layer::Background).nth(1);
        match gradient {
            Some(DrawOp::RadialGradient { stops, .. }) => {
                assert_eq!(stops[0].color, Palette::neon().accent(0));
                assert_eq!(stops[1].color, Palette::neon().accent(7));
                assert_eq!(stops[2].color, BLACK);
            }
            other => panic!("unexpected background op {other:?}"),
        }
    }

    #[test]
    fn test_same_seed_same_plan() {
        assert_eq!(plan(77, "Aspen"), plan(77, "Aspen"));
        assert_ne!(plan(77, "Aspen"), plan(78, "Aspen"));
    }

    #[test]
    fn test_subject_does_not_affect_randomness() {
        let a = plan(3, "Golden");
        let b = plan(3, "Denver");
        let blobs_a: Vec<&DrawOp> = a.layer(Layer::Blobs).collect();
        let blobs_b: Vec<&DrawOp> = b.layer(Layer::Blobs).collect();
        assert_eq!(blobs_a, blobs_b);
    }
}
