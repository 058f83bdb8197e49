//! Colors used by the fallback renderer

use std::fmt;

use crate::random::RandomSource;

/// An opaque sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// From `0xRRGGBB`
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

pub const BLACK: Rgb = Rgb::from_hex(0x000000);
pub const WHITE: Rgb = Rgb::from_hex(0xFFFFFF);
pub const EYE_YELLOW: Rgb = Rgb::from_hex(0xFFFF00);
pub const MOUTH_RED: Rgb = Rgb::from_hex(0xFF0000);
pub const WATERMARK_GREY: Rgb = Rgb::from_hex(0x888888);

/// The eight high-saturation deck colors, in accent order
pub const NEON: [Rgb; 8] = [
    Rgb::from_hex(0xFF0000), // red
    Rgb::from_hex(0x00FF00), // green
    Rgb::from_hex(0x0000FF), // blue
    Rgb::from_hex(0xFFFF00), // yellow
    Rgb::from_hex(0xFF00FF), // magenta
    Rgb::from_hex(0x00FFFF), // cyan
    Rgb::from_hex(0xFFA500), // orange
    Rgb::from_hex(0x8A2BE2), // blue-violet
];

/// Ordered accent colors plus the foreground and ink colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    accents: &'static [Rgb; 8],
    pub foreground: Rgb,
    pub ink: Rgb,
}

impl Palette {
    /// The eight high-saturation deck colors
    pub fn neon() -> Self {
        Self {
            accents: &NEON,
            foreground: WHITE,
            ink: BLACK,
        }
    }

    /// Accent at `index`, wrapping around
    pub fn accent(&self, index: usize) -> Rgb {
        self.accents[index % self.accents.len()]
    }

    /// Uniformly random accent, one draw
    pub fn pick(&self, rng: &mut dyn RandomSource) -> Rgb {
        self.accent(rng.next_index(self.accents.len()))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::neon()
    }
}
