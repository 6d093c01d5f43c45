//! Visual defaults for the bubble and pointer. The core never draws; these
//! values are handed to the embedding renderer as-is.

/// Straight-alpha RGBA color, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self::from_rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::from_rgba(r, g, b, 1.0)
    }

    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Same color with its alpha scaled, for fading during animations.
    pub fn scale_alpha(self, factor: f32) -> Self {
        Self {
            a: self.a * factor.clamp(0.0, 1.0),
            ..self
        }
    }
}

/// Appearance of the content bubble.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleStyle {
    pub background: Color,
    pub padding_vertical: f32,
    pub padding_horizontal: f32,
    pub corner_radius: f32,
    pub margin_horizontal: f32,
}

impl Default for BubbleStyle {
    fn default() -> Self {
        Self {
            // #F3F2F7
            background: Color::from_rgb8(243, 242, 247),
            padding_vertical: 12.0,
            padding_horizontal: 16.0,
            corner_radius: 8.0,
            margin_horizontal: 8.0,
        }
    }
}
