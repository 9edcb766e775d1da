//! Color types for the animation model.
//!
//! GAF carries per-object color state as a multiply-then-add transform over
//! RGBA channels, plus packed byte colors inside filter records.

/// An RGBA color with f32 channels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Opaque white (all channels 1.0).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Transparent black (all channels 0.0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a color from channel values.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Per-channel multiply-then-add color transform.
///
/// Applied as `out = in * mult + offset` per channel; the identity leaves
/// the rendered color untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorTransform {
    /// Multiplicative coefficient per channel.
    pub mult: Rgba,
    /// Additive coefficient per channel.
    pub offset: Rgba,
}

impl ColorTransform {
    /// Identity transform: multiplier 1.0 and offset 0.0 for every channel.
    pub const IDENTITY: Self = Self {
        mult: Rgba::WHITE,
        offset: Rgba::ZERO,
    };

    /// Check whether this transform leaves colors untouched.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for ColorTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
