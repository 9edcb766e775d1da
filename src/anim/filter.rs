//! Visual filter effects attached to object states.
//!
//! A state record may carry an ordered list of filters; composition order
//! matters (later filters apply on top of earlier ones). The wire kind
//! codes follow the SWF filter numbering the format inherited, which is why
//! the known values are not contiguous.

use glam::Vec2;

use crate::util::Rgba;

/// Filter kind codes as stored in the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum FilterKind {
    DropShadow = 0,
    Blur = 1,
    Glow = 2,
    ColorMatrix = 6,
}

impl FilterKind {
    /// Map a wire value to a known filter kind.
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::DropShadow),
            1 => Some(Self::Blur),
            2 => Some(Self::Glow),
            6 => Some(Self::ColorMatrix),
            _ => None,
        }
    }
}

/// Gaussian blur.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlurFilter {
    /// Blur kernel size (width, height) in points.
    pub size: Vec2,
}

/// 4x4 channel-mixing matrix with additive offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorMatrixFilter {
    /// Row-major mixing coefficients.
    pub matrix: [f32; 16],
    /// Additive per-channel offsets, stored pre-divided by 256.
    pub offsets: [f32; 4],
}

/// Outer or inner glow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowFilter {
    pub color: Rgba,
    pub size: Vec2,
    pub strength: f32,
    pub inner_glow: bool,
    pub knockout: bool,
}

/// Drop shadow with direction and distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropShadowFilter {
    pub color: Rgba,
    pub size: Vec2,
    pub angle: f32,
    pub distance: f32,
    pub strength: f32,
    pub inner_shadow: bool,
    pub knockout: bool,
}

/// One decoded filter effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Filter {
    Blur(BlurFilter),
    ColorMatrix(ColorMatrixFilter),
    Glow(GlowFilter),
    DropShadow(DropShadowFilter),
}

impl Filter {
    /// Kind tag of this filter.
    pub fn kind(&self) -> FilterKind {
        match self {
            Self::Blur(_) => FilterKind::Blur,
            Self::ColorMatrix(_) => FilterKind::ColorMatrix,
            Self::Glow(_) => FilterKind::Glow,
            Self::DropShadow(_) => FilterKind::DropShadow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes() {
        assert_eq!(FilterKind::from_u32(0), Some(FilterKind::DropShadow));
        assert_eq!(FilterKind::from_u32(1), Some(FilterKind::Blur));
        assert_eq!(FilterKind::from_u32(2), Some(FilterKind::Glow));
        assert_eq!(FilterKind::from_u32(6), Some(FilterKind::ColorMatrix));

        // SWF ids this format never emits (bevel, gradient glow, ...).
        for unknown in [3, 4, 5, 7, 42] {
            assert_eq!(FilterKind::from_u32(unknown), None);
        }
    }

    #[test]
    fn test_filter_kind_accessor() {
        let f = Filter::Blur(BlurFilter {
            size: Vec2::new(2.0, 2.0),
        });
        assert_eq!(f.kind(), FilterKind::Blur);

        let f = Filter::Glow(GlowFilter {
            color: Rgba::WHITE,
            size: Vec2::ZERO,
            strength: 1.0,
            inner_glow: false,
            knockout: false,
        });
        assert_eq!(f.kind(), FilterKind::Glow);
    }
}
