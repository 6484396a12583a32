//! Particle fill colours and the background description handed to the host.

use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

const COLOR_MAX: f32 = 255.0;

/// 8-bit RGB colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// From fractional channels in `[0, 1]`; each is floored after scaling
    /// to 255 and clamped.
    pub fn from_fractions(r: f32, g: f32, b: f32) -> Self {
        let channel = |c: f32| libm::floorf(c * COLOR_MAX).clamp(0.0, COLOR_MAX) as u8;
        Rgb { r: channel(r), g: channel(g), b: channel(b) }
    }
}

/// Fill colour of a particle: `base` with its red channel scaled by
/// `radius / max_size`.
pub fn particle_color<F: Float>(radius: F, max_size: F, base: [f32; 3]) -> Rgb {
    let scale = if max_size > F::zero() { (radius / max_size).to_f32() } else { 0.0 };
    Rgb::from_fractions(base[0] * scale, base[1], base[2])
}

/// Radial background gradient, centred on the drawing surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Background<F: Float> {
    pub center: Vec2<F>,
    pub inner_radius: F,
    pub outer_radius: F,
    /// `(offset, colour)` pairs; offsets are `0, 1, 2, ...` in list order.
    pub stops: AllocVec<(F, Rgb)>,
}

impl<F: Float> Background<F> {
    pub fn radial(width: F, height: F, inner_radius: F, outer_radius: F, colors: &[Rgb]) -> Self {
        let mut offset = F::zero();
        let mut stops = AllocVec::with_capacity(colors.len());
        for &color in colors {
            stops.push((offset, color));
            offset = offset + F::one();
        }
        Background {
            center: Vec2::new(width * F::half(), height * F::half()),
            inner_radius,
            outer_radius,
            stops,
        }
    }

    /// Colour to use when the host cannot build gradients.
    pub fn solid(&self) -> Rgb {
        self.stops.first().map_or(Rgb::WHITE, |&(_, c)| c)
    }
}
