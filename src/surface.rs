//! The host drawing surface.

use crate::color::{Background, Rgb};
use crate::float::Float;
use crate::vec::Vec2;

/// Minimal 2D drawing surface a host has to provide.
///
/// A browser canvas, a software framebuffer or a test recorder all fit.
pub trait Surface<F: Float> {
    /// Paint the whole `width x height` area with `background`.
    fn fill_background(&mut self, width: F, height: F, background: &Background<F>);

    /// Paint a filled circle.
    fn fill_circle(&mut self, center: Vec2<F>, radius: F, color: Rgb);
}
