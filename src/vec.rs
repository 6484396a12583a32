//! Planar point/vector math.

use crate::float::Float;
use core::ops::{Add, AddAssign, MulAssign, Neg, Sub};

/// 2D point or displacement in surface pixels.
///
/// Every body owns its vectors outright; nothing is shared between bodies.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    pub fn length_sq(self) -> F {
        self.x * self.x + self.y * self.y
    }

    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Uniformly scaled copy.
    pub fn scale(self, s: F) -> Self {
        Vec2 { x: self.x * s, y: self.y * s }
    }

    /// Signed angle (radians) of the direction from `self` towards `other`.
    pub fn angle_to(self, other: Self) -> F {
        F::atan2(other.y - self.y, other.x - self.x)
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> F {
        Self::distance_between(self, other)
    }

    pub fn distance_between(a: Self, b: Self) -> F {
        Self::difference(a, b).length()
    }

    /// `a - b` as a fresh vector.
    pub fn difference(a: Self, b: Self) -> Self {
        Vec2 { x: a.x - b.x, y: a.y - b.y }
    }

    /// Unit vector pointing along `angle`, scaled by `magnitude`.
    pub fn from_polar(angle: F, magnitude: F) -> Self {
        Vec2 { x: angle.cos() * magnitude, y: angle.sin() * magnitude }
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Self::difference(self, rhs) }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
    }
}

impl<F: Float> MulAssign<F> for Vec2<F> {
    fn mul_assign(&mut self, rhs: F) {
        self.x = self.x * rhs;
        self.y = self.y * rhs;
    }
}
