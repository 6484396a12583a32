//! Hookean anchors that pull a particle back to its rest position.

use crate::float::Float;
use crate::vec::Vec2;

/// Fixed rest point plus the spring constant pulling a particle towards it.
///
/// `center` never changes after construction. `force` holds the restoring
/// force computed on the most recent step and is overwritten every step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Anchor<F: Float> {
    center: Vec2<F>,
    stiffness: F,
    force: Vec2<F>,
}

impl<F: Float> Anchor<F> {
    pub fn new(center: Vec2<F>, stiffness: F) -> Self {
        debug_assert!(stiffness > F::zero(), "anchor stiffness must be positive");
        Anchor {
            center,
            stiffness,
            force: Vec2::zero(),
        }
    }

    /// Recompute `(center - position) * stiffness` and return it.
    pub fn restoring_force(&mut self, position: Vec2<F>) -> Vec2<F> {
        let mut force = Vec2::difference(self.center, position);
        force *= self.stiffness;
        self.force = force;
        force
    }

    pub fn center(&self) -> Vec2<F> { self.center }
    pub fn stiffness(&self) -> F { self.stiffness }

    /// Restoring force from the last step (zero before the first one).
    pub fn force(&self) -> Vec2<F> { self.force }

    /// Offset of `position` from the rest point is below `eps`.
    pub fn is_settled(&self, position: Vec2<F>, eps: F) -> bool {
        Vec2::difference(position, self.center).length_sq() < eps * eps
    }
}
