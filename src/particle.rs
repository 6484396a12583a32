//! Damped point masses pushed around by inverse-square sources.

use crate::float::Float;
use crate::spring::Anchor;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Closest distance used when evaluating a source's pull.
///
/// Keeps the inverse-square force bounded when a particle sits on top of
/// its source.
pub const MIN_SOURCE_DISTANCE: f32 = 20.0;

/// Index of a particle inside a [`crate::Simulation`] arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParticleId(pub usize);

/// Position and mass of a particle, captured before a step so that
/// every particle reads the same source state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Source<F: Float> {
    pub position: Vec2<F>,
    pub mass: F,
}

/// A damped point mass, optionally tied to an [`Anchor`].
///
/// Sources are arena indices, not owned particles: a source influences
/// this particle but its lifetime is managed by the arena.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
    pub acceleration: Vec2<F>,
    pub radius: F,
    pub mass: F,
    /// Fraction of velocity removed every step, in `[0, 1)`.
    pub damping: F,
    pub pinned: bool,
    anchor: Option<Anchor<F>>,
    sources: AllocVec<ParticleId>,
}

impl<F: Float> Particle<F> {
    pub fn new(position: Vec2<F>, radius: F, damping: F) -> Self {
        debug_assert!(
            damping >= F::zero() && damping < F::one(),
            "damping must be in [0, 1)"
        );
        Particle {
            position,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            radius,
            mass: F::one(),
            damping,
            pinned: false,
            anchor: None,
            sources: AllocVec::new(),
        }
    }

    /// A particle pulled back towards `center` with the given stiffness.
    pub fn spring(position: Vec2<F>, center: Vec2<F>, radius: F, stiffness: F, damping: F) -> Self {
        let mut particle = Particle::new(position, radius, damping);
        particle.anchor = Some(Anchor::new(center, stiffness));
        particle
    }

    /// An externally driven source with zero radius and damping. A strongly
    /// negative mass turns its pull into a push.
    pub fn repulsor(position: Vec2<F>, mass: F) -> Self {
        let mut particle = Particle::new(position, F::zero(), F::zero());
        particle.mass = mass;
        particle.pinned = true;
        particle
    }

    pub fn anchor(&self) -> Option<&Anchor<F>> {
        self.anchor.as_ref()
    }

    pub fn sources(&self) -> &[ParticleId] {
        &self.sources
    }

    pub fn add_source(&mut self, id: ParticleId) {
        self.sources.push(id);
    }

    pub fn as_source(&self) -> Source<F> {
        Source { position: self.position, mass: self.mass }
    }

    /// Velocity change caused by one source this step.
    ///
    /// Magnitude is `(source.mass + self.mass) / d²` with `d` floored at
    /// `min_distance`; a non-finite magnitude counts as no force.
    pub fn pull_from(&self, source: &Source<F>, min_distance: F) -> Vec2<F> {
        let distance = Vec2::distance_between(source.position, self.position).max(min_distance);
        let angle = self.position.angle_to(source.position);
        let force = (source.mass + self.mass) / (distance * distance);
        let force = if force.is_finite() { force } else { F::zero() };
        Vec2::from_polar(angle, force)
    }

    /// Advance one tick.
    ///
    /// Order: anchor force, source pulls, constant acceleration, damping,
    /// then position. `sources` is indexed by [`ParticleId`]; ids without a
    /// matching entry are skipped. Pinned particles do not move.
    pub fn apply_physics(&mut self, sources: &[Source<F>], min_distance: F) {
        if self.pinned {
            return;
        }

        if let Some(anchor) = self.anchor.as_mut() {
            self.velocity += anchor.restoring_force(self.position);
        }

        for id in &self.sources {
            if let Some(source) = sources.get(id.0) {
                let pull = self.pull_from(source, min_distance);
                self.velocity += pull;
            }
        }

        self.velocity += self.acceleration;
        self.velocity *= F::one() - self.damping;
        self.position += self.velocity;
    }

    /// Snap a pinned particle to `position`. Free particles ignore this.
    pub fn move_to(&mut self, position: Vec2<F>) {
        if self.pinned {
            self.position = position;
        }
    }
}
