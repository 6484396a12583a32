//! Seeding a particle field from a text mask and driving it frame by frame.

use crate::color::{particle_color, Background};
use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::float::Float;
use crate::mask::TextureMask;
use crate::observer::{FrameObserver, NoOpFrameObserver};
use crate::particle::{Particle, ParticleId, Source};
use crate::surface::Surface;
use crate::text::{sample_text, TextBackend};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use rand::Rng;

/// Host-driven state that changes between frames.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationState<F: Float> {
    /// Drawing surface size in pixels.
    pub width: F,
    pub height: F,
    /// The pointer-following repulsor inside the particle arena.
    pub repulsor: ParticleId,
}

/// A field of anchored particles plus the pointer repulsor pushing them.
///
/// Particles live in one arena; sources are referenced by [`ParticleId`].
/// The repulsor is pinned and only moves through [`Simulation::set_pointer`].
pub struct Simulation<F: Float> {
    bodies: AllocVec<Particle<F>>,
    state: SimulationState<F>,
    config: FieldConfig<F>,
    background: Background<F>,
    snapshot: AllocVec<Source<F>>,
}

impl<F: Float> Simulation<F> {
    /// An empty field with just the repulsor, placed near the surface centre.
    pub fn new(width: F, height: F, config: FieldConfig<F>) -> Self {
        let center = Vec2::new(width * F::half(), height * F::half());
        let repulsor = Particle::repulsor(center + config.repulsor_offset, config.repulsor_mass);
        let background = background_for(width, height, &config);
        Simulation {
            bodies: alloc::vec![repulsor],
            state: SimulationState { width, height, repulsor: ParticleId(0) },
            config,
            background,
            snapshot: AllocVec::new(),
        }
    }

    /// Seed one spring per occupied sampling block of `mask`, with the mask
    /// centred on a `width x height` surface.
    ///
    /// Each block is tested at one pixel, `block_size / 2` into its top row.
    /// Radius, stiffness, damping and the start offset from the anchor are
    /// drawn from `rng` using the ranges in `config`. An empty mask or a
    /// zero-size surface produces a field without springs.
    pub fn from_mask<R: Rng + ?Sized>(
        mask: &TextureMask,
        width: F,
        height: F,
        config: FieldConfig<F>,
        rng: &mut R,
    ) -> Result<Self, FieldError> {
        let block = config.block_size;
        if block == 0 {
            return Err(FieldError::InvalidBlockSize);
        }

        let mut sim = Simulation::new(width, height, config);
        if mask.is_empty() || !(width > F::zero() && height > F::zero()) {
            return Ok(sim);
        }

        let (mask_w, mask_h) = (mask.width(), mask.height());
        let origin = Vec2::new(
            (width - F::from_f32(mask_w as f32)) * F::half(),
            (height - F::from_f32(mask_h as f32)) * F::half(),
        );
        let repulsor = sim.state.repulsor;

        for i in 0..mask_w.div_ceil(block) {
            for j in 0..mask_h.div_ceil(block) {
                let index = j * block * mask_w + i * block + block / 2;
                if !mask.is_present_at(index) {
                    continue;
                }

                let center = origin
                    + Vec2::new(
                        F::from_f32((i * block) as f32),
                        F::from_f32((j * block) as f32),
                    );
                let mut spring = sim.seed_spring(center, rng);
                spring.add_source(repulsor);
                sim.bodies.push(spring);
            }
        }

        Ok(sim)
    }

    /// Rasterize `text` with `backend` and seed a field from the result.
    #[allow(clippy::too_many_arguments)]
    pub fn from_text<B: TextBackend + ?Sized, R: Rng + ?Sized>(
        text: &str,
        font_size: f32,
        backend: &mut B,
        width: F,
        height: F,
        config: FieldConfig<F>,
        rng: &mut R,
    ) -> Result<Self, FieldError> {
        let mask = sample_text(text, font_size, backend)?;
        Self::from_mask(&mask, width, height, config, rng)
    }

    fn seed_spring<R: Rng + ?Sized>(&self, center: Vec2<F>, rng: &mut R) -> Particle<F> {
        let c = &self.config;
        let mut random = || F::from_f32(rng.gen::<f32>());

        let radius = c.max_size * F::half() + random() * c.max_size * F::half();
        let stiffness = c.stiffness_min + random() * c.stiffness_spread;
        let damping = c.damping_min + random() * c.damping_spread;
        let jitter_x = (random() - random()) * c.max_offset_x;
        let jitter_y = (random() - random()) * c.max_offset_y;

        let position = center + Vec2::new(jitter_x, jitter_y);
        Particle::spring(position, center, radius, stiffness, damping)
    }

    /// Append a particle to the arena and return its id.
    pub fn add_particle(&mut self, particle: Particle<F>) -> ParticleId {
        let id = ParticleId(self.bodies.len());
        self.bodies.push(particle);
        id
    }

    /// Snap the repulsor to the pointer. No smoothing; last call wins.
    pub fn set_pointer(&mut self, x: F, y: F) {
        let id = self.state.repulsor.0;
        self.bodies[id].move_to(Vec2::new(x, y));
    }

    /// The surface changed size. Anchors stay where they were seeded.
    pub fn resize(&mut self, width: F, height: F) {
        self.state.width = width;
        self.state.height = height;
        self.background = background_for(width, height, &self.config);
    }

    /// Advance every particle one tick without drawing.
    pub fn step(&mut self) {
        self.capture_sources();
        for body in self.bodies.iter_mut() {
            body.apply_physics(&self.snapshot, self.config.min_distance);
        }
    }

    /// Clear the surface, then step and paint every particle.
    pub fn frame<S: Surface<F> + ?Sized>(&mut self, surface: &mut S) {
        self.frame_with_observer(surface, &mut NoOpFrameObserver);
    }

    pub fn frame_with_observer<S: Surface<F> + ?Sized, O: FrameObserver>(
        &mut self,
        surface: &mut S,
        observer: &mut O,
    ) {
        surface.fill_background(self.state.width, self.state.height, &self.background);

        self.capture_sources();
        let repulsor = self.state.repulsor.0;
        let mut painted = 0;
        for (_, body) in self.bodies.iter_mut().enumerate().filter(|(i, _)| *i != repulsor) {
            body.apply_physics(&self.snapshot, self.config.min_distance);
            let color = particle_color(body.radius, self.config.max_size, self.config.base_color);
            surface.fill_circle(body.position, body.radius, color);
            painted += 1;
        }
        observer.on_physics(painted);
        observer.on_draw(painted);
        observer.on_frame_complete();
    }

    /// Source state is read from a snapshot taken before anyone moves.
    fn capture_sources(&mut self) {
        self.snapshot.clear();
        self.snapshot.extend(self.bodies.iter().map(Particle::as_source));
    }

    /// All particles except the repulsor, in seeding order.
    pub fn particles(&self) -> impl Iterator<Item = &Particle<F>> {
        let repulsor = self.state.repulsor.0;
        self.bodies
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != repulsor)
            .map(|(_, p)| p)
    }

    pub fn particle_count(&self) -> usize {
        self.bodies.len() - 1
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle<F>> {
        self.bodies.get(id.0)
    }

    pub fn particle_mut(&mut self, id: ParticleId) -> Option<&mut Particle<F>> {
        self.bodies.get_mut(id.0)
    }

    pub fn repulsor(&self) -> &Particle<F> {
        &self.bodies[self.state.repulsor.0]
    }

    pub fn state(&self) -> &SimulationState<F> { &self.state }
    pub fn config(&self) -> &FieldConfig<F> { &self.config }
    pub fn background(&self) -> &Background<F> { &self.background }
}

fn background_for<F: Float>(width: F, height: F, config: &FieldConfig<F>) -> Background<F> {
    Background::radial(
        width,
        height,
        config.background_inner,
        config.background_outer,
        &config.background_colors,
    )
}
