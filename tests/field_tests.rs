mod common;

use common::{BlockFont, RecordingSurface};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use springtext::{
    sample_text, FieldConfig, FieldError, FrameObserver, Particle, Rgb, Simulation, TextureMask,
    Vec2,
};

fn ab_mask() -> TextureMask {
    sample_text("AB", 80.0, &mut BlockFont::new()).unwrap()
}

fn still_config() -> FieldConfig<f32> {
    FieldConfig::new().with_jitter(0.0, 0.0)
}

#[test]
fn ab_mask_dimensions_follow_metrics() {
    let mask = ab_mask();
    assert_eq!(mask.width(), 80);
    assert_eq!(mask.height(), 96);
    assert!(mask.coverage() > 0);
}

#[test]
fn seeds_one_spring_per_occupied_block() {
    let mask = ab_mask();
    let mut rng = SmallRng::seed_from_u64(1);
    let sim = Simulation::from_mask(&mask, 800.0f32, 600.0, FieldConfig::new(), &mut rng).unwrap();
    // Glyph boxes span x in [10, 30) and [50, 70), y in [20, 80): five
    // sample columns per glyph, fifteen sample rows.
    assert_eq!(sim.particle_count(), 150);
}

#[test]
fn blank_mask_seeds_nothing() {
    let mask = TextureMask::from_coverage(80, 96, &vec![0; 80 * 96]).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    let sim = Simulation::from_mask(&mask, 800.0f32, 600.0, FieldConfig::new(), &mut rng).unwrap();
    assert_eq!(sim.particle_count(), 0);
    assert_eq!(sim.particles().count(), 0);
}

#[test]
fn empty_text_gives_empty_field() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut font = BlockFont::new();
    let sim = Simulation::from_text("", 80.0, &mut font, 800.0f32, 600.0, FieldConfig::new(), &mut rng)
        .unwrap();
    assert_eq!(sim.particle_count(), 0);
    assert_eq!(font.rasterize_calls, 0);
}

#[test]
fn zero_size_surface_gives_empty_field() {
    let mask = ab_mask();
    let mut rng = SmallRng::seed_from_u64(1);
    let sim = Simulation::from_mask(&mask, 0.0f32, 0.0, FieldConfig::new(), &mut rng).unwrap();
    assert_eq!(sim.particle_count(), 0);

    let mut surface = RecordingSurface::default();
    let mut sim = sim;
    sim.frame(&mut surface);
    assert_eq!(surface.backgrounds.len(), 1);
    assert!(surface.circles.is_empty());
}

#[test]
fn zero_block_size_is_rejected() {
    let mask = ab_mask();
    let mut rng = SmallRng::seed_from_u64(1);
    let config = FieldConfig::new().with_block_size(0);
    let result = Simulation::from_mask(&mask, 800.0f32, 600.0, config, &mut rng);
    assert_eq!(result.err(), Some(FieldError::InvalidBlockSize));
}

#[test]
fn anchors_are_centered_on_the_surface() {
    let mask = ab_mask();
    let mut rng = SmallRng::seed_from_u64(3);
    let sim = Simulation::from_mask(&mask, 800.0f32, 600.0, still_config(), &mut rng).unwrap();

    // Mask origin is ((800 - 80) / 2, (600 - 96) / 2) = (360, 252); the
    // first occupied block is column 2, row 5.
    let first = sim.particles().next().unwrap();
    assert_eq!(first.anchor().unwrap().center(), Vec2::new(368.0, 272.0));
    assert_eq!(first.position, first.anchor().unwrap().center());

    for p in sim.particles() {
        let c = p.anchor().unwrap().center();
        assert!(c.x >= 360.0 && c.x < 440.0);
        assert!(c.y >= 252.0 && c.y < 348.0);
    }
}

#[test]
fn seeded_parameters_stay_in_range() {
    let mask = ab_mask();
    let mut rng = SmallRng::seed_from_u64(11);
    let sim = Simulation::from_mask(&mask, 800.0f32, 600.0, FieldConfig::new(), &mut rng).unwrap();
    let repulsor = sim.state().repulsor;

    for p in sim.particles() {
        let anchor = p.anchor().unwrap();
        assert!(p.radius >= 1.5 && p.radius <= 3.0, "radius {}", p.radius);
        assert!(anchor.stiffness() >= 0.002 && anchor.stiffness() <= 0.052);
        assert!(p.damping >= 0.01 && p.damping <= 0.11);
        let offset = p.position - anchor.center();
        assert!(offset.x.abs() <= 40.0 && offset.y.abs() <= 10.0, "offset {:?}", offset);
        assert_eq!(p.sources(), &[repulsor]);
        assert_eq!(p.mass, 1.0);
    }
}

#[test]
fn repulsor_starts_near_center_and_snaps_to_pointer() {
    let mut sim: Simulation<f32> = Simulation::new(800.0, 600.0, FieldConfig::new());
    assert_eq!(sim.repulsor().position, Vec2::new(350.0, 290.0));
    assert_eq!(sim.repulsor().mass, -10_000.0);

    sim.set_pointer(12.0, 34.0);
    sim.set_pointer(56.0, 78.0);
    assert_eq!(sim.repulsor().position, Vec2::new(56.0, 78.0));
    sim.step();
    assert_eq!(sim.repulsor().position, Vec2::new(56.0, 78.0));
}

#[test]
fn resize_keeps_anchors() {
    let mask = ab_mask();
    let mut rng = SmallRng::seed_from_u64(5);
    let mut sim = Simulation::from_mask(&mask, 800.0f32, 600.0, still_config(), &mut rng).unwrap();
    let before: Vec<_> = sim.particles().map(|p| p.anchor().unwrap().center()).collect();

    sim.resize(1024.0, 768.0);

    let after: Vec<_> = sim.particles().map(|p| p.anchor().unwrap().center()).collect();
    assert_eq!(before, after);
    assert_eq!(sim.state().width, 1024.0);
    assert_eq!(sim.background().center, Vec2::new(512.0, 384.0));
}

#[test]
fn frame_clears_then_paints_every_particle() {
    let mask = ab_mask();
    let mut rng = SmallRng::seed_from_u64(9);
    let mut sim = Simulation::from_mask(&mask, 800.0f32, 600.0, FieldConfig::new(), &mut rng).unwrap();
    let mut surface = RecordingSurface::default();

    sim.frame(&mut surface);

    assert_eq!(surface.backgrounds, vec![(800.0, 600.0, Rgb::WHITE)]);
    assert_eq!(surface.circles.len(), sim.particle_count());
    for ((center, radius, color), p) in surface.circles.iter().zip(sim.particles()) {
        assert_eq!(*center, p.position);
        assert_eq!(*radius, p.radius);
        assert_eq!(color.g, 13);
        assert_eq!(color.b, 255);
        assert!(color.r >= 58 && color.r <= 117);
    }
}

#[derive(Default)]
struct Counter {
    physics: usize,
    drawn: usize,
    frames: usize,
}

impl FrameObserver for Counter {
    fn on_physics(&mut self, particles: usize) {
        self.physics += particles;
    }
    fn on_draw(&mut self, painted: usize) {
        self.drawn += painted;
    }
    fn on_frame_complete(&mut self) {
        self.frames += 1;
    }
}

#[test]
fn observer_sees_every_frame() {
    let mask = ab_mask();
    let mut rng = SmallRng::seed_from_u64(2);
    let mut sim = Simulation::from_mask(&mask, 800.0f32, 600.0, FieldConfig::new(), &mut rng).unwrap();
    let mut surface = RecordingSurface::default();
    let mut counter = Counter::default();

    for _ in 0..3 {
        sim.frame_with_observer(&mut surface, &mut counter);
    }

    assert_eq!(counter.frames, 3);
    assert_eq!(counter.physics, 3 * 150);
    assert_eq!(counter.drawn, 3 * 150);
}

#[test]
fn extra_pinned_particles_are_painted_but_stay_put() {
    let mut sim = Simulation::new(800.0f32, 600.0, FieldConfig::new());
    let marker = Particle::repulsor(Vec2::new(100.0, 100.0), 0.0);
    let id = sim.add_particle(marker);
    assert_eq!(sim.particle_count(), 1);

    let mut surface = RecordingSurface::default();
    let mut counter = Counter::default();
    sim.frame_with_observer(&mut surface, &mut counter);

    assert_eq!(counter.physics, 1);
    assert_eq!(counter.drawn, 1);
    assert_eq!(surface.circles.len(), 1);
    assert_eq!(surface.circles[0].0, Vec2::new(100.0, 100.0));
    assert_eq!(sim.particle(id).unwrap().position, Vec2::new(100.0, 100.0));
}

#[test]
fn jittered_particles_settle_onto_their_anchors() {
    let mask = ab_mask();
    let mut rng = SmallRng::seed_from_u64(4);
    let mut sim = Simulation::from_mask(&mask, 800.0f32, 600.0, FieldConfig::new(), &mut rng).unwrap();
    // Keep the repulsor far away so only the springs act.
    sim.set_pointer(-100_000.0, -100_000.0);
    for _ in 0..5000 {
        sim.step();
    }
    for p in sim.particles() {
        let c = p.anchor().unwrap().center();
        assert!(p.position.distance(c) < 0.5, "{:?} vs {:?}", p.position, c);
    }
}
