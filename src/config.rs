//! Tunables for seeding and driving a particle field.

use crate::color::Rgb;
use crate::float::Float;
use crate::particle::MIN_SOURCE_DISTANCE;
use crate::vec::Vec2;

/// Configuration for seeding and stepping a [`crate::Simulation`].
///
/// Defaults reproduce the classic look: 4px sampling blocks, a -10000
/// mass pointer repulsor and violet particles between 1.5 and 3px.
///
/// # Builder Pattern
/// ```
/// use springtext::FieldConfig;
///
/// let config: FieldConfig<f32> = FieldConfig::new()
///     .with_block_size(6)
///     .with_repulsor_mass(-20000.0)
///     .with_jitter(20.0, 5.0);
/// assert_eq!(config.block_size, 6);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig<F: Float> {
    /// Side of the square sampling block in mask pixels. Default: 4.
    pub block_size: usize,
    /// Floor applied to particle-source distances. Default: 20.
    pub min_distance: F,
    /// Mass of the pointer repulsor. Default: -10000.
    pub repulsor_mass: F,
    /// Repulsor start position relative to the surface centre. Default: (-50, -10).
    pub repulsor_offset: Vec2<F>,
    /// Largest particle radius; radii are drawn from `[max/2, max)`. Default: 3.
    pub max_size: F,
    /// Stiffness is `min + random * spread`. Default: 0.002 + [0, 0.05).
    pub stiffness_min: F,
    pub stiffness_spread: F,
    /// Damping is `min + random * spread`. Default: 0.01 + [0, 0.1).
    pub damping_min: F,
    pub damping_spread: F,
    /// Maximum start offset from the anchor, horizontal. Default: 40.
    pub max_offset_x: F,
    /// Maximum start offset from the anchor, vertical. Default: 10.
    pub max_offset_y: F,
    /// Fractional RGB of a full-size particle. Default: (0.462, 0.051, 1.0).
    pub base_color: [f32; 3],
    /// Background gradient radii. Default: 280 -> 520.
    pub background_inner: F,
    pub background_outer: F,
    pub background_colors: alloc::vec::Vec<Rgb>,
}

impl<F: Float> FieldConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        FieldConfig {
            block_size: 4,
            min_distance: F::from_f32(MIN_SOURCE_DISTANCE),
            repulsor_mass: F::from_f32(-10_000.0),
            repulsor_offset: Vec2::new(F::from_f32(-50.0), F::from_f32(-10.0)),
            max_size: F::from_f32(3.0),
            stiffness_min: F::from_f32(0.002),
            stiffness_spread: F::from_f32(0.05),
            damping_min: F::from_f32(0.01),
            damping_spread: F::from_f32(0.1),
            max_offset_x: F::from_f32(40.0),
            max_offset_y: F::from_f32(10.0),
            base_color: [0.462, 0.051, 1.0],
            background_inner: F::from_f32(280.0),
            background_outer: F::from_f32(520.0),
            background_colors: alloc::vec![Rgb::WHITE],
        }
    }

    /// Set the sampling block size.
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Set the distance floor for source pulls.
    pub fn with_min_distance(mut self, min_distance: F) -> Self {
        self.min_distance = min_distance;
        self
    }

    /// Set the pointer repulsor's mass.
    pub fn with_repulsor_mass(mut self, mass: F) -> Self {
        self.repulsor_mass = mass;
        self
    }

    /// Set the largest particle radius.
    pub fn with_max_size(mut self, max_size: F) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the stiffness range as `[min, min + spread)`.
    pub fn with_stiffness(mut self, min: F, spread: F) -> Self {
        self.stiffness_min = min;
        self.stiffness_spread = spread;
        self
    }

    /// Set the damping range as `[min, min + spread)`.
    pub fn with_damping(mut self, min: F, spread: F) -> Self {
        self.damping_min = min;
        self.damping_spread = spread;
        self
    }

    /// Set the maximum start offsets. Zero places particles on their anchors.
    pub fn with_jitter(mut self, max_offset_x: F, max_offset_y: F) -> Self {
        self.max_offset_x = max_offset_x;
        self.max_offset_y = max_offset_y;
        self
    }

    pub fn with_base_color(mut self, base_color: [f32; 3]) -> Self {
        self.base_color = base_color;
        self
    }
}

impl<F: Float> Default for FieldConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
