//! Particle fields that trace rendered text.
//!
//! `springtext` rasterizes a string into a presence mask, seeds a spring
//! anchored particle on every occupied block of that mask and lets a
//! pointer-driven repulsor push the particles around. Each particle is a
//! damped point mass; anchored ones are pulled back towards their rest
//! position every tick.
//!
//! # Features
//!
//! - **Inverse-square sources**: distance floored so forces stay bounded
//! - **Spring anchors**: Hookean pull towards a fixed centre
//! - **Text masks**: multi-line layout with any [`TextBackend`], including
//!   a TrueType backend on `ttf-parser`
//! - **Host agnostic**: drawing goes through the [`Surface`] trait
//! - **Observable**: monitor frames via the [`FrameObserver`] trait
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod spring;
pub mod particle;
pub mod mask;
pub mod text;
pub mod raster;
pub mod font;
pub mod color;
pub mod surface;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use spring::Anchor;
pub use particle::{Particle, ParticleId, Source, MIN_SOURCE_DISTANCE};
pub use mask::TextureMask;
pub use text::{sample_text, layout_text, TextBackend, TextLayout, LINE_HEIGHT_FACTOR};
pub use font::TtfBackend;
pub use color::{particle_color, Background, Rgb};
pub use surface::Surface;
pub use simulation::{Simulation, SimulationState};
pub use config::FieldConfig;
pub use observer::{FrameObserver, NoOpFrameObserver};
pub use error::FieldError;
