//! Test utilities and mock types for Glow development.
//!
//! Provides a deterministic mock of the collision [`Target`] trait and
//! fixture constructors for small grids and synthetic particle
//! populations (see [`fixtures`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use glow_collisions::Target;
use glow_core::Vec3;
use rand::RngCore;

/// Mock collision target returning a fixed velocity for every sample.
///
/// Removes thermal randomness from collision tests: kinematics become
/// exactly predictable for a given reaction channel.
pub struct MockTarget {
    density: f64,
    velocity: Vec3,
}

impl MockTarget {
    /// A target of the given density whose every sampled partner moves
    /// with `velocity`.
    pub fn new(density: f64, velocity: Vec3) -> Self {
        Self { density, velocity }
    }

    /// A stationary target (every partner at rest).
    pub fn at_rest(density: f64) -> Self {
        Self::new(density, Vec3::ZERO)
    }
}

impl Target for MockTarget {
    fn density(&self) -> f64 {
        self.density
    }

    fn sample_velocity(&self, _rng: &mut dyn RngCore) -> Vec3 {
        self.velocity
    }
}
