//! Glow: a 2-D electrostatic particle-in-cell plasma simulator with
//! Monte-Carlo collisions.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Glow sub-crates. For most users, adding `glow` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```no_run
//! use glow::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut parameters = Parameters::case_1();
//! parameters.n_steps = 10_000;
//! parameters.n_steps_avg = 1_000;
//!
//! let mut simulation = Simulation::new(parameters)?;
//! glow::engine::diagnostics::setup_events(&mut simulation, "out")?;
//! simulation.run()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `glow-core` | `Vec2`/`Vec3`, injected physical constants |
//! | [`spatial`] | `glow-space` | Scalar/vector node grids, windowed averaging |
//! | [`particle`] | `glow-particle` | Species populations, seeding, pusher, boundaries |
//! | [`interpolate`] | `glow-interpolate` | Cloud-in-cell deposit and bilinear gather |
//! | [`em`] | `glow-em` | Charge density, Poisson solver, field derivation |
//! | [`collisions`] | `glow-collisions` | Cross sections, reactions, null-collision MCC |
//! | [`engine`] | `glow-engine` | Parameters, orchestrator, events, diagnostics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Vector types and the injected constants table (`glow-core`).
pub use glow_core as types;

/// Uniform field grids and the averaging accumulator (`glow-space`).
///
/// Provides [`spatial::ScalarGrid`], [`spatial::VectorGrid`], and
/// [`spatial::AverageGrid`] over a shared [`spatial::GridProp`].
pub use glow_space as spatial;

/// Charged-particle populations and kernels (`glow-particle`).
///
/// [`particle::ChargedSpecies`] plus the Maxwellian emitter, the
/// electrostatic pusher, and the absorbing tiled boundary.
pub use glow_particle as particle;

/// Particle-grid interpolation (`glow-interpolate`).
///
/// [`interpolate::weight_to_grid`] deposits particles onto nodes;
/// [`interpolate::field_at_particles`] gathers the field back.
pub use glow_interpolate as interpolate;

/// Electrostatic field solve (`glow-em`).
///
/// [`em::charge_density`], the [`em::StructPoissonSolver`], and
/// [`em::electric_field`] derivation.
pub use glow_em as em;

/// Monte-Carlo collisions (`glow-collisions`).
///
/// Cross-section tables, reaction channels, and the null-collision
/// [`collisions::MccReactionSet`].
pub use glow_collisions as collisions;

/// Simulation orchestrator, event bus, and diagnostics (`glow-engine`).
///
/// [`engine::Simulation`] runs the per-step pipeline; diagnostics
/// attach through [`engine::EventBus`].
pub use glow_engine as engine;

/// Common imports for typical Glow usage.
///
/// ```rust
/// use glow::prelude::*;
/// ```
pub mod prelude {
    pub use glow_collisions::{CrossSection, MccReactionSet, Reaction, ReactionKind};
    pub use glow_core::{Constants, Vec2, Vec3};
    pub use glow_engine::{
        ConfigError, EventAction, EventBus, Parameters, RunError, SimEvent, Simulation, StateView,
    };
    pub use glow_particle::ChargedSpecies;
    pub use glow_space::{AverageGrid, GridProp, ScalarGrid, VectorGrid};
}
