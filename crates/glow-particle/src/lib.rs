//! Charged-particle populations and the kernels that mutate them.
//!
//! A [`ChargedSpecies`] is a structure-of-arrays population with a
//! shared charge and mass. Populations are seeded once at simulation
//! start ([`maxwellian_emitter`]), advanced in place by the pusher
//! ([`move_particles`]), and trimmed by the absorbing boundary
//! ([`TiledBoundarySet`]). Only the boundary and collision kernels may
//! reorder or compact a population; the orchestrator itself never does.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod emitter;
pub mod pusher;
pub mod species;

pub use boundary::{
    absorbing_rectangle, BoundaryError, BoundaryKind, TiledBoundary, TiledBoundarySet,
};
pub use emitter::maxwellian_emitter;
pub use pusher::move_particles;
pub use species::ChargedSpecies;
