//! Monte-Carlo collisions against a background neutral gas.
//!
//! Each species carries an [`MccReactionSet`]: a list of reactions with
//! energy-dependent cross sections, a background-gas target, and the
//! null-collision bookkeeping that turns them into per-step collision
//! sampling. Collisions mutate particle velocities in place and may
//! create particles (ionization) or effectively destroy them (charge
//! exchange hands the ion a fresh thermal velocity).
//!
//! Ionization spawns particles of *both* species; since a reaction set
//! only holds its own projectile population, `react_all` returns the
//! spawned particles and the orchestrator appends them to the right
//! populations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cross_section;
pub mod mcc;
pub mod reaction;
pub mod target;

pub use cross_section::{CrossSection, TableError};
pub use mcc::{MccReactionSet, ReactionConfig, RelativeDynamics, Spawned};
pub use reaction::{Reaction, ReactionKind};
pub use target::{StaticUniformTarget, Target};
