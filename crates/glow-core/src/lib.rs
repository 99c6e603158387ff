//! Core value types for the Glow particle-in-cell simulator.
//!
//! This is the leaf crate with zero dependencies. It defines the
//! small `Copy` vector types used for particle state and field values,
//! and the injected physical-constants table.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod constants;
pub mod vec;

pub use constants::Constants;
pub use vec::{Vec2, Vec3};
