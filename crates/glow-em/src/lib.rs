//! Electrostatic field solve: charge density, Poisson solve, E = -∇φ.
//!
//! The per-step field pipeline is `charge_density` →
//! [`StructPoissonSolver::solve`] → [`electric_field`]. The solver is
//! configured once with the domain shape and its boundary regions;
//! every step it receives the fresh charge-density grid and the current
//! simulation time (the driven edge voltage is time-dependent).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod charge;
pub mod field;
pub mod poisson;

pub use charge::charge_density;
pub use field::electric_field;
pub use poisson::{
    BoundaryValue, CellKind, DomainProp, Region, RegionError, SolverError, StructPoissonSolver,
};
