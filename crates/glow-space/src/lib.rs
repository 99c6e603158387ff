//! Uniform rectangular field grids.
//!
//! All field quantities in the simulation (densities, charge density,
//! potential, electric field) live on nx×ny node grids with a shared
//! physical extent. Grids are row-major over x then y, 0-indexed, with
//! node spacing `dx = lx/(nx-1)` and `dy = ly/(ny-1)` so the last node
//! sits exactly on the domain edge.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod average;
pub mod error;
pub mod grid;

pub use average::AverageGrid;
pub use error::GridError;
pub use grid::{GridProp, ScalarGrid, VectorGrid};
