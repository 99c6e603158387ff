//! Particle-grid interpolation kernels.
//!
//! Two directions: [`weight_to_grid`] deposits particle counts onto the
//! nodes of a scalar grid (cloud-in-cell / bilinear weighting), and
//! [`field_at_particles`] gathers a vector field at each particle's
//! continuous position with the matching bilinear stencil. Using the
//! same stencil in both directions avoids spurious self-forces.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod deposit;
pub mod gather;

pub use deposit::weight_to_grid;
pub use gather::field_at_particles;

/// Locate the cell containing physical coordinate `x` on an axis with
/// `n` nodes and spacing `d`, returning the lower node index and the
/// fractional offset inside the cell.
///
/// Out-of-range coordinates are clamped to the edge cells, so a
/// particle sitting exactly on the upper domain edge lands in the last
/// cell with fraction 1.
#[inline]
pub(crate) fn cell_of(x: f64, d: f64, n: usize) -> (usize, f64) {
    let s = x / d;
    let i = (s.floor() as isize).clamp(0, n as isize - 2) as usize;
    let frac = (s - i as f64).clamp(0.0, 1.0);
    (i, frac)
}
