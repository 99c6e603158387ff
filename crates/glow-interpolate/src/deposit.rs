//! Cloud-in-cell deposition of particles onto grid nodes.

use crate::cell_of;
use glow_particle::ChargedSpecies;
use glow_space::ScalarGrid;

/// Deposit the particle count of `species` onto `grid`.
///
/// The grid is fully overwritten: every call produces a complete fresh
/// per-node count. Each particle contributes a total weight of 1 split
/// bilinearly over the four nodes of its cell, so the grid total equals
/// the number of in-domain particles exactly.
pub fn weight_to_grid(species: &ChargedSpecies, grid: &mut ScalarGrid) {
    grid.fill(0.0);
    let prop = *grid.prop();
    let (nx, ny) = (prop.nx(), prop.ny());
    let (dx, dy) = (prop.dx(), prop.dy());

    for p in species.positions() {
        let (i, fx) = cell_of(p.x, dx, nx);
        let (j, fy) = cell_of(p.y, dy, ny);
        grid.add(i, j, (1.0 - fx) * (1.0 - fy));
        grid.add(i + 1, j, fx * (1.0 - fy));
        grid.add(i, j + 1, (1.0 - fx) * fy);
        grid.add(i + 1, j + 1, fx * fy);
    }
}
