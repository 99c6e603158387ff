//! Bilinear gather of a vector field at particle positions.

use crate::cell_of;
use glow_core::Vec2;
use glow_particle::ChargedSpecies;
use glow_space::VectorGrid;

/// Gather `field` at each particle's position into `out`.
///
/// `out` is resized to the population length and fully overwritten.
/// Uses the same bilinear stencil as deposition.
pub fn field_at_particles(field: &VectorGrid, species: &ChargedSpecies, out: &mut Vec<Vec2>) {
    let prop = *field.prop();
    let (nx, ny) = (prop.nx(), prop.ny());
    let (dx, dy) = (prop.dx(), prop.dy());

    out.clear();
    out.reserve(species.len());
    for p in species.positions() {
        let (i, fx) = cell_of(p.x, dx, nx);
        let (j, fy) = cell_of(p.y, dy, ny);
        let e = field.get(i, j) * ((1.0 - fx) * (1.0 - fy))
            + field.get(i + 1, j) * (fx * (1.0 - fy))
            + field.get(i, j + 1) * ((1.0 - fx) * fy)
            + field.get(i + 1, j + 1) * (fx * fy);
        out.push(e);
    }
}
