//! Reusable simulation test fixtures.
//!
//! Small grids and synthetic particle populations for kernel and
//! orchestrator tests:
//!
//! - [`unit_grid`] — an nx×ny grid over the unit square.
//! - [`monoenergetic`] — a population of identical particles.
//! - [`node_lattice`] — one particle sitting exactly on each interior
//!   node, so deposition results are exact.

use glow_core::{Vec2, Vec3};
use glow_particle::ChargedSpecies;
use glow_space::GridProp;

/// An nx×ny grid spanning the unit square.
///
/// # Panics
///
/// Panics if the shape is degenerate; fixtures use known-good values.
pub fn unit_grid(nx: usize, ny: usize) -> GridProp {
    match GridProp::new(nx, ny, 1.0, 1.0) {
        Ok(prop) => prop,
        Err(e) => panic!("fixture grid invalid: {e}"),
    }
}

/// `n` identical particles at `position` moving with `velocity`.
pub fn monoenergetic(
    n: usize,
    charge: f64,
    mass: f64,
    position: Vec2,
    velocity: Vec3,
) -> ChargedSpecies {
    let mut species = ChargedSpecies::new(charge, mass);
    species.add(n, || (position, velocity));
    species
}

/// One particle at rest on every interior node of `prop`.
///
/// Cloud-in-cell deposition of this population puts exactly 1.0 on each
/// interior node and zero elsewhere, which makes grid-kernel assertions
/// exact.
pub fn node_lattice(prop: &GridProp, charge: f64, mass: f64) -> ChargedSpecies {
    let mut species = ChargedSpecies::new(charge, mass);
    for i in 1..prop.nx() - 1 {
        for j in 1..prop.ny() - 1 {
            species.push(
                Vec2::new(i as f64 * prop.dx(), j as f64 * prop.dy()),
                Vec3::ZERO,
            );
        }
    }
    species
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_population_size() {
        let prop = unit_grid(5, 4);
        let s = node_lattice(&prop, -1.0, 1.0);
        assert_eq!(s.len(), 3 * 2);
    }

    #[test]
    fn monoenergetic_is_uniform() {
        let s = monoenergetic(4, 1.0, 2.0, Vec2::new(0.5, 0.5), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(s.len(), 4);
        assert!(s.velocities().iter().all(|&v| v == Vec3::new(1.0, 0.0, 0.0)));
    }
}
