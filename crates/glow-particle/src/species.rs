//! Structure-of-arrays charged-particle population.

use glow_core::{Vec2, Vec3};

/// An ordered population of macro-particles sharing one charge and mass.
///
/// Positions are 2-D (the simulation plane); velocities keep all three
/// components. Positions and velocities are parallel arrays: index `i`
/// addresses one particle in both.
#[derive(Clone, Debug)]
pub struct ChargedSpecies {
    charge: f64,
    mass: f64,
    positions: Vec<Vec2>,
    velocities: Vec<Vec3>,
}

impl ChargedSpecies {
    /// Create an empty population with the given per-particle charge
    /// and mass.
    pub fn new(charge: f64, mass: f64) -> Self {
        Self {
            charge,
            mass,
            positions: Vec::new(),
            velocities: Vec::new(),
        }
    }

    /// Per-particle charge (signed; electrons carry `-qe`).
    pub fn charge(&self) -> f64 {
        self.charge
    }

    /// Per-particle mass.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Number of particles currently alive.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Seed `n` particles from an emitter producing (position, velocity)
    /// pairs.
    pub fn add<F>(&mut self, n: usize, mut emit: F)
    where
        F: FnMut() -> (Vec2, Vec3),
    {
        self.positions.reserve(n);
        self.velocities.reserve(n);
        for _ in 0..n {
            let (x, v) = emit();
            self.positions.push(x);
            self.velocities.push(v);
        }
    }

    /// Append a single particle.
    pub fn push(&mut self, position: Vec2, velocity: Vec3) {
        self.positions.push(position);
        self.velocities.push(velocity);
    }

    /// Remove particle `i` by swapping in the last particle.
    ///
    /// O(1); does not preserve ordering. Only boundary and collision
    /// kernels call this.
    pub fn swap_remove(&mut self, i: usize) {
        self.positions.swap_remove(i);
        self.velocities.swap_remove(i);
    }

    /// Particle positions.
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Mutable particle positions.
    pub fn positions_mut(&mut self) -> &mut [Vec2] {
        &mut self.positions
    }

    /// Particle velocities.
    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    /// Mutable particle velocities.
    pub fn velocities_mut(&mut self) -> &mut [Vec3] {
        &mut self.velocities
    }

    /// Mutable access to both arrays at once (pusher, collisions).
    pub fn particles_mut(&mut self) -> (&mut [Vec2], &mut [Vec3]) {
        (&mut self.positions, &mut self.velocities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_seeds_parallel_arrays() {
        let mut s = ChargedSpecies::new(-1.0, 2.0);
        let mut k = 0.0;
        s.add(3, || {
            k += 1.0;
            (Vec2::new(k, 0.0), Vec3::new(0.0, k, 0.0))
        });
        assert_eq!(s.len(), 3);
        assert_eq!(s.positions()[2], Vec2::new(3.0, 0.0));
        assert_eq!(s.velocities()[2], Vec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn swap_remove_keeps_arrays_parallel() {
        let mut s = ChargedSpecies::new(1.0, 1.0);
        for i in 0..4 {
            s.push(Vec2::new(i as f64, 0.0), Vec3::new(0.0, 0.0, i as f64));
        }
        s.swap_remove(1);
        assert_eq!(s.len(), 3);
        assert_eq!(s.positions()[1], Vec2::new(3.0, 0.0));
        assert_eq!(s.velocities()[1], Vec3::new(0.0, 0.0, 3.0));
    }
}
