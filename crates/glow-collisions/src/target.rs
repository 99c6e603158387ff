//! Background-gas collision targets.

use glow_core::Vec3;
use rand::RngCore;

/// A source of collision partners for the projectile species.
///
/// Object-safe so reaction configurations can hold `Box<dyn Target>`.
pub trait Target {
    /// Neutral number density (m⁻³) seen by the projectiles.
    fn density(&self) -> f64;

    /// Sample a target velocity for one collision.
    fn sample_velocity(&self, rng: &mut dyn RngCore) -> Vec3;
}

/// A spatially uniform, stationary Maxwellian background gas.
#[derive(Clone, Copy, Debug)]
pub struct StaticUniformTarget {
    density: f64,
    /// Thermal speed `sqrt(kb * T / m)` of the gas, precomputed.
    vth: f64,
}

impl StaticUniformTarget {
    /// Build a target from the gas density, temperature, particle mass,
    /// and the injected Boltzmann constant.
    pub fn new(density: f64, temperature: f64, mass: f64, kb: f64) -> Self {
        Self {
            density,
            vth: (kb * temperature / mass).sqrt(),
        }
    }
}

/// Box-Muller standard-normal sample (same transform as the particle
/// emitter; kept local to stay off `rand_distr`).
fn box_muller(rng: &mut dyn RngCore) -> f64 {
    use rand::Rng;
    let u1: f64 = rng.random::<f64>().max(1e-300);
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

impl Target for StaticUniformTarget {
    fn density(&self) -> f64 {
        self.density
    }

    fn sample_velocity(&self, rng: &mut dyn RngCore) -> Vec3 {
        Vec3::new(
            self.vth * box_muller(rng),
            self.vth * box_muller(rng),
            self.vth * box_muller(rng),
        )
    }
}
