//! Maxwellian particle seeding.

use glow_core::{Vec2, Vec3};
use rand::Rng;

/// Generate a standard-normal sample via the Box-Muller transform.
/// Avoids the `rand_distr` dependency.
fn box_muller<R: Rng>(rng: &mut R) -> f64 {
    let u1: f64 = rng.random::<f64>().max(1e-300); // avoid ln(0)
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Emitter for seeding a species from a Maxwellian velocity
/// distribution and a uniform spatial distribution over the domain.
///
/// Each call yields a position uniform over `[0, lx] x [0, ly]` and a
/// velocity with three independent Gaussian components of standard
/// deviation `vth = sqrt(kb * temperature / mass)`.
pub fn maxwellian_emitter<R: Rng>(
    temperature: f64,
    lx: f64,
    ly: f64,
    mass: f64,
    kb: f64,
    rng: &mut R,
) -> impl FnMut() -> (Vec2, Vec3) + '_ {
    let vth = (kb * temperature / mass).sqrt();
    move || {
        let x = Vec2::new(lx * rng.random::<f64>(), ly * rng.random::<f64>());
        let v = Vec3::new(
            vth * box_muller(rng),
            vth * box_muller(rng),
            vth * box_muller(rng),
        );
        (x, v)
    }
}
