//! Null-collision Monte-Carlo sampling.
//!
//! The null-collision method samples a fixed collision frequency
//! `nu_max` (the maximum total collision frequency over the energy
//! range of the cross-section tables) and assigns each sampled event to
//! a real channel with probability `nu_i(E) / nu_max`, or to a null
//! event otherwise. This keeps per-step work proportional to the
//! population size without evaluating every particle's cross sections.

use crate::reaction::{Reaction, ReactionKind};
use crate::target::Target;
use glow_core::{Constants, Vec2, Vec3};
use glow_particle::ChargedSpecies;
use rand::Rng;

/// How the relative collision velocity is formed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelativeDynamics {
    /// Projectile much faster than the gas (electrons): the target is
    /// treated as stationary for the energy lookup.
    FastProjectile,
    /// Projectile speed comparable to the gas (ions): the energy lookup
    /// uses the sampled relative velocity.
    SlowProjectile,
}

/// Configuration of one species' collision set.
pub struct ReactionConfig {
    /// Simulation timestep.
    pub dt: f64,
    /// Background-gas target.
    pub target: Box<dyn Target>,
    /// Reaction channels. May be empty (the set is then a no-op).
    pub reactions: Vec<Reaction>,
    /// Relative-velocity handling.
    pub dynamics: RelativeDynamics,
    /// Injected physical constants.
    pub constants: Constants,
}

/// Particles created by a `react_all` pass.
///
/// The set cannot append to populations it does not own, so ionization
/// products are handed back to the orchestrator.
#[derive(Debug, Default)]
pub struct Spawned {
    /// New particles of the projectile species (ejected electrons).
    pub projectile: Vec<(Vec2, Vec3)>,
    /// New particles of the partner species (ions from ionization).
    pub partner: Vec<(Vec2, Vec3)>,
}

impl Spawned {
    /// Whether nothing was spawned.
    pub fn is_empty(&self) -> bool {
        self.projectile.is_empty() && self.partner.is_empty()
    }
}

/// A species' reaction set with precomputed null-collision bounds.
pub struct MccReactionSet {
    config: ReactionConfig,
    projectile_mass: f64,
    nu_max: f64,
    p_collide: f64,
}

impl MccReactionSet {
    /// Samples used to scan the total collision frequency for `nu_max`.
    const FREQUENCY_SCAN_SAMPLES: usize = 256;
    /// Energy scan ceiling when no table provides one (eV).
    const DEFAULT_ENERGY_CEILING: f64 = 100.0;

    /// Build a reaction set for a projectile species of the given mass.
    ///
    /// Scans the cross-section tables for the maximum total collision
    /// frequency and precomputes the per-step collision probability
    /// `1 - exp(-nu_max * dt)`.
    pub fn new(config: ReactionConfig, projectile_mass: f64) -> Self {
        let ceiling = config
            .reactions
            .iter()
            .flat_map(|r| r.cross_section.energies().iter().copied())
            .fold(0.0_f64, f64::max)
            .max(Self::DEFAULT_ENERGY_CEILING);

        let qe = config.constants.qe;
        let density = config.target.density();
        let mut nu_max = 0.0_f64;
        for k in 0..=Self::FREQUENCY_SCAN_SAMPLES {
            let energy = ceiling * k as f64 / Self::FREQUENCY_SCAN_SAMPLES as f64;
            let speed = (2.0 * energy * qe / projectile_mass).sqrt();
            let sigma_total: f64 = config.reactions.iter().map(|r| r.sigma(energy)).sum();
            nu_max = nu_max.max(density * sigma_total * speed);
        }

        let p_collide = 1.0 - (-nu_max * config.dt).exp();
        Self {
            config,
            projectile_mass,
            nu_max,
            p_collide,
        }
    }

    /// The scanned maximum total collision frequency (s⁻¹).
    pub fn nu_max(&self) -> f64 {
        self.nu_max
    }

    /// Run one collision pass over the population.
    ///
    /// Velocities are mutated in place; created particles are returned
    /// for the orchestrator to append (see [`Spawned`]).
    pub fn react_all<R: Rng>(&self, species: &mut ChargedSpecies, rng: &mut R) -> Spawned {
        let mut spawned = Spawned::default();
        let n = species.len();
        if n == 0 || self.nu_max <= 0.0 {
            return spawned;
        }

        // Number of candidate collisions this step, with stochastic
        // rounding of the fractional part.
        let expected = n as f64 * self.p_collide;
        let mut count = expected.floor() as usize;
        if rng.random::<f64>() < expected - count as f64 {
            count += 1;
        }

        let qe = self.config.constants.qe;
        let mass = self.projectile_mass;
        let density = self.config.target.density();

        for _ in 0..count {
            let idx = rng.random_range(0..species.len());
            let v = species.velocities()[idx];
            let v_target = self.config.target.sample_velocity(rng);
            let g = v - v_target;

            let lookup_speed = match self.config.dynamics {
                RelativeDynamics::FastProjectile => v.norm(),
                RelativeDynamics::SlowProjectile => g.norm(),
            };
            let energy = 0.5 * mass * lookup_speed * lookup_speed / qe;

            // Channel selection: partial sums of nu_i / nu_max; the
            // remainder is the null collision.
            let roll: f64 = rng.random();
            let mut acc = 0.0;
            let mut chosen = None;
            for reaction in &self.config.reactions {
                acc += density * reaction.sigma(energy) * lookup_speed / self.nu_max;
                if roll < acc {
                    chosen = Some(reaction);
                    break;
                }
            }
            let Some(reaction) = chosen else {
                continue; // null collision
            };

            let position = species.positions()[idx];
            let rel_energy = 0.5 * mass * g.norm_sq() / qe;
            match reaction.kind {
                ReactionKind::Elastic => {
                    let speed = g.norm();
                    species.velocities_mut()[idx] = v_target + iso_unit(rng) * speed;
                }
                ReactionKind::Excitation => {
                    let remainder = (rel_energy - reaction.threshold).max(0.0);
                    let speed = (2.0 * remainder * qe / mass).sqrt();
                    species.velocities_mut()[idx] = v_target + iso_unit(rng) * speed;
                }
                ReactionKind::Ionization => {
                    let remainder = (rel_energy - reaction.threshold).max(0.0);
                    let share: f64 = rng.random();
                    let e_scattered = share * remainder;
                    let e_ejected = remainder - e_scattered;
                    let v_scattered =
                        v_target + iso_unit(rng) * (2.0 * e_scattered * qe / mass).sqrt();
                    let v_ejected =
                        v_target + iso_unit(rng) * (2.0 * e_ejected * qe / mass).sqrt();
                    species.velocities_mut()[idx] = v_scattered;
                    spawned.projectile.push((position, v_ejected));
                    let v_ion = self.config.target.sample_velocity(rng);
                    spawned.partner.push((position, v_ion));
                }
                ReactionKind::ChargeExchange => {
                    species.velocities_mut()[idx] = self.config.target.sample_velocity(rng);
                }
            }
        }

        spawned
    }
}

/// Sample an isotropic unit vector.
fn iso_unit<R: Rng>(rng: &mut R) -> Vec3 {
    let z = 1.0 - 2.0 * rng.random::<f64>();
    let phi = 2.0 * std::f64::consts::PI * rng.random::<f64>();
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(r * phi.cos(), r * phi.sin(), z)
}
