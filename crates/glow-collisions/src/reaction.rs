//! Reaction definitions: kind, threshold, cross section.

use crate::cross_section::CrossSection;

/// What a collision does to the projectile (and possibly the gas).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReactionKind {
    /// Isotropic elastic scatter; kinetic energy in the collision frame
    /// is preserved.
    Elastic,
    /// The projectile loses the threshold energy to internal excitation
    /// of the target, then scatters isotropically.
    Excitation,
    /// The projectile loses the threshold energy ionizing the target;
    /// the remainder is split between the scattered and the ejected
    /// electron, and a thermal ion is spawned for the partner species.
    Ionization,
    /// The projectile swaps identity with a gas particle: it continues
    /// with a freshly sampled thermal velocity (ion-neutral charge
    /// exchange).
    ChargeExchange,
}

/// One reaction channel of a species' collision set.
#[derive(Clone, Debug)]
pub struct Reaction {
    /// Reaction kind.
    pub kind: ReactionKind,
    /// Threshold energy in eV (zero for elastic and charge exchange).
    pub threshold: f64,
    /// Energy-dependent cross section.
    pub cross_section: CrossSection,
}

impl Reaction {
    /// Elastic channel.
    pub fn elastic(cross_section: CrossSection) -> Self {
        Self {
            kind: ReactionKind::Elastic,
            threshold: 0.0,
            cross_section,
        }
    }

    /// Excitation channel with the given threshold (eV).
    pub fn excitation(threshold: f64, cross_section: CrossSection) -> Self {
        Self {
            kind: ReactionKind::Excitation,
            threshold,
            cross_section,
        }
    }

    /// Ionization channel with the given threshold (eV).
    pub fn ionization(threshold: f64, cross_section: CrossSection) -> Self {
        Self {
            kind: ReactionKind::Ionization,
            threshold,
            cross_section,
        }
    }

    /// Charge-exchange channel.
    pub fn charge_exchange(cross_section: CrossSection) -> Self {
        Self {
            kind: ReactionKind::ChargeExchange,
            threshold: 0.0,
            cross_section,
        }
    }

    /// Cross section at `energy` (eV), zero below threshold.
    pub fn sigma(&self, energy: f64) -> f64 {
        if energy < self.threshold {
            0.0
        } else {
            self.cross_section.value(energy)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigma_is_zero_below_threshold() {
        let cs = CrossSection::constant(3.0).unwrap();
        let r = Reaction::excitation(11.5, cs);
        assert_eq!(r.sigma(10.0), 0.0);
        assert_eq!(r.sigma(12.0), 3.0);
    }

    #[test]
    fn elastic_has_no_threshold() {
        let r = Reaction::elastic(CrossSection::constant(1.0).unwrap());
        assert_eq!(r.threshold, 0.0);
        assert_eq!(r.sigma(0.0), 1.0);
    }
}
