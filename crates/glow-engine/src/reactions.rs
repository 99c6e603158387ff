//! Built-in helium reaction sets.
//!
//! Compact cross-section tables for the electron and ion channels of a
//! helium discharge. The tables are coarse piecewise-linear fits; the
//! solver interpolates between points and clamps outside the tabulated
//! range.

use crate::parameters::Parameters;
use glow_collisions::{
    CrossSection, MccReactionSet, Reaction, ReactionConfig, RelativeDynamics,
    StaticUniformTarget, TableError,
};

/// Helium excitation threshold (eV), 2¹S level.
const EXCITATION_THRESHOLD: f64 = 19.8;
/// Helium ionization threshold (eV).
const IONIZATION_THRESHOLD: f64 = 24.6;

fn electron_elastic() -> Result<CrossSection, TableError> {
    CrossSection::from_points(&[
        (0.0, 4.9e-20),
        (1.0, 5.8e-20),
        (5.0, 6.3e-20),
        (10.0, 5.6e-20),
        (20.0, 4.1e-20),
        (50.0, 2.3e-20),
        (100.0, 1.4e-20),
        (500.0, 4.0e-21),
    ])
}

fn electron_excitation() -> Result<CrossSection, TableError> {
    CrossSection::from_points(&[
        (EXCITATION_THRESHOLD, 0.0),
        (25.0, 2.5e-22),
        (40.0, 4.0e-22),
        (100.0, 3.0e-22),
        (500.0, 1.0e-22),
    ])
}

fn electron_ionization() -> Result<CrossSection, TableError> {
    CrossSection::from_points(&[
        (IONIZATION_THRESHOLD, 0.0),
        (30.0, 7.0e-22),
        (50.0, 2.2e-21),
        (100.0, 3.4e-21),
        (200.0, 3.0e-21),
        (500.0, 1.8e-21),
    ])
}

fn ion_isotropic() -> Result<CrossSection, TableError> {
    CrossSection::from_points(&[
        (0.1, 4.0e-19),
        (1.0, 3.2e-19),
        (10.0, 2.5e-19),
        (100.0, 1.8e-19),
    ])
}

fn ion_charge_exchange() -> Result<CrossSection, TableError> {
    CrossSection::from_points(&[
        (0.1, 4.4e-19),
        (1.0, 3.6e-19),
        (10.0, 2.8e-19),
        (100.0, 2.0e-19),
    ])
}

/// The electron channels: elastic, excitation, ionization.
pub fn electron_reactions() -> Result<Vec<Reaction>, TableError> {
    Ok(vec![
        Reaction::elastic(electron_elastic()?),
        Reaction::excitation(EXCITATION_THRESHOLD, electron_excitation()?),
        Reaction::ionization(IONIZATION_THRESHOLD, electron_ionization()?),
    ])
}

/// The ion channels: isotropic elastic scatter, charge exchange.
pub fn ion_reactions() -> Result<Vec<Reaction>, TableError> {
    Ok(vec![
        Reaction::elastic(ion_isotropic()?),
        Reaction::charge_exchange(ion_charge_exchange()?),
    ])
}

/// Build the electron collision set against the neutral background.
pub fn electron_reaction_set(p: &Parameters) -> Result<MccReactionSet, TableError> {
    let config = ReactionConfig {
        dt: p.dt,
        target: Box::new(StaticUniformTarget::new(
            p.ng,
            p.tg,
            p.m_ion,
            p.constants.kb,
        )),
        reactions: electron_reactions()?,
        dynamics: RelativeDynamics::FastProjectile,
        constants: p.constants,
    };
    Ok(MccReactionSet::new(config, p.constants.m_e))
}

/// Build the ion collision set against the neutral background.
pub fn ion_reaction_set(p: &Parameters) -> Result<MccReactionSet, TableError> {
    let config = ReactionConfig {
        dt: p.dt,
        target: Box::new(StaticUniformTarget::new(
            p.ng,
            p.tg,
            p.m_ion,
            p.constants.kb,
        )),
        reactions: ion_reactions()?,
        dynamics: RelativeDynamics::SlowProjectile,
        constants: p.constants,
    };
    Ok(MccReactionSet::new(config, p.m_ion))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glow_collisions::ReactionKind;

    #[test]
    fn electron_channels_are_complete() {
        let reactions = electron_reactions().unwrap();
        let kinds: Vec<_> = reactions.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ReactionKind::Elastic,
                ReactionKind::Excitation,
                ReactionKind::Ionization
            ]
        );
    }

    #[test]
    fn inelastic_channels_vanish_below_threshold() {
        for r in electron_reactions().unwrap() {
            if r.threshold > 0.0 {
                assert_eq!(r.sigma(r.threshold - 1.0), 0.0);
                assert!(r.sigma(r.threshold + 10.0) > 0.0);
            }
        }
    }

    #[test]
    fn sets_have_positive_collision_frequency() {
        let p = Parameters::case_1();
        assert!(electron_reaction_set(&p).unwrap().nu_max() > 0.0);
        assert!(ion_reaction_set(&p).unwrap().nu_max() > 0.0);
    }
}
