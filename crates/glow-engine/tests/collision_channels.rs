//! Collision kinematics pinned with a deterministic mock target.

use glow_collisions::{
    CrossSection, MccReactionSet, Reaction, ReactionConfig, RelativeDynamics,
};
use glow_core::{Constants, Vec2, Vec3};
use glow_test_utils::fixtures::monoenergetic;
use glow_test_utils::MockTarget;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn charge_exchange_hands_ions_the_exact_target_velocity() {
    let m_ion = 6.67e-27;
    let drift = Vec3::new(137.0, -42.0, 5.0);
    let config = ReactionConfig {
        dt: 1e-5,
        target: Box::new(MockTarget::new(1e23, drift)),
        reactions: vec![Reaction::charge_exchange(
            CrossSection::constant(1e-17).unwrap(),
        )],
        dynamics: RelativeDynamics::SlowProjectile,
        constants: Constants::SI,
    };
    let set = MccReactionSet::new(config, m_ion);

    let mut ions = monoenergetic(
        200,
        Constants::SI.qe,
        m_ion,
        Vec2::new(0.5, 0.5),
        Vec3::new(1e4, 0.0, 0.0),
    );
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    set.react_all(&mut ions, &mut rng);

    let exchanged = ions.velocities().iter().filter(|&&v| v == drift).count();
    assert!(exchanged > 0, "expected exchange events against the mock");
    for v in ions.velocities() {
        assert!(
            *v == drift || v.x == 1e4,
            "velocity is either untouched or the exact mock sample: {v}"
        );
    }
}

#[test]
fn elastic_scatter_preserves_speed_relative_to_a_drifting_target() {
    let drift = Vec3::new(500.0, 0.0, 0.0);
    let config = ReactionConfig {
        dt: 1e-6,
        target: Box::new(MockTarget::new(1e23, drift)),
        reactions: vec![Reaction::elastic(CrossSection::constant(1e-18).unwrap())],
        dynamics: RelativeDynamics::FastProjectile,
        constants: Constants::SI,
    };
    let set = MccReactionSet::new(config, Constants::SI.m_e);

    let v0 = Vec3::new(1e6, 0.0, 0.0);
    let mut electrons = monoenergetic(
        200,
        -Constants::SI.qe,
        Constants::SI.m_e,
        Vec2::new(0.5, 0.5),
        v0,
    );
    let mut rng = ChaCha8Rng::seed_from_u64(22);
    set.react_all(&mut electrons, &mut rng);

    let g0 = (v0 - drift).norm();
    let scattered: Vec<_> = electrons
        .velocities()
        .iter()
        .filter(|&&v| v != v0)
        .collect();
    assert!(!scattered.is_empty(), "expected scattering events");
    for v in scattered {
        let g = (*v - drift).norm();
        assert!(
            (g - g0).abs() < 1e-6 * g0,
            "relative speed changed: {g} vs {g0}"
        );
    }
}
