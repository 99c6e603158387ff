//! Explicit electrostatic particle pusher.

use crate::species::ChargedSpecies;
use glow_core::Vec2;

/// Advance every particle by one timestep under its interpolated field.
///
/// `field` holds the electric field gathered at each particle's
/// position and must be parallel to the population. The update is the
/// standard explicit electrostatic step: `v += (q/m) E dt` on the
/// in-plane components, then `x += v_xy dt`. The out-of-plane velocity
/// component is untouched (no in-plane force acts on it).
pub fn move_particles(species: &mut ChargedSpecies, field: &[Vec2], dt: f64) {
    debug_assert_eq!(species.len(), field.len());
    let qm_dt = species.charge() / species.mass() * dt;
    let (positions, velocities) = species.particles_mut();
    for ((x, v), e) in positions.iter_mut().zip(velocities.iter_mut()).zip(field) {
        v.x += qm_dt * e.x;
        v.y += qm_dt * e.y;
        x.x += v.x * dt;
        x.y += v.y * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glow_core::Vec3;

    #[test]
    fn zero_field_is_ballistic() {
        let mut s = ChargedSpecies::new(-1.0, 1.0);
        s.push(Vec2::new(0.0, 0.0), Vec3::new(2.0, -1.0, 5.0));
        move_particles(&mut s, &[Vec2::ZERO], 0.5);
        assert_eq!(s.positions()[0], Vec2::new(1.0, -0.5));
        assert_eq!(s.velocities()[0], Vec3::new(2.0, -1.0, 5.0));
    }

    #[test]
    fn constant_field_accelerates_by_q_over_m() {
        let mut s = ChargedSpecies::new(2.0, 4.0); // q/m = 0.5
        s.push(Vec2::ZERO, Vec3::ZERO);
        move_particles(&mut s, &[Vec2::new(1.0, 0.0)], 2.0);
        // dv = (q/m) E dt = 0.5 * 1 * 2 = 1, then dx = v * dt = 2
        assert_eq!(s.velocities()[0].x, 1.0);
        assert_eq!(s.positions()[0].x, 2.0);
    }

    #[test]
    fn out_of_plane_velocity_is_preserved() {
        let mut s = ChargedSpecies::new(-1.0, 1.0);
        s.push(Vec2::ZERO, Vec3::new(0.0, 0.0, 3.0));
        move_particles(&mut s, &[Vec2::new(5.0, 5.0)], 0.1);
        assert_eq!(s.velocities()[0].z, 3.0);
    }
}
