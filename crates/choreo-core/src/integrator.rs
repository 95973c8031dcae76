//! Damped-spring motion toward the blended target.
//!
//! Per particle and per tick:
//!
//! ```text
//! velocity += (target - position) * attraction
//! velocity *= friction
//! position += velocity
//! ```
//!
//! The update is frame-based (not scaled by delta time). Particles never
//! interact, so the loop parallelises trivially under the `parallel` feature.

use glam::Vec3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default pull strength toward the target.
pub const ATTRACTION: f32 = 0.05;
/// Default per-tick velocity retention.
pub const FRICTION: f32 = 0.85;

/// Advance a single particle one tick.
#[inline]
pub fn step_particle(
    position: &mut Vec3,
    velocity: &mut Vec3,
    target: Vec3,
    attraction: f32,
    friction: f32,
) {
    *velocity += (target - *position) * attraction;
    *velocity *= friction;
    *position += *velocity;
}

/// Advance every particle one tick. All three slices must have equal length.
pub fn integrate(
    positions: &mut [Vec3],
    velocities: &mut [Vec3],
    targets: &[Vec3],
    attraction: f32,
    friction: f32,
) {
    debug_assert_eq!(positions.len(), velocities.len());
    debug_assert_eq!(positions.len(), targets.len());

    #[cfg(feature = "parallel")]
    {
        positions
            .par_iter_mut()
            .zip(velocities.par_iter_mut())
            .zip(targets.par_iter())
            .for_each(|((pos, vel), target)| {
                step_particle(pos, vel, *target, attraction, friction);
            });
    }

    #[cfg(not(feature = "parallel"))]
    {
        for ((pos, vel), target) in positions
            .iter_mut()
            .zip(velocities.iter_mut())
            .zip(targets.iter())
        {
            step_particle(pos, vel, *target, attraction, friction);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_step_from_rest() {
        let mut pos = Vec3::ZERO;
        let mut vel = Vec3::ZERO;
        step_particle(&mut pos, &mut vel, Vec3::new(10.0, 0.0, 0.0), ATTRACTION, FRICTION);
        // v = 10 * 0.05 * 0.85
        assert!((vel.x - 0.425).abs() < 1e-6, "vel = {vel:?}");
        assert_eq!(pos, vel);
    }

    #[test]
    fn test_at_target_and_at_rest_stays_put() {
        let target = Vec3::new(1.0, -2.0, 3.0);
        let mut pos = target;
        let mut vel = Vec3::ZERO;
        for _ in 0..10 {
            step_particle(&mut pos, &mut vel, target, ATTRACTION, FRICTION);
        }
        assert_eq!(pos, target);
        assert_eq!(vel, Vec3::ZERO);
    }

    #[test]
    fn test_zero_friction_kills_velocity() {
        let mut pos = Vec3::ZERO;
        let mut vel = Vec3::new(5.0, 5.0, 5.0);
        step_particle(&mut pos, &mut vel, Vec3::ONE, ATTRACTION, 0.0);
        assert_eq!(vel, Vec3::ZERO);
        assert_eq!(pos, Vec3::ZERO);
    }

    #[test]
    fn test_integrate_matches_single_steps() {
        let targets = vec![Vec3::X * 3.0, Vec3::Y * -2.0, Vec3::Z];
        let mut positions = vec![Vec3::ZERO; 3];
        let mut velocities = vec![Vec3::ZERO; 3];
        integrate(&mut positions, &mut velocities, &targets, ATTRACTION, FRICTION);

        for i in 0..3 {
            let mut p = Vec3::ZERO;
            let mut v = Vec3::ZERO;
            step_particle(&mut p, &mut v, targets[i], ATTRACTION, FRICTION);
            assert_eq!(positions[i], p);
            assert_eq!(velocities[i], v);
        }
    }
}
