use std::f32::consts::TAU;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Immutable per-particle identity, sampled once at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSeed {
    /// Azimuth in `[0, 2π)`.
    pub theta: f32,
    /// Polar angle, `acos(2u - 1)` for uniform `u` (uniform on the sphere).
    pub phi: f32,
    /// Base radius in `[0.5, 2.5)`.
    pub radius: f32,
    /// Independent random in `[0, 1)`; also selects the helix strand.
    pub phase: f32,
    /// Point size in `[0.5, 2.0)`.
    pub base_size: f32,
    /// Opacity seed in `[0.3, 0.8)`. Stored but not read at runtime.
    pub base_alpha: f32,
}

impl ParticleSeed {
    /// Draw one seed. The sampling order is fixed so a seeded RNG always
    /// yields the same particle.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let theta = rng.gen::<f32>() * TAU;
        let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
        let radius = rng.gen_range(0.5..2.5);
        let phase = rng.gen::<f32>();
        let base_size = rng.gen_range(0.5..2.0);
        let base_alpha = rng.gen_range(0.3..0.8);
        Self {
            theta,
            phi,
            radius,
            phase,
            base_size,
            base_alpha,
        }
    }

    /// The seed's point on its home sphere.
    pub fn sphere_point(&self) -> Vec3 {
        spherical_to_cartesian(self.radius, self.theta, self.phi)
    }

    /// Helix strand selector.
    #[inline]
    pub fn strand_sign(&self) -> f32 {
        if self.phase > 0.5 {
            1.0
        } else {
            -1.0
        }
    }
}

/// `x = r sinφ cosθ`, `y = r sinφ sinθ`, `z = r cosφ`.
#[inline]
pub fn spherical_to_cartesian(r: f32, theta: f32, phi: f32) -> Vec3 {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(r * sin_phi * cos_theta, r * sin_phi * sin_theta, r * cos_phi)
}

/// SoA particle storage.
///
/// `seeds` never change after construction. `position` and `velocity` are
/// written only by the motion integrator; outside the crate the set is
/// read-only. The particle count is the length of `seeds`.
pub struct ParticleSet {
    seeds: Vec<ParticleSeed>,
    pub(crate) position: Vec<Vec3>,
    pub(crate) velocity: Vec<Vec3>,
    /// Blended target for the current tick (scratch, rewritten every tick).
    pub(crate) target_pos: Vec<Vec3>,
}

impl ParticleSet {
    /// Build `count` particles from a deterministic RNG seed.
    pub fn seeded(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let seeds = (0..count).map(|_| ParticleSeed::sample(&mut rng)).collect();
        Self::from_seeds(seeds)
    }

    /// Build a set from explicit seeds; positions start on the seed sphere.
    pub fn from_seeds(seeds: Vec<ParticleSeed>) -> Self {
        let position: Vec<Vec3> = seeds.iter().map(ParticleSeed::sphere_point).collect();
        Self {
            target_pos: position.clone(),
            velocity: vec![Vec3::ZERO; seeds.len()],
            position,
            seeds,
        }
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    pub fn seeds(&self) -> &[ParticleSeed] {
        &self.seeds
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.position
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocity
    }

    /// Targets blended on the last tick.
    pub fn targets(&self) -> &[Vec3] {
        &self.target_pos
    }

    /// Seeds alongside the writable target buffer, for the target pass.
    pub(crate) fn seeds_and_targets_mut(&mut self) -> (&[ParticleSeed], &mut [Vec3]) {
        (&self.seeds, &mut self.target_pos)
    }

    /// Put every particle back on its seed sphere, at rest.
    pub(crate) fn reset_motion(&mut self) {
        for (i, seed) in self.seeds.iter().enumerate() {
            let home = seed.sphere_point();
            self.position[i] = home;
            self.target_pos[i] = home;
            self.velocity[i] = Vec3::ZERO;
        }
    }
}
