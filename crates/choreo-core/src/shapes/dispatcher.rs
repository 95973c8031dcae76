//! Formation dispatch and inter-stage blending.

use glam::Vec3;

use crate::particle::ParticleSeed;
use crate::shapes::formations::{double_helix, explosion, lemniscate, sphere, torus};
use crate::stage::{BlendPair, Formation, StageWeights};

/// Per-particle inputs shared by every generator.
#[derive(Clone, Copy, Debug)]
pub struct ParticleSample<'a> {
    pub seed: &'a ParticleSeed,
    /// Normalised index, `index / count`.
    pub u: f32,
}

impl<'a> ParticleSample<'a> {
    pub fn new(seed: &'a ParticleSeed, index: usize, count: usize) -> Self {
        Self {
            seed,
            u: index as f32 / count as f32,
        }
    }
}

/// Target position of one particle under `formation`.
///
/// `w` is that formation's own stage weight.
pub fn target_for(formation: Formation, sample: ParticleSample<'_>, time: f32, w: f32) -> Vec3 {
    let seed = sample.seed;
    match formation {
        Formation::Sphere => sphere(seed, time),
        Formation::Explosion => explosion(seed, w),
        Formation::Torus => torus(seed, time, w),
        Formation::DoubleHelix => double_helix(seed, time, sample.u),
        Formation::Lemniscate => lemniscate(seed, time, sample.u),
    }
}

/// Blend the active pair into this tick's target.
///
/// A held formation is evaluated once; otherwise both generators run and
/// are interpolated per axis by `pair.factor`.
pub fn blended_target(
    pair: &BlendPair,
    weights: &StageWeights,
    sample: ParticleSample<'_>,
    time: f32,
) -> Vec3 {
    let a = target_for(pair.from, sample, time, weights.of(pair.from));
    if pair.is_hold() {
        return a;
    }
    let b = target_for(pair.to, sample, time, weights.of(pair.to));
    a.lerp(b, pair.factor)
}
