//! The five formation generators.
//!
//! Every generator is a pure function of the particle's seed, the elapsed
//! time `t` (seconds) and its own stage weight `w`. The helix and
//! lemniscate also use the particle's normalised index `u = index / count`,
//! which keeps a particle in the same place along the curve across ticks.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::particle::{spherical_to_cartesian, ParticleSeed};

/// Azimuthal spin of the resting sphere (rad/s).
const SPHERE_SPIN: f32 = 0.05;

/// Explosion reaches `1 + 8 = 9` times the seed radius.
const EXPLOSION_GROWTH: f32 = 8.0;
const EXPLOSION_Z_SPREAD: f32 = 10.0;

const TORUS_RING_RADIUS: (f32, f32) = (6.0, 4.0);
const TORUS_TUBE_RADIUS: (f32, f32) = (2.5, 0.5);
const TORUS_SPIN: f32 = 0.2;

const HELIX_TURNS_ANGLE: f32 = 8.0 * PI;
const HELIX_BASE_RADIUS: f32 = 3.0;
const HELIX_SPIN: f32 = 0.3;
const HELIX_HALF_HEIGHT: f32 = 10.0;

const LEMNISCATE_SCALE: f32 = 8.0;
const LEMNISCATE_DRIFT: f32 = 0.1;
const LEMNISCATE_THICKNESS: f32 = 4.0;

/// Genesis: the seed sphere, slowly rotating about z.
pub fn sphere(seed: &ParticleSeed, t: f32) -> Vec3 {
    spherical_to_cartesian(seed.radius, seed.theta + t * SPHERE_SPIN, seed.phi)
}

/// Expansion: radius grows with `w`, azimuth offset by phase, extra z spread.
pub fn explosion(seed: &ParticleSeed, w: f32) -> Vec3 {
    let r = seed.radius * (1.0 + w * EXPLOSION_GROWTH);
    let mut p = spherical_to_cartesian(r, seed.theta + seed.phase, seed.phi);
    p.z += (seed.phase - 0.5) * w * EXPLOSION_Z_SPREAD;
    p
}

/// Collapse: a spinning torus whose ring and tube tighten as `w` → 1.
pub fn torus(seed: &ParticleSeed, t: f32, w: f32) -> Vec3 {
    let ring = TORUS_RING_RADIUS.0 + (TORUS_RING_RADIUS.1 - TORUS_RING_RADIUS.0) * w;
    let tube = TORUS_TUBE_RADIUS.0 + (TORUS_TUBE_RADIUS.1 - TORUS_TUBE_RADIUS.0) * w;
    let (sin_a, cos_a) = (seed.theta + t * TORUS_SPIN).sin_cos();
    let (sin_b, cos_b) = (seed.phi * 2.0).sin_cos();
    let reach = ring + tube * cos_b;
    Vec3::new(reach * cos_a, reach * sin_a, tube * sin_b)
}

/// Formation: two interleaved strands, chosen by phase, along y ∈ [-10, 10].
pub fn double_helix(seed: &ParticleSeed, t: f32, u: f32) -> Vec3 {
    let h = u * HELIX_TURNS_ANGLE;
    let radius = HELIX_BASE_RADIUS + (h * 0.5).sin();
    let strand = seed.strand_sign();
    let (sin_a, cos_a) = (h + t * HELIX_SPIN).sin_cos();
    Vec3::new(
        cos_a * radius * strand,
        (u * 2.0 - 1.0) * HELIX_HALF_HEIGHT,
        sin_a * radius * strand,
    )
}

/// Infinity: Bernoulli lemniscate drifting along its own curve.
///
/// The denominator `1 + sin²a` is at least 1, so this is defined everywhere.
pub fn lemniscate(seed: &ParticleSeed, t: f32, u: f32) -> Vec3 {
    let a = u * TAU + t * LEMNISCATE_DRIFT;
    let (sin_a, cos_a) = a.sin_cos();
    let denom = 1.0 + sin_a * sin_a;
    Vec3::new(
        LEMNISCATE_SCALE * cos_a / denom,
        LEMNISCATE_SCALE * sin_a * cos_a / denom,
        (seed.phase - 0.5) * LEMNISCATE_THICKNESS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(theta: f32, phi: f32, radius: f32, phase: f32) -> ParticleSeed {
        ParticleSeed {
            theta,
            phi,
            radius,
            phase,
            base_size: 1.0,
            base_alpha: 0.5,
        }
    }

    #[test]
    fn test_sphere_keeps_radius_while_spinning() {
        let s = seed(1.0, 0.7, 2.0, 0.3);
        for k in 0..50 {
            let p = sphere(&s, k as f32 * 0.5);
            assert!((p.length() - 2.0).abs() < 1e-4, "radius drifted: {}", p.length());
        }
    }

    #[test]
    fn test_explosion_at_zero_weight_is_seed_radius() {
        let s = seed(0.4, 1.2, 1.5, 0.9);
        let p = explosion(&s, 0.0);
        assert!((p.length() - 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_explosion_full_weight_nine_times() {
        // phase = 0.5 removes the z spread so the radius is exact
        let s = seed(0.4, 1.2, 1.5, 0.5);
        let p = explosion(&s, 1.0);
        assert!((p.length() - 13.5).abs() < 1e-3, "r = {}", p.length());
    }

    #[test]
    fn test_torus_tube_distance() {
        let s = seed(0.9, 0.6, 1.0, 0.2);
        for (w, ring, tube) in [(0.0, 6.0, 2.5), (1.0, 4.0, 0.5)] {
            let p = torus(&s, 3.0, w);
            let radial = (p.x * p.x + p.y * p.y).sqrt();
            let d = ((radial - ring).powi(2) + p.z * p.z).sqrt();
            assert!((d - tube).abs() < 1e-4, "w={w}: tube distance {d} != {tube}");
        }
    }

    #[test]
    fn test_helix_strands_are_opposite() {
        let a = double_helix(&seed(0.0, 0.0, 1.0, 0.9), 2.0, 0.3);
        let b = double_helix(&seed(0.0, 0.0, 1.0, 0.1), 2.0, 0.3);
        assert_eq!(a.y, b.y);
        assert!((a.x + b.x).abs() < 1e-6 && (a.z + b.z).abs() < 1e-6);
    }

    #[test]
    fn test_helix_height_span() {
        let s = seed(0.0, 0.0, 1.0, 0.9);
        assert_eq!(double_helix(&s, 0.0, 0.0).y, -10.0);
        assert!((double_helix(&s, 0.0, 1.0).y - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_lemniscate_crosses_origin() {
        // a = π/2 is the figure-eight's crossing point
        let s = seed(0.0, 0.0, 1.0, 0.5);
        let p = lemniscate(&s, 0.0, 0.25);
        assert!(p.length() < 1e-5, "expected crossing at origin, got {p:?}");
        let tip = lemniscate(&s, 0.0, 0.0);
        assert!((tip.x - 8.0).abs() < 1e-5);
    }
}
