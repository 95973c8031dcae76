//! Progress-driven colour grading.
//!
//! Colour regimes are chosen from the RAW progress target, not the smoothed
//! value that drives positions, so colour reacts to input immediately while
//! the shape catches up.

use crate::math::Rgb;

pub const DEEP_BLUE: Rgb = Rgb::new(0.25, 0.5, 1.0);
pub const LIGHT_BLUE: Rgb = Rgb::new(0.55, 0.8, 1.0);
pub const ICE_BLUE: Rgb = Rgb::new(0.75, 0.9, 1.0);
pub const GOLD: Rgb = Rgb::new(1.0, 0.75, 0.3);
pub const PALE_GOLD: Rgb = Rgb::new(1.0, 0.92, 0.65);

/// Raw progress below which the palette is blue (warming to gold).
const GOLD_REGIME_START: f32 = 0.5;
/// Raw progress at which the palette returns to blue for good.
const FINAL_REGIME_START: f32 = 0.8;

/// Colour of a particle with `phase` at raw progress `p`.
///
/// Both inputs are expected in `[0, 1]`; the result then stays in `[0, 1]`
/// per channel because every step is a convex blend of in-range colours.
pub fn grade(p: f32, phase: f32) -> Rgb {
    if p < GOLD_REGIME_START {
        let warm = ((p - 0.3) * 2.5).max(0.0);
        DEEP_BLUE.lerp(LIGHT_BLUE, phase).lerp(GOLD, warm)
    } else if p < FINAL_REGIME_START {
        let cool = ((p - 0.7) * 5.0).max(0.0);
        GOLD.lerp(PALE_GOLD, phase).lerp(DEEP_BLUE, cool)
    } else {
        LIGHT_BLUE.lerp(ICE_BLUE, phase)
    }
}

/// Uniform opacity for every particle at raw progress `p`.
///
/// The per-particle `base_alpha` seed is deliberately not consulted.
#[inline]
pub fn alpha_for(p: f32) -> f32 {
    0.4 + p * 0.3
}
