use choreo_core::color::{alpha_for, grade};
use choreo_core::{Choreography, ChoreographyConfig, FrameTime};
use proptest::prelude::*;

proptest! {
    #[test]
    fn color_channels_in_unit_range(p in 0.0f32..=1.0, phase in 0.0f32..=1.0) {
        let c = grade(p, phase);
        for (name, v) in [("r", c.r), ("g", c.g), ("b", c.b)] {
            prop_assert!((0.0..=1.0).contains(&v), "{} = {} at p={}, phase={}", name, v, p, phase);
        }
    }
}

#[test]
fn test_alpha_uniform_and_exact() {
    let mut engine = Choreography::new(ChoreographyConfig::with_particle_count(200)).unwrap();
    for (k, target) in [0.0f32, 0.33, 0.5, 0.9, 1.0].iter().enumerate() {
        engine.set_progress_target(*target);
        engine.step(FrameTime::new(k as f32 / 60.0, 1.0 / 60.0));
        let expected = 0.4 + 0.3 * target;
        for (i, a) in engine.output().alphas().iter().enumerate() {
            assert_eq!(*a, alpha_for(*target));
            assert!((a - expected).abs() < 1e-6, "alpha[{i}] = {a}, expected {expected}");
        }
    }
}

#[test]
fn test_color_uses_raw_progress_not_smoothed() {
    // After one tick toward 0.9 the smoothed progress is still ~0.07, deep
    // in the sphere stage, but colour already reflects the final regime.
    let mut engine = Choreography::new(ChoreographyConfig::with_particle_count(50)).unwrap();
    engine.set_progress_target(0.9);
    engine.step(FrameTime::new(0.0, 1.0 / 60.0));

    assert!(engine.progress() < 0.1, "smoothed progress {}", engine.progress());
    for (i, seed) in engine.particles().seeds().iter().enumerate() {
        let want = grade(0.9, seed.phase);
        let got = engine.output().colors()[i];
        assert_eq!(got, want, "particle {i} colour should follow the raw target");
        assert_ne!(got, grade(engine.progress(), seed.phase));
    }
}

#[test]
fn test_alpha_ignores_base_alpha_seed() {
    let mut engine = Choreography::new(ChoreographyConfig::with_particle_count(100)).unwrap();
    engine.set_progress_target(0.5);
    engine.step(FrameTime::new(0.0, 1.0 / 60.0));
    let alphas = engine.output().alphas();
    assert!(alphas.iter().all(|a| *a == alphas[0]));
}
