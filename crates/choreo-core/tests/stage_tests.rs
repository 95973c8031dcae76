use choreo_core::stage::{active_blend, stage_weight, Formation, StageWeights};
use proptest::prelude::*;

proptest! {
    #[test]
    fn stage_weight_stays_in_unit_range(p in 0.0f32..=1.0, i in 0usize..5) {
        let w = stage_weight(i, p);
        prop_assert!((0.0..=1.0).contains(&w), "stage({}, {}) = {}", i, p, w);
    }

    #[test]
    fn stage_weight_is_monotonic(a in 0.0f32..=1.0, b in 0.0f32..=1.0, i in 0usize..5) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            stage_weight(i, lo) <= stage_weight(i, hi),
            "stage({}) decreased between {} and {}", i, lo, hi
        );
    }

    #[test]
    fn blend_factor_in_unit_range(p in 0.0f32..=1.0) {
        let pair = active_blend(p, &StageWeights::from_progress(p));
        prop_assert!((0.0..=1.0).contains(&pair.factor));
    }
}

#[test]
fn test_new_stage_starts_at_zero_on_boundaries() {
    for (p, entered) in [
        (0.2, Formation::Explosion),
        (0.4, Formation::Torus),
        (0.6, Formation::DoubleHelix),
        (0.8, Formation::Lemniscate),
    ] {
        let pair = active_blend(p, &StageWeights::from_progress(p));
        assert_eq!(pair.to, entered, "wrong stage entered at p={p}");
        assert_eq!(pair.factor, 0.0, "blend factor at boundary p={p} should be 0");
    }
}

#[test]
fn test_previous_stage_complete_on_boundaries() {
    // just below each boundary the outgoing transition is (almost) done
    for (p, stage) in [(0.4f32, 1), (0.6, 2), (0.8, 3)] {
        let below = p - 1e-4;
        let w = stage_weight(stage, below);
        assert!(w > 0.999, "stage {stage} at {below} only reached {w}");
    }
}

#[test]
fn test_pairs_advance_in_order() {
    let mut seen = Vec::new();
    for k in 0..=1000 {
        let p = k as f32 / 1000.0;
        let pair = active_blend(p, &StageWeights::from_progress(p));
        if seen.last() != Some(&pair.to) {
            seen.push(pair.to);
        }
    }
    assert_eq!(seen, Formation::ALL.to_vec());
}
