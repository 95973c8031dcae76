//! Progress → stage weights → active blend pair.

/// Width of each stage window in progress units.
pub const STAGE_WIDTH: f32 = 0.2;

/// Ramp slope inside a window, `1 / STAGE_WIDTH`.
pub const STAGE_RAMP: f32 = 5.0;

/// Number of formations (and stage windows).
pub const STAGE_COUNT: usize = 5;

/// The five macro-formations, in narrative order.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Formation {
    Sphere      = 0, // Genesis
    Explosion   = 1, // Expansion
    Torus       = 2, // Collapse
    DoubleHelix = 3, // Formation
    Lemniscate  = 4, // Infinity
}

impl Formation {
    pub const ALL: [Formation; STAGE_COUNT] = [
        Formation::Sphere,
        Formation::Explosion,
        Formation::Torus,
        Formation::DoubleHelix,
        Formation::Lemniscate,
    ];

    /// Stage index, also the slot of this formation's weight.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Formation::Sphere => "genesis",
            Formation::Explosion => "expansion",
            Formation::Torus => "collapse",
            Formation::DoubleHelix => "formation",
            Formation::Lemniscate => "infinity",
        }
    }
}

/// `clamp((p - i * 0.2) * 5, 0, 1)`, evaluated as `p * 5 - i` so the
/// window edges `0.2 * k` land on exactly 0 and 1 in `f32`.
#[inline]
pub fn stage_weight(stage: usize, progress: f32) -> f32 {
    (progress * STAGE_RAMP - stage as f32).clamp(0.0, 1.0)
}

/// All five stage weights for one progress value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageWeights(pub [f32; STAGE_COUNT]);

impl StageWeights {
    pub fn from_progress(progress: f32) -> Self {
        let mut w = [0.0; STAGE_COUNT];
        for (i, slot) in w.iter_mut().enumerate() {
            *slot = stage_weight(i, progress);
        }
        Self(w)
    }

    /// Weight fed to `formation`'s generator.
    #[inline]
    pub fn of(&self, formation: Formation) -> f32 {
        self.0[formation.index()]
    }
}

/// The two formations being interpolated this tick.
///
/// `from == to` means a single formation is held (below the first
/// transition); `factor` is then 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlendPair {
    pub from: Formation,
    pub to: Formation,
    pub factor: f32,
}

impl BlendPair {
    #[inline]
    pub fn is_hold(&self) -> bool {
        self.from == self.to
    }
}

/// One row per progress window: `(window start, from, to)`. The blend
/// factor is the weight of the `to` formation's stage.
const TRANSITIONS: [(f32, Formation, Formation); STAGE_COUNT] = [
    (0.0, Formation::Sphere, Formation::Sphere),
    (0.2, Formation::Sphere, Formation::Explosion),
    (0.4, Formation::Explosion, Formation::Torus),
    (0.6, Formation::Torus, Formation::DoubleHelix),
    (0.8, Formation::DoubleHelix, Formation::Lemniscate),
];

/// Select the active pair for `progress` (smoothed, in `[0, 1]`).
pub fn active_blend(progress: f32, weights: &StageWeights) -> BlendPair {
    let (_, from, to) = TRANSITIONS
        .iter()
        .rev()
        .find(|(start, _, _)| progress >= *start)
        .copied()
        .unwrap_or(TRANSITIONS[0]);

    let factor = if from == to { 0.0 } else { weights.of(to) };
    BlendPair { from, to, factor }
}
