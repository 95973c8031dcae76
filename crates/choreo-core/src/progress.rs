use crate::math::clamp01;

/// Smoothed progress scalar.
///
/// The host sets a target; each tick the smoothed value moves a fixed
/// fraction of the remaining distance toward it. The smoothed value drives
/// formation blending while the raw target drives colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressState {
    current: f32,
    target: f32,
    smoothing: f32,
}

impl ProgressState {
    pub fn new(smoothing: f32) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            smoothing,
        }
    }

    /// Store a new target, clamped to `[0, 1]`.
    ///
    /// Returns `true` when the input had to be clamped.
    pub fn set_target(&mut self, value: f32) -> bool {
        let clamped = clamp01(value);
        self.target = clamped;
        clamped != value
    }

    /// Advance one tick: `current += (target - current) * smoothing`.
    pub fn advance(&mut self) -> f32 {
        self.current += (self.target - self.current) * self.smoothing;
        self.current
    }

    /// Smoothed progress.
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Raw (unsmoothed) target.
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn reset(&mut self) {
        self.current = 0.0;
        self.target = 0.0;
    }
}
