use thiserror::Error;

/// Rejected engine configuration.
///
/// These are the only failures the engine reports: once a `Choreography`
/// exists, every tick input is clamped rather than rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("particle count must be at least 1, got {0}")]
    ZeroParticles(usize),

    #[error("attraction must be a positive finite number, got {0}")]
    InvalidAttraction(f32),

    #[error("friction must lie in [0, 1), got {0}")]
    InvalidFriction(f32),

    #[error("progress smoothing must lie in (0, 1], got {0}")]
    InvalidSmoothing(f32),
}
