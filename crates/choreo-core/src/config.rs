use crate::error::ConfigError;

/// Engine parameters fixed for the lifetime of a `Choreography`.
#[derive(Clone, Debug, PartialEq)]
pub struct ChoreographyConfig {
    /// Number of particles; allocated once and never changed.
    pub particle_count: usize,
    /// Pull strength toward the blended target (per tick).
    pub attraction: f32,
    /// Velocity retained per tick. Must stay below 1 for convergence.
    pub friction: f32,
    /// Fraction of the remaining distance the smoothed progress covers per tick.
    pub progress_smoothing: f32,
    /// RNG seed for the one-time particle seed generation.
    pub seed: u64,
}

impl Default for ChoreographyConfig {
    fn default() -> Self {
        Self {
            particle_count: 8000,
            attraction: 0.05,
            friction: 0.85,
            progress_smoothing: 0.08,
            seed: 0x5EED_F1E1D,
        }
    }
}

impl ChoreographyConfig {
    /// Config with the default tuning and a custom particle count.
    pub fn with_particle_count(particle_count: usize) -> Self {
        Self {
            particle_count,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::ZeroParticles(self.particle_count));
        }
        if !self.attraction.is_finite() || self.attraction <= 0.0 {
            return Err(ConfigError::InvalidAttraction(self.attraction));
        }
        if !(0.0..1.0).contains(&self.friction) {
            return Err(ConfigError::InvalidFriction(self.friction));
        }
        if !(self.progress_smoothing > 0.0 && self.progress_smoothing <= 1.0) {
            return Err(ConfigError::InvalidSmoothing(self.progress_smoothing));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(ChoreographyConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_nan_friction_rejected() {
        let config = ChoreographyConfig {
            friction: f32::NAN,
            ..ChoreographyConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFriction(_))
        ));
    }

    #[test]
    fn test_unit_friction_rejected() {
        // friction == 1 never dissipates energy
        let config = ChoreographyConfig {
            friction: 1.0,
            ..ChoreographyConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidFriction(1.0)));
    }
}
