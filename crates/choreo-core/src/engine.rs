use glam::Vec3;
use log::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::color::{alpha_for, grade};
use crate::config::ChoreographyConfig;
use crate::error::ConfigError;
use crate::integrator::integrate;
use crate::math::Rgb;
use crate::output::AttributeBuffers;
use crate::particle::ParticleSet;
use crate::progress::ProgressState;
use crate::shapes::dispatcher::{blended_target, ParticleSample};
use crate::stage::{active_blend, BlendPair, StageWeights};

/// Clock inputs for one tick, supplied by the host's frame loop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the system started (monotonic).
    pub elapsed: f32,
    /// Seconds since the previous tick. Recorded only; motion is per tick.
    /// Non-finite values are stored as 0.
    pub delta: f32,
}

impl FrameTime {
    pub fn new(elapsed: f32, delta: f32) -> Self {
        Self { elapsed, delta }
    }
}

/// The choreography engine: particles, progress, and output buffers.
///
/// One call to [`Choreography::step`] is one rendered frame. Ticks never
/// overlap; the renderer reads [`Choreography::output`] between them.
pub struct Choreography {
    config: ChoreographyConfig,
    particles: ParticleSet,
    progress: ProgressState,
    target_clamped: bool,
    colors: Vec<Rgb>,
    output: AttributeBuffers,
    active: BlendPair,
    last_frame: FrameTime,
    ticks: u64,
}

impl Choreography {
    pub fn new(config: ChoreographyConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let particles = ParticleSet::seeded(config.particle_count, config.seed);
        info!(
            "choreography created: {} particles, seed {:#x}",
            config.particle_count, config.seed
        );
        Ok(Self::from_particles(config, particles))
    }

    /// Build around an existing particle set (e.g. hand-made seeds).
    ///
    /// `config.particle_count` is overwritten with the set's size.
    pub fn with_particles(
        mut config: ChoreographyConfig,
        particles: ParticleSet,
    ) -> Result<Self, ConfigError> {
        config.particle_count = particles.len();
        config.validate()?;
        Ok(Self::from_particles(config, particles))
    }

    fn from_particles(config: ChoreographyConfig, particles: ParticleSet) -> Self {
        let weights = StageWeights::from_progress(0.0);
        let colors = particles.seeds().iter().map(|s| grade(0.0, s.phase)).collect();
        let output = AttributeBuffers::new(&particles);
        Self {
            progress: ProgressState::new(config.progress_smoothing),
            target_clamped: false,
            active: active_blend(0.0, &weights),
            config,
            particles,
            colors,
            output,
            last_frame: FrameTime::default(),
            ticks: 0,
        }
    }

    /// Set the progress the smoothed value should chase. Out-of-range
    /// values are clamped to `[0, 1]`. Only the transition into clamping
    /// is logged, since overscrolling hosts repeat the same value per frame.
    pub fn set_progress_target(&mut self, value: f32) {
        let clamped = self.progress.set_target(value);
        if clamped && !self.target_clamped {
            debug!("progress target {value} clamped to {}", self.progress.target());
        }
        self.target_clamped = clamped;
    }

    /// Run one tick: smooth progress, blend targets, integrate, grade
    /// colour, publish.
    pub fn step(&mut self, frame: FrameTime) {
        let frame = FrameTime::new(finite_or_zero(frame.elapsed), finite_or_zero(frame.delta));
        let time = frame.elapsed;
        self.last_frame = frame;

        let p = self.progress.advance();
        let weights = StageWeights::from_progress(p);
        let pair = active_blend(p, &weights);
        if (pair.from, pair.to) != (self.active.from, self.active.to) {
            debug!(
                "stage change at progress {p:.3}: {} -> {}",
                pair.from.name(),
                pair.to.name()
            );
        }
        self.active = pair;

        self.compute_targets(&pair, &weights, time);

        integrate(
            &mut self.particles.position,
            &mut self.particles.velocity,
            &self.particles.target_pos,
            self.config.attraction,
            self.config.friction,
        );

        // colour follows the raw target, position the smoothed value
        let raw = self.progress.target();
        for (color, seed) in self.colors.iter_mut().zip(self.particles.seeds()) {
            *color = grade(raw, seed.phase);
        }

        self.output
            .publish(&self.particles.position, &self.colors, alpha_for(raw));
        self.ticks += 1;
    }

    /// Blended target for every particle.
    fn compute_targets(&mut self, pair: &BlendPair, weights: &StageWeights, time: f32) {
        let count = self.particles.len();
        let (seeds, targets) = self.particles.seeds_and_targets_mut();

        let target_of = |i: usize| -> Vec3 {
            blended_target(pair, weights, ParticleSample::new(&seeds[i], i, count), time)
        };

        #[cfg(feature = "parallel")]
        {
            targets
                .par_iter_mut()
                .enumerate()
                .for_each(|(i, target)| *target = target_of(i));
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (i, target) in targets.iter_mut().enumerate() {
                *target = target_of(i);
            }
        }
    }

    /// Back to the initial state: particles at rest on their seed sphere,
    /// progress and target at 0. Seeds are kept.
    pub fn reset(&mut self) {
        self.particles.reset_motion();
        self.progress.reset();
        self.active = active_blend(0.0, &StageWeights::from_progress(0.0));
        self.target_clamped = false;
        for (color, seed) in self.colors.iter_mut().zip(self.particles.seeds()) {
            *color = grade(0.0, seed.phase);
        }
        self.output
            .publish(&self.particles.position, &self.colors, alpha_for(0.0));
        self.ticks = 0;
    }

    pub fn config(&self) -> &ChoreographyConfig {
        &self.config
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Read-only view of seeds and runtime state.
    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    /// Whether the last progress target had to be clamped.
    pub fn progress_target_clamped(&self) -> bool {
        self.target_clamped
    }

    /// Smoothed progress.
    pub fn progress(&self) -> f32 {
        self.progress.current()
    }

    /// Raw progress target.
    pub fn progress_target(&self) -> f32 {
        self.progress.target()
    }

    /// Pair blended on the last tick.
    pub fn active_blend(&self) -> BlendPair {
        self.active
    }

    pub fn last_frame(&self) -> FrameTime {
        self.last_frame
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn output(&self) -> &AttributeBuffers {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut AttributeBuffers {
        &mut self.output
    }
}

#[inline]
fn finite_or_zero(x: f32) -> f32 {
    if x.is_finite() {
        x
    } else {
        0.0
    }
}
