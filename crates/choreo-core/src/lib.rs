//! Scroll-driven particle choreography.
//!
//! A fixed set of particles morphs through five formations (sphere,
//! explosion, torus, double helix, lemniscate) as a single progress scalar
//! moves from 0 to 1. Each tick produces flat position/colour/size/alpha
//! arrays for an external point-sprite renderer.

pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod integrator;
pub mod math;
pub mod output;
pub mod particle;
pub mod progress;
pub mod shapes;
pub mod stage;

pub use config::ChoreographyConfig;
pub use engine::{Choreography, FrameTime};
pub use error::ConfigError;
pub use output::{AttributeBuffers, DirtyFlags};
pub use stage::{BlendPair, Formation, StageWeights};
