//! Flat per-particle attribute arrays handed to the renderer.

use glam::Vec3;

use crate::math::Rgb;
use crate::particle::ParticleSet;

/// Which arrays changed since the renderer last acknowledged them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirtyFlags {
    pub positions: bool,
    pub colors: bool,
    pub sizes: bool,
    pub alphas: bool,
}

impl DirtyFlags {
    pub const POSITIONS: u32 = 1 << 0;
    pub const COLORS: u32 = 1 << 1;
    pub const SIZES: u32 = 1 << 2;
    pub const ALPHAS: u32 = 1 << 3;

    pub fn any(&self) -> bool {
        self.positions || self.colors || self.sizes || self.alphas
    }

    /// Bitmask form for hosts that cannot read the struct.
    pub fn bits(&self) -> u32 {
        let mut bits = 0;
        if self.positions {
            bits |= Self::POSITIONS;
        }
        if self.colors {
            bits |= Self::COLORS;
        }
        if self.sizes {
            bits |= Self::SIZES;
        }
        if self.alphas {
            bits |= Self::ALPHAS;
        }
        bits
    }
}

/// Position (xyz), colour (rgb), size and alpha per particle.
///
/// Allocated once at construction; publishing only copies into the
/// existing storage. `flat_*` views expose the interleaved `f32` layout.
pub struct AttributeBuffers {
    positions: Vec<Vec3>,
    colors: Vec<Rgb>,
    sizes: Vec<f32>,
    alphas: Vec<f32>,
    dirty: DirtyFlags,
}

impl AttributeBuffers {
    /// Buffers for `particles`; sizes are filled from the seeds here and
    /// never rewritten, but they are flagged dirty for the first upload.
    pub fn new(particles: &ParticleSet) -> Self {
        let count = particles.len();
        Self {
            positions: particles.positions().to_vec(),
            colors: vec![Rgb::default(); count],
            sizes: particles.seeds().iter().map(|s| s.base_size).collect(),
            alphas: vec![0.0; count],
            dirty: DirtyFlags {
                positions: true,
                colors: true,
                sizes: true,
                alphas: true,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Copy this tick's state in and mark the per-tick arrays dirty.
    pub fn publish(&mut self, positions: &[Vec3], colors: &[Rgb], alpha: f32) {
        self.positions.copy_from_slice(positions);
        self.colors.copy_from_slice(colors);
        self.alphas.fill(alpha);
        self.dirty.positions = true;
        self.dirty.colors = true;
        self.dirty.alphas = true;
    }

    /// Current dirty flags, without clearing them.
    pub fn dirty(&self) -> DirtyFlags {
        self.dirty
    }

    /// Return and clear the dirty flags (renderer acknowledges an upload).
    pub fn take_dirty(&mut self) -> DirtyFlags {
        std::mem::take(&mut self.dirty)
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn alphas(&self) -> &[f32] {
        &self.alphas
    }

    /// `[x0, y0, z0, x1, ...]`, length `3N`.
    pub fn flat_positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// `[r0, g0, b0, r1, ...]`, length `3N`.
    pub fn flat_colors(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }
}
