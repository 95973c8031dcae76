use choreo_core::{Choreography, ChoreographyConfig, FrameTime};
use wasm_bindgen::prelude::*;

/// Browser-facing particle field.
///
/// The host feeds progress and frame times in, then reads the four
/// attribute arrays straight out of wasm memory through the pointer/length
/// accessors. Arrays stay valid until the next `step` or `reset`.
#[wasm_bindgen]
pub struct ParticleField {
    engine: Choreography,
}

#[wasm_bindgen]
impl ParticleField {
    /// Create a field with `particle_count` particles. Without `seed`, one
    /// is drawn from the browser's crypto RNG.
    #[wasm_bindgen(constructor)]
    pub fn new(particle_count: usize, seed: Option<u32>) -> Result<ParticleField, JsError> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let seed = match seed {
            Some(s) => u64::from(s),
            None => random_seed()?,
        };
        let config = ChoreographyConfig {
            particle_count,
            seed,
            ..ChoreographyConfig::default()
        };
        let engine = Choreography::new(config)?;
        log::info!("ParticleField ready: {} particles", engine.particle_count());
        Ok(ParticleField { engine })
    }

    #[wasm_bindgen]
    pub fn set_progress_target(&mut self, value: f32) {
        self.engine.set_progress_target(value);
    }

    /// Advance one frame. Returns the wall-clock cost in milliseconds.
    #[wasm_bindgen]
    pub fn step(&mut self, elapsed: f32, delta: f32) -> f32 {
        let start = js_sys::Date::now();
        self.engine.step(FrameTime::new(elapsed, delta));
        (js_sys::Date::now() - start) as f32
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.engine.particle_count()
    }

    #[wasm_bindgen]
    pub fn progress(&self) -> f32 {
        self.engine.progress()
    }

    /// Index of the formation currently being blended toward (0..=4).
    #[wasm_bindgen]
    pub fn active_stage(&self) -> u32 {
        self.engine.active_blend().to as u32
    }

    #[wasm_bindgen]
    pub fn active_blend_factor(&self) -> f32 {
        self.engine.active_blend().factor
    }

    #[wasm_bindgen]
    pub fn positions_ptr(&self) -> *const f32 {
        self.engine.output().flat_positions().as_ptr()
    }

    #[wasm_bindgen]
    pub fn colors_ptr(&self) -> *const f32 {
        self.engine.output().flat_colors().as_ptr()
    }

    #[wasm_bindgen]
    pub fn sizes_ptr(&self) -> *const f32 {
        self.engine.output().sizes().as_ptr()
    }

    #[wasm_bindgen]
    pub fn alphas_ptr(&self) -> *const f32 {
        self.engine.output().alphas().as_ptr()
    }

    /// Number of `f32`s in the position (and colour) array: `3 * count`.
    #[wasm_bindgen]
    pub fn vec3_len(&self) -> usize {
        self.engine.output().flat_positions().len()
    }

    /// Bitmask of arrays changed since the last `take_dirty`
    /// (1 positions, 2 colours, 4 sizes, 8 alphas). Clears the mask.
    #[wasm_bindgen]
    pub fn take_dirty(&mut self) -> u32 {
        self.engine.output_mut().take_dirty().bits()
    }
}

fn random_seed() -> Result<u64, JsError> {
    let mut bytes = [0u8; 8];
    getrandom::getrandom(&mut bytes).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(u64::from_le_bytes(bytes))
}
