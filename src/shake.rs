//! Screen shake driven by line clears
//!
//! Plug a [`ScreenShake`] into the engine as its effects sink, decay it once per
//! frame, and offset the drawing by [`ScreenShake::offset`].

use rand::Rng;

use stackfall_core::EffectsSink;

/// Per-frame decay factor for the default frontend
pub const SHAKE_DECAY: f32 = 0.85;

const MAX_MAGNITUDE: f32 = 16.0;
/// Below this the shake is not drawn at all
const MIN_VISIBLE: f32 = 0.25;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenShake {
    magnitude: f32,
}

impl ScreenShake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn magnitude(&self) -> f32 {
        self.magnitude
    }

    /// Add to the magnitude, capped at 16
    pub fn add(&mut self, amount: f32) {
        self.magnitude = (self.magnitude + amount).min(MAX_MAGNITUDE);
    }

    /// Scale the magnitude by `decay` (call once per frame)
    pub fn update(&mut self, decay: f32) {
        self.magnitude *= decay;
    }

    /// Random draw offset within ±magnitude on both axes
    pub fn offset(&self) -> (f32, f32) {
        self.offset_with(&mut rand::thread_rng())
    }

    pub fn offset_with<R: Rng + ?Sized>(&self, rng: &mut R) -> (f32, f32) {
        if self.magnitude < MIN_VISIBLE {
            return (0.0, 0.0);
        }
        let m = self.magnitude;
        (rng.gen_range(-m..=m), rng.gen_range(-m..=m))
    }
}

impl EffectsSink for ScreenShake {
    fn shake(&mut self, amount: f32) {
        self.add(amount);
    }
}
