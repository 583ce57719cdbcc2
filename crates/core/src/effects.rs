//! Effects hook - the engine's only outward notification
//!
//! A frontend that wants screen shake passes an [`EffectsSink`] at
//! construction. The engine works the same without one.

/// Receives effect requests from the engine
pub trait EffectsSink {
    /// Request a screen shake of `amount` (grows with the number of rows cleared)
    fn shake(&mut self, amount: f32);
}

impl<F: FnMut(f32)> EffectsSink for F {
    fn shake(&mut self, amount: f32) {
        self(amount)
    }
}
