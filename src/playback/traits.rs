//! Core trait for progress smoothing strategies.

use std::sync::Arc;

/// Smoothed curve parameter carried from one frame to the next.
///
/// Starts at 0 and is only reset by an explicit re-initialization; switching
/// strategies keeps the accumulated value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SmoothingState {
    /// Last curve parameter handed to the path sampler.
    pub effective_t: f32,
}

impl SmoothingState {
    /// State seeded at `effective_t`.
    pub fn new(effective_t: f32) -> Self {
        Self { effective_t }
    }
}

/// Turns raw progress into the curve parameter sampled this frame.
///
/// Implementations are stateless; the accumulator is passed in and the next
/// value returned, so each strategy can be tested from a seeded state.
/// See [`Snap`](super::Snap) and [`Cinematic`](super::Cinematic).
pub trait SmoothingStrategy: Send + Sync {
    /// Advance `state` one frame toward `raw_t`.
    ///
    /// `raw_t` is not clamped here; the path sampler clamps it.
    fn update(
        &self,
        raw_t: f32,
        state: SmoothingState,
        delta_time: f32,
    ) -> SmoothingState;

    /// Optional name for debugging/logging.
    fn name(&self) -> &'static str {
        "unnamed"
    }
}

/// Type alias for shared strategy references.
pub type SharedStrategy = Arc<dyn SmoothingStrategy>;

/// Create a shared strategy from any [`SmoothingStrategy`] implementation.
pub fn shared<S: SmoothingStrategy + 'static>(strategy: S) -> SharedStrategy {
    Arc::new(strategy)
}
