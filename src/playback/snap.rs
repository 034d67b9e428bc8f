//! Direct pass-through of raw progress.

use super::traits::{SmoothingState, SmoothingStrategy};

/// The camera tracks raw progress with no temporal smoothing.
///
/// The state is still written so a later switch to cinematic playback
/// continues from the current position.
#[derive(Debug, Clone, Copy, Default)]
pub struct Snap;

impl SmoothingStrategy for Snap {
    fn update(
        &self,
        raw_t: f32,
        _state: SmoothingState,
        _delta_time: f32,
    ) -> SmoothingState {
        SmoothingState::new(raw_t)
    }

    fn name(&self) -> &'static str {
        "snap"
    }
}
