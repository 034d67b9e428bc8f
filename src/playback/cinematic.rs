//! Exponentially smoothed progress for gradual camera motion.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::traits::{SmoothingState, SmoothingStrategy};

/// Default per-frame blend factor toward raw progress.
pub const DEFAULT_FACTOR: f32 = 0.05;

/// How the blend factor relates to elapsed time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SmoothingClock {
    /// The factor is applied once per update, whatever the frame time.
    /// Perceived smoothing speed therefore scales with the frame rate.
    #[default]
    PerFrame,
    /// The factor is defined for a frame at `reference_fps` and rescaled by
    /// the actual delta time, so convergence speed is frame-rate independent.
    DeltaScaled {
        /// Frame rate at which the factor applies unchanged.
        reference_fps: f32,
    },
}

/// First-order exponential smoother:
/// `effective_t := lerp(effective_t, raw_t, factor)`.
///
/// With a factor below one the value approaches raw progress monotonically
/// and never overshoots it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cinematic {
    /// Blend factor in `(0, 1]`.
    pub factor: f32,
    /// Relation between the factor and elapsed time.
    pub clock: SmoothingClock,
}

impl Cinematic {
    /// Smoother with a custom factor and clock.
    pub fn new(factor: f32, clock: SmoothingClock) -> Self {
        Self { factor, clock }
    }

    /// Weight given to raw progress for a frame lasting `delta_time`.
    pub fn blend_weight(&self, delta_time: f32) -> f32 {
        match self.clock {
            SmoothingClock::PerFrame => self.factor,
            SmoothingClock::DeltaScaled { reference_fps } => {
                let frames = (delta_time * reference_fps).max(0.0);
                if !frames.is_finite() {
                    return self.factor;
                }
                1.0 - (1.0 - self.factor).powf(frames)
            }
        }
    }
}

impl Default for Cinematic {
    fn default() -> Self {
        Self::new(DEFAULT_FACTOR, SmoothingClock::PerFrame)
    }
}

impl SmoothingStrategy for Cinematic {
    fn update(
        &self,
        raw_t: f32,
        state: SmoothingState,
        delta_time: f32,
    ) -> SmoothingState {
        let w = self.blend_weight(delta_time);
        let t = state.effective_t;
        SmoothingState::new(t + (raw_t - t) * w)
    }

    fn name(&self) -> &'static str {
        "cinematic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_from_rest_moves_by_the_factor() {
        let next =
            Cinematic::default().update(1.0, SmoothingState::default(), 0.016);
        assert_eq!(next.effective_t, 0.05);
    }

    #[test]
    fn converges_without_overshoot() {
        let smoother = Cinematic::default();
        let raw = 0.7;
        let mut state = SmoothingState::default();
        let mut gap = raw - state.effective_t;
        for _ in 0..500 {
            state = smoother.update(raw, state, 1.0 / 60.0);
            let next_gap = raw - state.effective_t;
            assert!(
                state.effective_t <= raw,
                "overshot to {}",
                state.effective_t
            );
            assert!(next_gap <= gap);
            gap = next_gap;
        }
        assert!(gap < 1e-4);
    }

    #[test]
    fn converges_downward_too() {
        let smoother = Cinematic::default();
        let mut state = SmoothingState::new(1.0);
        for _ in 0..400 {
            let prev = state.effective_t;
            state = smoother.update(0.2, state, 1.0 / 60.0);
            assert!(state.effective_t <= prev);
            assert!(state.effective_t >= 0.2);
        }
    }

    #[test]
    fn per_frame_clock_ignores_delta_time() {
        let smoother = Cinematic::default();
        assert_eq!(smoother.blend_weight(1.0 / 30.0), 0.05);
        assert_eq!(smoother.blend_weight(1.0 / 144.0), 0.05);
    }

    #[test]
    fn delta_scaled_clock_matches_at_reference_rate() {
        let smoother = Cinematic::new(
            0.05,
            SmoothingClock::DeltaScaled {
                reference_fps: 60.0,
            },
        );
        assert!((smoother.blend_weight(1.0 / 60.0) - 0.05).abs() < 1e-5);

        // Two half-length frames land where one reference frame does.
        let half = 1.0 / 120.0;
        let mut state = SmoothingState::default();
        state = smoother.update(1.0, state, half);
        state = smoother.update(1.0, state, half);
        assert!((state.effective_t - 0.05).abs() < 1e-4);

        assert_eq!(smoother.blend_weight(0.0), 0.0);
    }
}
