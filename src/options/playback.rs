use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FlypathError;
use crate::playback::{PlaybackMode, SmoothingClock, DEFAULT_FACTOR};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Playback", inline)]
#[serde(default)]
/// Progress smoothing parameters.
pub struct PlaybackOptions {
    /// Mode used until the host switches it.
    #[schemars(title = "Mode")]
    pub mode: PlaybackMode,
    /// Blend factor toward raw progress in cinematic mode (lower = smoother).
    #[schemars(title = "Smoothing", range(min = 0.005, max = 1.0), extend("step" = 0.005))]
    pub cinematic_factor: f32,
    /// Whether the cinematic factor is per frame or scaled by delta time.
    #[schemars(skip)]
    pub clock: SmoothingClock,
}

impl PlaybackOptions {
    /// Reject settings the smoother cannot use.
    pub fn validate(&self) -> Result<(), FlypathError> {
        if !(self.cinematic_factor > 0.0 && self.cinematic_factor <= 1.0) {
            return Err(FlypathError::InvalidOption(format!(
                "playback.cinematic_factor must be in (0, 1], got {}",
                self.cinematic_factor
            )));
        }
        if let SmoothingClock::DeltaScaled { reference_fps } = self.clock {
            if !(reference_fps.is_finite() && reference_fps > 0.0) {
                return Err(FlypathError::InvalidOption(format!(
                    "playback.clock.reference_fps must be positive, got \
                     {reference_fps}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            mode: PlaybackMode::Cinematic,
            cinematic_factor: DEFAULT_FACTOR,
            clock: SmoothingClock::PerFrame,
        }
    }
}
