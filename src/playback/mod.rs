//! Playback modes and the smoothing strategies behind them.
//!
//! Strategies are decoupled from the state they advance: the accumulator
//! lives in [`SmoothingState`], owned by the caller and passed in each
//! frame. Switching modes does not reset it, so a switch after the smoothed
//! value has drifted from raw progress shows as a one-frame jump.

mod cinematic;
mod progress;
mod snap;
mod traits;

pub use cinematic::{Cinematic, SmoothingClock, DEFAULT_FACTOR};
pub use progress::step_index;
pub use snap::Snap;
pub use traits::{shared, SharedStrategy, SmoothingState, SmoothingStrategy};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::options::PlaybackOptions;

/// Caller-selected playback mode.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackMode {
    /// Camera pose tracks progress directly.
    Snap,
    /// Camera pose lags progress through exponential smoothing.
    #[default]
    Cinematic,
}

impl PlaybackMode {
    /// Strategy implementing this mode with the given options.
    pub fn strategy(self, options: &PlaybackOptions) -> SharedStrategy {
        match self {
            Self::Snap => shared(Snap),
            Self::Cinematic => shared(Cinematic::new(
                options.cinematic_factor,
                options.clock,
            )),
        }
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Snap => Self::Cinematic,
            Self::Cinematic => Self::Snap,
        }
    }
}
