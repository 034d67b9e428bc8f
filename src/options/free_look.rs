use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::free_look::{DEFAULT_BLEND_RATE, DEFAULT_SENSITIVITY};
use crate::error::FlypathError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Free Look", inline)]
#[serde(default)]
/// Pointer-driven look-at offset parameters.
pub struct FreeLookOptions {
    /// Whether free-look starts enabled.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// World units of target offset at full pointer deflection.
    #[schemars(title = "Sensitivity", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub sensitivity: f32,
    /// Blend rate per second toward the desired offset.
    #[schemars(title = "Response", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub blend_rate: f32,
}

impl FreeLookOptions {
    /// Reject settings the free-look engine cannot use.
    pub fn validate(&self) -> Result<(), FlypathError> {
        if !self.sensitivity.is_finite() || !self.blend_rate.is_finite() {
            return Err(FlypathError::InvalidOption(
                "free_look values must be finite".to_owned(),
            ));
        }
        if self.blend_rate < 0.0 {
            return Err(FlypathError::InvalidOption(format!(
                "free_look.blend_rate must not be negative, got {}",
                self.blend_rate
            )));
        }
        Ok(())
    }
}

impl Default for FreeLookOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            sensitivity: DEFAULT_SENSITIVITY,
            blend_rate: DEFAULT_BLEND_RATE,
        }
    }
}
