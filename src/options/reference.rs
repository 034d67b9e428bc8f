use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::reference::DEFAULT_SPIN_RATE;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Reference Object", inline)]
#[serde(default)]
/// Spin of the object the camera path is anchored to.
pub struct ReferenceOptions {
    /// Whether the reference object spins.
    #[schemars(title = "Spin")]
    pub spinning: bool,
    /// Spin rate in radians per second (the object turns clockwise seen
    /// from above).
    #[schemars(title = "Spin Rate", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub spin_rate: f32,
}

impl Default for ReferenceOptions {
    fn default() -> Self {
        Self {
            spinning: true,
            spin_rate: DEFAULT_SPIN_RATE,
        }
    }
}
