use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FlypathError;
use crate::path::resample::DEFAULT_RESOLUTION;
use crate::path::CurveKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Path", inline)]
#[serde(default)]
/// Curve construction parameters.
pub struct PathOptions {
    /// Intervals sampled from each coarse curve before refitting.
    #[schemars(title = "Resolution", range(min = 1, max = 20000), extend("step" = 100))]
    pub resolution: usize,
    /// Parametrization of the curves through the authored keyframes.
    #[schemars(skip)]
    pub coarse_kind: CurveKind,
    /// Parametrization of the refitted curves.
    #[schemars(skip)]
    pub fine_kind: CurveKind,
}

impl PathOptions {
    /// Reject settings the curve builder cannot use.
    pub fn validate(&self) -> Result<(), FlypathError> {
        if self.resolution == 0 {
            return Err(FlypathError::InvalidOption(
                "path.resolution must be at least 1".to_owned(),
            ));
        }
        for (name, kind) in
            [("coarse_kind", self.coarse_kind), ("fine_kind", self.fine_kind)]
        {
            if let CurveKind::Uniform { tension } = kind {
                if !tension.is_finite() {
                    return Err(FlypathError::InvalidOption(format!(
                        "path.{name} tension must be finite"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            coarse_kind: CurveKind::Centripetal,
            fine_kind: CurveKind::UNIFORM,
        }
    }
}
