//! Yaw of the object the camera path is anchored to.

use crate::options::ReferenceOptions;

/// Default spin rate of the reference object, radians per second.
pub const DEFAULT_SPIN_RATE: f32 = 0.03;

/// Slow constant spin of the showcased object about the vertical axis.
///
/// The yaw decreases while spinning; stopping the spin resets the object to
/// its authored orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceSpin {
    yaw: f32,
    rate: f32,
    spinning: bool,
}

impl Default for ReferenceSpin {
    fn default() -> Self {
        Self::new(DEFAULT_SPIN_RATE, true)
    }
}

impl ReferenceSpin {
    /// Spin at `rate` radians per second, starting at yaw 0.
    pub fn new(rate: f32, spinning: bool) -> Self {
        Self {
            yaw: 0.0,
            rate,
            spinning,
        }
    }

    /// Spin configured from `options`.
    pub fn from_options(options: &ReferenceOptions) -> Self {
        Self::new(options.spin_rate, options.spinning)
    }

    /// Advance by `delta_time` seconds and return the new yaw.
    pub fn advance(&mut self, delta_time: f32) -> f32 {
        if self.spinning {
            self.yaw -= delta_time * self.rate;
        } else {
            self.yaw = 0.0;
        }
        self.yaw
    }

    /// Current yaw in radians.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Start or stop spinning.
    pub fn set_spinning(&mut self, spinning: bool) {
        self.spinning = spinning;
    }
}
