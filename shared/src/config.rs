/*!
Locomotion controller configuration.

A controller is configured once, before it is bound, and the values are
read-only afterwards. Defaults mirror the tunables a designer would see on a
freshly added controller.
*/

use crate::{constants::DEFAULT_MAX_SPEED, error::LocomotionError, input::AxisSample};

/// How the controller treats axis values outside of `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisPolicy {
    /// Use the values as delivered. The input layer owns normalization.
    #[default]
    Trust,
    /// Clamp each axis into `[-1, 1]` before building the movement intent.
    Clamp,
}

impl AxisPolicy {
    #[inline]
    pub fn apply(self, axes: AxisSample) -> AxisSample {
        match self {
            AxisPolicy::Trust => axes,
            AxisPolicy::Clamp => axes.clamped(),
        }
    }
}

/// Tunables for a [`crate::LocomotionController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocomotionConfig {
    /// Maximum speed (meters per second). Also scales the per-tick velocity change.
    pub max_speed: f32,
    /// Treatment of out-of-range axis samples.
    pub axis_policy: AxisPolicy,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            max_speed: DEFAULT_MAX_SPEED,
            axis_policy: AxisPolicy::Trust,
        }
    }
}

impl LocomotionConfig {
    pub fn with_max_speed(max_speed: f32) -> Self {
        Self {
            max_speed,
            ..Self::default()
        }
    }

    /// Check the configuration before a controller is built from it.
    pub fn validate(&self) -> Result<(), LocomotionError> {
        if !self.max_speed.is_finite() || self.max_speed <= 0.0 {
            return Err(LocomotionError::InvalidMaxSpeed(self.max_speed));
        }
        Ok(())
    }
}
