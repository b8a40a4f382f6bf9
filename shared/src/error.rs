use rapier3d::prelude::RigidBodyHandle;
use thiserror::Error;

/// Failures surfaced when binding or driving a locomotion controller.
///
/// None of these occur during normal ticking: they all mean the host broke
/// the binding contract (no body, wrong kind of body) or supplied a bad config.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LocomotionError {
    #[error("no rigid body found for handle {0:?}")]
    MissingBody(RigidBodyHandle),

    #[error("rigid body {0:?} is not dynamic and cannot receive velocity changes")]
    NotDynamic(RigidBodyHandle),

    #[error("max speed must be positive and finite, got {0}")]
    InvalidMaxSpeed(f32),
}
