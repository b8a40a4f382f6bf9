pub mod binding;
pub mod body;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod input;
pub mod rapier;
pub mod rapier_world;
pub mod utils;

pub use binding::BoundController;
pub use body::LocomotionBody;
pub use config::{AxisPolicy, LocomotionConfig};
pub use constants::{
    DEFAULT_MAX_SPEED, FACING_EPS_SQ, FIXED_TIMESTEP_HZ, GRAVITY_MPS2, PLAYER_CAPSULE_HALF_HEIGHT,
    PLAYER_CAPSULE_RADIUS,
};
pub use controller::{LocomotionController, StepOutcome};
pub use error::LocomotionError;
pub use input::{Axis, AxisSample, AxisSource};
pub use rapier::{ColliderShapeDef, DrivenBody, WorldStaticDef, collider_from_def};
pub use rapier_world::{PhysicsWorld, PlayerBodyDef, rapier3d};
pub use utils::{clamp_magnitude, look_rotation, planar_speed};
