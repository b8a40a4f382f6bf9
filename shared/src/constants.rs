/// Default maximum planar speed of a locomotion controller (meters per second).
pub const DEFAULT_MAX_SPEED: f32 = 4.0;

/// Minimum squared length of the movement intent required to update facing.
///
/// Below this the player is considered to have released the input and the
/// body keeps whatever orientation it had.
pub const FACING_EPS_SQ: f32 = 0.001;

/// Practical small distance for comparisons (meters).
pub const DIST_EPS: f32 = 1.0e-6;

/// Rate of the fixed simulation step (ticks per second).
///
/// A 0.02s step, decoupled from the render frame rate.
pub const FIXED_TIMESTEP_HZ: f64 = 50.0;

/// Gravity magnitude in meters per second squared (positive value).
///
/// Applied as `-Y` by the physics world.
pub const GRAVITY_MPS2: f32 = 9.81;

/// Radius of the default player capsule (meters).
pub const PLAYER_CAPSULE_RADIUS: f32 = 0.3;

/// Half height of the cylindrical part of the default player capsule (meters).
pub const PLAYER_CAPSULE_HALF_HEIGHT: f32 = 0.6;

/// Density of the default player capsule (kg/m^3).
pub const PLAYER_DENSITY: f32 = 1.0;
