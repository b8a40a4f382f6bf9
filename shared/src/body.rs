use nalgebra::{UnitQuaternion, Vector3};

use crate::utils::look_rotation;

/// The narrow surface a locomotion controller needs from a rigid body.
///
/// The physics engine owns the body (mass, collision response, gravity). The
/// controller only reads and writes linear velocity and orientation through
/// this trait, once per fixed tick.
pub trait LocomotionBody {
    /// Current linear velocity (world space, meters per second).
    fn velocity(&self) -> Vector3<f32>;

    /// Overwrite the linear velocity.
    fn set_velocity(&mut self, velocity: Vector3<f32>);

    /// Instantly change the linear velocity by `delta`, ignoring mass.
    fn apply_velocity_change(&mut self, delta: Vector3<f32>);

    /// Current orientation (world space).
    fn rotation(&self) -> UnitQuaternion<f32>;

    /// Turn the body towards `rotation`.
    ///
    /// Engine-backed bodies reach it through their own rotation integration on
    /// the next step, not instantly.
    fn move_rotation(&mut self, rotation: UnitQuaternion<f32>);

    /// Turn the body so its forward (+Z) axis faces the planar part of `direction`.
    ///
    /// Does nothing if the planar direction is degenerate.
    fn set_orientation_towards(&mut self, direction: Vector3<f32>) {
        if let Some(rotation) = look_rotation(direction) {
            self.move_rotation(rotation);
        }
    }
}
