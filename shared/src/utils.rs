use nalgebra::{UnitQuaternion, Vector3};

use crate::constants::DIST_EPS;

/// Scale `v` down so its length does not exceed `max_len`, preserving direction.
///
/// Shorter vectors are returned unchanged.
#[inline]
pub fn clamp_magnitude(v: Vector3<f32>, max_len: f32) -> Vector3<f32> {
    v.cap_magnitude(max_len)
}

/// The horizontal (XZ) part of `v`.
#[inline]
pub(crate) fn to_planar(v: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(v.x, 0.0, v.z)
}

/// Horizontal (XZ) speed of a velocity (meters per second).
#[inline]
pub fn planar_speed(v: Vector3<f32>) -> f32 {
    (v.x * v.x + v.z * v.z).sqrt()
}

/// A yaw-only rotation whose forward (+Z) axis points along the planar part of `direction`.
///
/// Returns `None` if the planar direction is too small to define a facing.
#[inline]
pub fn look_rotation(direction: Vector3<f32>) -> Option<UnitQuaternion<f32>> {
    let planar = to_planar(direction);
    if planar.norm_squared() <= DIST_EPS * DIST_EPS {
        return None;
    }

    Some(UnitQuaternion::face_towards(&planar, &Vector3::y()))
}
