//! Fixed-rate host for the Rapier world.
//!
//! Locomotion writes velocities first, then the world integrates one step. Both run in
//! `FixedUpdate`, decoupled from the render frame rate.
//!
//! Simulation space has +X to the right and +Z forward, away from the camera.
//! Bevy's render space is right-handed with -Z forward, so poses are mirrored
//! across Z on their way to the renderer.

use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use shared::{FIXED_TIMESTEP_HZ, PhysicsWorld};

use crate::world::level_statics;

/// The simulation's physics world. Only `FixedUpdate` systems mutate it.
#[derive(Resource)]
pub struct Physics(pub PhysicsWorld);

/// Ordering inside a fixed tick.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedSet {
    /// Controllers write velocities and orientations.
    Locomotion,
    /// The physics world integrates one step.
    Step,
}

pub(super) fn plugin(app: &mut App) {
    let dt = (1.0 / FIXED_TIMESTEP_HZ) as f32;

    app.insert_resource(Time::<Fixed>::from_hz(FIXED_TIMESTEP_HZ));
    app.insert_resource(Physics(PhysicsWorld::build(level_statics(), dt)));

    app.configure_sets(FixedUpdate, (FixedSet::Locomotion, FixedSet::Step).chain());
    app.add_systems(FixedUpdate, step_physics.in_set(FixedSet::Step));
}

fn step_physics(mut physics: ResMut<Physics>) {
    physics.0.step();
}

/// Simulation position to render position.
#[inline]
pub fn to_vec3(v: &Vector3<f32>) -> Vec3 {
    Vec3::new(v.x, v.y, -v.z)
}

/// Simulation orientation to render orientation.
///
/// Conjugating by the Z mirror flips the X and Y parts of the quaternion, and the
/// body's +Z forward becomes Bevy's `Transform::forward()`.
#[inline]
pub fn to_quat(q: &UnitQuaternion<f32>) -> Quat {
    Quat::from_xyzw(-q.i, -q.j, q.k, q.w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::look_rotation;

    const EPS: f32 = 1.0e-5;

    #[test]
    fn forward_in_simulation_is_away_from_the_camera() {
        assert_eq!(to_vec3(&Vector3::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn facing_survives_the_mirror() {
        for dir in [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(-0.6, 0.0, -0.8),
        ] {
            let rotation = to_quat(&look_rotation(dir).unwrap());
            let forward = Transform::from_rotation(rotation).forward();
            assert!(
                (forward.as_vec3() - to_vec3(&dir)).length() < EPS,
                "{forward:?} vs {dir:?}"
            );
        }
    }
}
