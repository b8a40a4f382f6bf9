//! Rapier glue: static world geometry definitions and the locomotion seam for
//! Rapier rigid bodies.

use rapier3d::{
    na::{UnitQuaternion, Vector3},
    prelude::*,
};

use crate::body::LocomotionBody;

/// Canonical, engine-agnostic definition of an immutable world collider.
///
/// Conventions
/// - Units are meters.
/// - Rotation is a unit quaternion.
/// - Planes use a pose-derived normal: `normal = rotation * +Y`.
#[derive(Clone, Debug)]
pub struct WorldStaticDef {
    /// Stable unique identifier used to ensure deterministic insertion order.
    pub id: u32,
    /// World-space translation.
    pub translation: Vector<f32>,
    /// World-space rotation (unit quaternion).
    pub rotation: UnitQuaternion<f32>,
    /// Collider shape parameters.
    pub shape: ColliderShapeDef,
}

impl WorldStaticDef {
    /// Axis-aligned static at `translation`.
    pub fn new(id: u32, translation: Vector<f32>, shape: ColliderShapeDef) -> Self {
        Self {
            id,
            translation,
            rotation: UnitQuaternion::identity(),
            shape,
        }
    }

    /// Horizontal ground plane at height `y`.
    pub fn ground(id: u32, y: f32) -> Self {
        Self::new(
            id,
            vector![0.0, y, 0.0],
            ColliderShapeDef::Plane {
                offset_along_normal: 0.0,
            },
        )
    }
}

/// Supported static collider shapes.
#[derive(Clone, Debug)]
pub enum ColliderShapeDef {
    /// Infinite plane (half-space), solid below.
    ///
    /// The plane normal is derived from the pose as `rotation * +Y` and the plane
    /// passes through `translation + normal * offset_along_normal`.
    Plane {
        /// Offset along the plane normal (meters).
        offset_along_normal: f32,
    },

    /// Oriented cuboid with given half-extents (meters).
    Cuboid { half_extents: Vector<f32> },
}

/// Build a Rapier collider from a `WorldStaticDef`.
///
/// The pose lives on the parent fixed rigid-body, so colliders are built in the
/// body's local frame.
pub fn collider_from_def(def: &WorldStaticDef) -> Collider {
    match &def.shape {
        ColliderShapeDef::Plane {
            offset_along_normal,
        } => {
            // Local +Y is the plane normal; the parent rotation orients it.
            ColliderBuilder::halfspace(Vector::y_axis())
                .translation(vector![0.0, *offset_along_normal, 0.0])
                .build()
        }

        ColliderShapeDef::Cuboid { half_extents } => {
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z).build()
        }
    }
}

/// A dynamic Rapier body driven by a locomotion controller for one fixed tick.
///
/// Velocity writes land immediately. Facing changes are turned into a yaw rate
/// that the next pipeline step integrates, so the body turns through the solver
/// instead of being teleported. Every write wakes the body.
pub struct DrivenBody<'a> {
    body: &'a mut RigidBody,
    dt: f32,
}

impl<'a> DrivenBody<'a> {
    /// Open a tick on `body`, stepped `dt` seconds by the host.
    ///
    /// The yaw rate left over from the previous turn is cleared, so a turn
    /// lasts exactly one step.
    pub fn new(body: &'a mut RigidBody, dt: f32) -> Self {
        body.set_angvel(Vector::zeros(), true);
        Self { body, dt }
    }
}

impl LocomotionBody for DrivenBody<'_> {
    #[inline]
    fn velocity(&self) -> Vector3<f32> {
        *self.body.linvel()
    }

    #[inline]
    fn set_velocity(&mut self, velocity: Vector3<f32>) {
        self.body.set_linvel(velocity, true);
    }

    #[inline]
    fn apply_velocity_change(&mut self, delta: Vector3<f32>) {
        let linvel = *self.body.linvel() + delta;
        self.body.set_linvel(linvel, true);
    }

    #[inline]
    fn rotation(&self) -> UnitQuaternion<f32> {
        *self.body.rotation()
    }

    fn move_rotation(&mut self, rotation: UnitQuaternion<f32>) {
        // Both orientations are yaw-only, so the delta's scaled axis lies on Y.
        let delta = rotation * self.body.rotation().inverse();
        let yaw = delta.scaled_axis().y;
        self.body.set_angvel(vector![0.0, yaw / self.dt, 0.0], true);
    }
}
