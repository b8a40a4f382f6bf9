//! Headless Rapier world that plays the host physics engine for a locomotion controller.
//!
//! The world owns every body, collider and solver structure, integrates gravity and
//! contacts, and advances exactly one fixed step per [`PhysicsWorld::step`] call.
//! Static geometry is built once from [`WorldStaticDef`]s.
//!
//! Design goals
//! - Deterministic: given the same inputs (sorted by `id`), build identical in-memory sets.
//! - Fixed step: `dt` is chosen at construction and never varies.

// Re-export Rapier so downstream crates can use Rapier macros/types
// without needing to depend on `rapier3d` directly.
pub use rapier3d;

use rapier3d::na::{Translation3, UnitQuaternion, Vector3};
use rapier3d::prelude::*;

use crate::{
    constants::{
        GRAVITY_MPS2, PLAYER_CAPSULE_HALF_HEIGHT, PLAYER_CAPSULE_RADIUS, PLAYER_DENSITY,
    },
    rapier::{WorldStaticDef, collider_from_def},
};

/// Parameters for the player's dynamic capsule.
#[derive(Clone, Copy, Debug)]
pub struct PlayerBodyDef {
    /// Initial capsule center (world space).
    pub translation: Vector<f32>,
    /// Initial facing.
    pub rotation: UnitQuaternion<f32>,
    pub radius: f32,
    /// Half height of the cylindrical section.
    pub half_height: f32,
    pub density: f32,
}

impl PlayerBodyDef {
    /// A default capsule whose bottom rests at `feet`.
    pub fn standing_at(feet: Vector<f32>) -> Self {
        let lift = PLAYER_CAPSULE_HALF_HEIGHT + PLAYER_CAPSULE_RADIUS;
        Self {
            translation: feet + vector![0.0, lift, 0.0],
            ..Self::default()
        }
    }
}

impl Default for PlayerBodyDef {
    fn default() -> Self {
        Self {
            translation: Vector::zeros(),
            rotation: UnitQuaternion::identity(),
            radius: PLAYER_CAPSULE_RADIUS,
            half_height: PLAYER_CAPSULE_HALF_HEIGHT,
            density: PLAYER_DENSITY,
        }
    }
}

/// Every Rapier structure needed to simulate the world at a fixed rate.
pub struct PhysicsWorld {
    pub gravity: Vector<f32>,
    pub integration_parameters: IntegrationParameters,
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
}

impl PhysicsWorld {
    /// Build a world from static collider definitions, stepping `dt` seconds per tick.
    ///
    /// Determinism
    /// - The input is sorted by `id` before insertion.
    /// - Any NaN/invalid values should be filtered/validated by the caller.
    pub fn build(mut defs: Vec<WorldStaticDef>, dt: f32) -> Self {
        defs.sort_by_key(|d| d.id);

        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();

        // Each static is a fixed rigid-body carrying the pose, with an attached collider.
        for def in defs.into_iter() {
            let iso = Isometry::from_parts(Translation3::from(def.translation), def.rotation);

            let rb = RigidBodyBuilder::fixed().pose(iso).build();
            let rb_handle = bodies.insert(rb);

            let collider = collider_from_def(&def);
            colliders.insert_with_parent(collider, rb_handle, &mut bodies);
        }

        Self {
            gravity: vector![0.0, -GRAVITY_MPS2, 0.0],
            integration_parameters: IntegrationParameters {
                dt,
                ..IntegrationParameters::default()
            },
            bodies,
            colliders,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    /// Fixed step length in seconds.
    #[inline]
    pub fn dt(&self) -> f32 {
        self.integration_parameters.dt
    }

    /// Insert the player's dynamic capsule and return its handle.
    ///
    /// Only yaw is free, so contacts never tip the body over; facing is owned by
    /// the locomotion controller. The collider is frictionless so
    /// ground contact does not eat the planar velocity the controller writes.
    pub fn spawn_player(&mut self, def: PlayerBodyDef) -> RigidBodyHandle {
        let iso = Isometry::from_parts(Translation3::from(def.translation), def.rotation);
        let rb = RigidBodyBuilder::dynamic()
            .pose(iso)
            .enabled_rotations(false, true, false)
            .can_sleep(false)
            .build();
        let handle = self.bodies.insert(rb);

        let collider = ColliderBuilder::capsule_y(def.half_height, def.radius)
            .density(def.density)
            .friction(0.0)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);

        handle
    }

    /// Remove a body and its colliders.
    pub fn remove_body(&mut self, handle: RigidBodyHandle) -> Option<RigidBody> {
        self.bodies.remove(
            handle,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        )
    }

    /// Advance the simulation by one fixed step.
    pub fn step(&mut self) {
        let hooks = ();
        let events = ();

        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &hooks,
            &events,
        );
    }

    pub fn body_translation(&self, handle: RigidBodyHandle) -> Option<Vector3<f32>> {
        self.bodies.get(handle).map(|rb| *rb.translation())
    }

    pub fn body_rotation(&self, handle: RigidBodyHandle) -> Option<UnitQuaternion<f32>> {
        self.bodies.get(handle).map(|rb| *rb.rotation())
    }

    pub fn body_velocity(&self, handle: RigidBodyHandle) -> Option<Vector3<f32>> {
        self.bodies.get(handle).map(|rb| *rb.linvel())
    }
}
