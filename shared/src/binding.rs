use log::{error, info};
use rapier3d::prelude::{RigidBodyHandle, RigidBodySet};

use crate::{
    config::LocomotionConfig,
    controller::{LocomotionController, StepOutcome},
    error::LocomotionError,
    input::AxisSample,
    rapier::DrivenBody,
    rapier_world::PhysicsWorld,
};

/// A [`LocomotionController`] bound to one Rapier rigid body.
///
/// Binding happens once, at activation, and fails loudly: a controller without a
/// body would leave a player that never moves and gives no diagnostic.
#[derive(Clone, Copy, Debug)]
pub struct BoundController {
    controller: LocomotionController,
    body: RigidBodyHandle,
}

impl BoundController {
    /// Bind a new controller to the dynamic body behind `handle`.
    pub fn bind(
        bodies: &RigidBodySet,
        handle: RigidBodyHandle,
        config: LocomotionConfig,
    ) -> Result<Self, LocomotionError> {
        let controller = LocomotionController::new(config)?;

        let Some(body) = bodies.get(handle) else {
            return Err(LocomotionError::MissingBody(handle));
        };
        if !body.is_dynamic() {
            return Err(LocomotionError::NotDynamic(handle));
        }

        info!(
            "Bound locomotion controller to {:?} (max speed {} m/s)",
            handle,
            controller.config().max_speed
        );

        Ok(Self {
            controller,
            body: handle,
        })
    }

    #[inline]
    pub fn handle(&self) -> RigidBodyHandle {
        self.body
    }

    /// Run one fixed tick against the bound body, ahead of `world.step()`.
    ///
    /// Fails only if the host removed the body after binding.
    pub fn tick(
        &self,
        world: &mut PhysicsWorld,
        axes: AxisSample,
    ) -> Result<StepOutcome, LocomotionError> {
        let dt = world.dt();
        let Some(body) = world.bodies.get_mut(self.body) else {
            error!("Failed to find bound rigid body {:?}", self.body);
            return Err(LocomotionError::MissingBody(self.body));
        };

        let mut driven = DrivenBody::new(body, dt);
        Ok(self.controller.step(&mut driven, axes))
    }
}
