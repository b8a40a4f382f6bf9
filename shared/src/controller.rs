use log::trace;
use nalgebra::{UnitQuaternion, Vector3};

use crate::{
    body::LocomotionBody,
    config::LocomotionConfig,
    constants::FACING_EPS_SQ,
    error::LocomotionError,
    input::AxisSample,
    utils::{clamp_magnitude, look_rotation},
};

/// Output of a single [`LocomotionController::step`] tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepOutcome {
    /// Planar movement intent `(horizontal, 0, vertical)` built from the axes.
    pub intent: Vector3<f32>,
    /// Velocity change applied to the body before clamping.
    pub applied_impulse: Vector3<f32>,
    /// Velocity written back to the body.
    pub velocity: Vector3<f32>,
    /// Yaw-only rotation the body was turned to, if the intent was large enough.
    ///
    /// If `None`, the body's orientation was left as-is.
    pub new_rotation: Option<UnitQuaternion<f32>>,
}

/// Turns two input axes into a bounded planar velocity and a facing for a rigid body.
///
/// The controller holds no per-tick state. Everything that evolves between ticks
/// (velocity, orientation) lives on the body.
#[derive(Clone, Copy, Debug)]
pub struct LocomotionController {
    config: LocomotionConfig,
}

impl LocomotionController {
    pub fn new(config: LocomotionConfig) -> Result<Self, LocomotionError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Perform one fixed tick of planar locomotion on `body`.
    ///
    /// Behavior
    /// - Builds the intent `(horizontal, 0, vertical)`; axes are trusted unless the
    ///   config asks for clamping.
    /// - Applies `intent * max_speed` as a mass-independent velocity change.
    /// - Clamps the full resulting velocity to `max_speed`, then restores the
    ///   pre-clamp vertical velocity so gravity is never attenuated.
    /// - Faces the intent direction when `|intent|^2 > FACING_EPS_SQ`; otherwise the
    ///   current orientation is kept.
    pub fn step<B>(&self, body: &mut B, axes: AxisSample) -> StepOutcome
    where
        B: LocomotionBody + ?Sized,
    {
        let max_speed = self.config.max_speed;

        // 1) Planar intent. Y is always zero.
        let intent = self.config.axis_policy.apply(axes).intent();

        // 2) Velocity change from input.
        let applied_impulse = intent * max_speed;
        body.apply_velocity_change(applied_impulse);

        // 3) Speed cap on the full vector, vertical restored afterwards.
        let current = body.velocity();
        let mut velocity = clamp_magnitude(current, max_speed);
        velocity.y = current.y;
        body.set_velocity(velocity);

        // 4) Facing. Released input keeps the last facing.
        let new_rotation = if intent.norm_squared() > FACING_EPS_SQ {
            body.set_orientation_towards(intent);
            look_rotation(intent)
        } else {
            None
        };

        trace!(
            "locomotion step: intent={:?} velocity={:?} turned={}",
            intent,
            velocity,
            new_rotation.is_some()
        );

        StepOutcome {
            intent,
            applied_impulse,
            velocity,
            new_rotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AxisPolicy, utils::planar_speed};

    const EPS: f32 = 1.0e-4;

    /// Minimal body: velocity and orientation, nothing else.
    #[derive(Debug)]
    struct TestBody {
        velocity: Vector3<f32>,
        rotation: UnitQuaternion<f32>,
        rotation_moves: u32,
    }

    impl TestBody {
        fn with_velocity(velocity: Vector3<f32>) -> Self {
            Self {
                velocity,
                rotation: UnitQuaternion::identity(),
                rotation_moves: 0,
            }
        }

        fn forward(&self) -> Vector3<f32> {
            self.rotation * Vector3::z()
        }
    }

    impl LocomotionBody for TestBody {
        fn velocity(&self) -> Vector3<f32> {
            self.velocity
        }

        fn set_velocity(&mut self, velocity: Vector3<f32>) {
            self.velocity = velocity;
        }

        fn apply_velocity_change(&mut self, delta: Vector3<f32>) {
            self.velocity += delta;
        }

        fn rotation(&self) -> UnitQuaternion<f32> {
            self.rotation
        }

        fn move_rotation(&mut self, rotation: UnitQuaternion<f32>) {
            self.rotation = rotation;
            self.rotation_moves += 1;
        }
    }

    fn controller(max_speed: f32) -> LocomotionController {
        LocomotionController::new(LocomotionConfig::with_max_speed(max_speed)).unwrap()
    }

    #[test]
    fn new_rejects_invalid_config() {
        let err = LocomotionController::new(LocomotionConfig::with_max_speed(0.0)).unwrap_err();
        assert_eq!(err, LocomotionError::InvalidMaxSpeed(0.0));
    }

    #[test]
    fn full_right_from_rest_moves_at_max_speed_facing_plus_x() {
        let ctl = controller(4.0);
        let mut body = TestBody::with_velocity(Vector3::zeros());

        let out = ctl.step(&mut body, AxisSample::new(1.0, 0.0));

        assert!((body.velocity - Vector3::new(4.0, 0.0, 0.0)).norm() < EPS);
        assert_eq!(out.velocity, body.velocity);
        assert_eq!(out.applied_impulse, Vector3::new(4.0, 0.0, 0.0));
        assert!((body.forward() - Vector3::x()).norm() < EPS);
        assert!(out.new_rotation.is_some());
    }

    #[test]
    fn zero_input_while_falling_keeps_vertical_and_stays_still() {
        let ctl = controller(4.0);
        let mut body = TestBody::with_velocity(Vector3::new(0.0, -9.8, 0.0));

        let out = ctl.step(&mut body, AxisSample::ZERO);

        assert_eq!(body.velocity.y, -9.8);
        assert_eq!(body.velocity.x, 0.0);
        assert_eq!(body.velocity.z, 0.0);
        assert!(out.new_rotation.is_none());
    }

    #[test]
    fn zero_input_leaves_orientation_untouched() {
        let ctl = controller(4.0);
        let start = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), 1.2);
        let mut body = TestBody::with_velocity(Vector3::new(2.0, 0.0, 1.0));
        body.rotation = start;

        ctl.step(&mut body, AxisSample::ZERO);

        assert_eq!(body.rotation, start);
        assert_eq!(body.rotation_moves, 0);
    }

    #[test]
    fn tiny_input_below_threshold_does_not_turn() {
        let ctl = controller(4.0);
        let mut body = TestBody::with_velocity(Vector3::zeros());

        // |m|^2 = 0.0008 < 0.001
        ctl.step(&mut body, AxisSample::new(0.02, 0.02));

        assert_eq!(body.rotation_moves, 0);
    }

    #[test]
    fn vertical_velocity_is_never_modified() {
        let ctl = controller(4.0);
        let inputs = [
            AxisSample::new(1.0, 1.0),
            AxisSample::new(-1.0, 0.3),
            AxisSample::new(0.0, -1.0),
            AxisSample::ZERO,
        ];

        for vy in [-30.0, -9.8, 0.0, 2.5, 50.0] {
            for axes in inputs {
                let mut body = TestBody::with_velocity(Vector3::new(3.0, vy, -3.0));
                ctl.step(&mut body, axes);
                assert_eq!(body.velocity.y, vy, "axes {axes:?}");
            }
        }
    }

    #[test]
    fn horizontal_speed_never_exceeds_max_for_in_range_axes() {
        let ctl = controller(4.0);
        let steps = [-1.0, -0.5, 0.0, 0.5, 1.0];
        let starts = [
            Vector3::zeros(),
            Vector3::new(10.0, 0.0, -10.0),
            Vector3::new(-3.0, -20.0, 2.0),
            Vector3::new(0.0, 40.0, 0.0),
        ];

        for start in starts {
            for &h in &steps {
                for &v in &steps {
                    let mut body = TestBody::with_velocity(start);
                    ctl.step(&mut body, AxisSample::new(h, v));
                    assert!(
                        planar_speed(body.velocity) <= 4.0 + EPS,
                        "start {start:?} axes ({h}, {v}) -> {:?}",
                        body.velocity
                    );
                }
            }
        }
    }

    #[test]
    fn constant_input_converges_and_holds_max_speed() {
        let ctl = controller(4.0);
        let mut body = TestBody::with_velocity(Vector3::zeros());
        let axes = AxisSample::new(0.3, 0.2);

        for _ in 0..100 {
            ctl.step(&mut body, axes);
            assert!(planar_speed(body.velocity) <= 4.0 + EPS);
        }

        assert!((planar_speed(body.velocity) - 4.0).abs() < EPS);
        let dir = Vector3::new(0.3, 0.0, 0.2).normalize();
        assert!((body.velocity.normalize() - dir).norm() < EPS);
    }

    #[test]
    fn reversing_input_cancels_previous_velocity() {
        let ctl = controller(4.0);
        let mut body = TestBody::with_velocity(Vector3::zeros());

        ctl.step(&mut body, AxisSample::new(1.0, 0.0));
        ctl.step(&mut body, AxisSample::new(-1.0, 0.0));

        assert!(body.velocity.norm() < EPS);
        assert!((body.forward() + Vector3::x()).norm() < EPS);
    }

    #[test]
    fn large_vertical_speed_still_caps_horizontal() {
        // The full-vector clamp is dominated by Y here, so horizontal ends up well
        // below max; Y is then restored untouched.
        let ctl = controller(4.0);
        let mut body = TestBody::with_velocity(Vector3::new(0.0, -30.0, 0.0));

        ctl.step(&mut body, AxisSample::new(1.0, 0.0));

        assert_eq!(body.velocity.y, -30.0);
        assert!(body.velocity.x > 0.0);
        assert!(planar_speed(body.velocity) <= 4.0 + EPS);
    }

    #[test]
    fn out_of_range_axes_are_trusted_by_default() {
        let ctl = controller(4.0);
        let mut body = TestBody::with_velocity(Vector3::zeros());

        let out = ctl.step(&mut body, AxisSample::new(3.0, 0.0));

        assert_eq!(out.intent, Vector3::new(3.0, 0.0, 0.0));
        assert_eq!(out.applied_impulse, Vector3::new(12.0, 0.0, 0.0));
        // Still capped after the write-back.
        assert!((body.velocity.x - 4.0).abs() < EPS);
    }

    #[test]
    fn clamp_policy_limits_intent_before_impulse() {
        let config = LocomotionConfig {
            max_speed: 4.0,
            axis_policy: AxisPolicy::Clamp,
        };
        let ctl = LocomotionController::new(config).unwrap();
        let mut body = TestBody::with_velocity(Vector3::zeros());

        let out = ctl.step(&mut body, AxisSample::new(3.0, -2.0));

        assert_eq!(out.intent, Vector3::new(1.0, 0.0, -1.0));
        assert_eq!(out.applied_impulse, Vector3::new(4.0, 0.0, -4.0));
    }

    #[test]
    fn facing_follows_diagonal_intent() {
        let ctl = controller(4.0);
        let mut body = TestBody::with_velocity(Vector3::zeros());

        let out = ctl.step(&mut body, AxisSample::new(-1.0, 1.0));

        let expected = Vector3::new(-1.0, 0.0, 1.0).normalize();
        assert!((body.forward() - expected).norm() < EPS);
        assert_eq!(out.new_rotation, Some(body.rotation));
    }

    #[test]
    fn step_works_through_a_trait_object() {
        let ctl = controller(2.0);
        let mut body = TestBody::with_velocity(Vector3::zeros());
        let dyn_body: &mut dyn LocomotionBody = &mut body;

        ctl.step(dyn_body, AxisSample::new(0.0, 1.0));

        assert!((body.velocity - Vector3::new(0.0, 0.0, 2.0)).norm() < EPS);
    }
}
