use bevy::prelude::*;
use leafwing_input_manager::prelude::*;
use shared::{Axis, AxisSample};

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Planar movement stick. `x` is the horizontal axis, `y` the vertical one.
    #[actionlike(DualAxis)]
    Move,
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<PlayerAction>::default());

    app.register_type::<PlayerAction>();

    let input_map = InputMap::<PlayerAction>::default()
        .with_dual_axis(PlayerAction::Move, VirtualDPad::wasd())
        .with_dual_axis(PlayerAction::Move, VirtualDPad::arrow_keys())
        .with_dual_axis(PlayerAction::Move, GamepadStick::LEFT);
    app.insert_resource(input_map);
    app.insert_resource(ActionState::<PlayerAction>::default());
}

/// Sample the two logical axes for this tick.
pub fn sample_axes(actions: &ActionState<PlayerAction>) -> AxisSample {
    let stick = actions.axis_pair(&PlayerAction::Move);

    AxisSample::read(&|axis: Axis| match axis {
        Axis::Horizontal => stick.x,
        Axis::Vertical => stick.y,
    })
}
