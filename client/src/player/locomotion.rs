use bevy::prelude::*;
use leafwing_input_manager::prelude::ActionState;

use super::PlayerLocomotion;
use crate::{
    input::{PlayerAction, sample_axes},
    physics::Physics,
};

/// One fixed tick of player locomotion: sample the axes, drive the bound body.
pub(super) fn drive_player(
    actions: Res<ActionState<PlayerAction>>,
    locomotion: Option<Res<PlayerLocomotion>>,
    mut physics: ResMut<Physics>,
    mut app_exit: MessageWriter<AppExit>,
) {
    let Some(locomotion) = locomotion else {
        return;
    };

    let axes = sample_axes(&actions);
    if let Err(err) = locomotion.0.tick(&mut physics.0, axes) {
        error!("Player locomotion lost its body: {err}");
        app_exit.write(AppExit::error());
    }
}
