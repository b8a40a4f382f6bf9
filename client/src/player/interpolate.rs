use super::{Player, SimTransform};
use crate::physics::{Physics, to_quat, to_vec3};
use bevy::prelude::*;

/// Copy the latest fixed-step pose of each player body into its [`SimTransform`].
pub(super) fn sync_from_physics(
    physics: Res<Physics>,
    mut player_q: Query<(&Player, &mut SimTransform)>,
) {
    for (player, mut sim) in &mut player_q {
        let Some(rb) = physics.0.bodies.get(player.body) else {
            continue;
        };
        sim.translation = to_vec3(rb.translation());
        sim.rotation = to_quat(rb.rotation());
    }
}

/// Smoothly interpolate rendered transforms toward the latest simulated pose.
///
/// The fixed step runs at a lower rate than rendering, so we use:
/// - `smooth_nudge` for translation,
/// - `slerp` for rotation, with an exponential smoothing factor.
pub(super) fn interpolate(
    time: Res<Time>,
    mut transform_q: Query<(&mut Transform, &SimTransform)>,
) {
    let dt = time.delta_secs();
    transform_q.par_iter_mut().for_each(|(mut transform, sim)| {
        transform
            .translation
            .smooth_nudge(&sim.translation, 24.0, dt);
        transform.rotation = transform
            .rotation
            .slerp(sim.rotation, 1.0 - (-24.0 * dt).exp());
    });
}
