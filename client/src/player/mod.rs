use bevy::prelude::*;
use nalgebra::Vector3;
use shared::{
    BoundController, LocomotionConfig, PLAYER_CAPSULE_HALF_HEIGHT, PLAYER_CAPSULE_RADIUS,
    PlayerBodyDef, rapier3d::prelude::RigidBodyHandle,
};

use crate::physics::{FixedSet, Physics, to_quat, to_vec3};

mod interpolate;
mod locomotion;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_player);

    app.add_systems(
        FixedUpdate,
        locomotion::drive_player.in_set(FixedSet::Locomotion),
    );

    // Pull the latest simulated pose before smoothing toward it in the same frame.
    app.add_systems(
        Update,
        (
            interpolate::sync_from_physics,
            interpolate::interpolate,
            draw_player_facing,
        )
            .chain(),
    );
}

/// The locally controlled player and the rigid body it drives.
#[derive(Component, Debug)]
pub struct Player {
    pub body: RigidBodyHandle,
}

/// Latest pose of the player's body as simulated in the fixed step.
#[derive(Component, Debug)]
pub struct SimTransform {
    pub translation: Vec3,
    pub rotation: Quat,
}

/// Locomotion controller bound to the local player's body.
#[derive(Resource, Debug)]
pub struct PlayerLocomotion(pub BoundController);

fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut physics: ResMut<Physics>,
    mut app_exit: MessageWriter<AppExit>,
) {
    let world = &mut physics.0;
    let body = world.spawn_player(PlayerBodyDef::standing_at(Vector3::zeros()));

    let bound = match BoundController::bind(&world.bodies, body, LocomotionConfig::default()) {
        Ok(bound) => bound,
        Err(err) => {
            error!("Unable to activate player locomotion: {err}");
            app_exit.write(AppExit::error());
            return;
        }
    };

    let translation = world.body_translation(body).map(|t| to_vec3(&t)).unwrap_or_default();
    let rotation = world
        .body_rotation(body)
        .map(|r| to_quat(&r))
        .unwrap_or_default();

    commands
        .spawn((
            Name::new("Player"),
            Mesh3d(meshes.add(Mesh::from(Capsule3d {
                radius: PLAYER_CAPSULE_RADIUS,
                half_length: PLAYER_CAPSULE_HALF_HEIGHT,
            }))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::linear_rgb(0.2, 0.9, 0.8),
                ..default()
            })),
            Transform::from_translation(translation).with_rotation(rotation),
            SimTransform {
                translation,
                rotation,
            },
            Player {
                body: bound.handle(),
            },
        ))
        .with_children(|parent| {
            // Eyes: small white spheres on the facing side (-Z is forward).
            let eye_mesh = meshes.add(Mesh::from(Sphere { radius: 0.08 }));
            let eye_mat = materials.add(StandardMaterial {
                base_color: Color::srgb(1.0, 1.0, 1.0),
                ..default()
            });

            for x in [-0.12, 0.12] {
                parent.spawn((
                    Name::new("Eye"),
                    Mesh3d(eye_mesh.clone()),
                    MeshMaterial3d(eye_mat.clone()),
                    Transform::from_xyz(x, PLAYER_CAPSULE_HALF_HEIGHT, -PLAYER_CAPSULE_RADIUS),
                ));
            }
        });

    commands.insert_resource(PlayerLocomotion(bound));
}

fn draw_player_facing(mut gizmos: Gizmos, q: Query<&GlobalTransform, With<Player>>) {
    for gt in &q {
        let (_, rot, start) = gt.to_scale_rotation_translation();

        let mut dir = rot * Vec3::NEG_Z;
        if !dir.is_finite() || dir.length_squared() <= 1.0e-8 {
            dir = Vec3::NEG_Z;
        }

        let end = start + dir.normalize() * 1.5;
        gizmos.arrow(start, end, Color::srgb(1.0, 1.0, 0.2));
    }
}
