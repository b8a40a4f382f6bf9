use bevy::prelude::*;
use shared::{ColliderShapeDef, WorldStaticDef, rapier3d::prelude::vector};

use crate::physics::to_vec3;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, setup);
}

/// Static level geometry. The physics world and the renderer are both built from this list.
pub fn level_statics() -> Vec<WorldStaticDef> {
    let crate_box = |id: u32, x: f32, z: f32| {
        WorldStaticDef::new(
            id,
            vector![x, 0.5, z],
            ColliderShapeDef::Cuboid {
                half_extents: vector![0.5, 0.5, 0.5],
            },
        )
    };

    vec![
        WorldStaticDef::ground(0, 0.0),
        crate_box(1, 5.0, 0.0),
        crate_box(2, -4.0, 6.0),
        crate_box(3, 2.0, -7.0),
    ]
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    info!("World setup");

    let ground_material = materials.add(StandardMaterial {
        base_color: Color::linear_rgb(0.2, 0.3, 0.25),
        perceptual_roughness: 1.0,
        metallic: 0.0,
        ..default()
    });
    let box_material = materials.add(Color::srgb_u8(124, 144, 255));

    for def in level_statics() {
        let translation = to_vec3(&def.translation);
        match def.shape {
            ColliderShapeDef::Plane { .. } => {
                commands.spawn((
                    Transform::from_translation(translation),
                    Mesh3d(meshes.add(Plane3d::default().mesh().size(50., 50.).build())),
                    MeshMaterial3d(ground_material.clone()),
                ));
            }
            ColliderShapeDef::Cuboid { half_extents } => {
                commands.spawn((
                    Transform::from_translation(translation),
                    Mesh3d(meshes.add(Cuboid::new(
                        half_extents.x * 2.0,
                        half_extents.y * 2.0,
                        half_extents.z * 2.0,
                    ))),
                    MeshMaterial3d(box_material.clone()),
                ));
            }
        }
    }

    // light
    commands.spawn((
        PointLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0),
    ));
}
