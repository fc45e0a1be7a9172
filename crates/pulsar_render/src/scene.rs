use bevy::prelude::*;
use pulsar_core::constants::{
    BEAM_BASE_RADIUS, BEAM_LENGTH, COMPANION_BODY_RADIUS, PULSAR_BODY_RADIUS,
};
use pulsar_sim::pipeline::CurrentFrame;

/// What a scene entity stands for. The frame sync writes one transform per role.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRole {
    Pulsar,
    Companion,
    /// Group holding both beams, child of the pulsar
    BeamPair,
    /// One emission cone (0 or 1), child of the pair
    Beam(usize),
}

/// Spawn the two bodies, the beam pair and the lights
pub fn spawn_binary(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
    });

    // Light at the center of mass, between the two bodies
    commands.spawn((
        PointLight {
            color: Color::WHITE,
            intensity: 2_000_000.0,
            range: 100.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
    ));

    let pulsar_mesh = meshes.add(Sphere::new(PULSAR_BODY_RADIUS).mesh().uv(32, 32));
    let pulsar_mat = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        perceptual_roughness: 0.4,
        ..default()
    });

    let companion_mesh = meshes.add(Sphere::new(COMPANION_BODY_RADIUS).mesh().uv(32, 32));
    let companion_mat = materials.add(StandardMaterial {
        base_color: Color::srgb(0.533, 0.533, 1.0),
        perceptual_roughness: 0.6,
        ..default()
    });

    // Cone with its base at the pulsar center and apex BEAM_LENGTH out along +y
    let cone = Mesh::from(Cone {
        radius: BEAM_BASE_RADIUS,
        height: BEAM_LENGTH,
    });
    let beam_mesh = meshes.add(cone.translated_by(Vec3::Y * BEAM_LENGTH * 0.5));
    let beam_color = Color::srgba(0.0, 1.0, 1.0, 0.5);
    let beam_mat = materials.add(StandardMaterial {
        base_color: beam_color,
        emissive: LinearRgba::from(beam_color) * 2.0,
        alpha_mode: AlphaMode::Add,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    commands
        .spawn((
            Mesh3d(pulsar_mesh),
            MeshMaterial3d(pulsar_mat),
            Transform::default(),
            SceneRole::Pulsar,
        ))
        .with_children(|pulsar| {
            pulsar
                .spawn((Transform::default(), Visibility::default(), SceneRole::BeamPair))
                .with_children(|pair| {
                    for index in 0..2 {
                        pair.spawn((
                            Mesh3d(beam_mesh.clone()),
                            MeshMaterial3d(beam_mat.clone()),
                            Transform::default(),
                            SceneRole::Beam(index),
                        ));
                    }
                });
        });

    commands.spawn((
        Mesh3d(companion_mesh),
        MeshMaterial3d(companion_mat),
        Transform::default(),
        SceneRole::Companion,
    ));
}

/// Copy the latest simulation frame onto the scene entities
pub fn sync_frame_transforms(
    frame: Res<CurrentFrame>,
    mut query: Query<(&mut Transform, &SceneRole)>,
) {
    let Some(f) = frame.transforms.as_ref() else {
        return;
    };

    for (mut transform, role) in query.iter_mut() {
        *transform = match *role {
            SceneRole::Pulsar => f.pulsar,
            SceneRole::Companion => f.companion,
            SceneRole::BeamPair => f.beam_pair,
            SceneRole::Beam(index) => f.beams[index % 2],
        };
    }
}
