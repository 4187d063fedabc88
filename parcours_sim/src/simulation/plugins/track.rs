// parcours_sim/src/simulation/plugins/track.rs

//! Static world construction: ground slab, border walls, the glowing
//! checkpoint zones, and scene lighting. Also owns the validated
//! `CheckpointMap` resource the rest of the sim polls against.

use crate::prelude::*;
use crate::simulation::core::config::ScenarioConfig;
use avian3d::prelude::*;
use parcours_core::track::CheckpointMap;

/// The validated checkpoint set for this run. Built once during scene
/// building and read-only afterwards.
#[derive(Resource, Debug)]
pub struct TrackMap(pub CheckpointMap);

pub struct TrackPlugin;

impl Plugin for TrackPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(AppState::SceneBuilding),
            (build_checkpoint_map, spawn_track, spawn_lighting)
                .chain()
                .in_set(SceneBuildSet::Track),
        );
    }
}

fn build_checkpoint_map(mut commands: Commands, config: Res<ScenarioConfig>) {
    // The loader already validated this; a failure here means the config
    // resource was mutated, which is a bug.
    let map = match config.track.build_map() {
        Ok(map) => map,
        Err(e) => panic!("Checkpoint set failed validation: {e}"),
    };
    info!("[TRACK] Checkpoint map built with {} sections.", map.len());
    commands.insert_resource(TrackMap(map));
}

fn spawn_track(
    mut commands: Commands,
    config: Res<ScenarioConfig>,
    map: Res<TrackMap>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let [gx, gy, gz] = config.track.ground_size;

    // --- Ground slab, top face at y = 0 ---
    commands.spawn((
        Name::new("Ground"),
        RigidBody::Static,
        Collider::cuboid(gx, gy, gz),
        Friction::new(config.track.ground_friction),
        Mesh3d(meshes.add(Cuboid::new(gx, gy, gz))),
        MeshMaterial3d(materials.add(Color::srgb(0.15, 0.17, 0.2))),
        Transform::from_xyz(0.0, -gy * 0.5, 0.0),
    ));

    // --- Border walls so the vehicle cannot leave the arena ---
    let wall_height = 2.0;
    let wall_thickness = 1.0;
    let wall_material = materials.add(Color::srgb(0.3, 0.32, 0.36));
    let walls = [
        ("Wall_North", Vec3::new(0.0, wall_height * 0.5, -gz * 0.5), Vec3::new(gx, wall_height, wall_thickness)),
        ("Wall_South", Vec3::new(0.0, wall_height * 0.5, gz * 0.5), Vec3::new(gx, wall_height, wall_thickness)),
        ("Wall_West", Vec3::new(-gx * 0.5, wall_height * 0.5, 0.0), Vec3::new(wall_thickness, wall_height, gz)),
        ("Wall_East", Vec3::new(gx * 0.5, wall_height * 0.5, 0.0), Vec3::new(wall_thickness, wall_height, gz)),
    ];
    for (name, position, size) in walls {
        commands.spawn((
            Name::new(name),
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, size.z),
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(wall_material.clone()),
            Transform::from_translation(position),
        ));
    }

    // --- Checkpoint zones: a flat glowing disc plus a marker pillar ---
    // Purely visual; detection is planar-distance math, not collision.
    for checkpoint in map.0.iter() {
        let [r, g, b] = checkpoint.color;
        let zone_material = materials.add(StandardMaterial {
            base_color: Color::srgba(r, g, b, 0.6),
            emissive: LinearRgba::new(r * 0.8, g * 0.8, b * 0.8, 1.0),
            alpha_mode: AlphaMode::Blend,
            ..default()
        });
        let x = checkpoint.center.x as f32;
        let z = checkpoint.center.y as f32;
        let radius = checkpoint.trigger_radius as f32;

        commands.spawn((
            Name::new(format!("Checkpoint_{}", checkpoint.label)),
            Mesh3d(meshes.add(Cylinder::new(radius, 0.05))),
            MeshMaterial3d(zone_material.clone()),
            Transform::from_xyz(x, 0.05, z),
        ));
        commands.spawn((
            Name::new(format!("Checkpoint_{}_Pillar", checkpoint.label)),
            Mesh3d(meshes.add(Cylinder::new(0.2, 6.0))),
            MeshMaterial3d(zone_material),
            Transform::from_xyz(x, 3.0, z),
        ));
    }
}

fn spawn_lighting(mut commands: Commands) {
    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(30.0, 50.0, 30.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 120.0,
        ..default()
    });
}
