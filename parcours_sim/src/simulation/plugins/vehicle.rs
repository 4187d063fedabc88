// parcours_sim/src/simulation/plugins/vehicle.rs

//! The player vehicle: spawning, physics attachment, and the per-tick
//! actuation that turns sampled intent into chassis forces.

use crate::prelude::*;
use crate::simulation::core::config::ScenarioConfig;
use crate::simulation::core::convert::{chassis_snapshot, point_to_bevy};
use crate::simulation::plugins::input::DriveIntentState;
use avian3d::prelude::*;
use parcours_core::vehicle::ArcadeDriveModel;

/// Marker for the single player-controlled chassis.
#[derive(Component, Debug)]
pub struct PlayerVehicle;

/// The pure drive model, attached to the vehicle entity so actuation does
/// not need to re-derive it from config every tick.
#[derive(Component, Debug)]
pub struct DriveParameters(pub ArcadeDriveModel);

/// Shared meshes and materials for the vehicle visuals.
#[derive(Resource)]
struct VehicleAssets {
    body_mesh: Handle<Mesh>,
    body_material: Handle<StandardMaterial>,
    cockpit_mesh: Handle<Mesh>,
    cockpit_material: Handle<StandardMaterial>,
    wheel_mesh: Handle<Mesh>,
    wheel_material: Handle<StandardMaterial>,
    wing_mesh: Handle<Mesh>,
}

pub struct VehiclePlugin;

impl Plugin for VehiclePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(AppState::SceneBuilding),
            (
                // Logical components and visual meshes first.
                spawn_vehicle.in_set(SceneBuildSet::Vehicle),
                // Then the physical RigidBody and Collider.
                attach_chassis_physics.in_set(SceneBuildSet::Physics),
            ),
        )
        // The runtime system that makes the car drive.
        .add_systems(
            FixedUpdate,
            drive_vehicle
                .in_set(SimulationSet::Actuation)
                .run_if(in_state(AppState::Running).and(in_state(InteractionMode::Drive))),
        )
        // Leaving drive mode removes the force accumulators outright, so
        // nothing lingers across the pause.
        .add_systems(OnExit(InteractionMode::Drive), halt_drive_forces);
    }
}

/// SPAWNING (LOGIC + VISUALS): the chassis entity with its open-wheel body.
fn spawn_vehicle(
    mut commands: Commands,
    config: Res<ScenarioConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let [sx, sy, sz] = config.vehicle.chassis_size;
    let assets = VehicleAssets {
        body_mesh: meshes.add(Cuboid::new(sx * 0.6, sy, sz)),
        body_material: materials.add(Color::srgb(0.9, 0.1, 0.1)),
        cockpit_mesh: meshes.add(Cuboid::new(sx * 0.4, sy * 0.8, sz * 0.25)),
        cockpit_material: materials.add(Color::srgb(0.1, 0.1, 0.12)),
        wheel_mesh: meshes.add(Cylinder::new(sy * 0.9, sx * 0.2)),
        wheel_material: materials.add(Color::srgb(0.05, 0.05, 0.05)),
        wing_mesh: meshes.add(Cuboid::new(sx, sy * 0.2, sz * 0.12)),
    };

    let [px, py, pz] = config.vehicle.spawn_position;
    info!("[SPAWN] Player vehicle at ({px}, {py}, {pz})");

    commands
        .spawn((
            Name::new("PlayerVehicle"),
            PlayerVehicle,
            DriveParameters(config.vehicle.drive_model()),
            Transform::from_xyz(px, py, pz),
            InheritedVisibility::VISIBLE,
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(assets.body_mesh.clone()),
                MeshMaterial3d(assets.body_material.clone()),
                Name::new("Vehicle_Body"),
            ));
            parent.spawn((
                Mesh3d(assets.cockpit_mesh.clone()),
                MeshMaterial3d(assets.cockpit_material.clone()),
                Transform::from_xyz(0.0, sy * 0.9, -sz * 0.05),
                Name::new("Vehicle_Cockpit"),
            ));
            parent.spawn((
                Mesh3d(assets.wing_mesh.clone()),
                MeshMaterial3d(assets.body_material.clone()),
                Transform::from_xyz(0.0, sy * 0.6, sz * 0.45),
                Name::new("Vehicle_RearWing"),
            ));
            parent.spawn((
                Mesh3d(assets.wing_mesh.clone()),
                MeshMaterial3d(assets.body_material.clone()),
                Transform::from_xyz(0.0, -sy * 0.2, -sz * 0.5),
                Name::new("Vehicle_FrontWing"),
            ));

            let wheel_x = sx * 0.5;
            let wheel_z = sz * 0.35;
            let wheel_positions = [
                (Vec3::new(wheel_x, -sy * 0.3, -wheel_z), "Vehicle_FL_Wheel"),
                (Vec3::new(-wheel_x, -sy * 0.3, -wheel_z), "Vehicle_FR_Wheel"),
                (Vec3::new(wheel_x, -sy * 0.3, wheel_z), "Vehicle_RL_Wheel"),
                (Vec3::new(-wheel_x, -sy * 0.3, wheel_z), "Vehicle_RR_Wheel"),
            ];
            for (pos, wheel_name) in wheel_positions {
                parent.spawn((
                    Mesh3d(assets.wheel_mesh.clone()),
                    MeshMaterial3d(assets.wheel_material.clone()),
                    Transform::from_translation(pos)
                        .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2)),
                    Name::new(wheel_name),
                ));
            }
        });

    commands.insert_resource(assets);
}

/// SPAWNING (PHYSICS): attaches the rigid body once the logical entity exists.
fn attach_chassis_physics(
    mut commands: Commands,
    config: Res<ScenarioConfig>,
    query: Query<Entity, (With<PlayerVehicle>, Without<RigidBody>)>,
) {
    let Ok(entity) = query.single() else {
        error!("Expected exactly one player vehicle to attach physics to.");
        return;
    };

    let [sx, sy, sz] = config.vehicle.chassis_size;
    commands.entity(entity).insert((
        RigidBody::Dynamic,
        Collider::cuboid(sx, sy, sz),
        Mass(config.vehicle.mass),
        Friction::new(config.vehicle.friction),
        Restitution::new(config.vehicle.restitution),
        // The arcade model only ever yaws, so roll and pitch are locked and
        // the chassis cannot flip on wall contact.
        LockedAxes::new().lock_rotation_x().lock_rotation_z(),
        AngularDamping(config.vehicle.angular_damping),
        // Driving forces must keep applying even at rest.
        SleepingDisabled,
        LinearVelocity::default(),
        AngularVelocity::default(),
    ));
}

/// RUNTIME: one drive-model tick. Samples the chassis state, asks the model
/// for a body command, and hands the result to the physics engine.
fn drive_vehicle(
    mut commands: Commands,
    intent: Res<DriveIntentState>,
    query: Query<(Entity, &Transform, &LinearVelocity, &DriveParameters), With<PlayerVehicle>>,
) {
    let Ok((entity, transform, velocity, parameters)) = query.single() else {
        return;
    };

    let snapshot = chassis_snapshot(transform, velocity);
    let command = parameters.0.tick(intent.0, &snapshot);

    commands.entity(entity).insert((
        ExternalForce::new(point_to_bevy(&command.force)),
        ExternalTorque::new(point_to_bevy(&command.torque)),
    ));
}

fn halt_drive_forces(
    mut commands: Commands,
    query: Query<Entity, (With<PlayerVehicle>, With<RigidBody>)>,
) {
    let Ok(entity) = query.single() else {
        return;
    };
    commands
        .entity(entity)
        .remove::<(ExternalForce, ExternalTorque)>();
}
