// parcours_sim/src/simulation/plugins/camera.rs

//! The one scene camera and its two behaviors: smoothed chase framing while
//! driving, and a damped orbit around the arena in free mode.

use crate::prelude::*;
use crate::simulation::core::config::ScenarioConfig;
use bevy::input::mouse::AccumulatedMouseMotion;
use crate::simulation::core::convert::{point_from_bevy, point_to_bevy};
use crate::simulation::plugins::vehicle::PlayerVehicle;
use parcours_core::camera::FollowCamera;

/// Marker for the single scene camera.
#[derive(Component, Debug)]
pub struct SceneCamera;

/// The pure chase-camera smoother, lifted into a resource.
#[derive(Resource, Debug)]
pub struct FollowState(pub FollowCamera);

/// Free-mode orbit state. The target yaw leads and the actual yaw chases it
/// with damping, which is what makes the orbit feel weighty.
#[derive(Resource, Debug, Default)]
pub struct OrbitState {
    pub yaw: f32,
    pub target_yaw: f32,
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitState>()
            .add_systems(
                OnEnter(AppState::SceneBuilding),
                setup_camera.in_set(SceneBuildSet::Finalize),
            )
            .add_systems(
                Update,
                (
                    follow_vehicle
                        .run_if(in_state(AppState::Running).and(in_state(InteractionMode::Drive))),
                    orbit_arena
                        .run_if(in_state(AppState::Running).and(in_state(InteractionMode::Free))),
                ),
            )
            // Re-entering drive mode drops the camera straight onto the
            // vehicle instead of lerping across the whole arena.
            .add_systems(OnEnter(InteractionMode::Drive), snap_to_vehicle);
    }
}

fn setup_camera(mut commands: Commands, config: Res<ScenarioConfig>) {
    let follow = match config.camera.follow_camera() {
        Ok(follow) => follow,
        Err(e) => panic!("Camera config failed validation: {e}"),
    };

    let position = point_to_bevy(follow.position());
    let look_at = point_to_bevy(follow.look_at());
    commands.spawn((
        Name::new("SceneCamera"),
        SceneCamera,
        Camera3d::default(),
        Transform::from_translation(position).looking_at(look_at, Vec3::Y),
    ));
    commands.insert_resource(FollowState(follow));
}

/// DRIVE: one smoothing step per render tick toward the latest vehicle
/// position. The vehicle pose may be a physics tick stale; that is fine, the
/// lerp eats the difference.
fn follow_vehicle(
    mut follow: ResMut<FollowState>,
    vehicle: Query<&Transform, (With<PlayerVehicle>, Without<SceneCamera>)>,
    mut camera: Query<&mut Transform, With<SceneCamera>>,
) {
    let Ok(mut camera_transform) = camera.single_mut() else {
        return;
    };

    let target = vehicle
        .single()
        .ok()
        .map(|transform| point_from_bevy(transform.translation));
    follow.0.step(target.as_ref());

    camera_transform.translation = point_to_bevy(follow.0.position());
    camera_transform.look_at(point_to_bevy(follow.0.look_at()), Vec3::Y);
}

/// FREE: damped yaw-only orbit around the arena origin. Horizontal mouse
/// drag moves the target yaw; the actual yaw chases it with damping. The
/// polar angle stays locked at the configured height, so there is no way to
/// drag the camera under the floor.
fn orbit_arena(
    config: Option<Res<ScenarioConfig>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut orbit: ResMut<OrbitState>,
    mut camera: Query<&mut Transform, With<SceneCamera>>,
) {
    let Some(config) = config else {
        return;
    };
    let Ok(mut camera_transform) = camera.single_mut() else {
        return;
    };

    if mouse_buttons.pressed(MouseButton::Left) {
        orbit.target_yaw -= mouse_motion.delta.x * 0.005;
    }
    let damping = config.camera.orbit_damping;
    orbit.yaw += (orbit.target_yaw - orbit.yaw) * damping;

    let radius = config.camera.orbit_radius;
    let height = config.camera.follow_offset[1] as f32;
    camera_transform.translation = Vec3::new(
        radius * orbit.yaw.sin(),
        height,
        radius * orbit.yaw.cos(),
    );
    camera_transform.look_at(Vec3::ZERO, Vec3::Y);
}

/// Fires on every entry into drive mode, including the initial one at app
/// startup, when neither the follow state nor the vehicle exists yet. Both
/// absences are normal; snap is skipped.
fn snap_to_vehicle(
    follow: Option<ResMut<FollowState>>,
    vehicle: Query<&Transform, (With<PlayerVehicle>, Without<SceneCamera>)>,
    mut camera: Query<&mut Transform, With<SceneCamera>>,
) {
    let Some(mut follow) = follow else {
        return;
    };
    let Ok(vehicle_transform) = vehicle.single() else {
        return;
    };

    follow
        .0
        .snap_to(&point_from_bevy(vehicle_transform.translation));

    if let Ok(mut camera_transform) = camera.single_mut() {
        camera_transform.translation = point_to_bevy(follow.0.position());
        camera_transform.look_at(point_to_bevy(follow.0.look_at()), Vec3::Y);
    }
}
