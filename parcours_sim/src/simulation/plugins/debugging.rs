// parcours_sim/src/simulation/plugins/debugging.rs

//! Debug overlay, toggled with F3: trigger-radius rings for every
//! checkpoint plus the chassis coordinate frame.

use crate::prelude::*;
use crate::simulation::plugins::track::TrackMap;
use crate::simulation::plugins::vehicle::PlayerVehicle;

#[derive(Resource, Debug, Default)]
pub struct DebugOverlay {
    pub enabled: bool,
}

pub struct DebugOverlayPlugin;

impl Plugin for DebugOverlayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugOverlay>().add_systems(
            Update,
            (toggle_overlay, draw_overlay).run_if(in_state(AppState::Running)),
        );
    }
}

fn toggle_overlay(keys: Res<ButtonInput<KeyCode>>, mut overlay: ResMut<DebugOverlay>) {
    if keys.just_pressed(KeyCode::F3) {
        overlay.enabled = !overlay.enabled;
        info!(
            "[DEBUG] Overlay {}",
            if overlay.enabled { "on" } else { "off" }
        );
    }
}

fn draw_overlay(
    overlay: Res<DebugOverlay>,
    map: Option<Res<TrackMap>>,
    mut gizmos: Gizmos,
    vehicle: Query<&GlobalTransform, With<PlayerVehicle>>,
) {
    if !overlay.enabled {
        return;
    }

    if let Some(map) = map {
        for checkpoint in map.0.iter() {
            let [r, g, b] = checkpoint.color;
            let center = Vec3::new(
                checkpoint.center.x as f32,
                0.1,
                checkpoint.center.y as f32,
            );
            // Flat ring on the ground plane showing the true trigger radius.
            gizmos.circle(
                Isometry3d::new(center, Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
                checkpoint.trigger_radius as f32,
                Color::srgb(r, g, b),
            );
        }
    }

    if let Ok(transform) = vehicle.single() {
        gizmos.axes(*transform, 2.0);
    }
}
