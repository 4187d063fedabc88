// parcours_sim/src/simulation/plugins/input.rs

//! Keyboard sampling for drive mode. The keyboard is read level-triggered
//! each simulation tick, so intent always reflects the keys held right now
//! and a key released between ticks leaves no residue.

use crate::prelude::*;
use parcours_core::input::DriveIntent;

/// The latest sampled drive intent. Written once per tick while driving,
/// cleared whenever drive mode deactivates.
#[derive(Resource, Debug, Default)]
pub struct DriveIntentState(pub DriveIntent);

pub struct DriveInputPlugin;

impl Plugin for DriveInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DriveIntentState>()
            .add_systems(
                FixedUpdate,
                sample_drive_keys
                    .in_set(SimulationSet::Input)
                    .run_if(in_state(AppState::Running).and(in_state(InteractionMode::Drive))),
            )
            // Leaving drive mode must not leave stale intent behind, or the
            // vehicle would keep its last command when driving resumes.
            .add_systems(OnExit(InteractionMode::Drive), clear_drive_intent);
    }
}

/// Both WASD and the arrow keys map to the same four actions.
fn sample_drive_keys(keys: Res<ButtonInput<KeyCode>>, mut intent: ResMut<DriveIntentState>) {
    intent.0 = DriveIntent {
        forward: keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp),
        backward: keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown),
        turn_left: keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft),
        turn_right: keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight),
    };
}

fn clear_drive_intent(mut intent: ResMut<DriveIntentState>) {
    intent.0.clear();
}
