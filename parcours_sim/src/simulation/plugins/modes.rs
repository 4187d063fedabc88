// parcours_sim/src/simulation/plugins/modes.rs

//! The drive/free mode switch. Escape hands control to the free-look orbit
//! and freezes the physics clock; R puts the player back in the seat.

use crate::prelude::*;
use avian3d::prelude::{Physics, PhysicsTime};

pub struct ModeSwitchPlugin;

impl Plugin for ModeSwitchPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            switch_modes.run_if(in_state(AppState::Running)),
        )
        .add_systems(OnEnter(InteractionMode::Free), pause_physics)
        .add_systems(OnExit(InteractionMode::Free), resume_physics);
    }
}

fn switch_modes(
    keys: Res<ButtonInput<KeyCode>>,
    mode: Res<State<InteractionMode>>,
    mut next_mode: ResMut<NextState<InteractionMode>>,
) {
    match mode.get() {
        InteractionMode::Drive if keys.just_pressed(KeyCode::Escape) => {
            info!("[MODE] Drive -> Free");
            next_mode.set(InteractionMode::Free);
        }
        InteractionMode::Free if keys.just_pressed(KeyCode::KeyR) => {
            info!("[MODE] Free -> Drive");
            next_mode.set(InteractionMode::Drive);
        }
        _ => {}
    }
}

/// Freezing the physics clock keeps the whole world where it is: the
/// vehicle holds position and velocity and resumes from the same state.
fn pause_physics(mut time: ResMut<Time<Physics>>) {
    time.pause();
}

fn resume_physics(mut time: ResMut<Time<Physics>>) {
    time.unpause();
}
