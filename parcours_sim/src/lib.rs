// parcours_sim/src/lib.rs

use bevy::prelude::*;

// Import the plugins defined within the simulation crate.
use crate::simulation::config::ConfigPlugin;
use crate::simulation::core::simulation_setup::SimulationSetupPlugin;
use crate::simulation::plugins::camera::CameraPlugin;
use crate::simulation::plugins::debugging::DebugOverlayPlugin;
use crate::simulation::plugins::hud::HudPlugin;
use crate::simulation::plugins::input::DriveInputPlugin;
use crate::simulation::plugins::modes::ModeSwitchPlugin;
use crate::simulation::plugins::sections::SectionsPlugin;
use crate::simulation::plugins::track::TrackPlugin;
use crate::simulation::plugins::vehicle::VehiclePlugin;

// This prelude is for convenience for other files WITHIN the parcours_sim crate.
pub mod prelude;

// This module contains all the simulation-specific logic.
pub mod cli;
pub mod simulation;

/// The main plugin that brings together all the simulation parts.
/// Your `main.rs` will just add this one plugin to the Bevy App.
pub struct ParcoursSimulationPlugin;

impl Plugin for ParcoursSimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            // Loads the scenario TOML and fails fast on a bad one.
            ConfigPlugin,
            // Fixed tick rate, schedule graph, lifecycle transitions.
            SimulationSetupPlugin,
            // Static world: ground, walls, checkpoint zones, lighting.
            TrackPlugin,
            // The player vehicle and its drive model.
            VehiclePlugin,
            DriveInputPlugin,
            // Section tracking: checkpoint polling and free-mode paging.
            SectionsPlugin,
            CameraPlugin,
            ModeSwitchPlugin,
            HudPlugin,
            DebugOverlayPlugin,
        ));
    }
}
