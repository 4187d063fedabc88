// parcours_sim/src/main.rs

use avian3d::prelude::*;
use bevy::{log::LogPlugin, prelude::*};
use clap::Parser;

use parcours_sim::cli::Cli;
use parcours_sim::prelude::{AppState, InteractionMode};
use parcours_sim::ParcoursSimulationPlugin;

fn main() {
    let cli = Cli::parse();

    let start_mode = if cli.free {
        InteractionMode::Free
    } else {
        InteractionMode::Drive
    };

    let mut app = App::new();

    // --- Core Bevy plugins & resources ---
    app.add_plugins(
        DefaultPlugins.set(LogPlugin {
            level: bevy::log::Level::INFO,
            // A good filter for focusing on our crates' logs during development.
            filter: "info,wgpu_core=error,wgpu_hal=error,parcours_sim=debug,parcours_core=debug"
                .to_string(),
            ..default()
        }),
    )
    // The Avian3D physics plugins.
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(cli);

    app.init_state::<AppState>();
    app.insert_state(start_mode);

    // --- The simulation itself ---
    // This single line brings in the whole architecture: config loading,
    // scene building, vehicle, sections, camera, HUD.
    app.add_plugins(ParcoursSimulationPlugin);

    app.run();
}
