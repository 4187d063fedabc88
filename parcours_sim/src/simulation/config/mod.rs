// parcours_sim/src/simulation/config/mod.rs

//! Loads and validates the scenario configuration from disk before any part
//! of the scene is spawned.

use bevy::prelude::*;
use figment::{
    providers::{Format, Toml},
    Figment,
};

use crate::cli::Cli;
use crate::prelude::AppState;
use crate::simulation::core::config::ScenarioConfig;

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(AppState::ConfigLoading),
            (load_scenario, transition_to_scene_building).chain(),
        );
    }
}

fn load_scenario(mut commands: Commands, cli: Res<Cli>) {
    let scenario_path = &cli.scenario;
    info!("Loading scenario from: {}", scenario_path.display());

    if !scenario_path.exists() {
        warn!(
            "Scenario file {} not found; running with built-in defaults.",
            scenario_path.display()
        );
    }

    // A missing file merges as an empty document, so defaults fill every
    // field. A present-but-broken file is a hard error.
    let config: ScenarioConfig = match Figment::new()
        .merge(Toml::file(scenario_path))
        .extract()
    {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "Failed to parse scenario file at {}: {}",
                scenario_path.display(),
                e
            );
        }
    };

    // Fail fast on a track that cannot form a valid section loop.
    if let Err(e) = config.track.build_map() {
        panic!(
            "Scenario {} has an invalid checkpoint set: {}",
            scenario_path.display(),
            e
        );
    }
    if let Err(e) = config.camera.follow_camera() {
        panic!(
            "Scenario {} has an invalid camera config: {}",
            scenario_path.display(),
            e
        );
    }

    commands.insert_resource(config);
}

fn transition_to_scene_building(mut next_state: ResMut<NextState<AppState>>) {
    info!("Configuration loaded. Transitioning to SceneBuilding state.");
    next_state.set(AppState::SceneBuilding);
}
