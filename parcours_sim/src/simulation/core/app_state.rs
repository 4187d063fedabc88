// parcours_sim/src/simulation/core/app_state.rs

use bevy::{ecs::schedule::SystemSet, prelude::States};

/// Defines the major phases of the application's lifecycle.
#[derive(States, Debug, Clone, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// The initial state. The scenario TOML is loaded and validated here.
    #[default]
    ConfigLoading,

    /// Configuration is resolved. The track, vehicle, camera and HUD are
    /// being spawned from it.
    SceneBuilding,

    /// The scene is built. The interactive loop is running.
    Running,
}

/// The two mutually exclusive interaction modes.
///
/// Drive: vehicle physics, chase camera, checkpoint detection.
/// Free: physics paused, orbit camera, scroll paging between sections.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum InteractionMode {
    #[default]
    Drive,
    Free,
}

/// System sets to control the order of execution during SceneBuilding.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SceneBuildSet {
    /// Pass 1: static world. Ground slab, border walls, checkpoint zones,
    /// lighting, and the checkpoint map resource.
    Track,

    /// Pass 2: vehicle logic components and visual meshes.
    Vehicle,

    /// Pass 3: rigid bodies and colliders.
    Physics,

    /// Pass 4: camera rig and HUD, then the transition to Running.
    Finalize,
}

// =========================================================================
// == Main Simulation Sets (The "Data Flow Graph") ==
// =========================================================================

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Sample the keyboard into the drive intent record.
    Input,

    /// Turn intents into forces and torques on the chassis.
    Actuation,

    /// Poll the vehicle position against the checkpoint map. Runs after the
    /// physics step so it sees the freshest position available this tick.
    Sections,
}
