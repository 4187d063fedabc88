// parcours_sim/src/simulation/core/simulation_setup.rs

use std::time::Duration;

use avian3d::prelude::PhysicsSet;

use crate::prelude::*;
use crate::simulation::core::app_state::{SceneBuildSet, SimulationSet};
use crate::simulation::core::events::{SectionChanged, VehicleTelemetry};

pub struct SimulationSetupPlugin;

impl Plugin for SimulationSetupPlugin {
    fn build(&self, app: &mut App) {
        // --- INITIALIZE EVENTS ---
        app.add_event::<SectionChanged>()
            .add_event::<VehicleTelemetry>();

        // A sane default tick rate until the scenario is loaded.
        app.insert_resource(Time::<Fixed>::from_hz(60.0));

        // The scenario may override the simulation rate, so re-apply it once
        // the config resource exists.
        app.add_systems(OnEnter(AppState::SceneBuilding), apply_fixed_tick_rate);

        // --- CONFIGURE THE SPAWNING PIPELINE ---
        // This chain of SystemSets guarantees the correct spawning order.
        app.configure_sets(
            OnEnter(AppState::SceneBuilding),
            (
                SceneBuildSet::Track,
                SceneBuildSet::Vehicle,
                SceneBuildSet::Physics,
                SceneBuildSet::Finalize,
            )
                .chain(),
        );

        app.add_systems(
            OnEnter(AppState::SceneBuilding),
            // This system transitions to the main loop after building is complete.
            transition_to_running.in_set(SceneBuildSet::Finalize),
        );

        // Configure the runtime schedule graph.
        app.configure_sets(
            FixedUpdate,
            (
                // Phase 1: sample the keyboard.
                SimulationSet::Input,
                // Phase 2: intent -> forces on the chassis.
                SimulationSet::Actuation,
                // Phase 3: Avian prepares bodies and steps the world.
                PhysicsSet::Prepare,
                PhysicsSet::StepSimulation,
                // Phase 4: checkpoint polling against the fresh position.
                SimulationSet::Sections,
            )
                .chain(),
        );
    }
}

fn apply_fixed_tick_rate(config: Res<ScenarioConfig>, mut fixed_time: ResMut<Time<Fixed>>) {
    let hz = config.simulation.physics_hz;
    if hz <= 0.0 {
        warn!("Ignoring non-positive physics_hz {hz}; keeping 60 Hz.");
        return;
    }
    info!("Simulation tick rate: {hz} Hz");
    fixed_time.set_timestep(Duration::from_secs_f64(1.0 / hz));
}

/// Runs once at the end of the `OnEnter(SceneBuilding)` chain. Its only job
/// is to move the app into the main `Running` state.
fn transition_to_running(mut next_state: ResMut<NextState<AppState>>) {
    info!("Scene building complete. Transitioning to Running state.");
    next_state.set(AppState::Running);
}
