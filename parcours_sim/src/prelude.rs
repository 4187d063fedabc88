// parcours_sim/src/prelude.rs

// Re-export the entire Bevy prelude for convenience.
pub use bevy::prelude::*;

// Re-export the parcours_core prelude so sim code can reach the pure types
// (`DriveIntent`, `CheckpointMap`, `SectionTracker`, ...) directly.
pub use parcours_core::prelude::*;

// Re-export common simulation-specific types for easy access in other plugins.
pub use crate::simulation::core::app_state::{
    AppState, InteractionMode, SceneBuildSet, SimulationSet,
};
pub use crate::simulation::core::config::ScenarioConfig;
