// parcours_sim/src/simulation/core/events.rs

use bevy::prelude::{Event, Vec3};

/// Broadcast whenever the current portfolio section changes, either by
/// driving into a checkpoint or by paging in free mode. Presentational
/// overlays consume this to swap displayed content.
#[derive(Event, Debug, Clone, Copy)]
pub struct SectionChanged {
    pub from: usize,
    pub section: usize,
}

/// Vehicle pose telemetry, sent every render tick while driving. The HUD
/// derives its speed and gear readouts from this.
#[derive(Event, Debug, Clone, Copy)]
pub struct VehicleTelemetry {
    pub position: Vec3,
    pub speed: f32,
}
