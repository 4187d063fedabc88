// parcours_sim/src/simulation/core/mod.rs

pub mod app_state;
pub mod config;
pub mod convert;
pub mod events;
pub mod simulation_setup;
