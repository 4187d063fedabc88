// parcours_sim/src/simulation/plugins/mod.rs

pub mod camera;
pub mod debugging;
pub mod hud;
pub mod input;
pub mod modes;
pub mod sections;
pub mod track;
pub mod vehicle;
