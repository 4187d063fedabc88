// parcours_core/src/lib.rs

// This file defines the public modules of your library.
pub mod camera;
pub mod input;
pub mod prelude;
pub mod sections;
pub mod telemetry;
pub mod track;
pub mod utils;
pub mod vehicle;
