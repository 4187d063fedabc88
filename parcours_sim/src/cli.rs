// parcours_sim/src/cli.rs

use bevy::prelude::Resource;
use clap::Parser;
use std::path::PathBuf;

/// Parcours: a drivable 3D portfolio tour.
///
/// This struct defines the command-line arguments for any binary that uses
/// the parcours simulation library.
#[derive(Parser, Debug, Resource, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The path to the scenario TOML file to run.
    #[arg(
        short,
        long,
        default_value = "assets/scenarios/portfolio_track.toml"
    )]
    pub scenario: PathBuf,

    /// Start in free-look mode instead of behind the wheel.
    #[arg(long, default_value_t = false)]
    pub free: bool,
}
