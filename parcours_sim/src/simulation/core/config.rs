// parcours_sim/src/simulation/core/config.rs

use bevy::prelude::Resource;
use nalgebra::{Vector2, Vector3};
use parcours_core::camera::{CameraError, FollowCamera};
use parcours_core::track::{Checkpoint, CheckpointMap, TrackError};
use parcours_core::vehicle::ArcadeDriveModel;
use serde::Deserialize;

// =========================================================================
// == Top-Level Configuration Resource ==
// =========================================================================

/// # ScenarioConfig
/// The primary Bevy resource holding all configuration for a run.
/// This struct is the root of the data parsed from a scenario TOML file.
#[derive(Resource, Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub simulation: Simulation,

    #[serde(default)]
    pub vehicle: VehicleConfig,

    #[serde(default)]
    pub camera: CameraConfig,

    #[serde(default)]
    pub track: TrackConfig,
}

// =========================================================================
// == Configuration Sub-Structs ==
// These map directly to the sections of the scenario TOML.
// =========================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Simulation {
    /// Fixed simulation tick rate in Hz. Rendering runs independently at
    /// display refresh.
    #[serde(default = "default_physics_hz")]
    pub physics_hz: f64,
}

fn default_physics_hz() -> f64 {
    60.0
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            physics_hz: default_physics_hz(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VehicleConfig {
    /// Full chassis extents (x, y, z) in meters.
    #[serde(default = "default_chassis_size")]
    pub chassis_size: [f32; 3],

    #[serde(default = "default_mass")]
    pub mass: f32,

    #[serde(default = "default_chassis_friction")]
    pub friction: f32,

    #[serde(default = "default_restitution")]
    pub restitution: f32,

    /// Spin-down applied by the physics engine so steering torque cannot
    /// wind the yaw rate up forever.
    #[serde(default = "default_angular_damping")]
    pub angular_damping: f32,

    #[serde(default = "default_spawn_position")]
    pub spawn_position: [f32; 3],

    /// Engine force magnitude, N. Constant regardless of speed.
    #[serde(default = "default_engine_power")]
    pub engine_power: f64,

    /// Steering torque magnitude about the vertical axis, N*m.
    #[serde(default = "default_turn_torque")]
    pub turn_torque: f64,

    /// Linear drag coefficient, N per m/s.
    #[serde(default = "default_linear_drag")]
    pub linear_drag: f64,
}

fn default_chassis_size() -> [f32; 3] {
    [2.0, 0.5, 4.0]
}
fn default_mass() -> f32 {
    500.0
}
fn default_chassis_friction() -> f32 {
    0.1
}
fn default_restitution() -> f32 {
    0.1
}
fn default_angular_damping() -> f32 {
    3.0
}
fn default_spawn_position() -> [f32; 3] {
    [0.0, 1.0, 0.0]
}
fn default_engine_power() -> f64 {
    3000.0
}
fn default_turn_torque() -> f64 {
    800.0
}
fn default_linear_drag() -> f64 {
    2.0
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            chassis_size: default_chassis_size(),
            mass: default_mass(),
            friction: default_chassis_friction(),
            restitution: default_restitution(),
            angular_damping: default_angular_damping(),
            spawn_position: default_spawn_position(),
            engine_power: default_engine_power(),
            turn_torque: default_turn_torque(),
            linear_drag: default_linear_drag(),
        }
    }
}

impl VehicleConfig {
    pub fn drive_model(&self) -> ArcadeDriveModel {
        ArcadeDriveModel {
            engine_power: self.engine_power,
            turn_torque: self.turn_torque,
            linear_drag: self.linear_drag,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraConfig {
    /// Chase offset from the vehicle in world axes. Constant; does not
    /// rotate with the vehicle heading.
    #[serde(default = "default_follow_offset")]
    pub follow_offset: [f64; 3],

    /// Per-render-tick lerp factor in (0, 1].
    #[serde(default = "default_smoothing")]
    pub smoothing: f64,

    /// Free-mode orbit radius around the scene origin.
    #[serde(default = "default_orbit_radius")]
    pub orbit_radius: f32,

    /// Free-mode yaw damping factor per frame.
    #[serde(default = "default_orbit_damping")]
    pub orbit_damping: f32,
}

fn default_follow_offset() -> [f64; 3] {
    [0.0, 15.0, 5.0]
}
fn default_smoothing() -> f64 {
    0.1
}
fn default_orbit_radius() -> f32 {
    20.0
}
fn default_orbit_damping() -> f32 {
    0.05
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            follow_offset: default_follow_offset(),
            smoothing: default_smoothing(),
            orbit_radius: default_orbit_radius(),
            orbit_damping: default_orbit_damping(),
        }
    }
}

impl CameraConfig {
    pub fn follow_camera(&self) -> Result<FollowCamera, CameraError> {
        let [x, y, z] = self.follow_offset;
        FollowCamera::new(Vector3::new(x, y, z), self.smoothing)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackConfig {
    /// Full extents of the static ground slab.
    #[serde(default = "default_ground_size")]
    pub ground_size: [f32; 3],

    #[serde(default = "default_ground_friction")]
    pub ground_friction: f32,

    /// The ordered checkpoint loop. Defaults to the eight-section portfolio
    /// circuit.
    #[serde(default = "default_checkpoints")]
    pub checkpoints: Vec<Checkpoint>,
}

fn default_ground_size() -> [f32; 3] {
    [100.0, 1.0, 100.0]
}
fn default_ground_friction() -> f32 {
    0.3
}

/// The portfolio circuit: eight checkpoints on a +/-20 ring, one per content
/// section, ordered so consecutive indices are spatially adjacent.
fn default_checkpoints() -> Vec<Checkpoint> {
    let entries: [(usize, &str, [f32; 3], [f64; 2]); 8] = [
        (0, "START", [0.392, 1.0, 0.855], [0.0, 0.0]),
        (1, "EDUCATION", [1.0, 0.4, 0.0], [0.0, -20.0]),
        (2, "ENTREPRENEUR", [0.612, 0.153, 0.690], [20.0, -20.0]),
        (3, "EXPERIENCE", [0.298, 0.686, 0.314], [20.0, 0.0]),
        (4, "PROJECTS", [0.129, 0.588, 0.953], [20.0, 20.0]),
        (5, "SKILLS", [1.0, 0.596, 0.0], [0.0, 20.0]),
        (6, "ACHIEVEMENTS", [1.0, 0.843, 0.0], [-20.0, 20.0]),
        (7, "CONTACT", [0.392, 1.0, 0.855], [-20.0, 0.0]),
    ];
    entries
        .into_iter()
        .map(|(section, label, color, [x, z])| Checkpoint {
            section,
            label: label.to_string(),
            color,
            center: Vector2::new(x, z),
            trigger_radius: 4.0,
        })
        .collect()
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            ground_size: default_ground_size(),
            ground_friction: default_ground_friction(),
            checkpoints: default_checkpoints(),
        }
    }
}

impl TrackConfig {
    pub fn build_map(&self) -> Result<CheckpointMap, TrackError> {
        CheckpointMap::new(self.checkpoints.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use figment::{
        providers::{Format, Toml},
        Figment,
    };

    #[test]
    fn default_circuit_is_a_valid_map() {
        let config = TrackConfig::default();
        let map = config.build_map().expect("default circuit must validate");
        assert_eq!(map.len(), 8);
        assert_eq!(map.label(0), Some("START"));
        assert_eq!(map.label(7), Some("CONTACT"));
    }

    #[test]
    fn empty_toml_yields_full_defaults() {
        let config: ScenarioConfig = Figment::new()
            .merge(Toml::string(""))
            .extract()
            .expect("empty scenario parses");
        assert_abs_diff_eq!(config.simulation.physics_hz, 60.0);
        assert_abs_diff_eq!(config.vehicle.mass, 500.0);
        assert_eq!(config.track.checkpoints.len(), 8);
    }

    #[test]
    fn partial_toml_overrides_and_backfills() {
        let scenario = r#"
            [simulation]
            physics_hz = 120.0

            [vehicle]
            engine_power = 4500.0

            [[track.checkpoints]]
            section = 0
            label = "ONLY"
            center = [3.0, -7.0]
        "#;
        let config: ScenarioConfig = Figment::new()
            .merge(Toml::string(scenario))
            .extract()
            .expect("scenario parses");

        assert_abs_diff_eq!(config.simulation.physics_hz, 120.0);
        assert_abs_diff_eq!(config.vehicle.engine_power, 4500.0);
        // Untouched fields keep their defaults.
        assert_abs_diff_eq!(config.vehicle.linear_drag, 2.0);

        let map = config.track.build_map().expect("one-checkpoint track");
        assert_eq!(map.len(), 1);
        let only = map.get(0).expect("checkpoint 0");
        assert_abs_diff_eq!(only.center.x, 3.0);
        assert_abs_diff_eq!(only.trigger_radius, 4.0);
    }

    #[test]
    fn bad_checkpoint_set_fails_validation_not_parsing() {
        let scenario = r#"
            [[track.checkpoints]]
            section = 5
            label = "ORPHAN"
            center = [0.0, 0.0]
        "#;
        let config: ScenarioConfig = Figment::new()
            .merge(Toml::string(scenario))
            .extract()
            .expect("parses fine");
        assert!(config.track.build_map().is_err());
    }
}
