// parcours_core/src/vehicle.rs

use nalgebra::{UnitQuaternion, Vector3};

use crate::input::DriveIntent;

/// Read-only copy of the chassis rigid-body state for one tick.
///
/// The physics integrator owns the authoritative state. The drive model only
/// ever sees a snapshot and answers with force/torque commands; it must never
/// write position, orientation or velocity back, or the collision solver
/// desyncs.
#[derive(Debug, Clone)]
pub struct ChassisSnapshot {
    pub position: Vector3<f64>,
    pub orientation: UnitQuaternion<f64>,
    pub linear_velocity: Vector3<f64>,
}

impl ChassisSnapshot {
    /// World-space forward axis. Local forward is -Z, matching the renderer's
    /// convention.
    pub fn forward(&self) -> Vector3<f64> {
        self.orientation * -Vector3::z()
    }
}

/// World-space force and torque to hand to the physics integrator for one
/// simulation tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyCommand {
    pub force: Vector3<f64>,
    pub torque: Vector3<f64>,
}

/// Arcade drive model.
///
/// Engine force has constant magnitude regardless of current speed, steering
/// is a yaw-only torque, and a linear drag force opposes the velocity every
/// tick so the car coasts to rest when the pedals are released. There is no
/// gearbox and no traction model; the speed-independent engine is the tuned
/// feel, not an omission.
#[derive(Debug, Clone)]
pub struct ArcadeDriveModel {
    /// Magnitude of the engine force along the chassis forward axis, N.
    pub engine_power: f64,
    /// Magnitude of the steering torque about the vertical axis, N*m.
    pub turn_torque: f64,
    /// Linear drag coefficient, N per m/s of speed.
    pub linear_drag: f64,
}

impl ArcadeDriveModel {
    /// One simulation tick: intent + chassis snapshot in, body command out.
    pub fn tick(&self, intent: DriveIntent, chassis: &ChassisSnapshot) -> BodyCommand {
        let drive = chassis.forward() * (self.engine_power * intent.throttle_axis());
        let drag = -chassis.linear_velocity * self.linear_drag;
        let torque = Vector3::y() * (self.turn_torque * intent.steer_axis());

        BodyCommand {
            force: drive + drag,
            torque,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn resting_chassis() -> ChassisSnapshot {
        ChassisSnapshot {
            position: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
            linear_velocity: Vector3::zeros(),
        }
    }

    fn model() -> ArcadeDriveModel {
        ArcadeDriveModel {
            engine_power: 3000.0,
            turn_torque: 800.0,
            linear_drag: 2.0,
        }
    }

    #[test]
    fn engine_force_follows_throttle_sign() {
        let chassis = resting_chassis();
        let forward = chassis.forward();
        let model = model();

        let accel = model.tick(
            DriveIntent {
                forward: true,
                ..Default::default()
            },
            &chassis,
        );
        assert_abs_diff_eq!(accel.force.dot(&forward), 3000.0, epsilon = 1e-9);

        let brake = model.tick(
            DriveIntent {
                backward: true,
                ..Default::default()
            },
            &chassis,
        );
        assert_abs_diff_eq!(brake.force.dot(&forward), -3000.0, epsilon = 1e-9);

        let both = model.tick(
            DriveIntent {
                forward: true,
                backward: true,
                ..Default::default()
            },
            &chassis,
        );
        assert_abs_diff_eq!(both.force.norm(), 0.0, epsilon = 1e-9);

        let neither = model.tick(DriveIntent::default(), &chassis);
        assert_abs_diff_eq!(neither.force.norm(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn steering_torque_is_yaw_only_and_opposed() {
        let chassis = resting_chassis();
        let model = model();

        let left = model.tick(
            DriveIntent {
                turn_left: true,
                ..Default::default()
            },
            &chassis,
        );
        let right = model.tick(
            DriveIntent {
                turn_right: true,
                ..Default::default()
            },
            &chassis,
        );

        assert_abs_diff_eq!(left.torque.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(left.torque.z, 0.0, epsilon = 1e-9);
        assert!(left.torque.y > 0.0);
        assert_abs_diff_eq!(left.torque.y, -right.torque.y, epsilon = 1e-9);
    }

    #[test]
    fn drag_opposes_velocity() {
        let mut chassis = resting_chassis();
        chassis.linear_velocity = Vector3::new(3.0, 0.0, -4.0);

        let command = model().tick(DriveIntent::default(), &chassis);
        let cos = command.force.dot(&chassis.linear_velocity)
            / (command.force.norm() * chassis.linear_velocity.norm());
        assert_abs_diff_eq!(cos, -1.0, epsilon = 1e-9);
        // Magnitude proportional to speed.
        assert_abs_diff_eq!(command.force.norm(), 2.0 * 5.0, epsilon = 1e-9);
    }

    #[test]
    fn coasting_decays_to_rest() {
        // Forward-integrate the model with no input: speed must shrink every
        // step and effectively reach zero without reversing direction.
        let model = model();
        let mass = 500.0;
        let dt = 1.0 / 60.0;

        let mut chassis = resting_chassis();
        chassis.linear_velocity = Vector3::new(8.0, 0.0, -6.0);
        let initial_direction = chassis.linear_velocity.normalize();

        let mut previous_speed = chassis.linear_velocity.norm();
        for _ in 0..3000 {
            let command = model.tick(DriveIntent::default(), &chassis);
            chassis.linear_velocity += command.force * (dt / mass);

            let speed = chassis.linear_velocity.norm();
            assert!(speed < previous_speed || speed == 0.0);
            if speed > 1e-6 {
                // Drag never flips the direction of travel.
                assert!(chassis.linear_velocity.normalize().dot(&initial_direction) > 0.999);
            }
            previous_speed = speed;
        }
        assert!(previous_speed < 1e-3);
    }

    #[test]
    fn engine_force_rotates_with_heading() {
        let mut chassis = resting_chassis();
        // Quarter turn to the left: forward becomes -X.
        chassis.orientation =
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), std::f64::consts::FRAC_PI_2);

        let command = model().tick(
            DriveIntent {
                forward: true,
                ..Default::default()
            },
            &chassis,
        );
        assert_abs_diff_eq!(command.force.x, -3000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(command.force.y, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(command.force.z, 0.0, epsilon = 1e-6);
    }
}
