// parcours_sim/src/simulation/core/convert.rs

//! Bridges between Bevy's f32 render-side math and the f64 nalgebra types
//! the drive model works in. All conversions live here so the rest of the
//! sim never mixes the two by hand.

use avian3d::prelude::LinearVelocity;
use bevy::prelude::{Transform, Vec3};
use nalgebra::{UnitQuaternion, Vector3};
use parcours_core::vehicle::ChassisSnapshot;

/// Captures the chassis state that the drive model needs for one tick.
pub fn chassis_snapshot(transform: &Transform, velocity: &LinearVelocity) -> ChassisSnapshot {
    ChassisSnapshot {
        position: point_from_bevy(transform.translation),
        orientation: UnitQuaternion::from_quaternion(nalgebra::Quaternion::new(
            f64::from(transform.rotation.w),
            f64::from(transform.rotation.x),
            f64::from(transform.rotation.y),
            f64::from(transform.rotation.z),
        )),
        linear_velocity: point_from_bevy(velocity.0),
    }
}

pub fn point_from_bevy(v: Vec3) -> Vector3<f64> {
    Vector3::new(f64::from(v.x), f64::from(v.y), f64::from(v.z))
}

pub fn point_to_bevy(v: &Vector3<f64>) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use bevy::prelude::Quat;

    #[test]
    fn snapshot_forward_matches_transform_forward() {
        let transform = Transform::from_xyz(1.0, 2.0, 3.0)
            .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_3));
        let velocity = LinearVelocity(Vec3::new(0.5, 0.0, -2.0));

        let snapshot = chassis_snapshot(&transform, &velocity);
        let forward = snapshot.forward();
        let expected = transform.forward();

        assert_abs_diff_eq!(forward.x, f64::from(expected.x), epsilon = 1e-6);
        assert_abs_diff_eq!(forward.y, f64::from(expected.y), epsilon = 1e-6);
        assert_abs_diff_eq!(forward.z, f64::from(expected.z), epsilon = 1e-6);
    }

    #[test]
    fn point_round_trip_preserves_components() {
        let original = Vec3::new(-4.25, 0.5, 19.0);
        let converted = point_to_bevy(&point_from_bevy(original));
        assert_abs_diff_eq!(converted.x, original.x);
        assert_abs_diff_eq!(converted.y, original.y);
        assert_abs_diff_eq!(converted.z, original.z);
    }
}
