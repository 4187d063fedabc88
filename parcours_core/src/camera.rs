// parcours_core/src/camera.rs

use nalgebra::Vector3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CameraError {
    #[error("smoothing factor must be in (0, 1], got {0}")]
    InvalidSmoothing(f64),
}

/// Chase-camera pose smoother.
///
/// The offset is a constant world-space vector (elevated, set back along +Z)
/// that does not rotate with the vehicle heading: the framing is a raised
/// chase view, not a cockpit. Both the camera position and the look-at point
/// converge by a fixed-factor lerp per render tick. The factor is per tick,
/// not per second, so the feel depends on the display refresh rate; the
/// constants were tuned against that behavior and it is kept as-is.
#[derive(Debug, Clone)]
pub struct FollowCamera {
    offset: Vector3<f64>,
    smoothing: f64,
    position: Vector3<f64>,
    look_at: Vector3<f64>,
}

impl FollowCamera {
    pub fn new(offset: Vector3<f64>, smoothing: f64) -> Result<Self, CameraError> {
        if !(smoothing > 0.0 && smoothing <= 1.0) {
            return Err(CameraError::InvalidSmoothing(smoothing));
        }
        Ok(Self {
            offset,
            smoothing,
            position: offset,
            look_at: Vector3::zeros(),
        })
    }

    /// Drops the smoothed pose directly onto the target. Used when drive
    /// mode (re-)activates so the camera does not sail across the scene.
    pub fn snap_to(&mut self, target: &Vector3<f64>) {
        self.position = target + self.offset;
        self.look_at = *target;
    }

    /// One render tick. `target` is the latest known vehicle position, which
    /// may be a physics tick or two stale; `None` (racing not active yet)
    /// holds the previous pose untouched.
    pub fn step(&mut self, target: Option<&Vector3<f64>>) {
        let Some(target) = target else {
            return;
        };
        self.position = lerp(&self.position, &(target + self.offset), self.smoothing);
        self.look_at = lerp(&self.look_at, target, self.smoothing);
    }

    pub fn position(&self) -> &Vector3<f64> {
        &self.position
    }

    pub fn look_at(&self) -> &Vector3<f64> {
        &self.look_at
    }
}

fn lerp(from: &Vector3<f64>, to: &Vector3<f64>, factor: f64) -> Vector3<f64> {
    from + (to - from) * factor
}
