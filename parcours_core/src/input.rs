// parcours_core/src/input.rs

use serde::{Deserialize, Serialize};

/// Level-triggered drive intents, one flag per directional input.
///
/// Key listeners set and clear the flags asynchronously; the vehicle model
/// reads a copy once per simulation tick. The flags compose independently,
/// so accelerate + left is a valid forward-left command. There is no
/// debouncing and no edge memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveIntent {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

impl DriveIntent {
    /// Longitudinal command in {-1, 0, +1}. Holding both pedals cancels out.
    pub fn throttle_axis(&self) -> f64 {
        match (self.forward, self.backward) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// Steering command in {-1, 0, +1}. Positive is a left turn, which is
    /// positive yaw in a Y-up right-handed world. Holding both cancels out.
    pub fn steer_axis(&self) -> f64 {
        match (self.turn_left, self.turn_right) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// Drops every held flag. Called on mode teardown so a key held across
    /// a mode switch cannot keep feeding the vehicle model.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}
