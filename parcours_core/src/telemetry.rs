// parcours_core/src/telemetry.rs

//! Derived HUD readouts. Pure arithmetic on the speed scalar that the sim
//! broadcasts every render tick; nothing here feeds back into the physics.

/// Display speed in "km/h". A flat scale factor on the physical speed,
/// chosen for readout feel rather than unit correctness.
pub fn display_speed(speed: f64) -> f64 {
    (speed * 10.0).abs()
}

/// Fake gear indicator derived from speed alone, clamped to 1..=6. There is
/// no gearbox in the drive model; this is cosmetic.
pub fn display_gear(speed: f64) -> u8 {
    let gear = (speed.abs() * 2.0).floor() as i64 + 1;
    gear.clamp(1, 6) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn speed_readout_scales_and_rectifies() {
        assert_abs_diff_eq!(display_speed(0.0), 0.0);
        assert_abs_diff_eq!(display_speed(3.2), 32.0, epsilon = 1e-9);
        assert_abs_diff_eq!(display_speed(-3.2), 32.0, epsilon = 1e-9);
    }

    #[test]
    fn gear_steps_with_speed_and_clamps() {
        assert_eq!(display_gear(0.0), 1);
        assert_eq!(display_gear(0.49), 1);
        assert_eq!(display_gear(0.5), 2);
        assert_eq!(display_gear(1.6), 4);
        assert_eq!(display_gear(40.0), 6);
        assert_eq!(display_gear(-40.0), 6);
    }
}
