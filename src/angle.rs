//! Circular angle arithmetic for rotation-test yaw readings.
//!
//! Device yaw is reported in radians with no canonical range; everything
//! here treats angles as circular (equivalent under +2π) and normalizes
//! only where an operation needs it.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

const TAU: f64 = 2.0 * PI;

/// Which rotational sense a signed angle difference is measured in.
///
/// Purely a parameter: it selects the subtraction order inside
/// [`angle_difference`], and is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

/// Map any angle into the half-open interval `(-π, π]`.
///
/// Values already in range are returned untouched, so in-range inputs are
/// exact. Anything else reduces modulo 2π in constant time, which keeps
/// the function total for arbitrarily large finite readings; NaN and
/// infinite angles fall out unchanged.
pub fn normalize(x: f64) -> f64 {
    if !x.is_finite() || (x > -PI && x <= PI) {
        return x;
    }
    // rem_euclid lands in [0, 2π); fold the upper half back to (-π, 0).
    let r = x.rem_euclid(TAU);
    if r > PI {
        r - TAU
    } else {
        r
    }
}

/// Signed shortest-path difference between two yaw readings, in the
/// requested rotational sense, normalized into `(-π, π]`.
///
/// Raw yaw decreases as the device turns clockwise, so the clockwise
/// difference subtracts `to` from `from`; counter-clockwise is the
/// mirror. Readings straddling the ±π seam wrap to a small-magnitude
/// result (e.g. from −3.10 to 3.10 clockwise is ≈0.083, not ≈−6.2).
pub fn angle_difference(from: f64, to: f64, direction: RotationDirection) -> f64 {
    match direction {
        RotationDirection::Clockwise => normalize(from - to),
        RotationDirection::CounterClockwise => normalize(to - from),
    }
}

/// Classify a yaw reading into one of four quadrants of the circle.
///
/// The circle `(-π, π]` is split into consecutive half-open quarters:
/// `(-π/2, 0] → 1`, `(0, π/2] → 2`, `(π/2, π] → 3`, `(-π, -π/2] → 4`.
/// The input is normalized first, so any raw reading is accepted.
pub fn quadrant(raw_yaw: f64) -> u8 {
    let a = normalize(raw_yaw);
    if a > PI / 2.0 {
        3
    } else if a > 0.0 {
        2
    } else if a > -PI / 2.0 {
        1
    } else {
        4
    }
}

/// Radians to degrees, unclamped.
pub fn degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Radians to degrees, clamped to `[0, 360]` for display.
pub fn degrees_clamped(radians: f64) -> f64 {
    degrees(radians).clamp(0.0, 360.0)
}
