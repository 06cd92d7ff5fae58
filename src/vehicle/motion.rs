//! Vehicle domain: horizontal speed integration.

use crate::vehicle::VehicleTuning;

/// Move `current` toward `target` by at most `max_delta`, never past it.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

/// New horizontal velocity after one fixed step.
///
/// Grounded steering accelerates while `|v|` is under `max_speed`. The gate is
/// checked before the add, so a single step may end slightly above the cap.
/// Everything else decays toward zero; in the air steering only rotates the
/// body and never adds thrust.
pub fn step_horizontal(
    velocity: f32,
    axis: f32,
    grounded: bool,
    dt: f32,
    tuning: &VehicleTuning,
) -> f32 {
    if !grounded {
        return move_towards(velocity, 0.0, tuning.deceleration_airborne * dt);
    }

    if axis != 0.0 && velocity.abs() < tuning.max_speed {
        velocity + axis * tuning.acceleration * dt
    } else {
        move_towards(velocity, 0.0, tuning.deceleration_grounded * dt)
    }
}
