//! Validation for vehicle tuning values.

use crate::vehicle::VehicleTuning;

/// A tuning value that would produce undefined motion.
#[derive(Debug, PartialEq)]
pub struct TuningError {
    pub field: &'static str,
    pub value: f32,
    pub message: &'static str,
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {} {}", self.field, self.value, self.message)
    }
}

/// Push an error when `$value` fails `$check`
macro_rules! check {
    ($errors:expr, $tuning:expr, $field:ident, $check:expr, $message:expr) => {
        let value = $tuning.$field;
        if !$check(value) {
            $errors.push(TuningError {
                field: stringify!($field),
                value,
                message: $message,
            });
        }
    };
}

fn positive(value: f32) -> bool {
    value > 0.0
}

fn non_negative(value: f32) -> bool {
    value >= 0.0
}

/// Validate every tuning field.
/// Returns a list of errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &VehicleTuning) -> Vec<TuningError> {
    let mut errors = Vec::new();

    check!(errors, tuning, max_speed, positive, "must be positive");
    check!(errors, tuning, fixed_timestep, positive, "must be positive");
    check!(errors, tuning, boost_capacity, positive, "must be positive");
    check!(errors, tuning, ground_probe_radius, positive, "must be positive");
    check!(errors, tuning, mass, positive, "must be positive");
    check!(errors, tuning, angular_inertia, positive, "must be positive");

    check!(errors, tuning, acceleration, non_negative, "must not be negative");
    check!(errors, tuning, deceleration_grounded, non_negative, "must not be negative");
    check!(errors, tuning, deceleration_airborne, non_negative, "must not be negative");
    check!(errors, tuning, jump_impulse, non_negative, "must not be negative");
    check!(errors, tuning, flip_window, non_negative, "must not be negative");
    check!(errors, tuning, flip_duration, non_negative, "must not be negative");
    check!(errors, tuning, flip_torque, non_negative, "must not be negative");
    check!(errors, tuning, flip_kick_impulse, non_negative, "must not be negative");
    check!(errors, tuning, flip_settle_ratio, non_negative, "must not be negative");
    check!(errors, tuning, hop_ratio, non_negative, "must not be negative");
    check!(errors, tuning, airborne_torque_power, non_negative, "must not be negative");
    check!(errors, tuning, boost_force, non_negative, "must not be negative");
    check!(errors, tuning, grounded_boost_multiplier, non_negative, "must not be negative");
    check!(errors, tuning, boost_drain_rate, non_negative, "must not be negative");
    check!(errors, tuning, linear_damping, non_negative, "must not be negative");
    check!(errors, tuning, angular_damping, non_negative, "must not be negative");
    check!(errors, tuning, gravity_scale, non_negative, "must not be negative");

    let capacity = tuning.boost_capacity;
    let within_capacity = |value: f32| (0.0..=capacity).contains(&value);
    check!(errors, tuning, default_boost, within_capacity, "must lie in [0, boost_capacity]");
    check!(errors, tuning, starting_boost, within_capacity, "must lie in [0, boost_capacity]");

    errors
}
