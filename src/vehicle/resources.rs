//! Vehicle domain: tuning resource shared by every controlled vehicle.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Angular velocity written while airborne is `airborne_torque_power` times this, in degrees/s.
const AIRBORNE_SPIN_DEGREES_PER_POWER: f32 = 100.0;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VehicleTuning {
    pub acceleration: f32,
    pub deceleration_grounded: f32,
    pub deceleration_airborne: f32,
    pub max_speed: f32,
    pub jump_impulse: f32,
    /// Seconds after a grounded jump during which the flip credit stays valid.
    pub flip_window: f32,
    /// Seconds a directional flip suppresses boost and air control.
    pub flip_duration: f32,
    pub flip_torque: f32,
    pub flip_kick_impulse: f32,
    pub flip_kick_angle_degrees: f32,
    /// Fraction of `jump_impulse` pushed downward when a flip starts.
    pub flip_settle_ratio: f32,
    /// Fraction of `jump_impulse` pushed along body-up by a neutral flip.
    pub hop_ratio: f32,
    pub airborne_torque_power: f32,
    pub boost_force: f32,
    pub grounded_boost_multiplier: f32,
    pub boost_drain_rate: f32,
    /// Amount a refill restores. Deliberately independent of capacity.
    pub default_boost: f32,
    pub starting_boost: f32,
    pub boost_capacity: f32,
    pub ground_probe_radius: f32,
    pub fixed_timestep: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
    pub mass: f32,
    /// Sets how far a flip torque impulse spins the chassis.
    pub angular_inertia: f32,
    /// Multiplier on world gravity so a full jump stays inside the arena.
    pub gravity_scale: f32,
}

impl Default for VehicleTuning {
    fn default() -> Self {
        Self {
            acceleration: 80.0,
            deceleration_grounded: 8.0,
            deceleration_airborne: 3.0,
            max_speed: 16.0,
            jump_impulse: 35.0,
            flip_window: 2.5,
            flip_duration: 0.5,
            flip_torque: 35.0,
            flip_kick_impulse: 25.0,
            flip_kick_angle_degrees: 5.0,
            flip_settle_ratio: 0.25,
            hop_ratio: 0.4,
            airborne_torque_power: 3.0,
            boost_force: 52.0,
            grounded_boost_multiplier: 1.5,
            boost_drain_rate: 30.0,
            default_boost: 45.0,
            starting_boost: 33.0,
            boost_capacity: 100.0,
            ground_probe_radius: 0.9,
            fixed_timestep: 0.02,
            linear_damping: 0.5,
            angular_damping: 1.1,
            mass: 1.0,
            angular_inertia: 4.0,
            gravity_scale: 5.0,
        }
    }
}

impl VehicleTuning {
    /// Angular velocity (rad/s) written each frame while airborne and steering.
    pub fn airborne_spin_rate(&self) -> f32 {
        (self.airborne_torque_power * AIRBORNE_SPIN_DEGREES_PER_POWER).to_radians()
    }

    pub fn flip_kick_angle(&self) -> f32 {
        self.flip_kick_angle_degrees.to_radians()
    }

    /// Height a jump from rest climbs above its take-off point under `gravity`.
    pub fn jump_apex(&self, gravity: f32) -> f32 {
        let launch_speed = self.jump_impulse / self.mass;
        launch_speed * launch_speed / (2.0 * gravity * self.gravity_scale)
    }
}
