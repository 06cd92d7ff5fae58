//! Vehicle domain: the rigid-body operations the controller needs.
//!
//! The controller never integrates anything itself. It reads velocities and
//! emits velocity writes, impulses and forces through [`VehicleBody`]; avian2d
//! performs the integration and collision response.

use avian2d::dynamics::rigid_body::forces::ForcesItem;
use avian2d::prelude::*;
use bevy::prelude::*;

pub trait VehicleBody {
    fn velocity(&self) -> Vec2;

    fn set_velocity(&mut self, velocity: Vec2);

    /// Angular velocity in rad/s, positive counter-clockwise.
    fn spin(&self) -> f32;

    fn set_spin(&mut self, spin: f32);

    /// Instantaneous change in momentum at the center of mass.
    fn add_impulse(&mut self, impulse: Vec2);

    /// Continuous force, integrated over the coming physics step.
    fn add_force(&mut self, force: Vec2);

    fn add_angular_impulse(&mut self, impulse: f32);
}

impl VehicleBody for ForcesItem<'_, '_> {
    fn velocity(&self) -> Vec2 {
        self.linear_velocity()
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        *self.linear_velocity_mut() = velocity;
    }

    fn spin(&self) -> f32 {
        self.angular_velocity()
    }

    fn set_spin(&mut self, spin: f32) {
        *self.angular_velocity_mut() = spin;
    }

    fn add_impulse(&mut self, impulse: Vec2) {
        self.apply_linear_impulse(impulse);
    }

    fn add_force(&mut self, force: Vec2) {
        self.apply_force(force);
    }

    fn add_angular_impulse(&mut self, impulse: f32) {
        self.apply_angular_impulse(impulse);
    }
}

/// Unit vector along the body's local +X for a rotation in radians.
pub fn body_right(rotation: f32) -> Vec2 {
    Vec2::from_angle(rotation)
}

/// Unit vector along the body's local +Y for a rotation in radians.
pub fn body_up(rotation: f32) -> Vec2 {
    Vec2::from_angle(rotation).rotate(Vec2::Y)
}
