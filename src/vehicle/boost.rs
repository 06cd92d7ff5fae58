//! Vehicle domain: depletable boost reserve.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostReserve {
    remaining: f32,
    default_amount: f32,
    capacity: f32,
}

impl BoostReserve {
    pub fn new(starting: f32, default_amount: f32, capacity: f32) -> Self {
        Self {
            remaining: starting.min(capacity).max(0.0),
            default_amount,
            capacity,
        }
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Share of capacity left, for HUD bars.
    pub fn fraction(&self) -> f32 {
        if self.capacity <= 0.0 {
            return 0.0;
        }
        self.remaining / self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Spend `rate * dt`, flooring at zero. Returns what is left.
    pub fn drain(&mut self, dt: f32, rate: f32) -> f32 {
        self.remaining = (self.remaining - rate * dt).max(0.0);
        self.remaining
    }

    /// Refill to the configured default, which may sit below capacity.
    pub fn reset(&mut self) {
        self.remaining = self.default_amount;
    }
}

/// Refill boost to the default amount, e.g. when a checkpoint is reached.
/// `None` targets every vehicle.
#[derive(Debug, Clone, Copy)]
pub struct BoostRefillEvent {
    pub target: Option<Entity>,
}

impl Message for BoostRefillEvent {}
