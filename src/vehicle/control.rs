//! Vehicle domain: per-vehicle control state and the two phase entry points.
//!
//! `frame_update` runs once per rendered frame and owns the intent fields
//! (`axis`, the jump latch, `boost_held`). `fixed_tick` runs once per physics
//! step and owns everything else: velocity, latch consumption, boost drain.

use bevy::prelude::*;

use crate::vehicle::body::{VehicleBody, body_right};
use crate::vehicle::boost::BoostReserve;
use crate::vehicle::flip::{FlipDecision, JumpFlipState, air_spin, perform_flip};
use crate::vehicle::intent::{Intent, JumpLatch};
use crate::vehicle::motion::step_horizontal;
use crate::vehicle::VehicleTuning;

/// Everything the fixed tick did, for logging and tests
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub horizontal_velocity: f32,
    pub jumped: bool,
    pub boost_force: Option<Vec2>,
}

#[derive(Component, Debug, Clone)]
pub struct VehicleControl {
    pub facing_right: bool,
    pub horizontal_velocity: f32,
    pub axis: f32,
    pub boost_held: bool,
    pub pending_jump: JumpLatch,
    pub jump: JumpFlipState,
    pub boost: BoostReserve,
}

impl VehicleControl {
    pub fn new(tuning: &VehicleTuning) -> Self {
        Self {
            facing_right: true,
            horizontal_velocity: 0.0,
            axis: 0.0,
            boost_held: false,
            pending_jump: JumpLatch::default(),
            jump: JumpFlipState::default(),
            boost: BoostReserve::new(
                tuning.starting_boost,
                tuning.default_boost,
                tuning.boost_capacity,
            ),
        }
    }

    pub fn is_flipping(&self) -> bool {
        self.jump.is_flipping()
    }

    pub fn remaining_boost(&self) -> f32 {
        self.boost.remaining()
    }

    pub fn flip_facing(&mut self) {
        self.facing_right = !self.facing_right;
    }

    /// Frame phase: latch intent, run the jump/flip state machine and drive
    /// airborne rotation.
    pub fn frame_update(
        &mut self,
        body: &mut impl VehicleBody,
        intent: &Intent,
        grounded: bool,
        rotation: f32,
        now: f32,
        tuning: &VehicleTuning,
    ) -> FlipDecision {
        self.jump.expire(now);

        self.axis = intent.axis;
        self.boost_held = intent.boost_held;

        let decision = self.jump.update(intent, grounded, now, tuning);
        if decision.jump_latched {
            self.pending_jump.latch();
        }
        if let Some(direction) = decision.flip {
            perform_flip(body, direction, rotation, tuning);
        }

        if !grounded && !self.jump.is_flipping() {
            body.set_spin(air_spin(intent.axis, tuning));
        }

        decision
    }

    /// Fixed phase. The velocity write comes first so the jump impulse and
    /// boost force of the same tick stack on top of the new base velocity.
    pub fn fixed_tick(
        &mut self,
        body: &mut impl VehicleBody,
        grounded: bool,
        rotation: f32,
        dt: f32,
        now: f32,
        tuning: &VehicleTuning,
    ) -> TickOutcome {
        self.jump.expire(now);

        let velocity = body.velocity();
        self.horizontal_velocity = step_horizontal(velocity.x, self.axis, grounded, dt, tuning);
        body.set_velocity(Vec2::new(self.horizontal_velocity, velocity.y));

        let jumped = self.pending_jump.take();
        if jumped {
            body.add_impulse(Vec2::Y * tuning.jump_impulse);
        }

        let mut boost_force = None;
        if self.boost_held && !self.jump.is_flipping() && !self.boost.is_empty() {
            let force = self.boost_force(rotation, grounded, tuning);
            body.add_force(force);
            self.boost.drain(dt, tuning.boost_drain_rate);
            boost_force = Some(force);
        }

        TickOutcome {
            horizontal_velocity: self.horizontal_velocity,
            jumped,
            boost_force,
        }
    }

    /// Boost pushes along the body's local -X, mirrored by facing. The base
    /// sprite points toward -X, so this is "forward" for the unmirrored car.
    pub fn boost_force(&self, rotation: f32, grounded: bool, tuning: &VehicleTuning) -> Vec2 {
        let mut force = -body_right(rotation) * tuning.boost_force;
        if !self.facing_right {
            force = -force;
        }
        if grounded {
            force *= tuning.grounded_boost_multiplier;
        }
        force
    }
}
