//! Vehicle domain: jump latching, flip credits and the flip maneuver.
//!
//! A grounded jump grants one flip credit. The credit can be spent by a second
//! jump while airborne, as long as the flip window since the grounded jump has
//! not elapsed. Flipping is timestamp based: `flipping_until` is compared
//! against the clock on every frame and tick, so no callback is ever needed.

use bevy::prelude::*;

use crate::vehicle::body::{VehicleBody, body_up};
use crate::vehicle::{Intent, VehicleTuning};

/// Rotation sense of a flip, chosen from steering at trigger time.
/// Steering left rolls counter-clockwise, steering right clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipDirection {
    CounterClockwise,
    Clockwise,
    /// No steering: the flip becomes a hop with no rotation.
    Neutral,
}

impl FlipDirection {
    pub fn from_axis(axis: f32) -> Self {
        if axis < 0.0 {
            FlipDirection::CounterClockwise
        } else if axis > 0.0 {
            FlipDirection::Clockwise
        } else {
            FlipDirection::Neutral
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            FlipDirection::CounterClockwise => 1.0,
            FlipDirection::Clockwise => -1.0,
            FlipDirection::Neutral => 0.0,
        }
    }
}

/// Coarse view of the state machine, mostly for logging and the dev overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipPhase {
    Grounded,
    AirborneNoCredit,
    AirborneWithCredit,
    Flipping,
}

/// What the state machine decided for this frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FlipDecision {
    pub jump_latched: bool,
    pub flip: Option<FlipDirection>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct JumpFlipState {
    jump_eligible_since: f32,
    flip_credits: u8,
    flipping_until: Option<f32>,
}

impl JumpFlipState {
    pub fn jump_eligible_since(&self) -> f32 {
        self.jump_eligible_since
    }

    pub fn flip_credits(&self) -> u8 {
        self.flip_credits
    }

    pub fn is_flipping(&self) -> bool {
        self.flipping_until.is_some()
    }

    pub fn phase(&self, grounded: bool) -> FlipPhase {
        if self.is_flipping() {
            FlipPhase::Flipping
        } else if grounded {
            FlipPhase::Grounded
        } else if self.flip_credits > 0 {
            FlipPhase::AirborneWithCredit
        } else {
            FlipPhase::AirborneNoCredit
        }
    }

    /// Clear the flipping flag once its deadline has passed.
    pub fn expire(&mut self, now: f32) {
        if let Some(until) = self.flipping_until {
            if now >= until {
                self.flipping_until = None;
                debug!("Flip finished at t={:.2}", now);
            }
        }
    }

    /// Run one frame of the state machine.
    pub fn update(
        &mut self,
        intent: &Intent,
        grounded: bool,
        now: f32,
        tuning: &VehicleTuning,
    ) -> FlipDecision {
        let mut decision = FlipDecision::default();

        // The grounding jump itself never spends the credit it grants: the
        // airborne check below fails while still grounded.
        if intent.jump_edge && grounded {
            decision.jump_latched = true;
            self.flip_credits = 1;
            self.jump_eligible_since = now;
            debug!("Grounded jump at t={:.2}, flip credit granted", now);
        }

        if self.flip_credits > 0 && now - self.jump_eligible_since > tuning.flip_window {
            self.flip_credits = 0;
            debug!("Flip credit forfeited at t={:.2}", now);
        }

        if self.flip_credits > 0 && intent.jump_edge && !grounded {
            self.flip_credits -= 1;
            let direction = FlipDirection::from_axis(intent.axis);
            self.flipping_until = match direction {
                FlipDirection::Neutral => None,
                _ => Some(now + tuning.flip_duration),
            };
            decision.flip = Some(direction);
            debug!("Flip triggered at t={:.2}: {:?}", now, direction);
        }

        decision
    }
}

/// Apply the flip impulses to the body.
///
/// `rotation` is the body angle in radians at the moment of the flip; the
/// lateral kick follows it.
pub fn perform_flip(
    body: &mut impl VehicleBody,
    direction: FlipDirection,
    rotation: f32,
    tuning: &VehicleTuning,
) {
    let sign = direction.sign();

    body.add_impulse(Vec2::NEG_Y * tuning.jump_impulse * tuning.flip_settle_ratio);

    let kick_angle = rotation + sign * tuning.flip_kick_angle();
    let kick = Vec2::from_angle(kick_angle).rotate(Vec2::new(-sign * tuning.flip_kick_impulse, 0.0));
    body.add_impulse(kick);

    body.set_spin(0.0);
    body.add_angular_impulse(sign * tuning.flip_torque);

    if direction == FlipDirection::Neutral {
        body.add_impulse(body_up(rotation) * tuning.jump_impulse * tuning.hop_ratio);
    }
}

/// Direct angular velocity while airborne: left spins counter-clockwise,
/// right clockwise, no steering holds the current attitude.
pub fn air_spin(axis: f32, tuning: &VehicleTuning) -> f32 {
    let rate = tuning.airborne_spin_rate();
    if axis < 0.0 {
        rate
    } else if axis > 0.0 {
        -rate
    } else {
        0.0
    }
}
