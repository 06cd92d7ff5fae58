//! Debug domain: state for dev-only tooling.

use bevy::prelude::*;

/// Seconds between autopilot jump sequences
pub(crate) const AUTOPILOT_JUMP_PERIOD: f32 = 3.0;
/// Delay between the grounded jump and the airborne flip
pub(crate) const AUTOPILOT_FLIP_DELAY: f32 = 0.4;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the right vehicle is driven through its scripted input
    pub autopilot: bool,
    /// Seconds since the autopilot was switched on
    pub autopilot_clock: f32,
}

/// One scripted step for the autopilot at a point in its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutopilotStep {
    Drive,
    Jump,
    Flip,
}

impl DebugState {
    /// Which step should fire when the clock moves from `previous` to `current`.
    pub fn autopilot_step(previous: f32, current: f32) -> AutopilotStep {
        let cycle_prev = previous % AUTOPILOT_JUMP_PERIOD;
        let cycle_now = current % AUTOPILOT_JUMP_PERIOD;
        let wrapped = cycle_now < cycle_prev;

        if wrapped {
            AutopilotStep::Jump
        } else if cycle_prev < AUTOPILOT_FLIP_DELAY && cycle_now >= AUTOPILOT_FLIP_DELAY {
            AutopilotStep::Flip
        } else {
            AutopilotStep::Drive
        }
    }
}
