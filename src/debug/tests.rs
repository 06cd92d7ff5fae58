//! Debug domain: unit tests for the autopilot schedule.

use super::state::{AUTOPILOT_FLIP_DELAY, AUTOPILOT_JUMP_PERIOD, AutopilotStep, DebugState};

#[test]
fn test_autopilot_drives_between_events() {
    assert_eq!(DebugState::autopilot_step(0.0, 0.1), AutopilotStep::Drive);
    assert_eq!(DebugState::autopilot_step(1.0, 1.5), AutopilotStep::Drive);
}

#[test]
fn test_autopilot_jumps_when_cycle_wraps() {
    let before = AUTOPILOT_JUMP_PERIOD - 0.01;
    let after = AUTOPILOT_JUMP_PERIOD + 0.01;
    assert_eq!(DebugState::autopilot_step(before, after), AutopilotStep::Jump);
}

#[test]
fn test_autopilot_flips_after_delay() {
    let start = AUTOPILOT_JUMP_PERIOD + AUTOPILOT_FLIP_DELAY - 0.01;
    let end = AUTOPILOT_JUMP_PERIOD + AUTOPILOT_FLIP_DELAY + 0.01;
    assert_eq!(DebugState::autopilot_step(start, end), AutopilotStep::Flip);
}
