//! Debug domain: hotkeys and the scripted autopilot.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::debug::state::{AutopilotStep, DebugState};
use crate::vehicle::{
    BoostRefillEvent, ControlAction, GroundContact, PlayerSlot, ScriptedInput, Vehicle,
    VehicleControl,
};

/// Handle keyboard shortcuts for debug actions. All of them need Ctrl held.
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut refill: MessageWriter<BoostRefillEvent>,
    mut scripts: Query<&mut ScriptedInput>,
    vehicles: Query<(Entity, &PlayerSlot, &GroundContact, &VehicleControl), With<Vehicle>>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    // Ctrl+B: refill every vehicle's boost
    if keyboard.just_pressed(KeyCode::KeyB) {
        refill.write(BoostRefillEvent { target: None });
        info!("[DEBUG] Boost refill sent");
    }

    // Ctrl+P: toggle the right vehicle's autopilot
    if keyboard.just_pressed(KeyCode::KeyP) {
        debug_state.autopilot = !debug_state.autopilot;
        debug_state.autopilot_clock = 0.0;
        if !debug_state.autopilot {
            for mut script in &mut scripts {
                script.release_all();
            }
        }
        info!(
            "[DEBUG] Autopilot {}",
            if debug_state.autopilot { "ON" } else { "OFF" }
        );
    }

    // Ctrl+L: dump control state
    if keyboard.just_pressed(KeyCode::KeyL) {
        for (entity, slot, contact, control) in &vehicles {
            info!(
                "[DEBUG] {:?} {:?}: phase={:?}, vx={:.2}, boost={:.1}, credits={}, facing_right={}",
                slot,
                entity,
                control.jump.phase(contact.grounded),
                control.horizontal_velocity,
                control.remaining_boost(),
                control.jump.flip_credits(),
                control.facing_right
            );
        }
    }
}

/// Drive the right vehicle through its scripted channel: steer left, boost
/// on the ground, then a jump followed by a flip every cycle.
pub(crate) fn drive_autopilot(
    time: Res<Time>,
    mut debug_state: ResMut<DebugState>,
    mut query: Query<(&PlayerSlot, &GroundContact, &mut ScriptedInput), With<Vehicle>>,
) {
    if !debug_state.autopilot {
        return;
    }

    let previous = debug_state.autopilot_clock;
    debug_state.autopilot_clock += time.delta_secs();
    let step = DebugState::autopilot_step(previous, debug_state.autopilot_clock);

    for (slot, contact, mut script) in &mut query {
        if *slot != PlayerSlot::Right {
            continue;
        }

        script.press(ControlAction::Left);
        if contact.grounded {
            script.press(ControlAction::Boost);
        } else {
            script.release(ControlAction::Boost);
        }

        match step {
            AutopilotStep::Jump | AutopilotStep::Flip => {
                // Re-press so the channel reports a fresh edge
                script.release(ControlAction::Jump);
                script.press(ControlAction::Jump);
            }
            AutopilotStep::Drive => script.release(ControlAction::Jump),
        }
    }
}
