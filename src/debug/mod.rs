//! Debug tooling for fast iteration on vehicle feel.
//!
//! Hotkeys (hold Ctrl):
//! - B: refill boost on every vehicle
//! - P: toggle the right vehicle's scripted autopilot
//! - L: log each vehicle's control state

mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{drive_autopilot, handle_debug_hotkeys};
use crate::vehicle::VehicleSet;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (handle_debug_hotkeys, drive_autopilot)
                    .chain()
                    .before(VehicleSet::Input),
            );
    }
}
