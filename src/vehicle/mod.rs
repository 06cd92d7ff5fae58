//! Vehicle domain: plugin wiring and public exports for the vehicle controller.

mod arena;
mod body;
mod boost;
mod bootstrap;
mod components;
mod control;
mod flip;
mod ground;
mod intent;
mod motion;
mod resources;
mod systems;


pub use arena::Ground;
pub use body::{VehicleBody, body_right, body_up};
pub use boost::{BoostRefillEvent, BoostReserve};
pub use components::{
    GameLayer, GroundContact, GroundProbe, InputBindings, PlayerSlot, Vehicle, VehiclePresentation,
};
pub use control::{TickOutcome, VehicleControl};
pub use flip::{FlipDecision, FlipDirection, FlipPhase, JumpFlipState, air_spin, perform_flip};
pub use ground::{GroundQuery, ground_filter, is_grounded, probe_position};
pub use intent::{
    ControlAction, InputProvider, Intent, JumpLatch, KeyboardInput, ScriptedInput, VehicleIntent,
};
pub use motion::{move_towards, step_horizontal};
pub use resources::VehicleTuning;

use bevy::prelude::*;

use crate::vehicle::arena::spawn_arena;
use crate::vehicle::bootstrap::{spawn_vehicles, verify_vehicles};
use crate::vehicle::systems::{
    clear_scripted_input, detect_ground, handle_boost_refill, read_vehicle_input,
    run_vehicle_tick, update_presentation, update_vehicle_control,
};

/// Ordering hooks for systems outside the vehicle domain
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum VehicleSet {
    /// Resolving per-frame intent from the device and scripted channels
    Input,
}

pub struct VehiclePlugin;

impl Plugin for VehiclePlugin {
    fn build(&self, app: &mut App) {
        // VehicleTuning is owned and loaded by ContentPlugin
        app.add_message::<BoostRefillEvent>()
            .add_systems(Startup, (spawn_arena, spawn_vehicles))
            // Frame phase
            .add_systems(
                Update,
                (
                    verify_vehicles,
                    read_vehicle_input.in_set(VehicleSet::Input),
                    detect_ground,
                    update_vehicle_control,
                    handle_boost_refill,
                    update_presentation,
                )
                    .chain(),
            )
            // Fixed phase
            .add_systems(FixedUpdate, (detect_ground, run_vehicle_tick).chain())
            .add_systems(Last, clear_scripted_input);
    }
}
