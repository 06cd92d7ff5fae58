//! Vehicle domain: system modules for input, ground contact and control.

pub(crate) mod control;
pub(crate) mod ground;
pub(crate) mod input;

pub(crate) use control::{
    handle_boost_refill, run_vehicle_tick, update_presentation, update_vehicle_control,
};
pub(crate) use ground::detect_ground;
pub(crate) use input::{clear_scripted_input, read_vehicle_input};
