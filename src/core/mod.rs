//! Core domain: camera and simulation clock setup.

mod systems;

use bevy::prelude::*;

use crate::core::systems::{apply_fixed_timestep, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, apply_fixed_timestep));
    }
}
