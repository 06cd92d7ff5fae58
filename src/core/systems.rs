//! Core domain: camera and fixed timestep systems.

use bevy::prelude::*;

use crate::vehicle::VehicleTuning;

/// Forty screen pixels per world meter.
const CAMERA_SCALE: f32 = 1.0 / 40.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

/// The physics step runs at the tuned rate regardless of frame rate.
pub(crate) fn apply_fixed_timestep(tuning: Res<VehicleTuning>, mut time: ResMut<Time<Fixed>>) {
    time.set_timestep_seconds(tuning.fixed_timestep as f64);
    info!(
        "Fixed timestep set to {}s ({:.0} Hz)",
        tuning.fixed_timestep,
        1.0 / tuning.fixed_timestep
    );
}
