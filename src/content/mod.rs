//! Content domain: data-driven vehicle tuning loaded at startup.

mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use loader::{TUNING_PATH, TuningFile, TuningLoadError, load_tuning_file, parse_tuning};
pub use validation::{TuningError, validate_tuning};

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::path::Path;

use crate::vehicle::VehicleTuning;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        // Sole owner of VehicleTuning; the other plugins only read it
        app.init_resource::<VehicleTuning>()
            .add_systems(PreStartup, load_vehicle_tuning);
    }
}

/// Replace the default tuning with `assets/data/vehicle_tuning.ron` when it
/// exists. Bad tuning stops the app before any vehicle is spawned.
fn load_vehicle_tuning(mut tuning: ResMut<VehicleTuning>, mut exit: MessageWriter<AppExit>) {
    let loaded = match load_tuning_file(Path::new(TUNING_PATH)) {
        Ok(Some(loaded)) => {
            info!("Loaded vehicle tuning from {}", TUNING_PATH);
            loaded
        }
        Ok(None) => {
            warn!("{} not found, using default vehicle tuning", TUNING_PATH);
            VehicleTuning::default()
        }
        Err(e) => {
            error!("{}", e);
            exit.write(AppExit::error());
            return;
        }
    };

    let errors = validate_tuning(&loaded);
    if !errors.is_empty() {
        for e in &errors {
            error!("Invalid vehicle tuning: {}", e);
        }
        exit.write(AppExit::error());
        return;
    }

    *tuning = loaded;
}
