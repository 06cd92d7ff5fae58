//! Vehicle domain: input sampling for each vehicle.

use bevy::prelude::*;

use crate::vehicle::{InputBindings, Intent, KeyboardInput, ScriptedInput, VehicleIntent};

pub(crate) fn read_vehicle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&InputBindings, &ScriptedInput, &mut VehicleIntent)>,
) {
    for (bindings, script, mut intent) in &mut query {
        let device = KeyboardInput::new(&keyboard, bindings);
        intent.0 = Intent::resolve(&device, script);
    }
}

/// Drop scripted edges after the frame, the same way the keyboard does.
pub(crate) fn clear_scripted_input(mut query: Query<&mut ScriptedInput>) {
    for mut script in &mut query {
        script.0.clear();
    }
}
