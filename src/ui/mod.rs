//! UI domain: in-game HUD elements.

mod hud_boost;

use bevy::prelude::*;

use crate::ui::hud_boost::{spawn_boost_bars, update_boost_bars};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (spawn_boost_bars, update_boost_bars).chain());
    }
}
