//! Vehicle domain: input providers and per-frame intent resolution.

use bevy::prelude::*;

use crate::vehicle::InputBindings;

/// Logical controls a vehicle responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlAction {
    Left,
    Right,
    Jump,
    Boost,
}

/// Source of held / just-pressed queries for the logical controls.
pub trait InputProvider {
    fn held(&self, action: ControlAction) -> bool;
    fn just_pressed(&self, action: ControlAction) -> bool;
}

/// Live keyboard seen through one vehicle's bindings.
pub struct KeyboardInput<'a> {
    keys: &'a ButtonInput<KeyCode>,
    bindings: &'a InputBindings,
}

impl<'a> KeyboardInput<'a> {
    pub fn new(keys: &'a ButtonInput<KeyCode>, bindings: &'a InputBindings) -> Self {
        Self { keys, bindings }
    }
}

impl InputProvider for KeyboardInput<'_> {
    fn held(&self, action: ControlAction) -> bool {
        self.keys.pressed(self.bindings.key_for(action))
    }

    fn just_pressed(&self, action: ControlAction) -> bool {
        self.keys.just_pressed(self.bindings.key_for(action))
    }
}

/// Override channel driven by tests and dev tooling instead of a device.
/// Edges are cleared at the end of every frame, like the keyboard.
#[derive(Component, Debug, Default)]
pub struct ScriptedInput(pub ButtonInput<ControlAction>);

impl ScriptedInput {
    pub fn press(&mut self, action: ControlAction) {
        self.0.press(action);
    }

    pub fn release(&mut self, action: ControlAction) {
        self.0.release(action);
    }

    pub fn release_all(&mut self) {
        self.0.release_all();
    }
}

impl InputProvider for ScriptedInput {
    fn held(&self, action: ControlAction) -> bool {
        self.0.pressed(action)
    }

    fn just_pressed(&self, action: ControlAction) -> bool {
        self.0.just_pressed(action)
    }
}

/// What the driver asked for this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Intent {
    /// -1, 0 or 1. Left and right together cancel out.
    pub axis: f32,
    /// A direction key is held, even if both are and the axis cancels.
    pub steering: bool,
    pub jump_edge: bool,
    pub boost_held: bool,
}

impl Intent {
    /// Merge two sources; each direction, jump and boost are OR-ed across them.
    pub fn resolve(device: &impl InputProvider, script: &impl InputProvider) -> Self {
        let held = |action| device.held(action) || script.held(action);

        let left = held(ControlAction::Left);
        let right = held(ControlAction::Right);

        let mut axis = 0.0;
        if left {
            axis -= 1.0;
        }
        if right {
            axis += 1.0;
        }

        Self {
            axis,
            steering: left || right,
            jump_edge: device.just_pressed(ControlAction::Jump)
                || script.just_pressed(ControlAction::Jump),
            boost_held: held(ControlAction::Boost),
        }
    }
}

/// Most recent intent resolved for a vehicle
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct VehicleIntent(pub Intent);

/// A jump impulse waiting for the next fixed tick. Taking it clears it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct JumpLatch {
    latched: bool,
}

impl JumpLatch {
    pub fn latch(&mut self) {
        self.latched = true;
    }

    pub fn is_latched(&self) -> bool {
        self.latched
    }

    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.latched)
    }
}
