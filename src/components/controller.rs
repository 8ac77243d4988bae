use bevy::prelude::*;

/// Marks the aircraft flown by the local player.
///
/// With the keyboard disabled the entity still flies, but only from input
/// written into `InputState` by something else (a script or a test).
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerController {
    pub keyboard_enabled: bool,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerController {
    pub fn new() -> Self {
        Self {
            keyboard_enabled: true,
        }
    }

    pub fn scripted() -> Self {
        Self {
            keyboard_enabled: false,
        }
    }
}
