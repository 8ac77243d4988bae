use bevy::prelude::*;

use crate::components::{Control, InputState, PlayerController};
use crate::systems::flight::ResetRequestEvent;

/// Key bound to each logical control
pub fn key_for(control: Control) -> KeyCode {
    match control {
        Control::PitchUp => KeyCode::ArrowUp,
        Control::PitchDown => KeyCode::ArrowDown,
        Control::RollLeft => KeyCode::ArrowLeft,
        Control::RollRight => KeyCode::ArrowRight,
        Control::ThrottleUp => KeyCode::KeyW,
        Control::ThrottleDown => KeyCode::KeyD,
        Control::EngineToggle => KeyCode::KeyV,
        Control::MapToggle => KeyCode::KeyE,
        Control::Reset => KeyCode::KeyR,
    }
}

/// Copy the keyboard into the logical input snapshot.
///
/// Held flags follow the keys directly; the edge flags are raised by
/// `InputState::press` and cleared at the end of the fixed step.
pub fn keyboard_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    player: Query<&PlayerController>,
    mut input: ResMut<InputState>,
    mut resets: EventWriter<ResetRequestEvent>,
) {
    let Ok(controller) = player.get_single() else {
        return;
    };
    if !controller.keyboard_enabled {
        return;
    }

    for control in Control::ALL {
        input.set(control, keyboard.pressed(key_for(control)));
    }

    if input.just_pressed(Control::Reset) {
        info!("Reset requested from keyboard");
        resets.send(ResetRequestEvent);
    }
}
