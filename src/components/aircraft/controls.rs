use bevy::prelude::*;
use serde::{Deserialize, Serialize};

const CONTROL_COUNT: usize = 9;

/// Logical controls understood by the flight loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    PitchUp,
    PitchDown,
    /// Banks in the air, steers the nose wheel on the ground.
    RollLeft,
    RollRight,
    ThrottleUp,
    ThrottleDown,
    EngineToggle,
    MapToggle,
    Reset,
}

impl Control {
    pub const ALL: [Control; CONTROL_COUNT] = [
        Control::PitchUp,
        Control::PitchDown,
        Control::RollLeft,
        Control::RollRight,
        Control::ThrottleUp,
        Control::ThrottleDown,
        Control::EngineToggle,
        Control::MapToggle,
        Control::Reset,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Snapshot of the logical controls for one frame.
///
/// Written by the input collector, read-only for the flight step. `held`
/// drives continuous controls; `just_pressed` carries the rising edge used by
/// the toggles so a held key flips them once.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    held: [bool; CONTROL_COUNT],
    just_pressed: [bool; CONTROL_COUNT],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used by scripted input and tests
    pub fn with_held(mut self, control: Control) -> Self {
        self.press(control);
        self
    }

    pub fn held(&self, control: Control) -> bool {
        self.held[control.index()]
    }

    pub fn just_pressed(&self, control: Control) -> bool {
        self.just_pressed[control.index()]
    }

    /// Mark a control held, raising its edge if it was up
    pub fn press(&mut self, control: Control) {
        if !self.held[control.index()] {
            self.just_pressed[control.index()] = true;
        }
        self.held[control.index()] = true;
    }

    pub fn release(&mut self, control: Control) {
        self.held[control.index()] = false;
        self.just_pressed[control.index()] = false;
    }

    pub fn set(&mut self, control: Control, held: bool) {
        if held {
            self.press(control);
        } else {
            self.release(control);
        }
    }

    /// Drop the edge flags once a frame has consumed them
    pub fn clear_edges(&mut self) {
        self.just_pressed = [false; CONTROL_COUNT];
    }

    /// Neither roll control is held
    pub fn roll_idle(&self) -> bool {
        !self.held(Control::RollLeft) && !self.held(Control::RollRight)
    }
}
