use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    BuildUtilities,
    BuildTerrain,
    BuildAircraft,
    BuildCameras,
}

/// Per-frame ordering inside `FixedUpdate`
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    /// Keyboard into `InputState`, reset requests
    Input,
    /// The flight step itself, the only writer of `AircraftState`
    Step,
    /// Render pose and chase camera
    Sync,
    /// HUD text and map canvases
    Overlay,
    /// Clear the input edges consumed this frame
    Cleanup,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (
                StartupStage::BuildUtilities,
                StartupStage::BuildTerrain,
                StartupStage::BuildAircraft,
                StartupStage::BuildCameras,
            )
                .chain(),
        )
        .configure_sets(
            FixedUpdate,
            (
                FlightSet::Input,
                FlightSet::Step,
                FlightSet::Sync,
                FlightSet::Overlay,
                FlightSet::Cleanup,
            )
                .chain(),
        );
    }
}
