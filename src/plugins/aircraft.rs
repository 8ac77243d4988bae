use bevy::prelude::*;

use crate::components::{AircraftState, FlightConfig, InputState, PlayerController, StartConfig};
use crate::plugins::{FlightSet, StartupStage};
use crate::resources::PhysicsConfig;
use crate::systems::{
    aircraft_render_system, clear_input_edges_system, flight_update_system,
    keyboard_input_system, reset_aircraft_system, FlightTelemetry, ResetRequestEvent,
};

/// Player aircraft, its input and the fixed-step flight loop.
pub struct AircraftPlugin {
    flight: FlightConfig,
    start: StartConfig,
    physics: PhysicsConfig,
    controller: PlayerController,
}

impl Default for AircraftPlugin {
    fn default() -> Self {
        Self::new(
            FlightConfig::default(),
            StartConfig::default(),
            PhysicsConfig::default(),
        )
    }
}

impl AircraftPlugin {
    pub fn new(flight: FlightConfig, start: StartConfig, physics: PhysicsConfig) -> Self {
        Self {
            flight,
            start,
            physics,
            controller: PlayerController::new(),
        }
    }

    /// Fly from `InputState` written by a script instead of the keyboard
    pub fn scripted(mut self) -> Self {
        self.controller = PlayerController::scripted();
        self
    }

    fn setup_aircraft(mut commands: Commands, start: Res<StartConfig>, controller: PlayerController) {
        let state = AircraftState::from_start(&start);
        info!(
            "Spawning aircraft at {:?}, heading {:.2}",
            start.position, start.heading
        );
        commands.spawn((
            state,
            controller,
            Name::new("Player Aircraft"),
            Transform::default(),
        ));
    }
}

impl Plugin for AircraftPlugin {
    fn build(&self, app: &mut App) {
        let controller = self.controller;

        app.insert_resource(self.flight.clone())
            .insert_resource(self.start.clone())
            .insert_resource(self.physics.clone())
            .init_resource::<InputState>()
            .init_resource::<FlightTelemetry>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_event::<ResetRequestEvent>()
            .add_systems(
                Startup,
                (move |commands: Commands, start: Res<StartConfig>| {
                    Self::setup_aircraft(commands, start, controller)
                })
                .in_set(StartupStage::BuildAircraft),
            )
            .add_systems(
                FixedUpdate,
                (
                    (keyboard_input_system, reset_aircraft_system)
                        .chain()
                        .in_set(FlightSet::Input),
                    flight_update_system.in_set(FlightSet::Step),
                    aircraft_render_system.in_set(FlightSet::Sync),
                    clear_input_edges_system.in_set(FlightSet::Cleanup),
                ),
            );

        app.insert_resource(Time::<Fixed>::from_hz(self.physics.frame_rate_hz));
    }
}
