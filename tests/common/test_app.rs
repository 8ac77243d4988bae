use bevy::prelude::*;
use islandhop::{
    components::{Control, FlightConfig, InputState, StartConfig},
    plugins::{AircraftPlugin, IslandhopPlugins},
    resources::{PhysicsConfig, SimulationConfig, WorldConfig},
};

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    config: SimulationConfig,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flight(mut self, config: FlightConfig) -> Self {
        self.config.flight = config;
        self
    }

    pub fn with_start(mut self, start: StartConfig) -> Self {
        self.config.start = start;
        self
    }

    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.config.physics = config;
        self
    }

    pub fn with_world(mut self, config: WorldConfig) -> Self {
        self.config.world = config;
        self
    }

    pub fn build(self) -> TestApp {
        let config = self.config;
        let mut app = App::new();

        // Input comes from the test, never the keyboard
        app.add_plugins(MinimalPlugins).add_plugins(
            IslandhopPlugins::new(config.clone())
                .build()
                .set(AircraftPlugin::new(config.flight, config.start, config.physics).scripted()),
        );
        app.finish();
        app.cleanup();

        // Run an initial update so Startup builds the world
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Run `steps` fixed flight steps, independent of wall-clock time
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    pub fn run_frame(&mut self) {
        self.run_steps(1);
    }

    pub fn press(&mut self, control: Control) {
        if let Some(mut input) = self.get_state_mut::<InputState>() {
            input.press(control);
        }
    }

    pub fn release(&mut self, control: Control) {
        if let Some(mut input) = self.get_state_mut::<InputState>() {
            input.release(control);
        }
    }

    pub fn send_event<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn get_state_mut<T: Resource>(&mut self) -> Option<Mut<T>> {
        self.app.world_mut().get_resource_mut::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn query_all<T: Component>(&mut self) -> Vec<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).collect()
    }
}
