//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `bullet_stream::game::configure_headless` to install gameplay plugins.

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

pub fn app_headless() -> App {
    let mut app = App::new();

    // Core ECS + states. Avian needs AssetPlugin + ScenePlugin (SceneSpawner).
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    bullet_stream::game::configure_headless(&mut app);

    // `App::run` would do this; tests drive `app.update()` by hand.
    app.finish();
    app.cleanup();
    app
}

/// Headless app whose clock advances by exactly `step` per `app.update()`.
pub fn app_headless_stepped(step: Duration) -> App {
    let mut app = app_headless();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(step));
    app
}

/// Hold the left mouse button down for the rest of the test.
///
/// There is no input plugin headless, so the button also stays "just pressed".
pub fn hold_trigger(app: &mut App) {
    let mut buttons = ButtonInput::<MouseButton>::default();
    buttons.press(MouseButton::Left);
    app.insert_resource(buttons);
}
