use bevy::prelude::*;
use crate::plugins::core;
use crate::common::tunables::Tunables;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
}

#[test]
fn keeps_preinserted_tunables() {
    let mut app = App::new();
    app.insert_resource(Tunables { spray_width: 0.0, ..Tunables::default() });
    core::plugin(&mut app);
    assert_eq!(app.world().resource::<Tunables>().spray_width, 0.0);
}
