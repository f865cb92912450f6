//! Projectiles ECS tests: each system run once on a bare `World`.
//!
//! The stream's own update loop is covered in `stream/tests.rs`; these tests only
//! check that the systems feed it the right inputs and route its outputs.
use bevy::{ecs::message::Messages, prelude::*};

use crate::common::test_utils::{insert_time_with_delta, run_system_once};
use crate::common::tunables::Tunables;
use super::{advance, components, messages, request, sink, stream};

// --------------------------------------------------------------------------------------
// Helpers
// --------------------------------------------------------------------------------------

/// Resources every projectile system may ask for.
fn projectile_world() -> World {
    let mut world = World::new();
    world.init_resource::<components::Aim>();
    world.init_resource::<sink::BulletTraces>();
    world.init_resource::<messages::HitChannel>();
    world.init_resource::<Messages<messages::BulletHit>>();
    world.insert_resource(request::SpreadRng::seeded(7));
    world.insert_resource(Tunables::default());
    insert_time_with_delta(&mut world, 0.0);
    world
}

/// Shooter entity with a stream already wired to the world's HitChannel.
fn spawn_shooter(world: &mut World, origin: Vec2, target: Vec2, velocity: f32) -> Entity {
    let callback = world.resource::<messages::HitChannel>().callback();
    let mut s = stream::BulletStream::default();
    s.activate(origin, target, 0.0, velocity, callback);
    world
        .spawn((
            components::Shooter,
            components::FireTimer::from_interval(0.1),
            Transform::from_translation(origin.extend(1.0)),
            s,
        ))
        .id()
}

fn spawn_ground(world: &mut World, center: Vec2, size: Vec2) -> Entity {
    world
        .spawn((
            components::Ground { size },
            components::GroundHits::default(),
            Transform::from_translation(center.extend(0.0)),
        ))
        .id()
}

fn mouse(world: &mut World) -> Mut<'_, ButtonInput<MouseButton>> {
    if world.get_resource::<ButtonInput<MouseButton>>().is_none() {
        world.init_resource::<ButtonInput<MouseButton>>();
    }
    world.resource_mut::<ButtonInput<MouseButton>>()
}

fn bullets(world: &World, e: Entity) -> Vec<Vec2> {
    world.get::<stream::BulletStream>(e).unwrap().bullets().to_vec()
}

// --------------------------------------------------------------------------------------
// Input side
// --------------------------------------------------------------------------------------

#[test]
fn aim_is_empty_without_window() {
    let mut world = projectile_world();
    world.resource_mut::<components::Aim>().world_cursor = Some(Vec2::ONE);

    run_system_once(&mut world, request::update_aim_from_cursor);

    assert_eq!(world.resource::<components::Aim>().world_cursor, None);
}

#[test]
fn steer_follows_shooter_aim_and_tunables() {
    let mut world = projectile_world();
    world.insert_resource(Tunables { spray_width: 12.0, ..Tunables::default() });
    world.resource_mut::<components::Aim>().world_cursor = Some(Vec2::new(50.0, 80.0));
    let shooter = spawn_shooter(&mut world, Vec2::ZERO, Vec2::X, 10.0);
    world.get_mut::<Transform>(shooter).unwrap().translation = Vec3::new(50.0, 20.0, 1.0);

    run_system_once(&mut world, request::steer_streams);

    let s = world.get::<stream::BulletStream>(shooter).unwrap();
    assert_eq!(s.origin(), Vec2::new(50.0, 20.0));
    assert_eq!(s.target(), Vec2::new(50.0, 80.0));
    assert_eq!(s.width(), 12.0);
}

#[test]
fn steer_keeps_target_when_cursor_is_lost() {
    let mut world = projectile_world();
    let shooter = spawn_shooter(&mut world, Vec2::ZERO, Vec2::new(0.0, 9.0), 10.0);

    run_system_once(&mut world, request::steer_streams);

    let s = world.get::<stream::BulletStream>(shooter).unwrap();
    assert_eq!(s.target(), Vec2::new(0.0, 9.0));
}

#[test]
fn fire_does_nothing_without_trigger() {
    let mut world = projectile_world();
    let shooter = spawn_shooter(&mut world, Vec2::ZERO, Vec2::X, 10.0);

    // No ButtonInput resource at all.
    run_system_once(&mut world, request::fire_streams);
    assert!(bullets(&world, shooter).is_empty());

    // Resource present, button up.
    mouse(&mut world);
    run_system_once(&mut world, request::fire_streams);
    assert!(bullets(&world, shooter).is_empty());
}

#[test]
fn fire_spawns_on_press_then_per_interval() {
    let mut world = projectile_world();
    let shooter = spawn_shooter(&mut world, Vec2::new(3.0, 4.0), Vec2::new(3.0, 10.0), 10.0);

    mouse(&mut world).press(MouseButton::Left);
    run_system_once(&mut world, request::fire_streams);
    assert_eq!(bullets(&world, shooter), vec![Vec2::new(3.0, 4.0)]);

    // Held: 0.35 s at a 0.1 s interval -> three more.
    mouse(&mut world).clear();
    insert_time_with_delta(&mut world, 0.35);
    run_system_once(&mut world, request::fire_streams);
    assert_eq!(bullets(&world, shooter).len(), 4);
}

#[test]
fn fire_respects_inactive_stream() {
    let mut world = projectile_world();
    let shooter = spawn_shooter(&mut world, Vec2::ZERO, Vec2::X, 10.0);
    world.get_mut::<stream::BulletStream>(shooter).unwrap().deactivate();

    mouse(&mut world).press(MouseButton::Left);
    run_system_once(&mut world, request::fire_streams);

    assert!(bullets(&world, shooter).is_empty());
}

#[test]
fn toggle_flips_safety_and_rearms_with_callback() {
    let mut world = projectile_world();
    world.init_resource::<ButtonInput<KeyCode>>();
    let shooter = spawn_shooter(&mut world, Vec2::ZERO, Vec2::X, 100.0);
    spawn_ground(&mut world, Vec2::new(100.0, 0.0), Vec2::splat(20.0));

    world.resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::KeyQ);
    run_system_once(&mut world, request::toggle_streams);
    assert!(!world.get::<stream::BulletStream>(shooter).unwrap().is_active());

    let mut keys = world.resource_mut::<ButtonInput<KeyCode>>();
    keys.release(KeyCode::KeyQ);
    keys.clear();
    keys.press(KeyCode::KeyQ);
    run_system_once(&mut world, request::toggle_streams);

    let s = world.get::<stream::BulletStream>(shooter).unwrap();
    assert!(s.is_active());
    assert_eq!(s.velocity(), 100.0);

    // The re-armed callback still reaches the channel.
    mouse(&mut world).press(MouseButton::Left);
    run_system_once(&mut world, request::fire_streams);
    insert_time_with_delta(&mut world, 1.0);
    run_system_once(&mut world, advance::advance_bullet_streams);
    assert_eq!(world.resource::<messages::HitChannel>().drain().len(), 1);
}

// --------------------------------------------------------------------------------------
// Advance + hit routing
// --------------------------------------------------------------------------------------

#[test]
fn advance_moves_bullets_and_records_traces() {
    let mut world = projectile_world();
    let shooter = spawn_shooter(&mut world, Vec2::ZERO, Vec2::X, 100.0);
    world
        .get_mut::<stream::BulletStream>(shooter)
        .unwrap()
        .spawn(&mut request::SpreadRng::seeded(1).0);

    insert_time_with_delta(&mut world, 0.5);
    run_system_once(&mut world, advance::advance_bullet_streams);

    assert_eq!(bullets(&world, shooter), vec![Vec2::new(50.0, 0.0)]);
    let traces = &world.resource::<sink::BulletTraces>().traces;
    assert_eq!(traces.len(), 1);
    assert_eq!(traces[0].tail, Vec2::new(45.0, 0.0));
    assert_eq!(traces[0].head, Vec2::new(55.0, 0.0));
}

#[test]
fn hit_flows_from_stream_to_ground_counter() {
    let mut world = projectile_world();
    let shooter = spawn_shooter(&mut world, Vec2::ZERO, Vec2::X, 100.0);
    let wall = spawn_ground(&mut world, Vec2::new(100.0, 0.0), Vec2::new(10.0, 40.0));
    let bystander = spawn_ground(&mut world, Vec2::new(0.0, 300.0), Vec2::splat(40.0));

    mouse(&mut world).press(MouseButton::Left);
    run_system_once(&mut world, request::fire_streams);

    insert_time_with_delta(&mut world, 1.0);
    run_system_once(&mut world, advance::advance_bullet_streams);
    assert!(bullets(&world, shooter).is_empty());
    assert!(world.resource::<sink::BulletTraces>().traces.is_empty());

    run_system_once(&mut world, advance::forward_hits);
    {
        let msgs = world.resource::<Messages<messages::BulletHit>>();
        let mut cursor = msgs.get_cursor();
        let hits: Vec<_> = cursor.read(msgs).copied().collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].entity, wall);
        assert_eq!(hits[0].point, Vec2::new(100.0, 0.0));
    }

    run_system_once(&mut world, advance::tally_ground_hits);
    assert_eq!(*world.get::<components::GroundHits>(wall).unwrap(), components::GroundHits(1));
    assert_eq!(*world.get::<components::GroundHits>(bystander).unwrap(), components::GroundHits(0));
}

#[test]
fn tally_ignores_hits_on_despawned_grounds() {
    let mut world = projectile_world();
    let gone = spawn_ground(&mut world, Vec2::ZERO, Vec2::ONE);
    world.despawn(gone);

    world.write_message(messages::BulletHit { entity: gone, point: Vec2::ZERO });
    run_system_once(&mut world, advance::tally_ground_hits);

    assert_eq!(world.query::<&components::GroundHits>().iter(&world).count(), 0);
}

// --------------------------------------------------------------------------------------
// Circle vs rectangle
// --------------------------------------------------------------------------------------

#[test]
fn circle_rect_edges_and_corners() {
    use super::collision::circle_hits_rect;

    let rect = Rect::from_center_size(Vec2::ZERO, Vec2::new(20.0, 10.0));

    // Inside, on an edge, one radius off an edge.
    assert!(circle_hits_rect(Vec2::ZERO, 3.0, rect));
    assert!(circle_hits_rect(Vec2::new(10.0, 0.0), 3.0, rect));
    assert!(circle_hits_rect(Vec2::new(13.0, 0.0), 3.0, rect));
    assert!(!circle_hits_rect(Vec2::new(13.1, 0.0), 3.0, rect));

    // Corner at (10, 5): diagonal distance matters, not the per-axis gap.
    assert!(circle_hits_rect(Vec2::new(12.0, 7.0), 3.0, rect));
    assert!(!circle_hits_rect(Vec2::new(12.5, 7.5), 3.0, rect));
}

#[test]
fn ground_rect_is_centred_and_ignores_size_sign() {
    use super::collision::GroundRect;

    let e = World::new().spawn_empty().id();
    let g = GroundRect::new(e, Vec2::new(100.0, 50.0), Vec2::new(-20.0, 10.0));
    assert_eq!(g.rect.min, Vec2::new(90.0, 45.0));
    assert_eq!(g.rect.max, Vec2::new(110.0, 55.0));
}
