//! Bullet stream: a spray of point bullets from one origin toward one target.
//!
//! The stream is engine-independent apart from math types: ground rectangles come
//! in through `GroundQuery`, drawing goes out through `BulletSink`, and the spawn
//! spread is drawn from any `rand::Rng`. The ECS host stores one stream per
//! shooter as a component (see `advance.rs` / `request.rs`).
//!
//! # Per-frame pass
//! ```text
//!   for each bullet:
//!     pos += dir * velocity * dt
//!     first ground (list order) within BULLET_RADIUS?  -> mark, callback
//!     else |pos - origin| > MAX_TRAVEL?                -> mark
//!     else                                             -> sink.draw_bullet
//!   swap_remove marked indices, highest first
//! ```
//!
//! Bullets store no velocity. The direction is recomputed from origin/target every
//! update, so retargeting bends every bullet already in flight.

use bevy::prelude::*;
use rand::Rng;

use super::collision::{GroundQuery, circle_hits_rect};
use super::messages::{BulletHit, HitCallback};
use super::sink::BulletSink;

/// Bullets farther than this from the origin are dropped silently.
pub const MAX_TRAVEL: f32 = 600.0;

/// Collision radius of a bullet.
pub const BULLET_RADIUS: f32 = 3.0;

/// What one `update` did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamTick {
    pub hits: usize,
    pub expired: usize,
    pub live: usize,
}

impl StreamTick {
    #[inline]
    pub fn is_quiet(&self) -> bool {
        self.hits == 0 && self.expired == 0
    }
}

#[derive(Component, Default)]
pub struct BulletStream {
    origin: Vec2,
    target: Vec2,
    width: f32,
    velocity: f32,
    active: bool,
    on_hit: Option<HitCallback>,
    bullets: Vec<Vec2>,
    // Reused between updates.
    spent: Vec<usize>,
}

impl std::fmt::Debug for BulletStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BulletStream")
            .field("origin", &self.origin)
            .field("target", &self.target)
            .field("width", &self.width)
            .field("velocity", &self.velocity)
            .field("active", &self.active)
            .field("bullets", &self.bullets.len())
            .finish_non_exhaustive()
    }
}

impl BulletStream {
    /// (Re)configure and activate. Bullets already in flight are kept.
    pub fn activate(
        &mut self,
        origin: Vec2,
        target: Vec2,
        width: f32,
        velocity: f32,
        on_hit: impl FnMut(&BulletHit) + Send + Sync + 'static,
    ) {
        self.origin = origin;
        self.target = target;
        self.width = width;
        self.velocity = velocity;
        self.on_hit = Some(Box::new(on_hit));
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    #[inline]
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Move the muzzle. Travel distance is measured from the current origin.
    #[inline]
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Live bullet positions. Order is unspecified after any removal.
    #[inline]
    pub fn bullets(&self) -> &[Vec2] {
        &self.bullets
    }

    /// Unit vector from origin to target; zero when they coincide.
    #[inline]
    pub fn shoot_dir(&self) -> Vec2 {
        (self.target - self.origin).normalize_or_zero()
    }

    /// Spawn one bullet somewhere on the muzzle line.
    ///
    /// The offset is a whole number of units in `[-trunc(width / 2), trunc(width / 2)]`
    /// along the perpendicular of the shoot direction.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Vec2> {
        if !self.active {
            return None;
        }

        // Saturating cast after abs: huge widths clamp to i32::MAX instead of overflowing.
        let half = (0.5 * self.width).abs() as i32;
        let offset = rng.random_range(-half..=half) as f32;
        let dir = self.shoot_dir();
        let perp = dir.perp();

        let pos = self.origin + perp * offset;
        self.bullets.push(pos);
        Some(pos)
    }

    /// Advance every bullet by `dt` seconds, resolve hits and expiry, draw survivors.
    pub fn update<G, S>(&mut self, dt: f32, grounds: &G, sink: &mut S) -> StreamTick
    where
        G: GroundQuery + ?Sized,
        S: BulletSink + ?Sized,
    {
        let mut tick = StreamTick::default();
        if !self.active {
            tick.live = self.bullets.len();
            return tick;
        }

        let dir = self.shoot_dir();
        let step = dir * (self.velocity * dt);
        let grounds = grounds.grounds();
        self.spent.clear();

        for (i, bullet) in self.bullets.iter_mut().enumerate() {
            let last = *bullet;
            *bullet += step;
            let pos = *bullet;

            let hit = grounds.iter().find(|g| {
                let touching = circle_hits_rect(pos, BULLET_RADIUS, g.rect);
                trace!(
                    "bullet {last} -> {pos} vs ground {} [{} .. {}]: {touching}",
                    g.entity, g.rect.min, g.rect.max
                );
                touching
            });

            if let Some(ground) = hit {
                self.spent.push(i);
                tick.hits += 1;
                if let Some(on_hit) = self.on_hit.as_mut() {
                    on_hit(&BulletHit { entity: ground.entity, point: pos });
                }
            } else if pos.distance(self.origin) > MAX_TRAVEL {
                self.spent.push(i);
                tick.expired += 1;
            } else {
                sink.draw_bullet(pos, dir);
            }
        }

        // Indices were pushed ascending; popping from the back keeps lower ones valid.
        for &i in self.spent.iter().rev() {
            self.bullets.swap_remove(i);
        }

        tick.live = self.bullets.len();
        tick
    }
}
