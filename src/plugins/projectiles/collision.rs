//! Bullet vs ground collision.
//!
//! Grounds are axis-aligned rectangles; a bullet is a small circle at its current
//! position. There is no swept test: a bullet fast enough to jump over a thin
//! ground in a single frame passes through it.

use bevy::prelude::*;

/// A ground rectangle as seen by a bullet stream for one update pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundRect {
    pub entity: Entity,
    pub rect: Rect,
}

impl GroundRect {
    /// Build from the ground's centre and full size.
    #[inline]
    pub fn new(entity: Entity, center: Vec2, size: Vec2) -> Self {
        Self {
            entity,
            rect: Rect::from_center_size(center, size.abs()),
        }
    }
}

/// Source of ground rectangles for a stream update.
///
/// The order of the returned slice is the collision priority: the first
/// rectangle a bullet touches wins, even if a later one is nearer.
pub trait GroundQuery {
    fn grounds(&self) -> &[GroundRect];
}

impl GroundQuery for [GroundRect] {
    #[inline]
    fn grounds(&self) -> &[GroundRect] {
        self
    }
}

impl GroundQuery for Vec<GroundRect> {
    #[inline]
    fn grounds(&self) -> &[GroundRect] {
        self
    }
}

/// Circle vs axis-aligned rectangle, inclusive on the boundary.
#[inline]
pub fn circle_hits_rect(center: Vec2, radius: f32, rect: Rect) -> bool {
    let closest = center.clamp(rect.min, rect.max);
    closest.distance_squared(center) <= radius * radius
}
