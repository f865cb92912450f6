//! Collision layers.
//!
//! Bullets never enter the physics world; these layers only separate the
//! shooter body from static ground colliders.

use avian2d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    Ground,
    Shooter,
}
