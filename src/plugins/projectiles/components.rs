use bevy::prelude::*;

/// Marker for the entity that owns a bullet stream and follows the cursor.
#[derive(Component)]
pub struct Shooter;

/// Spawn cadence while the trigger is held.
#[derive(Component, Deref, DerefMut)]
pub struct FireTimer(pub Timer);

impl FireTimer {
    pub fn from_interval(seconds: f32) -> Self {
        Self(Timer::from_seconds(seconds.max(f32::EPSILON), TimerMode::Repeating))
    }
}

/// Static obstacle that stops bullets. Centred on its `Transform`.
#[derive(Component, Debug, Clone, Copy)]
pub struct Ground {
    pub size: Vec2,
}

/// How many bullets a ground has absorbed.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GroundHits(pub u32);

/// Cursor position in world space, if the cursor is inside the window.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct Aim {
    pub world_cursor: Option<Vec2>,
}

#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct ShooterEntity(pub Option<Entity>);

#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct MainCameraEntity(pub Option<Entity>);
