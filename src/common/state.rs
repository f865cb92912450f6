//! Global state machine.
//!
//! The game has a single playable state for now; every gameplay system is
//! gated on it so headless tests can opt in by entering `InGame`.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}
