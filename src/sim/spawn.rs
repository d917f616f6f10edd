//! Spawn cadence and kind selection
//!
//! One object may spawn per interval. Which kind is purely a function of
//! how many grapes have spawned so far; only the x position draws from the
//! RNG, so a seed fixes the whole spawn sequence.

use rand::Rng;

use super::config::GameConfig;
use super::state::ObjectKind;
use crate::consts::*;

/// A spawn the tick layer should turn into a live object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub kind: ObjectKind,
    pub x: f32,
}

/// Decide whether a spawn fires this tick, and what it is
///
/// `ticks_since_spawn` of None means nothing has spawned this session; that
/// counts as overdue, so the first object appears on the first eligible tick.
/// Past the hard cap of twice the win target nothing spawns at all, stones
/// included.
pub fn maybe_spawn(
    ticks_since_spawn: Option<u64>,
    grapes_spawned: u32,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> Option<SpawnRequest> {
    if let Some(elapsed) = ticks_since_spawn {
        if elapsed <= SPAWN_INTERVAL_TICKS {
            return None;
        }
    }
    if grapes_spawned >= config.grapes_to_win.saturating_mul(2) {
        return None;
    }

    let kind = spawn_kind(grapes_spawned, config.stone_frequency);
    let x = rng.random_range(SPAWN_MARGIN..GAME_WIDTH - SPAWN_MARGIN);
    Some(SpawnRequest { kind, x })
}

/// Kind for the next spawn slot given the grape-spawn count
///
/// Every `stone_frequency`-th grape slot yields a stone instead. Stones do
/// not advance the count, so a count parked on a multiple keeps yielding
/// stones until something moves it.
pub fn spawn_kind(grapes_spawned: u32, stone_frequency: u32) -> ObjectKind {
    if grapes_spawned > 0 && grapes_spawned % stone_frequency == 0 {
        ObjectKind::Stone
    } else {
        ObjectKind::Grape
    }
}
