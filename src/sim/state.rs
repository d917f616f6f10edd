//! Game state and core simulation types
//!
//! Everything the simulation needs to advance lives here; a state plus an
//! input script replays a session exactly.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::config::{ConfigError, GameConfig};
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Active gameplay
    Playing,
    /// Target reached; terminal until an explicit reset
    Won,
}

/// What falls from the sky
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Grape,
    Stone,
}

/// A falling object, treated as a point for catch detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingObject {
    pub id: u32,
    pub kind: ObjectKind,
    pub pos: Vec2,
}

impl FallingObject {
    /// New object at the spawn line above the field
    pub fn new(id: u32, kind: ObjectKind, x: f32) -> Self {
        Self {
            id,
            kind,
            pos: Vec2::new(x, SPAWN_Y),
        }
    }
}

/// Notification emitted by a tick, for the shell to surface
///
/// Events are informational only; dropping them never affects the
/// simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A grape landed in the basket
    GrapeCaught { caught: u32, target: u32 },
    /// A stone landed in the basket; `punished` says whether it cost a grape
    StoneHit { punished: bool },
}

/// Complete session state (deterministic)
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Immutable tunables this session runs with
    pub config: GameConfig,
    /// Session seed for reproducibility
    pub seed: u64,
    /// Basket center x, clamped to the field
    pub basket_x: f32,
    /// Live objects in spawn order (ids strictly increasing)
    pub objects: Vec<FallingObject>,
    /// Grapes currently held
    pub grapes_caught: u32,
    /// Grape spawns so far (stone spawns do not count)
    pub grapes_spawned: u32,
    /// Derived score, kept in sync each tick
    pub score: u32,
    /// Session phase
    pub status: GameStatus,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Tick of the most recent spawn; None until the first one fires
    pub last_spawn_tick: Option<u64>,
    /// Spawn position RNG
    pub rng: Pcg32,
    /// Next object ID
    next_id: u32,
}

impl GameState {
    /// Create a new session, refusing configs the simulation cannot run with
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config, seed))
    }

    fn from_valid_config(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            basket_x: GAME_WIDTH / 2.0,
            objects: Vec::new(),
            grapes_caught: 0,
            grapes_spawned: 0,
            score: 0,
            status: GameStatus::Playing,
            time_ticks: 0,
            last_spawn_tick: None,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Reinitialize every field for a fresh session with the same config
    ///
    /// Resetting twice with the same seed is the same as resetting once.
    pub fn reset(&mut self, seed: u64) {
        *self = Self::from_valid_config(self.config, seed);
    }

    /// Allocate a new object ID (never reused within a session)
    pub fn next_object_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Ticks since the last spawn, or None if nothing has spawned yet
    pub fn ticks_since_spawn(&self) -> Option<u64> {
        self.last_spawn_tick.map(|t| self.time_ticks - t)
    }

    /// Grapes still needed to win
    pub fn remaining(&self) -> u32 {
        self.config.grapes_to_win.saturating_sub(self.grapes_caught)
    }

    /// Collection progress in [0, 1]
    pub fn progress(&self) -> f32 {
        (self.grapes_caught as f32 / self.config.grapes_to_win as f32).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_centered_and_empty() {
        let state = GameState::new(GameConfig::default(), 42).unwrap();
        assert_eq!(state.basket_x, GAME_WIDTH / 2.0);
        assert!(state.objects.is_empty());
        assert_eq!(state.grapes_caught, 0);
        assert_eq!(state.grapes_spawned, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.last_spawn_tick, None);
    }

    #[test]
    fn test_new_refuses_bad_config() {
        let config = GameConfig {
            grapes_to_win: 0,
            ..Default::default()
        };
        assert!(GameState::new(config, 42).is_err());
    }

    #[test]
    fn test_object_ids_monotonic() {
        let mut state = GameState::new(GameConfig::default(), 42).unwrap();
        let a = state.next_object_id();
        let b = state.next_object_id();
        let c = state.next_object_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_reset_restores_start_values() {
        let mut state = GameState::new(GameConfig::default(), 42).unwrap();
        state.basket_x = 100.0;
        state.grapes_caught = 7;
        state.grapes_spawned = 9;
        state.score = 70;
        state.status = GameStatus::Won;
        state.time_ticks = 500;
        state.last_spawn_tick = Some(480);
        let id = state.next_object_id();
        state.objects.push(FallingObject::new(id, ObjectKind::Grape, 400.0));

        state.reset(42);
        assert_eq!(state, GameState::new(GameConfig::default(), 42).unwrap());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut once = GameState::new(GameConfig::default(), 1).unwrap();
        once.grapes_caught = 3;
        once.reset(99);

        let mut twice = GameState::new(GameConfig::default(), 1).unwrap();
        twice.grapes_caught = 3;
        twice.reset(99);
        twice.reset(99);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_remaining_and_progress() {
        let config = GameConfig {
            grapes_to_win: 10,
            ..Default::default()
        };
        let mut state = GameState::new(config, 42).unwrap();
        assert_eq!(state.remaining(), 10);
        assert_eq!(state.progress(), 0.0);

        state.grapes_caught = 4;
        assert_eq!(state.remaining(), 6);
        assert!((state.progress() - 0.4).abs() < 1e-6);

        // Overshoot in the winning tick never pushes progress past 1
        state.grapes_caught = 12;
        assert_eq!(state.remaining(), 0);
        assert_eq!(state.progress(), 1.0);
    }
}
