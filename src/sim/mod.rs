//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (objects in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod config;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{classify, CatchZone, ObjectFate};
pub use config::{ConfigError, GameConfig};
pub use spawn::{maybe_spawn, spawn_kind, SpawnRequest};
pub use state::{FallingObject, GameEvent, GameState, GameStatus, ObjectKind};
pub use tick::{steer_basket, tick, TickInput};
