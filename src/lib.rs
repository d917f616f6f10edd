//! Grape Drop - a falling-fruit catching arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, falling motion, catch detection)
//! - `input`: Held-key tracking that feeds the simulation's per-tick input
//! - `renderer`: WebGPU rendering pipeline

pub mod input;
pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz; object speeds are tuned in px per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play field dimensions (y grows downward, origin at top-left)
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 600.0;

    /// Basket defaults - the basket slides along the bottom of the field
    pub const BASKET_WIDTH: f32 = 64.0;
    /// Vertical extent of the catch band above the bottom edge
    pub const CATCH_BAND_HEIGHT: f32 = 50.0;

    /// Objects enter above the visible field
    pub const SPAWN_Y: f32 = -20.0;
    /// Horizontal margin kept clear of the field edges when picking spawn x
    pub const SPAWN_MARGIN: f32 = 25.0;
    /// Objects this far below the bottom edge are dropped as missed
    pub const DESPAWN_MARGIN: f32 = 50.0;

    /// Ticks between spawns (2 seconds at 60 Hz)
    pub const SPAWN_INTERVAL_TICKS: u64 = 2 * 60;

    /// Score awarded per grape held
    pub const SCORE_PER_GRAPE: u32 = 10;
}

/// Leftmost legal basket center x
#[inline]
pub fn basket_min_x() -> f32 {
    consts::BASKET_WIDTH / 2.0
}

/// Rightmost legal basket center x
#[inline]
pub fn basket_max_x() -> f32 {
    consts::GAME_WIDTH - consts::BASKET_WIDTH / 2.0
}
