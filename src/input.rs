//! Keyboard state tracking
//!
//! The shell feeds raw `KeyboardEvent.key` strings in as they arrive and
//! the sim samples one boolean left/right pair per tick. Held keys live
//! in a set, so OS key autorepeat and the two bindings per direction
//! collapse without special casing.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Key strings that steer left
pub const LEFT_KEYS: [&str; 2] = ["ArrowLeft", "a"];
/// Key strings that steer right
pub const RIGHT_KEYS: [&str; 2] = ["ArrowRight", "d"];

/// Canonical binding for a raw key string, if it steers the basket
///
/// Matches are exact, so a shifted "A" does not steer.
fn game_key(key: &str) -> Option<&'static str> {
    LEFT_KEYS
        .iter()
        .chain(RIGHT_KEYS.iter())
        .find(|&&k| k == key)
        .copied()
}

/// The set of steering keys currently held down
#[derive(Debug, Default)]
pub struct HeldKeys {
    pressed: HashSet<&'static str>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a keydown
    ///
    /// Returns true when the key steers the basket so the shell knows to
    /// swallow the browser default (page scroll on arrows).
    pub fn press(&mut self, key: &str) -> bool {
        match game_key(key) {
            Some(k) => {
                self.pressed.insert(k);
                true
            }
            None => false,
        }
    }

    /// Record a keyup
    pub fn release(&mut self, key: &str) {
        if let Some(k) = game_key(key) {
            self.pressed.remove(k);
        }
    }

    /// Drop everything held; called on focus loss so no key sticks
    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    /// Sample the held set into one tick's steering input
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: LEFT_KEYS.iter().any(|k| self.pressed.contains(k)),
            right: RIGHT_KEYS.iter().any(|k| self.pressed.contains(k)),
        }
    }
}
