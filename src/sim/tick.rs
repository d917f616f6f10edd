//! Fixed timestep session update
//!
//! One call to [`tick`] advances the session by a single 60 Hz step:
//! steer the basket, advance every falling object, resolve catches and
//! misses, rescore, check for the win, then consult the spawner. The
//! shell drives it from a time accumulator, so a session fed the same
//! seed and input sequence replays identically at any frame rate.

use crate::consts::*;
use crate::{basket_max_x, basket_min_x};

use super::collision::{classify, CatchZone, ObjectFate};
use super::spawn::maybe_spawn;
use super::state::{FallingObject, GameEvent, GameState, GameStatus, ObjectKind};

/// Player steering sampled for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// Move the basket one step and clamp it to the playfield
///
/// Both directions read the pre-tick position. With both held, the
/// right move is applied last and wins, so the basket steps right by
/// one full `basket_speed` per tick instead of standing still.
pub fn steer_basket(basket_x: f32, input: &TickInput, basket_speed: f32) -> f32 {
    let mut new_x = basket_x;
    if input.left {
        new_x = (basket_x - basket_speed).max(basket_min_x());
    }
    if input.right {
        new_x = (basket_x + basket_speed).min(basket_max_x());
    }
    new_x
}

/// Advance the session by exactly one tick
///
/// Returns the events raised during this tick, in the order they were
/// resolved. A session that has already been won does not advance at
/// all; call [`GameState::reset`] to start over.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    if state.status == GameStatus::Won {
        return Vec::new();
    }

    state.time_ticks += 1;
    state.basket_x = steer_basket(state.basket_x, input, state.config.basket_speed);

    // Catches are judged against the basket's post-move position.
    let zone = CatchZone::for_basket(state.basket_x);
    let mut events = Vec::new();
    let mut kept = Vec::with_capacity(state.objects.len() + 1);

    for mut obj in std::mem::take(&mut state.objects) {
        obj.pos.y += state.config.fall_speed(obj.kind);
        match classify(obj.pos, &zone) {
            ObjectFate::Caught => match obj.kind {
                ObjectKind::Grape => {
                    state.grapes_caught += 1;
                    events.push(GameEvent::GrapeCaught {
                        caught: state.grapes_caught,
                        target: state.config.grapes_to_win,
                    });
                }
                ObjectKind::Stone => {
                    // Stones are consumed on contact whether or not the
                    // penalty is active.
                    let punished = state.config.penalty_on_stone;
                    if punished {
                        state.grapes_caught = state.grapes_caught.saturating_sub(1);
                    }
                    events.push(GameEvent::StoneHit { punished });
                }
            },
            ObjectFate::Falling => kept.push(obj),
            ObjectFate::Missed => {}
        }
    }
    state.objects = kept;
    state.score = state.grapes_caught * SCORE_PER_GRAPE;

    if state.grapes_caught >= state.config.grapes_to_win {
        state.status = GameStatus::Won;
    }

    // The spawner is still consulted on a winning tick; the fresh object
    // just sits in the final state since a Won session never advances.
    if let Some(req) = maybe_spawn(
        state.ticks_since_spawn(),
        state.grapes_spawned,
        &state.config,
        &mut state.rng,
    ) {
        let id = state.next_object_id();
        if req.kind == ObjectKind::Grape {
            state.grapes_spawned += 1;
        }
        state.objects.push(FallingObject::new(id, req.kind, req.x));
        state.last_spawn_tick = Some(state.time_ticks);
    }

    events
}
