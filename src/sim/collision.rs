//! Collision detection and the crash response
//!
//! Everything is axis-aligned: the player is a box and each pipe is a
//! column with a vertical opening.

use super::score::reconcile;
use super::state::{GameEvent, GamePhase, GameState, Pipe, Player};

/// Horizontal spans of player and pipe overlap (open intervals)
#[inline]
pub fn overlaps_horizontally(player: &Player, pipe: &Pipe, pipe_width: f32) -> bool {
    player.right() > pipe.x && player.pos.x < pipe.x + pipe_width
}

/// Player pokes out of the pipe's gap
#[inline]
pub fn outside_gap(player: &Player, pipe: &Pipe) -> bool {
    player.pos.y < pipe.top_height || player.bottom() > pipe.bottom_y()
}

/// Player box hits the solid part of a pipe
pub fn hits_pipe(player: &Player, pipe: &Pipe, pipe_width: f32) -> bool {
    overlaps_horizontally(player, pipe, pipe_width) && outside_gap(player, pipe)
}

/// Check the player against every pipe; crash on the first hit.
/// No-op outside `Playing`.
pub fn check_collisions(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let width = state.tuning.pipe_width;
    if state.pipes.iter().any(|pipe| hits_pipe(&state.player, pipe, width)) {
        crash(state);
    }
}

/// Explode at the player's center and end the run
pub fn crash(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    let center = state.player.center();
    state.particles.spawn_explosion(center, &mut state.rng);
    game_over(state);
}

/// Enter `GameOver` and settle the high score. Repeated calls are no-ops.
pub fn game_over(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.phase = GamePhase::GameOver;
    let score = state.score;
    log::info!("Game over: score {} (best {})", score, state.high_score);
    state.push_event(GameEvent::Crashed { score });
    reconcile(state, score);
}
