//! Player physics
//!
//! Semi-implicit Euler: velocity first, then position. The horizontal
//! position never changes; the world scrolls instead.

use super::collision::crash;
use super::state::{GamePhase, GameState};

/// Apply gravity, emit the trail and check the field boundaries.
/// No-op outside `Playing`.
pub fn update_player(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let player = &mut state.player;
    player.velocity += state.tuning.gravity;
    player.pos.y += player.velocity;

    if state.frame_count % state.tuning.trail_interval == 0 {
        let center = state.player.center();
        state.particles.spawn_trail(center);
    }

    if out_of_bounds(state) {
        crash(state);
    }
}

/// Player touched the top edge or sank below the bottom edge
pub fn out_of_bounds(state: &GameState) -> bool {
    state.player.bottom() > state.field.height || state.player.pos.y < 0.0
}

/// Jump impulse: velocity is replaced, not added to
pub fn jump(state: &mut GameState) {
    state.player.velocity = state.tuning.jump_power;
}
