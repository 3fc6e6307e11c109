//! Per-tick simulation step and input handling
//!
//! One tick per rendered frame, no fixed-timestep decoupling. Order within a
//! tick: input, player, pipes, particles, collisions.

use super::collision::check_collisions;
use super::pipes::update_pipes;
use super::player::{jump, update_player};
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Tap / click / space
    pub activate: bool,
}

/// Handle the single game button.
///
/// - `Start`: new session, enter `Playing`
/// - `Playing`: jump
/// - `GameOver`: back to `Start`; the last run stays on screen until the
///   next activate resets it
pub fn activate(state: &mut GameState) {
    match state.phase {
        GamePhase::Start => {
            state.reset_session();
            state.phase = GamePhase::Playing;
            state.push_event(GameEvent::SessionStarted);
            log::info!("Session started (best {})", state.high_score);
        }
        GamePhase::Playing => jump(state),
        GamePhase::GameOver => {
            state.phase = GamePhase::Start;
            log::info!("Back to title");
        }
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.activate {
        activate(state);
    }

    update_player(state);
    update_pipes(state);
    // Particles keep animating in every phase
    let (field_height, gravity) = (state.field.height, state.tuning.gravity);
    state.particles.tick(field_height, gravity);
    check_collisions(state);
}

/// Demo AI for headless runs: jump when below the next gap's center.
/// Only looks at pipes the player hasn't cleared yet.
pub fn autopilot(state: &GameState) -> bool {
    match state.phase {
        GamePhase::Start => true,
        GamePhase::GameOver => false,
        GamePhase::Playing => {
            let width = state.tuning.pipe_width;
            let target_y = state
                .pipes
                .iter()
                .find(|pipe| pipe.x + width > state.player.pos.x)
                .map(|pipe| pipe.gap_center(width).y)
                .unwrap_or(state.field.height / 2.0);
            // Re-jump while still rising slowly so steep climbs are possible
            state.player.center().y > target_y && state.player.velocity > -1.5
        }
    }
}
