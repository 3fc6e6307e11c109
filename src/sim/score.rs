//! Scoring and the in-memory high score
//!
//! Storage lives outside the simulation: a new best is announced with
//! [`GameEvent::NewHighScore`] and the host persists it.

use super::state::{GameEvent, GameState};

/// Count a cleared pipe: bump the score, settle the high score, sparkle
/// in the middle of the gap.
pub fn award_pipe(state: &mut GameState, index: usize) {
    let Some(pipe) = state.pipes.get_mut(index) else {
        return;
    };
    if pipe.scored {
        return;
    }
    pipe.scored = true;
    let center = pipe.gap_center(state.tuning.pipe_width);

    state.score += 1;
    let score = state.score;
    state.push_event(GameEvent::PipePassed { score });
    reconcile(state, score);
    state.particles.spawn_sparkles(center, &mut state.rng);
}

/// Raise the high score if `score` beats it.
///
/// Confetti fires at most once per session, and only when a previous best
/// existed (a first-ever score is not a "new record" worth celebrating).
pub fn reconcile(state: &mut GameState, score: u32) {
    if score <= state.high_score {
        return;
    }

    if !state.celebrated && state.high_score > 0 {
        log::info!("New record! {} beats {}", score, state.high_score);
        let width = state.field.width;
        state.particles.spawn_confetti(width, &mut state.rng);
        state.celebrated = true;
        state.push_event(GameEvent::Celebration);
    }

    state.high_score = score;
    state.push_event(GameEvent::NewHighScore { score });
}
