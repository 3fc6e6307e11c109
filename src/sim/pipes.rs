//! Pipe spawning, scrolling, scoring and culling

use rand::Rng;

use super::score::award_pipe;
use super::state::{GamePhase, GameState, Pipe};

/// Draw a gap top uniformly from `[min, field_height - gap - min)`.
/// A field too short for that range pins the gap to `min`.
pub fn random_top_height(field_height: f32, gap: f32, min: f32, rng: &mut impl Rng) -> f32 {
    let max = field_height - gap - min;
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}

/// Append a fresh pipe at the right edge of the field
pub fn spawn_pipe(state: &mut GameState) {
    let top = random_top_height(
        state.field.height,
        state.tuning.pipe_gap,
        state.tuning.pipe_min_height,
        &mut state.rng,
    );
    let pipe = Pipe::new(state.field.width, top, state.tuning.pipe_gap);
    log::debug!("Pipe spawned: gap [{:.0}, {:.0}]", pipe.top_height, pipe.bottom_y());
    state.pipes.push(pipe);
}

/// Advance the tick counter, spawn on interval, scroll, score and cull.
/// No-op outside `Playing`.
pub fn update_pipes(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.frame_count += 1;
    if state.frame_count % state.tuning.pipe_spawn_interval == 0 {
        spawn_pipe(state);
    }

    let speed = state.tuning.pipe_speed;
    let width = state.tuning.pipe_width;
    let player_left = state.player.pos.x;

    for index in 0..state.pipes.len() {
        let pipe = &mut state.pipes[index];
        pipe.x -= speed;
        if !pipe.scored && pipe.x + width < player_left {
            award_pipe(state, index);
        }
    }

    state.pipes.retain(|pipe| pipe.x + width >= 0.0);
}
