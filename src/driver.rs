//! Frame driver
//!
//! Owns the game state, a store and a renderer. The host calls
//! [`FrameDriver::frame`] once per display refresh (requestAnimationFrame on
//! web); tests call [`FrameDriver::run_frames`] instead. Presses that arrive
//! between frames are counted and applied in order at the start of the next
//! tick, so none can land mid-tick and none are merged. A paused host simply stops calling `frame`;
//! missed ticks are not caught up.

use crate::highscores;
use crate::persistence::KeyValueStore;
use crate::renderer::Renderer;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, activate, tick};
use crate::tuning::Tuning;

pub struct FrameDriver<S: KeyValueStore, R: Renderer> {
    state: GameState,
    store: S,
    renderer: R,
    /// Presses since the last frame
    presses: u32,
    last_phase: GamePhase,
}

impl<S: KeyValueStore, R: Renderer> FrameDriver<S, R> {
    /// Build a driver, seeding the high score from `store`
    pub fn new(seed: u64, tuning: Tuning, store: S, renderer: R) -> Self {
        let high_score = highscores::load(&store);
        let state = GameState::new(seed, tuning).with_high_score(high_score);
        let last_phase = state.phase;
        Self {
            state,
            store,
            renderer,
            presses: 0,
            last_phase,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Host reports the canvas size
    pub fn set_playfield(&mut self, width: f32, height: f32) {
        self.state.field.width = width;
        self.state.field.height = height;
    }

    /// Queue one press of the game button for the next tick
    pub fn activate(&mut self) {
        self.presses = self.presses.saturating_add(1);
    }

    /// One tick, then one render. Returns the tick's events so the host can
    /// refresh its HUD.
    pub fn frame(&mut self) -> Vec<GameEvent> {
        let presses = std::mem::take(&mut self.presses);
        // Each press is its own transition; the last one goes in with the tick
        for _ in 1..presses {
            activate(&mut self.state);
        }
        let input = TickInput {
            activate: presses > 0,
        };
        tick(&mut self.state, &input);

        let events = self.state.drain_events();
        self.persist_high_score(&events);

        if self.state.phase != self.last_phase {
            log::debug!("Phase {:?} -> {:?}", self.last_phase, self.state.phase);
            self.last_phase = self.state.phase;
        }

        self.renderer.render(&self.state);
        events
    }

    /// Deterministic stepping for tests and headless runs
    pub fn run_frames(&mut self, frames: u64) {
        for _ in 0..frames {
            let _ = self.frame();
        }
    }

    /// Persist the latest new best. Save failures are logged; the in-memory
    /// high score stands either way.
    fn persist_high_score(&mut self, events: &[GameEvent]) {
        let best = events
            .iter()
            .filter_map(|event| match *event {
                GameEvent::NewHighScore { score } => Some(score),
                _ => None,
            })
            .max();

        if let Some(score) = best {
            if let Err(e) = highscores::save(&mut self.store, score) {
                log::warn!("Failed to save high score: {}", e);
            }
        }
    }
}
