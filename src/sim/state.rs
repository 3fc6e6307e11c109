//! Game state and core simulation types
//!
//! `GameState` is the single session aggregate; every component update takes
//! it by `&mut` and nothing else holds simulation state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::particles::ParticleSystem;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title overlay, waiting for the first activate
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// Run ended; the final frame stays visible under the overlay
    GameOver,
}

/// Visible play area (canvas size), supplied by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

/// The player sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (units/tick, positive = down)
    pub velocity: f32,
}

impl Player {
    pub fn new(start: Vec2, size: Vec2) -> Self {
        Self {
            pos: start,
            size,
            velocity: 0.0,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Visual tilt in radians: nose up when rising, nose down when falling.
    /// Derived from velocity, never stored.
    pub fn rotation(&self) -> f32 {
        (self.velocity * 3.0).clamp(-30.0, 90.0).to_radians()
    }
}

/// A pipe pair with a passable gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    /// Bottom edge of the top segment
    pub top_height: f32,
    gap: f32,
    /// Already counted toward the score
    pub scored: bool,
}

impl Pipe {
    pub fn new(x: f32, top_height: f32, gap: f32) -> Self {
        Self {
            x,
            top_height,
            gap,
            scored: false,
        }
    }

    /// Top edge of the bottom segment
    #[inline]
    pub fn bottom_y(&self) -> f32 {
        self.top_height + self.gap
    }

    #[inline]
    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Center of the gap, for sparkles and the autopilot
    pub fn gap_center(&self, width: f32) -> Vec2 {
        Vec2::new(self.x + width / 2.0, self.top_height + self.gap / 2.0)
    }
}

/// Something the host may want to react to (sound, storage, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh session began (score back to 0)
    SessionStarted,
    /// A pipe was cleared; `score` is the new total
    PipePassed { score: u32 },
    /// The run ended
    Crashed { score: u32 },
    /// `score` beat the previous best and should be persisted
    NewHighScore { score: u32 },
    /// Confetti fired for this session
    Celebration,
}

/// Complete game state for one process
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub tuning: Tuning,
    pub field: Playfield,
    pub player: Player,
    /// Oldest first
    pub pipes: Vec<Pipe>,
    /// Visual particles (not gameplay-affecting)
    pub particles: ParticleSystem,
    /// Current run
    pub score: u32,
    /// Best score seen by this process (seeded from storage)
    pub high_score: u32,
    /// Confetti already fired this session
    pub celebrated: bool,
    /// Ticks since the session started
    pub frame_count: u64,
    pub rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let player = Player::new(tuning.player_start, tuning.player_size);
        Self {
            phase: GamePhase::Start,
            tuning,
            field: Playfield::default(),
            player,
            pipes: Vec::new(),
            particles: ParticleSystem::new(),
            score: 0,
            high_score: 0,
            celebrated: false,
            frame_count: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    pub fn with_high_score(mut self, high_score: u32) -> Self {
        self.high_score = high_score;
        self
    }

    pub fn with_field(mut self, width: f32, height: f32) -> Self {
        self.field = Playfield { width, height };
        self
    }

    /// Reset everything scoped to a session. Particles are left to finish
    /// on their own.
    pub fn reset_session(&mut self) {
        self.player = Player::new(self.tuning.player_start, self.tuning.player_size);
        self.pipes.clear();
        self.score = 0;
        self.frame_count = 0;
        self.celebrated = false;
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
