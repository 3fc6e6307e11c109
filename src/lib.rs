//! Flappy Kiro - A one-button arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, particles, collisions, game state)
//! - `driver`: Frame driver that steps the simulation and hands frames to a renderer
//! - `renderer`: Rendering seam plus the Canvas2D backend (web only)
//! - `persistence`: Key/value storage backends (LocalStorage on web)
//! - `highscores`: Best-score record on top of persistence
//! - `tuning`: Data-driven game balance

pub mod driver;
pub mod highscores;
pub mod persistence;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use driver::FrameDriver;
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.15;
    /// Velocity set on jump (negative = up)
    pub const JUMP_POWER: f32 = -3.0;

    /// Pipe scroll speed (units/tick)
    pub const PIPE_SPEED: f32 = 1.5;
    /// Ticks between pipe spawns
    pub const PIPE_SPAWN_INTERVAL: u64 = 180;
    /// Vertical opening between top and bottom pipe
    pub const PIPE_GAP: f32 = 180.0;
    pub const PIPE_WIDTH: f32 = 60.0;
    /// Smallest visible pipe segment above/below the gap
    pub const PIPE_MIN_HEIGHT: f32 = 50.0;

    /// Player spawn pose and size
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 300.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;

    /// Emit one trail particle every N ticks
    pub const TRAIL_INTERVAL: u64 = 3;

    /// Default playfield (canvas) size
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
}

/// Brand colors
pub mod palette {
    use serde::{Deserialize, Serialize};

    /// 8-bit RGB color
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Color {
        pub r: u8,
        pub g: u8,
        pub b: u8,
    }

    impl Color {
        pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
            Self { r, g, b }
        }

        /// CSS hex string (`#rrggbb`)
        pub fn css(&self) -> String {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
    }

    pub const PURPLE_500: Color = Color::rgb(0x79, 0x0E, 0xCB);
    pub const PURPLE_400: Color = Color::rgb(0x9B, 0x3F, 0xE8);
    pub const BLACK_900: Color = Color::rgb(0x0A, 0x0A, 0x0A);
    pub const NIGHT_SKY: Color = Color::rgb(0x1A, 0x1A, 0x2E);
    pub const GREY_300: Color = Color::rgb(0xB0, 0xB0, 0xB0);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const GOLD: Color = Color::rgb(0xFF, 0xD7, 0x00);
    pub const ORANGE: Color = Color::rgb(0xFF, 0xA5, 0x00);
    pub const CYAN: Color = Color::rgb(0x00, 0xCE, 0xD1);
    pub const PINK: Color = Color::rgb(0xFF, 0x69, 0xB4);

    /// Confetti picks uniformly from these
    pub const CONFETTI: [Color; 7] = [PURPLE_500, PURPLE_400, WHITE, GOLD, ORANGE, CYAN, PINK];
}

/// Clamp a value to the [0, 1] opacity range
#[inline]
pub fn clamp_alpha(alpha: f32) -> f32 {
    alpha.clamp(0.0, 1.0)
}
