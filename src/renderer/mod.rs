//! Rendering seam
//!
//! The simulation never draws. A [`Renderer`] receives the whole state once
//! per tick. Layout that doesn't need a canvas (pipe rectangles, overlay
//! text, HUD string) is computed here so it can be tested natively.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::palette::{self, Color};
use crate::sim::{GamePhase, GameState, Pipe};

/// Pipe cap height
pub const CAP_HEIGHT: f32 = 20.0;
/// Cap overhang on each side of the pipe
pub const CAP_OVERHANG: f32 = 5.0;
/// Overlay scrim opacity
pub const SCRIM_ALPHA: f32 = 0.7;

/// Draws one frame of game state
pub trait Renderer {
    fn render(&mut self, state: &GameState);
}

/// Renderer that draws nothing (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _state: &GameState) {}
}

/// Filled axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: Color,
}

/// Body and cap rectangles for one pipe, in draw order
pub fn pipe_rects(pipe: &Pipe, width: f32, field_height: f32) -> [Rect; 4] {
    let cap_w = width + CAP_OVERHANG * 2.0;
    let cap_x = pipe.x - CAP_OVERHANG;
    [
        Rect {
            x: pipe.x,
            y: 0.0,
            w: width,
            h: pipe.top_height,
            color: palette::PURPLE_500,
        },
        Rect {
            x: pipe.x,
            y: pipe.bottom_y(),
            w: width,
            h: field_height - pipe.bottom_y(),
            color: palette::PURPLE_500,
        },
        Rect {
            x: cap_x,
            y: pipe.top_height - CAP_HEIGHT,
            w: cap_w,
            h: CAP_HEIGHT,
            color: palette::PURPLE_400,
        },
        Rect {
            x: cap_x,
            y: pipe.bottom_y(),
            w: cap_w,
            h: CAP_HEIGHT,
            color: palette::PURPLE_400,
        },
    ]
}

/// One centered line of overlay text
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// CSS font shorthand
    pub font: &'static str,
    pub color: Color,
    /// Baseline offset from the vertical center of the field
    pub dy: f32,
}

impl TextLine {
    fn new(text: impl Into<String>, font: &'static str, color: Color, dy: f32) -> Self {
        Self {
            text: text.into(),
            font,
            color,
            dy,
        }
    }
}

/// Overlay text for the current phase (empty while playing)
pub fn overlay_lines(state: &GameState) -> Vec<TextLine> {
    match state.phase {
        GamePhase::Playing => Vec::new(),
        GamePhase::Start => vec![
            TextLine::new("Flappy Kiro", "bold 48px sans-serif", palette::WHITE, -50.0),
            TextLine::new(
                "Press SPACE or click to start!",
                "24px sans-serif",
                palette::GREY_300,
                20.0,
            ),
        ],
        GamePhase::GameOver => vec![
            TextLine::new("Game Over!", "bold 48px sans-serif", palette::PURPLE_500, -70.0),
            TextLine::new(
                format!("Score: {}", state.score),
                "32px sans-serif",
                palette::WHITE,
                -10.0,
            ),
            TextLine::new(
                format!("High Score: {}", state.high_score),
                "28px sans-serif",
                palette::PURPLE_400,
                30.0,
            ),
            TextLine::new(
                "Press SPACE or click to restart",
                "20px sans-serif",
                palette::GREY_300,
                70.0,
            ),
        ],
    }
}

/// Whether the world (particles, pipes, player) is drawn this phase
pub fn shows_world(phase: GamePhase) -> bool {
    matches!(phase, GamePhase::Playing | GamePhase::GameOver)
}

/// Score line shown above the canvas
pub fn hud_text(score: u32, high_score: u32) -> String {
    format!("Score: {} | High Score: {}", score, high_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_pipe_rects() {
        let pipe = Pipe::new(200.0, 100.0, 180.0);
        let [top, bottom, top_cap, bottom_cap] = pipe_rects(&pipe, 60.0, 600.0);
        assert_eq!((top.y, top.h), (0.0, 100.0));
        assert_eq!((bottom.y, bottom.h), (280.0, 320.0));
        assert_eq!((top_cap.x, top_cap.y, top_cap.w), (195.0, 80.0, 70.0));
        assert_eq!(bottom_cap.y, 280.0);
        assert_eq!(top.color, palette::PURPLE_500);
        assert_eq!(top_cap.color, palette::PURPLE_400);
    }

    #[test]
    fn test_overlay_per_phase() {
        let mut state = GameState::new(1, Tuning::default()).with_high_score(12);
        assert_eq!(overlay_lines(&state)[0].text, "Flappy Kiro");
        assert!(!shows_world(state.phase));

        state.phase = GamePhase::Playing;
        assert!(overlay_lines(&state).is_empty());
        assert!(shows_world(state.phase));

        state.phase = GamePhase::GameOver;
        state.score = 4;
        let texts: Vec<String> = overlay_lines(&state).into_iter().map(|l| l.text).collect();
        assert!(texts.contains(&"Score: 4".to_string()));
        assert!(texts.contains(&"High Score: 12".to_string()));
    }

    #[test]
    fn test_hud_text() {
        assert_eq!(hud_text(3, 10), "Score: 3 | High Score: 10");
    }
}
