//! Canvas2D renderer (wasm32 only)

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{Renderer, SCRIM_ALPHA, overlay_lines, pipe_rects, shows_world};
use crate::palette;
use crate::sim::{GameState, ParticleKind};

/// Player sprite, relative to the page
pub const PLAYER_SPRITE: &str = "kiro-logo.png";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    sprite: HtmlImageElement,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let sprite = HtmlImageElement::new()?;
        sprite.set_src(PLAYER_SPRITE);
        Ok(Self { ctx, sprite })
    }

    fn draw_background(&self, state: &GameState) {
        let h = state.field.height as f64;
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
        let _ = gradient.add_color_stop(0.0, &palette::NIGHT_SKY.css());
        let _ = gradient.add_color_stop(1.0, &palette::BLACK_900.css());
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, state.field.width as f64, h);
    }

    fn draw_particles(&self, state: &GameState) -> Result<(), JsValue> {
        for p in state.particles.renderable() {
            self.ctx.save();
            self.ctx.set_global_alpha(p.alpha(state.frame_count) as f64);
            self.ctx.set_fill_style_str(&p.color.css());

            let size = p.size as f64;
            match p.kind {
                ParticleKind::Confetti { rotation, .. } => {
                    self.ctx.translate(p.pos.x as f64, p.pos.y as f64)?;
                    self.ctx.rotate(rotation as f64)?;
                    self.ctx.fill_rect(-size / 2.0, -size, size, size * 2.0);
                }
                _ => {
                    self.ctx.begin_path();
                    self.ctx
                        .arc(p.pos.x as f64, p.pos.y as f64, size, 0.0, std::f64::consts::TAU)?;
                    self.ctx.fill();
                }
            }
            self.ctx.restore();
        }
        Ok(())
    }

    fn draw_pipes(&self, state: &GameState) {
        for pipe in &state.pipes {
            for rect in pipe_rects(pipe, state.tuning.pipe_width, state.field.height) {
                self.ctx.set_fill_style_str(&rect.color.css());
                self.ctx
                    .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
            }
        }
    }

    fn draw_player(&self, state: &GameState) -> Result<(), JsValue> {
        let player = &state.player;
        let center = player.center();
        let (w, h) = (player.size.x as f64, player.size.y as f64);

        self.ctx.save();
        self.ctx.translate(center.x as f64, center.y as f64)?;
        self.ctx.rotate(player.rotation() as f64)?;
        let drawn = if self.sprite.complete() {
            self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                &self.sprite,
                -w / 2.0,
                -h / 2.0,
                w,
                h,
            )
        } else {
            // Sprite still loading
            self.ctx.set_fill_style_str(&palette::PURPLE_500.css());
            self.ctx.fill_rect(-w / 2.0, -h / 2.0, w, h);
            Ok(())
        };
        self.ctx.restore();
        drawn
    }

    fn draw_overlay(&self, state: &GameState) -> Result<(), JsValue> {
        let lines = overlay_lines(state);
        if lines.is_empty() {
            return Ok(());
        }
        let (w, h) = (state.field.width as f64, state.field.height as f64);

        self.ctx.set_fill_style_str(&format!("rgba(0, 0, 0, {})", SCRIM_ALPHA));
        self.ctx.fill_rect(0.0, 0.0, w, h);

        self.ctx.set_text_align("center");
        for line in lines {
            self.ctx.set_font(line.font);
            self.ctx.set_fill_style_str(&line.color.css());
            self.ctx
                .fill_text(&line.text, w / 2.0, h / 2.0 + line.dy as f64)?;
        }
        Ok(())
    }

    fn draw(&self, state: &GameState) -> Result<(), JsValue> {
        self.draw_background(state);
        if shows_world(state.phase) {
            // Particles sit behind everything else
            self.draw_particles(state)?;
            self.draw_pipes(state);
            self.draw_player(state)?;
        }
        self.draw_overlay(state)
    }
}

impl Renderer for CanvasRenderer {
    fn render(&mut self, state: &GameState) {
        if let Err(e) = self.draw(state) {
            log::warn!("Render error: {:?}", e);
        }
    }
}
