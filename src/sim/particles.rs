//! Cosmetic particle effects
//!
//! One particle type with a kind tag. Spawning draws from an injected RNG so
//! bursts are reproducible under a fixed seed. Nothing here feeds back into
//! gameplay.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::clamp_alpha;
use crate::palette::{self, Color};

/// Lifetime of a trail dot (ticks)
pub const TRAIL_LIFE: f32 = 30.0;
/// Lifetime of a confetti piece (ticks)
pub const CONFETTI_LIFE: f32 = 200.0;
/// Confetti spawns this far above the top edge
pub const CONFETTI_SPAWN_Y: f32 = -20.0;

/// Particle behavior
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ParticleKind {
    /// Stationary fading dot behind the player
    Trail,
    /// Radial burst on crash
    Explosion,
    /// Twinkling dots when a pipe is cleared
    Sparkle,
    /// Falling, spinning rectangles on a new best score
    Confetti { rotation: f32, rotation_speed: f32 },
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 at spawn, counts down by `1 / max_life` per tick
    pub life: f32,
    /// Lifetime in ticks
    pub max_life: f32,
    pub size: f32,
    pub color: Color,
    pub kind: ParticleKind,
}

impl Particle {
    fn new(
        pos: Vec2,
        vel: Vec2,
        max_life: f32,
        size: f32,
        color: Color,
        kind: ParticleKind,
    ) -> Self {
        Self {
            pos,
            vel,
            life: 1.0,
            max_life,
            size,
            color,
            kind,
        }
    }

    /// Advance one tick. Confetti falls under the same gravity as the player.
    fn update(&mut self, gravity: f32) {
        if let ParticleKind::Confetti {
            rotation,
            rotation_speed,
        } = &mut self.kind
        {
            self.vel.y += gravity;
            *rotation += *rotation_speed;
        }
        self.pos += self.vel;
        self.life -= 1.0 / self.max_life;
    }

    /// Confetti leaves once it falls past the bottom edge
    fn is_dead(&self, field_height: f32) -> bool {
        let fell_out =
            matches!(self.kind, ParticleKind::Confetti { .. }) && self.pos.y > field_height;
        fell_out || self.life <= 0.0
    }

    /// Safe to draw: finite position and non-negative life.
    /// Bad particles are skipped for the frame, not removed.
    pub fn is_renderable(&self) -> bool {
        self.pos.is_finite() && self.life >= 0.0
    }

    /// Draw opacity for this frame
    pub fn alpha(&self, frame: u64) -> f32 {
        match self.kind {
            ParticleKind::Confetti { .. } => 1.0,
            ParticleKind::Sparkle => clamp_alpha(self.life * twinkle(frame, self.pos.x)),
            ParticleKind::Trail | ParticleKind::Explosion => clamp_alpha(self.life),
        }
    }

    /// Rotation for rectangular particles (confetti only)
    pub fn rotation(&self) -> Option<f32> {
        match self.kind {
            ParticleKind::Confetti { rotation, .. } => Some(rotation),
            _ => None,
        }
    }
}

/// Sparkle brightness multiplier in [0.4, 1.0]
#[inline]
pub fn twinkle(frame: u64, x: f32) -> f32 {
    (frame as f32 * 0.3 + x).sin() * 0.3 + 0.7
}

/// All live particles
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Particles that pass the render guard
    pub fn renderable(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.is_renderable())
    }

    pub fn count_kind(&self, pred: impl Fn(&ParticleKind) -> bool) -> usize {
        self.particles.iter().filter(|p| pred(&p.kind)).count()
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Single fading dot
    pub fn spawn_trail(&mut self, pos: Vec2) {
        self.particles.push(Particle::new(
            pos,
            Vec2::ZERO,
            TRAIL_LIFE,
            3.0,
            palette::PURPLE_500,
            ParticleKind::Trail,
        ));
    }

    /// 15-20 particles flung outward, alternating purple and white
    pub fn spawn_explosion(&mut self, pos: Vec2, rng: &mut impl Rng) {
        let count: u32 = rng.random_range(15..=20);
        for i in 0..count {
            let jitter: f32 = rng.random_range(-0.25..0.25);
            let angle = TAU * i as f32 / count as f32 + jitter;
            let speed: f32 = rng.random_range(1.0..3.0);
            let color = if i % 2 == 0 {
                palette::PURPLE_500
            } else {
                palette::WHITE
            };
            self.particles.push(Particle::new(
                pos,
                Vec2::from_angle(angle) * speed,
                rng.random_range(30..=40u32) as f32,
                rng.random_range(2.0..4.0),
                color,
                ParticleKind::Explosion,
            ));
        }
        log::debug!("Explosion: {} particles at {:?}", count, pos);
    }

    /// 8-12 slow drifting dots
    pub fn spawn_sparkles(&mut self, pos: Vec2, rng: &mut impl Rng) {
        let count: u32 = rng.random_range(8..=12);
        for _ in 0..count {
            let angle = rng.random_range(0.0..TAU);
            let speed: f32 = rng.random_range(0.0..0.5);
            let color = if rng.random_bool(0.5) {
                palette::PURPLE_400
            } else {
                palette::WHITE
            };
            self.particles.push(Particle::new(
                pos,
                Vec2::from_angle(angle) * speed,
                rng.random_range(20..=30u32) as f32,
                rng.random_range(2.0..4.0),
                color,
                ParticleKind::Sparkle,
            ));
        }
    }

    /// 30-40 pieces dropped from above the field across its full width
    pub fn spawn_confetti(&mut self, field_width: f32, rng: &mut impl Rng) {
        let count: u32 = rng.random_range(30..=40);
        for _ in 0..count {
            let x = rng.random_range(0.0..field_width.max(1.0));
            let vel = Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(1.0..3.0));
            let color = palette::CONFETTI[rng.random_range(0..palette::CONFETTI.len())];
            let kind = ParticleKind::Confetti {
                rotation: rng.random_range(0.0..TAU),
                rotation_speed: rng.random_range(-0.1..0.1),
            };
            self.particles.push(Particle::new(
                Vec2::new(x, CONFETTI_SPAWN_Y),
                vel,
                CONFETTI_LIFE,
                rng.random_range(3.0..6.0),
                color,
                kind,
            ));
        }
        log::debug!("Confetti: {} pieces", count);
    }

    /// Advance every particle, then drop the dead ones in the same pass
    pub fn tick(&mut self, field_height: f32, gravity: f32) {
        self.particles.retain_mut(|p| {
            p.update(gravity);
            !p.is_dead(field_height)
        });
    }
}
