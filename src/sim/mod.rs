//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (pipes oldest first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod particles;
pub mod pipes;
pub mod player;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{check_collisions, crash, game_over, hits_pipe};
pub use particles::{Particle, ParticleKind, ParticleSystem};
pub use pipes::{spawn_pipe, update_pipes};
pub use player::{jump, update_player};
pub use score::{award_pipe, reconcile};
pub use state::{GameEvent, GamePhase, GameState, Pipe, Player, Playfield};
pub use tick::{TickInput, activate, autopilot, tick};
