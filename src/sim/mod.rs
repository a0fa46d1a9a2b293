//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall clock
//! - Injected RNG only
//! - Obstacles kept in spawn order
//! - No rendering or platform dependencies

pub mod collision;
pub mod rng;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, first_collision, obstacle_bounds, runner_hitbox};
pub use rng::{RngSource, ScriptedRng, seeded};
pub use snapshot::{ObstacleView, RunnerView, Snapshot};
pub use spawn::{decayed_interval, maybe_spawn, obstacle_height};
pub use state::{Obstacle, Runner, Session, SessionMode, WorldParams};
pub use tick::{GameEvent, TickReport, tick};
