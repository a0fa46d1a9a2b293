//! Dino Dash - simulation core for a side-scrolling runner minigame
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `controller`: Session state machine driven by the host's tick/trigger calls
//! - `tuning`: Data-driven game balance
//! - `autopilot`: Demo player that decides when to jump from a snapshot
//! - `web`: Browser binding (wasm32 only)

pub mod autopilot;
pub mod controller;
pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use controller::SessionController;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Visible world dimensions (obstacles spawn at the right edge)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 400.0;

    /// Nominal duration of one tick (one display refresh at 60 Hz)
    pub const TICK_MS: f32 = 1000.0 / 60.0;

    /// Runner defaults. `RUNNER_X` is fixed for the whole session.
    pub const RUNNER_X: f32 = 50.0;
    pub const RUNNER_WIDTH: f32 = 40.0;
    pub const RUNNER_HEIGHT: f32 = 60.0;

    /// Resting top edge of the runner
    pub const GROUND_BASELINE: f32 = 200.0;
    /// Distance from the baseline down to the surface obstacles stand on
    pub const GROUND_SURFACE_OFFSET: f32 = 50.0;

    /// Per-tick gravity and the (upward) jump impulse
    pub const GRAVITY: f32 = 1.2;
    pub const JUMP_IMPULSE: f32 = -20.0;

    /// Scroll speed in pixels per tick, and its bump per passed obstacle
    pub const INITIAL_SPEED: f32 = 6.0;
    pub const SPEED_INCREMENT: f32 = 0.1;

    /// Spawn interval in ms, decaying per spawn down to a floor
    pub const SPAWN_INTERVAL_MS: f32 = 1500.0;
    pub const SPAWN_INTERVAL_DECAY_MS: f32 = 10.0;
    pub const SPAWN_INTERVAL_FLOOR_MS: f32 = 1000.0;

    /// Obstacle (cactus) dimensions
    pub const OBSTACLE_WIDTH: f32 = 20.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 40.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 80.0;

    /// Hitbox insets forgiving near-miss grazes
    pub const HITBOX_INSET_LEFT: f32 = 10.0;
    pub const HITBOX_INSET_RIGHT: f32 = 10.0;
    pub const HITBOX_INSET_TOP: f32 = 10.0;
}
