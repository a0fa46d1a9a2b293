//! Session state and core simulation types
//!
//! Everything a single play-through mutates lives here. Coordinates are
//! screen space: x grows to the right, y grows downward, and every entity's
//! `pos` is its top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current mode of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionMode {
    /// Waiting for the first trigger; ticks are ignored
    Idle,
    /// Active gameplay
    Running,
    /// Runner hit an obstacle; only a trigger restarts
    GameOver,
}

/// The player-controlled runner (the dino)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Runner {
    /// Top-left corner. `pos.x` never changes during a session.
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity in pixels per tick (negative is up)
    pub velocity: f32,
    pub airborne: bool,
    /// Ticks spent running, drives the leg-swing animation only
    pub frame_count: u64,
}

impl Runner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.runner_x, tuning.ground_baseline),
            width: tuning.runner_width,
            height: tuning.runner_height,
            velocity: 0.0,
            airborne: false,
            frame_count: 0,
        }
    }

    /// Start a jump if standing on the ground. Returns whether it jumped.
    pub fn jump(&mut self, impulse: f32) -> bool {
        if self.airborne {
            return false;
        }
        self.velocity = impulse;
        self.airborne = true;
        true
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }
}

/// A cactus scrolling toward the runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner; the bottom edge rests on the ground surface
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    /// Create an obstacle standing on `surface_y` with its left edge at `x`
    pub fn new(id: u32, x: f32, width: f32, height: f32, surface_y: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(x, surface_y - height),
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }
}

/// World parameters that evolve as difficulty ramps
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldParams {
    /// Pixels the world scrolls per tick; grows with every passed obstacle
    pub scroll_speed: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    /// Milliseconds between spawns; shrinks per spawn toward the floor
    pub spawn_interval_ms: f32,
    pub ground_baseline: f32,
}

impl WorldParams {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            scroll_speed: tuning.initial_speed,
            gravity: tuning.gravity,
            jump_impulse: tuning.jump_impulse,
            spawn_interval_ms: tuning.spawn_interval_ms,
            ground_baseline: tuning.ground_baseline,
        }
    }
}

/// Complete state of one play-through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub mode: SessionMode,
    pub score: u32,
    pub runner: Runner,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub world: WorldParams,
    /// Milliseconds since the last spawn; `None` until the first one
    pub since_last_spawn_ms: Option<f32>,
    /// Running ticks simulated so far
    pub time_ticks: u64,
    next_id: u32,
}

impl Session {
    /// Fresh Idle session with default world parameters
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            mode: SessionMode::Idle,
            score: 0,
            runner: Runner::new(tuning),
            obstacles: Vec::new(),
            world: WorldParams::new(tuning),
            since_last_spawn_ms: None,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new obstacle ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.mode == SessionMode::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle_and_empty() {
        let tuning = Tuning::default();
        let session = Session::new(&tuning);
        assert_eq!(session.mode, SessionMode::Idle);
        assert_eq!(session.score, 0);
        assert!(session.obstacles.is_empty());
        assert_eq!(session.since_last_spawn_ms, None);
        assert_eq!(session.runner.pos.y, tuning.ground_baseline);
        assert!(!session.runner.airborne);
        assert_eq!(session.world.scroll_speed, tuning.initial_speed);
    }

    #[test]
    fn test_obstacle_rests_on_surface() {
        let obstacle = Obstacle::new(1, 800.0, 20.0, 55.0, 250.0);
        assert_eq!(obstacle.pos.y, 195.0);
        assert_eq!(obstacle.bottom(), 250.0);
        assert_eq!(obstacle.right(), 820.0);
    }

    #[test]
    fn test_no_double_jump() {
        let mut runner = Runner::new(&Tuning::default());
        assert!(runner.jump(-20.0));
        runner.velocity = -5.0;
        assert!(!runner.jump(-20.0));
        assert_eq!(runner.velocity, -5.0);
        assert!(runner.airborne);
    }

    #[test]
    fn test_entity_ids_wrap_instead_of_overflowing() {
        let mut session = Session::new(&Tuning::default());
        session.next_id = u32::MAX;
        assert_eq!(session.next_entity_id(), u32::MAX);
        assert_eq!(session.next_entity_id(), 0);
    }

    #[test]
    fn test_session_resumes_from_json() {
        use crate::sim::rng::ScriptedRng;
        use crate::sim::snapshot::Snapshot;
        use crate::sim::tick::tick;

        let tuning = Tuning::default();
        let mut session = Session::new(&tuning);
        session.mode = SessionMode::Running;
        let mut rng = ScriptedRng::constant(0.25);
        for _ in 0..40 {
            tick(&mut session, &mut rng, &tuning);
        }

        let json = serde_json::to_string(&session).unwrap();
        let mut restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(Snapshot::capture(&restored, 0), Snapshot::capture(&session, 0));
        assert_eq!(restored.since_last_spawn_ms, session.since_last_spawn_ms);

        // Both copies keep evolving identically, including obstacle IDs
        let mut restored_rng = rng.clone();
        for _ in 0..100 {
            tick(&mut session, &mut rng, &tuning);
            tick(&mut restored, &mut restored_rng, &tuning);
        }
        assert_eq!(Snapshot::capture(&restored, 0), Snapshot::capture(&session, 0));
        assert_eq!(restored.next_entity_id(), session.next_entity_id());
    }

    #[test]
    fn test_entity_ids_increase() {
        let mut session = Session::new(&Tuning::default());
        let a = session.next_entity_id();
        let b = session.next_entity_id();
        assert!(b > a);
    }
}
