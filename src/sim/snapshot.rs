//! Read-only view of a session for renderers
//!
//! Snapshots are plain copies: holding one never borrows the controller, and
//! mutating one has no effect on the simulation.

use serde::{Deserialize, Serialize};

use super::state::{Obstacle, Runner, Session, SessionMode};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunnerView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub airborne: bool,
    /// Vertical velocity, for eye/leg poses
    pub velocity: f32,
    /// Animation counter for the leg swing
    pub frame: u64,
}

impl From<&Runner> for RunnerView {
    fn from(runner: &Runner) -> Self {
        Self {
            x: runner.pos.x,
            y: runner.pos.y,
            width: runner.width,
            height: runner.height,
            airborne: runner.airborne,
            velocity: runner.velocity,
            frame: runner.frame_count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<&Obstacle> for ObstacleView {
    fn from(obstacle: &Obstacle) -> Self {
        Self {
            x: obstacle.pos.x,
            y: obstacle.pos.y,
            width: obstacle.width,
            height: obstacle.height,
        }
    }
}

/// Everything a render pass needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub mode: SessionMode,
    pub score: u32,
    pub best_score: u32,
    pub runner: RunnerView,
    /// Obstacles in spawn order
    pub obstacles: Vec<ObstacleView>,
}

impl Snapshot {
    pub fn capture(session: &Session, best_score: u32) -> Self {
        Self {
            mode: session.mode,
            score: session.score,
            best_score: best_score.max(session.score),
            runner: RunnerView::from(&session.runner),
            obstacles: session.obstacles.iter().map(ObstacleView::from).collect(),
        }
    }

    /// Serialize for hosts that draw from JavaScript
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
