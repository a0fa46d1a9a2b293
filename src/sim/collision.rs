//! Collision detection between the runner and obstacles
//!
//! Plain axis-aligned boxes. The runner's hitbox is inset from its sprite on
//! the left, right and top so a pixel-level graze does not end the run; the
//! bottom edge is kept so landing on a cactus still counts.

use glam::Vec2;

use super::state::{Obstacle, Runner};
use crate::tuning::Tuning;

/// Axis-aligned bounding box, `min` is top-left, `max` bottom-right
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from top-left corner and size
    pub fn from_rect(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            min: pos,
            max: pos + Vec2::new(width, height),
        }
    }

    /// Strict overlap: boxes that only share an edge do not collide
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }
}

/// Forgiving hitbox for the runner
pub fn runner_hitbox(runner: &Runner, tuning: &Tuning) -> Aabb {
    Aabb::new(
        Vec2::new(
            runner.pos.x + tuning.hitbox_inset_left,
            runner.pos.y + tuning.hitbox_inset_top,
        ),
        Vec2::new(
            runner.pos.x + runner.width - tuning.hitbox_inset_right,
            runner.pos.y + runner.height,
        ),
    )
}

/// Full bounds of an obstacle
#[inline]
pub fn obstacle_bounds(obstacle: &Obstacle) -> Aabb {
    Aabb::from_rect(obstacle.pos, obstacle.width, obstacle.height)
}

/// First obstacle (in spawn order) overlapping the runner, if any
pub fn first_collision<'a>(
    runner: &Runner,
    obstacles: &'a [Obstacle],
    tuning: &Tuning,
) -> Option<&'a Obstacle> {
    let hitbox = runner_hitbox(runner, tuning);
    obstacles
        .iter()
        .find(|obstacle| hitbox.overlaps(&obstacle_bounds(obstacle)))
}
