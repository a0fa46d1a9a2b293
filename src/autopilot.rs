//! Demo player for attract mode and headless runs
//!
//! Works purely from what a renderer sees (a snapshot plus the current scroll
//! speed) and answers one question each tick: should the host trigger now?
//! The jump is timed so the apex lines up with the middle of the window in
//! which the next obstacle overlaps the runner's hitbox.

use crate::sim::snapshot::{ObstacleView, Snapshot};
use crate::sim::state::SessionMode;
use crate::tuning::Tuning;

/// Next obstacle that can still hit the runner
fn next_threat<'a>(snapshot: &'a Snapshot, hitbox_left: f32) -> Option<&'a ObstacleView> {
    snapshot
        .obstacles
        .iter()
        .find(|o| o.x + o.width > hitbox_left)
}

/// Horizontal distance at which a grounded runner should jump
pub fn jump_distance(scroll_speed: f32, obstacle_width: f32, tuning: &Tuning) -> f32 {
    let hitbox_width = tuning.runner_width - tuning.hitbox_inset_left - tuning.hitbox_inset_right;
    let apex_ticks = -tuning.jump_impulse / tuning.gravity;
    let overlap_ticks = (hitbox_width + obstacle_width) / scroll_speed;
    (apex_ticks - overlap_ticks / 2.0).max(1.0) * scroll_speed
}

/// Whether the host should call `trigger()` this tick
pub fn should_jump(snapshot: &Snapshot, scroll_speed: f32, tuning: &Tuning) -> bool {
    if snapshot.mode != SessionMode::Running || snapshot.runner.airborne {
        return false;
    }
    let runner = &snapshot.runner;
    let hitbox_left = runner.x + tuning.hitbox_inset_left;
    let hitbox_right = runner.x + runner.width - tuning.hitbox_inset_right;

    let Some(obstacle) = next_threat(snapshot, hitbox_left) else {
        return false;
    };
    let gap = obstacle.x - hitbox_right;
    gap > 0.0 && gap <= jump_distance(scroll_speed, obstacle.width, tuning)
}
