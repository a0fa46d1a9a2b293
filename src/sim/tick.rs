//! Fixed-step simulation tick
//!
//! One call advances a Running session by exactly one gravity/scroll step:
//! motion, spawning, scoring, then the collision test.

use serde::{Deserialize, Serialize};

use super::collision::first_collision;
use super::rng::RngSource;
use super::spawn::maybe_spawn;
use super::state::{Obstacle, Runner, Session, SessionMode, WorldParams};
use crate::tuning::Tuning;

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new obstacle entered at the right edge
    Spawned { id: u32 },
    /// An obstacle fully passed the runner; `score` is the new total
    Passed { id: u32, score: u32 },
    /// The runner hit an obstacle and the session ended
    Crashed { id: u32, score: u32 },
}

/// Events produced by one tick, in the order they happened
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
}

impl TickReport {
    pub fn crashed(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::Crashed { .. }))
    }

    pub fn spawned(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::Spawned { .. }))
            .count()
    }

    pub fn passed(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::Passed { .. }))
            .count()
    }
}

/// Euler step for the runner's vertical motion, landing on the baseline
pub fn integrate_runner(runner: &mut Runner, world: &WorldParams) {
    if !runner.airborne {
        return;
    }
    runner.velocity += world.gravity;
    runner.pos.y += runner.velocity;

    if runner.pos.y >= world.ground_baseline {
        runner.pos.y = world.ground_baseline;
        runner.velocity = 0.0;
        runner.airborne = false;
    }
}

/// Scroll every obstacle left by the current speed
pub fn advance_obstacles(obstacles: &mut [Obstacle], scroll_speed: f32) {
    for obstacle in obstacles {
        obstacle.pos.x -= scroll_speed;
    }
}

/// Drop obstacles whose right edge is behind the runner, scoring each one
/// and bumping the scroll speed.
pub fn collect_passed(session: &mut Session, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    let pass_line = session.runner.pos.x;
    let mut passed = Vec::new();
    session.obstacles.retain(|obstacle| {
        if obstacle.right() < pass_line {
            passed.push(obstacle.id);
            false
        } else {
            true
        }
    });

    for id in passed {
        session.score += 1;
        session.world.scroll_speed += tuning.speed_increment;
        log::debug!(
            "Passed obstacle {}: score {}, speed {:.2}",
            id,
            session.score,
            session.world.scroll_speed
        );
        events.push(GameEvent::Passed {
            id,
            score: session.score,
        });
    }
}

/// Advance the session by one tick. No-op unless Running.
pub fn tick(session: &mut Session, rng: &mut dyn RngSource, tuning: &Tuning) -> TickReport {
    let mut report = TickReport::default();
    if !session.is_running() {
        return report;
    }

    session.time_ticks += 1;
    session.runner.frame_count += 1;

    integrate_runner(&mut session.runner, &session.world);
    advance_obstacles(&mut session.obstacles, session.world.scroll_speed);

    if let Some(id) = maybe_spawn(session, rng, tuning) {
        report.events.push(GameEvent::Spawned { id });
    }

    collect_passed(session, tuning, &mut report.events);

    if let Some(hit) = first_collision(&session.runner, &session.obstacles, tuning) {
        let id = hit.id;
        session.mode = SessionMode::GameOver;
        log::info!(
            "Game over: hit obstacle {} after {} ticks, score {}",
            id,
            session.time_ticks,
            session.score
        );
        report.events.push(GameEvent::Crashed {
            id,
            score: session.score,
        });
    }

    report
}
