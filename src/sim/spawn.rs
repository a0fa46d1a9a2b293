//! Obstacle spawn policy
//!
//! One obstacle at most per tick, at the right edge of the world. Each spawn
//! shortens the interval until the next one, never below the floor.

use super::rng::RngSource;
use super::state::{Obstacle, Session};
use crate::tuning::Tuning;

/// Map a unit sample to an obstacle height inside the configured range.
///
/// The sample is clamped first, so a misbehaving source still produces a
/// valid height (NaN counts as the minimum).
pub fn obstacle_height(unit: f32, tuning: &Tuning) -> f32 {
    let t = if unit.is_nan() {
        0.0
    } else {
        unit.clamp(0.0, 1.0)
    };
    if t != unit {
        log::warn!("RNG sample {} out of range, clamped to {}", unit, t);
    }
    let min = tuning.obstacle_min_height;
    let max = tuning.obstacle_max_height;
    (min + t * (max - min)).clamp(min, max)
}

/// Next spawn interval after a spawn
#[inline]
pub fn decayed_interval(interval_ms: f32, tuning: &Tuning) -> f32 {
    (interval_ms - tuning.spawn_interval_decay_ms).max(tuning.spawn_interval_floor_ms)
}

/// Advance the spawn clock by one tick and spawn if the interval elapsed.
///
/// The very first call of a session spawns immediately. Returns the new
/// obstacle's ID.
pub fn maybe_spawn(
    session: &mut Session,
    rng: &mut dyn RngSource,
    tuning: &Tuning,
) -> Option<u32> {
    let due = match session.since_last_spawn_ms.as_mut() {
        None => true,
        Some(elapsed) => {
            *elapsed += tuning.tick_ms;
            *elapsed > session.world.spawn_interval_ms
        }
    };
    if !due {
        return None;
    }

    let height = obstacle_height(rng.next_unit(), tuning);
    let id = session.next_entity_id();
    session.obstacles.push(Obstacle::new(
        id,
        tuning.world_width,
        tuning.obstacle_width,
        height,
        tuning.ground_surface(),
    ));
    session.since_last_spawn_ms = Some(0.0);
    session.world.spawn_interval_ms = decayed_interval(session.world.spawn_interval_ms, tuning);

    log::debug!(
        "Spawned obstacle {} (height {:.1}), next interval {:.0} ms",
        id,
        height,
        session.world.spawn_interval_ms
    );
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedRng;

    #[test]
    fn test_height_maps_unit_range() {
        let tuning = Tuning::default();
        assert_eq!(obstacle_height(0.0, &tuning), 40.0);
        assert_eq!(obstacle_height(0.5, &tuning), 60.0);
        assert_eq!(obstacle_height(1.0, &tuning), 80.0);
    }

    #[test]
    fn test_height_clamps_bad_samples() {
        let tuning = Tuning::default();
        assert_eq!(obstacle_height(-3.0, &tuning), 40.0);
        assert_eq!(obstacle_height(7.5, &tuning), 80.0);
        assert_eq!(obstacle_height(f32::NAN, &tuning), 40.0);
        assert_eq!(obstacle_height(f32::INFINITY, &tuning), 80.0);
    }

    #[test]
    fn test_first_call_spawns_at_right_edge() {
        let tuning = Tuning::default();
        let mut session = Session::new(&tuning);
        let mut rng = ScriptedRng::constant(0.5);

        let id = maybe_spawn(&mut session, &mut rng, &tuning);
        assert!(id.is_some());
        assert_eq!(session.obstacles.len(), 1);
        let obstacle = &session.obstacles[0];
        assert_eq!(obstacle.pos.x, tuning.world_width);
        assert_eq!(obstacle.bottom(), tuning.ground_surface());
        assert_eq!(session.since_last_spawn_ms, Some(0.0));
        assert_eq!(
            session.world.spawn_interval_ms,
            tuning.spawn_interval_ms - tuning.spawn_interval_decay_ms
        );
    }

    #[test]
    fn test_waits_for_interval() {
        let tuning = Tuning {
            tick_ms: 100.0,
            spawn_interval_ms: 1000.0,
            spawn_interval_decay_ms: 0.0,
            spawn_interval_floor_ms: 1000.0,
            ..Tuning::default()
        };
        let mut session = Session::new(&tuning);
        let mut rng = ScriptedRng::constant(0.0);
        assert!(maybe_spawn(&mut session, &mut rng, &tuning).is_some());

        // Elapsed must exceed the interval, reaching it is not enough
        for _ in 0..10 {
            assert!(maybe_spawn(&mut session, &mut rng, &tuning).is_none());
        }
        assert!(maybe_spawn(&mut session, &mut rng, &tuning).is_some());
        assert_eq!(session.obstacles.len(), 2);
    }

    #[test]
    fn test_interval_never_drops_below_floor() {
        let tuning = Tuning::default();
        let mut interval = tuning.spawn_interval_ms;
        for _ in 0..200 {
            let next = decayed_interval(interval, &tuning);
            assert!(next <= interval);
            assert!(next >= tuning.spawn_interval_floor_ms);
            interval = next;
        }
        assert_eq!(interval, tuning.spawn_interval_floor_ms);
    }
}
