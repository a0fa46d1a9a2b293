//! Randomness feeding the spawn policy
//!
//! The simulation only needs unit floats for obstacle heights, so the seam is
//! a tiny trait instead of a full `rand::RngCore`. Production sessions use a
//! seeded PCG stream; tests and replays script the exact sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of unit floats, nominally in `[0, 1)`.
///
/// Implementations are not trusted: callers clamp whatever comes back.
pub trait RngSource {
    fn next_unit(&mut self) -> f32;
}

impl RngSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Seeded PCG stream for reproducible runs
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// An empty script yields `0.0` forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Always yields the same value
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl RngSource for ScriptedRng {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        for _ in 0..16 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn test_pcg_values_are_unit() {
        let mut rng = seeded(7);
        for _ in 0..1000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_scripted_cycles() {
        let mut rng = ScriptedRng::new(vec![0.25, 0.75]);
        assert_eq!(rng.next_unit(), 0.25);
        assert_eq!(rng.next_unit(), 0.75);
        assert_eq!(rng.next_unit(), 0.25);
    }

    #[test]
    fn test_scripted_empty_is_zero() {
        let mut rng = ScriptedRng::default();
        assert_eq!(rng.next_unit(), 0.0);
    }
}
