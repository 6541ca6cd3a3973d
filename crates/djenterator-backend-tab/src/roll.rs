//! Sources of uniform random draws.
//!
//! The generator never touches a global RNG. Every draw goes through a
//! [`Roll`] handed in by the caller: a seeded [`Pcg32`] in production, a
//! [`ScriptedRolls`] when a test needs to dictate each outcome.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A stream of uniform draws in [0, 1).
pub trait Roll {
    /// Next draw in [0, 1).
    fn roll(&mut self) -> f64;

    /// Draw once and report whether it lands below `rate`.
    ///
    /// A rate of 0 never fires; a rate of 1 always does.
    fn chance(&mut self, rate: f64) -> bool {
        self.roll() < rate
    }
}

impl Roll for Pcg32 {
    fn roll(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

impl<R: Roll + ?Sized> Roll for &mut R {
    fn roll(&mut self) -> f64 {
        (**self).roll()
    }
}

/// Create a seeded PCG32 generator.
pub fn create_rng(seed: u32) -> Pcg32 {
    // Expand 32-bit seed to 64-bit for PCG32 state
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Replays a fixed sequence of draws, then keeps repeating the last one.
///
/// ```
/// use djenterator_backend_tab::roll::{Roll, ScriptedRolls};
///
/// let mut rolls = ScriptedRolls::new(vec![0.1, 0.9]);
/// assert!(rolls.chance(0.5));
/// assert!(!rolls.chance(0.5));
/// assert_eq!(rolls.roll(), 0.9);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedRolls {
    draws: Vec<f64>,
    next: usize,
    consumed: usize,
}

impl ScriptedRolls {
    /// Values are clamped into [0, 1). An empty script always yields 0.0.
    pub fn new(draws: Vec<f64>) -> Self {
        let draws = draws
            .into_iter()
            .map(|d| d.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self {
            draws,
            next: 0,
            consumed: 0,
        }
    }

    /// Every draw yields `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl Roll for ScriptedRolls {
    fn roll(&mut self) -> f64 {
        self.consumed += 1;
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.next];
        if self.next + 1 < self.draws.len() {
            self.next += 1;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcg_draws_in_unit_interval() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let r = rng.roll();
            assert!((0.0..1.0).contains(&r));
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(1234);
        let mut b = create_rng(1234);
        let xs: Vec<f64> = (0..16).map(|_| a.roll()).collect();
        let ys: Vec<f64> = (0..16).map(|_| b.roll()).collect();
        assert_eq!(xs, ys);

        let mut c = create_rng(1235);
        let zs: Vec<f64> = (0..16).map(|_| c.roll()).collect();
        assert_ne!(xs, zs);
    }

    #[test]
    fn test_chance_extremes() {
        let mut rolls = ScriptedRolls::new(vec![0.0, 0.999, 1.0]);
        assert!(!rolls.chance(0.0));
        assert!(rolls.chance(1.0));
        // 1.0 is clamped below 1 so rate 1 still fires.
        assert!(rolls.chance(1.0));
    }

    #[test]
    fn test_scripted_repeats_last_and_counts() {
        let mut rolls = ScriptedRolls::new(vec![0.25, 0.75]);
        let seen: Vec<f64> = (0..5).map(|_| rolls.roll()).collect();
        assert_eq!(seen, vec![0.25, 0.75, 0.75, 0.75, 0.75]);
        assert_eq!(rolls.consumed(), 5);
    }

    #[test]
    fn test_empty_script_yields_zero() {
        let mut rolls = ScriptedRolls::new(Vec::new());
        assert_eq!(rolls.roll(), 0.0);
        assert_eq!(rolls.roll(), 0.0);
    }

    #[test]
    fn test_roll_through_mut_ref() {
        fn take<R: Roll>(mut r: R) -> f64 {
            r.roll()
        }
        let mut rolls = ScriptedRolls::constant(0.5);
        assert_eq!(take(&mut rolls), 0.5);
        assert_eq!(rolls.consumed(), 1);
    }
}
