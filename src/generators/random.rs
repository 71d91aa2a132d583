use rand::{Rng, rngs::StdRng};

/// Source of uniform random integers used for every tie-break during carving.
pub trait RandomSource {
    /// Returns an integer in `[0, n]`, inclusive on both ends.
    fn random_below(&mut self, n: usize) -> usize;
}

impl RandomSource for StdRng {
    fn random_below(&mut self, n: usize) -> usize {
        self.random_range(0..=n)
    }
}

/// Replays a fixed sequence of draws, cycling when it runs out. Each draw is
/// clamped to the requested range.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(script: Vec<usize>) -> Self {
        ScriptedRandom { script, cursor: 0 }
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn random_below(&mut self, n: usize) -> usize {
        if self.script.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value.min(n)
    }
}

/// Picks one element uniformly. A single candidate is returned without a draw.
pub(crate) fn pick<T: Copy, R: RandomSource + ?Sized>(random: &mut R, items: &[T]) -> Option<T> {
    match items.len() {
        0 => None,
        1 => Some(items[0]),
        len => Some(items[random.random_below(len - 1).min(len - 1)]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_std_rng_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 0..20 {
            for _ in 0..50 {
                assert!(rng.random_below(n) <= n);
            }
        }
    }

    #[test]
    fn test_scripted_random_cycles_and_clamps() {
        let mut random = ScriptedRandom::new(vec![0, 5, 2]);
        assert_eq!(random.random_below(3), 0);
        assert_eq!(random.random_below(3), 3);
        assert_eq!(random.random_below(3), 2);
        assert_eq!(random.random_below(3), 0);
        assert_eq!(random.draws(), 4);
    }

    #[test]
    fn test_pick_skips_draw_for_single_item() {
        let mut random = ScriptedRandom::new(vec![1]);
        assert_eq!(pick::<u8, _>(&mut random, &[]), None);
        assert_eq!(pick(&mut random, &[9]), Some(9));
        assert_eq!(random.draws(), 0);
        assert_eq!(pick(&mut random, &[4, 5, 6]), Some(5));
        assert_eq!(random.draws(), 1);
    }
}
