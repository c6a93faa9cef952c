use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

/// Uniform integer generator driving maze carving.
pub trait RandomSource {
    /// A uniformly distributed integer in `[low, high)`. Callers never pass an empty range.
    fn next_int(&mut self, low: usize, high: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn next_int(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..high)
    }
}

/// Fast non-cryptographic generator seeded from a single number, for reproducible mazes.
pub fn seeded_rng(seed: u64) -> XorShiftRng {
    XorShiftRng::seed_from_u64(seed)
}

pub fn entropy_rng() -> XorShiftRng {
    XorShiftRng::from_entropy()
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// Each value is reduced into the requested range (`low + value % (high - low)`), so a script
/// can be written directly as cell coordinates and direction indices.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<usize>,
    position: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<usize>) -> ScriptedRandom {
        ScriptedRandom { values, position: 0 }
    }

    /// How many values have been handed out so far.
    pub fn drawn(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, low: usize, high: usize) -> usize {
        let span = high.saturating_sub(low).max(1);
        let value = if self.values.is_empty() {
            0
        } else {
            self.values[self.position % self.values.len()]
        };
        self.position += 1;
        low + value % span
    }
}
