use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Tie-break source for the bot. Two instances built from the same seed draw
/// the same sequence, so bot decisions are reproducible.
#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform 1-based draw from `1..=count`. `None` when there is nothing to
    /// draw from.
    pub fn draw_index(&mut self, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        Some(self.rng.random_range(1..=count))
    }

    /// One of `candidates`, chosen uniformly through [`Self::draw_index`].
    pub fn pick<'a, T>(&mut self, candidates: &'a [T]) -> Option<&'a T> {
        let index = self.draw_index(candidates.len())?;
        candidates.get(index - 1)
    }
}
