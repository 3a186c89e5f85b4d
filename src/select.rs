//! Candidate index selection.
//!
//! When a call does not force a response index, the engine picks one at
//! random. The randomness source is injectable so tests can pin the
//! sequence instead of depending on the process-wide generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Picks which candidate response a simulated call returns.
pub trait IndexSelector: Send + Sync {
    /// Return an index in `[0, bound)`; a bound of zero yields 0.
    fn pick(&self, bound: usize) -> usize;
}

/// Uniformly random index in `[0, bound)`; a bound of zero yields 0.
pub fn random_index(bound: usize) -> usize {
    if bound == 0 {
        return 0;
    }
    rand::thread_rng().gen_range(0..bound)
}

/// Default selector backed by the thread-local generator.
#[derive(Debug, Default)]
pub struct RandomSelector;

impl IndexSelector for RandomSelector {
    fn pick(&self, bound: usize) -> usize {
        random_index(bound)
    }
}

/// Seeded selector for deterministic tests; the same seed produces the
/// same pick sequence.
#[derive(Debug)]
pub struct SeededSelector {
    rng: Mutex<StdRng>,
}

impl SeededSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl IndexSelector for SeededSelector {
    fn pick(&self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(0..bound)
    }
}
