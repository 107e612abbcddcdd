use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::sync::{Mutex, PoisonError};

/// Source of the two flavor draws (catastrophizing index, spiral probability).
///
/// Implementations return a value inside `range`, bounds included.
pub trait RandomSource: Send + Sync {
    fn draw(&self, range: RangeInclusive<u8>) -> u8;
}

/// Thread-local generator; the default for the service.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn draw(&self, range: RangeInclusive<u8>) -> u8 {
        rand::rng().random_range(range)
    }
}

/// Reproducible generator for demos and tests.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn draw(&self, range: RangeInclusive<u8>) -> u8 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_range(range)
    }
}
