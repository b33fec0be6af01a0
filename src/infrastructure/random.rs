use crate::application::ports::RandomSource;
use parking_lot::Mutex;
use rand::Rng;

/// Production randomness from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngRandom;

impl ThreadRngRandom {
    pub fn new() -> Self {
        ThreadRngRandom
    }
}

impl RandomSource for ThreadRngRandom {
    fn next(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Replays a fixed sequence of draws, repeating the last value once the
/// sequence is exhausted. Deterministic tier selection for tests.
pub struct SequenceRandom {
    values: Vec<f64>,
    index: Mutex<usize>,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        SequenceRandom {
            values,
            index: Mutex::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next(&self) -> f64 {
        let mut index = self.index.lock();
        let value = self
            .values
            .get(*index)
            .or_else(|| self.values.last())
            .copied()
            .unwrap_or(0.0);
        if *index + 1 < self.values.len() {
            *index += 1;
        }
        value
    }
}
