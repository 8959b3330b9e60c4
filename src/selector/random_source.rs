use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

///
/// Supplies the uniform values a draw is made from.
///
/// Passing the source in rather than reaching for a global generator keeps
/// selections reproducible under test.
///
pub trait RandomSource {
    /// A uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for ThreadRng {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Always returns the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSource(pub f64);

impl RandomSource for FixedSource {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Cycles through a list of values, returning 0 if the list is empty.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    position: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> SequenceSource {
        SequenceSource {
            values,
            position: 0,
        }
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

pub fn thread_source() -> ThreadRng {
    rand::thread_rng()
}

pub fn seeded_source(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Seeded if a seed is given, otherwise the thread generator.
pub fn source_for(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => {
            log::debug!("Using seeded random source ({})", seed);
            Box::new(seeded_source(seed))
        }
        None => Box::new(thread_source()),
    }
}
