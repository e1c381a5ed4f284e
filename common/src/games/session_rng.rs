use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for tile placement.
///
/// Engine code only sees this trait, so tests can script exact positions and values.
pub trait TileRng {
    /// Uniform index in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;

    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

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
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random<T>(&mut self) -> T
    where
        rand::distr::StandardUniform: rand::distr::Distribution<T>,
    {
        self.rng.random()
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

impl TileRng for SessionRng {
    fn next_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn next_unit(&mut self) -> f64 {
        self.random()
    }
}

/// Replays queued values, for tests that need exact placements.
#[cfg(test)]
pub(crate) struct ScriptedRng {
    indices: std::collections::VecDeque<usize>,
    units: std::collections::VecDeque<f64>,
}

#[cfg(test)]
impl ScriptedRng {
    pub(crate) fn new(indices: &[usize], units: &[f64]) -> Self {
        Self {
            indices: indices.iter().copied().collect(),
            units: units.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl TileRng for ScriptedRng {
    fn next_index(&mut self, len: usize) -> usize {
        let index = self.indices.pop_front().expect("scripted index exhausted");
        assert!(index < len, "scripted index {} out of range {}", index, len);
        index
    }

    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().expect("scripted unit exhausted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.next_index(16), b.next_index(16));
        }
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_next_index_in_range() {
        let mut rng = SessionRng::new(42);
        for len in 1..20 {
            assert!(rng.next_index(len) < len);
        }
    }

    #[test]
    fn test_next_unit_in_unit_interval() {
        let mut rng = SessionRng::new(42);
        for _ in 0..1000 {
            let value = rng.next_unit();
            assert!((0.0..1.0).contains(&value));
        }
    }
}
