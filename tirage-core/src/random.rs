use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source de hasard uniforme unique du pipeline.
pub trait RandomSource {
    /// Valeur uniforme dans [0, 1).
    fn next_f64(&mut self) -> f64;

    /// Indice uniforme dans [0, len). `len` doit être non nul.
    fn next_index(&mut self, len: usize) -> usize {
        let idx = (self.next_f64() * len as f64) as usize;
        idx.min(len.saturating_sub(1))
    }
}

pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { rng }
    }
}

impl RandomSource for StdRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Rejoue une suite fixe de valeurs, en boucle.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    values: Vec<f64>,
    cursor: usize,
}

impl ReplaySource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for ReplaySource {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_random_in_unit_interval() {
        let mut source = StdRandom::new(Some(42));
        for _ in 0..1000 {
            let v = source.next_f64();
            assert!((0.0..1.0).contains(&v), "valeur hors [0,1) : {v}");
        }
    }

    #[test]
    fn test_std_random_seed_determinism() {
        let mut a = StdRandom::new(Some(7));
        let mut b = StdRandom::new(Some(7));
        for _ in 0..20 {
            assert_eq!(a.next_index(35), b.next_index(35));
        }
    }

    #[test]
    fn test_replay_cycles() {
        let mut source = ReplaySource::new(vec![0.1, 0.5]);
        assert_eq!(source.next_f64(), 0.1);
        assert_eq!(source.next_f64(), 0.5);
        assert_eq!(source.next_f64(), 0.1);
    }

    #[test]
    fn test_replay_index_floor() {
        let mut source = ReplaySource::new(vec![0.0, 0.5, 0.99, 1.0]);
        assert_eq!(source.next_index(5), 0);
        assert_eq!(source.next_index(5), 2);
        assert_eq!(source.next_index(5), 4);
        assert_eq!(source.next_index(5), 4);
    }
}
