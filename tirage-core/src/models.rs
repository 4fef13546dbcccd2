use crate::profile::GameProfile;

/// Nombre de grilles candidates générées ensemble.
pub const BATCH_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawRecord {
    pub front: Vec<u8>,
    pub back: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Front,
    Back,
}

impl Zone {
    pub fn range(&self, profile: &GameProfile) -> u8 {
        match self {
            Zone::Front => profile.front_range,
            Zone::Back => profile.back_range,
        }
    }

    pub fn pick_count(&self, profile: &GameProfile) -> usize {
        match self {
            Zone::Front => profile.front_count,
            Zone::Back => profile.back_count,
        }
    }

    pub fn high_freq_required(&self, profile: &GameProfile) -> usize {
        match self {
            Zone::Front => profile.front_high_freq_required,
            Zone::Back => profile.back_high_freq_required,
        }
    }

    pub fn numbers_from<'a>(&self, draw: &'a DrawRecord) -> &'a [u8] {
        match self {
            Zone::Front => &draw.front,
            Zone::Back => &draw.back,
        }
    }

    pub fn numbers_in<'a>(&self, set: &'a CandidateSet) -> &'a [u8] {
        match self {
            Zone::Front => &set.front,
            Zone::Back => &set.back,
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Front => write!(f, "zone avant"),
            Zone::Back => write!(f, "zone arrière"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NumberStats {
    pub number: u8,
    pub frequency: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    pub front: Vec<u8>,
    pub back: Vec<u8>,
}

/// Lot de grilles candidates : jamais partiel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateBatch {
    sets: [CandidateSet; BATCH_SIZE],
}

impl CandidateBatch {
    pub fn new(sets: [CandidateSet; BATCH_SIZE]) -> Self {
        Self { sets }
    }

    /// `None` si le lot ne contient pas exactement `BATCH_SIZE` grilles.
    #[cfg(test)]
    pub(crate) fn from_sets(sets: Vec<CandidateSet>) -> Option<Self> {
        sets.try_into().ok().map(Self::new)
    }

    pub fn sets(&self) -> &[CandidateSet] {
        &self.sets
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColdSwap {
    pub replaced: u8,
    pub inserted: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneFinal {
    pub numbers: Vec<u8>,
    pub high_frequency: Vec<u8>,
    pub cold: Option<ColdSwap>,
    pub logic: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinalSet {
    pub front: ZoneFinal,
    pub back: ZoneFinal,
    pub explanation: String,
}

pub fn join_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileKey;

    fn test_set(front: &[u8], back: &[u8]) -> CandidateSet {
        CandidateSet {
            front: front.to_vec(),
            back: back.to_vec(),
        }
    }

    #[test]
    fn test_zone_range_and_count() {
        let dlt = ProfileKey::Dlt.profile();
        assert_eq!(Zone::Front.range(dlt), 35);
        assert_eq!(Zone::Back.range(dlt), 12);
        assert_eq!(Zone::Front.pick_count(dlt), 5);
        assert_eq!(Zone::Back.pick_count(dlt), 2);
        assert_eq!(Zone::Front.high_freq_required(dlt), 3);
        assert_eq!(Zone::Back.high_freq_required(dlt), 1);
    }

    #[test]
    fn test_zone_numbers_from() {
        let draw = DrawRecord {
            front: vec![3, 12, 18, 25, 33],
            back: vec![5, 11],
        };
        assert_eq!(Zone::Front.numbers_from(&draw), &[3, 12, 18, 25, 33]);
        assert_eq!(Zone::Back.numbers_from(&draw), &[5, 11]);
    }

    #[test]
    fn test_batch_requires_exact_size() {
        let sets = vec![test_set(&[1, 2, 3, 4, 5], &[1, 2]); 4];
        assert!(CandidateBatch::from_sets(sets).is_none());

        let sets = vec![test_set(&[1, 2, 3, 4, 5], &[1, 2]); BATCH_SIZE];
        let batch = CandidateBatch::from_sets(sets).unwrap();
        assert_eq!(batch.sets().len(), BATCH_SIZE);
    }

    #[test]
    fn test_join_numbers() {
        assert_eq!(join_numbers(&[3, 12, 18]), "3, 12, 18");
        assert_eq!(join_numbers(&[]), "");
    }
}
