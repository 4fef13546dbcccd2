use crate::models::{DrawRecord, NumberStats, Zone};

/// Occurrences par numéro, indexées de 1 à `range`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<u32>,
}

impl FrequencyTable {
    pub fn new(range: u8) -> Self {
        Self {
            counts: vec![0; range as usize],
        }
    }

    pub fn from_draws<'a>(
        draws: impl IntoIterator<Item = &'a DrawRecord>,
        zone: Zone,
        range: u8,
    ) -> Self {
        let mut table = Self::new(range);
        for draw in draws {
            table.record(zone.numbers_from(draw));
        }
        table
    }

    pub fn record(&mut self, numbers: &[u8]) {
        for &n in numbers {
            let idx = (n as usize).wrapping_sub(1);
            if idx < self.counts.len() {
                self.counts[idx] += 1;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn range(&self) -> u8 {
        self.counts.len() as u8
    }

    pub fn get(&self, number: u8) -> u32 {
        (number as usize)
            .checked_sub(1)
            .and_then(|idx| self.counts.get(idx))
            .copied()
            .unwrap_or(0)
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn min(&self) -> u32 {
        self.counts.iter().copied().min().unwrap_or(0)
    }

    pub fn max(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Vue de présentation : pourcentage relatif au maximum, triée par numéro.
    pub fn stats(&self) -> Vec<NumberStats> {
        let max = self.max();
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &frequency)| NumberStats {
                number: (i + 1) as u8,
                frequency,
                percentage: if max > 0 {
                    frequency as f64 / max as f64 * 100.0
                } else {
                    0.0
                },
            })
            .collect()
    }

    /// Seuil froid : moyenne par numéro × `ratio`.
    pub fn cold_threshold(&self, ratio: f64) -> f64 {
        if self.counts.is_empty() {
            return 0.0;
        }
        self.total() as f64 / self.counts.len() as f64 * ratio
    }

    pub fn cold_numbers(&self, ratio: f64) -> Vec<u8> {
        let threshold = self.cold_threshold(ratio);
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &f)| f as f64 <= threshold)
            .map(|(i, _)| (i + 1) as u8)
            .collect()
    }
}
