use crate::frequency::FrequencyTable;

pub const BASE_WEIGHT: f64 = 0.7;
pub const FREQUENCY_SPAN: f64 = 0.3;

/// Poids d'échantillonnage dans [0.7, 1.0] : tout numéro reste tirable.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    weights: Vec<f64>,
}

impl WeightTable {
    pub fn from_frequencies(table: &FrequencyTable) -> Self {
        let min = table.min();
        let range = table.max() - min;

        let weights = table
            .counts()
            .iter()
            .map(|&f| {
                let adjust = if range > 0 {
                    FREQUENCY_SPAN * (f - min) as f64 / range as f64
                } else {
                    0.0
                };
                BASE_WEIGHT + adjust
            })
            .collect();

        Self { weights }
    }

    pub fn weight(&self, number: u8) -> f64 {
        (number as usize)
            .checked_sub(1)
            .and_then(|idx| self.weights.get(idx))
            .copied()
            .unwrap_or(BASE_WEIGHT)
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[f64] {
        &self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_table_all_base() {
        let table = FrequencyTable::new(35);
        let weights = WeightTable::from_frequencies(&table);
        assert_eq!(weights.as_slice().len(), 35);
        assert!(weights.as_slice().iter().all(|&w| w == BASE_WEIGHT));

        let mut table = FrequencyTable::new(3);
        table.record(&[1, 2, 3, 1, 2, 3]);
        let weights = WeightTable::from_frequencies(&table);
        assert!(weights.as_slice().iter().all(|&w| w == BASE_WEIGHT));
    }

    #[test]
    fn test_min_and_max_bounds() {
        let mut table = FrequencyTable::new(4);
        table.record(&[1, 1, 1, 1, 2, 2, 3]);
        let weights = WeightTable::from_frequencies(&table);
        assert!((weights.weight(1) - 1.0).abs() < 1e-12);
        assert!((weights.weight(4) - 0.7).abs() < 1e-12);
        assert!((weights.weight(2) - 0.85).abs() < 1e-12);
        assert!((weights.weight(3) - 0.775).abs() < 1e-12);
    }

    #[test]
    fn test_weights_within_bounds() {
        let mut table = FrequencyTable::new(12);
        table.record(&[1, 5, 5, 7, 7, 7, 12, 12, 3]);
        let weights = WeightTable::from_frequencies(&table);
        for &w in weights.as_slice() {
            assert!((0.7..=1.0).contains(&w), "poids hors bornes : {w}");
        }
    }
}
