use crate::random::RandomSource;
use crate::weights::WeightTable;

/// Tirage pondéré sans remise de `count` numéros parmi 1..=`range`.
/// Les poids sont renormalisés après chaque retrait.
pub fn weighted_sample(
    weights: &WeightTable,
    count: usize,
    range: u8,
    source: &mut dyn RandomSource,
) -> Vec<u8> {
    let mut available: Vec<u8> = (1..=range).collect();
    let mut selected = Vec::with_capacity(count);

    while selected.len() < count && !available.is_empty() {
        let total: f64 = available.iter().map(|&n| weights.weight(n)).sum();
        let mut remaining = source.next_f64() * total;

        // Repli sur le dernier en cas d'arrondi flottant
        let mut idx = available.len() - 1;
        for (i, &n) in available.iter().enumerate() {
            remaining -= weights.weight(n);
            if remaining <= 0.0 {
                idx = i;
                break;
            }
        }

        selected.push(available.remove(idx));
    }

    selected.sort_unstable();
    selected
}

/// Tirage uniforme sans remise de `count` numéros dans `pool`, dans l'ordre du tirage.
pub fn uniform_sample(mut pool: Vec<u8>, count: usize, source: &mut dyn RandomSource) -> Vec<u8> {
    let mut selected = Vec::with_capacity(count);
    while selected.len() < count && !pool.is_empty() {
        let idx = source.next_index(pool.len());
        selected.push(pool.remove(idx));
    }
    selected
}
