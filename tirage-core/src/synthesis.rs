use crate::frequency::FrequencyTable;
use crate::models::{CandidateBatch, CandidateSet, ColdSwap, FinalSet, Zone, ZoneFinal, join_numbers};
use crate::profile::GameProfile;
use crate::random::RandomSource;
use crate::sampler::uniform_sample;

/// Nombre minimal d'apparitions dans le lot pour qu'un numéro soit fréquent.
pub const HIGH_FREQUENCY_MIN: u32 = 2;

fn batch_occurrences(sets: &[CandidateSet], zone: Zone, range: u8) -> Vec<u32> {
    let mut counts = vec![0u32; range as usize];
    for set in sets {
        for &n in zone.numbers_in(set) {
            let idx = (n as usize).wrapping_sub(1);
            if idx < counts.len() {
                counts[idx] += 1;
            }
        }
    }
    counts
}

/// Numéros présents dans au moins deux grilles du lot, triés.
pub fn high_frequency_numbers(sets: &[CandidateSet], zone: Zone, range: u8) -> Vec<u8> {
    if sets.len() < 2 {
        return Vec::new();
    }
    batch_occurrences(sets, zone, range)
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c >= HIGH_FREQUENCY_MIN)
        .map(|(i, _)| (i + 1) as u8)
        .collect()
}

/// Garde au plus `limit` numéros fréquents : les plus présents dans le lot,
/// le plus petit numéro en cas d'égalité.
fn trim_high_frequency(high: &[u8], occurrences: &[u32], limit: usize) -> Vec<u8> {
    let mut ranked = high.to_vec();
    ranked.sort_by(|&a, &b| {
        occurrences[(b - 1) as usize]
            .cmp(&occurrences[(a - 1) as usize])
            .then(a.cmp(&b))
    });
    ranked.truncate(limit);
    ranked.sort_unstable();
    ranked
}

fn select_zone(
    batch: &CandidateBatch,
    zone: Zone,
    profile: &GameProfile,
    high: &[u8],
    source: &mut dyn RandomSource,
) -> (Vec<u8>, String) {
    let pick_count = zone.pick_count(profile);
    let range = zone.range(profile);

    if high.len() < zone.high_freq_required(profile) {
        let idx = source.next_index(batch.sets().len());
        let numbers = zone.numbers_in(&batch.sets()[idx]).to_vec();
        let logic = format!(
            "Grille n°{} choisie au hasard : {}",
            idx + 1,
            join_numbers(&numbers)
        );
        return (numbers, logic);
    }

    let mut numbers = if high.len() > pick_count {
        let occurrences = batch_occurrences(batch.sets(), zone, range);
        trim_high_frequency(high, &occurrences, pick_count)
    } else {
        high.to_vec()
    };
    let mut logic = if numbers.is_empty() {
        "Aucun numéro fréquent".to_string()
    } else {
        format!("Numéros fréquents utilisés : {}", join_numbers(&numbers))
    };
    if high.len() > pick_count {
        logic.push_str(&format!(" (sur {} fréquents)", high.len()));
    }

    if numbers.len() < pick_count {
        let pool: Vec<u8> = (1..=range).filter(|n| !numbers.contains(n)).collect();
        let filler = uniform_sample(pool, pick_count - numbers.len(), source);
        logic.push_str(&format!(", complétés au hasard : {}", join_numbers(&filler)));
        numbers.extend(filler);
        numbers.sort_unstable();
    }

    (numbers, logic)
}

fn inject_cold(
    numbers: &mut [u8],
    batch: &CandidateBatch,
    zone: Zone,
    cold: &[u8],
    source: &mut dyn RandomSource,
) -> Option<ColdSwap> {
    if cold.is_empty() || numbers.is_empty() {
        return None;
    }
    let batch_has_cold = batch
        .sets()
        .iter()
        .any(|set| zone.numbers_in(set).iter().any(|n| cold.contains(n)));
    if batch_has_cold || numbers.iter().any(|n| cold.contains(n)) {
        return None;
    }

    let inserted = cold[source.next_index(cold.len())];
    let position = source.next_index(numbers.len());
    let replaced = numbers[position];
    numbers[position] = inserted;
    numbers.sort_unstable();

    Some(ColdSwap { replaced, inserted })
}

fn synthesize_zone(
    batch: &CandidateBatch,
    zone: Zone,
    profile: &GameProfile,
    freq: &FrequencyTable,
    source: &mut dyn RandomSource,
) -> ZoneFinal {
    let high_frequency = high_frequency_numbers(batch.sets(), zone, zone.range(profile));
    let cold_numbers = freq.cold_numbers(profile.cold_threshold);

    let (mut numbers, mut logic) = select_zone(batch, zone, profile, &high_frequency, source);
    let cold = inject_cold(&mut numbers, batch, zone, &cold_numbers, source);
    if let Some(swap) = cold {
        logic.push_str(&format!(
            ", {} remplacé par le numéro froid {}",
            swap.replaced, swap.inserted
        ));
    }

    log::debug!("{zone} : {logic}");

    ZoneFinal {
        numbers,
        high_frequency,
        cold,
        logic,
    }
}

/// Combine le lot et l'historique en une grille finale.
pub fn synthesize(
    profile: &GameProfile,
    batch: &CandidateBatch,
    front_freq: &FrequencyTable,
    back_freq: &FrequencyTable,
    source: &mut dyn RandomSource,
) -> FinalSet {
    let front = synthesize_zone(batch, Zone::Front, profile, front_freq, source);
    let back = synthesize_zone(batch, Zone::Back, profile, back_freq, source);

    let explanation = format!(
        "Synthèse de la grille finale à partir de {} grilles aléatoires et de l'analyse de l'historique.",
        batch.sets().len()
    );

    FinalSet {
        front,
        back,
        explanation,
    }
}
