use crate::frequency::FrequencyTable;
use crate::models::{BATCH_SIZE, CandidateBatch, CandidateSet};
use crate::profile::GameProfile;
use crate::random::RandomSource;
use crate::sampler::weighted_sample;
use crate::weights::WeightTable;

/// Génère un lot complet de `BATCH_SIZE` grilles candidates.
///
/// Les tables de fréquences ne changent pas pendant le lot : les poids sont
/// dérivés une seule fois.
pub fn generate_batch(
    profile: &GameProfile,
    front_freq: &FrequencyTable,
    back_freq: &FrequencyTable,
    source: &mut dyn RandomSource,
) -> CandidateBatch {
    let front_weights = WeightTable::from_frequencies(front_freq);
    let back_weights = WeightTable::from_frequencies(back_freq);

    let sets: [CandidateSet; BATCH_SIZE] = std::array::from_fn(|_| CandidateSet {
        front: weighted_sample(&front_weights, profile.front_count, profile.front_range, source),
        back: weighted_sample(&back_weights, profile.back_count, profile.back_range, source),
    });

    log::debug!("Lot de {BATCH_SIZE} grilles généré ({})", profile.name);

    CandidateBatch::new(sets)
}
