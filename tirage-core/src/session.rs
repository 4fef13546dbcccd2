use crate::error::{Result, SessionError};
use crate::frequency::FrequencyTable;
use crate::generator::generate_batch;
use crate::models::{CandidateBatch, FinalSet, NumberStats, Zone};
use crate::parser::{ParseReport, parse_draws};
use crate::profile::{GameProfile, ProfileKey};
use crate::random::RandomSource;
use crate::synthesis::synthesize;

/// État mutable d'une session d'analyse : profil, tables, lot et grille finale.
///
/// Toute opération refusée laisse l'état intact et remplace le dernier
/// message d'erreur.
pub struct Session<R: RandomSource> {
    profile: ProfileKey,
    front: FrequencyTable,
    back: FrequencyTable,
    valid_lines: usize,
    batch: Option<CandidateBatch>,
    final_set: Option<FinalSet>,
    last_error: Option<String>,
    source: R,
}

impl<R: RandomSource> Session<R> {
    pub fn new(profile: ProfileKey, source: R) -> Self {
        let p = profile.profile();
        Self {
            profile,
            front: FrequencyTable::new(p.front_range),
            back: FrequencyTable::new(p.back_range),
            valid_lines: 0,
            batch: None,
            final_set: None,
            last_error: None,
            source,
        }
    }

    pub fn profile_key(&self) -> ProfileKey {
        self.profile
    }

    pub fn profile(&self) -> &'static GameProfile {
        self.profile.profile()
    }

    fn fail(&mut self, err: SessionError) -> SessionError {
        log::warn!("{err}");
        self.last_error = Some(err.to_string());
        err
    }

    /// Remplace les tables de fréquences par celles du texte brut.
    pub fn analyze(&mut self, raw: &str) -> Result<ParseReport> {
        let profile = self.profile();
        let report = match parse_draws(raw, profile) {
            Ok(report) => report,
            Err(e) => return Err(self.fail(e)),
        };

        self.front = FrequencyTable::from_draws(report.records(), Zone::Front, profile.front_range);
        self.back = FrequencyTable::from_draws(report.records(), Zone::Back, profile.back_range);
        self.valid_lines = report.accepted();
        self.batch = None;
        self.final_set = None;
        self.last_error = None;

        log::info!(
            "{} tirages analysés ({}), {} lignes ignorées",
            self.valid_lines,
            profile.name,
            report.rejected()
        );
        Ok(report)
    }

    /// Génère un nouveau lot ; remplace un lot non finalisé.
    pub fn generate(&mut self) -> Result<&CandidateBatch> {
        if !self.is_analyzed() {
            return Err(self.fail(SessionError::PrematureGenerate));
        }
        if self.final_set.is_some() {
            return Err(self.fail(SessionError::DuplicateGenerate));
        }

        let batch = generate_batch(self.profile(), &self.front, &self.back, &mut self.source);
        self.last_error = None;
        Ok(&*self.batch.insert(batch))
    }

    pub fn finalize(&mut self) -> Result<&FinalSet> {
        if self.final_set.is_some() {
            return Err(self.fail(SessionError::DuplicateGenerate));
        }
        let Some(batch) = &self.batch else {
            return Err(self.fail(SessionError::PrematureFinalize));
        };

        let final_set = synthesize(self.profile(), batch, &self.front, &self.back, &mut self.source);
        self.last_error = None;
        Ok(&*self.final_set.insert(final_set))
    }

    /// Efface le lot et la grille finale ; les fréquences sont conservées.
    pub fn reset_generation(&mut self) {
        self.batch = None;
        self.final_set = None;
        self.last_error = None;
    }

    /// Remet la session à zéro pour le profil courant.
    pub fn clear(&mut self) {
        let p = self.profile();
        self.front = FrequencyTable::new(p.front_range);
        self.back = FrequencyTable::new(p.back_range);
        self.valid_lines = 0;
        self.reset_generation();
    }

    pub fn switch_profile(&mut self, key: ProfileKey) {
        if self.profile == key {
            return;
        }
        self.profile = key;
        self.clear();
        log::debug!("Profil actif : {}", self.profile().name);
    }

    pub fn is_analyzed(&self) -> bool {
        self.valid_lines > 0
    }

    pub fn is_batch_ready(&self) -> bool {
        self.batch.is_some()
    }

    pub fn is_final_ready(&self) -> bool {
        self.final_set.is_some()
    }

    pub fn valid_lines(&self) -> usize {
        self.valid_lines
    }

    pub fn frequencies(&self, zone: Zone) -> &FrequencyTable {
        match zone {
            Zone::Front => &self.front,
            Zone::Back => &self.back,
        }
    }

    pub fn stats(&self, zone: Zone) -> Vec<NumberStats> {
        self.frequencies(zone).stats()
    }

    pub fn batch(&self) -> Option<&CandidateBatch> {
        self.batch.as_ref()
    }

    pub fn final_set(&self) -> Option<&FinalSet> {
        self.final_set.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BATCH_SIZE;
    use crate::random::StdRandom;

    const DLT_HISTORY: &str = "\
03 12 18 25 33 05 11
01,07,12,18,30,02,05
99,12,18,25,33,05,11
05 09 12 22 35 05 12
";

    fn session() -> Session<StdRandom> {
        Session::new(ProfileKey::Dlt, StdRandom::new(Some(42)))
    }

    #[test]
    fn test_fresh_session_flags() {
        let s = session();
        assert!(!s.is_analyzed());
        assert!(!s.is_batch_ready());
        assert!(!s.is_final_ready());
        assert!(s.batch().is_none());
        assert!(s.last_error().is_none());
        assert_eq!(s.frequencies(Zone::Front).total(), 0);
    }

    #[test]
    fn test_analyze_counts() {
        let mut s = session();
        let report = s.analyze(DLT_HISTORY).unwrap();
        assert_eq!(report.accepted(), 3);
        assert_eq!(report.rejected(), 1);
        assert!(s.is_analyzed());
        assert_eq!(s.valid_lines(), 3);
        assert_eq!(s.frequencies(Zone::Front).total(), 15);
        assert_eq!(s.frequencies(Zone::Back).total(), 6);
        assert_eq!(s.frequencies(Zone::Front).get(12), 3);
        assert_eq!(s.frequencies(Zone::Back).get(5), 3);
        assert_eq!(s.stats(Zone::Front).len(), 35);
        assert_eq!(s.stats(Zone::Back).len(), 12);
    }

    #[test]
    fn test_analyze_is_reproducible() {
        let mut s = session();
        s.analyze(DLT_HISTORY).unwrap();
        let first = s.frequencies(Zone::Front).clone();
        s.analyze(DLT_HISTORY).unwrap();
        assert_eq!(s.frequencies(Zone::Front), &first);
    }

    #[test]
    fn test_analyze_errors_leave_state() {
        let mut s = session();
        s.analyze(DLT_HISTORY).unwrap();
        let before = s.frequencies(Zone::Front).clone();

        assert_eq!(s.analyze("  \n ").unwrap_err(), SessionError::EmptyInput);
        assert!(s.last_error().is_some());

        let err = s.analyze("99,12,18,25,33,05,11").unwrap_err();
        assert!(matches!(err, SessionError::NoValidLines { .. }));
        assert_eq!(s.last_error(), Some(err.to_string().as_str()));
        assert_eq!(s.frequencies(Zone::Front), &before);
        assert!(s.is_analyzed());
    }

    #[test]
    fn test_generate_before_analyze() {
        let mut s = session();
        assert_eq!(s.generate().unwrap_err(), SessionError::PrematureGenerate);
        assert!(!s.is_batch_ready());
    }

    #[test]
    fn test_finalize_before_generate() {
        let mut s = session();
        s.analyze(DLT_HISTORY).unwrap();
        assert_eq!(s.finalize().unwrap_err(), SessionError::PrematureFinalize);
        assert!(!s.is_final_ready());
    }

    #[test]
    fn test_full_cycle() {
        let mut s = session();
        s.analyze(DLT_HISTORY).unwrap();

        let batch = s.generate().unwrap();
        assert_eq!(batch.sets().len(), BATCH_SIZE);
        assert!(s.is_batch_ready());

        let final_set = s.finalize().unwrap().clone();
        assert_eq!(final_set.front.numbers.len(), 5);
        assert_eq!(final_set.back.numbers.len(), 2);
        assert!(s.is_final_ready());
        assert!(s.last_error().is_none());

        // Une seule grille finale par lot
        assert_eq!(s.finalize().unwrap_err(), SessionError::DuplicateGenerate);
        assert_eq!(s.generate().unwrap_err(), SessionError::DuplicateGenerate);
        assert_eq!(s.final_set(), Some(&final_set));

        s.reset_generation();
        assert!(!s.is_batch_ready());
        assert!(!s.is_final_ready());
        assert!(s.is_analyzed());
        assert!(s.last_error().is_none());
        assert!(s.generate().is_ok());
    }

    #[test]
    fn test_regenerate_replaces_unfinalized_batch() {
        let mut s = session();
        s.analyze(DLT_HISTORY).unwrap();
        s.generate().unwrap();
        assert!(s.generate().is_ok());
        assert_eq!(s.batch().map(|b| b.sets().len()), Some(BATCH_SIZE));
    }

    #[test]
    fn test_analyze_drops_batch_and_final() {
        let mut s = session();
        s.analyze(DLT_HISTORY).unwrap();
        s.generate().unwrap();
        s.finalize().unwrap();
        s.analyze(DLT_HISTORY).unwrap();
        assert!(!s.is_batch_ready());
        assert!(!s.is_final_ready());
    }

    #[test]
    fn test_switch_profile_clears_everything() {
        let mut s = session();
        s.analyze(DLT_HISTORY).unwrap();
        s.generate().unwrap();

        s.switch_profile(ProfileKey::Ssq);
        assert_eq!(s.profile_key(), ProfileKey::Ssq);
        assert!(!s.is_analyzed());
        assert!(!s.is_batch_ready());
        assert_eq!(s.frequencies(Zone::Front).range(), 33);
        assert_eq!(s.frequencies(Zone::Back).range(), 16);
        assert_eq!(s.frequencies(Zone::Front).total(), 0);
    }

    #[test]
    fn test_switch_to_same_profile_is_noop() {
        let mut s = session();
        s.analyze(DLT_HISTORY).unwrap();
        s.switch_profile(ProfileKey::Dlt);
        assert!(s.is_analyzed());
    }

    #[test]
    fn test_clear() {
        let mut s = session();
        s.analyze(DLT_HISTORY).unwrap();
        s.generate().unwrap();
        s.clear();
        assert!(!s.is_analyzed());
        assert!(!s.is_batch_ready());
        assert_eq!(s.frequencies(Zone::Back).total(), 0);
        assert_eq!(s.generate().unwrap_err(), SessionError::PrematureGenerate);
    }
}
