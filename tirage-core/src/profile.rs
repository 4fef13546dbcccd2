use serde::{Deserialize, Serialize};

/// Règles fixes d'une variante de loterie.
#[derive(Debug, Clone, PartialEq)]
pub struct GameProfile {
    pub key: ProfileKey,
    pub name: &'static str,
    pub front_range: u8,
    pub front_count: usize,
    pub back_range: u8,
    pub back_count: usize,
    pub front_high_freq_required: usize,
    pub back_high_freq_required: usize,
    pub cold_threshold: f64,
    /// Informatif : profondeur d'historique conseillée.
    pub cold_periods: u32,
    pub official_url: &'static str,
    pub example_format: &'static str,
}

impl GameProfile {
    pub fn total_count(&self) -> usize {
        self.front_count + self.back_count
    }
}

pub static DLT: GameProfile = GameProfile {
    key: ProfileKey::Dlt,
    name: "Da Le Tou",
    front_range: 35,
    front_count: 5,
    back_range: 12,
    back_count: 2,
    front_high_freq_required: 3,
    back_high_freq_required: 1,
    cold_threshold: 0.08,
    cold_periods: 100,
    official_url: "https://www.lottery.gov.cn/kj/kjlb.html?dlt",
    example_format: "03 12 18 25 33 05 11 ou 03,12,18,25,33,05,11",
};

pub static SSQ: GameProfile = GameProfile {
    key: ProfileKey::Ssq,
    name: "Shuang Se Qiu",
    front_range: 33,
    front_count: 6,
    back_range: 16,
    back_count: 1,
    front_high_freq_required: 4,
    back_high_freq_required: 0,
    cold_threshold: 0.08,
    cold_periods: 50,
    official_url: "https://m.17500.cn/kj-m/list-ssq.html",
    example_format: "01 11 15 25 26 33 16 ou 01,11,15,25,26,33,16",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKey {
    #[default]
    Dlt,
    Ssq,
}

impl ProfileKey {
    pub const ALL: [ProfileKey; 2] = [ProfileKey::Dlt, ProfileKey::Ssq];

    pub fn profile(&self) -> &'static GameProfile {
        match self {
            ProfileKey::Dlt => &DLT,
            ProfileKey::Ssq => &SSQ,
        }
    }
}

impl std::fmt::Display for ProfileKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileKey::Dlt => write!(f, "dlt"),
            ProfileKey::Ssq => write!(f, "ssq"),
        }
    }
}

pub fn all_profiles() -> Vec<&'static GameProfile> {
    ProfileKey::ALL.iter().map(|k| k.profile()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dlt_profile() {
        let p = ProfileKey::Dlt.profile();
        assert_eq!(p.front_range, 35);
        assert_eq!(p.front_count, 5);
        assert_eq!(p.back_range, 12);
        assert_eq!(p.back_count, 2);
        assert_eq!(p.front_high_freq_required, 3);
        assert_eq!(p.back_high_freq_required, 1);
        assert_eq!(p.total_count(), 7);
    }

    #[test]
    fn test_ssq_profile() {
        let p = ProfileKey::Ssq.profile();
        assert_eq!(p.front_range, 33);
        assert_eq!(p.front_count, 6);
        assert_eq!(p.back_range, 16);
        assert_eq!(p.back_count, 1);
        assert_eq!(p.back_high_freq_required, 0);
        assert!((p.cold_threshold - 0.08).abs() < 1e-12);
    }

    #[test]
    fn test_registry_keys_match() {
        for key in ProfileKey::ALL {
            assert_eq!(key.profile().key, key);
        }
        assert_eq!(all_profiles().len(), 2);
    }

    #[test]
    fn test_profile_key_serde() {
        let json = serde_json::to_string(&ProfileKey::Ssq).unwrap();
        assert_eq!(json, "\"ssq\"");
        let key: ProfileKey = serde_json::from_str("\"dlt\"").unwrap();
        assert_eq!(key, ProfileKey::Dlt);
    }
}
