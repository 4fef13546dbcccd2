use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tirage_core::profile::ProfileKey;

pub const DEFAULT_CONFIG_FILE: &str = "tirage.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub profile: ProfileKey,
    pub seed: Option<u64>,
}

impl CliConfig {
    /// Les options de la ligne de commande priment sur le fichier.
    pub fn merge(&self, profile: Option<ProfileKey>, seed: Option<u64>) -> (ProfileKey, Option<u64>) {
        (profile.unwrap_or(self.profile), seed.or(self.seed))
    }
}

pub fn load_config(path: &Path) -> Result<CliConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let config: CliConfig = serde_json::from_str(&json)
        .with_context(|| format!("JSON invalide dans {}", path.display()))?;
    Ok(config)
}

/// Fichier explicite obligatoire ; fichier par défaut facultatif.
pub fn resolve_config(explicit: Option<&Path>) -> Result<CliConfig> {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                log::debug!("Configuration lue depuis {DEFAULT_CONFIG_FILE}");
                load_config(default)
            } else {
                Ok(CliConfig::default())
            }
        }
    }
}
