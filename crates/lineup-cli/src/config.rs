//! Optional TOML configuration: budget, default formation and extra formations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use lineup_model::{Formation, FormationCatalog, LineupError, LineupOptions};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("budget must be a finite, non-negative number (got {budget})")]
    InvalidBudget { budget: f64 },
    #[error("formation {name:?} must have at least one slot")]
    EmptyFormation { name: String },
    #[error(transparent)]
    Lineup(#[from] LineupError),
}

/// One `[[formations]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormationConfig {
    pub name: String,
    pub goalkeeper: usize,
    pub defense: usize,
    pub midfield: usize,
    pub forward: usize,
}

impl FormationConfig {
    pub fn to_formation(&self) -> Formation {
        Formation::new(
            self.name.trim(),
            self.goalkeeper,
            self.defense,
            self.midfield,
            self.forward,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineupConfig {
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub default_formation: Option<String>,
    #[serde(default)]
    pub formations: Vec<FormationConfig>,
}

impl LineupConfig {
    pub fn options(&self) -> Result<LineupOptions, ConfigError> {
        let mut options = LineupOptions::default();
        if let Some(budget) = self.budget {
            if !budget.is_finite() || budget < 0.0 {
                return Err(ConfigError::InvalidBudget { budget });
            }
            options = options.with_budget(budget);
        }
        Ok(options)
    }

    /// Built-in catalog with configured formations upserted and the
    /// configured default moved to the front.
    pub fn catalog(&self) -> Result<FormationCatalog, ConfigError> {
        let mut catalog = FormationCatalog::default();
        for entry in &self.formations {
            let formation = entry.to_formation();
            if formation.total_slots() == 0 {
                return Err(ConfigError::EmptyFormation {
                    name: formation.name,
                });
            }
            catalog.upsert(formation);
        }
        if let Some(name) = &self.default_formation {
            catalog.set_default(name.trim())?;
        }
        Ok(catalog)
    }
}

pub fn parse_config(contents: &str, origin: &str) -> Result<LineupConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::Parse {
        origin: origin.to_string(),
        source,
    })
}

pub fn load_config(path: &Path) -> Result<LineupConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents, &path.display().to_string())?;
    info!(
        path = %path.display(),
        formations = config.formations.len(),
        "loaded configuration"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_keeps_defaults() {
        let config = parse_config("", "inline").expect("parse");
        assert_eq!(config, LineupConfig::default());
        assert_eq!(config.options().expect("options").budget, 250.0);
        assert_eq!(
            config.catalog().expect("catalog").names(),
            vec!["532", "433", "442"]
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse_config("budjet = 10.0\n", "inline").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
