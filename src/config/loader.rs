//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a tax regime
//! from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{BandTable, RegimeMetadata, ReliefConfig, TaxRegime};

/// Loads and provides access to a tax regime.
///
/// # Directory Structure
///
/// ```text
/// config/pita_2011/
/// ├── regime.yaml   # Regime metadata
/// ├── reliefs.yaml  # CRA, NHF and annualization parameters
/// └── bands.yaml    # Progressive band table
/// ```
///
/// # Example
///
/// ```no_run
/// use paye_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/pita_2011")?;
/// println!("Loaded regime: {}", loader.regime().metadata().name);
/// # Ok::<(), paye_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    regime: TaxRegime,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any file is missing, contains invalid YAML, or if
    /// the band table cannot be applied progressively.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<RegimeMetadata>(&path.join("regime.yaml"))?;
        let reliefs = Self::load_yaml::<ReliefConfig>(&path.join("reliefs.yaml"))?;
        let bands = Self::load_yaml::<BandTable>(&path.join("bands.yaml"))?;

        let regime = TaxRegime::new(metadata, reliefs, bands)?;
        info!(
            regime = %regime.metadata().code,
            bands = regime.bands().bands.len(),
            "Loaded tax regime"
        );

        Ok(Self { regime })
    }

    /// Wraps the built-in statutory regime.
    pub fn statutory() -> Self {
        Self {
            regime: TaxRegime::statutory(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded regime.
    pub fn regime(&self) -> &TaxRegime {
        &self.regime
    }

    /// Consumes the loader, returning the regime.
    pub fn into_regime(self) -> TaxRegime {
        self.regime
    }
}
