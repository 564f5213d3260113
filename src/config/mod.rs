//! Tax regime configuration for the PAYE engine.
//!
//! A regime bundles the relief parameters and the progressive band table.
//! The statutory regime is built in; an equivalent one can be loaded from YAML.
//!
//! # Example
//!
//! ```no_run
//! use paye_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/pita_2011").unwrap();
//! println!("Loaded regime: {}", config.regime().metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BandTable, RegimeMetadata, ReliefConfig, TaxBand, TaxRegime};
