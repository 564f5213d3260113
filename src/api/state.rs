//! Application state for the PAYE engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::TaxEngine;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the engine built from the loaded regime. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<TaxEngine>,
}

impl AppState {
    /// Creates a new application state from a loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            engine: Arc::new(TaxEngine::new(config.into_regime())),
        }
    }

    /// Returns the engine shared by all handlers.
    pub fn engine(&self) -> &TaxEngine {
        &self.engine
    }

    /// Code of the regime the engine applies.
    pub fn regime_code(&self) -> &str {
        &self.engine.regime().metadata().code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_the_engine() {
        let state = AppState::new(ConfigLoader::statutory());
        let clone = state.clone();
        assert!(std::ptr::eq(state.engine(), clone.engine()));
        assert_eq!(clone.regime_code(), "NG-PITA-2011");
    }
}
