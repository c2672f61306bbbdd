//! Game configuration: event odds and name/flavor pools
//!
//! Configuration is plain data deserialized from JSON. Every field has a
//! default, so an empty object (`{}`) yields the stock game balance.
//! A process-wide copy can be installed once at startup and shared by every
//! session (see [`install_global`]).

mod odds;
mod pools;

pub use odds::*;
pub use pools::*;

use crate::error::{LifeSimError, Result};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Complete game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub odds: EventOdds,
    pub pools: NamePools,
}

impl GameConfig {
    /// Parse and validate a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)
            .map_err(|e| LifeSimError::DeserializationError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.odds.validate()?;
        self.pools.validate()
    }
}

/// Global configuration, installed once and read by every session
static GLOBAL_CONFIG: Lazy<RwLock<Option<Arc<GameConfig>>>> = Lazy::new(|| RwLock::new(None));

/// Install (or replace) the process-wide configuration
pub fn install_global(config: GameConfig) -> Result<()> {
    config.validate()?;
    let mut guard = GLOBAL_CONFIG.write();
    *guard = Some(Arc::new(config));
    tracing::info!("game config installed");
    Ok(())
}

/// Check if a global config has been installed
pub fn is_global_installed() -> bool {
    GLOBAL_CONFIG.read().is_some()
}

/// The installed configuration, or the stock defaults
pub fn global() -> Arc<GameConfig> {
    GLOBAL_CONFIG
        .read()
        .as_ref()
        .cloned()
        .unwrap_or_else(|| Arc::new(GameConfig::default()))
}
