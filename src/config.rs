//! Loading engine configuration (generator limits, optional fixed seed) from TOML.
//!
//! See `EngineConfig` and `GeneratorCfg` for expected schema. Every field is
//! optional; a missing file or section means defaults.

use serde::Deserialize;
use tracing::{error, info};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct EngineConfig {
  #[serde(default)]
  pub generator: GeneratorCfg,
}

/// `[generator]` table.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GeneratorCfg {
  /// Used when a request omits `count`.
  pub default_count: usize,
  /// Hard cap on requested batch size.
  pub max_count: usize,
  /// Per-slot generation attempts before the slot is skipped.
  pub max_attempts: u32,
  /// Reproducible batches when set; otherwise the wall clock seeds each call.
  pub fixed_seed: Option<u64>,
}

impl Default for GeneratorCfg {
  fn default() -> Self {
    Self { default_count: 10, max_count: 50, max_attempts: 20, fixed_seed: None }
  }
}

/// Parse a TOML document into `EngineConfig`.
pub fn parse_engine_config(text: &str) -> Result<EngineConfig, toml::de::Error> {
  toml::from_str::<EngineConfig>(text)
}

/// Attempt to load `EngineConfig` from MATHIFY_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_engine_config_from_env() -> Option<EngineConfig> {
  let path = std::env::var("MATHIFY_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_engine_config(&s) {
      Ok(cfg) => {
        info!(target: "mathify_backend", %path, "Loaded engine config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "mathify_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "mathify_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
