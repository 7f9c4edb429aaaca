//! Application state: engine configuration and the shared question generator.
//!
//! The engine keeps nothing between calls, so state is read-only after startup
//! and shared behind an `Arc` without locks.

use tracing::{info, instrument};

use crate::config::{load_engine_config_from_env, EngineConfig};
use crate::questions::QuestionGenerator;

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: EngineConfig,
    pub generator: QuestionGenerator,
}

impl AppState {
    /// Build state from env: load the optional TOML config, fall back to defaults.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let config = load_engine_config_from_env().unwrap_or_default();
        let state = Self::with_config(config);
        let g = &state.config.generator;
        info!(
            target: "mathify_backend",
            default_count = g.default_count,
            max_count = g.max_count,
            max_attempts = g.max_attempts,
            fixed_seed = ?g.fixed_seed,
            "Question generator configured"
        );
        state
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let generator = QuestionGenerator::from_config(&config.generator);
        Self { config, generator }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}
