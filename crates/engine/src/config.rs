use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::history::HISTORY_CAPACITY;
use crate::pipeline::Stage;

/// Engine tunables, loadable from a TOML file. Every field has a default
/// so an empty file (or no file at all) yields a working engine.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Inputs shorter than this (in characters) short-circuit to the
    /// empty result without running any stage.
    pub min_input_chars: usize,

    /// Capacity of the bounded compression history.
    pub history_capacity: usize,

    /// Per-stage delays for the staged (UI-facing) compression path.
    /// Ignored by the synchronous path.
    pub stage_delays: StageDelays,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_input_chars: 10,
            history_capacity: HISTORY_CAPACITY,
            stage_delays: StageDelays::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}

/// Milliseconds slept before entering each stage of the staged path.
/// Defaults mirror the original UI pacing; zero them for synchronous-like
/// behavior.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct StageDelays {
    pub analyzing_ms: u64,
    pub detecting_ms: u64,
    pub recognizing_ms: u64,
    pub enhancing_ms: u64,
    pub optimizing_ms: u64,
}

impl Default for StageDelays {
    fn default() -> Self {
        Self {
            analyzing_ms: 0,
            detecting_ms: 500,
            recognizing_ms: 700,
            enhancing_ms: 600,
            optimizing_ms: 400,
        }
    }
}

impl StageDelays {
    pub const ZERO: StageDelays = StageDelays {
        analyzing_ms: 0,
        detecting_ms: 0,
        recognizing_ms: 0,
        enhancing_ms: 0,
        optimizing_ms: 0,
    };

    #[must_use]
    pub fn before(&self, stage: Stage) -> Duration {
        let ms = match stage {
            Stage::Idle => 0,
            Stage::Analyzing => self.analyzing_ms,
            Stage::DetectingSymbols => self.detecting_ms,
            Stage::RecognizingPatterns => self.recognizing_ms,
            Stage::EnhancingContext => self.enhancing_ms,
            Stage::OptimizingCompression => self.optimizing_ms,
        };
        Duration::from_millis(ms)
    }
}
