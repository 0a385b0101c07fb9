use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::SystemTime;

use symbolect_protocol::{truncate_preview, HistoryEntry, PipelineResult};

use crate::config::EngineConfig;
use crate::context::enhance_context;
use crate::detect::{detect_direct, StageOutput};
use crate::error::{EngineError, Result};
use crate::history::CompressionHistory;
use crate::jitter::{JitterSource, RandomJitter};
use crate::patterns::detect_flows;
use crate::rank::dedup_and_rank;
use crate::scorer::{aggregate_confidence, compressed_representation, compression_stats};

/// Pipeline stages, advanced strictly in sequence. Exposed for
/// observability only; no branching hangs off the current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Stage {
    Idle = 0,
    Analyzing = 1,
    DetectingSymbols = 2,
    RecognizingPatterns = 3,
    EnhancingContext = 4,
    OptimizingCompression = 5,
}

impl Stage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Stage::Idle => "Idle",
            Stage::Analyzing => "Analyzing",
            Stage::DetectingSymbols => "DetectingSymbols",
            Stage::RecognizingPatterns => "RecognizingPatterns",
            Stage::EnhancingContext => "EnhancingContext",
            Stage::OptimizingCompression => "OptimizingCompression",
        }
    }

    const fn from_u8(raw: u8) -> Stage {
        match raw {
            1 => Stage::Analyzing,
            2 => Stage::DetectingSymbols,
            3 => Stage::RecognizingPatterns,
            4 => Stage::EnhancingContext,
            5 => Stage::OptimizingCompression,
            _ => Stage::Idle,
        }
    }
}

/// The pipeline orchestrator: sequences the producing stages, merges their
/// output through dedup/rank and scoring, and appends each successful run
/// to the bounded history.
///
/// Stateless apart from the history; `compress` takes `&self` and is safe
/// under concurrent invocation.
pub struct SymbolectEngine {
    config: EngineConfig,
    jitter: Box<dyn JitterSource>,
    stage: AtomicU8,
    history: CompressionHistory,
}

impl SymbolectEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let history = CompressionHistory::new(config.history_capacity);
        Self {
            config,
            jitter: Box::new(RandomJitter),
            stage: AtomicU8::new(Stage::Idle as u8),
            history,
        }
    }

    /// Replace the jitter source. Tests use [`crate::NoJitter`] for
    /// deterministic confidences.
    #[must_use]
    pub fn with_jitter(mut self, jitter: Box<dyn JitterSource>) -> Self {
        self.jitter = jitter;
        self
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Observability hook: which stage the engine last entered.
    #[must_use]
    pub fn current_stage(&self) -> Stage {
        Stage::from_u8(self.stage.load(Ordering::Acquire))
    }

    /// Snapshot of the bounded history, most recent first.
    #[must_use]
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.snapshot()
    }

    /// Compress natural-language input into the symbol representation.
    /// Never fails: too-short input and stage failures both degrade to
    /// [`PipelineResult::empty`].
    pub fn compress(&self, text: &str) -> PipelineResult {
        self.compress_observed(text, |_| {})
    }

    /// Like [`compress`](Self::compress), invoking the advisory callback
    /// before each of the five stages.
    pub fn compress_observed(
        &self,
        text: &str,
        mut on_stage: impl FnMut(Stage),
    ) -> PipelineResult {
        if self.too_short(text) {
            return PipelineResult::empty();
        }

        let outcome = self.run_stages(text, &mut on_stage);
        self.settle(text, outcome)
    }

    /// Staged variant for interactive hosts: sleeps the configured delay
    /// before each stage so the advisory callback can surface progress.
    /// The algorithmic contract is identical to [`compress`](Self::compress):
    /// a failing stage (or callback) degrades to the empty result here too.
    pub async fn compress_staged(
        &self,
        text: &str,
        mut on_stage: impl FnMut(Stage),
    ) -> PipelineResult {
        if self.too_short(text) {
            return PipelineResult::empty();
        }

        let delays = self.config.stage_delays;
        let outcome: Result<PipelineResult> = async {
            tokio::time::sleep(delays.before(Stage::Analyzing)).await;
            self.run_step(Stage::Analyzing, &mut on_stage, || ())?;

            tokio::time::sleep(delays.before(Stage::DetectingSymbols)).await;
            let merged = self.run_step(Stage::DetectingSymbols, &mut on_stage, || {
                detect_direct(text, self.jitter.as_ref())
            })?;

            tokio::time::sleep(delays.before(Stage::RecognizingPatterns)).await;
            let merged = merged.merge(self.run_step(
                Stage::RecognizingPatterns,
                &mut on_stage,
                || detect_flows(text, self.jitter.as_ref()),
            )?);

            tokio::time::sleep(delays.before(Stage::EnhancingContext)).await;
            let merged = merged.merge(self.run_step(
                Stage::EnhancingContext,
                &mut on_stage,
                || enhance_context(text),
            )?);

            tokio::time::sleep(delays.before(Stage::OptimizingCompression)).await;
            self.run_step(Stage::OptimizingCompression, &mut on_stage, || {
                self.finalize(text, merged)
            })
        }
        .await;

        self.settle(text, outcome)
    }

    fn run_stages(
        &self,
        text: &str,
        on_stage: &mut dyn FnMut(Stage),
    ) -> Result<PipelineResult> {
        self.run_step(Stage::Analyzing, on_stage, || ())?;

        let merged = self.run_step(Stage::DetectingSymbols, on_stage, || {
            detect_direct(text, self.jitter.as_ref())
        })?;

        let merged = merged.merge(self.run_step(Stage::RecognizingPatterns, on_stage, || {
            detect_flows(text, self.jitter.as_ref())
        })?);

        let merged = merged.merge(self.run_step(Stage::EnhancingContext, on_stage, || {
            enhance_context(text)
        })?);

        self.run_step(Stage::OptimizingCompression, on_stage, || {
            self.finalize(text, merged)
        })
    }

    /// Run one stage: advisory callback first, then the stage work, both
    /// guarded. A panic in either becomes a [`EngineError::StageFailure`]
    /// so no failure can escape the compression entry points.
    fn run_step<T>(
        &self,
        stage: Stage,
        on_stage: &mut dyn FnMut(Stage),
        work: impl FnOnce() -> T,
    ) -> Result<T> {
        catch_unwind(AssertUnwindSafe(|| {
            on_stage(stage);
            self.set_stage(stage);
            work()
        }))
        .map_err(|payload| EngineError::StageFailure {
            stage: stage.as_str(),
            message: panic_message(payload.as_ref()),
        })
    }

    /// Common tail of both entry points: reset to Idle, record successes,
    /// degrade failures to the empty sentinel.
    fn settle(&self, text: &str, outcome: Result<PipelineResult>) -> PipelineResult {
        self.set_stage(Stage::Idle);
        match outcome {
            Ok(result) => {
                self.record(text, &result);
                result
            }
            Err(err) => {
                log::error!("compression failed: {err}");
                PipelineResult::empty()
            }
        }
    }

    fn finalize(&self, text: &str, merged: StageOutput) -> PipelineResult {
        let ranked = dedup_and_rank(merged.symbols);
        let compressed = compressed_representation(&ranked);
        let stats = compression_stats(text, &compressed, &ranked);
        let confidence = aggregate_confidence(merged.weight_sum, ranked.len());
        let flows = ranked.iter().filter(|s| s.is_flow).cloned().collect();

        log::debug!(
            "compressed {} chars into {} symbols (ratio {}%)",
            stats.original_length,
            stats.symbol_count,
            stats.compression_ratio
        );

        PipelineResult {
            compressed,
            symbols: ranked,
            confidence,
            stats,
            flows,
        }
    }

    fn too_short(&self, text: &str) -> bool {
        let len = text.chars().count();
        if len < self.config.min_input_chars {
            log::debug!(
                "input of {len} chars below minimum {}; skipping pipeline",
                self.config.min_input_chars
            );
            return true;
        }
        false
    }

    fn set_stage(&self, stage: Stage) {
        self.stage.store(stage as u8, Ordering::Release);
    }

    fn record(&self, text: &str, result: &PipelineResult) {
        self.history.push(HistoryEntry {
            input: truncate_preview(text),
            symbols: result.symbols.clone(),
            compressed: result.compressed.clone(),
            timestamp: SystemTime::now(),
            confidence: result.confidence,
        });
    }
}

impl Default for SymbolectEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jitter::NoJitter;
    use pretty_assertions::assert_eq;

    fn test_engine() -> SymbolectEngine {
        SymbolectEngine::new().with_jitter(Box::new(NoJitter))
    }

    #[test]
    fn short_input_runs_no_stage() {
        let engine = test_engine();
        let mut seen = Vec::new();
        let result = engine.compress_observed("too short", &mut |stage| seen.push(stage));
        assert!(result.is_empty());
        assert!(seen.is_empty());
        assert!(engine.history().is_empty());
    }

    #[test]
    fn observer_sees_all_five_stages_in_order() {
        let engine = test_engine();
        let mut seen = Vec::new();
        engine.compress_observed("build a login form for users", &mut |stage| {
            seen.push(stage)
        });
        assert_eq!(
            seen,
            vec![
                Stage::Analyzing,
                Stage::DetectingSymbols,
                Stage::RecognizingPatterns,
                Stage::EnhancingContext,
                Stage::OptimizingCompression,
            ]
        );
    }

    #[test]
    fn engine_returns_to_idle_after_compression() {
        let engine = test_engine();
        engine.compress("build a login form for users");
        assert_eq!(engine.current_stage(), Stage::Idle);
    }

    #[test]
    fn successful_run_is_recorded_in_history() {
        let engine = test_engine();
        let result = engine.compress("build a login form for users");
        let history = engine.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].compressed, result.compressed);
        assert_eq!(history[0].confidence, result.confidence);
    }

    #[test]
    fn callback_panic_degrades_to_empty_result_and_idle() {
        let engine = test_engine();
        let result = engine.compress_observed("build a login form for users", |stage| {
            if stage == Stage::OptimizingCompression {
                panic!("callback exploded");
            }
        });
        assert!(result.is_empty());
        assert_eq!(result.confidence, 0.0);
        assert_eq!(engine.current_stage(), Stage::Idle);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn early_stage_panic_also_degrades_cleanly() {
        let engine = test_engine();
        let result = engine.compress_observed("build a login form for users", |stage| {
            if stage == Stage::Analyzing {
                panic!("callback exploded");
            }
        });
        assert!(result.is_empty());
        assert_eq!(engine.current_stage(), Stage::Idle);
    }

    #[test]
    fn stage_names_match_advisory_labels() {
        assert_eq!(Stage::Analyzing.as_str(), "Analyzing");
        assert_eq!(Stage::OptimizingCompression.as_str(), "OptimizingCompression");
        assert_eq!(Stage::from_u8(3), Stage::RecognizingPatterns);
        assert_eq!(Stage::from_u8(99), Stage::Idle);
    }

    #[tokio::test]
    async fn staged_path_matches_synchronous_result() {
        let mut config = EngineConfig::default();
        config.stage_delays = crate::config::StageDelays::ZERO;
        let engine = SymbolectEngine::with_config(config).with_jitter(Box::new(NoJitter));

        let sync = engine.compress("implement user authentication with login form");
        let mut seen = 0;
        let staged = engine
            .compress_staged("implement user authentication with login form", |_| {
                seen += 1
            })
            .await;
        assert_eq!(sync, staged);
        assert_eq!(seen, 5);
    }

    #[tokio::test]
    async fn staged_callback_panic_degrades_to_empty_result_and_idle() {
        let mut config = EngineConfig::default();
        config.stage_delays = crate::config::StageDelays::ZERO;
        let engine = SymbolectEngine::with_config(config).with_jitter(Box::new(NoJitter));

        let result = engine
            .compress_staged("build a login form for users", |stage| {
                if stage == Stage::OptimizingCompression {
                    panic!("callback exploded");
                }
            })
            .await;

        assert!(result.is_empty());
        assert_eq!(engine.current_stage(), Stage::Idle);
        assert!(engine.history().is_empty());
    }
}
