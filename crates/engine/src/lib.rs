mod config;
mod context;
mod debounce;
mod decompress;
mod detect;
mod error;
mod history;
mod jitter;
mod patterns;
mod pipeline;
mod rank;
mod scorer;

pub use config::{EngineConfig, StageDelays};
pub use debounce::{Debouncer, DEFAULT_QUIET_PERIOD};
pub use decompress::decompress;
pub use error::{ConfigError, EngineError, Result};
pub use history::{CompressionHistory, HISTORY_CAPACITY};
pub use jitter::{JitterSource, NoJitter, RandomJitter};
pub use pipeline::{Stage, SymbolectEngine};
pub use scorer::ICON_SEPARATOR;
