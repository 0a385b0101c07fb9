use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use symbolect_catalog::catalog_stats;
use symbolect_engine::{decompress, EngineConfig, NoJitter, Stage, SymbolectEngine};
use symbolect_protocol::PipelineResult;

#[derive(Parser)]
#[command(name = "symbolect")]
#[command(about = "Compress natural-language feature descriptions into symbols", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Engine configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress text into the iconographic representation
    Compress {
        /// Input text; read from stdin when omitted
        text: Option<String>,

        /// Emit the full pipeline result as JSON
        #[arg(long)]
        json: bool,

        /// Announce each pipeline stage with the interactive pacing
        #[arg(long)]
        staged: bool,

        /// Override the minimum input length (characters)
        #[arg(long)]
        min_chars: Option<usize>,

        /// Disable the confidence jitter for reproducible output
        #[arg(long)]
        deterministic: bool,
    },

    /// Expand a compressed representation back into keywords
    Decompress {
        /// Compressed representation; read from stdin when omitted
        compressed: Option<String>,
    },

    /// Print symbol catalog statistics
    Stats {
        /// Emit the statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Commands::Compress {
            text,
            json,
            staged,
            min_chars,
            deterministic,
        } => {
            let mut config = config;
            if let Some(min_chars) = min_chars {
                config.min_input_chars = min_chars;
            }
            let mut engine = SymbolectEngine::with_config(config);
            if deterministic {
                engine = engine.with_jitter(Box::new(NoJitter));
            }

            let input = read_arg_or_stdin(text)?;
            let result = if staged {
                engine
                    .compress_staged(&input, |stage: Stage| {
                        eprintln!("[{}]", stage.as_str());
                    })
                    .await
            } else {
                engine.compress(&input)
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&input, &result);
            }
        }
        Commands::Decompress { compressed } => {
            let input = read_arg_or_stdin(compressed)?;
            println!("{}", decompress(input.trim()));
        }
        Commands::Stats { json } => {
            let stats = catalog_stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("symbols:          {}", stats.total_symbols);
                for category in &stats.categories {
                    println!("  {:<15} {}", category.category.as_str(), category.count);
                }
                println!("flow patterns:    {}", stats.flow_patterns);
                println!("contextual rules: {}", stats.contextual_rules);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn read_arg_or_stdin(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading input from stdin")?;
            Ok(buffer.trim().to_string())
        }
    }
}

fn print_result(input: &str, result: &PipelineResult) {
    if result.is_empty() {
        println!("no symbols detected");
        return;
    }

    println!("{}", result.compressed);
    println!();
    for symbol in &result.symbols {
        println!(
            "  {}  {} [{}] {:.0}%",
            symbol.icon,
            symbol.meaning,
            symbol.category.as_str(),
            symbol.confidence * 100.0
        );
    }
    println!();
    println!(
        "{} chars -> {} chars ({}% reduction), {} symbols, {} categories, confidence {:.0}%",
        result.stats.original_length,
        result.stats.compressed_length,
        result.stats.compression_ratio,
        result.stats.symbol_count,
        result.stats.category_count,
        result.confidence * 100.0
    );
    log::debug!("input: {input}");
}
