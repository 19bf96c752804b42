mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{BatchArgs, Cli, Commands, CommonArgs, ScoreArgs};
use skyscore::config::{self, Config};
use skyscore::core::factors::{BORTLE_SCORES, Factor};
use skyscore::core::report::{self, JsonBatchEntry};
use skyscore::{BatchEntry, Quality, RawSignals, Scorer};
use std::fs;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SKYSCORE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score(args) => run_score(args),
        Commands::Batch(args) => run_batch(args),
        Commands::Tables(args) => run_tables(args),
        Commands::Init(args) => {
            if args.config.is_some() {
                eprintln!(
                    "warning: --config is ignored by `skyscore init`; writing ./{}",
                    config::CONFIG_FILE_NAME
                );
            }

            let path = std::env::current_dir()?.join(config::CONFIG_FILE_NAME);
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn load(common: &CommonArgs) -> Result<(Config, Scorer)> {
    let cwd = std::env::current_dir()?;
    let cfg = config::load_config(common.config.as_deref(), &cwd)?;
    let scorer = Scorer::from_config(&cfg)?;
    Ok((cfg, scorer))
}

fn wants_json(common: &CommonArgs, cfg: &Config) -> bool {
    common.json || cfg.general.json
}

fn run_score(args: ScoreArgs) -> Result<i32> {
    let (cfg, scorer) = load(&args.common)?;
    let signals = RawSignals {
        moon_illumination: args.moon,
        light_pollution_class: args.bortle,
        cloud_cover: args.cloud,
    };

    let result = scorer.score(&signals)?;
    let gate = report::evaluate_gate(&result, cfg.general.min_quality);

    if wants_json(&args.common, &cfg) {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        report::print_human(&result, &gate);
    }

    if gate.ok { Ok(0) } else { Ok(1) }
}

fn run_batch(args: BatchArgs) -> Result<i32> {
    let (cfg, scorer) = load(&args.common)?;
    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("failed reading batch input {}", args.input.display()))?;
    let entries: Vec<BatchEntry> = serde_json::from_str(&content)
        .with_context(|| format!("failed parsing batch input {}", args.input.display()))?;

    let outcomes = scorer.score_batch(&entries);

    if wants_json(&args.common, &cfg) {
        let json: Vec<JsonBatchEntry> = outcomes.iter().map(JsonBatchEntry::from).collect();
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        report::print_batch_human(&outcomes);
    }

    if outcomes.iter().all(|outcome| outcome.is_valid()) {
        Ok(0)
    } else {
        Ok(1)
    }
}

fn run_tables(args: CommonArgs) -> Result<i32> {
    let (cfg, scorer) = load(&args)?;
    let weights = scorer.weights().snapshot();
    let thresholds = scorer.thresholds();

    if wants_json(&args, &cfg) {
        let bortle: serde_json::Map<String, serde_json::Value> = BORTLE_SCORES
            .iter()
            .enumerate()
            .map(|(idx, score)| ((idx + 1).to_string(), (*score).into()))
            .collect();
        let json = serde_json::json!({
            "weights": *weights,
            "bortle": bortle,
            "thresholds": thresholds,
            "aggregation": scorer.aggregator_name(),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(0);
    }

    println!("weights ({})", scorer.aggregator_name());
    for factor in Factor::ALL {
        println!("  {:<16} {:.2}", factor.as_str(), weights.weight(factor));
    }

    println!();
    println!("bortle class -> score");
    for (idx, score) in BORTLE_SCORES.iter().enumerate() {
        println!("  {:<16} {}", idx + 1, score);
    }

    println!();
    println!("thresholds");
    for quality in [Quality::Excellent, Quality::Good, Quality::Fair] {
        println!("  {:<16} >= {}", quality.as_str(), thresholds.lower_bound(quality));
    }

    Ok(0)
}
