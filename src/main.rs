use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use rewards_engine::application::engine::RewardEngine;
use rewards_engine::application::strategy::Strategy;
use rewards_engine::interfaces::csv::transaction_reader::TransactionReader;
use rewards_engine::interfaces::json::config_reader::ConfigReader;
use rewards_engine::interfaces::json::request_reader::RequestReader;
use rewards_engine::interfaces::json::response_writer::ResponseWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input transactions file; `.csv` is read as CSV, anything else as a
    /// JSON mapping of identifier to transaction
    input: PathBuf,

    /// Engine configuration JSON (categories, catch-all, rule catalog).
    /// Defaults to the built-in reference configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Period maximization strategy
    #[arg(long, value_enum, default_value = "greedy")]
    strategy: StrategyArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Fast precedence pass, validated for the reference catalog only
    Greedy,
    /// Exhaustive backtracking; works with any catalog
    Exhaustive,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Greedy => Strategy::Greedy,
            StrategyArg::Exhaustive => Strategy::Exhaustive,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let engine = if let Some(path) = &cli.config {
        let file = File::open(path).into_diagnostic()?;
        let (taxonomy, catalog) = ConfigReader::new(file).config().into_diagnostic()?;
        RewardEngine::new(taxonomy, catalog)
    } else {
        RewardEngine::with_reference_config()
    };

    let file = File::open(&cli.input).into_diagnostic()?;
    let batch = match cli.input.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => TransactionReader::new(file).transactions().into_diagnostic()?,
        _ => RequestReader::new(file).transactions().into_diagnostic()?,
    };

    let per_transaction = engine.maximize_per_transaction(&batch);
    let month = engine
        .maximize_for_period(&batch, cli.strategy.into())
        .into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = ResponseWriter::new(stdout.lock());
    writer.write(&per_transaction, &month).into_diagnostic()?;

    Ok(())
}
