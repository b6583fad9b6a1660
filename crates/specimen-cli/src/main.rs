use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use specimen_generate::{BatchRequest, GenerationEngine, GenerationError};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid option: {0}")]
    InvalidOption(String),
}

#[derive(Parser, Debug)]
#[command(name = "specimen", version, about = "Synthetic test-data generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every generatable type.
    Types,
    /// List categories with their types.
    Categories,
    /// Show the full catalog entry for one type.
    Describe(DescribeArgs),
    /// Generate a batch of values.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct DescribeArgs {
    /// Type id, e.g. `credit_card`.
    type_id: String,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Type id, e.g. `uuid`.
    type_id: String,
    /// Number of values to generate.
    #[arg(long, default_value_t = 5)]
    count: usize,
    /// Prefix applied when the type supports decoration.
    #[arg(long)]
    prefix: Option<String>,
    /// Suffix applied when the type supports decoration.
    #[arg(long)]
    suffix: Option<String>,
    /// Type-specific option as KEY=VALUE; repeatable.
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
    options: Vec<String>,
    /// Print one value per line instead of JSON.
    #[arg(long, default_value_t = false)]
    raw: bool,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let engine = GenerationEngine::new();
    match cli.command {
        Command::Types => print_json(&engine.list_types()),
        Command::Categories => print_json(&engine.list_by_category()),
        Command::Describe(args) => print_json(engine.describe_type(&args.type_id)?),
        Command::Generate(args) => run_generate(&engine, args),
    }
}

fn run_generate(engine: &GenerationEngine, args: GenerateArgs) -> Result<(), CliError> {
    let mut options = Map::new();
    for raw in &args.options {
        let (key, value) = raw.split_once('=').ok_or_else(|| {
            CliError::InvalidOption(format!("expected KEY=VALUE, got '{raw}'"))
        })?;
        options.insert(key.to_string(), parse_scalar(value));
    }

    let request = BatchRequest {
        type_id: args.type_id,
        count: args.count,
        prefix: args.prefix,
        suffix: args.suffix,
        options,
    };
    let values = engine.generate_batch(&request)?;

    if args.raw {
        for value in &values {
            println!("{value}");
        }
        Ok(())
    } else {
        print_json(&values)
    }
}

/// Booleans and integers become typed scalars, everything else a string.
fn parse_scalar(raw: &str) -> Value {
    if let Ok(value) = raw.parse::<bool>() {
        return Value::Bool(value);
    }
    if let Ok(value) = raw.parse::<i64>() {
        return Value::from(value);
    }
    Value::String(raw.to_string())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
