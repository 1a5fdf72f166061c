mod command_line_args;
mod transaction_reader;

use command_line_args::parse_args_or_exit;
use command_line_args::Arguments;
use rule_miner::{MinerConfig, RuleMiner};
use transaction_reader::read_transaction_matrix;

use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::process;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn mine(args: &Arguments) -> Result<(), Box<dyn Error>> {
    info!(path = %args.input_file_path, "loading dataset");
    let start = Instant::now();
    let timer = Instant::now();
    let matrix = read_transaction_matrix(&args.input_file_path)?;
    info!(
        transactions = matrix.transaction_count(),
        items = matrix.column_count(),
        seconds = timer.elapsed().as_secs_f64(),
        "dataset loaded"
    );

    let timer = Instant::now();
    let config = MinerConfig::new(args.min_support, args.min_confidence)?;
    let rules = RuleMiner::new(config).mine(&matrix)?;
    info!(
        rules = rules.len(),
        seconds = timer.elapsed().as_secs_f64(),
        "mining complete"
    );

    let mut output: Box<dyn Write> = match &args.output_rules_path {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    writeln!(output, "Antecedent => Consequent,Confidence,Support")?;
    for rule in &rules {
        writeln!(
            output,
            "{},{},{}",
            rule.to_string(&matrix)?,
            rule.confidence(),
            rule.support()
        )?;
    }

    info!(seconds = start.elapsed().as_secs_f64(), "total runtime");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let arguments = parse_args_or_exit();

    if let Err(err) = mine(&arguments) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
