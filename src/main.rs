use clap::{Parser, ValueEnum};
use env_logger::Builder;
use log::info;
use log::LevelFilter;

mod error;
mod ledger;
mod loader;
mod output;
mod pnl;

use error::Error;
use ledger::Ledger;
use output::{ConsoleOutput, CsvOutput, JsonOutput, OdsOutput, Output};

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum OutputType {
    Console,
    Csv,
    Json,
    Ods,
}

impl std::fmt::Display for OutputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no values are skipped")
            .get_name()
            .fmt(f)
    }
}

/// Profit and loss report over a trade history
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Ledger file (json), the built-in Kraken history when absent
    #[clap(short, long, value_parser)]
    ledger: Option<String>,

    /// output type
    #[clap(default_value_t = OutputType::Console, short = 't', long, value_parser)]
    output_type: OutputType,

    /// output dir, mandatory except for console output
    #[clap(short, long, value_parser)]
    output_dir: Option<String>,
}

fn get_output_dir(args: &Args) -> Result<&str, Error> {
    args.output_dir.as_deref().ok_or_else(|| {
        Error::new_output(format!(
            "--output-dir is mandatory with output type {}",
            args.output_type
        ))
    })
}

fn main() -> Result<(), Error> {
    //
    // cli arg
    let args = Args::parse();

    //
    // logger
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Warn);
    builder.parse_default_env();
    builder.init();

    //
    // load ledger
    let ledger: Ledger = match &args.ledger {
        Some(filename) => loader::load_ledger(filename)?,
        None => ledger::kraken_history(),
    };
    info!("loading ledger {} done", ledger.name);

    //
    // compute p&l
    let report = pnl::compute_report(&ledger);
    info!(
        "compute report done ({} instruments, {} trades)",
        report.positions.len(),
        report.trade_count()
    );

    //
    // write output
    let mut output: Box<dyn Output + '_> = match args.output_type {
        OutputType::Console => Box::new(ConsoleOutput::new(&report)),
        OutputType::Csv => Box::new(CsvOutput::new(get_output_dir(&args)?, &ledger, &report)?),
        OutputType::Json => Box::new(JsonOutput::new(get_output_dir(&args)?, &report)?),
        OutputType::Ods => Box::new(OdsOutput::new(get_output_dir(&args)?, &ledger, &report)?),
    };
    output.write()?;
    info!("write output done");

    Ok(())
}
