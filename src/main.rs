use clap::Parser;
use lib::{SimpleLogger, SummaryError, generate_daily_summary, generate_summary, load_readings};
use log::debug;
use std::path::PathBuf;

static LOGGER: SimpleLogger = SimpleLogger;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input CSV file of daily weather readings (date, low °F, high °F)
    #[arg(short, long)]
    input_file: PathBuf,

    /// Also print the day-by-day breakdown after the overview
    #[arg(long, default_value_t = false)]
    daily: bool,

    /// Log level for output
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() -> Result<(), SummaryError> {
    log::set_logger(&LOGGER).unwrap();

    // Acquire CLI args
    let args = Args::parse();
    if args.debug {
        log::set_max_level(log::LevelFilter::Debug);
    } else {
        log::set_max_level(log::LevelFilter::Info);
    }
    debug!("Input file: {}", args.input_file.display());

    let records = load_readings(&args.input_file)?;
    debug!("Summarising {} days of readings", records.len());

    print!("{}", generate_summary(&records)?);
    if args.daily {
        println!();
        print!("{}", generate_daily_summary(&records)?);
    }

    Ok(())
}
