//! Operations Stream Synthesizer
//!
//! One-shot batch tool: fabricates a synthetic business-operations event
//! stream, folds a running token-supply aggregate over it, and writes the
//! result as a delimited-text table.

use clap::Parser;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use ops_core::config::DEFAULT_CONFIG_PATH;
use ops_core::{compute_running_supply, sort_by_time, write_table, Config, Generator};

/// Command line arguments for the synthesizer
#[derive(Parser, Debug)]
#[command(name = "ops_synth")]
#[command(about = "A synthetic business-operations event stream generator")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of events to generate (overrides the config)
    #[arg(long)]
    count: Option<u64>,

    /// Path to the generator configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Output file for the rendered table
    #[arg(long, default_value = "output/operations.csv")]
    out: PathBuf,

    /// Generation window start, YYYY-MM-DD (overrides the config)
    #[arg(long)]
    start_date: Option<String>,

    /// Generation window end, YYYY-MM-DD (overrides the config)
    #[arg(long)]
    end_date: Option<String>,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    // The default path falls back to built-in defaults when absent; an
    // explicitly named config must load.
    let mut config = if args.config == DEFAULT_CONFIG_PATH {
        Config::load_or_default()
    } else {
        Config::load(&args.config)?
    };

    if let Some(count) = args.count {
        config.run.count = count;
    }
    if let Some(start_date) = args.start_date {
        config.time_range.start_date = start_date;
    }
    if let Some(end_date) = args.end_date {
        config.time_range.end_date = end_date;
    }

    let range = config.time_range()?;
    let count = config.run.count;
    let initial_supply = config.run.initial_supply;

    println!("Operations Stream Synthesizer");
    println!("=============================");
    println!("Seed: {}", args.seed);
    println!("Events: {}", count);
    println!("Window: {}", range);
    println!("Initial supply: {:.2}", initial_supply);
    println!();

    println!("Generating events...");
    let mut generator = Generator::new(config, range, args.seed);
    let events = generator.generate(count)?;

    println!("Sorting by timestamp...");
    let sorted = sort_by_time(events);

    println!("Computing running supply...");
    let rows = compute_running_supply(&sorted, initial_supply);

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    write_table(&rows, &args.out)?;

    println!();
    println!("Generated {} records.", rows.len());
    if let (Some(first), Some(last)) = (rows.first(), rows.last()) {
        println!(
            "Date range: {} to {}",
            first.event.timestamp.format("%Y-%m-%d %H:%M:%S"),
            last.event.timestamp.format("%Y-%m-%d %H:%M:%S")
        );
        println!("Final running supply: {:.2}", last.running_supply);
    }
    println!("Wrote {}", args.out.display());

    Ok(())
}
