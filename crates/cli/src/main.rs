//! Scoreboard simulator CLI.
//!
//! This binary is the host driver for the simulator core. It performs:
//! 1. **Setup:** Loads the JSON configuration (or defaults) and the hex
//!    program, refusing to start on any setup error.
//! 2. **Clock:** Loops on `Simulator::tick`, one call per simulated cycle,
//!    until the core signals completion.
//! 3. **Reporting:** Prints the statistics summary and optionally writes the
//!    JSON report with final register values and counters.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::{fs, process};
use tracing_subscriber::EnvFilter;

use xsim_core::sim::loader;
use xsim_core::{Config, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "xsim",
    author,
    version,
    about = "Cycle-driven scoreboard scheduler simulator",
    long_about = "Simulate a scoreboarded 16-bit core over a hex program.\n\nPrograms are text files with one 16-bit hex instruction word per line\n(# starts a comment). Configuration is JSON; unset fields keep their\ndefaults.\n\nExamples:\n  xsim run -f programs/hazards.hex\n  xsim run -f programs/hazards.hex -c config.json -o report.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a hex program to completion.
    Run {
        /// Program file (one 16-bit hex instruction word per line).
        #[arg(short, long)]
        file: PathBuf,

        /// JSON configuration file (defaults used when omitted).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the final JSON report (registers + counters) here.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            file,
            config,
            output,
        } => cmd_run(&file, config.as_deref(), output.as_deref()),
    }
}

/// Loads configuration and program, runs the simulation, and reports.
///
/// Setup errors print to stderr and exit with code 1; no partial run is
/// attempted.
fn cmd_run(file: &std::path::Path, config_path: Option<&std::path::Path>, output: Option<&std::path::Path>) {
    let config = match config_path {
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("error: could not read config {}: {e}", path.display());
                process::exit(1);
            });
            serde_json::from_str::<Config>(&text).unwrap_or_else(|e| {
                eprintln!("error: invalid config {}: {e}", path.display());
                process::exit(1);
            })
        }
        None => Config::default(),
    };

    // `trace_instructions` turns on per-cycle scheduler events unless the
    // environment already chose a filter.
    let filter = if config.general.trace_instructions {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("xsim_core=debug"))
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let program = loader::load_program(file).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });

    println!("[*] Program: {} ({} words)", file.display(), program.len());
    println!(
        "    Window: {}  Units: {}  Int latency: {}  Clock: {}",
        config.resources.window_size,
        config.resources.int_units,
        config.latency.int_latency,
        config.general.clock_frequency
    );
    println!();

    let mut sim = Simulator::new(program, &config).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });

    let cycles = sim.run();
    println!("[*] Finished after {cycles} cycles");
    sim.cpu.stats.print();

    if let Some(path) = output {
        let report = sim.report();
        let json = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
            eprintln!("error: could not serialize report: {e}");
            process::exit(1);
        });
        if let Err(e) = fs::write(path, json) {
            eprintln!("error: could not write report {}: {e}", path.display());
            process::exit(1);
        }
        println!("[*] Report written to {}", path.display());
    }
}
