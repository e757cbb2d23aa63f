//! 8-bit instruction set simulator CLI.
//!
//! This binary is the front end for the simulator library. It performs:
//! 1. **Argument handling:** One positional assembly file plus optional run controls.
//! 2. **Logging setup:** A `tracing` subscriber on stderr, filtered by `RUST_LOG` or `--trace`.
//! 3. **Reporting:** Prints the five-line summary (or JSON) after a successful run.
//!
//! Any decode or runtime error aborts the run with no report and exit status 1.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bytesim_core::Simulator;
use bytesim_core::common::SimError;
use bytesim_core::config::Config;
use bytesim_core::sim::loader;
use bytesim_core::stats::Report;

#[derive(Parser, Debug)]
#[command(
    name = "bytesim",
    author,
    version,
    about = "Cycle-counting simulator for a tiny 8-bit instruction set",
    long_about = "Loads an assembly file (one `<address>\\t<instruction>` per line), executes it, and reports \
                  the instruction count, executed instructions, clock cycles, local memory hits, and LD/ST count.\n\n\
                  Examples:\n  bytesim program.asm\n  bytesim program.asm --trace --max-instructions 10000\n  \
                  bytesim program.asm --config value-addressing.json --json"
)]
struct Cli {
    /// Assembly source file.
    file: PathBuf,

    /// JSON configuration file (latencies, index policy, indirect addressing mode).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every executed instruction.
    #[arg(long)]
    trace: bool,

    /// Fail once this many instructions have executed (guards against endless loops).
    #[arg(long, value_name = "N")]
    max_instructions: Option<u64>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Log the final registers, flag, and touched memory after the run.
    #[arg(long)]
    dump: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.trace);

    match run(&cli) {
        Ok(report) => {
            if cli.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        eprintln!("error: could not serialize report: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("{report}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Loads configuration and program, runs to completion, and returns the report.
fn run(cli: &Cli) -> Result<Report, SimError> {
    let mut config = match &cli.config {
        Some(path) => loader::load_config(path)?,
        None => Config::default(),
    };
    if cli.trace {
        config.general.trace_instructions = true;
    }
    if cli.max_instructions.is_some() {
        config.general.max_instructions = cli.max_instructions;
    }
    tracing::debug!(?config, "configuration");

    let program = loader::load_program(&cli.file)?;
    let mut sim = Simulator::new(program, &config);

    let result = sim.run().map(|_| ());
    if cli.dump {
        sim.cpu.dump_state();
    }
    result?;

    Ok(sim.report())
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over the default filter.
fn init_logging(trace: bool) {
    let default = if trace { "warn,bytesim_core=info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
