//! msim: page replacement simulator.
//!
//! Usage: msim [OPTIONS] <FILE> <FRAMES> <POLICY>
//!
//! POLICY is one of fifo, opt, lru, lfu, sc (second chance) or c (clock).

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use pagesim::report::write_comparison;
use pagesim::{
    compare_policies, parse_frame_count, PolicyKind, ReferenceString, Result, SimulationConfig,
    Simulator, TraceRenderer,
};

#[derive(Parser)]
#[command(name = "msim")]
#[command(about = "Simulate page replacement policies over a reference string")]
#[command(version)]
struct Cli {
    /// File of whitespace-separated page numbers
    file: PathBuf,

    /// Number of frames (positive integer)
    #[arg(allow_negative_numbers = true)]
    frames: String,

    /// Replacement policy: fifo, opt, lru, lfu, sc or c
    #[arg(required_unless_present = "compare")]
    policy: Option<String>,

    /// Run every policy and print a summary table instead of a trace
    #[arg(long, conflicts_with_all = ["policy", "quiet"])]
    compare: bool,

    /// Print only the fault total
    #[arg(short, long)]
    quiet: bool,

    /// Log every eviction to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Setup errors surface before any reference is simulated.
    let policy = match &cli.policy {
        Some(name) => name.parse::<PolicyKind>()?,
        None => PolicyKind::Fifo,
    };
    let frames = parse_frame_count(&cli.frames);
    let config = SimulationConfig::new(frames, policy)?;
    let refs = ReferenceString::from_file(&cli.file)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.compare {
        let results = compare_policies(&refs, frames)?;
        return write_comparison(&mut out, &results);
    }

    let mut renderer = TraceRenderer::for_refs(&mut out, &refs);
    let quiet = cli.quiet;
    let stats = Simulator::new(&refs, config).run_with(|record| {
        if quiet {
            Ok(())
        } else {
            renderer.write_record(record)
        }
    })?;
    renderer.write_total(stats.faults)
}
