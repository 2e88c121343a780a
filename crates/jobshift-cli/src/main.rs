//! jobshift Command-Line Interface
//!
//! Rewrites a batch job script from one scheduler dialect to another and
//! prints the result on stdout.
//!
//! ```text
//! jobshift -s pbs -t slurm -i job.pbs > job.slurm
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::convert;

/// jobshift - convert job scripts between PBS, LSF, SLURM and SGE
#[derive(Parser)]
#[command(name = "jobshift")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Scheduler the input is written for (pbs, lsf, slurm, sge)
    #[arg(short, long)]
    source: String,

    /// Scheduler to convert to (pbs, lsf, slurm, sge)
    #[arg(short, long, default_value = "pbs")]
    target: String,

    /// Path to the job script to convert
    #[arg(short, long)]
    input: PathBuf,

    /// Keep the source token when the target has no equivalent
    #[arg(long)]
    skip_unmapped: bool,

    /// Print how many lines were rewritten to stderr
    #[arg(long)]
    summary: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for the converted script.
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = convert::execute(
        &cli.source,
        &cli.target,
        &cli.input,
        cli.skip_unmapped,
        cli.summary,
    );

    // Usage and input errors are reported on stdout as a single line.
    if let Err(e) = result {
        let _ = writeln!(std::io::stdout(), "{e}");
        std::process::exit(1);
    }
}
