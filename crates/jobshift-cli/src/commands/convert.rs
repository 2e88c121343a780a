//! Convert command implementation.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use tracing::info;

use jobshift_dialect::{ConvertOptions, Converter, UnmappedPolicy, read_script, validate_pair};

/// Execute the conversion and write the result to stdout.
///
/// Scheduler names are validated before the input is opened, so a bad name
/// is reported even when the path is also wrong.
pub fn execute(
    source: &str,
    target: &str,
    input: &Path,
    skip_unmapped: bool,
    summary: bool,
) -> Result<()> {
    let (source, target) = validate_pair(source, target)?;

    info!(%source, %target, input = %input.display(), "converting job script");

    let lines = read_script(input)?;

    let unmapped = if skip_unmapped {
        UnmappedPolicy::Skip
    } else {
        UnmappedPolicy::Placeholder
    };
    let options = ConvertOptions::default().with_unmapped(unmapped);
    let conversion = Converter::with_options(source, target, options).convert_all(&lines);

    match write_lines(&conversion.render()) {
        // Reader went away early (e.g. `| head`); nothing left to report.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            info!("stdout closed before the converted script was fully written");
            return Ok(());
        }
        result => result.context("Failed to write converted script")?,
    }

    if summary {
        let _ = writeln!(
            io::stderr(),
            "{} {} of {} lines rewritten ({} → {})",
            style("✓").for_stderr().green().bold(),
            style(conversion.replaced_count()).for_stderr().yellow(),
            conversion.len(),
            style(source).for_stderr().cyan(),
            style(target).for_stderr().cyan()
        );
    }

    Ok(())
}

fn write_lines(lines: &[String]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{line}")?;
    }
    stdout.flush()
}
