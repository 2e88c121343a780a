//! Batch Scheduler Dialect Conversion for PBS, LSF, SLURM and SGE
//!
//! This crate rewrites job scripts written for one HPC batch scheduler into
//! the directive and environment-variable syntax of another.
//!
//! # Overview
//!
//! Conversion is a single pass over the script's lines, driven by a static
//! dialect table:
//! 1. **Dialect table**: every concept (queue flag, wall time flag, job id
//!    variable, ...) maps to one token per scheduler, or to a sentinel when
//!    the scheduler has no equivalent
//! 2. **Line converter**: each line is scanned for the source scheduler's
//!    tokens and rewritten with the target's; changed lines are preceded by
//!    the original behind a `#(REPLACED) ` marker
//!
//! # Supported Schedulers
//!
//! | Scheduler | Directive prefix | Job id variable |
//! |-----------|------------------|-----------------|
//! | PBS/Torque | `#PBS` | `$PBS_JOBID` |
//! | LSF | `#BSUB` | `$LSB_JOBID` |
//! | SLURM | `#SBATCH` | `$SLURM_JOBID` |
//! | SGE | `#$` | `$JOB_ID` |
//!
//! # Example
//!
//! ```
//! use jobshift_dialect::{Scheduler, convert};
//!
//! let out = convert(
//!     ["#PBS -l walltime=01:00:00", "echo $PBS_JOBID"],
//!     Scheduler::Pbs,
//!     Scheduler::Slurm,
//! );
//!
//! assert_eq!(
//!     out,
//!     vec![
//!         "#(REPLACED) #PBS -l walltime=01:00:00",
//!         "#SBATCH -t01:00:00",
//!         "#(REPLACED) echo $PBS_JOBID",
//!         "echo $SLURM_JOBID",
//!     ]
//! );
//! ```
//!
//! # Example: Validated Run from a File
//!
//! ```ignore
//! use jobshift_dialect::{Converter, read_script, validate_pair};
//!
//! let (source, target) = validate_pair("lsf", "slurm")?;
//! let lines = read_script("job.lsf")?;
//! let conversion = Converter::new(source, target).convert_all(&lines);
//! println!("{}", conversion.to_text());
//! ```

pub mod convert;
pub mod dialect;
pub mod error;
pub mod scheduler;
pub mod script;

// Re-exports
pub use convert::{
    Conversion, ConvertOptions, ConvertedLine, Converter, REPLACED_MARKER, UnmappedPolicy, convert,
};
pub use dialect::{
    DialectEntry, DialectKey, DialectTable, KeyCategory, NOT_APPLICABLE, Token, TokenSet,
    tokens_for,
};
pub use error::{ConvertError, ConvertResult, SchedulerRole};
pub use scheduler::{Scheduler, validate_pair};
pub use script::read_script;
