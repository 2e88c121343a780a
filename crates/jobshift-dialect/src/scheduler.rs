//! The supported batch schedulers.

use std::fmt;
use std::str::FromStr;

use crate::error::{ConvertError, ConvertResult, SchedulerRole};

/// A batch scheduler dialect.
///
/// The set is closed: every dialect table lookup is keyed by one of these
/// variants, so a lookup for an unsupported scheduler cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheduler {
    /// PBS (Portable Batch System) / Torque / PBS Pro.
    Pbs,
    /// IBM Spectrum LSF.
    Lsf,
    /// SLURM (Simple Linux Utility for Resource Management).
    Slurm,
    /// Sun/Oracle/Son of Grid Engine.
    Sge,
}

impl Scheduler {
    /// All schedulers, in dialect table column order.
    pub const ALL: [Scheduler; 4] = [
        Scheduler::Lsf,
        Scheduler::Pbs,
        Scheduler::Slurm,
        Scheduler::Sge,
    ];

    /// Lowercase name accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheduler::Pbs => "pbs",
            Scheduler::Lsf => "lsf",
            Scheduler::Slurm => "slurm",
            Scheduler::Sge => "sge",
        }
    }

    /// Comment prefix that marks a directive line for this scheduler.
    pub fn directive_prefix(&self) -> &'static str {
        match self {
            Scheduler::Pbs => "#PBS",
            Scheduler::Lsf => "#BSUB",
            Scheduler::Slurm => "#SBATCH",
            Scheduler::Sge => "#$",
        }
    }

    /// Check whether `line` is a directive for this scheduler.
    ///
    /// Surrounding whitespace is ignored.
    pub fn is_directive(&self, line: &str) -> bool {
        line.trim().starts_with(self.directive_prefix())
    }

    /// Space-separated list of accepted names, as shown in usage messages.
    pub fn allowed_names() -> &'static str {
        "slurm lsf sge pbs"
    }

    /// Column index of this scheduler in the dialect table.
    pub(crate) fn column(&self) -> usize {
        match self {
            Scheduler::Lsf => 0,
            Scheduler::Pbs => 1,
            Scheduler::Slurm => 2,
            Scheduler::Sge => 3,
        }
    }

    /// Parse a scheduler name given for `role`, case-insensitively.
    pub fn parse_role(name: &str, role: SchedulerRole) -> ConvertResult<Self> {
        match name.to_lowercase().as_str() {
            "pbs" => Ok(Scheduler::Pbs),
            "lsf" => Ok(Scheduler::Lsf),
            "slurm" => Ok(Scheduler::Slurm),
            "sge" => Ok(Scheduler::Sge),
            _ => Err(ConvertError::InvalidScheduler {
                role,
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheduler {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_role(s, SchedulerRole::Source)
    }
}

/// Parse and validate a source/target pair of scheduler names.
///
/// The source is checked first, then the target, then that they differ.
pub fn validate_pair(source: &str, target: &str) -> ConvertResult<(Scheduler, Scheduler)> {
    let source = Scheduler::parse_role(source, SchedulerRole::Source)?;
    let target = Scheduler::parse_role(target, SchedulerRole::Target)?;

    if source == target {
        return Err(ConvertError::IdenticalSchedulers(source));
    }

    Ok((source, target))
}
