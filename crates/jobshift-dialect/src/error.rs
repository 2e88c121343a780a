//! Error handling for scheduler selection and script ingestion.
//!
//! The conversion pass itself is total; every error here is raised either
//! while validating the requested schedulers or while reading the input.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::scheduler::Scheduler;

/// Result type for dialect operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Which side of a conversion a scheduler name was given for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerRole {
    /// The dialect the input script is written in.
    Source,
    /// The dialect to rewrite into.
    Target,
}

impl fmt::Display for SchedulerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulerRole::Source => write!(f, "Scheduler"),
            SchedulerRole::Target => write!(f, "Target"),
        }
    }
}

/// Errors that can occur before or around a conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Scheduler name outside pbs, lsf, slurm and sge.
    #[error("{role} must be one of these values (case insensitive): {allowed}", allowed = Scheduler::allowed_names())]
    InvalidScheduler { role: SchedulerRole, name: String },

    /// Source and target name the same dialect.
    #[error("Target and Scheduler must be different")]
    IdenticalSchedulers(Scheduler),

    /// Input path does not resolve to a file.
    #[error("Unable to locate: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Any other I/O failure while reading the input.
    #[error("Error while reading: {}. Trace: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
