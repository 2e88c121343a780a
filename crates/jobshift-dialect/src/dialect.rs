//! Static dialect table mapping scheduler concepts to concrete tokens.
//!
//! Each entry names one concept (a submission flag or an environment
//! variable) and gives the token every supported scheduler uses for it.
//! Entries are kept in definition order; the converter scans them in that
//! order, so when one token is a substring of another the earlier entry wins.

use std::fmt;

use crate::scheduler::Scheduler;

/// Placeholder text written for concepts a scheduler has no token for.
pub const NOT_APPLICABLE: &str = "__NONE__";

/// Number of concepts in the table.
pub const KEY_COUNT: usize = 23;

/// Whether a concept is a directive flag or an environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCategory {
    /// Submission flag, only rewritten inside directive comments.
    Flag,
    /// Environment variable reference, rewritten anywhere in the script.
    EnvironmentVariable,
}

impl KeyCategory {
    pub fn is_flag(&self) -> bool {
        matches!(self, KeyCategory::Flag)
    }
}

/// A scheduler's token for one concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Literal flag or `$`-prefixed variable reference.
    Literal(&'static str),
    /// The scheduler has no equivalent.
    NotApplicable,
}

impl Token {
    /// Text of the token; the placeholder for [`Token::NotApplicable`].
    pub fn as_str(&self) -> &'static str {
        match *self {
            Token::Literal(s) => s,
            Token::NotApplicable => NOT_APPLICABLE,
        }
    }

    /// Check if the scheduler has a real token for the concept.
    pub fn is_applicable(&self) -> bool {
        matches!(self, Token::Literal(_))
    }

    /// Literal text, or `None` for the sentinel.
    pub fn literal(&self) -> Option<&'static str> {
        match *self {
            Token::Literal(s) => Some(s),
            Token::NotApplicable => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduler concept with a token in every dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DialectKey {
    Scheduler,
    JobQueue,
    JobNodes,
    JobProcessCount,
    JobWalltime,
    JobStdErr,
    JobStdOut,
    JobCopyEnvironment,
    JobEventNotification,
    JobEmailAddress,
    JobName,
    JobWorkingDirectory,
    JobMemorySize,
    JobDependency,
    JobProject,
    JobArray,
    JobBeginTime,
    QualityOfService,
    EnvJobId,
    EnvSubmitDirectory,
    EnvNodeList,
    EnvNodeListAlt,
    EnvSubmitHost,
}

impl DialectKey {
    /// All keys in table definition order.
    pub const ALL: [DialectKey; KEY_COUNT] = [
        DialectKey::Scheduler,
        DialectKey::JobQueue,
        DialectKey::JobNodes,
        DialectKey::JobProcessCount,
        DialectKey::JobWalltime,
        DialectKey::JobStdErr,
        DialectKey::JobStdOut,
        DialectKey::JobCopyEnvironment,
        DialectKey::JobEventNotification,
        DialectKey::JobEmailAddress,
        DialectKey::JobName,
        DialectKey::JobWorkingDirectory,
        DialectKey::JobMemorySize,
        DialectKey::JobDependency,
        DialectKey::JobProject,
        DialectKey::JobArray,
        DialectKey::JobBeginTime,
        DialectKey::QualityOfService,
        DialectKey::EnvJobId,
        DialectKey::EnvSubmitDirectory,
        DialectKey::EnvNodeList,
        DialectKey::EnvNodeListAlt,
        DialectKey::EnvSubmitHost,
    ];

    /// Table entry for this key.
    pub fn entry(&self) -> &'static DialectEntry {
        &DIALECT_TABLE[*self as usize]
    }

    /// Stable name, e.g. `parameter_job_walltime`.
    pub fn name(&self) -> &'static str {
        self.entry().name
    }

    pub fn category(&self) -> KeyCategory {
        self.entry().category
    }

    /// Token `scheduler` uses for this key.
    pub fn token(&self, scheduler: Scheduler) -> Token {
        self.entry().token(scheduler)
    }
}

impl fmt::Display for DialectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the dialect table.
#[derive(Debug, Clone, Copy)]
pub struct DialectEntry {
    pub key: DialectKey,
    pub name: &'static str,
    pub category: KeyCategory,
    /// Tokens indexed by scheduler column: lsf, pbs, slurm, sge.
    tokens: [Token; 4],
}

impl DialectEntry {
    pub fn token(&self, scheduler: Scheduler) -> Token {
        self.tokens[scheduler.column()]
    }
}

const fn flag(
    key: DialectKey,
    name: &'static str,
    lsf: Token,
    pbs: Token,
    slurm: Token,
    sge: Token,
) -> DialectEntry {
    DialectEntry {
        key,
        name,
        category: KeyCategory::Flag,
        tokens: [lsf, pbs, slurm, sge],
    }
}

const fn env(
    key: DialectKey,
    name: &'static str,
    lsf: &'static str,
    pbs: &'static str,
    slurm: &'static str,
    sge: &'static str,
) -> DialectEntry {
    DialectEntry {
        key,
        name,
        category: KeyCategory::EnvironmentVariable,
        tokens: [L(lsf), L(pbs), L(slurm), L(sge)],
    }
}

use Token::{Literal as L, NotApplicable as NA};

#[rustfmt::skip]
static DIALECT_TABLE: [DialectEntry; KEY_COUNT] = [
    flag(DialectKey::Scheduler, "parameter_scheduler", L("#BSUB"), L("#PBS"), L("#SBATCH"), L("#$")),
    flag(DialectKey::JobQueue, "parameter_job_queue", L("-q"), L("-q"), L("-q"), L("-q")),
    flag(DialectKey::JobNodes, "parameter_job_nodes", L("-n"), L("-l nodes="), L("-N"), NA),
    flag(DialectKey::JobProcessCount, "parameter_job_process_count", L("-n"), L("-l ppn="), L("-n"), NA),
    flag(DialectKey::JobWalltime, "parameter_job_walltime", L("-W"), L("-l walltime="), L("-t"), L("-l h_rt")),
    flag(DialectKey::JobStdErr, "parameter_job_std_err", L("-e"), L("-e"), L("-e"), L("-o")),
    flag(DialectKey::JobStdOut, "parameter_job_std_out", L("-o"), L("-o"), L("-o"), L("-o")),
    flag(DialectKey::JobCopyEnvironment, "parameter_job_copy_environment", NA, L("-V"), L("--export="), L("-V")),
    flag(DialectKey::JobEventNotification, "parameter_job_event_notification", L("-B"), L("-m abe"), L("--mail-type="), L("-m abe")),
    flag(DialectKey::JobEmailAddress, "parameter_job_email_address", L("-u"), L("-M"), L("--mail-user="), L("-M")),
    flag(DialectKey::JobName, "parameter_job_name", L("-J"), L("-N"), L("--job-name="), L("-N")),
    flag(DialectKey::JobWorkingDirectory, "parameter_job_working_directory", NA, NA, L("--workdir="), L("-wd")),
    flag(DialectKey::JobMemorySize, "parameter_job_memory_size", L("-M"), L("-l mem="), L("--mem="), L("-l mem_free=")),
    flag(DialectKey::JobDependency, "parameter_job_dependency", L("-w"), L("-d"), L("--depends="), L("-hold_jid")),
    flag(DialectKey::JobProject, "parameter_job_project", NA, L("-P"), L("--wckey"), L("-P")),
    flag(DialectKey::JobArray, "parameter_job_array", L("-J"), L("-P"), L("--array="), L("-t")),
    flag(DialectKey::JobBeginTime, "parameter_job_begin_time", L("-b"), L("-A"), L("--begin="), L("-a")),
    flag(DialectKey::QualityOfService, "parameter_quality_of_service", NA, L("-l qos="), L("--qos="), NA),
    env(DialectKey::EnvJobId, "environment_job_id", "$LSB_JOBID", "$PBS_JOBID", "$SLURM_JOBID", "$JOB_ID"),
    env(DialectKey::EnvSubmitDirectory, "environment_submit_directory", "$LSB_SUBCWD", "$PBS_O_WORKDIR", "$SLURM_SUBMIT_DIR", "$SGE_O_WORKDIR"),
    env(DialectKey::EnvNodeList, "environment_node_list", "$LSB_NODES", "$PBS_NODEFILE", "$SLURM_JOB_NODELIST", "$PE_HOSTFILE"),
    env(DialectKey::EnvNodeListAlt, "environment_nodes_list_alt", "$LSB_DJOB_HOSTFILE", "$PBS_NODEFILE", "$SLURM_JOB_NODELIST", "$PE_HOSTFILE"),
    env(DialectKey::EnvSubmitHost, "environment_submit_host", "$LSB_SUB_HOST", "$PBS_O_HOST", "$SLURM_SUBMIT_HOST", "$SGE_O_HOST"),
];

/// Read-only view of the static dialect table.
pub struct DialectTable;

impl DialectTable {
    /// All entries in definition order.
    pub fn entries() -> &'static [DialectEntry] {
        &DIALECT_TABLE
    }

    /// Every (key, token) pair for `scheduler`, sentinels included.
    pub fn tokens_for(scheduler: Scheduler) -> TokenSet {
        let mut tokens = [Token::NotApplicable; KEY_COUNT];
        for entry in &DIALECT_TABLE {
            tokens[entry.key as usize] = entry.token(scheduler);
        }
        TokenSet { scheduler, tokens }
    }
}

/// Shorthand for [`DialectTable::tokens_for`].
pub fn tokens_for(scheduler: Scheduler) -> TokenSet {
    DialectTable::tokens_for(scheduler)
}

/// All tokens of one scheduler, indexable by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSet {
    scheduler: Scheduler,
    tokens: [Token; KEY_COUNT],
}

impl TokenSet {
    pub fn scheduler(&self) -> Scheduler {
        self.scheduler
    }

    pub fn get(&self, key: DialectKey) -> Token {
        self.tokens[key as usize]
    }

    /// Pairs in table definition order.
    pub fn iter(&self) -> impl Iterator<Item = (DialectKey, Token)> + '_ {
        DialectKey::ALL.iter().map(|&key| (key, self.get(key)))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl std::ops::Index<DialectKey> for TokenSet {
    type Output = Token;

    fn index(&self, key: DialectKey) -> &Token {
        &self.tokens[key as usize]
    }
}
