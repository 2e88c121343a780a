//! Line-by-line conversion of job scripts between scheduler dialects.
//!
//! For every line the converter scans the dialect table in definition order,
//! looking for the source scheduler's token for each key:
//!
//! - Flag keys are rewritten only on directive lines, i.e. lines that start
//!   with the source scheduler's directive prefix (`#PBS`, `#BSUB`,
//!   `#SBATCH`, `#$`) once surrounding whitespace is stripped.
//! - Environment variable keys are rewritten wherever they occur.
//!
//! Substitution is cumulative: later keys see the line as rewritten by
//! earlier keys. Overlapping tokens are not detected, so when one token is a
//! substring of another the key defined first in the table wins.
//!
//! A changed line is emitted twice: first the original behind
//! [`REPLACED_MARKER`], then the rewritten text.

use tracing::{debug, info};

use crate::dialect::{DialectKey, TokenSet, tokens_for};
use crate::scheduler::Scheduler;

/// Prefix put in front of the original text of every rewritten line.
pub const REPLACED_MARKER: &str = "#(REPLACED) ";

/// What to write when the target scheduler has no token for a matched key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnmappedPolicy {
    /// Write the `__NONE__` placeholder so the gap is visible.
    #[default]
    Placeholder,
    /// Leave the source token in place and treat the key as inert.
    Skip,
}

/// Options for a conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub unmapped: UnmappedPolicy,
}

impl ConvertOptions {
    pub fn with_unmapped(mut self, unmapped: UnmappedPolicy) -> Self {
        self.unmapped = unmapped;
        self
    }
}

/// Outcome of converting a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertedLine {
    /// No key applied; the line is emitted as read.
    Unchanged(String),
    /// At least one key applied.
    Replaced {
        original: String,
        rewritten: String,
        /// Keys that matched, in the order they were applied.
        keys: Vec<DialectKey>,
    },
}

impl ConvertedLine {
    pub fn is_replaced(&self) -> bool {
        matches!(self, ConvertedLine::Replaced { .. })
    }

    /// Final text of the line after conversion.
    pub fn text(&self) -> &str {
        match self {
            ConvertedLine::Unchanged(line) => line,
            ConvertedLine::Replaced { rewritten, .. } => rewritten,
        }
    }

    /// Output lines: one for unchanged input, two for replaced input.
    pub fn render(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(2);
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut Vec<String>) {
        match self {
            ConvertedLine::Unchanged(line) => out.push(line.clone()),
            ConvertedLine::Replaced {
                original,
                rewritten,
                ..
            } => {
                out.push(format!("{REPLACED_MARKER}{original}"));
                out.push(rewritten.clone());
            }
        }
    }
}

/// Converts lines from one scheduler dialect to another.
///
/// Both token sets are resolved once at construction and reused for every
/// line.
#[derive(Debug, Clone)]
pub struct Converter {
    source: TokenSet,
    target: TokenSet,
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with default options.
    ///
    /// `source` and `target` are expected to differ; callers validate this
    /// with [`crate::validate_pair`]. Converting a dialect into itself is
    /// still well defined: directive lines are marked but keep their text.
    pub fn new(source: Scheduler, target: Scheduler) -> Self {
        Self::with_options(source, target, ConvertOptions::default())
    }

    pub fn with_options(source: Scheduler, target: Scheduler, options: ConvertOptions) -> Self {
        Self {
            source: tokens_for(source),
            target: tokens_for(target),
            options,
        }
    }

    pub fn source(&self) -> Scheduler {
        self.source.scheduler()
    }

    pub fn target(&self) -> Scheduler {
        self.target.scheduler()
    }

    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    /// Convert a single line.
    pub fn convert_line(&self, line: &str) -> ConvertedLine {
        // Decided on the line as read; the scheduler key rewrites the prefix
        // itself during the pass.
        let directive = self.source().is_directive(line);

        let mut current = line.to_string();
        let mut keys = Vec::new();

        for (key, token) in self.source.iter() {
            let Some(pattern) = token.literal() else {
                continue;
            };
            if !current.contains(pattern) {
                continue;
            }
            if key.category().is_flag() && !directive {
                continue;
            }

            let replacement = self.target.get(key);
            if !replacement.is_applicable() && self.options.unmapped == UnmappedPolicy::Skip {
                continue;
            }

            current = current.replace(pattern, replacement.as_str());
            keys.push(key);
        }

        if keys.is_empty() {
            return ConvertedLine::Unchanged(current);
        }

        debug!(
            keys = ?keys.iter().map(DialectKey::name).collect::<Vec<_>>(),
            "rewrote line: {line}"
        );

        ConvertedLine::Replaced {
            original: line.to_string(),
            rewritten: current,
            keys,
        }
    }

    /// Convert every line of a script.
    pub fn convert_all<I, S>(&self, lines: I) -> Conversion
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<ConvertedLine> = lines
            .into_iter()
            .map(|line| self.convert_line(line.as_ref()))
            .collect();

        let conversion = Conversion {
            source: self.source(),
            target: self.target(),
            lines,
        };

        info!(
            source = %conversion.source,
            target = %conversion.target,
            lines = conversion.len(),
            replaced = conversion.replaced_count(),
            "conversion complete"
        );

        conversion
    }
}

/// Result of converting a whole script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    source: Scheduler,
    target: Scheduler,
    lines: Vec<ConvertedLine>,
}

impl Conversion {
    pub fn source(&self) -> Scheduler {
        self.source
    }

    pub fn target(&self) -> Scheduler {
        self.target
    }

    /// Per-line outcomes, in input order.
    pub fn lines(&self) -> &[ConvertedLine] {
        &self.lines
    }

    /// Number of input lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of input lines that were rewritten.
    pub fn replaced_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_replaced()).count()
    }

    /// Output lines, with marker lines for every rewritten input line.
    pub fn render(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.lines.len() + self.replaced_count());
        for line in &self.lines {
            line.render_into(&mut out);
        }
        out
    }

    /// Output as newline-joined text, without a trailing newline.
    pub fn to_text(&self) -> String {
        self.render().join("\n")
    }
}

/// Convert `lines` from `source` to `target` with default options.
pub fn convert<I, S>(lines: I, source: Scheduler, target: Scheduler) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Converter::new(source, target).convert_all(lines).render()
}
