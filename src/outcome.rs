//! src/outcome.rs
//!
//! Per-line classification shared by both stages. A line is either accepted
//! or skipped with a [`SkipReason`]; stages never abort on bad data, but the
//! reasons are kept so callers can see what was discarded.
use crate::error::error_chain_fmt;
use std::collections::BTreeMap;
use std::num::ParseIntError;

/// Result of processing one input line.
pub type LineOutcome<T> = Result<T, SkipReason>;

#[derive(thiserror::Error, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("header line")]
    Header,
    #[error("blank line")]
    Blank,
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { found: usize, expected: usize },
    #[error("record has an empty title")]
    EmptyTitle,
    #[error("no tab between key and value")]
    MissingSeparator,
    #[error("value {value:?} is not an integer")]
    InvalidValue {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("adding {value} overflows the running sum")]
    Overflow { value: i64 },
}

impl std::fmt::Debug for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(f, self)
    }
}

impl SkipReason {
    pub fn kind(&self) -> SkipKind {
        match self {
            SkipReason::Header => SkipKind::Header,
            SkipReason::Blank => SkipKind::Blank,
            SkipReason::TooFewFields { .. } => SkipKind::TooFewFields,
            SkipReason::EmptyTitle => SkipKind::EmptyTitle,
            SkipReason::MissingSeparator => SkipKind::MissingSeparator,
            SkipReason::InvalidValue { .. } => SkipKind::InvalidValue,
            SkipReason::Overflow { .. } => SkipKind::Overflow,
        }
    }
}

/// Payload-free discriminant of [`SkipReason`], used for tallying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkipKind {
    Header,
    Blank,
    TooFewFields,
    EmptyTitle,
    MissingSeparator,
    InvalidValue,
    Overflow,
}

impl SkipKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipKind::Header => "header",
            SkipKind::Blank => "blank",
            SkipKind::TooFewFields => "too_few_fields",
            SkipKind::EmptyTitle => "empty_title",
            SkipKind::MissingSeparator => "missing_separator",
            SkipKind::InvalidValue => "invalid_value",
            SkipKind::Overflow => "overflow",
        }
    }
}

impl std::fmt::Display for SkipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tally of a single stage scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    lines_read: usize,
    accepted: usize,
    emitted: usize,
    skipped: BTreeMap<SkipKind, usize>,
}

impl ScanReport {
    pub fn record(&mut self, line_number: usize, outcome: &LineOutcome<()>) {
        self.lines_read += 1;
        match outcome {
            Ok(()) => self.accepted += 1,
            Err(reason) => {
                tracing::trace!(line = line_number, reason = %reason, "Skipping line");
                *self.skipped.entry(reason.kind()).or_default() += 1;
            }
        }
    }

    pub fn set_emitted(&mut self, emitted: usize) {
        self.emitted = emitted;
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Lines that contributed to the output.
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Lines written to the output stream.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn skipped(&self, kind: SkipKind) -> usize {
        self.skipped.get(&kind).copied().unwrap_or(0)
    }

    pub fn total_skipped(&self) -> usize {
        self.skipped.values().sum()
    }

    pub fn skipped_by_kind(&self) -> impl Iterator<Item = (SkipKind, usize)> + '_ {
        self.skipped.iter().map(|(kind, count)| (*kind, *count))
    }

    pub fn log_summary(&self, stage: &str) {
        let skipped = self
            .skipped_by_kind()
            .map(|(kind, count)| format!("{kind}={count}"))
            .collect::<Vec<_>>()
            .join(",");
        tracing::info!(
            stage,
            lines_read = self.lines_read,
            accepted = self.accepted,
            emitted = self.emitted,
            skipped = self.total_skipped(),
            by_reason = %skipped,
            "Stage finished"
        );
    }
}
