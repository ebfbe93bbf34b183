//!
//! Non-fatal benchmark data inconsistencies.
//!

use serde::Serialize;

///
/// Non-fatal benchmark data inconsistency.
///
/// Warnings are collected and returned alongside successful results.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SchemaWarning {
    /// A benchmark changed its unit on a later run.
    UnitMismatch {
        /// The benchmark name.
        benchmark: String,
        /// The unit of the earliest run.
        expected: String,
        /// The unit of the offending run.
        found: String,
        /// The offending run commit.
        commit: String,
        /// The offending run date.
        date: u64,
    },
    /// A run lists the same benchmark more than once.
    DuplicateBench {
        /// The benchmark name.
        benchmark: String,
        /// The offending run commit.
        commit: String,
        /// The offending run date.
        date: u64,
    },
    /// A run was appended with a date earlier than the last run of its series.
    OutOfOrder {
        /// The series name.
        series: String,
        /// The appended run date.
        date: u64,
        /// The date of the previous last run.
        previous: u64,
    },
    /// A run was appended with a commit id that is not a full git hash.
    AbbreviatedCommitId {
        /// The series name.
        series: String,
        /// The commit id.
        commit: String,
    },
}

impl std::fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnitMismatch {
                benchmark,
                expected,
                found,
                commit,
                ..
            } => write!(
                f,
                "benchmark `{benchmark}` is measured in `{found}` at commit {commit}, expected `{expected}`"
            ),
            Self::DuplicateBench {
                benchmark, commit, ..
            } => write!(
                f,
                "benchmark `{benchmark}` is measured more than once at commit {commit}"
            ),
            Self::OutOfOrder {
                series,
                date,
                previous,
            } => write!(
                f,
                "run of series `{series}` dated {date} precedes the previous run dated {previous}"
            ),
            Self::AbbreviatedCommitId { series, commit } => write!(
                f,
                "run of series `{series}` refers to commit `{commit}`, which is not a full git hash"
            ),
        }
    }
}
