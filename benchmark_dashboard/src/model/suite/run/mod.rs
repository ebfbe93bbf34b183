//!
//! One CI execution's results for a series.
//!

pub mod bench;
pub mod commit;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ValidationError;

use self::bench::BenchResult;
use self::commit::Commit;

///
/// One CI execution's results for a series.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitRun {
    /// The measured commit.
    pub commit: Commit,
    /// Unix timestamp of the run in milliseconds.
    pub date: u64,
    /// The benchmarking harness, for example `pytest`.
    pub tool: String,
    /// The measurements, in harness order.
    pub benches: Vec<BenchResult>,
}

impl CommitRun {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(commit: Commit, date: u64, tool: impl Into<String>, benches: Vec<BenchResult>) -> Self {
        Self {
            commit,
            date,
            tool: tool.into(),
            benches,
        }
    }

    ///
    /// Checks the fields required to append and to chart the run.
    ///
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.date == 0 {
            return Err(ValidationError::MissingDate);
        }
        if self.benches.is_empty() {
            return Err(ValidationError::NoBenches);
        }
        if self.commit.id.is_empty() {
            return Err(ValidationError::EmptyCommitId);
        }
        for bench in self.benches.iter() {
            bench.validate()?;
        }
        Ok(())
    }
}
