//!
//! The benchmark history of a repository.
//!

pub mod run;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ParseError;
use crate::error::ValidationError;
use crate::warning::SchemaWarning;

use self::run::CommitRun;

///
/// The benchmark history of a repository.
///
/// Runs are only ever appended; stored runs are never mutated.
///
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSuite {
    /// Unix timestamp of the most recent run in milliseconds.
    #[serde(rename = "lastUpdate")]
    pub last_update: u64,
    /// The benchmarked repository.
    #[serde(rename = "repoUrl")]
    pub repo_url: String,
    /// Runs grouped by series name, in chronological order. Series keep the order of the file.
    pub entries: IndexMap<String, Vec<CommitRun>>,
}

impl BenchmarkSuite {
    /// The series name used when none is configured.
    pub const DEFAULT_SERIES: &'static str = "Benchmark";

    ///
    /// Creates an empty suite for a repository.
    ///
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            last_update: 0,
            repo_url: repo_url.into(),
            entries: IndexMap::new(),
        }
    }

    ///
    /// Parses a suite from its JSON document and validates every stored run.
    ///
    /// The `<identifier> = <json>` script form is handled by [`crate::Document`].
    ///
    pub fn load(source: &str) -> Result<Self, ParseError> {
        if source.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        let suite: Self = serde_json::from_str(source)?;
        suite.validate()?;
        Ok(suite)
    }

    ///
    /// Serializes the suite to pretty-printed JSON.
    ///
    pub fn serialize(&self) -> String {
        serde_json::to_string_pretty(self).expect("Always valid")
    }

    ///
    /// Checks that every stored run is valid.
    ///
    pub fn validate(&self) -> Result<(), ParseError> {
        for (series, runs) in self.entries.iter() {
            for (index, run) in runs.iter().enumerate() {
                run.validate().map_err(|error| ParseError::InvalidRun {
                    series: series.to_owned(),
                    index,
                    error,
                })?;
            }
        }
        Ok(())
    }

    ///
    /// Appends a run to the end of a series, creating the series if needed.
    ///
    /// The suite is left untouched if the run is invalid.
    ///
    pub fn append(
        &mut self,
        series: &str,
        run: CommitRun,
    ) -> Result<Vec<SchemaWarning>, ValidationError> {
        run.validate()?;

        let mut warnings = Vec::new();
        if !run.commit.has_full_hash() {
            warnings.push(SchemaWarning::AbbreviatedCommitId {
                series: series.to_owned(),
                commit: run.commit.id.clone(),
            });
        }
        let runs = self.entries.entry(series.to_owned()).or_default();
        if let Some(previous) = runs.last() {
            if run.date < previous.date {
                warnings.push(SchemaWarning::OutOfOrder {
                    series: series.to_owned(),
                    date: run.date,
                    previous: previous.date,
                });
            }
        }
        self.last_update = self.last_update.max(run.date);
        runs.push(run);
        Ok(warnings)
    }

    ///
    /// Returns all series.
    ///
    pub fn all_series(&self) -> &IndexMap<String, Vec<CommitRun>> {
        &self.entries
    }

    ///
    /// Returns the runs of a series.
    ///
    pub fn series(&self, name: &str) -> Option<&[CommitRun]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    ///
    /// Concatenates the runs of another suite per series name.
    ///
    pub fn merge(&mut self, other: Self) {
        if self.repo_url.is_empty() {
            self.repo_url = other.repo_url;
        }
        self.last_update = self.last_update.max(other.last_update);
        for (series, runs) in other.entries.into_iter() {
            self.entries.entry(series).or_default().extend(runs);
        }
    }

    ///
    /// Drops the oldest runs of a series so that at most `max_items` remain.
    ///
    /// Returns the number of dropped runs.
    ///
    pub fn truncate(&mut self, series: &str, max_items: usize) -> usize {
        let runs = match self.entries.get_mut(series) {
            Some(runs) => runs,
            None => return 0,
        };
        let excess = runs.len().saturating_sub(max_items);
        runs.drain(..excess);
        excess
    }

    ///
    /// Total number of stored runs across all series.
    ///
    pub fn run_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

impl std::str::FromStr for BenchmarkSuite {
    type Err = ParseError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::load(source)
    }
}
