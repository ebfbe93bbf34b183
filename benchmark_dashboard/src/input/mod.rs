//!
//! Benchmark report input.
//!

pub mod error;
pub mod pytest;
pub mod tool;

use std::path::Path;

use crate::model::suite::run::bench::BenchResult;
use crate::model::suite::run::commit::Commit;

use self::error::Error as InputError;
use self::pytest::PytestReport;
use self::tool::Tool;

///
/// Enum representing the supported harness report formats.
///
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum Report {
    /// pytest-benchmark report.
    Pytest(PytestReport),
    /// Results already in the stored shape.
    Custom(Vec<BenchResult>),
}

impl Report {
    ///
    /// Parses a report produced by the given tool.
    ///
    pub fn parse(text: &str, tool: Tool) -> Result<Self, serde_json::Error> {
        Ok(if tool.is_custom() {
            serde_json::from_str::<Vec<BenchResult>>(text)?.into()
        } else {
            serde_json::from_str::<PytestReport>(text)?.into()
        })
    }
}

impl From<PytestReport> for Report {
    fn from(report: PytestReport) -> Self {
        Self::Pytest(report)
    }
}

impl From<Vec<BenchResult>> for Report {
    fn from(benches: Vec<BenchResult>) -> Self {
        Self::Custom(benches)
    }
}

impl From<Report> for Vec<BenchResult> {
    fn from(report: Report) -> Self {
        match report {
            Report::Pytest(report) => report.into(),
            Report::Custom(benches) => benches,
        }
    }
}

///
/// The measurements of a single run, read from a harness report.
///
#[derive(Debug)]
pub struct Input {
    /// The harness that produced the report.
    pub tool: Tool,
    /// The measurements.
    pub benches: Vec<BenchResult>,
}

impl TryFrom<(&Path, Tool)> for Input {
    type Error = InputError;

    fn try_from((path, tool): (&Path, Tool)) -> Result<Self, Self::Error> {
        let text = read(path)?;
        let report = Report::parse(text.as_str(), tool).map_err(|error| InputError::Parsing {
            error,
            path: path.to_path_buf(),
        })?;
        let benches = Vec::<BenchResult>::from(report);
        if benches.is_empty() {
            return Err(InputError::NoBenchmarks {
                path: path.to_path_buf(),
            });
        }
        Ok(Self { tool, benches })
    }
}

impl TryFrom<&Path> for Commit {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = read(path)?;
        serde_json::from_str(text.as_str()).map_err(|error| InputError::Parsing {
            error,
            path: path.to_path_buf(),
        })
    }
}

///
/// Reads a non-empty input file.
///
fn read(path: &Path) -> Result<String, InputError> {
    let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
        error,
        path: path.to_path_buf(),
    })?;
    if text.trim().is_empty() {
        return Err(InputError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    Ok(text)
}
