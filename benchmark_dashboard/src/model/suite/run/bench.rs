//!
//! A single named measurement of a run.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::error::ValidationError;

///
/// A single named measurement of a run.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchResult {
    /// Benchmark name, conventionally `<file>::<test>`.
    /// Identifies the same logical benchmark across runs.
    pub name: String,
    /// Measured value, for example throughput in iterations per second.
    pub value: f64,
    /// Measurement unit, for example `iter/sec`.
    pub unit: String,
    /// Free-text spread annotation, usually `stddev: <float>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// Free-text annotation, usually the mean time and the number of rounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl BenchResult {
    ///
    /// A shortcut constructor without annotations.
    ///
    pub fn new(name: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            unit: unit.into(),
            range: None,
            extra: None,
        }
    }

    ///
    /// Checks that the measurement can be charted.
    ///
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyBenchName);
        }
        if self.unit.is_empty() {
            return Err(ValidationError::EmptyUnit {
                name: self.name.clone(),
            });
        }
        if !self.value.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}
