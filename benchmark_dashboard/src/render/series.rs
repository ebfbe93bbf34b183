//!
//! The time series of a single benchmark.
//!

use serde::Serialize;

use crate::model::suite::run::commit::Commit;
use crate::util;

///
/// A single measurement placed on the time axis.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point<'a> {
    /// Unix timestamp of the run in milliseconds.
    pub date: u64,
    /// Measured value.
    pub value: f64,
    /// Measurement unit.
    pub unit: &'a str,
    /// Opaque spread annotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<&'a str>,
    /// Opaque annotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<&'a str>,
    /// The measured commit.
    #[serde(skip)]
    pub commit: &'a Commit,
    /// Index of the run in its stored series.
    #[serde(skip)]
    pub run: usize,
}

impl Point<'_> {
    ///
    /// Tooltip text shown next to the point.
    ///
    pub fn tooltip(&self) -> String {
        let mut tooltip = format!(
            "{} {}\n{} {}",
            self.commit.short_id(),
            self.commit.subject(),
            util::format_number(self.value),
            self.unit
        );
        for annotation in [self.range, self.extra].into_iter().flatten() {
            tooltip.push('\n');
            tooltip.push_str(annotation);
        }
        tooltip
    }
}

///
/// The time series of a single benchmark, ordered by date ascending.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchSeries<'a> {
    /// The benchmark name.
    pub name: &'a str,
    /// The unit of the earliest measurement.
    pub unit: &'a str,
    /// The measurements.
    pub points: Vec<Point<'a>>,
}

impl<'a> BenchSeries<'a> {
    ///
    /// Creates an empty series.
    ///
    pub fn new(name: &'a str, unit: &'a str) -> Self {
        Self {
            name,
            unit,
            points: Vec::new(),
        }
    }

    ///
    /// Iterates over the `(date, value, unit)` triples.
    ///
    /// Every call starts a fresh pass over the series.
    ///
    pub fn triples(&self) -> impl Iterator<Item = (u64, f64, &'a str)> + '_ {
        self.points
            .iter()
            .map(|point| (point.date, point.value, point.unit))
    }

    ///
    /// The most recent measurement.
    ///
    pub fn latest(&self) -> Option<&Point<'a>> {
        self.points.last()
    }

    ///
    /// Number of measurements.
    ///
    pub fn len(&self) -> usize {
        self.points.len()
    }

    ///
    /// Whether the series has no measurements.
    ///
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
