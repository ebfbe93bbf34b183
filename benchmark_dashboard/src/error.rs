//!
//! Benchmark data errors.
//!

use std::path::PathBuf;

///
/// A run or measurement that cannot be stored.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The run has no date.
    #[error("the run date is missing")]
    MissingDate,
    /// The run has no measurements.
    #[error("the run has no benchmark results")]
    NoBenches,
    /// The run commit has no identifier.
    #[error("the commit identifier is empty")]
    EmptyCommitId,
    /// A measurement has no name.
    #[error("a benchmark result has an empty name")]
    EmptyBenchName,
    /// A measurement has no unit.
    #[error("benchmark `{name}` has an empty unit")]
    EmptyUnit {
        /// The benchmark name.
        name: String,
    },
    /// A measurement is NaN or infinite.
    #[error("benchmark `{name}` has a non-finite value")]
    NonFiniteValue {
        /// The benchmark name.
        name: String,
    },
}

///
/// Benchmark data loading error.
///
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Error reading the data file.
    #[error("Reading benchmark data {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the data file.
        path: PathBuf,
    },
    /// The document has no content.
    #[error("Benchmark data is empty")]
    Empty,
    /// The script form does not assign the data to an identifier.
    #[error("Benchmark data script must have the form `<identifier> = <json>`")]
    MissingAssignment,
    /// The JSON does not match the suite shape.
    #[error("Parsing benchmark data: {0}")]
    Parsing(#[from] serde_json::Error),
    /// A stored run is not valid.
    #[error("Run #{index} of series `{series}`: {error}")]
    InvalidRun {
        /// The series name.
        series: String,
        /// The run index within the series.
        index: usize,
        /// The validation failure.
        error: ValidationError,
    },
    /// Any of the errors above, located in a file.
    #[error("Benchmark data {path:?}: {error}")]
    InFile {
        /// The path to the data file.
        path: PathBuf,
        /// The located error.
        error: Box<ParseError>,
    },
}

impl ParseError {
    ///
    /// Attaches the data file path to the error.
    ///
    pub fn in_file(self, path: PathBuf) -> Self {
        match self {
            error @ (Self::Reading { .. } | Self::InFile { .. }) => error,
            error => Self::InFile {
                path,
                error: Box::new(error),
            },
        }
    }

    ///
    /// Whether the error is caused by an empty file.
    ///
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::InFile { error, .. } => error.is_empty(),
            _ => false,
        }
    }
}

///
/// Benchmark output writing error.
///
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// Error writing a text file.
    #[error("Writing benchmark file {path:?}: {error}")]
    Writing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the output file.
        path: PathBuf,
    },
    /// Error writing a spreadsheet.
    #[error("Writing benchmark workbook {path:?}: {error}")]
    Workbook {
        /// The underlying spreadsheet error.
        error: rust_xlsxwriter::XlsxError,
        /// The path to the output file.
        path: PathBuf,
    },
}
