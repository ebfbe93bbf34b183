//!
//! The persisted benchmark data document.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::error::ParseError;
use crate::error::WriteError;
use crate::model::suite::BenchmarkSuite;

///
/// The form the suite is persisted in.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoding {
    /// A script assigning the JSON document to a global identifier, for example
    /// `window.BENCHMARK_DATA = { ... }`.
    Script {
        /// The assigned identifier.
        identifier: String,
    },
    /// A plain JSON document.
    Json,
}

impl Encoding {
    /// The identifier the dashboard page reads the data from.
    pub const DEFAULT_IDENTIFIER: &'static str = "window.BENCHMARK_DATA";

    ///
    /// Checks whether a string can be used as the assigned identifier.
    ///
    pub fn is_valid_identifier(identifier: &str) -> bool {
        !identifier.is_empty()
            && identifier.split('.').all(|part| {
                let mut characters = part.chars();
                match characters.next() {
                    Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
                        characters.all(|character| {
                            character.is_ascii_alphanumeric() || character == '_' || character == '$'
                        })
                    }
                    _ => false,
                }
            })
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Self::Script {
            identifier: Self::DEFAULT_IDENTIFIER.to_owned(),
        }
    }
}

///
/// The persisted benchmark data document.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// The stored suite.
    pub suite: BenchmarkSuite,
    /// The form the suite has been read in, and will be written back in.
    pub encoding: Encoding,
}

impl Document {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(suite: BenchmarkSuite, encoding: Encoding) -> Self {
        Self { suite, encoding }
    }

    ///
    /// Parses a document in either form.
    ///
    pub fn load(source: &str) -> Result<Self, ParseError> {
        let source = source.trim();
        if source.is_empty() {
            return Err(ParseError::Empty);
        }
        if source.starts_with('{') {
            let suite = BenchmarkSuite::load(source)?;
            return Ok(Self::new(suite, Encoding::Json));
        }

        let (identifier, json) = source
            .split_once('=')
            .ok_or(ParseError::MissingAssignment)?;
        let identifier = identifier.trim();
        if !Encoding::is_valid_identifier(identifier) {
            return Err(ParseError::MissingAssignment);
        }
        let json = json.trim();
        let json = json.strip_suffix(';').unwrap_or(json);
        let suite = BenchmarkSuite::load(json)?;
        Ok(Self::new(
            suite,
            Encoding::Script {
                identifier: identifier.to_owned(),
            },
        ))
    }

    ///
    /// Serializes the document in its encoding.
    ///
    pub fn serialize(&self) -> String {
        let json = self.suite.serialize();
        match self.encoding {
            Encoding::Script { ref identifier } => format!("{identifier} = {json}\n"),
            Encoding::Json => format!("{json}\n"),
        }
    }

    ///
    /// Writes the document to a file.
    ///
    pub fn save(&self, path: &Path) -> Result<(), WriteError> {
        std::fs::write(path, self.serialize()).map_err(|error| WriteError::Writing {
            error,
            path: path.to_path_buf(),
        })
    }
}

impl TryFrom<&Path> for Document {
    type Error = ParseError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| ParseError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        Self::load(text.as_str()).map_err(|error| error.in_file(path.to_path_buf()))
    }
}

impl TryFrom<PathBuf> for Document {
    type Error = ParseError;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        Self::try_from(path.as_path())
    }
}
