//!
//! Benchmark dashboard output.
//!

pub mod csv;
pub mod format;
pub mod json;
pub mod xlsx;

use std::path::Path;

use crate::error::WriteError;
use crate::model::document::Document;
use crate::model::document::Encoding;
use crate::output::csv::Csv;
use crate::output::format::Format;
use crate::output::json::Json;
use crate::output::xlsx::Xlsx;
use crate::render::Rendering;

///
/// Serialized benchmark output.
///
pub enum Output {
    /// Benchmark output is a single text file.
    SingleFile(String),
    /// Benchmark output is a single spreadsheet.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
}

impl Output {
    ///
    /// Writes the output to a file.
    ///
    pub fn write_to_file(self, path: &Path) -> Result<(), WriteError> {
        match self {
            Output::SingleFile(content) => {
                std::fs::write(path, content).map_err(|error| WriteError::Writing {
                    error,
                    path: path.to_path_buf(),
                })?;
            }
            Output::SingleFileXlsx(mut workbook) => {
                workbook.save(path).map_err(|error| WriteError::Workbook {
                    error,
                    path: path.to_path_buf(),
                })?;
            }
        }
        Ok(())
    }
}

impl TryFrom<(&[Rendering<'_>], Format)> for Output {
    type Error = anyhow::Error;

    fn try_from((renderings, format): (&[Rendering<'_>], Format)) -> Result<Self, Self::Error> {
        Ok(match format {
            Format::Json => Json::from(renderings).into(),
            Format::Csv => Csv::from(renderings).into(),
            Format::Xlsx => Xlsx::try_from(renderings)?.into(),
            Format::DataJs => anyhow::bail!(
                "Rendered series cannot be written as `{format}`, use `json`, `csv`, or `xlsx`"
            ),
        })
    }
}

impl TryFrom<(Document, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from((mut document, format): (Document, Format)) -> Result<Self, Self::Error> {
        match format {
            Format::DataJs => {
                if let Encoding::Json = document.encoding {
                    document.encoding = Encoding::default();
                }
            }
            Format::Json => document.encoding = Encoding::Json,
            Format::Csv | Format::Xlsx => anyhow::bail!(
                "Benchmark data cannot be written as `{format}`, use `data-js` or `json`"
            ),
        }
        Ok(Output::SingleFile(document.serialize()))
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Csv> for Output {
    fn from(value: Csv) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::SingleFileXlsx(value.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::format::Format;
    use super::Output;
    use crate::error::WriteError;
    use crate::model::document::Document;
    use crate::model::document::Encoding;
    use crate::render;

    const DATA: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/data.js"));

    fn content(output: Output) -> String {
        match output {
            Output::SingleFile(content) => content,
            Output::SingleFileXlsx(_) => panic!("Expected a text file"),
        }
    }

    #[test]
    fn document_formats() {
        let document = Document::load(DATA).expect("Always valid");

        let json = content(
            Output::try_from((document.clone(), Format::Json)).expect("Always valid"),
        );
        assert!(json.starts_with('{'));
        assert_eq!(
            Document::load(json.as_str()).expect("Always valid").suite,
            document.suite
        );

        let script = content(
            Output::try_from((document.clone(), Format::DataJs)).expect("Always valid"),
        );
        assert!(script.starts_with("window.BENCHMARK_DATA = {"));

        let converted = Document::new(document.suite.clone(), Encoding::Json);
        let script = content(Output::try_from((converted, Format::DataJs)).expect("Always valid"));
        assert!(script.starts_with("window.BENCHMARK_DATA = {"));

        assert!(Output::try_from((document, Format::Csv)).is_err());
    }

    #[test]
    fn rendering_formats() {
        let document = Document::load(DATA).expect("Always valid");
        let renderings = vec![render::render(&document.suite, "Benchmark")];

        let json = content(
            Output::try_from((renderings.as_slice(), Format::Json)).expect("Always valid"),
        );
        let value: serde_json::Value = serde_json::from_str(json.as_str()).expect("Always valid");
        assert_eq!(value[0]["series"], "Benchmark");
        assert_eq!(
            value[0]["benches"][1]["points"][0]["value"],
            947443.3093421741
        );

        assert!(Output::try_from((renderings.as_slice(), Format::DataJs)).is_err());
    }

    #[test]
    fn error_writing() {
        let output = Output::SingleFile(String::new());
        let result = output.write_to_file(std::path::Path::new("/nonexistent/directory/file.csv"));
        assert!(matches!(result, Err(WriteError::Writing { .. })));
    }
}
