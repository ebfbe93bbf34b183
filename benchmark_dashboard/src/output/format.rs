//!
//! Output benchmark format.
//!

///
/// Output benchmark format.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// The dashboard data script, `<identifier> = <json>`.
    #[default]
    DataJs,
    /// Plain JSON.
    Json,
    /// Comma-separated time series rows.
    Csv,
    /// Excel spreadsheet with a chart per benchmark.
    Xlsx,
}

impl Format {
    ///
    /// Whether the format stores the whole suite rather than a rendering.
    ///
    pub fn is_document(&self) -> bool {
        matches!(self, Self::DataJs | Self::Json)
    }
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "data-js" | "js" => Ok(Self::DataJs),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            string => anyhow::bail!(
                "Unknown benchmark format `{string}`. Supported formats: {}",
                [Self::DataJs, Self::Json, Self::Csv, Self::Xlsx]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::DataJs => write!(f, "data-js"),
            Format::Json => write!(f, "json"),
            Format::Csv => write!(f, "csv"),
            Format::Xlsx => write!(f, "xlsx"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Format;

    #[test]
    fn from_str() {
        assert_eq!(Format::from_str("XLSX").ok(), Some(Format::Xlsx));
        assert_eq!(Format::from_str("js").ok(), Some(Format::DataJs));
        assert_eq!(Format::from_str("data-js").ok(), Some(Format::DataJs));

        let error = Format::from_str("yaml").expect_err("Must fail");
        assert!(error
            .to_string()
            .ends_with("Supported formats: data-js, json, csv, xlsx"));
    }
}
