//!
//! Benchmarking harness that produced a report.
//!

///
/// Benchmarking harness that produced a report.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// `pytest-benchmark` JSON report.
    #[default]
    Pytest,
    /// A list of results in the stored shape, where greater values are better.
    CustomBiggerIsBetter,
    /// A list of results in the stored shape, where smaller values are better.
    CustomSmallerIsBetter,
}

impl Tool {
    ///
    /// Whether the report is already a list of results in the stored shape.
    ///
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::CustomBiggerIsBetter | Self::CustomSmallerIsBetter)
    }
}

impl std::str::FromStr for Tool {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().replace('-', "").as_str() {
            "pytest" => Ok(Self::Pytest),
            "custom" | "custombiggerisbetter" => Ok(Self::CustomBiggerIsBetter),
            "customsmallerisbetter" => Ok(Self::CustomSmallerIsBetter),
            _ => anyhow::bail!(
                "Unknown benchmark tool `{string}`. Supported tools: {}",
                [
                    Self::Pytest,
                    Self::CustomBiggerIsBetter,
                    Self::CustomSmallerIsBetter
                ]
                .into_iter()
                .map(|tool| tool.to_string())
                .collect::<Vec<String>>()
                .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pytest => write!(f, "pytest"),
            Self::CustomBiggerIsBetter => write!(f, "customBiggerIsBetter"),
            Self::CustomSmallerIsBetter => write!(f, "customSmallerIsBetter"),
        }
    }
}
