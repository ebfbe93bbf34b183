//!
//! The benchmark dashboard library.
//!

pub mod config;
pub mod error;
pub mod input;
pub mod loader;
pub mod model;
pub mod output;
pub mod render;
pub mod util;
pub mod warning;

pub use crate::config::Config;
pub use crate::error::ParseError;
pub use crate::error::ValidationError;
pub use crate::error::WriteError;
pub use crate::input::error::Error as InputError;
pub use crate::input::pytest::PytestReport;
pub use crate::input::tool::Tool;
pub use crate::input::Input;
pub use crate::input::Report as InputReport;
pub use crate::model::document::Document;
pub use crate::model::document::Encoding;
pub use crate::model::suite::run::bench::BenchResult;
pub use crate::model::suite::run::commit::person::Person;
pub use crate::model::suite::run::commit::Commit;
pub use crate::model::suite::run::CommitRun;
pub use crate::model::suite::BenchmarkSuite;
pub use crate::output::csv::Csv as CsvOutput;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::json::Json as JsonOutput;
pub use crate::output::xlsx::Xlsx as XlsxOutput;
pub use crate::output::Output;
pub use crate::render::render;
pub use crate::render::render_filtered;
pub use crate::render::series::BenchSeries;
pub use crate::render::series::Point;
pub use crate::render::Rendering;
pub use crate::warning::SchemaWarning;

/// The successful exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;
