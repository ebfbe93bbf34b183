//!
//! Serializing rendered time series to CSV.
//!

use std::fmt::Write;

use crate::render::series::BenchSeries;
use crate::render::Rendering;
use crate::util;

///
/// Serialize the time series to CSV in the following format:
/// "series", "benchmark", "date", "commit", "value", "unit", "range", "extra"
///
#[derive(Default)]
pub struct Csv {
    /// The CSV string.
    pub content: String,
}

impl Csv {
    ///
    /// Estimate the length of a CSV line based on the expected maximum lengths of each field.
    ///
    fn estimate_csv_line_length() -> usize {
        let series_name_estimated_max = 16;
        let bench_name_estimated_max = 100;
        let date_length = 19;
        let commit_length = 40;
        let number_field_estimated_max_length = 24;
        let annotations_estimated_max = 64;
        series_name_estimated_max
            + bench_name_estimated_max
            + date_length
            + commit_length
            + number_field_estimated_max_length
            + annotations_estimated_max
    }

    ///
    /// Estimate the size of the CSV file based on the number of points.
    ///
    fn estimate_csv_size(renderings: &[Rendering<'_>]) -> usize {
        let points: usize = renderings
            .iter()
            .flat_map(|rendering| rendering.benches.iter())
            .map(BenchSeries::len)
            .sum();
        (points + 1) * Self::estimate_csv_line_length()
    }

    ///
    /// Quotes a field, doubling the embedded quotes.
    ///
    fn quote(field: &str) -> String {
        format!("\"{}\"", field.replace('"', "\"\""))
    }
}

impl From<&[Rendering<'_>]> for Csv {
    fn from(renderings: &[Rendering<'_>]) -> Csv {
        let mut content = String::with_capacity(Self::estimate_csv_size(renderings));
        content.push_str(
            r#""series", "benchmark", "date", "commit", "value", "unit", "range", "extra""#,
        );
        content.push('\n');

        for rendering in renderings.iter() {
            for bench in rendering.benches.iter() {
                for point in bench.points.iter() {
                    writeln!(
                        &mut content,
                        "{}, {}, {}, {}, {}, {}, {}, {}",
                        Self::quote(rendering.series.as_str()),
                        Self::quote(bench.name),
                        Self::quote(util::format_date(point.date).as_str()),
                        Self::quote(point.commit.id.as_str()),
                        util::format_number(point.value),
                        Self::quote(point.unit),
                        Self::quote(point.range.unwrap_or_default()),
                        Self::quote(point.extra.unwrap_or_default()),
                    )
                    .expect("Always valid");
                }
            }
        }

        Self { content }
    }
}
