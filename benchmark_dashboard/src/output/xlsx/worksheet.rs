//!
//! XLSX worksheet for a rendered series.
//!

use std::collections::HashMap;

use crate::render::series::Point;
use crate::util;

///
/// XLSX worksheet for a rendered series.
///
/// Rows are runs ordered by date, columns are benchmarks.
///
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// The worksheet name, referenced by chart ranges.
    pub name: String,
    /// Run rows, keyed by the index of the run in its stored series.
    pub rows: HashMap<usize, u32>,
    /// Header names and their column widths.
    pub headers: Vec<(&'static str, usize)>,
    /// Benchmark columns, in allocation order.
    pub columns: Vec<String>,
}

impl Worksheet {
    /// Width of columns that contain values.
    const VALUE_COLUMN_WIDTH: usize = 18;

    /// Chart width in pixels.
    const CHART_WIDTH: u32 = 720;

    /// Chart height in pixels.
    const CHART_HEIGHT: u32 = 300;

    /// Number of rows a chart spans, with a gap.
    const CHART_ROW_SPAN: u32 = 16;

    /// Maximal worksheet name length.
    const NAME_MAX_LENGTH: usize = 31;

    ///
    /// Creates a new worksheet with the given name.
    ///
    pub fn new(name: &str, headers: Vec<(&'static str, usize)>) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(name)?;

        for (header_index, (header_name, column_width)) in headers.iter().enumerate() {
            worksheet.write_with_format(
                0,
                header_index as u16,
                header_name.to_owned(),
                &Self::worksheet_caption_format(),
            )?;
            worksheet.set_column_width(header_index as u16, *column_width as f64)?;
        }

        Ok(Self {
            worksheet,
            name: name.to_owned(),
            rows: HashMap::new(),
            headers,
            columns: Vec::new(),
        })
    }

    ///
    /// Writes the row headers of the runs, in the given order.
    ///
    pub fn add_run_rows<'p, 'a: 'p, I>(&mut self, points: I) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = &'p Point<'a>>,
    {
        for point in points.into_iter() {
            if self.rows.contains_key(&point.run) {
                continue;
            }
            let row_index = (self.rows.len() as u32) + 1;
            self.rows.insert(point.run, row_index);

            self.worksheet.write_with_format(
                row_index,
                0,
                util::format_date(point.date),
                &Self::row_header_format(),
            )?;
            self.worksheet.write_with_format(
                row_index,
                1,
                point.commit.short_id(),
                &Self::row_header_format(),
            )?;
            self.worksheet.write_with_format(
                row_index,
                2,
                point.commit.subject(),
                &Self::row_header_format(),
            )?;
        }
        Ok(())
    }

    ///
    /// Adds a new column for a benchmark.
    ///
    pub fn add_bench_column(&mut self, name: &str, unit: &str) -> anyhow::Result<u16> {
        let column_index = (self.headers.len() + self.columns.len()) as u16;
        self.columns.push(name.to_owned());

        self.worksheet
            .set_column_width(column_index, Self::VALUE_COLUMN_WIDTH as f64)?;
        self.worksheet.write_with_format(
            0,
            column_index,
            format!("{}\n({unit})", Self::short_bench_name(name)),
            &Self::column_header_format(),
        )?;

        Ok(column_index)
    }

    ///
    /// Writes a measurement into its run row, attaching the annotations as a note.
    ///
    pub fn write_point(&mut self, column_index: u16, point: &Point<'_>) -> anyhow::Result<()> {
        let row_index = match self.rows.get(&point.run) {
            Some(row_index) => *row_index,
            None => anyhow::bail!(
                "No row allocated for the run of commit {} at {}",
                point.commit.id,
                point.date
            ),
        };

        self.worksheet.write_with_format(
            row_index,
            column_index,
            point.value,
            &Self::value_format(),
        )?;
        if point.range.is_some() || point.extra.is_some() {
            let note = rust_xlsxwriter::Note::new(point.tooltip());
            self.worksheet.insert_note(row_index, column_index, &note)?;
        }
        Ok(())
    }

    ///
    /// Inserts a line chart for every benchmark column, to the right of the data.
    ///
    pub fn add_charts(&mut self) -> anyhow::Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }
        let last_row_index = self.rows.len() as u32;
        let chart_column_index = (self.headers.len() + self.columns.len() + 1) as u16;

        for (chart_index, name) in self.columns.iter().enumerate() {
            let column_index = (self.headers.len() + chart_index) as u16;

            let mut chart = rust_xlsxwriter::Chart::new(rust_xlsxwriter::ChartType::Line);
            chart
                .add_series()
                .set_name(Self::cell_reference(self.name.as_str(), 0, column_index).as_str())
                .set_categories((self.name.as_str(), 1, 0, last_row_index, 0))
                .set_values((
                    self.name.as_str(),
                    1,
                    column_index,
                    last_row_index,
                    column_index,
                ));
            chart.title().set_name(name.as_str());
            chart.show_empty_cells_as(rust_xlsxwriter::ChartEmptyCells::Connected);
            chart.set_width(Self::CHART_WIDTH);
            chart.set_height(Self::CHART_HEIGHT);

            self.worksheet.insert_chart(
                (chart_index as u32) * Self::CHART_ROW_SPAN,
                chart_column_index,
                &chart,
            )?;
        }

        Ok(())
    }

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Converts a series name into a valid unique worksheet name.
    ///
    pub fn sanitize_name(name: &str, taken: &[String]) -> String {
        let sanitized: String = name
            .chars()
            .map(|character| match character {
                '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
                character => character,
            })
            .collect();
        let sanitized = sanitized.trim_matches('\'');
        let sanitized = if sanitized.is_empty() {
            "Series"
        } else {
            sanitized
        };

        let mut candidate: String = sanitized.chars().take(Self::NAME_MAX_LENGTH).collect();
        let mut suffix = 1;
        while taken
            .iter()
            .any(|name| name.to_lowercase() == candidate.to_lowercase())
        {
            suffix += 1;
            let suffix_text = format!(" ({suffix})");
            let prefix: String = sanitized
                .chars()
                .take(Self::NAME_MAX_LENGTH - suffix_text.chars().count())
                .collect();
            candidate = format!("{prefix}{suffix_text}");
        }
        candidate
    }

    ///
    /// Returns the alphabetical column identifier by its index.
    ///
    pub fn column_identifier(index: u16) -> String {
        let mut identifier = String::new();
        let mut index = index as u32 + 1;

        while index > 0 {
            let remainder = (index - 1) % 26;
            identifier.insert(0, (b'A' + remainder as u8) as char);
            index = (index - 1) / 26;
        }

        identifier
    }

    ///
    /// Returns an absolute formula reference to a cell of a worksheet.
    ///
    pub fn cell_reference(sheet: &str, row_index: u32, column_index: u16) -> String {
        format!(
            "='{}'!${}${}",
            sheet.replace('\'', "''"),
            Self::column_identifier(column_index),
            row_index + 1
        )
    }

    ///
    /// Drops the path part of `<file>::<test>` benchmark names.
    ///
    fn short_bench_name(name: &str) -> &str {
        name.rsplit_once("::")
            .map(|(_, test)| test)
            .filter(|test| !test.is_empty())
            .unwrap_or(name)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn worksheet_caption_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(16);
        let format = format.set_font_color("#FFFFFF");
        let format = format.set_background_color("#4C6EF5");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::VerticalCenter);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(11);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#EEF3FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Top);
        let format = format.set_text_wrap();
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#DDE6FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Left);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#000000");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Right);
        let format = format.set_num_format("#,##0.000");
        format
    }
}

#[cfg(test)]
mod tests {
    use super::Worksheet;

    #[test]
    fn column_identifier() {
        assert_eq!(Worksheet::column_identifier(0), "A");
        assert_eq!(Worksheet::column_identifier(25), "Z");
        assert_eq!(Worksheet::column_identifier(26), "AA");
        assert_eq!(Worksheet::column_identifier(701), "ZZ");
        assert_eq!(Worksheet::column_identifier(702), "AAA");
    }

    #[test]
    fn cell_reference() {
        assert_eq!(
            Worksheet::cell_reference("Team's", 0, 3),
            "='Team''s'!$D$1"
        );
    }

    #[test]
    fn sanitize_name() {
        assert_eq!(Worksheet::sanitize_name("Benchmark", &[]), "Benchmark");
        assert_eq!(Worksheet::sanitize_name("a/b:c", &[]), "a_b_c");
        assert_eq!(Worksheet::sanitize_name("''", &[]), "Series");
        assert_eq!(
            Worksheet::sanitize_name("benchmark", &["Benchmark".to_owned()]),
            "benchmark (2)"
        );

        let long = "x".repeat(40);
        let sanitized = Worksheet::sanitize_name(long.as_str(), &["x".repeat(31)]);
        assert_eq!(sanitized.chars().count(), 31);
        assert!(sanitized.ends_with(" (2)"));
    }

    #[test]
    fn short_bench_name() {
        assert_eq!(
            Worksheet::short_bench_name("benchmarks/test_geometry.py::test_vector_operations"),
            "test_vector_operations"
        );
        assert_eq!(Worksheet::short_bench_name("plain"), "plain");
        assert_eq!(Worksheet::short_bench_name("trailing::"), "trailing::");
    }
}
