//!
//! XLSX output format for rendered series.
//!

pub mod worksheet;

use crate::render::series::Point;
use crate::render::Rendering;

use self::worksheet::Worksheet;

///
/// XLSX output format for rendered series.
///
#[derive(Default)]
pub struct Xlsx {
    /// One worksheet per rendered series.
    pub worksheets: Vec<Worksheet>,
}

impl Xlsx {
    ///
    /// Adds a worksheet with the data table and the charts of a rendered series.
    ///
    pub fn add_rendering(&mut self, rendering: &Rendering<'_>) -> anyhow::Result<()> {
        let taken: Vec<String> = self
            .worksheets
            .iter()
            .map(|worksheet| worksheet.name.clone())
            .collect();
        let name = Worksheet::sanitize_name(rendering.series.as_str(), taken.as_slice());
        let mut worksheet =
            Worksheet::new(name.as_str(), vec![("Date", 20), ("Commit", 10), ("Message", 40)])?;

        let mut points: Vec<&Point<'_>> = rendering
            .benches
            .iter()
            .flat_map(|bench| bench.points.iter())
            .collect();
        points.sort_by_key(|point| (point.date, point.run));
        worksheet.add_run_rows(points)?;

        for bench in rendering.benches.iter() {
            let column_index = worksheet.add_bench_column(bench.name, bench.unit)?;
            for point in bench.points.iter() {
                worksheet.write_point(column_index, point)?;
            }
        }
        worksheet.add_charts()?;

        self.worksheets.push(worksheet);
        Ok(())
    }

    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        for worksheet in self.worksheets.into_iter() {
            workbook.push_worksheet(worksheet.into_inner());
        }
        workbook
    }
}

impl TryFrom<&[Rendering<'_>]> for Xlsx {
    type Error = anyhow::Error;

    fn try_from(renderings: &[Rendering<'_>]) -> Result<Self, Self::Error> {
        let mut xlsx = Self::default();
        for rendering in renderings.iter() {
            xlsx.add_rendering(rendering)?;
        }
        Ok(xlsx)
    }
}
