//!
//! Benchmark time series rendering.
//!

pub mod series;

use std::collections::HashMap;
use std::collections::HashSet;

use colored::Colorize;
use regex::Regex;
use serde::Serialize;

use crate::model::suite::run::CommitRun;
use crate::model::suite::BenchmarkSuite;
use crate::util;
use crate::warning::SchemaWarning;

use self::series::BenchSeries;
use self::series::Point;

///
/// The time series of every benchmark of a suite series.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rendering<'a> {
    /// The suite series name.
    pub series: String,
    /// Benchmarks in the order of their first appearance.
    pub benches: Vec<BenchSeries<'a>>,
    /// Inconsistencies found while rendering.
    pub warnings: Vec<SchemaWarning>,
}

impl<'a> Rendering<'a> {
    /// Minimal width of the benchmark name column.
    const NAME_MIN_WIDTH: usize = 24;

    /// Width of the point count, value, and unit columns with separators.
    const VALUE_COLUMNS_WIDTH: usize = 1 + 6 + 1 + 20 + 1 + 12;

    ///
    /// Creates an empty rendering.
    ///
    pub fn new(series: &str) -> Self {
        Self {
            series: series.to_owned(),
            benches: Vec::new(),
            warnings: Vec::new(),
        }
    }

    ///
    /// Whether no benchmark has been rendered.
    ///
    pub fn is_empty(&self) -> bool {
        self.benches.is_empty()
    }

    ///
    /// Returns the series of a benchmark.
    ///
    pub fn bench(&self, name: &str) -> Option<&BenchSeries<'a>> {
        self.benches.iter().find(|bench| bench.name == name)
    }

    ///
    /// Writes the latest measurement of each benchmark as a table.
    ///
    pub fn write_all<W>(&self, w: &mut W) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        let name_width = self
            .benches
            .iter()
            .map(|bench| bench.name.chars().count())
            .max()
            .unwrap_or_default()
            .max(Self::NAME_MIN_WIDTH);
        let width = name_width + Self::VALUE_COLUMNS_WIDTH;
        let caption_width = self.series.chars().count() + 6;

        writeln!(
            w,
            "╔═╡ {} ╞{}╗",
            self.series.bright_white(),
            "═".repeat(width.saturating_sub(caption_width) + 3)
        )?;
        if self.benches.is_empty() {
            writeln!(w, "║ {:width$} ║", "No benchmarks")?;
        }
        for bench in self.benches.iter() {
            let latest = bench
                .latest()
                .map(|point| util::format_number(point.value))
                .unwrap_or_default();
            writeln!(
                w,
                "║ {:name_width$} {:>6} {:>20} {:<12} ║",
                bench.name.bright_white(),
                bench.len(),
                latest.green(),
                bench.unit,
            )?;
        }
        writeln!(w, "╚{}╝", "═".repeat(width + 2))?;

        Ok(())
    }
}

///
/// Groups the measurements of a suite series by benchmark name.
///
pub fn render<'a>(suite: &'a BenchmarkSuite, series: &str) -> Rendering<'a> {
    render_filtered(suite, series, None)
}

///
/// Groups the measurements of a suite series by benchmark name, keeping only the benchmarks
/// whose name matches the filter.
///
/// Points are ordered by run date ascending; runs with equal dates keep their stored order.
///
pub fn render_filtered<'a>(
    suite: &'a BenchmarkSuite,
    series: &str,
    filter: Option<&Regex>,
) -> Rendering<'a> {
    let mut rendering = Rendering::new(series);
    let runs = match suite.series(series) {
        Some(runs) => runs,
        None => return rendering,
    };

    let mut ordered: Vec<(usize, &'a CommitRun)> = runs.iter().enumerate().collect();
    ordered.sort_by_key(|(_, run)| run.date);

    let mut indexes: HashMap<&'a str, usize> = HashMap::new();
    for (run_index, run) in ordered.into_iter() {
        let mut measured: HashSet<&'a str> = HashSet::with_capacity(run.benches.len());
        for bench in run.benches.iter() {
            if let Some(filter) = filter {
                if !filter.is_match(bench.name.as_str()) {
                    continue;
                }
            }

            let index = *indexes.entry(bench.name.as_str()).or_insert_with(|| {
                rendering
                    .benches
                    .push(BenchSeries::new(bench.name.as_str(), bench.unit.as_str()));
                rendering.benches.len() - 1
            });
            let bench_series = &mut rendering.benches[index];
            if !measured.insert(bench.name.as_str()) {
                rendering.warnings.push(SchemaWarning::DuplicateBench {
                    benchmark: bench.name.clone(),
                    commit: run.commit.id.clone(),
                    date: run.date,
                });
            }
            if bench.unit != bench_series.unit {
                rendering.warnings.push(SchemaWarning::UnitMismatch {
                    benchmark: bench.name.clone(),
                    expected: bench_series.unit.to_owned(),
                    found: bench.unit.clone(),
                    commit: run.commit.id.clone(),
                    date: run.date,
                });
            }
            bench_series.points.push(Point {
                date: run.date,
                value: bench.value,
                unit: bench.unit.as_str(),
                range: bench.range.as_deref(),
                extra: bench.extra.as_deref(),
                commit: &run.commit,
                run: run_index,
            });
        }
    }

    rendering
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use crate::model::suite::run::bench::BenchResult;
    use crate::model::suite::run::commit::Commit;
    use crate::model::suite::run::CommitRun;
    use crate::model::suite::BenchmarkSuite;
    use crate::warning::SchemaWarning;

    const DATA: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/data.js"));

    fn run(id: &str, date: u64, benches: &[(&str, f64, &str)]) -> CommitRun {
        CommitRun::new(
            Commit {
                id: id.to_owned(),
                message: format!("commit {id}"),
                ..Default::default()
            },
            date,
            "pytest",
            benches
                .iter()
                .map(|(name, value, unit)| BenchResult::new(*name, *value, *unit))
                .collect(),
        )
    }

    fn shuffled() -> BenchmarkSuite {
        let mut suite = BenchmarkSuite::new("https://example.com/repo");
        for run in [
            run("c", 300, &[("a", 3.0, "ms"), ("b", 30.0, "ms")]),
            run("a", 100, &[("a", 1.0, "ms")]),
            run("b", 200, &[("b", 20.0, "ms"), ("a", 2.0, "ms")]),
        ] {
            suite.append("Benchmark", run).expect("Always valid");
        }
        suite
    }

    #[test]
    fn example() {
        let document = crate::Document::load(DATA).expect("Always valid");

        let rendering = super::render(&document.suite, "Benchmark");

        assert_eq!(rendering.benches.len(), 3);
        assert!(rendering.warnings.is_empty());
        let bench = rendering
            .bench("benchmarks/test_geometry.py::test_vector_operations")
            .expect("Always exists");
        assert_eq!(
            bench.triples().collect::<Vec<_>>(),
            vec![(1753883804515, 947443.3093421741, "iter/sec")]
        );
        assert_eq!(
            bench.points[0].extra,
            Some("mean: 1.0554721218035905 usec\nrounds: 199601")
        );
    }

    #[test]
    fn sorted_by_date() {
        let suite = shuffled();

        let rendering = super::render(&suite, "Benchmark");

        let names: Vec<&str> = rendering.benches.iter().map(|bench| bench.name).collect();
        assert_eq!(names, vec!["a", "b"]);
        let a: Vec<u64> = rendering.benches[0].triples().map(|(date, ..)| date).collect();
        assert_eq!(a, vec![100, 200, 300]);
        let b: Vec<f64> = rendering.benches[1]
            .triples()
            .map(|(_, value, _)| value)
            .collect();
        assert_eq!(b, vec![20.0, 30.0]);
    }

    #[test]
    fn triples_restart() {
        let suite = shuffled();
        let rendering = super::render(&suite, "Benchmark");
        let bench = &rendering.benches[0];

        let first: Vec<_> = bench.triples().collect();
        let second: Vec<_> = bench.triples().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn idempotent() {
        let suite = shuffled();
        assert_eq!(
            super::render(&suite, "Benchmark"),
            super::render(&suite, "Benchmark")
        );
    }

    #[test]
    fn equal_dates_keep_stored_order() {
        let mut suite = BenchmarkSuite::default();
        suite
            .append("Benchmark", run("first", 100, &[("a", 1.0, "ms")]))
            .expect("Always valid");
        suite
            .append("Benchmark", run("second", 100, &[("a", 2.0, "ms")]))
            .expect("Always valid");

        let rendering = super::render(&suite, "Benchmark");

        let commits: Vec<&str> = rendering.benches[0]
            .points
            .iter()
            .map(|point| point.commit.id.as_str())
            .collect();
        assert_eq!(commits, vec!["first", "second"]);
    }

    #[test]
    fn unit_mismatch() {
        let mut suite = shuffled();
        suite
            .append("Benchmark", run("d", 400, &[("a", 0.004, "s")]))
            .expect("Always valid");

        let rendering = super::render(&suite, "Benchmark");

        assert_eq!(rendering.benches[0].unit, "ms");
        assert_eq!(rendering.benches[0].len(), 4);
        assert_eq!(
            rendering.warnings,
            vec![SchemaWarning::UnitMismatch {
                benchmark: "a".to_owned(),
                expected: "ms".to_owned(),
                found: "s".to_owned(),
                commit: "d".to_owned(),
                date: 400,
            }]
        );
    }

    #[test]
    fn duplicate_bench_in_run() {
        let mut suite = shuffled();
        suite
            .append("Benchmark", run("d", 400, &[("b", 40.0, "ms"), ("b", 41.0, "ms")]))
            .expect("Always valid");

        let rendering = super::render(&suite, "Benchmark");

        assert_eq!(rendering.bench("b").map(|bench| bench.len()), Some(4));
        assert_eq!(
            rendering.warnings,
            vec![SchemaWarning::DuplicateBench {
                benchmark: "b".to_owned(),
                commit: "d".to_owned(),
                date: 400,
            }]
        );
    }

    #[test]
    fn filtered() {
        let suite = shuffled();
        let filter = Regex::new("^b$").expect("Always valid");

        let rendering = super::render_filtered(&suite, "Benchmark", Some(&filter));

        assert_eq!(rendering.benches.len(), 1);
        assert_eq!(rendering.benches[0].name, "b");
    }

    #[test]
    fn empty_entries() {
        let suite = BenchmarkSuite::load(r#"{ "lastUpdate": 0, "repoUrl": "", "entries": {} }"#)
            .expect("Always valid");

        let rendering = super::render(&suite, "Benchmark");

        assert!(rendering.is_empty());
        assert!(rendering.warnings.is_empty());
    }

    #[test]
    fn table() {
        let suite = shuffled();
        let rendering = super::render(&suite, "Benchmark");
        colored::control::set_override(false);

        let mut buffer = Vec::new();
        rendering.write_all(&mut buffer).expect("Always valid");
        let table = String::from_utf8(buffer).expect("Always valid");

        assert!(table.contains("Benchmark"));
        let row = table
            .lines()
            .find(|line| line.starts_with("║ a "))
            .expect("Always exists");
        assert!(row.contains(" 3 "));
        assert!(row.contains(" ms"));
        assert_eq!(table.lines().count(), 4);
        let widths: Vec<usize> = table.lines().map(|line| line.chars().count()).collect();
        assert!(widths.iter().all(|width| *width == widths[0]));

        let empty = super::render(&suite, "Missing");
        let mut buffer = Vec::new();
        empty.write_all(&mut buffer).expect("Always valid");
        let table = String::from_utf8(buffer).expect("Always valid");
        let widths: Vec<usize> = table.lines().map(|line| line.chars().count()).collect();
        assert_eq!(widths.len(), 3);
        assert!(widths.iter().all(|width| *width == widths[0]));
    }

    #[test]
    fn tooltip() {
        let suite = shuffled();
        let rendering = super::render(&suite, "Benchmark");

        assert_eq!(rendering.benches[0].points[0].tooltip(), "a commit a\n1 ms");
    }
}
