//!
//! pytest-benchmark JSON report.
//!

pub mod stats;

use crate::model::suite::run::bench::BenchResult;
use crate::util;

use self::stats::Stats;

///
/// pytest-benchmark JSON report, as written by `--benchmark-json`.
///
#[derive(Debug, serde::Deserialize)]
pub struct PytestReport {
    /// The benchmarked tests.
    pub benchmarks: Vec<PytestBenchmark>,
}

///
/// A single benchmarked test.
///
#[derive(Debug, serde::Deserialize)]
pub struct PytestBenchmark {
    /// Full test path, for example `benchmarks/test_geometry.py::test_vector_operations`.
    pub fullname: String,
    /// Timing statistics.
    pub stats: Stats,
}

impl PytestBenchmark {
    /// The throughput unit of pytest-benchmark results.
    pub const UNIT: &'static str = "iter/sec";
}

impl From<PytestBenchmark> for BenchResult {
    fn from(benchmark: PytestBenchmark) -> Self {
        let stats = benchmark.stats;
        let (mean, mean_unit) = stats.readable_mean();
        Self {
            name: benchmark.fullname,
            value: stats.ops,
            unit: PytestBenchmark::UNIT.to_owned(),
            range: Some(format!("stddev: {}", util::format_number(stats.stddev))),
            extra: Some(format!(
                "mean: {} {mean_unit}\nrounds: {}",
                util::format_number(mean),
                stats.rounds
            )),
        }
    }
}

impl From<PytestReport> for Vec<BenchResult> {
    fn from(report: PytestReport) -> Self {
        report
            .benchmarks
            .into_iter()
            .map(BenchResult::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::PytestReport;
    use crate::model::document::Document;
    use crate::model::suite::run::bench::BenchResult;

    const REPORT: &str = r#"{
        "machine_info": { "python_version": "3.12.4" },
        "benchmarks": [
            {
                "group": null,
                "name": "test_matrix_multiplication",
                "fullname": "benchmarks/test_geometry.py::test_matrix_multiplication",
                "stats": {
                    "min": 2.0e-6,
                    "max": 0.0001,
                    "mean": 9.5367431640625e-7,
                    "stddev": 4.160929496183848e-7,
                    "rounds": 66234,
                    "median": 2.3e-6,
                    "ops": 424933.908451389
                }
            },
            {
                "name": "test_load_parts",
                "fullname": "benchmarks/test_parts_loading.py::test_load_parts",
                "stats": { "mean": 0.0009765625, "stddev": 0.00002, "rounds": 12, "ops": 1024.0 }
            },
            {
                "name": "test_slow",
                "fullname": "benchmarks/test_parts_loading.py::test_slow",
                "stats": { "mean": 0.5, "stddev": 0.25, "rounds": 5, "ops": 2.0 }
            },
            {
                "name": "test_slowest",
                "fullname": "benchmarks/test_parts_loading.py::test_slowest",
                "stats": { "mean": 2.5, "stddev": 1.0, "rounds": 1, "ops": 0.4 }
            }
        ],
        "datetime": "2025-07-30T13:56:40.000000",
        "version": "4.0.0"
    }"#;

    fn benches() -> Vec<BenchResult> {
        serde_json::from_str::<PytestReport>(REPORT)
            .expect("Always valid")
            .into()
    }

    #[test]
    fn ok() {
        let benches = benches();

        assert_eq!(benches.len(), 4);
        assert_eq!(
            benches[0],
            BenchResult {
                name: "benchmarks/test_geometry.py::test_matrix_multiplication".to_owned(),
                value: 424933.908451389,
                unit: "iter/sec".to_owned(),
                range: Some("stddev: 4.160929496183848e-7".to_owned()),
                extra: Some("mean: 953.67431640625 nsec\nrounds: 66234".to_owned()),
            }
        );
    }

    #[test]
    fn reproduces_stored_results() {
        let report = r#"{
            "benchmarks": [
                {
                    "fullname": "benchmarks/test_geometry.py::test_matrix_multiplication",
                    "stats": {
                        "mean": 2.353307138148512e-6,
                        "stddev": 4.160929496183848e-7,
                        "rounds": 66234,
                        "ops": 424933.908451389
                    }
                },
                {
                    "fullname": "benchmarks/test_geometry.py::test_identity_matrix_creation",
                    "stats": {
                        "mean": 4.986233885926283e-7,
                        "stddev": 5.1342045952242124e-8,
                        "rounds": 99711,
                        "ops": 2005521.6479566158
                    }
                }
            ]
        }"#;
        let benches: Vec<BenchResult> = serde_json::from_str::<PytestReport>(report)
            .expect("Always valid")
            .into();

        let data = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/data.js"));
        let document = Document::load(data).expect("Always valid");
        let stored = &document.suite.series("Benchmark").expect("Always exists")[0].benches;
        assert_eq!(benches[0], stored[0]);
        assert_eq!(benches[1], stored[2]);
    }

    #[test]
    fn mean_units() {
        let extras: Vec<String> = benches()
            .into_iter()
            .skip(1)
            .map(|bench| bench.extra.unwrap_or_default())
            .collect();

        assert_eq!(
            extras,
            vec![
                "mean: 976.5625 usec\nrounds: 12",
                "mean: 500 msec\nrounds: 5",
                "mean: 2.5 sec\nrounds: 1",
            ]
        );
    }
}
