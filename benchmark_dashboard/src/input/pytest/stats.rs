//!
//! Statistics of a single pytest-benchmark test.
//!

///
/// Statistics of a single pytest-benchmark test.
///
/// Times are in seconds.
///
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Stats {
    /// Mean time of a round.
    pub mean: f64,
    /// Standard deviation of the round time.
    pub stddev: f64,
    /// Number of rounds.
    pub rounds: u64,
    /// Operations per second.
    pub ops: f64,
}

impl Stats {
    ///
    /// Scales the mean time to a human-readable unit.
    ///
    pub fn readable_mean(&self) -> (f64, &'static str) {
        let seconds = self.mean;
        if seconds < 1.0e-6 {
            (seconds * 1.0e9, "nsec")
        } else if seconds < 1.0e-3 {
            (seconds * 1.0e6, "usec")
        } else if seconds < 1.0 {
            (seconds * 1.0e3, "msec")
        } else {
            (seconds, "sec")
        }
    }
}
