//! Regression test parameters and comparisons

use warpix_core::Raster;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results and fail on mismatch (default)
    #[default]
    Compare,
    /// Run everything but report mismatches without failing
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable.
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test state
///
/// Tracks the test name, the index of the current comparison, and the
/// failures seen so far. Every comparison logs its own diagnostics;
/// [`RegParams::cleanup`] renders the verdict.
pub struct RegParams {
    /// Name of the test (e.g. "warp")
    pub test_name: String,
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    failures: Vec<String>,
}

impl RegParams {
    /// Create regression test state for `test_name`.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {test_name}_reg   ///////////////");
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {mode:?}");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            failures: Vec::new(),
        }
    }

    /// Index of the most recent comparison.
    pub fn index(&self) -> usize {
        self.index
    }

    fn record_failure(&mut self, message: String) {
        eprintln!("{message}");
        self.failures.push(message);
    }

    /// Compare two floating-point values within `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        if diff > delta {
            self.record_failure(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {diff} but allowed delta = {delta}\n\
                 expected = {expected}, actual = {actual}",
                self.test_name, self.index
            ));
            false
        } else {
            true
        }
    }

    /// Compare two rasters for exact pixel equality.
    pub fn compare_rasters(&mut self, expected: &Raster, actual: &Raster) -> bool {
        self.index += 1;

        if expected.width() != actual.width() || expected.height() != actual.height() {
            self.record_failure(format!(
                "Failure in {}_reg: raster comparison for index {} - \
                 dimension mismatch: {}x{} vs {}x{}",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            ));
            return false;
        }

        let mismatched = expected
            .pixels()
            .iter()
            .zip(actual.pixels())
            .filter(|(a, b)| a != b)
            .count();
        if mismatched > 0 {
            self.record_failure(format!(
                "Failure in {}_reg: raster comparison for index {} - \
                 {mismatched} mismatched pixels",
                self.test_name, self.index
            ));
            return false;
        }

        true
    }

    /// Record an arbitrary check.
    pub fn check(&mut self, ok: bool, label: &str) -> bool {
        self.index += 1;
        if !ok {
            self.record_failure(format!(
                "Failure in {}_reg: check '{label}' for index {}",
                self.test_name, self.index
            ));
        }
        ok
    }

    /// Report the verdict. Returns true when every comparison passed,
    /// or unconditionally in display mode.
    pub fn cleanup(&self) -> bool {
        if self.failures.is_empty() {
            eprintln!("SUCCESS: {}_reg ({} checks)", self.test_name, self.index);
            return true;
        }
        eprintln!(
            "FAILURE: {}_reg ({} of {} checks failed)",
            self.test_name,
            self.failures.len(),
            self.index
        );
        self.mode == RegTestMode::Display
    }
}
