//! Regression test parameters and operations

use ndarray::ArrayView2;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare computed values with expectations (default)
    #[default]
    Compare,
    /// Compare, and also print every compared field
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "spike")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record_failure(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta || diff.is_nan() {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg)
        } else {
            true
        }
    }

    /// Check that `actual` is strictly below `bound`
    pub fn compare_less(&mut self, actual: f64, bound: f64) -> bool {
        self.index += 1;

        if actual < bound {
            true
        } else {
            let msg = format!(
                "Failure in {}_reg: ordering check for index {}\n\
                 expected {} < {}",
                self.test_name, self.index, actual, bound
            );
            self.record_failure(msg)
        }
    }

    /// Compare two fields sample by sample
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected field
    /// * `actual` - Actual computed field
    /// * `delta` - Maximum allowed per-sample difference
    ///
    /// # Returns
    ///
    /// `true` if shapes match and every sample is within delta.
    pub fn compare_fields(
        &mut self,
        expected: ArrayView2<'_, f64>,
        actual: ArrayView2<'_, f64>,
        delta: f64,
    ) -> bool {
        self.index += 1;

        if self.display() {
            eprintln!("Field {} (expected):\n{:.4}", self.index, expected);
            eprintln!("Field {} (actual):\n{:.4}", self.index, actual);
        }

        if expected.dim() != actual.dim() {
            let msg = format!(
                "Failure in {}_reg: field comparison for index {} - shape mismatch {:?} vs {:?}",
                self.test_name,
                self.index,
                expected.dim(),
                actual.dim()
            );
            return self.record_failure(msg);
        }

        for ((pos, &e), &a) in expected.indexed_iter().zip(actual.iter()) {
            let diff = (e - a).abs();
            if diff > delta || diff.is_nan() {
                let msg = format!(
                    "Failure in {}_reg: field comparison for index {} - sample mismatch at {:?}\n\
                     expected = {}, actual = {}, allowed delta = {}",
                    self.test_name, self.index, pos, e, a, delta
                );
                return self.record_failure(msg);
            }
        }

        true
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_mode_parse() {
        assert_eq!(RegTestMode::parse("display"), RegTestMode::Display);
        assert_eq!(RegTestMode::parse("DISPLAY"), RegTestMode::Display);
        assert_eq!(RegTestMode::parse(""), RegTestMode::Compare);
        assert_eq!(RegTestMode::parse("generate"), RegTestMode::Compare);
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.compare_values(1.0, f64::NAN, 10.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 2);
    }

    #[test]
    fn test_compare_less() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_less(1.0, 2.0));
        assert!(!rp.compare_less(2.0, 2.0));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_fields() {
        let mut rp = RegParams::new("test");
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[1.0, 2.0], [3.0, 4.25]];
        assert!(rp.compare_fields(a.view(), a.view(), 0.0));
        assert!(rp.compare_fields(a.view(), b.view(), 0.5));
        assert!(rp.is_success());

        assert!(!rp.compare_fields(a.view(), b.view(), 0.1));
        let c = array![[1.0, 2.0, 3.0]];
        assert!(!rp.compare_fields(a.view(), c.view(), 10.0));
        assert_eq!(rp.failures().len(), 2);
    }
}
