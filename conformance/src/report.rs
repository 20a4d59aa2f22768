//! Conformance report types: results, severity levels, and report aggregation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity level of a conformance check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The check passed.
    Pass,
    /// The check identified a warning (non-blocking).
    Warning,
    /// The check failed (blocks conformance).
    Failure,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pass => "PASS",
            Self::Warning => "WARN",
            Self::Failure => "FAIL",
        })
    }
}

/// A single conformance check result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    /// Short identifier of the validator that produced this result.
    pub validator: String,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Offending inputs, one per line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl TestResult {
    fn with(
        validator: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        details: Vec<String>,
    ) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity,
            details,
        }
    }

    /// Creates a passing result.
    pub fn pass(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with(validator, message, Severity::Pass, Vec::new())
    }

    /// Creates a failure result.
    pub fn fail(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with(validator, message, Severity::Failure, Vec::new())
    }

    /// Creates a failure result listing the offending inputs.
    pub fn fail_with_details(
        validator: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self::with(validator, message, Severity::Failure, details)
    }

    /// Creates a warning result.
    pub fn warn(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with(validator, message, Severity::Warning, Vec::new())
    }

    /// Pass when `mismatches` is empty, failure listing them otherwise.
    pub fn from_mismatches(
        validator: impl Into<String>,
        checked: usize,
        what: &str,
        mismatches: Vec<String>,
    ) -> Self {
        if mismatches.is_empty() {
            Self::pass(validator, format!("{checked} {what} agree"))
        } else {
            Self::fail_with_details(
                validator,
                format!("{} of {checked} {what} disagree", mismatches.len()),
                mismatches,
            )
        }
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.validator, self.message)?;
        for detail in &self.details {
            write!(f, "\n       {detail}")?;
        }
        Ok(())
    }
}

/// Aggregated conformance report from all validators.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// All individual test results across all validators.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Extends this report with results from another report.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Returns the count of failed checks.
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// Returns the count of warnings.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Returns true if all checks passed (no failures).
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }

    fn count(&self, severity: Severity) -> usize {
        self.results.iter().filter(|r| r.severity == severity).count()
    }
}
