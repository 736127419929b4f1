//! Per-case results of one harness run.

use std::fmt;

use serde::Serialize;

use crate::harness::executor::Outcome;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseReport {
    /// Operation signature, e.g. `int8(bool, i32)`.
    pub operation: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} passed, {} failed, {} skipped", self.passed, self.failed, self.skipped)
    }
}

/// One entry per discovered (and selected) operation, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunReport {
    pub cases: Vec<CaseReport>,
}

impl RunReport {
    pub fn new(cases: Vec<CaseReport>) -> Self {
        RunReport { cases }
    }

    pub fn summary(&self) -> Summary {
        self.cases.iter().fold(Summary::default(), |mut acc, case| {
            match case.outcome {
                Outcome::Pass => acc.passed += 1,
                Outcome::Fail(_) => acc.failed += 1,
                Outcome::Skipped(_) => acc.skipped += 1,
            }
            acc
        })
    }

    /// No case failed. Skipped cases do not count against success.
    pub fn is_success(&self) -> bool {
        self.cases.iter().all(|case| !case.outcome.is_fail())
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseReport> {
        self.cases.iter().filter(|case| case.outcome.is_fail())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &CaseReport> {
        self.cases.iter().filter(|case| case.outcome.is_skipped())
    }

    pub fn get(&self, operation: &str) -> Option<&CaseReport> {
        self.cases.iter().find(|case| case.operation == operation)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for case in &self.cases {
            let status = match case.outcome {
                Outcome::Pass => "PASS",
                Outcome::Fail(_) => "FAIL",
                Outcome::Skipped(_) => "SKIP",
            };
            write!(f, "{status} {}", case.operation)?;
            if let Some(message) = case.outcome.message() {
                write!(f, ": {message}")?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", self.summary())
    }
}
