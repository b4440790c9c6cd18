//! Generic driver that executes a `TestSuite` using a pluggable engine.

use super::error::Result;
use super::model::{ExpectedResult, TestCase, TestGroup, TestSuite};

/// Trait every crypto back-end must implement.
pub trait KatEngine {
    /// Execute one test case: `Ok(())` when it succeeds and matches
    fn run(&self, algorithm: &str, group: &TestGroup, case: &TestCase) -> Result<()>;
}

/// Tally of one suite run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

/// Thin wrapper that walks suites and tallies results.
pub struct Runner<'e, E: KatEngine> {
    engine: &'e E,
}

impl<'e, E: KatEngine> Runner<'e, E> {
    pub fn new(engine: &'e E) -> Self {
        Self { engine }
    }

    pub fn run_suite(&self, suite: &TestSuite) -> std::result::Result<Summary, String> {
        let mut summary = Summary::default();

        for group in &suite.groups {
            println!(
                "Running group {}: {} - {}",
                group.group_id, suite.algorithm, group.parameter_set
            );

            for case in &group.tests {
                let res = self.engine.run(&suite.algorithm, group, case);
                match (res, case.expected_result) {
                    (Ok(()), ExpectedResult::Valid) | (Err(_), ExpectedResult::Invalid) => {
                        summary.passed += 1;
                    }
                    (Ok(()), ExpectedResult::Invalid) => {
                        summary.failed += 1;
                        eprintln!("Case {} succeeded but was expected to fail", case.test_id);
                    }
                    (Err(e), ExpectedResult::Valid) => {
                        summary.failed += 1;
                        eprintln!("Case {} failed: {}", case.test_id, e);
                    }
                }
            }
        }

        println!(
            "{}: {} passed, {} failed",
            suite.suite_name, summary.passed, summary.failed
        );

        if summary.failed > 0 {
            Err(format!("{} test cases failed", summary.failed))
        } else {
            Ok(summary)
        }
    }
}
