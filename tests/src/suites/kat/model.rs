//! Pure data model for known-answer test vectors.
//! No dependency on the rest of the framework.

use serde::Deserialize;
use std::collections::HashMap;

/// ----------------------------------------------------------------
/// 1. Leaf-level test case
/// ----------------------------------------------------------------
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(rename = "tcId")]
    pub test_id: u64,
    #[serde(default)]
    pub description: Option<String>,
    /// Hex-encoded inputs and expected outputs, keyed by field name
    #[serde(flatten)]
    pub fields: HashMap<String, String>,
    #[serde(default = "default_expected_result")]
    pub expected_result: ExpectedResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedResult {
    /// The operation succeeds and matches every expected output
    Valid,
    /// The operation fails or the verification answers false
    Invalid,
}

fn default_expected_result() -> ExpectedResult {
    ExpectedResult::Valid
}

/// ----------------------------------------------------------------
/// 2. Groups share one parameter set
/// ----------------------------------------------------------------
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestGroup {
    #[serde(rename = "tgId")]
    pub group_id: u64,
    /// Parameter set: a curve, hash or cipher name
    pub parameter_set: String,
    /// Group-level fields copied into every case that lacks them
    #[serde(flatten)]
    pub defaults: HashMap<String, String>,
    pub tests: Vec<TestCase>,
}

/// ----------------------------------------------------------------
/// 3. Whole suite (file)
/// ----------------------------------------------------------------
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuite {
    pub suite_name: String,
    /// Operation family the engine dispatches on
    pub algorithm: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(rename = "testGroups")]
    pub groups: Vec<TestGroup>,
}
