//! Loads known-answer test vectors from JSON files.

use super::model::TestSuite;
use std::fs;
use std::path::{Path, PathBuf};

/// ----------------------------------------------------------------
/// Get the path to the JSON test vectors
/// ----------------------------------------------------------------
fn kat_json_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join("kat_json")
}

/// ----------------------------------------------------------------
/// Load one suite by file stem, pushing group defaults down into cases
/// ----------------------------------------------------------------
pub fn load_suite_by_name(suite_name: &str) -> Result<TestSuite, String> {
    let path = kat_json_dir().join(format!("{suite_name}.json"));
    let json = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let mut suite: TestSuite =
        serde_json::from_str(&json).map_err(|e| format!("Failed to parse JSON: {}", e))?;

    for group in &mut suite.groups {
        for tc in &mut group.tests {
            for (k, v) in &group.defaults {
                tc.fields.entry(k.clone()).or_insert_with(|| v.clone());
            }
        }
    }

    Ok(suite)
}
