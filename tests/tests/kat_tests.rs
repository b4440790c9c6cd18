// tests/kat_tests.rs
use pkcrypt_tests::suites::kat::{loader, PkcryptEngine, Runner};

fn run(suite_name: &str) {
    let engine = PkcryptEngine;
    let suite = loader::load_suite_by_name(suite_name)
        .unwrap_or_else(|e| panic!("Failed to load {suite_name}: {e}"));

    println!("Running known-answer suite: {}", suite.suite_name);
    let summary = Runner::new(&engine).run_suite(&suite).unwrap();
    assert!(summary.passed > 0);
}

#[test]
fn test_ecdh_x_rfc7748() {
    run("ecdh_x");
}

#[test]
fn test_ecdsa_known_signatures() {
    run("ecdsa");
}

#[test]
fn test_hkdf_rfc5869() {
    run("hkdf");
}

#[test]
fn test_kmac256_nist_samples() {
    run("kmac256");
}

#[test]
fn test_aes_kw_rfc3394() {
    run("aes_kw");
}

#[test]
fn test_missing_suite_is_reported() {
    assert!(loader::load_suite_by_name("no-such-suite").is_err());
}
