//! CLI tests for generate paths that must not reach the network.
//!
//! Every command here points at a closed port; a test failing with a
//! connection error means validation ran too late.

mod support;
use support::*;

#[test]
fn test_generate_without_modes_fails_locally() {
    let t = Test::new();
    let output = t.generate_offline(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "select at least one deployment mode");
}

#[test]
fn test_generate_with_stale_token_still_needs_modes() {
    let t = Test::new();

    // Token was never issued: the resume step skips silently
    let output = t.generate_offline(&["--applied", "00000000-0000-4000-8000-000000000000"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "select at least one deployment mode");
}

#[test]
fn test_generate_rejects_malformed_env_pair() {
    let t = Test::new();
    let output = t.generate_offline(&["--mode", "standalone", "--env", "NOVALUE"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid KEY=VALUE pair");
}

#[test]
fn test_generate_rejects_malformed_option_pair() {
    let t = Test::new();
    let output = t.generate_offline(&["--mode", "standalone", "--option", "1bad=x"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid KEY=VALUE pair");
}
