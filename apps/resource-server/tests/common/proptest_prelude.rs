// Shared proptest configuration for integration tests.
//
// PROPTEST_CASES overrides the number of cases per property (default 64).

pub fn proptest_prelude_config() -> proptest::prelude::ProptestConfig {
    let base = proptest::prelude::ProptestConfig::default();

    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(64)
        .max(1);

    proptest::prelude::ProptestConfig {
        // No regression files from integration tests
        failure_persistence: None,
        cases,
        ..base
    }
}
