use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use numfmt_standard::{FormatConfig, NumberFormatter};

#[derive(Debug, Deserialize)]
struct TestCase {
    value: f64,
    format: String,
    expected: String,
}

#[derive(Debug, Deserialize)]
struct TestCases {
    cases: Vec<TestCase>,
}

#[test]
fn test_standard_case_suite() {
    let toml_path: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("standard_cases.toml");

    let toml_content = fs::read_to_string(&toml_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", toml_path.display()));
    let suite: TestCases = toml::from_str(&toml_content)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {e}", toml_path.display()));

    let config = FormatConfig::default();
    let formatter = NumberFormatter::new(&config);

    let mut failures = Vec::new();
    for case in &suite.cases {
        match formatter.format(case.value, &case.format) {
            Ok(actual) if actual == case.expected => {}
            Ok(actual) => failures.push(format!(
                "value {} with \"{}\": expected \"{}\", got \"{}\"",
                case.value, case.format, case.expected, actual
            )),
            Err(e) => failures.push(format!(
                "value {} with \"{}\": unexpected error: {e}",
                case.value, case.format
            )),
        }
    }

    assert!(
        failures.is_empty(),
        "{} case(s) failed:\n{}",
        failures.len(),
        failures.join("\n")
    );
}
