//! Runs every `samples/<case>/input.svg` and compares the tree with the
//! case's `output.json`.

use std::fs;
use std::path::{Path, PathBuf};

use svgparse::parse;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn fixture_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut paths = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    paths.sort();
    Ok(paths)
}

#[test]
fn test_samples_match_expected_output() -> TestResult {
    let mut failures = Vec::new();
    let cases = sorted_entries(&fixture_dir("samples"))?;

    for case in &cases {
        let input = fs::read_to_string(case.join("input.svg"))?;
        let expected: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(case.join("output.json"))?)?;

        match parse(&input) {
            Ok(root) => {
                let actual = serde_json::to_value(&root)?;
                if actual != expected {
                    failures.push(format!(
                        "{}: tree differs\nexpected: {expected:#}\nactual: {actual:#}",
                        case.display()
                    ));
                }
            }
            Err(err) => failures.push(format!("{}: {err}", case.display())),
        }
    }

    if cases.is_empty() {
        return Err(std::io::Error::other("no sample fixtures found").into());
    }
    if !failures.is_empty() {
        return Err(std::io::Error::other(failures.join("\n\n")).into());
    }
    Ok(())
}

#[test]
fn test_invalid_fixtures_fail() -> TestResult {
    for path in sorted_entries(&fixture_dir("invalid"))? {
        let content = fs::read_to_string(&path)?;
        if parse(&content).is_ok() {
            return Err(std::io::Error::other(format!(
                "Should fail to parse invalid file: {path:?}"
            ))
            .into());
        }
    }
    Ok(())
}

#[test]
fn test_repeated_parses_are_equal() -> TestResult {
    for case in sorted_entries(&fixture_dir("samples"))? {
        let input = fs::read_to_string(case.join("input.svg"))?;
        let first = parse(&input)?;
        let second = parse(&input)?;
        if first != second {
            return Err(std::io::Error::other(format!("{}: parses differ", case.display())).into());
        }
    }
    Ok(())
}
