//! Hygiene — source-level rules for the cart crate.
//!
//! Scans `src/` (test files excluded) for patterns the crate does not allow.
//! Every rule has a zero budget: the cart must never panic in the browser,
//! must report or log storage failures instead of dropping them, and must
//! stay independent of the DOM so it can run in tests and on the server.

use std::fs;
use std::path::Path;

/// `(pattern, why it is forbidden)`.
const RULES: &[(&str, &str)] = &[
    (".unwrap()", "panics"),
    (".expect(", "panics"),
    ("panic!(", "panics"),
    ("unreachable!(", "panics"),
    ("todo!(", "unfinished"),
    ("unimplemented!(", "unfinished"),
    ("let _ =", "silently discards a result"),
    (".ok()", "silently discards an error"),
    ("#[allow(dead_code)]", "hides unused code"),
    ("println!(", "use the log crate"),
    ("web_sys", "cart must stay DOM-free"),
];

fn source_files() -> Vec<(String, String)> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|(path, _)| path.ends_with("store.rs")));
}

#[test]
fn forbidden_patterns_are_absent() {
    let files = source_files();
    let mut violations = Vec::new();
    for (pattern, why) in RULES {
        for (path, content) in &files {
            let hits = content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            if hits > 0 {
                violations.push(format!("  {path}: {hits}x `{pattern}` ({why})"));
            }
        }
    }
    assert!(
        violations.is_empty(),
        "hygiene violations:\n{}",
        violations.join("\n")
    );
}
