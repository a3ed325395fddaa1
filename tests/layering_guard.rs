//! Layering guardrails for the workspace crates.
//!
//! - `tracefg_core` is pure vocabulary and must not depend on anything.
//! - `tracefg_syntax` may depend on `tracefg_core` but never on the root `tracefg` crate.
//!
//! These tests scan the member manifests' `[dependencies]` tables.

/// Dependency names listed in a manifest's `[dependencies]` table.
fn dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_has_no_dependencies() {
    let deps = dependencies(include_str!("../crates/tracefg_core/Cargo.toml"));
    assert!(deps.is_empty(), "`tracefg_core` must stay dependency-free, found {:?}", deps);
}

#[test]
fn syntax_does_not_depend_on_root_crate() {
    let deps = dependencies(include_str!("../crates/tracefg_syntax/Cargo.toml"));
    assert!(deps.iter().any(|d| d == "tracefg_core"));
    assert!(
        !deps.iter().any(|d| d == "tracefg"),
        "`tracefg_syntax` must not depend on the translator crate"
    );
}
