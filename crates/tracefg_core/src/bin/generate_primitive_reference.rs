//! Generate Markdown reference docs from `tracefg_core::lang` registries.
//!
//! This binary renders the primitive, factor and variable-kind registries into a single Markdown page under
//! `docs/reference/`.
//!
//! ## Notes
//! - The generated file is meant to be checked into the repo and treated as a derived artifact.
//! - Do not edit the generated Markdown by hand; update the registries instead.
//!
//! ## Examples
//! Run from the workspace root:
//! ```bash
//! cargo run -p tracefg_core --bin generate_primitive_reference
//! ```
//!
//! ## Panics
//! - If the workspace root cannot be resolved.
//! - If output files cannot be written.

use std::fs;
use std::path::{Path, PathBuf};

use tracefg_core::lang::{conventions, evidence, factors, primitives, variables};

fn main() {
    let root = workspace_root();

    let out_dir = root.join("docs/reference");
    fs::create_dir_all(&out_dir).expect("create docs/reference/");

    write_primitive_reference(&out_dir.join("primitives.md"));
}

fn write_primitive_reference(path: &Path) {
    let mut out = String::new();
    out.push_str("# tracefg primitive reference\n\n");
    out.push_str("!!! warning \"Generated file\"\n");
    out.push_str("    Do not edit this page by hand.\n");
    out.push_str("    Regenerate with: `cargo run -p tracefg_core --bin generate_primitive_reference`\n\n");

    render_primitives_section(&mut out);
    render_evidence_section(&mut out);
    render_factors_section(&mut out);
    render_variables_section(&mut out);

    while out.ends_with("\n\n") {
        out.pop();
    }
    fs::write(path, out).expect("write primitives.md");
}

fn code_list(items: &[&str]) -> String {
    items.iter().map(|a| format!("`{a}`")).collect::<Vec<_>>().join(", ")
}

fn render_primitives_section(out: &mut String) {
    out.push_str("## Primitives\n\n");
    out.push_str(&format!(
        "ERPs reach the translator as `{}('{}<name>', [args..., metadata])`; the prefix is stripped by convention.\n\n",
        conventions::ERP_DISPATCHER,
        conventions::WRAPPED_ERP_PREFIX
    ));
    out.push_str("| Canonical | Aliases | Kind | Factor | Variable | Arity | Stability | Description |\n");
    out.push_str("|---|---|---|---|---|---|---|---|\n");

    for p in primitives::PRIMITIVES {
        out.push_str(&format!(
            "| `{}` | {} | {:?} | `{}` | `{}` | {} | {} | {} |\n",
            p.item.canonical,
            code_list(p.item.aliases),
            p.kind,
            factors::as_str(p.factor),
            variables::as_str(p.output),
            p.arity.describe(),
            p.item.stability.label(),
            p.item.description
        ));
    }
    out.push('\n');
}

fn render_evidence_section(out: &mut String) {
    out.push_str("## Evidence\n\n");
    out.push_str("| Canonical | Description |\n");
    out.push_str("|---|---|\n");
    for e in evidence::EVIDENCE_KINDS {
        out.push_str(&format!("| `{}` | {} |\n", e.canonical, e.description));
    }
    out.push('\n');
}

fn render_factors_section(out: &mut String) {
    out.push_str("## Factor constructors\n\n");
    out.push_str("| Java class | Category | Description |\n");
    out.push_str("|---|---|---|\n");
    for f in factors::FACTORS {
        out.push_str(&format!(
            "| `{}` | {:?} | {} |\n",
            f.item.canonical, f.category, f.item.description
        ));
    }
    out.push('\n');
}

fn render_variables_section(out: &mut String) {
    out.push_str("## Variable kinds\n\n");
    out.push_str("| Java class | Continuous | Description |\n");
    out.push_str("|---|---|---|\n");
    for v in variables::VARIABLE_KINDS {
        out.push_str(&format!(
            "| `{}` | {} | {} |\n",
            v.item.canonical,
            if v.continuous { "yes" } else { "no" },
            v.item.description
        ));
    }
    out.push('\n');
}

fn workspace_root() -> PathBuf {
    // crates/tracefg_core -> crates -> workspace root
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .expect("workspace root (two levels above crates/tracefg_core)")
}
