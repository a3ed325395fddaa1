//! Property-based tests for the translator
//!
//! These tests use proptest to verify invariants across many randomly
//! generated traces, catching edge cases that hand-written tests might miss.

use std::collections::HashSet;

use proptest::prelude::*;
use tracefg::backend::{JavaExpr, JavaStmt};
use tracefg::{PrimitiveRegistry, TranslateConfig, Translator};

/// One generated trace statement defining `ab<k>` from earlier variables.
#[derive(Debug, Clone)]
enum Step {
    Flip(f64),
    Binary(&'static str, usize, usize),
    Not(usize),
    Branch(usize, usize, usize),
    /// Conditional whose branches are calls, so both get branch-local variables.
    CallBranch(usize, f64, usize),
    /// Conditional nested in the consequent, with call-valued inner branches.
    NestedBranch(usize, usize, f64, usize, usize),
    Condition(usize),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0.0f64..=1.0).prop_map(Step::Flip),
        (prop::sample::select(vec!["and", "or", "xor"]), any::<usize>(), any::<usize>())
            .prop_map(|(op, a, b)| Step::Binary(op, a, b)),
        any::<usize>().prop_map(Step::Not),
        (any::<usize>(), any::<usize>(), any::<usize>()).prop_map(|(c, a, b)| Step::Branch(c, a, b)),
        (any::<usize>(), 0.0f64..=1.0, any::<usize>()).prop_map(|(c, p, a)| Step::CallBranch(c, p, a)),
        (any::<usize>(), any::<usize>(), 0.0f64..=1.0, any::<usize>(), any::<usize>())
            .prop_map(|(c, d, p, a, b)| Step::NestedBranch(c, d, p, a, b)),
        any::<usize>().prop_map(Step::Condition),
    ]
}

/// Render steps as a trace; every reference points at an already-defined variable.
fn render_trace(first: f64, steps: &[Step]) -> String {
    let mut source = format!("var ab0 = random('wrapped_flip',[{},JSON.parse('null')]);\n", first);
    let mut defined = 1;
    for step in steps {
        let k = defined;
        let line = match step {
            Step::Flip(p) => format!("var ab{} = random('wrapped_flip',[{},JSON.parse('null')]);", k, p),
            Step::Binary(op, a, b) => format!("var ab{} = {}(ab{}, ab{});", k, op, a % k, b % k),
            Step::Not(a) => format!("var ab{} = not(ab{});", k, a % k),
            Step::Branch(c, a, b) => format!(
                "if (ab{c}) {{ var ab{k} = ab{a}; }} else {{ var ab{k} = ab{b}; }}",
                c = c % k,
                a = a % k,
                b = b % k,
                k = k
            ),
            Step::CallBranch(c, p, a) => format!(
                "if (ab{c}) {{ var ab{k} = flip({p}); }} else {{ var ab{k} = not(ab{a}); }}",
                c = c % k,
                p = p,
                a = a % k,
                k = k
            ),
            Step::NestedBranch(c, d, p, a, b) => format!(
                "if (ab{c}) {{ if (ab{d}) {{ var ab{k} = flip({p}); }} else {{ var ab{k} = and(ab{a}, ab{b}); }} }} \
                 else {{ var ab{k} = ab{a}; }}",
                c = c % k,
                d = d % k,
                p = p,
                a = a % k,
                b = b % k,
                k = k
            ),
            Step::Condition(a) => {
                source.push_str(&format!("condition(ab{});\n", a % k));
                continue;
            }
        };
        source.push_str(&line);
        source.push('\n');
        defined += 1;
    }
    source.push_str(&format!("ab{};\n", defined - 1));
    source
}

fn trace_strategy() -> impl Strategy<Value = String> {
    (0.0f64..=1.0, prop::collection::vec(step_strategy(), 0..24)).prop_map(|(p, steps)| render_trace(p, &steps))
}

fn statements(source: &str) -> Vec<JavaStmt> {
    let program = tracefg_syntax::parse_source(source).expect("generated trace must parse");
    let ir = tracefg::ir::lower_program(&program).expect("generated trace must lower");
    let registry = PrimitiveRegistry::with_builtins();
    let config = TranslateConfig::default();
    Translator::new(&registry, &config)
        .translate_statements(&ir)
        .expect("generated trace must translate")
}

proptest! {
    /// Property: translating the same trace twice gives identical text
    #[test]
    fn translation_is_deterministic(source in trace_strategy()) {
        let config = TranslateConfig::default();
        let first = tracefg::translate_source(&source, &config).expect("first translation failed");
        let second = tracefg::translate_source(&source, &config).expect("second translation failed");
        prop_assert_eq!(first, second);
    }

    /// Property: every variable a statement reads was declared by an earlier statement, and no name is declared
    /// twice (branch-local names of nested conditionals included)
    #[test]
    fn declaration_precedes_use(source in trace_strategy()) {
        let mut declared = HashSet::new();
        for stmt in statements(&source) {
            for name in stmt.referenced_variables() {
                prop_assert!(declared.contains(name), "`{}` used before declaration in `{}`", name, stmt);
            }
            if let Some(name) = stmt.declared_name() {
                prop_assert!(declared.insert(name.to_string()), "`{}` declared twice", name);
            }
        }
    }

    /// Property: a multiplexer never feeds its own output back in as an input
    #[test]
    fn multiplexer_output_is_not_an_input(source in trace_strategy()) {
        for stmt in statements(&source) {
            if let JavaStmt::AddFactor { constructor, output, inputs, .. } = &stmt {
                if constructor == "Multiplexer" {
                    prop_assert!(
                        !inputs.contains(&JavaExpr::Ident(output.clone())),
                        "`{}` is both output and input in `{}`",
                        output,
                        stmt
                    );
                }
            }
        }
    }

    /// Property: argument lists never contain empty slots or stray separators
    #[test]
    fn separators_are_well_formed(source in trace_strategy()) {
        let java = tracefg::translate_source(&source, &TranslateConfig::default()).expect("translation failed");
        for line in java.lines() {
            prop_assert!(!line.contains(", ,"), "{}", line);
            prop_assert!(!line.contains("(,"), "{}", line);
            prop_assert!(!line.contains(", )"), "{}", line);
            prop_assert!(!line.contains(",)"), "{}", line);
            prop_assert!(line.ends_with(';'), "{}", line);
        }
    }

    /// Property: the output always ends with the four query statements for the last variable
    #[test]
    fn query_comes_last(source in trace_strategy()) {
        let stmts = statements(&source);
        prop_assert!(stmts.len() >= 4);
        let tail = &stmts[stmts.len() - 4..];
        let is_set_iterations = matches!(tail[0], JavaStmt::SetIterations { .. });
        let is_solve = matches!(tail[1], JavaStmt::Solve { .. });
        let is_extract = matches!(tail[2], JavaStmt::ExtractBelief { .. });
        let is_print = matches!(tail[3], JavaStmt::PrintBelief { .. });
        prop_assert!(is_set_iterations && is_solve && is_extract && is_print);
    }
}
