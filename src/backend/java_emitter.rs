//! Java code emitter - accumulates rendered statements
//!
//! The translator's output is a plain statement list, one per line, with no header. [`JavaEmitter::harness`] wraps
//! the same statements in a runnable class for the CLI's `--wrap` option.

use super::target::JavaStmt;
use crate::config::TranslateConfig;

/// Imports the harness needs: the graph, every variable kind, every factor function, domains and `Arrays`.
const HARNESS_IMPORTS: &[&str] = &[
    "com.analog.lyric.dimple.factorfunctions.*",
    "com.analog.lyric.dimple.model.core.FactorGraph",
    "com.analog.lyric.dimple.model.domains.DiscreteDomain",
    "com.analog.lyric.dimple.model.variables.*",
    "java.util.Arrays",
];

/// A buffer for building Java source with proper indentation
#[derive(Debug)]
pub struct JavaEmitter {
    buffer: String,
    indent_level: usize,
    indent_str: &'static str,
}

impl Default for JavaEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaEmitter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            indent_str: "    ",
        }
    }

    /// Render statements one per line.
    pub fn render(stmts: &[JavaStmt]) -> String {
        let mut emitter = Self::new();
        emitter.emit_all(stmts);
        emitter.finish()
    }

    /// Wrap statements in a class whose `main` creates the graph and runs them.
    pub fn harness(class_name: &str, stmts: &[JavaStmt], config: &TranslateConfig) -> String {
        let mut emitter = Self::new();
        for import in HARNESS_IMPORTS {
            emitter.line(&format!("import {};", import));
        }
        emitter.blank_line();
        emitter.block(&format!("public class {}", class_name), |e| {
            e.block("public static void main(String[] args)", |e| {
                e.line(&format!("FactorGraph {} = new FactorGraph();", config.graph_name));
                e.emit_all(stmts);
            });
        });
        emitter.finish()
    }

    pub fn finish(self) -> String {
        self.buffer
    }

    /// Write a line with current indentation
    pub fn line(&mut self, s: &str) {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent_str);
        }
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write a block with braces
    pub fn block<F>(&mut self, header: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(&format!("{} {{", header));
        self.indent();
        f(self);
        self.dedent();
        self.line("}");
    }

    pub fn emit(&mut self, stmt: &JavaStmt) {
        self.line(&stmt.to_string());
    }

    pub fn emit_all(&mut self, stmts: &[JavaStmt]) {
        for stmt in stmts {
            self.emit(stmt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve() -> Vec<JavaStmt> {
        vec![JavaStmt::Solve { graph: "myGraph".into() }]
    }

    #[test]
    fn test_render_has_no_header() {
        assert_eq!(JavaEmitter::render(&solve()), "myGraph.solve();\n");
        assert_eq!(JavaEmitter::render(&[]), "");
    }

    #[test]
    fn test_harness_wraps_statements() {
        let java = JavaEmitter::harness("Model", &solve(), &TranslateConfig::default());
        insta::assert_snapshot!(java, @r"
        import com.analog.lyric.dimple.factorfunctions.*;
        import com.analog.lyric.dimple.model.core.FactorGraph;
        import com.analog.lyric.dimple.model.domains.DiscreteDomain;
        import com.analog.lyric.dimple.model.variables.*;
        import java.util.Arrays;

        public class Model {
            public static void main(String[] args) {
                FactorGraph myGraph = new FactorGraph();
                myGraph.solve();
            }
        }
        ");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut emitter = JavaEmitter::new();
        emitter.dedent();
        emitter.line("x");
        assert_eq!(emitter.finish(), "x\n");
    }
}
