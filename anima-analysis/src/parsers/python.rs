//! Python parser using native tree-sitter.

use std::path::Path;

use tree_sitter::{Node, Parser, Tree};

use anima_core::errors::ParseError;

use super::error_tolerant::count_errors;

/// Python parser wrapping a tree-sitter instance.
///
/// Parser instances are not shareable across threads; create one per
/// worker and reuse it across calls.
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    /// Create a new Python parser.
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| ParseError::Grammar {
                message: e.to_string(),
            })?;
        Ok(Self { parser })
    }

    /// Parse one source unit into a measurable module.
    ///
    /// A tree containing ERROR or MISSING nodes is rejected: callers
    /// decide whether that is fatal (current working copy) or a skip
    /// (historical revision).
    pub fn parse(&mut self, source: &str, path: &Path) -> Result<ParsedModule, ParseError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ParseError::NoTree {
                path: path.to_path_buf(),
            })?;
        let error_count = count_errors(tree.root_node());
        if error_count > 0 {
            return Err(ParseError::Syntax {
                path: path.to_path_buf(),
                error_count,
            });
        }
        Ok(ParsedModule {
            tree,
            source: source.to_string(),
        })
    }
}

/// A successfully parsed source unit: the tree plus its source text.
#[derive(Debug)]
pub struct ParsedModule {
    tree: Tree,
    source: String,
}

impl ParsedModule {
    /// Root node of the module.
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source bytes backing the tree.
    pub fn source_bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }

    /// All function definitions in the module, in source order.
    ///
    /// Includes methods and nested functions at any depth.
    pub fn functions(&self) -> Vec<Node<'_>> {
        let mut out = Vec::new();
        collect_functions(self.tree.root_node(), &mut out);
        out
    }
}

fn collect_functions<'t>(node: Node<'t>, out: &mut Vec<Node<'t>>) {
    if node.kind() == "function_definition" {
        out.push(node);
    }
    let child_count = node.child_count();
    for i in 0..child_count {
        if let Some(child) = node.child(i) {
            collect_functions(child, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clean_module() {
        let mut parser = PythonParser::new().unwrap();
        let module = parser
            .parse("def hello():\n    return 1\n", Path::new("m.py"))
            .unwrap();
        assert_eq!(module.functions().len(), 1);
    }

    #[test]
    fn test_parse_rejects_syntax_errors() {
        let mut parser = PythonParser::new().unwrap();
        let err = parser
            .parse("def broken(:\n    pass\n", Path::new("m.py"))
            .unwrap_err();
        assert!(matches!(err, ParseError::Syntax { .. }));
    }

    #[test]
    fn test_nested_functions_collected() {
        let mut parser = PythonParser::new().unwrap();
        let module = parser
            .parse(
                "def outer():\n    def inner():\n        pass\n    return inner\n",
                Path::new("m.py"),
            )
            .unwrap();
        assert_eq!(module.functions().len(), 2);
    }
}
