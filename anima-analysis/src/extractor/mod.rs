//! Feature extraction — structural signal counts per function.
//!
//! A full tree walk, not a shallow scan: loop bodies, conditional
//! branches, and try/except arms all contribute counts.

pub mod identifiers;
pub mod signals;

use tree_sitter::Node;

use crate::parsers::ParsedModule;
use crate::vocabulary::{Dimension, Vocabulary};

use identifiers::split_identifier;
pub use signals::StructuralSignals;

/// Signals for one named function.
#[derive(Debug, Clone)]
pub struct FunctionSignals {
    pub name: String,
    pub signals: StructuralSignals,
}

/// Walks parsed modules and accumulates structural signals per function.
pub struct FeatureExtractor<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> FeatureExtractor<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Extract signals for every function in the module, in source order.
    ///
    /// A module with zero functions yields an empty list; that is not
    /// an error.
    pub fn extract(&self, module: &ParsedModule) -> Vec<FunctionSignals> {
        let source = module.source_bytes();
        module
            .functions()
            .iter()
            .map(|function| self.extract_function(*function, source))
            .collect()
    }

    fn extract_function(&self, function: Node<'_>, source: &[u8]) -> FunctionSignals {
        let name = function
            .child_by_field_name("name")
            .and_then(|n| n.utf8_text(source).ok())
            .unwrap_or("")
            .to_string();

        let mut signals = StructuralSignals::default();

        self.match_tokens(&name, &mut signals);

        if let Some(parameters) = function.child_by_field_name("parameters") {
            let count = parameters.named_child_count();
            for i in 0..count {
                if let Some(param) = parameters.named_child(i) {
                    if matches!(
                        param.kind(),
                        "typed_parameter" | "typed_default_parameter"
                    ) {
                        signals.type_hints += 1;
                    }
                }
            }
        }
        if function.child_by_field_name("return_type").is_some() {
            signals.type_hints += 1;
        }

        if let Some(body) = function.child_by_field_name("body") {
            signals.has_doc = has_docstring(body);
            self.visit(body, source, &mut signals);
        }

        FunctionSignals { name, signals }
    }

    /// Visit every node reachable from `node` exactly once.
    fn visit(&self, node: Node<'_>, source: &[u8], signals: &mut StructuralSignals) {
        match node.kind() {
            // Annotated assignments (`x: int = 1`) are plain assignments
            // here; only parameter and return annotations count as hints.
            "assignment" => signals.assignments += 1,
            "augmented_assignment" => signals.augmented_assignments += 1,
            "call" => {
                signals.calls += 1;
                if let Some(callee) = callee_name(node, source) {
                    self.match_tokens(callee, signals);
                }
            }
            "raise_statement" => signals.raises += 1,
            "delete_statement" => signals.deletes += 1,
            "for_statement" | "while_statement" => signals.loops += 1,
            "if_statement" | "elif_clause" => signals.conditionals += 1,
            "return_statement" => signals.returns += 1,
            "try_statement" => signals.tries += 1,
            "assert_statement" => signals.asserts += 1,
            _ => {}
        }

        let child_count = node.child_count();
        for i in 0..child_count {
            if let Some(child) = node.child(i) {
                self.visit(child, source, signals);
            }
        }
    }

    fn match_tokens(&self, identifier: &str, signals: &mut StructuralSignals) {
        for token in split_identifier(identifier) {
            match self.vocabulary.classify(&token) {
                Some(Dimension::Power) => signals.power_verb_hits += 1,
                Some(Dimension::Wisdom) => signals.wisdom_verb_hits += 1,
                None => {}
            }
        }
    }
}

/// The simple name of a call's target: `foo(...)` → foo, `a.b.foo(...)` → foo.
fn callee_name<'s>(call: Node<'_>, source: &'s [u8]) -> Option<&'s str> {
    let function = call.child_by_field_name("function")?;
    let name_node = match function.kind() {
        "identifier" => function,
        "attribute" => function.child_by_field_name("attribute")?,
        _ => return None,
    };
    name_node.utf8_text(source).ok()
}

/// True when the block's first statement is a bare string literal.
fn has_docstring(body: Node<'_>) -> bool {
    let Some(first) = body.named_child(0) else {
        return false;
    };
    if first.kind() != "expression_statement" {
        return false;
    }
    matches!(first.named_child(0).map(|n| n.kind()), Some("string"))
}
