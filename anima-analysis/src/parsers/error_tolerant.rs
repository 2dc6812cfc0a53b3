//! Error counting: decide whether a tree is clean enough to measure.

use tree_sitter::Node;

/// Count ERROR and MISSING nodes in a tree-sitter tree.
pub fn count_errors(root: Node) -> u32 {
    let mut count = 0u32;
    collect_errors(root, &mut count);
    count
}

fn collect_errors(node: Node, count: &mut u32) {
    if node.is_error() || node.is_missing() {
        *count += 1;
    }
    let child_count = node.child_count();
    for i in 0..child_count {
        if let Some(child) = node.child(i) {
            collect_errors(child, count);
        }
    }
}
