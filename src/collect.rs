use std::collections::HashSet;

use crate::codegen::Node;

/// Distinct scope identifiers of a compiled expression, in left-to-right
/// first-appearance order. Identifiers that resolved to primitive-library
/// members never reach a `Scope` node and are not listed.
pub(crate) fn collect_vars(node: &Node) -> Vec<String> {
    fn walk(node: &Node, seen: &mut HashSet<String>, out: &mut Vec<String>) {
        match node {
            Node::Lit(_) | Node::Const(_) | Node::FnRef(_) => {}
            Node::Scope(name) => {
                if seen.insert(name.clone()) {
                    out.push(name.clone());
                }
            }
            Node::Unary(_, x) | Node::PowInt(x, _) => walk(x, seen, out),
            Node::Binary(_, a, b) => {
                walk(a, seen, out);
                walk(b, seen, out);
            }
        }
    }
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(node, &mut seen, &mut out);
    out
}
