//! Small node-level helpers shared by the walker and its passes.
//!
//! Text extraction borrows slices of the original input buffer; nothing here
//! allocates. Owned strings are produced only at the JSON boundary.

use tree_sitter::Node;

/// Source text covered by a node's byte span.
pub fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// Trim surrounding whitespace and a trailing `;` from an expression string.
pub fn trim_expr(text: &str) -> &str {
    text.trim().trim_end_matches(';').trim_end()
}

/// First node of the given kind in a depth-first walk, including `node`
/// itself.
pub fn first_descendant<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    if node.kind() == kind {
        return Some(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_descendant(child, kind) {
            return Some(found);
        }
    }
    None
}

/// Text of the first `identifier` descendant, if any.
pub fn identifier_text<'a>(node: Node, source: &'a str) -> Option<&'a str> {
    let text = node_text(first_descendant(node, "identifier")?, source);
    (!text.is_empty()).then_some(text)
}

/// True for a bare name: ASCII alphanumerics and underscores, no operators.
pub fn is_simple_identifier(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
