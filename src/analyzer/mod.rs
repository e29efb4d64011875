//! C source analyzer using tree-sitter.
//!
//! Parses a snippet of C into a concrete syntax tree and walks it to produce
//! a minimal AST descriptor plus a semantic summary: per-function loop
//! statistics, outgoing calls, and, for self-recursive functions, an inferred
//! divide-and-conquer or decrease-and-conquer recurrence relation.

use std::cell::RefCell;

use tracing::warn;
use tree_sitter::Parser;

use crate::types::{AstDescriptor, ParseResult, Summary};

mod aliases;
mod expr;
mod node_utils;
mod size_param;
mod walker;


use walker::Walker;

/// C analyzer holding a reusable tree-sitter parser.
///
/// Analysis is synchronous and self-contained: each call owns a fresh syntax
/// tree and walker state, so one analyzer can serve sequential calls, and
/// independent invocations never share mutable state.
pub struct CAnalyzer {
    parser: RefCell<Parser>,
}

impl Default for CAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CAnalyzer {
    pub fn new() -> Self {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_c::LANGUAGE.into())
            .expect("tree-sitter-c grammar is compatible with the linked tree-sitter");

        Self {
            parser: RefCell::new(parser),
        }
    }

    /// Analyze a snippet and return the AST descriptor and summary.
    ///
    /// This never fails: an unsupported language, empty code, or a parse
    /// that produces no tree all yield the empty-summary shape with
    /// `rootType = "unknown"`.
    pub fn analyze(&self, language: Option<&str>, code: &str) -> ParseResult {
        let mut ast = AstDescriptor {
            language: language.unwrap_or("unknown").to_string(),
            root_type: "unknown".to_string(),
        };
        let mut summary = Summary::default();

        // Only C is supported; anything else gets the empty shape.
        if language != Some("c") || code.is_empty() {
            return ParseResult { ast, summary };
        }

        match self.parser.borrow_mut().parse(code, None) {
            Some(tree) => {
                let root = tree.root_node();
                ast.root_type = root.kind().to_string();
                summary = Walker::new(code).run(root);
            }
            None => {
                warn!("tree-sitter produced no tree; emitting empty summary");
            }
        }

        ParseResult { ast, summary }
    }
}
