//! Asymptote - static analyzer that extracts algorithmic-complexity evidence
//! from C source text.
//!
//! Given a snippet of C code, the analyzer parses it with tree-sitter and
//! walks the syntax tree to produce a minimal AST descriptor plus a semantic
//! summary: loops, outgoing calls, per-function statistics, and, for
//! self-recursive functions, an inferred recurrence relation of the form
//! T(n) = aT(n/b) + f(n) or T(n) = aT(n-c) + f(n). Solving the recurrence
//! to a closed form is left to a downstream service.
//!
//! # Example
//!
//! ```
//! let result = asymptote::analyze(Some("c"), "int f(int n){ if(n<=1) return 1; return f(n-1); }");
//!
//! let func = &result.summary.functions[0];
//! assert!(func.is_recursive);
//! assert_eq!(func.recurrence.as_ref().unwrap().a, 1);
//! ```

pub mod analyzer;
pub mod cli;
pub mod error;
pub mod output;
pub mod server;
pub mod types;

pub use analyzer::CAnalyzer;
pub use error::{AnalyzeError, Result};
pub use types::{
    AstDescriptor, FunctionRecord, LoopKind, LoopRecord, ParseResult, Recurrence, RecurrenceEntry,
    RecurrenceHint, RecurrenceModel, Summary,
};

/// Analyze one snippet and return the AST descriptor and semantic summary.
///
/// This is the main entry point for one-off analysis. It constructs a fresh
/// parser per call; to analyze many snippets, create one [`CAnalyzer`] and
/// reuse it.
///
/// The call never fails: unsupported languages, empty code, and degenerate
/// parses all produce the empty-summary shape.
pub fn analyze(language: Option<&str>, code: &str) -> ParseResult {
    CAnalyzer::new().analyze(language, code)
}
