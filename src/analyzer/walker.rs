//! Depth-first tree walker and per-function analysis state.
//!
//! The walker dispatches on node kind, maintaining one frame per lexically
//! enclosing function definition. A frame collects loop statistics, outgoing
//! calls, the alias table, and the divide/decrease evidence gathered from
//! self-calls; it is finalized into a [`FunctionRecord`] (and, for recursive
//! functions, a [`RecurrenceEntry`]) when the definition node has been fully
//! traversed.

use tracing::debug;
use tree_sitter::Node;

use crate::types::{
    FunctionRecord, LoopKind, LoopRecord, Recurrence, RecurrenceEntry, RecurrenceModel, Summary,
};

use super::aliases::AliasTable;
use super::expr::{self, Reduction};
use super::node_utils::{identifier_text, is_simple_identifier, node_text};
use super::size_param::{self, SizeParam};

/// State for one function currently being traversed.
///
/// At the top level (outside any function definition) the frame has an empty
/// name and is never finalized; loop records encountered there still land in
/// the global list.
#[derive(Debug, Default)]
struct Frame {
    name: String,
    loop_depth: u32,
    max_loop_depth: u32,
    loop_count: u32,
    saw_recursive_call: bool,
    calls: Vec<String>,
    size_param: Option<SizeParam>,
    aliases: AliasTable,
    self_calls: u32,
    divide_b: Option<u32>,
    b_ambiguous: bool,
    decrease_c: Option<u32>,
}

impl Frame {
    fn named(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    fn in_function(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Depth-first walker over one parsed snippet.
pub struct Walker<'s> {
    source: &'s str,
    summary: Summary,
    frame: Frame,
}

impl<'s> Walker<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            summary: Summary::default(),
            frame: Frame::default(),
        }
    }

    /// Traverse the tree and return the finished summary.
    pub fn run(mut self, root: Node) -> Summary {
        self.visit(root);
        self.summary.publish_hint();
        self.summary
    }

    fn visit(&mut self, node: Node) {
        match node.kind() {
            "function_definition" => self.visit_function(node),
            "for_statement" => self.visit_loop(node, LoopKind::For),
            "while_statement" => self.visit_loop(node, LoopKind::While),
            "assignment_expression" | "init_declarator" => {
                self.track_alias(node);
                self.visit_children(node);
            }
            "call_expression" => self.visit_call(node),
            _ => self.visit_children(node),
        }
    }

    fn visit_children(&mut self, node: Node) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit(child);
        }
    }

    fn visit_function(&mut self, node: Node) {
        let name = node
            .child_by_field_name("declarator")
            .and_then(|declarator| identifier_text(declarator, self.source));
        let Some(name) = name else {
            // Degenerate definition with no name; analyze its body in the
            // enclosing frame rather than losing the traversal.
            self.visit_children(node);
            return;
        };

        let saved = std::mem::replace(&mut self.frame, Frame::named(name.to_string()));
        self.frame.size_param = size_param::select(node, self.source);
        debug!(
            function = %self.frame.name,
            size_param = ?self.frame.size_param,
            "entering function definition"
        );

        self.visit_children(node);

        let finished = std::mem::replace(&mut self.frame, saved);
        self.finalize_function(finished);
    }

    fn finalize_function(&mut self, frame: Frame) {
        let recurrence = frame.saw_recursive_call.then(|| build_recurrence(&frame));
        if let Some(rec) = &recurrence {
            self.summary
                .recurrences
                .push(RecurrenceEntry::new(frame.name.clone(), rec));
        }

        debug!(
            function = %frame.name,
            loops = frame.loop_count,
            max_depth = frame.max_loop_depth,
            recursive = frame.saw_recursive_call,
            "finished function definition"
        );

        let (size_param, size_param_index) = match frame.size_param {
            Some(param) => (Some(param.name), Some(param.index as u32)),
            None => (None, None),
        };
        self.summary.functions.push(FunctionRecord {
            name: frame.name,
            is_recursive: frame.saw_recursive_call,
            calls: frame.calls,
            loop_count: frame.loop_count,
            max_loop_depth: frame.max_loop_depth,
            size_param,
            size_param_index,
            recurrence,
        });
    }

    fn visit_loop(&mut self, node: Node, kind: LoopKind) {
        let depth = self.frame.loop_depth + 1;
        self.summary.loops.push(LoopRecord {
            kind,
            bound: "n".to_string(),
            depth,
        });
        self.frame.loop_count += 1;
        self.frame.max_loop_depth = self.frame.max_loop_depth.max(depth);

        self.frame.loop_depth = depth;
        self.visit_children(node);
        self.frame.loop_depth -= 1;
    }

    fn visit_call(&mut self, node: Node) {
        if let Some(target) = node.child_by_field_name("function") {
            let name = node_text(target, self.source);
            if !name.is_empty() {
                self.summary.calls.push(name.to_string());
                if self.frame.in_function() {
                    self.frame.calls.push(name.to_string());
                    if name == self.frame.name {
                        self.frame.saw_recursive_call = true;
                        self.frame.self_calls += 1;
                        self.analyze_self_call(node);
                    }
                }
            }
        }
        // Descend regardless: arguments may contain nested calls.
        self.visit_children(node);
    }

    /// Extract the size argument of a self-call and fold any recognized
    /// reduction into the frame's divide/decrease evidence.
    fn analyze_self_call(&mut self, call: Node) {
        let Some(param) = self.frame.size_param.clone() else {
            return;
        };
        let Some(args) = call.child_by_field_name("arguments") else {
            return;
        };

        let raw = node_text(args, self.source).trim();
        let inner = raw.strip_prefix('(').unwrap_or(raw);
        let inner = inner.strip_suffix(')').unwrap_or(inner);
        let Some(token) = inner.split(',').nth(param.index) else {
            return;
        };

        match expr::recognize(token, &param.name) {
            Some(reduction) => self.apply_reduction(reduction),
            None => {
                let token = token.trim();
                if is_simple_identifier(token) {
                    if let Some(reduction) = self.frame.aliases.lookup(token) {
                        debug!(alias = token, ?reduction, "resolved self-call argument");
                        self.apply_reduction(reduction);
                    }
                }
            }
        }
    }

    fn apply_reduction(&mut self, reduction: Reduction) {
        match reduction {
            Reduction::Divide { factor } => self.consider_divide(factor),
            Reduction::Decrease { amount } => self.consider_decrease(amount),
        }
    }

    /// Keep the smallest divide factor seen; differing factors across
    /// self-calls mark the evidence as ambiguous.
    fn consider_divide(&mut self, b: u32) {
        match self.frame.divide_b {
            None => self.frame.divide_b = Some(b),
            Some(prev) if prev != b => {
                self.frame.b_ambiguous = true;
                self.frame.divide_b = Some(prev.min(b));
            }
            Some(_) => {}
        }
    }

    fn consider_decrease(&mut self, c: u32) {
        self.frame.decrease_c = Some(match self.frame.decrease_c {
            None => c,
            Some(prev) => prev.min(c),
        });
    }

    /// Learn aliases from `assignment_expression` / `init_declarator` nodes
    /// whose RHS reduces the size parameter.
    fn track_alias(&mut self, node: Node) {
        let Some(param_name) = self
            .frame
            .size_param
            .as_ref()
            .map(|param| param.name.clone())
        else {
            return;
        };

        let (lhs, rhs) = match node.kind() {
            "assignment_expression" => (
                node.child_by_field_name("left")
                    .and_then(|left| identifier_text(left, self.source)),
                node.child_by_field_name("right")
                    .map(|right| node_text(right, self.source)),
            ),
            // init_declarator: the declarator precedes the value, so the
            // first identifier descendant is the declared name.
            _ => (
                identifier_text(node, self.source),
                node.child_by_field_name("value")
                    .map(|value| node_text(value, self.source)),
            ),
        };

        if let (Some(lhs), Some(rhs)) = (lhs, rhs) {
            if let Some(reduction) = expr::recognize(rhs, &param_name) {
                debug!(name = lhs, ?reduction, "recorded alias");
                self.frame.aliases.record(lhs, reduction);
            }
        }
    }
}

/// Work-per-level term from the deepest loop nesting in the body.
fn work_term(max_loop_depth: u32) -> String {
    match max_loop_depth {
        0 => "1".to_string(),
        1 => "n".to_string(),
        d => format!("n^{d}"),
    }
}

fn build_recurrence(frame: &Frame) -> Recurrence {
    let mut rec = Recurrence {
        a: frame.self_calls,
        f: work_term(frame.max_loop_depth),
        ..Default::default()
    };
    if let Some(c) = frame.decrease_c {
        rec.model = Some(RecurrenceModel::Decrease);
        rec.c = Some(c);
    }
    // Divide evidence overrides decrease; the decrement stays recorded.
    if let Some(b) = frame.divide_b {
        if b > 1 {
            rec.model = Some(RecurrenceModel::Divide);
            rec.b = Some(b);
        }
    }
    rec.b_ambiguous = frame.b_ambiguous;
    rec
}
