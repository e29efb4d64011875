//! Type definitions for analysis results.
//!
//! Everything in here is a plain serializable document. Serialized key order
//! follows struct field declaration order, which downstream consumers rely on,
//! so new fields go at the end of the relevant struct.

use serde::{Deserialize, Serialize};

// Helper for serde skip_serializing_if (like Go's omitempty)
pub(crate) fn is_false(b: &bool) -> bool {
    !*b
}

/// Minimal descriptor of the parsed tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AstDescriptor {
    /// Input language string, or "unknown" when none was given.
    pub language: String,
    /// Root node type of the parse tree, or "unknown" when no tree was produced.
    #[serde(rename = "rootType")]
    pub root_type: String,
}

/// Loop construct kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopKind {
    For,
    While,
}

/// One loop encountered during traversal, in source order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoopRecord {
    pub kind: LoopKind,
    /// Placeholder bound; the bound expression is not analyzed at this stage.
    pub bound: String,
    /// 1-based nesting level at the point the loop is encountered.
    pub depth: u32,
}

/// Recurrence family: argument divided by a factor, or reduced by a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceModel {
    Divide,
    Decrease,
}

/// Recurrence evidence for one recursive function, embedded in its
/// [`FunctionRecord`].
///
/// `a` is the syntactic self-call count and `f` the per-level work term
/// derived from loop nesting. `b`/`c` are only present when the matching
/// model was inferred.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Recurrence {
    pub a: u32,
    pub f: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub b: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub model: Option<RecurrenceModel>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub c: Option<u32>,
    #[serde(skip_serializing_if = "is_false", default)]
    pub b_ambiguous: bool,
}

/// Top-level recurrence entry: the embedded form plus the function name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurrenceEntry {
    pub function: String,
    pub a: u32,
    pub f: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub b: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub model: Option<RecurrenceModel>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub c: Option<u32>,
    #[serde(skip_serializing_if = "is_false", default)]
    pub b_ambiguous: bool,
}

impl RecurrenceEntry {
    pub fn new(function: impl Into<String>, rec: &Recurrence) -> Self {
        Self {
            function: function.into(),
            a: rec.a,
            f: rec.f.clone(),
            b: rec.b,
            model: rec.model,
            c: rec.c,
            b_ambiguous: rec.b_ambiguous,
        }
    }
}

/// Convenience `{a, b, f}` triple published when exactly one divide-model
/// recurrence with b > 1 was found. Downstream solvers read this directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurrenceHint {
    pub a: u32,
    pub b: u32,
    pub f: String,
}

/// Per-function analysis record, in source traversal order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: String,
    pub is_recursive: bool,
    /// Outgoing call-target names, as written in source.
    pub calls: Vec<String>,
    #[serde(rename = "loopCount")]
    pub loop_count: u32,
    /// Deepest loop nesting observed lexically inside the body.
    #[serde(rename = "maxLoopDepth")]
    pub max_loop_depth: u32,
    #[serde(rename = "sizeParam", skip_serializing_if = "Option::is_none", default)]
    pub size_param: Option<String>,
    #[serde(
        rename = "sizeParamIndex",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub size_param_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recurrence: Option<Recurrence>,
}

/// Semantic summary of one analyzed snippet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summary {
    pub loops: Vec<LoopRecord>,
    pub calls: Vec<String>,
    pub functions: Vec<FunctionRecord>,
    pub recurrences: Vec<RecurrenceEntry>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recurrence: Option<RecurrenceHint>,
}

impl Summary {
    /// Publish the convenience `recurrence` hint when exactly one entry
    /// exists and it is a divide-model recurrence with b > 1.
    pub fn publish_hint(&mut self) {
        self.recurrence = None;
        if let [entry] = self.recurrences.as_slice() {
            if entry.model == Some(RecurrenceModel::Divide) {
                if let Some(b) = entry.b {
                    if b > 1 {
                        self.recurrence = Some(RecurrenceHint {
                            a: entry.a,
                            b,
                            f: entry.f.clone(),
                        });
                    }
                }
            }
        }
    }
}

/// Full analysis output: AST descriptor plus the semantic summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResult {
    pub ast: AstDescriptor,
    pub summary: Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_record_key_order_is_stable() {
        let record = FunctionRecord {
            name: "f".to_string(),
            is_recursive: true,
            calls: vec!["f".to_string()],
            loop_count: 0,
            max_loop_depth: 0,
            size_param: Some("n".to_string()),
            size_param_index: Some(0),
            recurrence: Some(Recurrence {
                a: 1,
                f: "1".to_string(),
                model: Some(RecurrenceModel::Decrease),
                c: Some(1),
                ..Default::default()
            }),
        };
        let json = serde_json::to_string(&record).unwrap();
        let keys = [
            "\"name\"",
            "\"is_recursive\"",
            "\"calls\"",
            "\"loopCount\"",
            "\"maxLoopDepth\"",
            "\"sizeParam\"",
            "\"sizeParamIndex\"",
            "\"recurrence\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    }

    #[test]
    fn recurrence_omits_absent_fields() {
        let rec = Recurrence {
            a: 2,
            f: "1".to_string(),
            b: Some(2),
            model: Some(RecurrenceModel::Divide),
            ..Default::default()
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, r#"{"a":2,"f":"1","b":2,"model":"divide"}"#);
    }

    #[test]
    fn recurrence_entry_keeps_decrement_alongside_divide() {
        let entry = RecurrenceEntry::new(
            "f",
            &Recurrence {
                a: 2,
                f: "n".to_string(),
                b: Some(2),
                model: Some(RecurrenceModel::Divide),
                c: Some(1),
                b_ambiguous: true,
            },
        );
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"function":"f","a":2,"f":"n","b":2,"model":"divide","c":1,"b_ambiguous":true}"#
        );
    }

    #[test]
    fn hint_requires_single_divide_entry() {
        let mut summary = Summary::default();
        summary.recurrences.push(RecurrenceEntry {
            function: "g".to_string(),
            a: 2,
            f: "1".to_string(),
            b: Some(2),
            model: Some(RecurrenceModel::Divide),
            c: None,
            b_ambiguous: false,
        });
        summary.publish_hint();
        assert_eq!(
            summary.recurrence,
            Some(RecurrenceHint {
                a: 2,
                b: 2,
                f: "1".to_string()
            })
        );

        // A second entry withdraws the hint.
        let extra = summary.recurrences[0].clone();
        summary.recurrences.push(extra);
        summary.publish_hint();
        assert!(summary.recurrence.is_none());
    }

    #[test]
    fn hint_absent_for_decrease_model() {
        let mut summary = Summary::default();
        summary.recurrences.push(RecurrenceEntry {
            function: "f".to_string(),
            a: 1,
            f: "1".to_string(),
            b: None,
            model: Some(RecurrenceModel::Decrease),
            c: Some(1),
            b_ambiguous: false,
        });
        summary.publish_hint();
        assert!(summary.recurrence.is_none());
    }
}
