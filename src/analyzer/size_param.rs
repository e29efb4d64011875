//! Size-parameter selection.
//!
//! For each function definition, one parameter is chosen as the input size:
//! a parameter literally named `n` if present, otherwise the rightmost
//! parameter whose declarator carries no pointer. Functions with neither get
//! no size parameter, and recurrence inference then cannot attribute a
//! divide factor or decrement.

use tree_sitter::Node;

use super::node_utils::{first_descendant, identifier_text, node_text};

/// Selected size parameter: name and 0-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeParam {
    pub name: String,
    pub index: usize,
}

/// Select the size parameter for a `function_definition` node.
pub fn select(func_def: Node, source: &str) -> Option<SizeParam> {
    let declarator = func_def.child_by_field_name("declarator")?;
    let param_list = first_descendant(declarator, "parameter_list")?;

    let mut params = Vec::new();
    let mut cursor = param_list.walk();
    for child in param_list.children(&mut cursor) {
        if child.kind() == "parameter_declaration" {
            params.push(child);
        }
    }

    // A parameter literally named `n` always wins.
    for (index, param) in params.iter().enumerate() {
        if identifier_text(*param, source) == Some("n") {
            return Some(SizeParam {
                name: "n".to_string(),
                index,
            });
        }
    }

    // Otherwise the rightmost non-pointer parameter.
    for (index, param) in params.iter().enumerate().rev() {
        if is_pointer_param(*param, source) {
            continue;
        }
        if let Some(name) = identifier_text(*param, source) {
            return Some(SizeParam {
                name: name.to_string(),
                index,
            });
        }
    }

    None
}

fn is_pointer_param(param: Node, source: &str) -> bool {
    first_descendant(param, "pointer_declarator").is_some()
        || node_text(param, source).contains('*')
}
