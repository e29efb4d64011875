//! Output formatting and reporting.
//!
//! Two modes: a human-readable terminal report with colors, and the raw JSON
//! document for machine consumption (`--json`).

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::types::{FunctionRecord, ParseResult, Recurrence, RecurrenceModel};

/// Render a recurrence the way a reader would write it on paper,
/// e.g. `T(n) = 2T(n/2) + n`.
pub fn render_recurrence(rec: &Recurrence) -> String {
    let a = rec.a;
    let f = &rec.f;
    let mut rendered = match rec.model {
        Some(RecurrenceModel::Divide) => {
            let b = rec.b.unwrap_or(2);
            format!("T(n) = {a}T(n/{b}) + {f}")
        }
        Some(RecurrenceModel::Decrease) => {
            let c = rec.c.unwrap_or(1);
            format!("T(n) = {a}T(n-{c}) + {f}")
        }
        None => format!("T(n) = {a}T(?) + {f}"),
    };
    if rec.b_ambiguous {
        rendered.push_str(" (divide factor ambiguous)");
    }
    rendered
}

/// Print the full JSON document.
pub fn print_json(result: &ParseResult, pretty: bool) -> Result<()> {
    let payload = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{payload}");
    Ok(())
}

/// Print a human-readable report for one analyzed file.
pub fn print_report(path: &Path, result: &ParseResult) {
    let summary = &result.summary;

    println!("{}", path.display().to_string().bold());
    println!(
        "  language: {}  root: {}",
        result.ast.language,
        result.ast.root_type.dimmed()
    );
    println!(
        "  functions: {}  loops: {}  calls: {}",
        summary.functions.len(),
        summary.loops.len(),
        summary.calls.len()
    );

    for func in &summary.functions {
        print_function(func);
    }

    if let Some(hint) = &summary.recurrence {
        println!(
            "  {} T(n) = {}T(n/{}) + {}",
            "recurrence:".green().bold(),
            hint.a,
            hint.b,
            hint.f
        );
    }
}

fn print_function(func: &FunctionRecord) {
    let marker = if func.is_recursive {
        " (recursive)".yellow().to_string()
    } else {
        String::new()
    };
    println!("  {}{}", func.name.bold(), marker);
    println!(
        "    loops: {} (max depth {})",
        func.loop_count, func.max_loop_depth
    );
    if !func.calls.is_empty() {
        println!("    calls: {}", func.calls.join(", "));
    }
    if let Some(param) = &func.size_param {
        println!("    size parameter: {param}");
    }
    if let Some(rec) = &func.recurrence {
        println!("    {}", render_recurrence(rec).green());
    }
}
