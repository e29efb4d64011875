//! Size-reduction expression recognition.
//!
//! Recognizes exactly three idioms over a chosen parameter name: `n/k`,
//! `n>>k`, and `n-c`. Matching operates on raw substrings rather than
//! sub-trees; it tolerates formatting variation but deliberately does not
//! handle parentheses, compound arithmetic, or commuted forms.

use super::node_utils::trim_expr;

/// Shift amounts above this would overflow the divide factor.
const MAX_SHIFT: u32 = 29;

/// A recognized reduction applied to the size parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// Argument divided by a constant factor (`n/k`, `n>>k`).
    Divide { factor: u32 },
    /// Argument reduced by a constant (`n-c`).
    Decrease { amount: u32 },
}

/// Recognize a size reduction of `param` inside `expr`.
///
/// The idioms are tried in priority order: division, then right shift, then
/// subtraction. A candidate operator with an unparseable or out-of-range
/// operand yields no match rather than falling through to the next idiom.
pub fn recognize(expr: &str, param: &str) -> Option<Reduction> {
    let expr = trim_expr(expr);
    if param.is_empty() || !expr.contains(param) {
        return None;
    }

    if let Some(rest) = split_after(expr, "/") {
        let k = leading_int(rest)?;
        if k > 1 {
            return Some(Reduction::Divide { factor: k });
        }
        return None;
    }

    if let Some(rest) = split_after(expr, ">>") {
        let k = leading_int(rest)?.min(MAX_SHIFT);
        return Some(Reduction::Divide { factor: 1 << k });
    }

    if let Some(rest) = split_after(expr, "-") {
        let c = leading_int(rest)?;
        if c >= 1 {
            return Some(Reduction::Decrease { amount: c });
        }
        return None;
    }

    None
}

/// Suffix after the first occurrence of `op`, if present.
fn split_after<'a>(expr: &'a str, op: &str) -> Option<&'a str> {
    expr.find(op).map(|idx| &expr[idx + op.len()..])
}

/// Parse a leading decimal integer, skipping leading whitespace and
/// ignoring any trailing text (strtol-style).
fn leading_int(text: &str) -> Option<u32> {
    let text = text.trim_start();
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    if end == 0 {
        return None;
    }
    text[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_idiom() {
        assert_eq!(recognize("n/2", "n"), Some(Reduction::Divide { factor: 2 }));
        assert_eq!(
            recognize("  n / 3 ;", "n"),
            Some(Reduction::Divide { factor: 3 })
        );
    }

    #[test]
    fn test_divide_by_one_rejected() {
        assert_eq!(recognize("n/1", "n"), None);
        assert_eq!(recognize("n/0", "n"), None);
    }

    #[test]
    fn test_divide_wins_over_shift_and_minus() {
        // '/' takes priority even when other operators appear.
        assert_eq!(
            recognize("n-1/2", "n"),
            Some(Reduction::Divide { factor: 2 })
        );
    }

    #[test]
    fn test_shift_idiom() {
        assert_eq!(
            recognize("n>>1", "n"),
            Some(Reduction::Divide { factor: 2 })
        );
        assert_eq!(
            recognize("n >> 3", "n"),
            Some(Reduction::Divide { factor: 8 })
        );
        // Shift by zero is a divide factor of one; the walker ignores it
        // because divide evidence requires b > 1.
        assert_eq!(
            recognize("n>>0", "n"),
            Some(Reduction::Divide { factor: 1 })
        );
    }

    #[test]
    fn test_shift_amount_clamped() {
        assert_eq!(
            recognize("n>>40", "n"),
            Some(Reduction::Divide { factor: 1 << 29 })
        );
    }

    #[test]
    fn test_decrease_idiom() {
        assert_eq!(
            recognize("n-1", "n"),
            Some(Reduction::Decrease { amount: 1 })
        );
        assert_eq!(
            recognize("n - 2;", "n"),
            Some(Reduction::Decrease { amount: 2 })
        );
        assert_eq!(recognize("n-0", "n"), None);
    }

    #[test]
    fn test_param_must_appear() {
        assert_eq!(recognize("m/2", "n"), None);
        assert_eq!(recognize("mid", "n"), None);
        assert_eq!(recognize("", "n"), None);
    }

    #[test]
    fn test_pointer_arrow_is_not_a_decrement() {
        assert_eq!(recognize("n->len", "n"), None);
    }

    #[test]
    fn test_unparseable_operand_rejected() {
        assert_eq!(recognize("n/k", "n"), None);
        assert_eq!(recognize("n>>k", "n"), None);
        assert_eq!(recognize("n-m", "n"), None);
    }
}
