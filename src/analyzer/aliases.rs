//! Per-function alias tracking.
//!
//! Maps local variable names to the size reduction last assigned to them,
//! so that a self-call like `m(mid)` after `int mid = n/2;` still feeds
//! recurrence recognition. The table lives on the function frame and is
//! discarded when the function is left.

use std::collections::HashMap;

use super::expr::Reduction;

/// Local-variable → reduction table. Last-seen assignment wins.
#[derive(Debug, Default)]
pub struct AliasTable {
    entries: HashMap<String, Reduction>,
}

impl AliasTable {
    pub fn record(&mut self, name: &str, reduction: Reduction) {
        self.entries.insert(name.to_string(), reduction);
    }

    pub fn lookup(&self, name: &str) -> Option<Reduction> {
        self.entries.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_missing() {
        let table = AliasTable::default();
        assert!(table.is_empty());
        assert_eq!(table.lookup("mid"), None);
    }

    #[test]
    fn test_last_assignment_wins() {
        let mut table = AliasTable::default();
        table.record("mid", Reduction::Divide { factor: 2 });
        table.record("mid", Reduction::Decrease { amount: 1 });
        assert_eq!(table.lookup("mid"), Some(Reduction::Decrease { amount: 1 }));
    }

    #[test]
    fn test_independent_names() {
        let mut table = AliasTable::default();
        table.record("half", Reduction::Divide { factor: 2 });
        table.record("third", Reduction::Divide { factor: 3 });
        assert_eq!(table.lookup("half"), Some(Reduction::Divide { factor: 2 }));
        assert_eq!(table.lookup("third"), Some(Reduction::Divide { factor: 3 }));
    }
}
