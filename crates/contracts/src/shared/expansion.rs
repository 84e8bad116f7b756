use crate::domain::a001_standard::CardKey;
use std::collections::HashMap;

/// Which cards currently show their detail panel. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionMap {
    expanded: HashMap<CardKey, bool>,
}

impl ExpansionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, key: &CardKey) -> bool {
        self.expanded.get(key).copied().unwrap_or(false)
    }

    /// Flips one card and returns its new state.
    pub fn toggle(&mut self, key: CardKey) -> bool {
        let entry = self.expanded.entry(key).or_insert(false);
        *entry = !*entry;
        *entry
    }

    pub fn expand_all(&mut self, keys: impl IntoIterator<Item = CardKey>) {
        for key in keys {
            self.expanded.insert(key, true);
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.values().filter(|v| **v).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: &str, grade: &str) -> CardKey {
        CardKey {
            code: code.to_string(),
            grade: grade.to_string(),
        }
    }

    #[test]
    fn test_toggle() {
        let mut map = ExpansionMap::new();
        assert!(!map.is_expanded(&key("ELAGSE5RL1", "Grade 5")));
        assert!(map.toggle(key("ELAGSE5RL1", "Grade 5")));
        assert!(map.is_expanded(&key("ELAGSE5RL1", "Grade 5")));
        assert!(!map.toggle(key("ELAGSE5RL1", "Grade 5")));
        assert!(!map.is_expanded(&key("ELAGSE5RL1", "Grade 5")));
    }

    #[test]
    fn test_same_code_different_grade_is_separate() {
        let mut map = ExpansionMap::new();
        map.toggle(key("RL1", "Grade 5"));
        assert!(map.is_expanded(&key("RL1", "Grade 5")));
        assert!(!map.is_expanded(&key("RL1", "Grade 6")));
    }

    #[test]
    fn test_expand_and_collapse_all() {
        let mut map = ExpansionMap::new();
        map.expand_all(vec![key("A1", "Grade 3"), key("B2", "Grade 4")]);
        assert_eq!(map.expanded_count(), 2);
        map.collapse_all();
        assert_eq!(map.expanded_count(), 0);
        assert!(!map.is_expanded(&key("A1", "Grade 3")));
    }
}
