//! Frequency counting with deterministic, first-seen tie-breaking.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts over a sequence of items.
///
/// Insertion order is preserved so that ranking is deterministic for a
/// fixed input sequence: when two items have equal counts, the one that
/// first appeared earlier ranks higher.
#[derive(Debug, Clone)]
pub struct FrequencyTable<T: Eq + Hash + Clone> {
    counts: HashMap<T, usize>,
    /// Distinct items in first-seen order.
    order: Vec<T>,
    total: usize,
}

impl<T: Eq + Hash + Clone> FrequencyTable<T> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            order: Vec::new(),
            total: 0,
        }
    }

    /// Record one occurrence of an item.
    pub fn add(&mut self, item: T) {
        self.total += 1;
        match self.counts.entry(item) {
            Entry::Occupied(mut e) => *e.get_mut() += 1,
            Entry::Vacant(e) => {
                self.order.push(e.key().clone());
                e.insert(1);
            }
        }
    }

    /// Occurrences recorded for an item (0 if never seen).
    pub fn count(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Number of distinct items.
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Total occurrences recorded.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The `n` most frequent items with their counts, descending by count.
    ///
    /// Equal counts keep first-seen order (the sort is stable over the
    /// insertion sequence). Fewer than `n` distinct items returns all of
    /// them; `n = 0` returns an empty vector.
    pub fn top(&self, n: usize) -> Vec<(T, usize)> {
        let mut entries: Vec<(T, usize)> = self
            .order
            .iter()
            .map(|item| (item.clone(), self.counts[item]))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

impl<T: Eq + Hash + Clone> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> Extend<T> for FrequencyTable<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for FrequencyTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

/// Count `items` and return the `n` most frequent with their counts.
pub fn top_n<T, I>(items: I, n: usize) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    items.into_iter().collect::<FrequencyTable<T>>().top(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_basic() {
        let items = vec!["a", "a", "b", "c", "c", "c"];
        assert_eq!(top_n(items, 2), vec![("c", 3), ("a", 2)]);
    }

    #[test]
    fn test_top_n_zero() {
        assert!(top_n(vec!["a", "b"], 0).is_empty());
    }

    #[test]
    fn test_top_n_fewer_distinct_than_requested() {
        let ranked = top_n(vec!["x", "y", "x"], 10);
        assert_eq!(ranked, vec![("x", 2), ("y", 1)]);
    }

    #[test]
    fn test_tie_break_first_seen_wins() {
        // Both count 1; "y" appeared first.
        assert_eq!(top_n(vec!["y", "x"], 1), vec![("y", 1)]);
        // Higher count still beats earlier first appearance.
        assert_eq!(top_n(vec!["x", "y", "x", "y"], 1), vec![("x", 2)]);
    }

    #[test]
    fn test_tie_break_is_stable_across_many_ties() {
        let items = vec!["c", "a", "b", "c", "a", "b"];
        assert_eq!(top_n(items, 3), vec![("c", 2), ("a", 2), ("b", 2)]);
    }

    #[test]
    fn test_table_counts_and_sizes() {
        let table: FrequencyTable<&str> = ["get", "set", "get"].into_iter().collect();
        assert_eq!(table.count(&"get"), 2);
        assert_eq!(table.count(&"missing"), 0);
        assert_eq!(table.distinct(), 2);
        assert_eq!(table.total(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_owned_strings() {
        let items: Vec<String> = vec!["load".into(), "load".into(), "save".into()];
        let ranked = top_n(items, 10);
        assert_eq!(ranked[0], ("load".to_string(), 2));
        assert_eq!(ranked[1], ("save".to_string(), 1));
    }
}
