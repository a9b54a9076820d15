//! Evaluation results.

use std::collections::BTreeSet;

use crate::graph::{Bindings, Value};

/// Tag bindings collected from an iterator tree, one row per match.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    /// Every tag name seen, sorted.
    pub columns: Vec<String>,
    /// One map of tag name to value per binding.
    pub rows: Vec<Bindings>,
}

impl ResultSet {
    /// Create a new empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from rows, collecting columns across all of them.
    pub fn from_rows(rows: Vec<Bindings>) -> Self {
        let columns: BTreeSet<String> = rows.iter().flat_map(|r| r.keys().cloned()).collect();
        Self {
            columns: columns.into_iter().collect(),
            rows,
        }
    }

    /// Add a row.
    pub fn push(&mut self, row: Bindings) {
        for tag in row.keys() {
            if let Err(pos) = self.columns.binary_search(tag) {
                self.columns.insert(pos, tag.clone());
            }
        }
        self.rows.push(row);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index.
    pub fn get(&self, index: usize) -> Option<&Bindings> {
        self.rows.get(index)
    }

    /// Value bound to `tag` in row `index`, if any.
    pub fn value(&self, index: usize, tag: &str) -> Option<&Value> {
        self.rows.get(index)?.get(tag)?.as_ref()
    }

    /// Iterate over rows.
    pub fn iter(&self) -> impl Iterator<Item = &Bindings> {
        self.rows.iter()
    }
}

impl IntoIterator for ResultSet {
    type Item = Bindings;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, Option<Value>)]) -> Bindings {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn test_push_tracks_columns() {
        let mut rs = ResultSet::new();
        rs.push(row(&[("b", Some(Value::Id(1)))]));
        rs.push(row(&[("a", None), ("b", Some(Value::Id(2)))]));

        assert_eq!(rs.columns, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(rs.len(), 2);
        assert_eq!(rs.value(1, "b"), Some(&Value::Id(2)));
        assert_eq!(rs.value(1, "a"), None);
        assert_eq!(rs.value(5, "a"), None);
    }

    #[test]
    fn test_from_rows() {
        let rs = ResultSet::from_rows(vec![row(&[("y", None)]), row(&[("x", None)])]);
        assert_eq!(rs.columns, vec!["x".to_string(), "y".to_string()]);
        assert!(!rs.is_empty());
        assert_eq!(rs.into_iter().count(), 2);
    }
}
