//! Legacy result-tree export.
//!
//! Older debug tooling expects a tree of current results shaped like the
//! iterator tree. New code should use tag bindings instead; this adapter is
//! derived purely from `result` and `sub_iterators` and holds no iterator
//! state of its own.

use std::fmt;

use serde::Serialize;

use super::value::Value;
use crate::iterator::GraphIterator;

/// Snapshot of the current result of every node in an iterator tree.
///
/// Deprecated: kept for compatibility with older debug tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultTree {
    pub result: Option<Value>,
    pub subtrees: Vec<ResultTree>,
}

impl ResultTree {
    /// Create a leaf node.
    pub fn new(result: Option<Value>) -> Self {
        Self {
            result,
            subtrees: Vec::new(),
        }
    }

    /// Append a child tree.
    pub fn add_subtree(&mut self, sub: ResultTree) {
        self.subtrees.push(sub);
    }

    /// Mirror `it` and its children.
    pub fn from_iterator(it: &dyn GraphIterator) -> Self {
        let mut tree = Self::new(it.result().cloned());
        for sub in it.sub_iterators() {
            tree.add_subtree(Self::from_iterator(sub));
        }
        tree
    }
}

impl fmt::Display for ResultTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Some(v) => write!(f, "({}", v)?,
            None => write!(f, "(_")?,
        }
        for sub in &self.subtrees {
            write!(f, " {}", sub)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterator::{Fixed, Null};

    #[test]
    fn test_display_nested() {
        let mut root = ResultTree::new(Some(Value::Id(1)));
        root.add_subtree(ResultTree::new(Some(Value::from("a"))));
        root.add_subtree(ResultTree::new(None));
        assert_eq!(root.to_string(), "(1 (a) (_))");
    }

    #[test]
    fn test_from_leaf_iterators() {
        let null = Null::new();
        assert_eq!(ResultTree::from_iterator(&null), ResultTree::new(None));

        let mut fixed = Fixed::new(vec![Value::Id(9)]);
        fixed.next();
        let tree = ResultTree::from_iterator(&fixed);
        assert_eq!(tree.result, Some(Value::Id(9)));
        assert!(tree.subtrees.is_empty());
    }
}
