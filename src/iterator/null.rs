//! The empty-set iterator.

use super::{next_uid, Base, BoxedIterator, GraphIterator};
use crate::graph::{Bindings, IteratorStats, Tagger, Type};

/// Matches nothing.
///
/// Planners substitute a `Null` for any branch that is statically known to
/// be empty, so the rest of the tree can short-circuit without treating
/// "no results" as an error.
#[derive(Debug)]
pub struct Null {
    base: Base,
    uid: u64,
    tags: Tagger,
}

impl Null {
    pub fn new() -> Self {
        Self {
            base: Base::new(),
            uid: next_uid(),
            tags: Tagger::new(),
        }
    }

    /// An empty iterator that still reports `tags`.
    pub fn with_tags(tags: Tagger) -> Self {
        Self {
            tags,
            ..Self::new()
        }
    }
}

impl Default for Null {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphIterator for Null {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn uid(&self) -> u64 {
        self.uid
    }

    fn iterator_type(&self) -> Type {
        Type::NULL
    }

    fn tagger(&self) -> &Tagger {
        &self.tags
    }

    fn tagger_mut(&mut self) -> &mut Tagger {
        &mut self.tags
    }

    fn tag_results(&self, dst: &mut Bindings) {
        self.tags.write_results(self.result(), dst);
    }

    fn stats(&self) -> IteratorStats {
        IteratorStats::ZERO
    }

    fn optimize(self: Box<Self>) -> (BoxedIterator, bool) {
        (self, false)
    }

    fn clone_box(&self) -> BoxedIterator {
        Box::new(Null::with_tags(self.tags.clone()))
    }

    fn close(&mut self) {}

    fn debug_string(&self, indent: usize) -> String {
        format!("{}(null)", " ".repeat(indent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Value;

    #[test]
    fn test_null_matches_nothing() {
        let mut it = Null::new();
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert!(!it.next_result());
        for v in [Value::Id(0), Value::from("anything"), Value::from("")] {
            assert!(!it.check(&v));
        }
        assert_eq!(it.result(), None);
    }

    #[test]
    fn test_null_stats_zero() {
        let it = Null::new();
        assert_eq!(it.stats(), IteratorStats::new(0, 0, 0));
        assert!(it.stats().is_zero());
        assert_eq!(it.size(), (0, true));
    }

    #[test]
    fn test_null_scenario() {
        let mut it = Null::new();
        assert_eq!(it.next(), None);
        assert!(!it.check(&Value::from("anything")));
        assert_eq!(it.stats(), IteratorStats::ZERO);

        let clone = it.clone_box();
        assert_eq!(clone.iterator_type(), Type::NULL);
        assert_eq!(clone.iterator_type().to_string(), "null");
        assert_ne!(clone.uid(), it.uid());
    }

    #[test]
    fn test_null_optimize_unchanged() {
        let it = Box::new(Null::new());
        let uid = it.uid();

        let (replacement, changed) = it.optimize();
        assert!(!changed);
        assert_eq!(replacement.uid(), uid);
        assert_eq!(replacement.iterator_type(), Type::NULL);
    }

    #[test]
    fn test_null_tag_results() {
        let mut it = Null::new();
        it.tagger_mut().add("y");
        it.tagger_mut().add_fixed("x", Value::from("v1"));

        let mut dst = Bindings::new();
        it.tag_results(&mut dst);

        assert_eq!(dst.get("x"), Some(&Some(Value::from("v1"))));
        assert_eq!(dst.get("y"), Some(&None));
    }

    #[test]
    fn test_null_clone_keeps_tags() {
        let mut it = Null::new();
        it.tagger_mut().add("n");

        let clone = it.clone_box();
        assert_eq!(clone.tagger(), it.tagger());
    }

    #[test]
    fn test_null_close_idempotent() {
        let mut it = Null::new();
        it.close();
        it.close();

        let mut used = Null::new();
        used.next();
        used.reset();
        used.close();
    }

    #[test]
    fn test_null_debug_string() {
        assert_eq!(Null::new().debug_string(0), "(null)");
        assert_eq!(Null::new().debug_string(3), "   (null)");
    }
}
