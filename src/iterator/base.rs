//! Shared state and default behavior for concrete iterators.

use crate::graph::Value;

/// State every iterator carries: its current result and the can-next hint.
///
/// Concrete kinds embed a `Base` and return it from
/// [`GraphIterator::base`](super::GraphIterator::base); the trait's default
/// methods then answer as "nothing here" until overridden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base {
    last: Option<Value>,
    can_next: bool,
}

impl Base {
    /// Fresh state: no result yet, and nextable.
    pub fn new() -> Self {
        Self {
            last: None,
            can_next: true,
        }
    }

    /// The current result.
    pub fn last(&self) -> Option<&Value> {
        self.last.as_ref()
    }

    /// Record a value confirmed by `next` or `check`.
    pub fn set_last(&mut self, value: Value) {
        self.last = Some(value);
    }

    /// Forget the current result.
    pub fn clear_last(&mut self) {
        self.last = None;
    }

    pub fn can_next(&self) -> bool {
        self.can_next
    }

    pub fn set_can_next(&mut self, value: bool) {
        self.can_next = value;
    }
}

impl Default for Base {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Bindings, IteratorStats, Tagger, Type};
    use crate::iterator::{next_uid, BoxedIterator, GraphIterator};

    /// Implements only what the trait requires, to observe the defaults.
    #[derive(Debug)]
    struct Bare {
        base: Base,
        uid: u64,
        tags: Tagger,
    }

    impl Bare {
        fn new() -> Self {
            Self {
                base: Base::new(),
                uid: next_uid(),
                tags: Tagger::new(),
            }
        }
    }

    impl GraphIterator for Bare {
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
            Type::register("bare")
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

        fn optimize(self: Box<Self>) -> (BoxedIterator, bool) {
            (self, false)
        }

        fn clone_box(&self) -> BoxedIterator {
            Box::new(Bare::new())
        }

        fn close(&mut self) {}
    }

    #[test]
    fn test_defaults_match_nothing() {
        let mut it = Bare::new();
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert!(!it.next_result());
        assert!(!it.check(&Value::Id(1)));
        assert_eq!(it.result(), None);
        assert!(it.sub_iterators().is_empty());
    }

    #[test]
    fn test_default_stats_unfavorable() {
        let it = Bare::new();
        assert_eq!(it.stats(), IteratorStats::new(100_000, 100_000, 100_000));
        assert_eq!(it.size(), (0, true));
    }

    #[test]
    fn test_can_next_is_advisory() {
        let mut it = Bare::new();
        assert!(it.can_next());

        it.base_mut().set_can_next(false);
        assert!(!it.can_next());
        // Traversal is still permitted.
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_result_reads_base() {
        let mut it = Bare::new();
        it.base_mut().set_last(Value::from("n1"));
        assert_eq!(it.result(), Some(&Value::from("n1")));

        it.base_mut().clear_last();
        assert_eq!(it.result(), None);
    }

    #[test]
    fn test_default_debug_string() {
        let it = Bare::new();
        assert_eq!(it.debug_string(2), "  (base)");
    }
}
