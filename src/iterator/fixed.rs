//! Leaf iterator over an explicit list of values.

use super::{next_uid, Base, BoxedIterator, GraphIterator, Null};
use crate::graph::{Bindings, IteratorStats, Tagger, Type, Value};

/// Enumerates a fixed list of values in insertion order.
///
/// Typically built by a planner for constants in a query, e.g. the subject
/// of `<alice> follows ?x`.
#[derive(Debug)]
pub struct Fixed {
    base: Base,
    uid: u64,
    tags: Tagger,
    values: Vec<Value>,
    position: usize,
}

impl Fixed {
    pub fn new(values: Vec<Value>) -> Self {
        Self {
            base: Base::new(),
            uid: next_uid(),
            tags: Tagger::new(),
            values,
            position: 0,
        }
    }

    /// Append a value to the end of the enumeration.
    pub fn add(&mut self, value: Value) {
        self.values.push(value);
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl GraphIterator for Fixed {
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
        Type::FIXED
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

    fn next(&mut self) -> Option<Value> {
        let value = self.values.get(self.position)?.clone();
        self.position += 1;
        self.base.set_last(value.clone());
        Some(value)
    }

    fn check(&mut self, v: &Value) -> bool {
        if self.values.contains(v) {
            self.base.set_last(v.clone());
            return true;
        }
        false
    }

    fn size(&self) -> (u64, bool) {
        (self.values.len() as u64, true)
    }

    // Check is a linear scan.
    fn stats(&self) -> IteratorStats {
        let n = self.values.len() as u64;
        IteratorStats::new(n, 1, n)
    }

    fn optimize(self: Box<Self>) -> (BoxedIterator, bool) {
        if self.values.is_empty() {
            return (Box::new(Null::with_tags(self.tags)), true);
        }
        (self, false)
    }

    fn clone_box(&self) -> BoxedIterator {
        let mut clone = Fixed::new(self.values.clone());
        clone.tags.copy_from(&self.tags);
        Box::new(clone)
    }

    fn reset(&mut self) {
        self.position = 0;
        self.base.clear_last();
    }

    fn close(&mut self) {}

    fn debug_string(&self, indent: usize) -> String {
        format!(
            "{}(fixed {} tags:{:?} size:{})",
            " ".repeat(indent),
            self.uid,
            self.tags.tags(),
            self.values.len()
        )
    }
}
