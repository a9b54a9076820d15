//! The iterator contract every node of a query plan tree implements.
//!
//! An iterator is a lazy cursor over a set of graph values with two ways in:
//! sequential enumeration through [`GraphIterator::next`], and random-access
//! membership through [`GraphIterator::check`]. Composite iterators pick,
//! per child and per query shape, whichever of the two is cheaper; that
//! choice is driven by the cost triple each node reports from
//! [`GraphIterator::stats`].
//!
//! Concrete iterators embed a [`Base`] and get its behavior from the trait's
//! default methods, overriding only what their semantics require.

mod base;
mod fixed;
mod null;
mod uid;

use std::fmt;

use crate::graph::{Bindings, IteratorStats, Tagger, Type, Value};

pub use base::Base;
pub use fixed::Fixed;
pub use null::Null;
pub use uid::next_uid;

/// Boxed iterator for building trees with dynamic dispatch.
pub type BoxedIterator = Box<dyn GraphIterator>;

/// A node in the query plan tree.
///
/// # Traversal
///
/// `next` and `check` both move the current result: after either succeeds,
/// [`result`](GraphIterator::result) returns that value until the next
/// successful step. Before any successful step the result is `None`.
/// Exhaustion and non-membership are ordinary outcomes, not errors, and
/// calling `next` again after exhaustion keeps returning `None`.
///
/// # Ownership
///
/// Trees are strictly tree-shaped: a child belongs to exactly one parent.
/// [`clone_box`](GraphIterator::clone_box) builds an independent copy with
/// a fresh uid instead of sharing state.
///
/// # Thread Safety
///
/// Iterators are `Send` so a tree can be handed to another thread, but a
/// single instance is only ever driven by one caller at a time.
pub trait GraphIterator: fmt::Debug + Send {
    /// Shared state backing the default methods.
    fn base(&self) -> &Base;

    /// Mutable access to the shared state.
    fn base_mut(&mut self) -> &mut Base;

    /// Process-unique identity assigned at construction.
    fn uid(&self) -> u64;

    /// Which concrete kind this is.
    fn iterator_type(&self) -> Type;

    /// This node's tag registry.
    fn tagger(&self) -> &Tagger;

    /// Mutable access to this node's tag registry.
    fn tagger_mut(&mut self) -> &mut Tagger;

    /// Write every tag this node is responsible for into `dst`.
    ///
    /// Dynamic tags bind to the current result, fixed tags win on a name
    /// collision. Composites must recurse into their children.
    fn tag_results(&self, dst: &mut Bindings);

    /// Advance to the next value, or `None` once exhausted.
    fn next(&mut self) -> Option<Value> {
        None
    }

    /// Advance to an alternate binding for the current result.
    ///
    /// Leaves have no internal choice and always return `false`.
    fn next_result(&mut self) -> bool {
        false
    }

    /// Test whether `v` is in this iterator's result set.
    ///
    /// On success the current result becomes `v`.
    fn check(&mut self, _v: &Value) -> bool {
        false
    }

    /// The value most recently confirmed by `next` or `check`.
    fn result(&self) -> Option<&Value> {
        self.base().last()
    }

    /// Whether sequential traversal is worth attempting. Advisory only.
    fn can_next(&self) -> bool {
        self.base().can_next()
    }

    /// Element count estimate, and whether it is exact.
    fn size(&self) -> (u64, bool) {
        (0, true)
    }

    /// Cost triple for the optimizer.
    ///
    /// Defaults to [`IteratorStats::UNFAVORABLE`] so a kind that forgets to
    /// override it is never mistaken for a free one.
    fn stats(&self) -> IteratorStats {
        IteratorStats::UNFAVORABLE
    }

    /// Direct children, empty for leaves.
    fn sub_iterators(&self) -> Vec<&dyn GraphIterator> {
        Vec::new()
    }

    /// Offer a replacement for this node.
    ///
    /// When the flag is `true` the receiver has been consumed and the
    /// returned iterator takes its place. When `false` the returned iterator
    /// is the receiver itself.
    fn optimize(self: Box<Self>) -> (BoxedIterator, bool);

    /// An independent copy with a fresh uid and no traversal state.
    fn clone_box(&self) -> BoxedIterator;

    /// Return to the pre-traversal state, keeping configuration.
    fn reset(&mut self) {}

    /// Release external resources. Safe to call more than once.
    fn close(&mut self);

    /// Human-readable description of this node and its children.
    fn debug_string(&self, indent: usize) -> String {
        format!("{}(base)", " ".repeat(indent))
    }
}

impl Clone for BoxedIterator {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
