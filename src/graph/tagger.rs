//! Tag registry attached to every iterator.

use std::collections::{BTreeMap, HashMap};

use super::value::Value;

/// Destination for tag resolution, owned by the caller.
///
/// A dynamic tag on an iterator that has no current result is written as
/// `None`: the tag is still reported, it just has nothing bound to it.
pub type Bindings = HashMap<String, Option<Value>>;

/// Maps query variable names to values for one iterator.
///
/// Dynamic tags resolve to the iterator's current result; fixed tags are
/// bound once at construction and never change during traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tagger {
    tags: Vec<String>,
    fixed: BTreeMap<String, Value>,
}

impl Tagger {
    /// Create an empty tag registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dynamic tag.
    pub fn add(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Add a fixed tag bound to `value`.
    pub fn add_fixed(&mut self, tag: impl Into<String>, value: Value) {
        self.fixed.insert(tag.into(), value);
    }

    /// Dynamic tags in registration order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Fixed tags.
    pub fn fixed(&self) -> &BTreeMap<String, Value> {
        &self.fixed
    }

    /// True if no tag of either kind is registered.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.fixed.is_empty()
    }

    /// Copy every tag from `other` into this registry.
    pub fn copy_from(&mut self, other: &Tagger) {
        for tag in &other.tags {
            self.add(tag.clone());
        }
        for (tag, value) in &other.fixed {
            self.fixed.insert(tag.clone(), value.clone());
        }
    }

    /// Write this registry into `dst`, binding dynamic tags to `current`.
    ///
    /// Fixed tags are written last so they win on a name collision.
    pub fn write_results(&self, current: Option<&Value>, dst: &mut Bindings) {
        for tag in &self.tags {
            dst.insert(tag.clone(), current.cloned());
        }

        for (tag, value) in &self.fixed {
            dst.insert(tag.clone(), Some(value.clone()));
        }
    }
}
