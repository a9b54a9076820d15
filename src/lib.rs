//! graphiter - the iterator core of a graph query engine
//!
//! A query plan is a tree of iterators, each a lazy cursor over graph
//! values. Every node honors the same dual-mode contract (sequential `next`
//! and random-access `check`), reports its own cost estimate, and writes its
//! tag bindings on demand, so arbitrary trees compose and can be rewritten
//! without type-specific knowledge.
//!
//! # Example
//!
//! ```
//! use graphiter::engine::Executor;
//! use graphiter::graph::Value;
//! use graphiter::iterator::{Fixed, GraphIterator};
//!
//! let mut it = Fixed::new(vec![Value::from("alice"), Value::from("bob")]);
//! it.tagger_mut().add("person");
//!
//! let results = Executor::default().execute(Box::new(it));
//! assert_eq!(results.len(), 2);
//! assert_eq!(results.value(0, "person"), Some(&Value::from("alice")));
//! ```

pub mod engine;
pub mod graph;
pub mod iterator;
