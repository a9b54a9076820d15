//! Data contracts shared by every iterator.
//!
//! These types sit at the boundary between the iterator tree and its
//! collaborators: the storage backend supplies [`Value`]s, the optimizer
//! consumes [`IteratorStats`], and the evaluator owns the [`Bindings`] that
//! iterators write their tags into.

mod error;
mod result_tree;
mod stats;
mod tagger;
mod types;
mod value;

pub use error::{GraphError, GraphResult};
pub use result_tree::ResultTree;
pub use stats::IteratorStats;
pub use tagger::{Bindings, Tagger};
pub use types::Type;
pub use value::Value;
