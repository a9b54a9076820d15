//! Optimizer driver and plan explanation.
//!
//! The driver does no rewriting of its own: it keeps offering the root its
//! `optimize` hook until the tree stops changing. Cost-based reordering
//! belongs to composite iterators, which see their children's stats.

use std::fmt;

use tracing::{debug, trace};

use super::config::EngineConfig;
use crate::iterator::{BoxedIterator, GraphIterator};

/// Drives `optimize` on an iterator tree to a fixpoint.
#[derive(Debug, Clone)]
pub struct Optimizer {
    max_passes: usize,
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Optimizer {
    /// Create an optimizer with the default pass cap.
    pub fn new() -> Self {
        Self { max_passes: 10 }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            max_passes: config.max_optimize_passes.max(1),
        }
    }

    /// Set the pass cap.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    /// Optimize `root`, returning the tree to evaluate.
    ///
    /// A replaced node is consumed by its own `optimize` call, so nothing
    /// here can touch it afterwards.
    pub fn optimize(&self, root: BoxedIterator) -> BoxedIterator {
        let mut current = root;

        for pass in 0..self.max_passes {
            let before = current.uid();
            let (replacement, changed) = current.optimize();

            if !changed {
                trace!(pass, uid = before, "iterator tree unchanged");
                return replacement;
            }

            debug!(
                pass,
                from = before,
                to = replacement.uid(),
                kind = %replacement.iterator_type(),
                "iterator replaced"
            );
            current = replacement;
        }

        debug!(max_passes = self.max_passes, "optimizer pass cap reached");
        current
    }
}

/// Displays an iterator tree with the cost each node reports.
pub struct Explain<'a>(pub &'a dyn GraphIterator);

impl fmt::Display for Explain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (size, exact) = self.0.size();
        writeln!(
            f,
            "Iterator tree (size: {}{}):",
            if exact { "" } else { "~" },
            size
        )?;
        format_node(f, self.0, 0)
    }
}

fn format_node(f: &mut fmt::Formatter<'_>, node: &dyn GraphIterator, indent: usize) -> fmt::Result {
    let stats = node.stats();
    writeln!(
        f,
        "{}{} #{} (size: {}, next: {}, check: {}, scan: {})",
        "  ".repeat(indent),
        node.iterator_type(),
        node.uid(),
        stats.size,
        stats.next_cost,
        stats.check_cost,
        stats.scan_cost()
    )?;

    for child in node.sub_iterators() {
        format_node(f, child, indent + 1)?;
    }

    Ok(())
}
