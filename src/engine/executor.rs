//! Pull-based evaluation of an iterator tree.

use tracing::debug;

use super::config::EngineConfig;
use super::optimizer::Optimizer;
use super::result::ResultSet;
use crate::graph::Bindings;
use crate::iterator::{BoxedIterator, GraphIterator};

/// Evaluates iterator trees into tag bindings.
#[derive(Debug, Clone, Default)]
pub struct Executor {
    config: EngineConfig,
}

impl Executor {
    /// Create an executor with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Optimize (if enabled), evaluate and close `root`.
    pub fn execute(&self, root: BoxedIterator) -> ResultSet {
        let mut root = if self.config.optimize {
            Optimizer::from_config(&self.config).optimize(root)
        } else {
            root
        };

        let results = self.collect(root.as_mut());
        root.close();
        results
    }

    /// Drain `root`, recording one row per binding.
    ///
    /// Each value from `next` yields a row, and every alternate binding
    /// reported by `next_result` for that value yields another.
    pub fn collect(&self, root: &mut dyn GraphIterator) -> ResultSet {
        let limit = self.config.result_limit.unwrap_or(usize::MAX);
        let mut results = ResultSet::new();

        // The limit is checked before every pull so the root is never
        // advanced past the last reported row.
        'values: while results.len() < limit && root.next().is_some() {
            loop {
                let mut row = Bindings::new();
                root.tag_results(&mut row);
                results.push(row);

                if results.len() >= limit {
                    debug!(limit, "result limit reached");
                    break 'values;
                }
                if !root.next_result() {
                    break;
                }
            }
        }

        debug!(rows = results.len(), uid = root.uid(), "evaluation finished");
        results
    }
}
