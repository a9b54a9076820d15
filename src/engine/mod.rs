//! Clients of the iterator contract.
//!
//! Nothing here is part of the contract itself: the optimizer only calls
//! `optimize` and `stats`, and the executor only calls `next`,
//! `next_result` and `tag_results`. They are the smallest drivers that
//! exercise a tree end to end.

mod config;
mod error;
mod executor;
mod optimizer;
mod result;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use executor::Executor;
pub use optimizer::{Explain, Optimizer};
pub use result::ResultSet;
